use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Confirmed,
    Failed,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Confirmed => "Confirmed",
            PaymentStatus::Failed => "Failed",
        }
    }
}

/// A contribution to a campaign. Confirmed payments credit the member's
/// balance and award spins at the campaign rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub user_id: String,
    pub campaign_id: String,
    pub amount: f64,
    pub status: PaymentStatus,
    /// Spins credited when the payment was confirmed.
    pub spins_awarded: u32,
    pub created_at: DateTime<Utc>,
}

/// Member request to record a contribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub campaign_id: String,
    pub amount: f64,
}
