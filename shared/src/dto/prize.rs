use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A prize that can be won on the wheel. Stock is decremented server-side
/// when a spin lands on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    pub id: String,
    pub name: String,
    pub description: String,
    pub stock: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin request to add a prize to the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePrizeRequest {
    pub name: String,
    pub description: String,
    pub stock: u32,
}

/// Lifecycle of a prize once won on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WonPrizeStatus {
    /// Won on the wheel, not yet claimed by the member.
    Won,
    /// Claimed by the member, awaiting delivery.
    Claimed,
    /// Handed over by an admin.
    Delivered,
}

impl WonPrizeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WonPrizeStatus::Won => "Won",
            WonPrizeStatus::Claimed => "Claimed",
            WonPrizeStatus::Delivered => "Delivered",
        }
    }
}

/// A prize attributed to a user by a winning spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WonPrize {
    pub id: String,
    pub user_id: String,
    pub prize: Prize,
    pub status: WonPrizeStatus,
    pub won_at: DateTime<Utc>,
}
