use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::prize::Prize;

/// One resolved invocation of the wheel. The outcome is decided entirely
/// server-side; `prize` is `None` for a losing spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize: Option<Prize>,
    pub created_at: DateTime<Utc>,
}

/// Response of `POST /spins/spin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    pub spin: Spin,
    pub remaining_spins: u32,
}

/// Response of `GET /spins/balance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinBalance {
    pub available_spins: u32,
    pub earned_total: u32,
    pub used_total: u32,
}
