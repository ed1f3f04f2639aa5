use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time-boxed contribution drive. Contributions earn wheel spins at the
/// campaign's `amount_per_spin` rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub description: String,
    pub goal_amount: f64,
    pub collected_amount: f64,
    /// Contribution amount that earns one spin.
    pub amount_per_spin: f64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    /// Collection progress in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.goal_amount <= 0.0 {
            return 0.0;
        }
        ((self.collected_amount / self.goal_amount) as f32).clamp(0.0, 1.0)
    }

    /// Number of spins a contribution of `amount` earns in this campaign.
    pub fn spins_for(&self, amount: f64) -> u32 {
        if self.amount_per_spin <= 0.0 || amount <= 0.0 {
            return 0;
        }
        (amount / self.amount_per_spin).floor() as u32
    }
}

/// Admin request to open a new campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCampaignRequest {
    pub name: String,
    pub description: String,
    pub goal_amount: f64,
    pub amount_per_spin: f64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(goal: f64, collected: f64, per_spin: f64) -> Campaign {
        Campaign {
            id: "c1".to_string(),
            name: "School roof".to_string(),
            description: String::new(),
            goal_amount: goal,
            collected_amount: collected,
            amount_per_spin: per_spin,
            starts_at: Utc::now(),
            ends_at: Utc::now(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(campaign(1000.0, 500.0, 100.0).progress(), 0.5);
        assert_eq!(campaign(1000.0, 2500.0, 100.0).progress(), 1.0);
        assert_eq!(campaign(0.0, 500.0, 100.0).progress(), 0.0);
    }

    #[test]
    fn spins_round_down() {
        let c = campaign(1000.0, 0.0, 250.0);
        assert_eq!(c.spins_for(249.0), 0);
        assert_eq!(c.spins_for(250.0), 1);
        assert_eq!(c.spins_for(999.0), 3);
        assert_eq!(campaign(1000.0, 0.0, 0.0).spins_for(500.0), 0);
    }
}
