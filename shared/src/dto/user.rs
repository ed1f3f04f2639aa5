use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role attached to every account. Determines which screens and
/// management operations the client exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    /// Human-readable label for table cells and headers.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Member => "Member",
        }
    }
}

/// User identity and profile record.
///
/// Created by the backend on account creation; the client only holds a
/// cached copy and never mutates it locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    /// Contribution balance, in the community currency.
    pub balance: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Admin request to create an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: Role,
}

/// Partial update; omitted fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::Member).unwrap(), "\"member\"");
        let parsed: Role = serde_json::from_str("\"member\"").unwrap();
        assert_eq!(parsed, Role::Member);
    }

    #[test]
    fn update_request_omits_unset_fields() {
        let update = UpdateUserRequest {
            is_active: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, "{\"is_active\":false}");
    }
}
