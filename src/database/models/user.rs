use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Caller privilege level. Stored as a nullable text column; anything that is
/// not a recognized role collapses to `None`, which keeps role checks
/// exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    None,
    Moderator,
    Admin,
}

impl Role {
    pub fn parse(value: Option<&str>) -> Role {
        match value {
            Some("moderator") => Role::Moderator,
            Some("admin") => Role::Admin,
            _ => Role::None,
        }
    }

    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Role::None => None,
            Role::Moderator => Some("moderator"),
            Role::Admin => Some("admin"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub role: Option<String>,
    pub membership_status: Option<String>,
    pub subscription_date: Option<DateTime<Utc>>,
    pub payment_id: Option<String>,
    pub subscription_amount: Option<f64>,
    pub coupon_used: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> Role {
        Role::parse(self.role.as_deref())
    }

    /// Active members are exempt from the free-tier product quota
    pub fn has_active_membership(&self) -> bool {
        self.membership_status.as_deref() == Some("active")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing_is_total() {
        assert_eq!(Role::parse(Some("moderator")), Role::Moderator);
        assert_eq!(Role::parse(Some("admin")), Role::Admin);
        assert_eq!(Role::parse(Some("superuser")), Role::None);
        assert_eq!(Role::parse(Some("")), Role::None);
        assert_eq!(Role::parse(None), Role::None);
    }

    #[test]
    fn role_round_trips_through_text() {
        for role in [Role::Moderator, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), role);
        }
        assert_eq!(Role::None.as_str(), None);
    }
}
