use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: Uuid,
    pub code: String,
    pub description: Option<String>,
    pub discount_amount: Option<f64>,
    pub expiry_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Coupon {
    /// A coupon is valid through the end of its expiry instant: only a
    /// strictly later `now` expires it.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expiry_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn coupon_expiring_at(expiry_date: DateTime<Utc>) -> Coupon {
        Coupon {
            id: Uuid::nil(),
            code: "LAUNCH20".to_string(),
            description: None,
            discount_amount: Some(20.0),
            expiry_date,
            created_at: expiry_date - Duration::days(30),
        }
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let now = Utc::now();
        let coupon = coupon_expiring_at(now);

        assert!(!coupon.is_expired(now));
        assert!(coupon.is_expired(now + Duration::seconds(1)));
        assert!(!coupon.is_expired(now - Duration::seconds(1)));
    }
}
