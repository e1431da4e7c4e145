use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::config::PaymentConfig;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("invalid payment amount: {0}")]
    InvalidAmount(f64),

    #[error("payment secret key not configured")]
    MissingSecretKey,

    #[error("payment request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("payment gateway rejected the request ({status}): {message}")]
    Gateway { status: u16, message: String },

    #[error("payment gateway response carried no client secret")]
    MissingClientSecret,
}

/// Thin bridge to the Stripe payment-intents API. No local record of the
/// intent is kept; reconciliation is entirely the processor's concern.
#[derive(Clone)]
pub struct PaymentClient {
    http: reqwest::Client,
    secret_key: String,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct PaymentIntentResponse {
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GatewayErrorResponse {
    error: Option<GatewayErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GatewayErrorDetail {
    message: Option<String>,
}

impl PaymentClient {
    pub fn new(config: &PaymentConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: config.stripe_secret_key.clone(),
            api_base: config.stripe_api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Create a card payment intent in USD and return the processor-issued
    /// client secret.
    pub async fn create_payment_intent(&self, price: f64) -> Result<String, PaymentError> {
        if self.secret_key.is_empty() {
            return Err(PaymentError::MissingSecretKey);
        }

        let amount = amount_in_cents(price)?;

        let response = self
            .http
            .post(format!("{}/v1/payment_intents", self.api_base))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&[
                ("amount", amount.to_string()),
                ("currency", "usd".to_string()),
                ("payment_method_types[]", "card".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<GatewayErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|detail| detail.message)
                .unwrap_or_else(|| "unknown gateway error".to_string());
            return Err(PaymentError::Gateway {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<PaymentIntentResponse>()
            .await?
            .client_secret
            .ok_or(PaymentError::MissingClientSecret)
    }
}

/// Convert a decimal dollar price into integer cents, truncating any
/// sub-cent remainder.
pub fn amount_in_cents(price: f64) -> Result<i64, PaymentError> {
    let price_decimal = Decimal::try_from(price).map_err(|_| PaymentError::InvalidAmount(price))?;

    let cents = (price_decimal * Decimal::ONE_HUNDRED)
        .trunc()
        .to_i64()
        .ok_or(PaymentError::InvalidAmount(price))?;

    if cents < 1 {
        return Err(PaymentError::InvalidAmount(price));
    }

    Ok(cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_dollar_prices_convert_exactly() {
        assert_eq!(amount_in_cents(10.0).unwrap(), 1000);
        assert_eq!(amount_in_cents(1.0).unwrap(), 100);
    }

    #[test]
    fn typical_subscription_price_is_exact() {
        assert_eq!(amount_in_cents(49.99).unwrap(), 4999);
    }

    #[test]
    fn sub_cent_remainder_is_truncated() {
        assert_eq!(amount_in_cents(10.999).unwrap(), 1099);
        assert_eq!(amount_in_cents(0.019).unwrap(), 1);
    }

    #[test]
    fn non_positive_and_non_finite_amounts_are_rejected() {
        assert!(amount_in_cents(0.0).is_err());
        assert!(amount_in_cents(0.004).is_err());
        assert!(amount_in_cents(-5.0).is_err());
        assert!(amount_in_cents(f64::NAN).is_err());
        assert!(amount_in_cents(f64::INFINITY).is_err());
    }
}
