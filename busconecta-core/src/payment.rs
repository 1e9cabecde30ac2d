use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// How the passenger pays at the counter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Reference,
    BankTransfer,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Reference
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Processing,
    Succeeded,
    Failed,
}

/// One payment attempt. The idempotency key is minted per attempt so a
/// retried call can be recognized by a real provider.
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    pub idempotency_key: Uuid,
    pub method: PaymentMethod,
    /// Catalog prices are display strings (e.g. "15.000 Kz") and are
    /// passed through untouched.
    pub amount_display: String,
}

impl PaymentRequest {
    pub fn new(method: PaymentMethod, amount_display: String) -> Self {
        Self {
            idempotency_key: Uuid::new_v4(),
            method,
            amount_display,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub id: String, // Provider's ID (e.g., sim_7f9c...)
    pub idempotency_key: Uuid,
    pub status: PaymentStatus,
    pub confirmed_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("payment declined: {0}")]
    Declined(String),

    #[error("payment provider timed out")]
    TimedOut,
}

#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Run one payment attempt to completion.
    async fn process(&self, request: &PaymentRequest) -> Result<PaymentReceipt, PaymentError>;
}

/// Stand-in gateway: waits a fixed delay, then confirms. The delay is not
/// cancellable and never times out.
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Zero-delay gateway for tests and previews.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

#[async_trait]
impl PaymentProvider for SimulatedGateway {
    async fn process(&self, request: &PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
        tokio::time::sleep(self.delay).await;

        tracing::info!(
            "payment confirmed via {:?} for {}",
            request.method,
            request.amount_display
        );

        Ok(PaymentReceipt {
            id: format!("sim_{}", Uuid::new_v4().simple()),
            idempotency_key: request.idempotency_key,
            status: PaymentStatus::Succeeded,
            confirmed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_gateway_confirms() {
        let gateway = SimulatedGateway::instant();
        let request = PaymentRequest::new(PaymentMethod::Reference, "15.000 Kz".to_string());

        let receipt = gateway.process(&request).await.unwrap();

        assert_eq!(receipt.status, PaymentStatus::Succeeded);
        assert_eq!(receipt.idempotency_key, request.idempotency_key);
    }

    #[tokio::test]
    async fn test_each_request_gets_its_own_key() {
        let a = PaymentRequest::new(PaymentMethod::Reference, "1".to_string());
        let b = PaymentRequest::new(PaymentMethod::BankTransfer, "1".to_string());
        assert_ne!(a.idempotency_key, b.idempotency_key);
    }
}
