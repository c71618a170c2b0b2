pub mod loyalty_api;
pub mod order_api;

use async_trait::async_trait;

use crate::models::{CustomerProfileEnvelope, OrderSummary, TransactionHistoryEnvelope};

#[async_trait]
pub trait OrderProvider: Send + Sync {
    async fn order_summary(&self, order_id: &str) -> anyhow::Result<OrderSummary>;
}

#[async_trait]
pub trait LoyaltyProvider: Send + Sync {
    async fn customer_profile(&self, mobile: &str) -> anyhow::Result<CustomerProfileEnvelope>;
    async fn transaction_history(&self, mobile: &str)
        -> anyhow::Result<TransactionHistoryEnvelope>;
}
