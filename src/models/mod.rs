pub mod customer;
pub mod enrichment;
pub mod identifier;
pub mod intent;
pub mod order;

pub use customer::{
    CustomerData, CustomerProfileEnvelope, CustomerTransaction, LoyaltyAccount,
    TransactionHistoryEnvelope,
};
pub use enrichment::{EnrichedData, Enrichment};
pub use identifier::ExtractedIdentifier;
pub use intent::Intent;
pub use order::{OrderItem, OrderSummary};
