use serde::{Deserialize, Serialize};

/// Customer-profile envelope from the loyalty provider. `Success: false`
/// with a 2xx transport status means "no such customer".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerProfileEnvelope {
    pub success: bool,
    #[serde(default)]
    pub customer_data: Option<CustomerData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub available_credits: f64,
    #[serde(default)]
    pub earned_credits: f64,
    #[serde(default)]
    pub expired_credits: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionHistoryEnvelope {
    pub success: bool,
    #[serde(default)]
    pub transaction_data: Vec<CustomerTransaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerTransaction {
    #[serde(default)]
    pub business_unit: String,
    #[serde(default)]
    pub available_credits: f64,
    #[serde(default)]
    pub credits_earned: f64,
    #[serde(default)]
    pub transaction_date: String,
}

/// Profile and transaction history joined into one record. Only assembled
/// when both loyalty calls succeeded at transport and business level.
#[derive(Debug, Clone, Serialize)]
pub struct LoyaltyAccount {
    pub customer: CustomerData,
    pub transactions: Vec<CustomerTransaction>,
}
