use serde::{Deserialize, Serialize};

/// Order-summary envelope as returned by the order provider. The provider
/// reports business-level status inside a 2xx body: `code` + `message`
/// signal whether the record exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub cancellation_reason: Option<String>,
    #[serde(default)]
    pub order_item_details: Vec<OrderItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub requested_quantity: Option<u32>,
    #[serde(default)]
    pub approved_quantity: Option<u32>,
}

impl OrderSummary {
    /// A 2xx transport result still has to carry this code/message pair to
    /// count as an existing order.
    pub fn data_found(&self) -> bool {
        self.code == 200 && self.message == "Data found."
    }
}
