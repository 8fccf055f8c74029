use serde::{Deserialize, Serialize};

/// Per-category summary returned by the aggregate endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAggregate {
    pub average_price: f64,
    pub total_quantity: i64,
}
