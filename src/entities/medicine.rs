use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A medicine catalog entry.
///
/// Stock is only ever mutated through a restock or by processing a
/// prescription; both paths leave a [`MutationLog`](super::MutationLog)
/// entry behind. Prices are integer rupiah.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Medicine {
    pub id: String,
    pub name: String,
    /// Dosage form, e.g. "Tablet" or "Sirup".
    #[serde(rename = "type")]
    pub kind: String,
    pub stock: i32,
    pub price: i64,
    pub expiry: NaiveDate,
    /// Shelf location, e.g. "Rak A1".
    pub location: String,
}
