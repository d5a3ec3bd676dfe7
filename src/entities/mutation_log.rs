use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Direction of a stock mutation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum MutationType {
    In,
    Out,
}

/// One entry in the append-only stock audit trail.
///
/// Every stock-affecting operation records exactly one entry per affected
/// medicine: restocks log `IN` with reference "Restock", prescription
/// processing logs `OUT` per item with the prescription id as reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MutationLog {
    pub id: u64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: MutationType,
    pub medicine_name: String,
    pub qty: i32,
    /// Free-text reference: a prescription id, or "Restock".
    #[serde(rename = "ref")]
    pub reference: String,
    /// Person in charge of the mutation.
    pub pic: String,
}
