use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Lifecycle state of a prescription.
///
/// Transitions are one-directional: Pending → Process → Selesai. The
/// Pending → Process step is guarded by stock availability and is the only
/// one with a stock side effect.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum PrescriptionStatus {
    Pending,
    Process,
    Selesai,
}

/// A single line of a prescription.
///
/// `name` and `price` are snapshots of the catalog taken when the
/// prescription was created; later catalog edits do not change them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionItem {
    pub medicine_id: String,
    pub name: String,
    pub qty: i32,
    pub price: i64,
    /// Dosage instruction, e.g. "3x1 after meals".
    pub signa: String,
}

/// One lifecycle event on a prescription, shown as history in the UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub status: PrescriptionStatus,
    pub time: DateTime<Utc>,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: String,
    pub patient_name: String,
    pub patient_dob: NaiveDate,
    pub allergies: String,
    pub doctor_name: String,
    pub date: NaiveDate,
    pub status: PrescriptionStatus,
    pub total_price: i64,
    pub items: Vec<PrescriptionItem>,
    pub history_logs: Vec<HistoryEntry>,
}
