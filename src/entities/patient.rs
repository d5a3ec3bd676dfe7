use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum PatientStatus {
    Waiting,
    Examining,
}

/// A registered patient. Created by staff input, never mutated except removal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub dob: NaiveDate,
    pub status: PatientStatus,
    /// Free-text allergy note; "-" means none.
    pub allergies: String,
}
