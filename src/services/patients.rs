use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::ToSchema;
use validator::Validate;

use crate::entities::Patient;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::store::{HospitalStore, PatientDraft};

use super::medicines::parse_date;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewPatient {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// ISO date, YYYY-MM-DD.
    #[validate(length(min = 1, message = "dob must not be empty"))]
    pub dob: String,
    /// Empty input is normalized to "-".
    #[serde(default)]
    pub allergies: String,
}

#[derive(Clone)]
pub struct PatientService {
    store: Arc<HospitalStore>,
    events: EventSender,
}

impl PatientService {
    pub fn new(store: Arc<HospitalStore>, events: EventSender) -> Self {
        Self { store, events }
    }

    pub async fn list(&self) -> Vec<Patient> {
        self.store.patients().await
    }

    #[instrument(skip(self, req), fields(name = %req.name))]
    pub async fn register(&self, req: NewPatient) -> Result<Patient, ServiceError> {
        req.validate()?;
        let dob = parse_date(&req.dob, "dob")?;

        let patient = self
            .store
            .add_patient(PatientDraft {
                name: req.name,
                dob,
                allergies: req.allergies,
            })
            .await;

        info!(patient_id = %patient.id, "patient registered");
        self.events
            .send(Event::PatientRegistered {
                patient_id: patient.id.clone(),
            })
            .await
            .map_err(ServiceError::EventError)?;
        Ok(patient)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: &str) -> Result<(), ServiceError> {
        let patient = self.store.remove_patient(id).await?;

        info!(patient_id = %patient.id, "patient removed");
        self.events
            .send(Event::PatientRemoved {
                patient_id: patient.id,
            })
            .await
            .map_err(ServiceError::EventError)?;
        Ok(())
    }
}
