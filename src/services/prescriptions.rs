use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use validator::Validate;

use crate::entities::Prescription;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::store::{HospitalStore, ItemDraft, PrescriptionDraft};

use super::medicines::parse_date;

/// One requested line of a prescription. Only the medicine id, quantity and
/// signa are taken from the client; name and price are snapshotted from the
/// catalog at creation time, so any client-supplied values are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewPrescriptionItem {
    pub medicine_id: String,
    pub qty: i32,
    #[serde(default)]
    pub signa: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewPrescription {
    #[validate(length(min = 1, message = "patient_name must not be empty"))]
    pub patient_name: String,
    /// ISO date, YYYY-MM-DD.
    #[validate(length(min = 1, message = "patient_dob must not be empty"))]
    pub patient_dob: String,
    #[serde(default)]
    pub allergies: String,
    #[validate(length(min = 1, message = "doctor_name must not be empty"))]
    pub doctor_name: String,
    #[validate(length(min = 1, message = "prescription needs at least one item"))]
    pub items: Vec<NewPrescriptionItem>,
}

/// The prescription lifecycle: Pending → Process → Selesai.
#[derive(Clone)]
pub struct PrescriptionService {
    store: Arc<HospitalStore>,
    events: EventSender,
}

impl PrescriptionService {
    pub fn new(store: Arc<HospitalStore>, events: EventSender) -> Self {
        Self { store, events }
    }

    pub async fn list(&self) -> Vec<Prescription> {
        self.store.prescriptions().await
    }

    #[instrument(skip(self, req), fields(patient = %req.patient_name))]
    pub async fn create(&self, req: NewPrescription) -> Result<Prescription, ServiceError> {
        req.validate()?;
        let patient_dob = parse_date(&req.patient_dob, "patient_dob")?;

        let items = req
            .items
            .into_iter()
            .map(|item| ItemDraft {
                medicine_id: item.medicine_id,
                qty: item.qty,
                signa: item.signa,
            })
            .collect();

        let prescription = self
            .store
            .create_prescription(PrescriptionDraft {
                patient_name: req.patient_name,
                patient_dob,
                allergies: req.allergies,
                doctor_name: req.doctor_name,
                items,
            })
            .await?;

        info!(
            prescription_id = %prescription.id,
            total_price = prescription.total_price,
            items = prescription.items.len(),
            "prescription created"
        );
        self.events
            .send(Event::PrescriptionCreated {
                prescription_id: prescription.id.clone(),
                total_price: prescription.total_price,
            })
            .await
            .map_err(ServiceError::EventError)?;
        Ok(prescription)
    }

    /// Pending → Process: deducts stock for every item, all-or-nothing.
    #[instrument(skip(self))]
    pub async fn process(&self, id: &str) -> Result<Prescription, ServiceError> {
        let prescription = self.store.process_prescription(id).await?;

        info!(prescription_id = %prescription.id, "prescription processing, stock deducted");
        self.events
            .send(Event::PrescriptionProcessed {
                prescription_id: prescription.id.clone(),
                items: prescription.items.len(),
            })
            .await
            .map_err(ServiceError::EventError)?;
        Ok(prescription)
    }

    /// Process → Selesai: terminal, no stock effect.
    #[instrument(skip(self))]
    pub async fn finish(&self, id: &str) -> Result<Prescription, ServiceError> {
        let prescription = self.store.finish_prescription(id).await?;

        info!(prescription_id = %prescription.id, "prescription finished");
        self.events
            .send(Event::PrescriptionFinished {
                prescription_id: prescription.id.clone(),
            })
            .await
            .map_err(ServiceError::EventError)?;
        Ok(prescription)
    }
}
