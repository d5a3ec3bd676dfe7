use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::ToSchema;
use validator::Validate;

use crate::entities::Medicine;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::store::{HospitalStore, MedicineDraft};

/// Payload for registering a new medicine. The id is optional; the store
/// allocates an OBT-prefixed one when it is missing.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewMedicine {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: i32,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,
    /// ISO date, YYYY-MM-DD.
    pub expiry: String,
    #[serde(default)]
    pub location: String,
}

/// Catalog and stock-control operations.
#[derive(Clone)]
pub struct MedicineService {
    store: Arc<HospitalStore>,
    events: EventSender,
}

impl MedicineService {
    pub fn new(store: Arc<HospitalStore>, events: EventSender) -> Self {
        Self { store, events }
    }

    pub async fn list(&self) -> Vec<Medicine> {
        self.store.medicines().await
    }

    #[instrument(skip(self, req), fields(name = %req.name))]
    pub async fn create(&self, req: NewMedicine) -> Result<Medicine, ServiceError> {
        req.validate()?;
        let expiry = parse_date(&req.expiry, "expiry")?;

        let medicine = self
            .store
            .insert_medicine(MedicineDraft {
                id: req.id,
                name: req.name,
                kind: req.kind,
                stock: req.stock,
                price: req.price,
                expiry,
                location: req.location,
            })
            .await?;

        info!(medicine_id = %medicine.id, stock = medicine.stock, "medicine created");
        self.events
            .send(Event::MedicineCreated {
                medicine_id: medicine.id.clone(),
            })
            .await
            .map_err(ServiceError::EventError)?;
        Ok(medicine)
    }

    #[instrument(skip(self))]
    pub async fn restock(&self, id: &str, amount: i32) -> Result<Medicine, ServiceError> {
        let medicine = self.store.restock_medicine(id, amount).await?;

        info!(medicine_id = %medicine.id, amount, new_stock = medicine.stock, "medicine restocked");
        self.events
            .send(Event::MedicineRestocked {
                medicine_id: medicine.id.clone(),
                amount,
                new_stock: medicine.stock,
            })
            .await
            .map_err(ServiceError::EventError)?;
        Ok(medicine)
    }
}

pub(crate) fn parse_date(value: &str, field: &str) -> Result<NaiveDate, ServiceError> {
    value.parse::<NaiveDate>().map_err(|_| {
        ServiceError::ValidationError(format!(
            "{} must be an ISO date (YYYY-MM-DD), got '{}'",
            field, value
        ))
    })
}
