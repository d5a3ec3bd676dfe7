//! Backend for the DokterBubung hospital dashboard.
//!
//! The core is a workflow engine over four in-memory collections (medicines,
//! prescriptions, patients, mutation logs): prescriptions move Pending →
//! Process → Selesai, the Pending → Process step atomically deducts medicine
//! stock, and every stock-affecting operation appends to an audit log. The
//! engine is exposed as a REST API under `/hospital`.

pub mod config;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod openapi;
pub mod services;
pub mod store;

use std::sync::Arc;

use events::EventSender;
use services::{LogService, MedicineService, PatientService, PrescriptionService};
use store::HospitalStore;

/// Shared handler state: one service per resource, all backed by the same
/// store and event channel.
#[derive(Clone)]
pub struct AppState {
    pub medicines: MedicineService,
    pub prescriptions: PrescriptionService,
    pub patients: PatientService,
    pub logs: LogService,
}

impl AppState {
    pub fn new(store: Arc<HospitalStore>, events: EventSender) -> Self {
        Self {
            medicines: MedicineService::new(store.clone(), events.clone()),
            prescriptions: PrescriptionService::new(store.clone(), events.clone()),
            patients: PatientService::new(store.clone(), events),
            logs: LogService::new(store),
        }
    }
}
