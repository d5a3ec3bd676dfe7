//! Owned in-memory store for the hospital collections.
//!
//! All four collections live behind one writer lock, so every mutating
//! operation is atomic: a failed stock check aborts the whole call with no
//! partial decrements and no log entries, and two concurrent processing
//! requests cannot race past the stock-sufficiency check.

mod state;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::info;

use crate::entities::{Medicine, MutationLog, Patient, Prescription};
use crate::errors::ServiceError;

pub use state::{ItemDraft, MedicineDraft, PatientDraft, PrescriptionDraft};
use state::StoreState;

/// PIC recorded on OUT logs written while processing a prescription.
pub const PROCESS_PIC: &str = "Apoteker";
/// PIC recorded on IN logs written by a restock.
pub const RESTOCK_PIC: &str = "Staff Gudang";
/// Reference recorded on restock logs.
pub const RESTOCK_REF: &str = "Restock";

#[derive(Default)]
pub struct HospitalStore {
    inner: RwLock<StoreState>,
}

impl HospitalStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- medicines ----

    pub async fn medicines(&self) -> Vec<Medicine> {
        self.inner.read().await.medicines().to_vec()
    }

    pub async fn medicine(&self, id: &str) -> Option<Medicine> {
        self.inner.read().await.medicine(id).cloned()
    }

    pub async fn insert_medicine(&self, draft: MedicineDraft) -> Result<Medicine, ServiceError> {
        self.inner.write().await.insert_medicine(draft)
    }

    pub async fn restock_medicine(&self, id: &str, amount: i32) -> Result<Medicine, ServiceError> {
        self.inner.write().await.restock(id, amount)
    }

    // ---- prescriptions ----

    pub async fn prescriptions(&self) -> Vec<Prescription> {
        self.inner.read().await.prescriptions().to_vec()
    }

    pub async fn prescription(&self, id: &str) -> Option<Prescription> {
        self.inner.read().await.prescription(id).cloned()
    }

    pub async fn create_prescription(
        &self,
        draft: PrescriptionDraft,
    ) -> Result<Prescription, ServiceError> {
        self.inner.write().await.create_prescription(draft)
    }

    pub async fn process_prescription(&self, id: &str) -> Result<Prescription, ServiceError> {
        self.inner.write().await.process_prescription(id)
    }

    pub async fn finish_prescription(&self, id: &str) -> Result<Prescription, ServiceError> {
        self.inner.write().await.finish_prescription(id)
    }

    // ---- patients ----

    pub async fn patients(&self) -> Vec<Patient> {
        self.inner.read().await.patients().to_vec()
    }

    pub async fn add_patient(&self, draft: PatientDraft) -> Patient {
        self.inner.write().await.add_patient(draft)
    }

    pub async fn remove_patient(&self, id: &str) -> Result<Patient, ServiceError> {
        self.inner.write().await.remove_patient(id)
    }

    // ---- logs ----

    pub async fn logs(&self) -> Vec<MutationLog> {
        self.inner.read().await.logs_newest_first()
    }

    /// Seeds the demo catalog and patient registry the dashboard ships with.
    /// Skipped when the store already holds data; returns whether it ran.
    pub async fn seed_demo_data(&self) -> bool {
        let mut state = self.inner.write().await;
        if !state.medicines().is_empty() {
            info!("store already holds data, skipping demo seed");
            return false;
        }

        let medicines = [
            ("OBT001", "Amoxicillin 500mg", "Tablet", 50, 15_000, date(2026, 5, 20), "Rak A1"),
            ("OBT002", "Paracetamol 500mg", "Tablet", 120, 5_000, date(2027, 1, 15), "Rak A2"),
            ("OBT003", "OBH Combi Anak", "Sirup", 8, 25_000, date(2025, 8, 10), "Rak B1"),
            ("OBT004", "Vitamin C 1000mg", "Tablet", 80, 45_000, date(2025, 7, 1), "Rak C1"),
            ("OBT005", "Simvastatin 10mg", "Tablet", 5, 30_000, date(2025, 11, 5), "Rak A3"),
        ];
        for (id, name, kind, stock, price, expiry, location) in medicines {
            state.seed_medicine(Medicine {
                id: id.to_string(),
                name: name.to_string(),
                kind: kind.to_string(),
                stock,
                price,
                expiry,
                location: location.to_string(),
            });
        }

        let patients = [
            ("Siti Aminah", date(1990, 1, 1), "Seafood"),
            ("Rahmat Hidayat", date(1988, 5, 12), "-"),
            ("Joko Widodo", date(1975, 10, 20), "Penicillin"),
        ];
        for (name, dob, allergies) in patients {
            state.add_patient(PatientDraft {
                name: name.to_string(),
                dob,
                allergies: allergies.to_string(),
            });
        }

        info!(
            medicines = state.medicines().len(),
            patients = state.patients().len(),
            "seeded demo data"
        );
        true
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid literal date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_seed_runs_once_on_an_empty_store() {
        let store = HospitalStore::new();
        assert!(store.seed_demo_data().await);
        assert!(!store.seed_demo_data().await);

        assert_eq!(store.medicines().await.len(), 5);
        assert_eq!(store.patients().await.len(), 3);

        let medicine = store.medicine("OBT003").await.expect("seeded medicine");
        assert_eq!(medicine.name, "OBH Combi Anak");
        assert_eq!(medicine.stock, 8);

        let patients = store.patients().await;
        assert_eq!(patients[0].id, "P-001");
        assert_eq!(patients[1].allergies, "-");
    }
}
