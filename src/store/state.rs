use chrono::{NaiveDate, Utc};
use rand::Rng;

use crate::entities::{
    HistoryEntry, Medicine, MutationLog, MutationType, Patient, PatientStatus, Prescription,
    PrescriptionItem, PrescriptionStatus,
};
use crate::errors::ServiceError;

use super::{PROCESS_PIC, RESTOCK_PIC, RESTOCK_REF};

/// Logs are returned newest-first and capped, matching the original backend.
const LOG_FETCH_LIMIT: usize = 100;

/// Input for creating a medicine. An empty id means the store allocates one.
#[derive(Debug, Clone)]
pub struct MedicineDraft {
    pub id: Option<String>,
    pub name: String,
    pub kind: String,
    pub stock: i32,
    pub price: i64,
    pub expiry: NaiveDate,
    pub location: String,
}

#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub medicine_id: String,
    pub qty: i32,
    pub signa: String,
}

#[derive(Debug, Clone)]
pub struct PrescriptionDraft {
    pub patient_name: String,
    pub patient_dob: NaiveDate,
    pub allergies: String,
    pub doctor_name: String,
    pub items: Vec<ItemDraft>,
}

#[derive(Debug, Clone)]
pub struct PatientDraft {
    pub name: String,
    pub dob: NaiveDate,
    pub allergies: String,
}

/// The collections themselves. Methods are synchronous and all-or-nothing;
/// the async wrapper in `store::HospitalStore` holds the lock around each one.
#[derive(Debug, Default)]
pub struct StoreState {
    medicines: Vec<Medicine>,
    prescriptions: Vec<Prescription>,
    patients: Vec<Patient>,
    logs: Vec<MutationLog>,
    next_log_id: u64,
}

impl StoreState {
    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    pub fn medicine(&self, id: &str) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.id == id)
    }

    pub fn insert_medicine(&mut self, draft: MedicineDraft) -> Result<Medicine, ServiceError> {
        let id = match draft.id {
            Some(id) if !id.trim().is_empty() => {
                if self.medicine(&id).is_some() {
                    return Err(ServiceError::ValidationError(format!(
                        "medicine {} already exists",
                        id
                    )));
                }
                id
            }
            _ => self.next_medicine_id(),
        };

        let medicine = Medicine {
            id,
            name: draft.name,
            kind: draft.kind,
            stock: draft.stock,
            price: draft.price,
            expiry: draft.expiry,
            location: draft.location,
        };
        self.medicines.push(medicine.clone());
        Ok(medicine)
    }

    /// Bypasses id allocation; used only by the demo seeder.
    pub fn seed_medicine(&mut self, medicine: Medicine) {
        self.medicines.push(medicine);
    }

    pub fn restock(&mut self, id: &str, amount: i32) -> Result<Medicine, ServiceError> {
        if amount <= 0 {
            return Err(ServiceError::ValidationError(format!(
                "restock amount must be positive, got {}",
                amount
            )));
        }
        let pos = self
            .medicines
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| ServiceError::NotFound(format!("medicine {} not found", id)))?;

        self.medicines[pos].stock += amount;
        let medicine = self.medicines[pos].clone();
        self.push_log(
            MutationType::In,
            medicine.name.clone(),
            amount,
            RESTOCK_REF.to_string(),
            RESTOCK_PIC,
        );
        Ok(medicine)
    }

    pub fn prescriptions(&self) -> &[Prescription] {
        &self.prescriptions
    }

    pub fn prescription(&self, id: &str) -> Option<&Prescription> {
        self.prescriptions.iter().find(|p| p.id == id)
    }

    /// Creates a prescription in Pending state. Snapshots the catalog's
    /// current name and price onto every item; stock is not touched here.
    pub fn create_prescription(
        &mut self,
        draft: PrescriptionDraft,
    ) -> Result<Prescription, ServiceError> {
        if draft.items.is_empty() {
            return Err(ServiceError::ValidationError(
                "prescription needs at least one item".to_string(),
            ));
        }

        let mut items = Vec::with_capacity(draft.items.len());
        let mut total_price = 0i64;
        for item in &draft.items {
            if item.qty < 1 {
                return Err(ServiceError::ValidationError(format!(
                    "qty for {} must be at least 1, got {}",
                    item.medicine_id, item.qty
                )));
            }
            let medicine = self.medicine(&item.medicine_id).ok_or_else(|| {
                ServiceError::NotFound(format!("medicine {} not found", item.medicine_id))
            })?;
            total_price += medicine.price * i64::from(item.qty);
            items.push(PrescriptionItem {
                medicine_id: medicine.id.clone(),
                name: medicine.name.clone(),
                qty: item.qty,
                price: medicine.price,
                signa: item.signa.clone(),
            });
        }

        let now = Utc::now();
        let prescription = Prescription {
            id: self.next_prescription_id(),
            patient_name: draft.patient_name,
            patient_dob: draft.patient_dob,
            allergies: draft.allergies,
            doctor_name: draft.doctor_name,
            date: now.date_naive(),
            status: PrescriptionStatus::Pending,
            total_price,
            items,
            history_logs: vec![HistoryEntry {
                status: PrescriptionStatus::Pending,
                time: now,
                note: "Prescription created".to_string(),
            }],
        };
        self.prescriptions.push(prescription.clone());
        Ok(prescription)
    }

    /// Pending → Process. Checks stock for every item before decrementing
    /// anything; on failure nothing changes. Writes one OUT log per item.
    pub fn process_prescription(&mut self, id: &str) -> Result<Prescription, ServiceError> {
        let idx = self
            .prescriptions
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ServiceError::NotFound(format!("prescription {} not found", id)))?;

        let status = self.prescriptions[idx].status;
        if status != PrescriptionStatus::Pending {
            return Err(ServiceError::InvalidTransition(format!(
                "prescription {} is {}, only Pending prescriptions can be processed",
                id, status
            )));
        }

        // Check everything first so a shortfall aborts with zero side effects.
        let items = self.prescriptions[idx].items.clone();
        let mut medicine_idx = Vec::with_capacity(items.len());
        for item in &items {
            let pos = self
                .medicines
                .iter()
                .position(|m| m.id == item.medicine_id)
                .ok_or_else(|| {
                    ServiceError::NotFound(format!("medicine {} not found", item.medicine_id))
                })?;
            let available = self.medicines[pos].stock;
            if available < item.qty {
                return Err(ServiceError::InsufficientStock(format!(
                    "insufficient stock for {}: have {}, need {}",
                    item.name, available, item.qty
                )));
            }
            medicine_idx.push(pos);
        }

        for (item, &pos) in items.iter().zip(&medicine_idx) {
            self.medicines[pos].stock -= item.qty;
            self.push_log(
                MutationType::Out,
                item.name.clone(),
                item.qty,
                id.to_string(),
                PROCESS_PIC,
            );
        }

        let prescription = &mut self.prescriptions[idx];
        prescription.status = PrescriptionStatus::Process;
        prescription.history_logs.push(HistoryEntry {
            status: PrescriptionStatus::Process,
            time: Utc::now(),
            note: "Stock deducted, prescription in process".to_string(),
        });
        Ok(prescription.clone())
    }

    /// Process → Selesai. No stock effect.
    pub fn finish_prescription(&mut self, id: &str) -> Result<Prescription, ServiceError> {
        let prescription = self
            .prescriptions
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ServiceError::NotFound(format!("prescription {} not found", id)))?;

        if prescription.status != PrescriptionStatus::Process {
            return Err(ServiceError::InvalidTransition(format!(
                "prescription {} is {}, only Process prescriptions can be finished",
                id, prescription.status
            )));
        }

        prescription.status = PrescriptionStatus::Selesai;
        prescription.history_logs.push(HistoryEntry {
            status: PrescriptionStatus::Selesai,
            time: Utc::now(),
            note: "Prescription completed".to_string(),
        });
        Ok(prescription.clone())
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn add_patient(&mut self, draft: PatientDraft) -> Patient {
        let allergies = if draft.allergies.trim().is_empty() {
            "-".to_string()
        } else {
            draft.allergies
        };
        let patient = Patient {
            id: self.next_patient_id(),
            name: draft.name,
            dob: draft.dob,
            status: PatientStatus::Waiting,
            allergies,
        };
        self.patients.push(patient.clone());
        patient
    }

    pub fn remove_patient(&mut self, id: &str) -> Result<Patient, ServiceError> {
        let pos = self
            .patients
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ServiceError::NotFound(format!("patient {} not found", id)))?;
        Ok(self.patients.remove(pos))
    }

    pub fn logs_newest_first(&self) -> Vec<MutationLog> {
        self.logs
            .iter()
            .rev()
            .take(LOG_FETCH_LIMIT)
            .cloned()
            .collect()
    }

    fn push_log(
        &mut self,
        kind: MutationType,
        medicine_name: String,
        qty: i32,
        reference: String,
        pic: &str,
    ) {
        self.next_log_id += 1;
        self.logs.push(MutationLog {
            id: self.next_log_id,
            date: Utc::now().date_naive(),
            kind,
            medicine_name,
            qty,
            reference,
            pic: pic.to_string(),
        });
    }

    fn next_medicine_id(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let candidate = format!("OBT{:04}", rng.gen_range(1000..10000));
            if self.medicine(&candidate).is_none() {
                return candidate;
            }
        }
    }

    fn next_prescription_id(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let candidate = format!("RSP-{:04}", rng.gen_range(1000..10000));
            if self.prescription(&candidate).is_none() {
                return candidate;
            }
        }
    }

    // Lowest free sequential number, like the original registry.
    fn next_patient_id(&self) -> String {
        let mut n = 1usize;
        loop {
            let candidate = format!("P-{:03}", n);
            if !self.patients.iter().any(|p| p.id == candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}
