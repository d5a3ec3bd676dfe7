//! Service-level tests for the prescription workflow: forward-only status
//! transitions, all-or-nothing stock deduction, snapshot pricing, and the
//! single-writer guarantee under concurrent processing.

use std::sync::Arc;

use dokterbubung_api::{
    entities::PrescriptionStatus,
    errors::ServiceError,
    events,
    services::{
        medicines::NewMedicine,
        prescriptions::{NewPrescription, NewPrescriptionItem},
        LogService, MedicineService, PatientService, PrescriptionService,
    },
    store::HospitalStore,
};

struct Services {
    medicines: MedicineService,
    prescriptions: PrescriptionService,
    patients: PatientService,
    logs: LogService,
}

fn setup() -> Services {
    let store = Arc::new(HospitalStore::new());
    let (event_sender, mut event_receiver) = events::channel(64);
    tokio::spawn(async move { while event_receiver.recv().await.is_some() {} });

    Services {
        medicines: MedicineService::new(store.clone(), event_sender.clone()),
        prescriptions: PrescriptionService::new(store.clone(), event_sender.clone()),
        patients: PatientService::new(store.clone(), event_sender),
        logs: LogService::new(store),
    }
}

fn new_medicine(id: &str, name: &str, stock: i32, price: i64) -> NewMedicine {
    NewMedicine {
        id: Some(id.to_string()),
        name: name.to_string(),
        kind: "Tablet".to_string(),
        stock,
        price,
        expiry: "2027-01-15".to_string(),
        location: "Rak A1".to_string(),
    }
}

fn new_prescription(medicine_id: &str, qty: i32) -> NewPrescription {
    NewPrescription {
        patient_name: "Siti Aminah".to_string(),
        patient_dob: "1990-01-01".to_string(),
        allergies: "-".to_string(),
        doctor_name: "dr. Bubung".to_string(),
        items: vec![NewPrescriptionItem {
            medicine_id: medicine_id.to_string(),
            qty,
            signa: "3x1 after meals".to_string(),
        }],
    }
}

#[tokio::test]
async fn status_moves_forward_only() {
    let svc = setup();
    svc.medicines
        .create(new_medicine("M1", "Amoxicillin 500mg", 5, 15_000))
        .await
        .expect("create medicine");

    let rx = svc
        .prescriptions
        .create(new_prescription("M1", 2))
        .await
        .expect("create prescription");
    assert_eq!(rx.status, PrescriptionStatus::Pending);

    let rx = svc.prescriptions.process(&rx.id).await.expect("process");
    assert_eq!(rx.status, PrescriptionStatus::Process);

    let rx = svc.prescriptions.finish(&rx.id).await.expect("finish");
    assert_eq!(rx.status, PrescriptionStatus::Selesai);

    // No transition leaves the terminal state.
    assert!(matches!(
        svc.prescriptions.process(&rx.id).await.unwrap_err(),
        ServiceError::InvalidTransition(_)
    ));
    assert!(matches!(
        svc.prescriptions.finish(&rx.id).await.unwrap_err(),
        ServiceError::InvalidTransition(_)
    ));
}

#[tokio::test]
async fn total_price_is_fixed_at_creation_time() {
    let svc = setup();
    svc.medicines
        .create(new_medicine("M1", "Paracetamol 500mg", 50, 5_000))
        .await
        .expect("create medicine");

    let rx = svc
        .prescriptions
        .create(new_prescription("M1", 4))
        .await
        .expect("create prescription");
    assert_eq!(rx.total_price, 20_000);

    // Catalog churn after creation does not reprice the prescription.
    svc.medicines.restock("M1", 100).await.expect("restock");
    let listed = svc.prescriptions.list().await;
    assert_eq!(listed[0].total_price, 20_000);
    assert_eq!(listed[0].items[0].price, 5_000);
}

#[tokio::test]
async fn create_validates_input_before_touching_the_store() {
    let svc = setup();
    svc.medicines
        .create(new_medicine("M1", "Paracetamol 500mg", 10, 5_000))
        .await
        .expect("create medicine");

    let mut req = new_prescription("M1", 1);
    req.patient_name = String::new();
    assert!(matches!(
        svc.prescriptions.create(req).await.unwrap_err(),
        ServiceError::ValidationError(_)
    ));

    let mut req = new_prescription("M1", 1);
    req.patient_dob = "yesterday".to_string();
    assert!(matches!(
        svc.prescriptions.create(req).await.unwrap_err(),
        ServiceError::ValidationError(_)
    ));

    let mut req = new_prescription("M1", 1);
    req.items.clear();
    assert!(matches!(
        svc.prescriptions.create(req).await.unwrap_err(),
        ServiceError::ValidationError(_)
    ));

    assert!(svc.prescriptions.list().await.is_empty());
}

#[tokio::test]
async fn concurrent_processing_cannot_oversell_stock() {
    let svc = setup();
    svc.medicines
        .create(new_medicine("M1", "OBH Combi Anak", 5, 25_000))
        .await
        .expect("create medicine");

    let first = svc
        .prescriptions
        .create(new_prescription("M1", 3))
        .await
        .expect("first prescription");
    let second = svc
        .prescriptions
        .create(new_prescription("M1", 3))
        .await
        .expect("second prescription");

    let (a, b) = tokio::join!(
        svc.prescriptions.process(&first.id),
        svc.prescriptions.process(&second.id)
    );

    // 5 units cannot cover 3 + 3: exactly one call wins.
    let results = [a, b];
    let succeeded = results.iter().filter(|r| r.is_ok()).count();
    let shortfalls = results
        .iter()
        .filter(|r| matches!(r, Err(ServiceError::InsufficientStock(_))))
        .count();
    assert_eq!(succeeded, 1);
    assert_eq!(shortfalls, 1);

    let medicines = svc.medicines.list().await;
    assert_eq!(medicines[0].stock, 2);

    let logs = svc.logs.list().await;
    assert_eq!(logs.len(), 1);
}

#[tokio::test]
async fn patient_registration_normalizes_allergies() {
    let svc = setup();

    let patient = svc
        .patients
        .register(dokterbubung_api::services::patients::NewPatient {
            name: "Rahmat Hidayat".to_string(),
            dob: "1988-05-12".to_string(),
            allergies: String::new(),
        })
        .await
        .expect("register patient");
    assert_eq!(patient.allergies, "-");
    assert_eq!(patient.id, "P-001");

    assert!(matches!(
        svc.patients.remove("P-404").await.unwrap_err(),
        ServiceError::NotFound(_)
    ));
    svc.patients.remove(&patient.id).await.expect("remove");
    assert!(svc.patients.list().await.is_empty());
}
