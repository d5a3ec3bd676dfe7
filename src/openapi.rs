use utoipa::OpenApi;

/// OpenAPI document for the hospital workflow API, served at /openapi.json.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "DokterBubung Hospital API",
        description = "Medicine stock control, prescription lifecycle, patient registry, and stock mutation audit logs"
    ),
    paths(
        crate::handlers::health::health_check,
        crate::handlers::medicines::list_medicines,
        crate::handlers::medicines::create_medicine,
        crate::handlers::medicines::restock_medicine,
        crate::handlers::prescriptions::list_prescriptions,
        crate::handlers::prescriptions::create_prescription,
        crate::handlers::prescriptions::update_prescription_status,
        crate::handlers::patients::list_patients,
        crate::handlers::patients::add_patient,
        crate::handlers::patients::remove_patient,
        crate::handlers::logs::list_logs,
    ),
    components(schemas(
        crate::entities::Medicine,
        crate::entities::Patient,
        crate::entities::PatientStatus,
        crate::entities::Prescription,
        crate::entities::PrescriptionItem,
        crate::entities::PrescriptionStatus,
        crate::entities::HistoryEntry,
        crate::entities::MutationLog,
        crate::entities::MutationType,
        crate::errors::ErrorResponse,
        crate::services::medicines::NewMedicine,
        crate::services::prescriptions::NewPrescription,
        crate::services::prescriptions::NewPrescriptionItem,
        crate::services::patients::NewPatient,
        crate::handlers::medicines::RestockRequest,
    )),
    tags(
        (name = "medicines", description = "Catalog and stock control"),
        (name = "prescriptions", description = "Prescription lifecycle"),
        (name = "patients", description = "Patient registry"),
        (name = "logs", description = "Stock mutation audit trail"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
