pub mod logs;
pub mod medicines;
pub mod patients;
pub mod prescriptions;

pub use logs::LogService;
pub use medicines::MedicineService;
pub use patients::PatientService;
pub use prescriptions::PrescriptionService;
