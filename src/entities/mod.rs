pub mod medicine;
pub mod mutation_log;
pub mod patient;
pub mod prescription;

pub use medicine::Medicine;
pub use mutation_log::{MutationLog, MutationType};
pub use patient::{Patient, PatientStatus};
pub use prescription::{HistoryEntry, Prescription, PrescriptionItem, PrescriptionStatus};
