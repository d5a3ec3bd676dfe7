use std::sync::Arc;

use crate::entities::MutationLog;
use crate::store::HospitalStore;

/// Read-only access to the stock mutation audit trail.
#[derive(Clone)]
pub struct LogService {
    store: Arc<HospitalStore>,
}

impl LogService {
    pub fn new(store: Arc<HospitalStore>) -> Self {
        Self { store }
    }

    /// Newest first, capped at the store's fetch limit.
    pub async fn list(&self) -> Vec<MutationLog> {
        self.store.logs().await
    }
}
