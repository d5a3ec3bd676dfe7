use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Domain events emitted after every successful mutating operation.
///
/// Consumers (currently a logging drain spawned in `main`) receive them over
/// an mpsc channel; the engine itself never blocks on a slow consumer beyond
/// the channel buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    MedicineCreated {
        medicine_id: String,
    },
    MedicineRestocked {
        medicine_id: String,
        amount: i32,
        new_stock: i32,
    },
    PrescriptionCreated {
        prescription_id: String,
        total_price: i64,
    },
    PrescriptionProcessed {
        prescription_id: String,
        items: usize,
    },
    PrescriptionFinished {
        prescription_id: String,
    },
    PatientRegistered {
        patient_id: String,
    },
    PatientRemoved {
        patient_id: String,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously.
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Creates a bounded event channel.
pub fn channel(capacity: usize) -> (EventSender, mpsc::Receiver<Event>) {
    let (tx, rx) = mpsc::channel(capacity);
    (EventSender::new(tx), rx)
}
