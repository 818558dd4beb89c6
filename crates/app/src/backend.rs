use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{DeliveryBackend, DeliveryStatus, OrderId, Photo, Signature};

/// Backend collaborator that only records intents in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingBackend;

impl DeliveryBackend for LoggingBackend {
    fn report_status_change(&self, order_id: &OrderId, status: DeliveryStatus) {
        tracing::info!(order = %order_id, status = status.label(), "Status change reported");
    }

    fn persist_photos(&self, order_id: &OrderId, photos: &[Photo]) {
        let names: Vec<&str> = photos.iter().map(|p| p.name.as_str()).collect();
        tracing::info!(order = %order_id, count = photos.len(), ?names, "Photos persisted");
    }

    fn persist_signature(&self, order_id: &OrderId, signature: &Signature) {
        tracing::info!(
            order = %order_id,
            bytes = signature.data_url.len(),
            captured_at = %signature.captured_at,
            "Signature persisted"
        );
    }
}

/// Context handle for the active backend.
#[derive(Clone)]
pub struct Backend(pub Rc<dyn DeliveryBackend>);

impl Backend {
    pub fn logging() -> Self {
        Backend(Rc::new(LoggingBackend))
    }
}

pub fn use_backend() -> Rc<dyn DeliveryBackend> {
    use_context::<Backend>().0
}
