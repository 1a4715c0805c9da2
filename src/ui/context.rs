use crate::{catalog::CatalogClient, event::events::Event};
use flume::Sender;
use std::sync::Arc;

pub struct AppContext {
    pub catalog: Arc<CatalogClient>,
    pub event_tx: Sender<Event>,
}

impl AppContext {
    pub fn send(&self, event: Event) {
        if self.event_tx.send(event).is_err() {
            tracing::warn!("event_queue_closed");
        }
    }
}

#[cfg(test)]
pub(crate) fn test_context() -> (AppContext, flume::Receiver<Event>) {
    let (event_tx, event_rx) = flume::unbounded();
    let catalog = CatalogClient::new(&crate::config::CatalogConfig::default())
        .expect("catalog client");

    (
        AppContext {
            catalog: Arc::new(catalog),
            event_tx,
        },
        event_rx,
    )
}
