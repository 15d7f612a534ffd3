use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use grantscope_core::Record;

use crate::{LoadError, RecordSource};

/// Outcome of the one-shot record load, delivered on the app's channel.
#[derive(Debug)]
pub enum LoaderEvent {
    Loaded(Vec<Record>),
    Failed(LoadError),
}

/// Runs a [`RecordSource`] on a dedicated runtime thread and delivers the
/// outcome exactly once, keeping the update/render loop single-threaded.
pub struct LoaderHandle {
    event_rx: mpsc::Receiver<LoaderEvent>,
}

impl LoaderHandle {
    pub fn spawn(source: Arc<dyn RecordSource>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let event = match runtime.block_on(source.load()) {
                Ok(records) => LoaderEvent::Loaded(records),
                Err(err) => LoaderEvent::Failed(err),
            };
            let _ = event_tx.send(event);
        });

        Self { event_rx }
    }

    /// Blocks until the load completes. `None` if the loader thread died
    /// without reporting.
    pub fn recv(&self) -> Option<LoaderEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<LoaderEvent> {
        self.event_rx.try_recv().ok()
    }
}
