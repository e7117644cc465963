//! Active request tab

use log::debug;

use crate::models::RequestDocument;
use crate::reactive::Signal;

/// Holds the document of the currently active tab.
pub struct TabService {
    current_document: Signal<RequestDocument>,
}

impl TabService {
    pub fn new(document: RequestDocument) -> Self {
        Self {
            current_document: Signal::new(document),
        }
    }

    /// Reactive handle to the active tab's document.
    pub fn current_document(&self) -> &Signal<RequestDocument> {
        &self.current_document
    }

    /// Make `document` the active tab's document.
    pub fn open(&self, document: RequestDocument) {
        debug!(
            "Opening {:?} document for {}",
            document.kind, document.request.endpoint
        );
        self.current_document.set(document);
    }
}
