pub mod scraper;
pub mod summarizer;
pub mod synthesizer;

use std::sync::{Arc, Mutex};

/// Shared, ordered record of which collaborator was called.
#[derive(Clone, Default)]
pub struct CallLog(pub Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    pub fn record(&self, call: &'static str) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}
