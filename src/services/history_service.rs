//! Call history store.
//!
//! Records completed calls newest-first and renders the history list.

use crate::models::CallRecord;
use crate::repositories::Repository;
use crate::services::dial_service::CallCompleted;
use tracing::{info, warn};

/// Owns the call history and mirrors it to its repository.
pub struct CallHistoryStore {
    repository: Box<dyn Repository<CallRecord>>,
}

impl CallHistoryStore {
    /// Create a store over an already-loaded repository.
    pub fn new(repository: Box<dyn Repository<CallRecord>>) -> Self {
        Self { repository }
    }

    /// Record a completed call at the front of the history and persist.
    pub fn on_call_completed(&mut self, event: CallCompleted) {
        let record = CallRecord::new(event.number, event.contact_name, event.called_at);
        info!("Recording call to {}", record.number);

        self.repository.get_all_mut().insert(0, record);
        if let Err(e) = self.repository.save_changes() {
            warn!("Could not save call history: {}", e);
        }
    }

    /// All records, most recent first.
    pub fn get_all(&self) -> &[CallRecord] {
        self.repository.get_all()
    }

    pub fn len(&self) -> usize {
        self.get_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.get_all().is_empty()
    }

    /// Render the history list.
    ///
    /// ```text
    /// Total calls: 2
    ///
    /// 1. Ana                  (555) 123-4567  - 03/05/2024 02:07 PM
    /// 2. (555) 999-0000  - 03/05/2024 01:00 PM
    /// ```
    pub fn render(&self) -> String {
        let records = self.get_all();
        if records.is_empty() {
            return "No dialed numbers yet.\n".to_string();
        }

        let mut out = format!("Total calls: {}\n\n", records.len());
        for (i, record) in records.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} - {}\n",
                i + 1,
                record.display_text(),
                record.formatted_time()
            ));
        }
        out
    }
}
