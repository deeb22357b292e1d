//! Application orchestrator.
//!
//! `PhoneApp` owns both stores, the dialer and the exporter, and passes
//! results between them directly: a dial outcome goes straight into the
//! call history, a contact's dial request goes straight into the dialer.

use crate::config::Config;
use crate::error::PhoneResult;
use crate::models::{CallRecord, Contact};
use crate::repositories::{JsonFileRepository, Repository};
use crate::services::{
    CallHistoryStore, ContactStore, DialOutcome, DialRequest, DialService, DisabledExporter,
    ExportService, TextFileExporter,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// The phone-book and dialer as one unit.
pub struct PhoneApp {
    contacts: ContactStore,
    history: CallHistoryStore,
    dialer: DialService,
    exporter: Box<dyn ExportService>,
    export_path: PathBuf,
    load_warnings: Vec<String>,
}

impl PhoneApp {
    /// Assemble an app from already-built parts.
    pub fn new(
        contacts: ContactStore,
        history: CallHistoryStore,
        dialer: DialService,
        exporter: Box<dyn ExportService>,
        export_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            contacts,
            history,
            dialer,
            exporter,
            export_path: export_path.into(),
            load_warnings: Vec::new(),
        }
    }

    /// Open the JSON-backed stores named in `config`.
    pub fn from_config(config: &Config) -> Self {
        let contact_repo = JsonFileRepository::<Contact>::open(&config.contacts_file);
        let history_repo = JsonFileRepository::<CallRecord>::open(&config.call_history_file);

        let load_warnings: Vec<String> = [contact_repo.load_warning(), history_repo.load_warning()]
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect();

        let exporter: Box<dyn ExportService> = if config.export_enabled {
            Box::new(TextFileExporter)
        } else {
            Box::new(DisabledExporter)
        };

        info!(
            "Opened {} contact(s) and {} call record(s)",
            contact_repo.get_all().len(),
            history_repo.get_all().len()
        );

        let mut app = Self::new(
            ContactStore::new(Box::new(contact_repo)),
            CallHistoryStore::new(Box::new(history_repo)),
            DialService::new(),
            exporter,
            config.export_file.clone(),
        );
        app.load_warnings = load_warnings;
        app
    }

    /// Warnings raised while loading the backing files.
    pub fn load_warnings(&self) -> &[String] {
        &self.load_warnings
    }

    pub fn contacts(&self) -> &ContactStore {
        &self.contacts
    }

    pub fn contacts_mut(&mut self) -> &mut ContactStore {
        &mut self.contacts
    }

    pub fn history(&self) -> &CallHistoryStore {
        &self.history
    }

    /// Default export target.
    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    /// Dial a number typed by the user.
    ///
    /// The contact name is looked up from the contact list.
    pub fn dial(&mut self, raw_number: &str) -> PhoneResult<DialOutcome> {
        self.place_call(raw_number, None)
    }

    /// Dial one of a contact's numbers (1-based `entry`).
    pub fn call_contact(&mut self, name: &str, entry: Option<usize>) -> PhoneResult<DialOutcome> {
        let request = self.contacts.dial_request_for(name, entry)?;
        self.handle_dial_request(request)
    }

    /// Carry out a dial request raised by the contact store.
    pub fn handle_dial_request(&mut self, request: DialRequest) -> PhoneResult<DialOutcome> {
        self.place_call(&request.number, Some(&request.contact_name))
    }

    /// Export all contacts to `path`, or to the configured file.
    pub async fn export_contacts(&self, path: Option<&Path>) -> PhoneResult<usize> {
        let target = path.unwrap_or(&self.export_path);
        self.exporter
            .export_contacts(self.contacts.all(), target)
            .await
    }

    fn place_call(
        &mut self,
        raw_number: &str,
        known_contact_name: Option<&str>,
    ) -> PhoneResult<DialOutcome> {
        let outcome = self
            .dialer
            .dial_number(raw_number, known_contact_name, &self.contacts)?;
        self.history.on_call_completed(outcome.event.clone());
        Ok(outcome)
    }
}
