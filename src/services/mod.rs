//! Application service layer.
//!
//! Stores own the in-memory collections and persist them through a
//! repository; the dial and export services are stateless workers. The
//! [`PhoneApp`](crate::app::PhoneApp) wires them together.

mod contact_service;
mod dial_service;
mod export_service;
mod history_service;

pub use contact_service::{ContactAddOutcome, ContactStore, DialRequest, PhoneAddOutcome};
pub use dial_service::{
    CallCompleted, Clock, ContactLookup, DialOutcome, DialService, DialState,
};
pub use export_service::{render_export, DisabledExporter, ExportService, TextFileExporter};
pub use history_service::CallHistoryStore;
