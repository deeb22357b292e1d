//! Sphone - a console phone-book and dialer simulator.
//!
//! Users dial numbers, review their call history and manage contacts. The
//! contact list and call history each live in memory and are mirrored to a
//! pretty-printed JSON file after every change.
//!
//! # Architecture
//!
//! - **domain**: Phone number cleaning, validation and formatting
//! - **models**: Contacts, phone entries and call records
//! - **repositories**: Persistent list abstraction and its JSON file implementation
//! - **services**: Contact store, call history store, dialer and exporter
//! - **app**: Orchestrator passing dial results and requests between services
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use app::PhoneApp;
pub use config::Config;
pub use domain::{PhoneNumber, ValidationError};
pub use error::{ConfigError, PhoneError, PhoneResult, StoreError};
pub use models::{CallRecord, Contact, ContactType, PhoneEntry};
pub use repositories::{JsonFileRepository, Repository};
pub use services::{
    CallCompleted, CallHistoryStore, ContactAddOutcome, ContactLookup, ContactStore, DialOutcome,
    DialRequest, DialService, DialState, ExportService, PhoneAddOutcome,
};
