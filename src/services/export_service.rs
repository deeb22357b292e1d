//! Contact export.
//!
//! Writes the contact list to a human-readable text file.

use crate::error::{PhoneError, PhoneResult, StoreError};
use crate::models::Contact;
use async_trait::async_trait;
use std::path::Path;
use tracing::info;

/// Exports contacts to a file.
#[async_trait]
pub trait ExportService: Send + Sync {
    /// Write `contacts` to `path`, returning how many were exported.
    async fn export_contacts(&self, contacts: &[Contact], path: &Path) -> PhoneResult<usize>;
}

/// Writes [`render_export`] output with async file I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFileExporter;

#[async_trait]
impl ExportService for TextFileExporter {
    async fn export_contacts(&self, contacts: &[Contact], path: &Path) -> PhoneResult<usize> {
        if contacts.is_empty() {
            return Err(PhoneError::NothingToExport);
        }

        let content = render_export(contacts);
        tokio::fs::write(path, content)
            .await
            .map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Exported {} contact(s) to {}", contacts.len(), path.display());
        Ok(contacts.len())
    }
}

/// Exporter used when exporting is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledExporter;

#[async_trait]
impl ExportService for DisabledExporter {
    async fn export_contacts(&self, _contacts: &[Contact], _path: &Path) -> PhoneResult<usize> {
        Err(PhoneError::FeatureNotAvailable(
            "Export to file feature is not yet supported!".to_string(),
        ))
    }
}

/// Letter label for the contact at `index`: A, B, C, ...
fn label(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| char::from_u32('A' as u32 + i))
        .unwrap_or('?')
}

/// Render contacts in the export layout.
///
/// ```text
/// Contact A) Ana
///   Number: 5551234567 (Home)
///
/// Contact B) Bob
///   No phone numbers
///
/// ```
pub fn render_export(contacts: &[Contact]) -> String {
    let mut content = String::new();

    for (i, contact) in contacts.iter().enumerate() {
        content.push_str(&format!("Contact {}) {}\n", label(i), contact.name));

        if contact.phone_numbers.is_empty() {
            content.push_str("  No phone numbers\n");
        } else {
            for entry in &contact.phone_numbers {
                content.push_str(&format!("  Number: {} ({})\n", entry.number, entry.kind));
            }
        }

        content.push('\n');
    }

    content
}
