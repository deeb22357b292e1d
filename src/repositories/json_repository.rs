use crate::error::{StoreError, StoreResult};
use crate::repositories::traits::Repository;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Repository backed by a pretty-printed JSON array on disk.
///
/// The file is read once at construction. A missing file means an empty
/// store; an unreadable or malformed file also yields an empty store, and
/// the reason is kept in [`load_warning`](Self::load_warning) and logged.
pub struct JsonFileRepository<T> {
    path: PathBuf,
    items: Vec<T>,
    load_warning: Option<String>,
}

impl<T> JsonFileRepository<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    /// Open the repository at `path`, loading whatever is there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut repo = Self {
            path: path.into(),
            items: Vec::new(),
            load_warning: None,
        };

        if let Err(e) = repo.load() {
            let message = format!(
                "Could not load data from {}: {}",
                repo.path.display(),
                e
            );
            warn!("{}", message);
            repo.items.clear();
            repo.load_warning = Some(message);
        }

        repo
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Why the initial load fell back to an empty list, if it did.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl<T> Repository<T> for JsonFileRepository<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    fn get_all(&self) -> &[T] {
        &self.items
    }

    fn get_all_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    fn add(&mut self, item: T) {
        self.items.push(item);
    }

    fn save_changes(&self) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&self.items)?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        debug!(
            "Saved {} item(s) to {}",
            self.items.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&mut self) -> StoreResult<()> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet, starting empty", self.path.display());
                self.items = Vec::new();
                return Ok(());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        // An empty file is treated like a missing one
        if content.trim().is_empty() {
            self.items = Vec::new();
            return Ok(());
        }

        self.items = serde_json::from_str(&content)?;
        debug!(
            "Loaded {} item(s) from {}",
            self.items.len(),
            self.path.display()
        );
        Ok(())
    }
}
