use sphone::error::{StoreError, StoreResult};
use sphone::repositories::Repository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock repository for testing.
///
/// Keeps items in memory and records every call plus the last saved
/// snapshot. Clones share the call log and snapshot, so a test can keep a
/// clone after boxing the original into a store.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockRepository<T: Clone> {
    items: Vec<T>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    last_saved: Arc<Mutex<Option<Vec<T>>>>,
    fail_saves: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl<T: Clone> MockRepository<T> {
    /// Create a new empty MockRepository.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a MockRepository that starts with `items`.
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items,
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            last_saved: Arc::new(Mutex::new(None)),
            fail_saves: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent save fail.
    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Items written by the last successful save.
    pub fn last_saved(&self) -> Option<Vec<T>> {
        self.last_saved.lock().unwrap().clone()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl<T: Clone> Default for MockRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send> Repository<T> for MockRepository<T> {
    fn get_all(&self) -> &[T] {
        &self.items
    }

    fn get_all_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    fn add(&mut self, item: T) {
        self.track_call("add");
        self.items.push(item);
    }

    fn save_changes(&self) -> StoreResult<()> {
        self.track_call("save_changes");

        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Io {
                path: "mock.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }

        *self.last_saved.lock().unwrap() = Some(self.items.clone());
        Ok(())
    }

    fn load(&mut self) -> StoreResult<()> {
        self.track_call("load");
        Ok(())
    }
}
