use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::validator::FileValidator;

/// Stable identity for a queue entry. Assigned monotonically per queue,
/// never reused, so a completion handler can remove its own entry even
/// after other entries have shifted positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(u64);

/// One user-selected file awaiting upload.
#[derive(Debug, Clone)]
pub struct QueuedFile {
    pub id: EntryId,
    pub name: String,
    pub size: u64,
    /// Human-readable size, derived once at insertion.
    pub display_size: String,
    /// File content, shared rather than copied when handed to the transport.
    pub payload: Arc<Vec<u8>>,
}

/// Outcome of an attempted insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(EntryId),
    DuplicateRejected,
}

/// Receives empty/non-empty transitions, fired exactly once per crossing.
/// The presentation surface uses these to toggle the pending-files UI.
pub trait QueueObserver: Send {
    fn on_became_non_empty(&mut self) {}
    fn on_became_empty(&mut self) {}
}

/// Ordered collection of pending files, insertion order preserved.
///
/// No two entries ever share the same `(name, size)` pair; duplicates are
/// rejected before insertion. The backing storage is private so every
/// mutation goes through the invariant-checking methods.
#[derive(Default)]
pub struct UploadQueue {
    entries: Vec<QueuedFile>,
    next_id: u64,
    observer: Option<Box<dyn QueueObserver>>,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: Box<dyn QueueObserver>) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            observer: Some(observer),
        }
    }

    pub fn set_observer(&mut self, observer: Box<dyn QueueObserver>) {
        self.observer = Some(observer);
    }

    /// Add a file unless an entry with the same `(name, size)` already
    /// exists. A rejected add mutates nothing.
    pub fn try_add(&mut self, name: &str, size: u64, payload: Arc<Vec<u8>>) -> AddOutcome {
        let duplicate = self
            .entries
            .iter()
            .any(|entry| entry.name == name && entry.size == size);

        if duplicate {
            log::debug!("Rejected duplicate selection: {} ({} bytes)", name, size);
            return AddOutcome::DuplicateRejected;
        }

        let was_empty = self.entries.is_empty();

        let id = EntryId(self.next_id);
        self.next_id += 1;

        self.entries.push(QueuedFile {
            id,
            name: name.to_string(),
            size,
            display_size: FileValidator::format_file_size(size),
            payload,
        });

        log::debug!("Queued {} ({} bytes) as {:?}", name, size, id);

        if was_empty {
            if let Some(observer) = self.observer.as_mut() {
                observer.on_became_non_empty();
            }
        }

        AddOutcome::Added(id)
    }

    /// Remove the entry at `index`. Out of bounds is an error and mutates
    /// nothing.
    pub fn remove_at(&mut self, index: usize) -> AppResult<QueuedFile> {
        if index >= self.entries.len() {
            return Err(AppError::index_out_of_bounds(index, self.entries.len()));
        }

        let removed = self.entries.remove(index);
        log::debug!("Removed {} at index {}", removed.name, index);
        self.notify_if_emptied();
        Ok(removed)
    }

    /// Remove a specific entry by its identity. Returns `false` if the
    /// entry is no longer present; completion handlers rely on this being
    /// a no-op rather than an error when the user removed the entry first.
    pub fn remove_by_id(&mut self, id: EntryId) -> bool {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            log::debug!("Entry {:?} already gone, nothing to remove", id);
            return false;
        };

        let removed = self.entries.remove(index);
        log::debug!("Removed {} by identity {:?}", removed.name, id);
        self.notify_if_emptied();
        true
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Read-only view for rendering.
    pub fn entries(&self) -> &[QueuedFile] {
        &self.entries
    }

    /// Clone of the current entries. Payloads are shared, not copied.
    pub fn snapshot(&self) -> Vec<QueuedFile> {
        self.entries.clone()
    }

    fn notify_if_emptied(&mut self) {
        if self.entries.is_empty() {
            if let Some(observer) = self.observer.as_mut() {
                observer.on_became_empty();
            }
        }
    }
}
