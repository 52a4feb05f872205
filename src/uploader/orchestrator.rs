use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use crate::errors::{AppError, AppResult};
use crate::messages::{MessageKey, MessageReporter, TextProvider};
use crate::queue::{AddOutcome, UploadQueue};
use crate::validator::FileValidator;

use super::transport::UploadTransport;

/// A file handed over by the selection widget. `mime_hint` is advisory;
/// the transport derives the content type from the file name.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub name: String,
    pub size: u64,
    pub payload: Arc<Vec<u8>>,
    pub mime_hint: Option<String>,
}

/// Drives the selection, removal and upload lifecycle over an injected
/// queue and transport.
///
/// All collaborators are passed in at construction; the orchestrator owns
/// no ambient state. Uploads are dispatched in parallel and reconciled in
/// per-entry completion handlers that remove by identity, so they stay
/// correct when the user removes entries while uploads are in flight.
pub struct UploadOrchestrator {
    queue: Arc<Mutex<UploadQueue>>,
    transport: Arc<dyn UploadTransport>,
    reporter: Arc<dyn MessageReporter>,
    texts: Arc<dyn TextProvider>,
}

impl UploadOrchestrator {
    pub fn new(
        queue: Arc<Mutex<UploadQueue>>,
        transport: Arc<dyn UploadTransport>,
        reporter: Arc<dyn MessageReporter>,
        texts: Arc<dyn TextProvider>,
    ) -> Self {
        Self {
            queue,
            transport,
            reporter,
            texts,
        }
    }

    /// Shared handle to the queue, for the presentation surface to render
    /// from and to attach its observer to.
    pub fn queue(&self) -> Arc<Mutex<UploadQueue>> {
        Arc::clone(&self.queue)
    }

    /// Handle a "file chosen" event from the selection widget.
    ///
    /// `None` (no file in the event) is a no-op. A candidate that fails
    /// validation is reported through a blocking alert and discarded; a
    /// duplicate gets a transient notice and is discarded. Neither path
    /// mutates the queue.
    pub fn file_chosen(&self, candidate: Option<FileCandidate>) {
        let Some(candidate) = candidate else {
            return;
        };

        if let Err(e) = FileValidator::validate(&candidate.name, candidate.size) {
            log::info!("Rejected selection {}: {}", candidate.name, e);
            let key = match e {
                AppError::FileTooLarge { .. } => MessageKey::FileTooLarge,
                _ => MessageKey::InvalidFileType,
            };
            self.reporter.alert(&self.texts.text(key, &[]));
            return;
        }

        let outcome = self.with_queue("add file", |queue| {
            queue.try_add(&candidate.name, candidate.size, candidate.payload.clone())
        });

        match outcome {
            Some(AddOutcome::Added(_)) => {
                self.reporter
                    .notify(&self.texts.text(MessageKey::ItemAdded, &[&candidate.name]));
            }
            Some(AddOutcome::DuplicateRejected) => {
                self.reporter
                    .notify(&self.texts.text(MessageKey::FileAlreadySelected, &[]));
            }
            None => {}
        }
    }

    /// Handle a "file removed" event for the entry at `index`.
    pub fn remove_file(&self, index: usize) -> AppResult<()> {
        let Some(result) = self.with_queue("remove file", |queue| queue.remove_at(index)) else {
            return Ok(());
        };

        let removed = result?;
        self.reporter
            .notify(&self.texts.text(MessageKey::ItemRemoved, &[&removed.name]));
        Ok(())
    }

    /// Upload every file currently queued.
    ///
    /// The queue is snapshotted at call time: entries added while the run
    /// is in flight are not part of it. One transport call is spawned per
    /// entry, all dispatched before any completes. A 200/201 status
    /// removes that exact entry (a no-op if the user removed it first)
    /// and shows a success notice; anything else leaves the entry queued
    /// for a later run and shows a blocking error.
    ///
    /// The returned handles let callers observe completion; dropping them
    /// detaches the in-flight uploads.
    pub fn upload_all(&self) -> Vec<JoinHandle<()>> {
        let snapshot = self
            .with_queue("upload snapshot", |queue| queue.snapshot())
            .unwrap_or_default();

        if snapshot.is_empty() {
            self.reporter
                .notify(&self.texts.text(MessageKey::NoFilesToUpload, &[]));
            return Vec::new();
        }

        self.reporter
            .notify(&self.texts.text(MessageKey::UploadStarted, &[]));

        let session_id = uuid::Uuid::new_v4().to_string();
        log::info!(
            "Starting upload session {} with {} files",
            session_id,
            snapshot.len()
        );

        let mut handles = Vec::with_capacity(snapshot.len());

        for entry in snapshot {
            let queue = Arc::clone(&self.queue);
            let transport = Arc::clone(&self.transport);
            let reporter = Arc::clone(&self.reporter);
            let texts = Arc::clone(&self.texts);
            let session_id = session_id.clone();

            handles.push(tokio::spawn(async move {
                match transport.upload(&entry).await {
                    Ok(status) if is_success_status(status) => {
                        log::info!(
                            "Session {}: uploaded {} ({})",
                            session_id,
                            entry.name,
                            entry.display_size
                        );
                        reporter.notify(&texts.text(MessageKey::UploadSuccess, &[&entry.name]));

                        match queue.lock() {
                            Ok(mut queue) => {
                                queue.remove_by_id(entry.id);
                            }
                            Err(e) => {
                                log::error!(
                                    "Failed to acquire queue lock after uploading {} (non-critical): {}",
                                    entry.name,
                                    e
                                );
                            }
                        }
                    }
                    Ok(status) => {
                        log::warn!(
                            "Session {}: endpoint answered {} for {}",
                            session_id,
                            status,
                            entry.name
                        );
                        reporter.alert(&texts.text(MessageKey::UploadError, &[&entry.name]));
                    }
                    Err(e) => {
                        log::error!(
                            "Session {}: transport error for {}: {}",
                            session_id,
                            entry.name,
                            e
                        );
                        reporter.alert(&texts.text(MessageKey::UploadError, &[&entry.name]));
                    }
                }
            }));
        }

        handles
    }

    /// Out-of-band completion signal from transports that report success
    /// or failure without naming a queue entry.
    ///
    /// Only surfaces a generic message; it never mutates the queue, since
    /// there is no entry to attribute the outcome to. The per-entry path
    /// in [`upload_all`](Self::upload_all) is the authoritative one.
    pub fn transport_completed(&self, status: u16) {
        if is_success_status(status) {
            self.reporter
                .notify(&self.texts.text(MessageKey::UploadSuccess, &["file"]));
        } else {
            self.reporter
                .alert(&self.texts.text(MessageKey::UploadError, &["file"]));
        }
    }

    fn with_queue<R>(&self, operation: &str, f: impl FnOnce(&mut UploadQueue) -> R) -> Option<R> {
        match self.queue.lock() {
            Ok(mut queue) => Some(f(&mut queue)),
            Err(e) => {
                log::error!(
                    "Failed to acquire queue lock for {} (non-critical): {}",
                    operation,
                    e
                );
                None
            }
        }
    }
}

fn is_success_status(status: u16) -> bool {
    matches!(status, 200 | 201)
}
