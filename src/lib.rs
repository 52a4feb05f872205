//! Client-side image selection queue and upload orchestration.
//!
//! A user picks image files through a selection widget; each candidate is
//! validated (extension allow-list, 10 MiB ceiling), checked against the
//! queue for duplicates by `(name, size)`, and tracked as a pending entry
//! until it is either removed by the user or uploaded successfully. An
//! upload run snapshots the queue and dispatches one multipart POST per
//! entry in parallel; successes are removed from the queue by identity,
//! failures stay queued for a later run.
//!
//! The visual layer is out of scope. The crate talks to it through
//! narrow seams: [`messages::MessageReporter`] for notices and error
//! dialogs, [`messages::TextProvider`] for localized strings,
//! [`queue::QueueObserver`] for the empty/non-empty UI flag, and
//! [`uploader::UploadTransport`] for the actual network submission.

pub mod config;
pub mod errors;
pub mod messages;
pub mod queue;
pub mod uploader;
pub mod validator;

pub use errors::{AppError, AppResult};
pub use messages::{LogReporter, MessageKey, MessageReporter, Messages, TextProvider};
pub use queue::{AddOutcome, EntryId, QueueObserver, QueuedFile, UploadQueue};
pub use uploader::{FileCandidate, HttpTransport, UploadOrchestrator, UploadTransport};
pub use validator::FileValidator;
