// Uploader module - orchestrates the upload lifecycle
//
// This module is responsible for dispatching queued files to the upload
// endpoint and reconciling per-entry completions with the queue.

pub mod orchestrator;
pub mod transport;

pub use orchestrator::{FileCandidate, UploadOrchestrator};
pub use transport::{HttpTransport, UploadTransport};
