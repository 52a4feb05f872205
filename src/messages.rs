//! User-facing message keys and the seams they travel through.
//!
//! The orchestrator never hardcodes display strings. It resolves a
//! `MessageKey` through a [`TextProvider`] and hands the result to a
//! [`MessageReporter`], which decides how to surface it (transient
//! notice vs blocking error dialog).

/// Keys for every message the core can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    FileAlreadySelected,
    ItemAdded,
    InvalidFileType,
    FileTooLarge,
    ItemRemoved,
    NoFilesToUpload,
    UploadStarted,
    UploadSuccess,
    UploadError,
}

/// Maps a message key plus optional positional args to a display string.
pub trait TextProvider: Send + Sync {
    fn text(&self, key: MessageKey, args: &[&str]) -> String;
}

/// Built-in English catalog. Templates use `{0}`, `{1}`, ... for
/// positional substitution.
#[derive(Debug, Default)]
pub struct Messages;

impl Messages {
    fn template(key: MessageKey) -> &'static str {
        match key {
            MessageKey::FileAlreadySelected => "This file has already been selected",
            MessageKey::ItemAdded => "{0} added to the upload list",
            MessageKey::InvalidFileType => {
                "Invalid file type. Only JPG, JPEG, PNG and GIF files are allowed"
            }
            MessageKey::FileTooLarge => "File is too large. Maximum size is 10 MB",
            MessageKey::ItemRemoved => "{0} removed from the upload list",
            MessageKey::NoFilesToUpload => "No files selected for upload",
            MessageKey::UploadStarted => "Upload started",
            MessageKey::UploadSuccess => "{0} uploaded successfully",
            MessageKey::UploadError => "Failed to upload {0}",
        }
    }
}

impl TextProvider for Messages {
    fn text(&self, key: MessageKey, args: &[&str]) -> String {
        let mut rendered = Self::template(key).to_string();
        for (i, arg) in args.iter().enumerate() {
            rendered = rendered.replace(&format!("{{{}}}", i), arg);
        }
        rendered
    }
}

/// Displays resolved messages to the user.
///
/// `notify` is a transient, non-blocking notice; `alert` is a blocking
/// error dialog. Implementations must not touch the queue.
pub trait MessageReporter: Send + Sync {
    fn notify(&self, message: &str);
    fn alert(&self, message: &str);
}

/// Reporter that routes messages to the log. Useful as a default when no
/// presentation surface is wired up.
#[derive(Debug, Default)]
pub struct LogReporter;

impl MessageReporter for LogReporter {
    fn notify(&self, message: &str) {
        log::info!("{}", message);
    }

    fn alert(&self, message: &str) {
        log::error!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_substitution() {
        let messages = Messages;
        assert_eq!(
            messages.text(MessageKey::ItemAdded, &["cat.jpg"]),
            "cat.jpg added to the upload list"
        );
        assert_eq!(
            messages.text(MessageKey::UploadError, &["dog.png"]),
            "Failed to upload dog.png"
        );
    }

    #[test]
    fn test_keys_without_args_ignore_extras() {
        let messages = Messages;
        assert_eq!(
            messages.text(MessageKey::UploadStarted, &["unused"]),
            "Upload started"
        );
    }
}
