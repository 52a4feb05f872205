use crate::errors::{AppError, AppResult};

/// Extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Maximum accepted file size: 10 MiB. Sizes strictly greater are rejected.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

pub struct FileValidator;

impl FileValidator {
    /// Validate a candidate file by name and byte size.
    ///
    /// The extension is whatever follows the last `.` in the name,
    /// lower-cased; a name without a dot is treated as its own extension
    /// and rejected. Type is checked before size so only one rejection
    /// reason is ever reported per file.
    pub fn validate(name: &str, size: u64) -> AppResult<()> {
        let extension = name
            .rsplit('.')
            .next()
            .unwrap_or(name)
            .to_lowercase();

        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::invalid_file_type(name));
        }

        if size > MAX_FILE_SIZE {
            return Err(AppError::file_too_large(name));
        }

        Ok(())
    }

    /// Render a byte count for display, e.g. `1.43 MB`.
    ///
    /// Values are rounded to two decimals with trailing zeros stripped.
    /// The unit table tops out at GB; anything at or above 1024 GB still
    /// renders in GB rather than indexing past the table.
    pub fn format_file_size(bytes: u64) -> String {
        if bytes == 0 {
            return "0 Bytes".to_string();
        }

        let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
        let exponent = exponent.min(SIZE_UNITS.len() - 1);
        let value = bytes as f64 / 1024_f64.powi(exponent as i32);

        let mut rendered = format!("{:.2}", value);
        if rendered.contains('.') {
            rendered = rendered
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string();
        }

        format!("{} {}", rendered, SIZE_UNITS[exponent])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_allowed_extensions() {
        for name in ["photo.jpg", "photo.jpeg", "photo.png", "photo.gif"] {
            assert!(FileValidator::validate(name, 1024).is_ok());
        }
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(FileValidator::validate("PHOTO.JPG", 1024).is_ok());
        assert!(FileValidator::validate("photo.PnG", 1024).is_ok());
    }

    #[test]
    fn test_rejects_disallowed_extension() {
        let result = FileValidator::validate("malware.exe", 42);
        assert!(matches!(result, Err(AppError::InvalidFileType { .. })));
    }

    #[test]
    fn test_rejects_name_without_extension() {
        let result = FileValidator::validate("README", 42);
        assert!(matches!(result, Err(AppError::InvalidFileType { .. })));
    }

    #[test]
    fn test_size_boundary() {
        assert!(FileValidator::validate("big.jpg", MAX_FILE_SIZE).is_ok());

        let result = FileValidator::validate("big.jpg", MAX_FILE_SIZE + 1);
        assert!(matches!(result, Err(AppError::FileTooLarge { .. })));
    }

    #[test]
    fn test_type_checked_before_size() {
        // An oversized file with a bad extension reports the type error
        let result = FileValidator::validate("huge.exe", MAX_FILE_SIZE + 1);
        assert!(matches!(result, Err(AppError::InvalidFileType { .. })));
    }

    #[test]
    fn test_validation_is_deterministic() {
        for _ in 0..3 {
            assert!(FileValidator::validate("cat.jpg", 500_000).is_ok());
            assert!(FileValidator::validate("cat.bin", 500_000).is_err());
        }
    }

    #[test]
    fn test_format_zero_bytes() {
        assert_eq!(FileValidator::format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_format_exact_units() {
        assert_eq!(FileValidator::format_file_size(1024), "1 KB");
        assert_eq!(FileValidator::format_file_size(1024 * 1024), "1 MB");
        assert_eq!(FileValidator::format_file_size(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn test_format_rounds_to_two_decimals() {
        assert_eq!(FileValidator::format_file_size(1_500_000), "1.43 MB");
        assert_eq!(FileValidator::format_file_size(1536), "1.5 KB");
    }

    #[test]
    fn test_format_small_values() {
        assert_eq!(FileValidator::format_file_size(1), "1 Bytes");
        assert_eq!(FileValidator::format_file_size(512), "512 Bytes");
    }

    #[test]
    fn test_format_clamps_to_gigabytes() {
        // 2048 GB would index past the unit table; it stays in GB
        let formatted = FileValidator::format_file_size(2048 * 1024 * 1024 * 1024);
        assert_eq!(formatted, "2048 GB");
    }
}
