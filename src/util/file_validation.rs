//! File validation for opening grid files
//!
//! Checks a path before its contents are read: existence, permissions,
//! directories, size, and binary content.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Maximum grid file size in bytes (20 MB)
pub const MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Errors that can occur when validating a file for opening
#[derive(Debug, Clone, PartialEq)]
pub enum FileOpenError {
    NotFound,
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// File contains null bytes
    BinaryFile,
    TooLarge { size_mb: f64 },
    IoError(String),
}

impl FileOpenError {
    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", filename),
            Self::PermissionDenied => format!("Permission denied: {}", filename),
            Self::IsDirectory => format!("Cannot open directory: {}", filename),
            Self::BinaryFile => format!("Not a JSON file: {}", filename),
            Self::TooLarge { size_mb } => {
                format!(
                    "{} is too large ({:.1} MB, max {} MB)",
                    filename,
                    size_mb,
                    MAX_FILE_SIZE / (1024 * 1024)
                )
            }
            Self::IoError(msg) => format!("Error opening {}: {}", filename, msg),
        }
    }
}

impl std::fmt::Display for FileOpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::BinaryFile => write!(f, "binary file"),
            Self::TooLarge { size_mb } => write!(f, "file too large ({:.1} MB)", size_mb),
            Self::IoError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FileOpenError {}

impl From<std::io::Error> for FileOpenError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => FileOpenError::NotFound,
            std::io::ErrorKind::PermissionDenied => FileOpenError::PermissionDenied,
            _ => FileOpenError::IoError(e.to_string()),
        }
    }
}

/// Validate a file before attempting to open it
pub fn validate_file_for_opening(path: &Path) -> Result<(), FileOpenError> {
    let metadata = fs::metadata(path)?;

    if metadata.is_dir() {
        return Err(FileOpenError::IsDirectory);
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(FileOpenError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Check if a file is likely binary by scanning the first 8KB for null bytes
///
/// Returns `false` on any read error (let the actual open fail with a better error).
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

/// Validate and read a grid file as text
pub fn read_grid_file(path: &Path) -> Result<String, FileOpenError> {
    validate_file_for_opening(path)?;
    if is_likely_binary(path) {
        return Err(FileOpenError::BinaryFile);
    }
    Ok(fs::read_to_string(path)?)
}

/// Get the filename from a path for display in error messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
