use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum accepted input size (100 MB), per file and per upload payload
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects symbolic links.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist yet is accepted (nothing to follow).
pub fn ensure_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(SbomError::SecurityError {
                path: path.to_path_buf(),
                reason: format!("Failed to read metadata before {}: {}", operation, e),
                hint: "Check the path and its permissions".to_string(),
            }
            .into())
        }
    };

    if metadata.is_symlink() {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("Refusing to {} through a symbolic link", operation),
            hint: "Pass the resolved path of a regular file instead".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Checks that `path` is a regular, non-symlink file within `max_size`
/// and returns its size in bytes.
pub fn validate_input_file(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| SbomError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: "Input is a symbolic link".to_string(),
            hint: "Pass the resolved path of a regular file instead".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(SbomError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, max_size)?;
    Ok(metadata.len())
}

/// Rejects sizes above `max_size`
pub fn validate_file_size(size: u64, path: &Path, max_size: u64) -> Result<()> {
    if size > max_size {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes",
                size, max_size
            ),
            hint: "Split the SBOM into smaller files".to_string(),
        }
        .into());
    }
    Ok(())
}
