use crate::ports::outbound::{ProjectFile, ProjectFileReader};
use crate::shared::error::SbomError;
use crate::shared::security::{validate_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading input files from disk
///
/// Every read goes through the security checks: no symbolic links,
/// regular files only, bounded size.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    /// Reader with a custom size limit
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectFileReader for FileSystemReader {
    fn read_project_file(&self, path: &Path) -> Result<ProjectFile> {
        if !path.exists() {
            return Err(SbomError::InputNotFound {
                path: path.to_path_buf(),
                suggestion: "Check the path, or generate a component list first and pass the resulting JSON file".to_string(),
            }
            .into());
        }

        validate_input_file(path, self.max_file_size)?;

        let content = fs::read_to_string(path).map_err(|e| SbomError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(ProjectFile::new(name, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_project_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("frontend.json");
        fs::write(&path, "[]").unwrap();

        let reader = FileSystemReader::new();
        let file = reader.read_project_file(&path).unwrap();

        assert_eq!(file.name, "frontend.json");
        assert_eq!(file.content, "[]");
    }

    #[test]
    fn test_read_project_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let reader = FileSystemReader::new();

        let err = reader
            .read_project_file(&temp_dir.path().join("missing.json"))
            .unwrap_err();
        assert!(err.to_string().contains("Input file not found"));
    }

    #[test]
    fn test_read_project_file_directory() {
        let temp_dir = TempDir::new().unwrap();
        let reader = FileSystemReader::new();

        let err = reader.read_project_file(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Not a regular file"));
    }

    #[test]
    fn test_read_project_file_size_limit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("large.json");
        fs::write(&path, "[1, 2, 3, 4, 5]").unwrap();

        let reader = FileSystemReader::with_max_file_size(4);
        let err = reader.read_project_file(&path).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
