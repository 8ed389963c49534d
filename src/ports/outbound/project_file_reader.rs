use super::ProjectFile;
use crate::shared::Result;
use std::path::Path;

/// ProjectFileReader port for loading input files
///
/// This port abstracts the file system so use cases can be tested
/// against in-memory inputs.
pub trait ProjectFileReader {
    /// Reads one input file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The path is a symbolic link or not a regular file
    /// - The file exceeds the size limit or is not valid UTF-8
    fn read_project_file(&self, path: &Path) -> Result<ProjectFile>;
}
