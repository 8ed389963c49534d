use crate::ports::outbound::{DownloadSink, SaveOutcome};
use crate::shared::error::SbomError;
use crate::shared::security::ensure_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// MIME type of exported HTML documents
pub const HTML_MIME_TYPE: &str = "text/html;charset=utf-8";

/// Saves an exported document through `sink`.
///
/// The handle acquired from the sink is owned by a drop guard, so it is
/// released exactly once whether the save succeeds, is skipped, returns an
/// error or panics.
pub fn download_html<S: DownloadSink>(sink: &S, html: &str, file_name: &str) -> Result<SaveOutcome> {
    let handle = sink.acquire(html.as_bytes(), HTML_MIME_TYPE)?;
    let guard = HandleGuard {
        sink,
        handle: Some(handle),
    };
    sink.trigger_save(guard.handle(), file_name)
}

/// Owns an acquired handle and releases it on drop
struct HandleGuard<'a, S: DownloadSink> {
    sink: &'a S,
    handle: Option<S::Handle>,
}

impl<S: DownloadSink> HandleGuard<'_, S> {
    fn handle(&self) -> &S::Handle {
        // Only taken in Drop
        self.handle
            .as_ref()
            .unwrap_or_else(|| unreachable!("handle released before use"))
    }
}

impl<S: DownloadSink> Drop for HandleGuard<'_, S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.sink.release(handle);
        }
    }
}

/// TempFileDownloadSink adapter staging documents in a temporary file
///
/// Content is staged next to the destination, then copied over it. The
/// temporary file is deleted when the handle is released.
pub struct TempFileDownloadSink {
    directory: PathBuf,
}

impl TempFileDownloadSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn destination(&self, file_name: &str) -> Result<PathBuf> {
        let is_plain_name = !file_name.is_empty()
            && file_name != "."
            && file_name != ".."
            && !file_name.contains(['/', '\\']);
        if !is_plain_name {
            return Err(SbomError::SecurityError {
                path: PathBuf::from(file_name),
                reason: "Download file name must not contain path separators".to_string(),
                hint: "Use a plain file name such as 'sbom-graph.html'".to_string(),
            }
            .into());
        }
        Ok(self.directory.join(file_name))
    }
}

impl DownloadSink for TempFileDownloadSink {
    type Handle = NamedTempFile;

    fn acquire(&self, content: &[u8], _mime_type: &str) -> Result<NamedTempFile> {
        let write_error = |e: std::io::Error| SbomError::FileWriteError {
            path: self.directory.clone(),
            details: format!("Failed to stage document: {}", e),
        };

        let mut staged = tempfile::Builder::new()
            .prefix(".sbom-graph-")
            .suffix(".part")
            .tempfile_in(&self.directory)
            .map_err(write_error)?;
        staged.write_all(content).map_err(write_error)?;
        staged.flush().map_err(write_error)?;
        Ok(staged)
    }

    fn trigger_save(&self, handle: &NamedTempFile, file_name: &str) -> Result<SaveOutcome> {
        let destination = self.destination(file_name)?;
        ensure_not_symlink(&destination, "write")?;

        let read_error = |e: std::io::Error| SbomError::FileReadError {
            path: handle.path().to_path_buf(),
            details: e.to_string(),
        };

        if destination.is_file() {
            let existing = fs::read(&destination).map_err(read_error)?;
            let staged = fs::read(handle.path()).map_err(read_error)?;
            if existing == staged {
                return Ok(SaveOutcome::Skipped);
            }
        }

        fs::copy(handle.path(), &destination).map_err(|e| SbomError::FileWriteError {
            path: destination.clone(),
            details: e.to_string(),
        })?;

        Ok(SaveOutcome::Saved(destination))
    }

    fn release(&self, handle: NamedTempFile) {
        // Dropping deletes the staged file; a failed delete only leaves a
        // hidden .part file behind.
        let _ = handle.close();
    }
}
