use crate::shared::Result;
use std::path::PathBuf;

/// Result of a save action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Content was written to the given location
    Saved(PathBuf),
    /// Nothing needed writing (e.g. the destination already holds the content)
    Skipped,
}

/// DownloadSink port for the download boundary
///
/// A sink stages generated bytes behind a transient handle, saves them
/// under a file name and finally releases the handle. Callers go through
/// `download_html`, which guarantees `release` is called exactly once for
/// every acquired handle.
pub trait DownloadSink {
    /// Transient handle to staged content
    type Handle;

    /// Stages `content` and returns a handle to it
    fn acquire(&self, content: &[u8], mime_type: &str) -> Result<Self::Handle>;

    /// Saves the staged content under `file_name`
    fn trigger_save(&self, handle: &Self::Handle, file_name: &str) -> Result<SaveOutcome>;

    /// Releases the handle and everything staged behind it
    fn release(&self, handle: Self::Handle);
}
