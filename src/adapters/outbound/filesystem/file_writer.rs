use super::download::{download_html, TempFileDownloadSink};
use crate::ports::outbound::{OutputPresenter, SaveOutcome};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for saving the exported document to a file
///
/// The document is staged through a [`TempFileDownloadSink`] in the output
/// directory, so a failed save never leaves a half-written file behind.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn output_directory(&self) -> PathBuf {
        match self.output_path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn file_name(&self) -> Result<String> {
        self.output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                SbomError::FileWriteError {
                    path: self.output_path.clone(),
                    details: "Output path has no file name".to_string(),
                }
                .into()
            })
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        let directory = self.output_directory();
        if !directory.is_dir() {
            return Err(SbomError::FileWriteError {
                path: self.output_path.clone(),
                details: format!("Parent directory does not exist: {}", directory.display()),
            }
            .into());
        }

        let sink = TempFileDownloadSink::new(directory);
        match download_html(&sink, content, &self.file_name()?)? {
            SaveOutcome::Saved(path) => eprintln!("✅ Output complete: {}", path.display()),
            SaveOutcome::Skipped => eprintln!(
                "✅ Output unchanged: {} already holds this document",
                self.output_path.display()
            ),
        }
        Ok(())
    }
}

/// StdoutPresenter adapter for writing the document to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| {
                if content.ends_with('\n') {
                    Ok(())
                } else {
                    stdout.write_all(b"\n")
                }
            })
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
