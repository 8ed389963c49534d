/// Filesystem adapters for file I/O operations
mod download;
mod file_reader;
mod file_writer;

pub use download::{download_html, TempFileDownloadSink, HTML_MIME_TYPE};
pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
