/// Mock implementations for testing
mod mock_component_generator;
mod mock_download_sink;
mod mock_progress_reporter;
mod mock_project_file_reader;

pub use mock_component_generator::MockComponentGenerator;
pub use mock_download_sink::{MockDownloadSink, SaveBehavior};
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_file_reader::MockProjectFileReader;
