/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, generators).
pub mod component_generator;
pub mod document_exporter;
pub mod download_sink;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_file_reader;

pub use component_generator::{ComponentGenerator, GenerationError, GeneratorConfig, ProjectFile};
pub use document_exporter::DocumentExporter;
pub use download_sink::{DownloadSink, SaveOutcome};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_file_reader::ProjectFileReader;
