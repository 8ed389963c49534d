/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the graph engine isolated.
mod output_format;
mod visualization_request;
mod visualization_response;

pub use output_format::OutputFormat;
pub use visualization_request::{VisualizationRequest, VisualizationRequestBuilder};
pub use visualization_response::VisualizationResponse;
