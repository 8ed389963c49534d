/// Generator adapters turning raw project files into component lists
mod sbom_json_generator;

pub use sbom_json_generator::{SbomJsonGenerator, SUPPORTED_PROJECT_TYPES};
