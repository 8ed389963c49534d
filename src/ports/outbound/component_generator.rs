use crate::graph_engine::domain::Component;
use thiserror::Error;

/// A raw project file handed to a generator (manifest, lockfile, SBOM export, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    /// File name as supplied by the user, used in error messages
    pub name: String,
    pub content: String,
}

impl ProjectFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Options controlling how project files become a component list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Kind of project the files describe (e.g. "sbom", "npm", "python")
    pub project_type: String,
    pub include_dev_dependencies: bool,
    pub include_optional_dependencies: bool,
    /// Format the generator should produce internally (e.g. "json")
    pub output_format: String,
    pub include_metadata: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_type: "sbom".to_string(),
            include_dev_dependencies: false,
            include_optional_dependencies: false,
            output_format: "json".to_string(),
            include_metadata: true,
        }
    }
}

/// Typed failure from a generator, carrying a human-readable message
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Unsupported project type '{project_type}'. Supported types: {supported}")]
    UnsupportedProjectType {
        project_type: String,
        supported: String,
    },

    #[error("Payload is too large ({size} bytes). Maximum allowed size is {max} bytes")]
    PayloadTooLarge { size: u64, max: u64 },

    #[error("Invalid input in '{file}': {reason}")]
    InvalidInput { file: String, reason: String },

    #[error("No project files were provided")]
    Empty,
}

/// ComponentGenerator port turning raw project files into a flat component list
///
/// This is the only way components enter the pipeline from raw files. The
/// graph engine is invoked only with a list a generator accepted.
pub trait ComponentGenerator {
    /// # Errors
    /// Returns a [`GenerationError`] describing why the files were rejected
    fn generate(
        &self,
        files: &[ProjectFile],
        config: &GeneratorConfig,
    ) -> Result<Vec<Component>, GenerationError>;
}
