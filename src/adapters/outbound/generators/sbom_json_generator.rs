use crate::graph_engine::domain::{Component, SbomDocument};
use crate::ports::outbound::{ComponentGenerator, GenerationError, GeneratorConfig, ProjectFile};
use crate::shared::security::MAX_FILE_SIZE;

/// Project types this generator accepts
pub const SUPPORTED_PROJECT_TYPES: &[&str] = &["sbom"];

const SUPPORTED_OUTPUT_FORMAT: &str = "json";

/// SbomJsonGenerator adapter for pre-generated component lists
///
/// Each file must be a component-list document (a JSON array, or an object
/// with a `components` array). Components from several files are
/// concatenated in file order; merging is left to the graph engine.
pub struct SbomJsonGenerator {
    max_payload: u64,
}

impl SbomJsonGenerator {
    pub fn new() -> Self {
        Self {
            max_payload: MAX_FILE_SIZE,
        }
    }

    pub fn with_max_payload(max_payload: u64) -> Self {
        Self { max_payload }
    }

    fn check_config(config: &GeneratorConfig) -> Result<(), GenerationError> {
        let project_type = config.project_type.to_lowercase();
        if !SUPPORTED_PROJECT_TYPES.contains(&project_type.as_str()) {
            return Err(GenerationError::UnsupportedProjectType {
                project_type: config.project_type.clone(),
                supported: SUPPORTED_PROJECT_TYPES.join(", "),
            });
        }
        if !config.output_format.eq_ignore_ascii_case(SUPPORTED_OUTPUT_FORMAT) {
            return Err(GenerationError::InvalidInput {
                file: "generator configuration".to_string(),
                reason: format!(
                    "output format '{}' is not supported, expected '{}'",
                    config.output_format, SUPPORTED_OUTPUT_FORMAT
                ),
            });
        }
        Ok(())
    }

    /// Whether the component's declared scope is enabled by `config`
    fn in_scope(component: &Component, config: &GeneratorConfig) -> bool {
        let scope = component
            .metadata
            .as_ref()
            .and_then(|m| m.get_str("scope"))
            .map(str::to_lowercase);
        match scope.as_deref() {
            Some("dev") | Some("development") => config.include_dev_dependencies,
            Some("optional") => config.include_optional_dependencies,
            _ => true,
        }
    }
}

impl Default for SbomJsonGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentGenerator for SbomJsonGenerator {
    fn generate(
        &self,
        files: &[ProjectFile],
        config: &GeneratorConfig,
    ) -> Result<Vec<Component>, GenerationError> {
        Self::check_config(config)?;

        if files.is_empty() {
            return Err(GenerationError::Empty);
        }

        let size: u64 = files.iter().map(ProjectFile::size).sum();
        if size > self.max_payload {
            return Err(GenerationError::PayloadTooLarge {
                size,
                max: self.max_payload,
            });
        }

        let mut components = Vec::new();
        for file in files {
            let parsed = SbomDocument::parse(&file.content).map_err(|e| {
                GenerationError::InvalidInput {
                    file: file.name.clone(),
                    reason: e.to_string(),
                }
            })?;
            components.extend(parsed);
        }

        components.retain(|c| Self::in_scope(c, config));
        if !config.include_metadata {
            for component in &mut components {
                component.metadata = None;
            }
        }

        Ok(components)
    }
}
