use crate::graph_engine::domain::{ComponentType, RiskLevel};
use crate::graph_engine::services::LayoutConfig;
use crate::ports::outbound::GeneratorConfig;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::PathBuf;

/// VisualizationRequest - input of the visualization use case
///
/// Built through [`VisualizationRequest::builder`], which validates sources
/// and layout spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizationRequest {
    /// Component-list files, merged in this order
    pub sources: Vec<PathBuf>,
    /// Designated root component id
    pub root: Option<String>,
    pub exclude_patterns: Vec<String>,
    pub types: Vec<ComponentType>,
    pub risk_levels: Vec<RiskLevel>,
    pub search: Option<String>,
    pub vulnerable_only: bool,
    pub generator_config: GeneratorConfig,
    pub layout: LayoutConfig,
}

impl VisualizationRequest {
    pub fn builder() -> VisualizationRequestBuilder {
        VisualizationRequestBuilder::default()
    }
}

/// Builder for [`VisualizationRequest`]
#[derive(Debug, Default)]
pub struct VisualizationRequestBuilder {
    sources: Vec<PathBuf>,
    root: Option<String>,
    exclude_patterns: Vec<String>,
    types: Vec<ComponentType>,
    risk_levels: Vec<RiskLevel>,
    search: Option<String>,
    vulnerable_only: bool,
    generator_config: GeneratorConfig,
    layout: LayoutConfig,
}

impl VisualizationRequestBuilder {
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(path.into());
        self
    }

    pub fn sources<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.sources.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn root(mut self, root: Option<String>) -> Self {
        self.root = root.filter(|r| !r.trim().is_empty());
        self
    }

    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn types(mut self, types: Vec<ComponentType>) -> Self {
        self.types = types;
        self
    }

    pub fn risk_levels(mut self, risk_levels: Vec<RiskLevel>) -> Self {
        self.risk_levels = risk_levels;
        self
    }

    pub fn search(mut self, search: Option<String>) -> Self {
        self.search = search.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn vulnerable_only(mut self, enabled: bool) -> Self {
        self.vulnerable_only = enabled;
        self
    }

    pub fn generator_config(mut self, config: GeneratorConfig) -> Self {
        self.generator_config = config;
        self
    }

    pub fn layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// # Errors
    /// Returns a validation error when no source is given or the layout
    /// spacing is not a positive finite number
    pub fn build(self) -> Result<VisualizationRequest> {
        if self.sources.is_empty() {
            return Err(SbomError::Validation {
                message: "At least one input file is required".to_string(),
            }
            .into());
        }
        validate_layout(&self.layout)?;

        Ok(VisualizationRequest {
            sources: self.sources,
            root: self.root,
            exclude_patterns: self.exclude_patterns,
            types: self.types,
            risk_levels: self.risk_levels,
            search: self.search,
            vulnerable_only: self.vulnerable_only,
            generator_config: self.generator_config,
            layout: self.layout,
        })
    }
}

fn validate_layout(layout: &LayoutConfig) -> Result<()> {
    let gaps = [("level_gap", layout.level_gap), ("row_height", layout.row_height)];
    for (name, value) in gaps {
        if !value.is_finite() || value <= 0.0 {
            return Err(SbomError::Validation {
                message: format!("layout.{} must be a positive number, got {}", name, value),
            }
            .into());
        }
    }

    let offsets = [("base_offset", layout.base_offset), ("top_offset", layout.top_offset)];
    for (name, value) in offsets {
        if !value.is_finite() {
            return Err(SbomError::Validation {
                message: format!("layout.{} must be a finite number, got {}", name, value),
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_defaults() {
        let request = VisualizationRequest::builder()
            .source("frontend.json")
            .build()
            .unwrap();

        assert_eq!(request.sources, vec![PathBuf::from("frontend.json")]);
        assert_eq!(request.layout, LayoutConfig::default());
        assert_eq!(request.generator_config, GeneratorConfig::default());
        assert!(request.root.is_none());
        assert!(!request.vulnerable_only);
    }

    #[test]
    fn test_build_requires_source() {
        let err = VisualizationRequest::builder().build().unwrap_err();
        assert!(err.to_string().contains("At least one input file"));
    }

    #[test]
    fn test_build_rejects_non_positive_gap() {
        let layout = LayoutConfig {
            row_height: 0.0,
            ..LayoutConfig::default()
        };
        let err = VisualizationRequest::builder()
            .source("a.json")
            .layout(layout)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("layout.row_height"));
    }

    #[test]
    fn test_build_rejects_nan_offset() {
        let layout = LayoutConfig {
            top_offset: f64::NAN,
            ..LayoutConfig::default()
        };
        let result = VisualizationRequest::builder()
            .source("a.json")
            .layout(layout)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_root_and_search_are_ignored() {
        let request = VisualizationRequest::builder()
            .sources(["a.json", "b.json"])
            .root(Some("  ".to_string()))
            .search(Some(String::new()))
            .build()
            .unwrap();
        assert_eq!(request.sources.len(), 2);
        assert!(request.root.is_none());
        assert!(request.search.is_none());
    }
}
