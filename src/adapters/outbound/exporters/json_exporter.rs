use crate::graph_engine::domain::{Component, ExportOptions, TreeNode};
use crate::ports::outbound::DocumentExporter;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// JsonExporter adapter emitting the canonical component list
///
/// The output uses the input schema, so a merged export can be fed back in
/// as a source. Layout and presentation options do not apply.
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExporter for JsonExporter {
    fn export(
        &self,
        _forest: &[TreeNode],
        components: &[Component],
        _options: &ExportOptions,
    ) -> Result<String> {
        let mut json = serde_json::to_string_pretty(components).map_err(|e| SbomError::ExportError {
            format: "JSON".to_string(),
            details: e.to_string(),
        })?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_engine::domain::{ComponentType, RiskLevel, SbomDocument};

    #[test]
    fn test_export_empty_list() {
        let json = JsonExporter::new()
            .export(&[], &[], &ExportOptions::default())
            .unwrap();
        assert_eq!(json.trim(), "[]");
    }

    #[test]
    fn test_export_uses_input_schema() {
        let components = vec![
            Component::new("a", "alpha", "1.0.0", ComponentType::Application)
                .with_dependencies(["b"])
                .with_risk(RiskLevel::High, 3),
            Component::new("b", "beta", "2.0.0", ComponentType::Dependency),
        ];
        let json = JsonExporter::new()
            .export(&[], &components, &ExportOptions::default())
            .unwrap();

        assert!(json.contains("\"type\": \"application\""));
        assert!(json.contains("\"riskLevel\": \"high\""));
        assert!(json.contains("\"cveCount\": 3"));
        assert_eq!(SbomDocument::parse(&json).unwrap(), components);
    }
}
