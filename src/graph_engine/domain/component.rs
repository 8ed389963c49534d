use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Kind of software component in an SBOM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    #[serde(alias = "Application", alias = "APPLICATION")]
    Application,
    #[serde(alias = "Library", alias = "LIBRARY")]
    Library,
    #[serde(alias = "Dependency", alias = "DEPENDENCY")]
    Dependency,
}

impl ComponentType {
    /// All variants in display order
    pub const ALL: [ComponentType; 3] = [
        ComponentType::Application,
        ComponentType::Library,
        ComponentType::Dependency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Application => "application",
            ComponentType::Library => "library",
            ComponentType::Dependency => "dependency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComponentType::Application => "Application",
            ComponentType::Library => "Library",
            ComponentType::Dependency => "Dependency",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "application" | "app" => Ok(ComponentType::Application),
            "library" | "lib" => Ok(ComponentType::Library),
            "dependency" | "dep" => Ok(ComponentType::Dependency),
            _ => Err(format!(
                "Invalid component type: {}. Please specify 'application', 'library' or 'dependency'",
                s
            )),
        }
    }
}

/// Risk classification of a component.
///
/// Variants are declared in ascending severity so that the derived `Ord`
/// gives `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    #[serde(alias = "Low", alias = "LOW")]
    Low,
    #[serde(alias = "Medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "High", alias = "HIGH")]
    High,
}

impl RiskLevel {
    /// All variants from most to least severe, the order used in reports
    pub const BY_SEVERITY: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(format!(
                "Invalid risk level: {}. Please specify 'low', 'medium' or 'high'",
                s
            )),
        }
    }
}

/// A known vulnerability attached to a component, identified by `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub id: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub description: String,
}

impl Vulnerability {
    pub fn new(id: impl Into<String>, severity: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            severity: severity.into(),
            description: description.into(),
        }
    }
}

/// Free-form provenance information (source, package manager, homepage, ...)
///
/// Backed by a sorted JSON object so serialization order never depends on
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentMetadata(Map<String, Value>);

impl ComponentMetadata {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Returns a string-valued entry, ignoring non-string values
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Shallow merge: non-null values from `other` fill keys that are missing
    /// or null here. Existing non-null values are never overwritten.
    pub fn fill_gaps_from(&mut self, other: &ComponentMetadata) {
        for (key, value) in &other.0 {
            if value.is_null() {
                continue;
            }
            let occupied = self.0.get(key).is_some_and(|existing| !existing.is_null());
            if !occupied {
                self.0.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Component - identity unit of an SBOM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub name: String,
    pub version: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub cve_count: u32,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vulnerabilities: Vec<Vulnerability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ComponentMetadata>,
}

impl Component {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        component_type: ComponentType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
            component_type,
            license: String::new(),
            description: String::new(),
            publisher: String::new(),
            risk_level: RiskLevel::Low,
            cve_count: 0,
            dependencies: Vec::new(),
            vulnerabilities: Vec::new(),
            metadata: None,
        }
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_risk(mut self, risk_level: RiskLevel, cve_count: u32) -> Self {
        self.risk_level = risk_level;
        self.cve_count = cve_count;
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    pub fn with_vulnerability(mut self, vulnerability: Vulnerability) -> Self {
        self.vulnerabilities.push(vulnerability);
        self
    }

    pub fn with_metadata(mut self, metadata: ComponentMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Deduplication key used when merging component lists
    pub fn dedup_key(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }

    pub fn is_vulnerable(&self) -> bool {
        self.cve_count > 0 || !self.vulnerabilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert_eq!(RiskLevel::Low.max(RiskLevel::High), RiskLevel::High);
    }

    #[test]
    fn test_risk_level_from_str_case_insensitive() {
        assert_eq!(RiskLevel::from_str("HIGH").unwrap(), RiskLevel::High);
        assert_eq!(RiskLevel::from_str("medium").unwrap(), RiskLevel::Medium);
        assert!(RiskLevel::from_str("critical").is_err());
    }

    #[test]
    fn test_component_type_from_str() {
        assert_eq!(
            ComponentType::from_str("Application").unwrap(),
            ComponentType::Application
        );
        assert_eq!(ComponentType::from_str("lib").unwrap(), ComponentType::Library);
        let err = ComponentType::from_str("framework").unwrap_err();
        assert!(err.contains("Invalid component type"));
    }

    #[test]
    fn test_dedup_key() {
        let component = Component::new("c1", "react", "18.2.0", ComponentType::Library);
        assert_eq!(component.dedup_key(), "react@18.2.0");
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let json = r#"{
            "id": "lodash",
            "name": "lodash",
            "version": "4.17.21",
            "type": "Library",
            "riskLevel": "HIGH",
            "cveCount": 2
        }"#;
        let component: Component = serde_json::from_str(json).unwrap();
        assert_eq!(component.component_type, ComponentType::Library);
        assert_eq!(component.risk_level, RiskLevel::High);
        assert_eq!(component.cve_count, 2);
        assert!(component.license.is_empty());
        assert!(component.dependencies.is_empty());
        assert!(component.metadata.is_none());
    }

    #[test]
    fn test_serialize_uses_camel_case_and_lowercase_enums() {
        let component = Component::new("app", "app", "1.0.0", ComponentType::Application)
            .with_risk(RiskLevel::Medium, 1);
        let json = serde_json::to_string(&component).unwrap();
        assert!(json.contains("\"type\":\"application\""));
        assert!(json.contains("\"riskLevel\":\"medium\""));
        assert!(json.contains("\"cveCount\":1"));
        assert!(!json.contains("vulnerabilities"));
    }

    #[test]
    fn test_metadata_fill_gaps_keeps_existing_values() {
        let mut first = ComponentMetadata::new()
            .with("source", "package.json")
            .with("homepage", Value::Null);
        let second = ComponentMetadata::new()
            .with("source", "lockfile")
            .with("homepage", "https://example.com")
            .with("packageManager", "npm");

        first.fill_gaps_from(&second);

        assert_eq!(first.get_str("source"), Some("package.json"));
        assert_eq!(first.get_str("homepage"), Some("https://example.com"));
        assert_eq!(first.get_str("packageManager"), Some("npm"));
    }

    #[test]
    fn test_is_vulnerable() {
        let clean = Component::new("a", "a", "1", ComponentType::Library);
        assert!(!clean.is_vulnerable());

        let counted = clean.clone().with_risk(RiskLevel::Low, 1);
        assert!(counted.is_vulnerable());

        let listed = clean.with_vulnerability(Vulnerability::new("CVE-2024-1", "HIGH", ""));
        assert!(listed.is_vulnerable());
    }
}
