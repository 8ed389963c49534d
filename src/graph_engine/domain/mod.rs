pub mod component;
pub mod export_options;
pub mod sbom_document;
pub mod statistics;
pub mod tree_node;

pub use component::{Component, ComponentMetadata, ComponentType, RiskLevel, Vulnerability};
pub use export_options::ExportOptions;
pub use sbom_document::{SbomDocument, SchemaViolation};
pub use statistics::SbomStatistics;
pub use tree_node::{iter_forest, TreeNode};
