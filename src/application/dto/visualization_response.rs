use crate::graph_engine::domain::{Component, SbomStatistics, TreeNode};

/// VisualizationResponse - output of the visualization use case
///
/// Holds everything an exporter needs: the canonical (filtered) component
/// list, the positioned forest built from it and its statistics.
#[derive(Debug, Clone)]
pub struct VisualizationResponse {
    pub components: Vec<Component>,
    pub forest: Vec<TreeNode>,
    pub statistics: SbomStatistics,
    /// Exclude patterns that matched no component
    pub unmatched_patterns: Vec<String>,
}
