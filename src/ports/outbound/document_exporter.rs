use crate::graph_engine::domain::{Component, ExportOptions, TreeNode};
use crate::shared::Result;

/// DocumentExporter port for serializing a positioned forest
///
/// Implementations read node geometry from the forest as-is and never
/// re-run the layout.
pub trait DocumentExporter {
    /// Serializes `forest` and the canonical `components` it was built from
    ///
    /// # Arguments
    /// * `forest` - Positioned tree nodes
    /// * `components` - Canonical (possibly filtered) component set; statistics
    ///   and matrix views are computed from this, not from the forest
    /// * `options` - Title, description and optional sections
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn export(
        &self,
        forest: &[TreeNode],
        components: &[Component],
        options: &ExportOptions,
    ) -> Result<String>;
}
