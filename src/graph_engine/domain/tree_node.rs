use super::{Component, ComponentType, RiskLevel};

/// TreeNode - one occurrence of a component at a specific position in a tree path
///
/// Fields copied from the component are a snapshot taken at build time.
/// A component reachable through two paths yields two independent nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    pub version: String,
    pub component_type: ComponentType,
    pub risk_level: RiskLevel,
    pub cve_count: u32,
    /// Depth from the root of this tree (root = 0)
    pub level: usize,
    pub x: f64,
    pub y: f64,
    pub children: Vec<TreeNode>,
    /// Id of the parent occurrence's component; traversal only, never ownership
    pub parent: Option<String>,
}

impl TreeNode {
    pub fn from_component(component: &Component, level: usize, parent: Option<&str>) -> Self {
        Self {
            id: component.id.clone(),
            name: component.name.clone(),
            version: component.version.clone(),
            component_type: component.component_type,
            risk_level: component.risk_level,
            cve_count: component.cve_count,
            level,
            x: 0.0,
            y: 0.0,
            children: Vec::new(),
            parent: parent.map(str::to_string),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order iterator over this subtree
    pub fn iter(&self) -> TreeIter<'_> {
        TreeIter { stack: vec![self] }
    }
}

// Deep dependency chains would overflow the stack with the recursive drop glue
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Pre-order traversal over a subtree
pub struct TreeIter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for TreeIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Pre-order iterator over every node of a forest
pub fn iter_forest(forest: &[TreeNode]) -> impl Iterator<Item = &TreeNode> {
    forest.iter().flat_map(TreeNode::iter)
}
