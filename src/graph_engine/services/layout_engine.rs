use crate::graph_engine::domain::{iter_forest, TreeNode};

/// Spacing parameters for the layered tree layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal position of level 0
    pub base_offset: f64,
    /// Horizontal distance between consecutive levels
    pub level_gap: f64,
    /// Vertical distance between consecutive leaves
    pub row_height: f64,
    /// Vertical position of the first leaf
    pub top_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_offset: 100.0,
            level_gap: 220.0,
            row_height: 60.0,
            top_offset: 40.0,
        }
    }
}

/// Bounding box of a positioned forest
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// LayoutEngine service assigning coordinates to every tree node
///
/// `x` depends only on depth. `y` is assigned bottom-up: leaves take the next
/// slot of a cursor that advances by `row_height`, internal nodes sit at the
/// midpoint of their first and last child. The cursor is shared by every
/// tree in the forest, so separate trees never overlap either.
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Positions every node of `forest`; only `x` and `y` are touched
    pub fn layout(&self, mut forest: Vec<TreeNode>) -> Vec<TreeNode> {
        let mut rows = self.rows(&forest).into_iter();

        // Same pre-order as `iter_forest`, so rows line up with nodes
        let mut stack: Vec<&mut TreeNode> = forest.iter_mut().rev().collect();
        while let Some(node) = stack.pop() {
            node.x = self.config.base_offset + node.level as f64 * self.config.level_gap;
            node.y = rows.next().unwrap_or(self.config.top_offset);
            stack.extend(node.children.iter_mut().rev());
        }
        forest
    }

    /// `y` of every node, in pre-order
    fn rows(&self, forest: &[TreeNode]) -> Vec<f64> {
        let child_counts: Vec<usize> = iter_forest(forest).map(|n| n.children.len()).collect();

        let mut rows = vec![0.0; child_counts.len()];
        let mut cursor = self.config.top_offset;
        for (row, &count) in rows.iter_mut().zip(&child_counts) {
            if count == 0 {
                *row = cursor;
                cursor += self.config.row_height;
            }
        }

        // A subtree is contiguous in pre-order and starts right after its root,
        // so walking backwards sees every child before its parent.
        let mut sizes = vec![1usize; child_counts.len()];
        for index in (0..child_counts.len()).rev() {
            let count = child_counts[index];
            if count == 0 {
                continue;
            }
            let first = index + 1;
            let mut last = first;
            let mut next = first;
            for _ in 0..count {
                last = next;
                sizes[index] += sizes[next];
                next += sizes[next];
            }
            rows[index] = (rows[first] + rows[last]) / 2.0;
        }
        rows
    }

    /// Extents of all node centers, or `None` for an empty forest
    pub fn bounds(forest: &[TreeNode]) -> Option<LayoutBounds> {
        let mut nodes = iter_forest(forest);
        let first = nodes.next()?;
        let initial = LayoutBounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(nodes.fold(initial, |b, n| LayoutBounds {
            min_x: b.min_x.min(n.x),
            min_y: b.min_y.min(n.y),
            max_x: b.max_x.max(n.x),
            max_y: b.max_y.max(n.y),
        }))
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
