use crate::graph_engine::domain::{Component, ComponentType, TreeNode};
use std::collections::{HashMap, HashSet};

/// GraphBuilder service turning a canonical component list into a tree forest
///
/// Cycle detection is scoped to the current root-to-node path: a component
/// is cut off only when it already appears among its own ancestors. Each
/// child branch gets its own copy of the ancestor set, so a component
/// reachable along two paths (a diamond) is materialized once per path.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds one tree per root id, in the order given
    ///
    /// Root ids missing from `components` produce no tree.
    pub fn build(roots: &[String], components: &[Component]) -> Vec<TreeNode> {
        let index: HashMap<&str, &Component> =
            components.iter().map(|c| (c.id.as_str(), c)).collect();

        roots
            .iter()
            .filter_map(|root| Self::build_tree(root, &index))
            .collect()
    }

    /// Every component that no *other* component depends on, in canonical order
    ///
    /// A self-loop does not disqualify a root. When every component is
    /// referenced by another one (the whole set is a cycle), the first
    /// component is used so the graph is never silently empty.
    pub fn default_roots(components: &[Component]) -> Vec<String> {
        let referenced: HashSet<&str> = components
            .iter()
            .flat_map(|c| {
                c.dependencies
                    .iter()
                    .filter(move |dep| dep.as_str() != c.id)
                    .map(String::as_str)
            })
            .collect();

        let roots: Vec<String> = components
            .iter()
            .filter(|c| !referenced.contains(c.id.as_str()))
            .map(|c| c.id.clone())
            .collect();

        if roots.is_empty() {
            return components.first().map(|c| vec![c.id.clone()]).unwrap_or_default();
        }
        roots
    }

    /// Single application root: the designated id when it exists,
    /// otherwise the first Application-type component
    pub fn application_root(components: &[Component], designated: Option<&str>) -> Option<String> {
        if let Some(id) = designated {
            if components.iter().any(|c| c.id == id) {
                return Some(id.to_string());
            }
        }
        components
            .iter()
            .find(|c| c.component_type == ComponentType::Application)
            .map(|c| c.id.clone())
    }

    /// Builds the tree under `root_id` with an explicit work stack
    ///
    /// Each frame is one node on the current root-to-node path; `on_path`
    /// holds exactly the ids of those frames, so a component is cut off only
    /// when it is one of its own ancestors.
    fn build_tree(root_id: &str, index: &HashMap<&str, &Component>) -> Option<TreeNode> {
        // Dangling root
        let root = *index.get(root_id)?;

        let mut on_path: HashSet<&str> = HashSet::from([root.id.as_str()]);
        let mut stack = vec![Frame {
            node: TreeNode::from_component(root, 0, None),
            component: root,
            next_dependency: 0,
        }];

        loop {
            let frame = stack.last_mut()?;
            let component = frame.component;

            if let Some(dependency) = component.dependencies.get(frame.next_dependency) {
                frame.next_dependency += 1;

                // Dangling edge
                let Some(&child) = index.get(dependency.as_str()) else {
                    continue;
                };
                // Cycle on this path
                if !on_path.insert(child.id.as_str()) {
                    continue;
                }

                let level = stack.len();
                stack.push(Frame {
                    node: TreeNode::from_component(child, level, Some(component.id.as_str())),
                    component: child,
                    next_dependency: 0,
                });
                continue;
            }

            let finished = stack.pop()?;
            on_path.remove(finished.component.id.as_str());
            match stack.last_mut() {
                Some(parent) => parent.node.children.push(finished.node),
                None => return Some(finished.node),
            }
        }
    }
}

/// A node under construction and the next dependency to visit
struct Frame<'a> {
    node: TreeNode,
    component: &'a Component,
    next_dependency: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_engine::domain::iter_forest;

    fn lib(id: &str, deps: &[&str]) -> Component {
        Component::new(id, id, "1.0.0", ComponentType::Library).with_dependencies(deps.iter().copied())
    }

    fn ids(roots: &[&str]) -> Vec<String> {
        roots.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_build_simple_chain() {
        let components = vec![lib("a", &["b"]), lib("b", &["c"]), lib("c", &[])];
        let forest = GraphBuilder::build(&ids(&["a"]), &components);

        assert_eq!(forest.len(), 1);
        let a = &forest[0];
        assert_eq!(a.level, 0);
        assert!(a.parent.is_none());
        let b = &a.children[0];
        assert_eq!(b.id, "b");
        assert_eq!(b.level, 1);
        assert_eq!(b.parent.as_deref(), Some("a"));
        assert_eq!(b.children[0].id, "c");
        assert_eq!(b.children[0].level, 2);
    }

    #[test]
    fn test_children_follow_dependency_order() {
        let components = vec![lib("r", &["z", "a", "m"]), lib("a", &[]), lib("m", &[]), lib("z", &[])];
        let forest = GraphBuilder::build(&ids(&["r"]), &components);
        let children: Vec<&str> = forest[0].children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(children, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_two_cycle_terminates() {
        let components = vec![lib("a", &["b"]), lib("b", &["a"])];
        let forest = GraphBuilder::build(&ids(&["a"]), &components);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].id, "b");
        assert!(forest[0].children[0].children.is_empty());
    }

    #[test]
    fn test_self_loop_terminates() {
        let components = vec![lib("a", &["a"])];
        let forest = GraphBuilder::build(&ids(&["a"]), &components);

        assert_eq!(forest.len(), 1);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn test_diamond_is_preserved() {
        let components = vec![
            lib("r", &["a", "b"]),
            lib("a", &["c"]),
            lib("b", &["c"]),
            lib("c", &[]),
        ];
        let forest = GraphBuilder::build(&ids(&["r"]), &components);

        let c_nodes: Vec<&TreeNode> = iter_forest(&forest).filter(|n| n.id == "c").collect();
        assert_eq!(c_nodes.len(), 2);
        assert_eq!(c_nodes[0].parent.as_deref(), Some("a"));
        assert_eq!(c_nodes[1].parent.as_deref(), Some("b"));
        assert_eq!(forest[0].children[0].children[0].id, "c");
        assert_eq!(forest[0].children[1].children[0].id, "c");
    }

    #[test]
    fn test_diamond_below_cycle_is_not_collapsed() {
        // r -> a -> c -> a (cycle), r -> b -> c
        let components = vec![
            lib("r", &["a", "b"]),
            lib("a", &["c"]),
            lib("b", &["c"]),
            lib("c", &["a"]),
        ];
        let forest = GraphBuilder::build(&ids(&["r"]), &components);

        // r, a, c (a cut), b, c, a, (c cut)
        let visited: Vec<&str> = iter_forest(&forest).map(|n| n.id.as_str()).collect();
        assert_eq!(visited, vec!["r", "a", "c", "b", "c", "a"]);
    }

    #[test]
    fn test_dangling_edges_are_dropped() {
        let components = vec![lib("a", &["missing", "b"]), lib("b", &[])];
        let forest = GraphBuilder::build(&ids(&["a", "ghost"]), &components);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].id, "b");
    }

    #[test]
    fn test_deep_chain_builds_in_full() {
        let depth = 10_000;
        let components: Vec<Component> = (0..depth)
            .map(|i| {
                let next = format!("n{}", i + 1);
                let deps: Vec<&str> = if i + 1 < depth { vec![next.as_str()] } else { vec![] };
                lib(&format!("n{}", i), &deps)
            })
            .collect();

        let forest = GraphBuilder::build(&ids(&["n0"]), &components);

        assert_eq!(iter_forest(&forest).count(), depth);
        let deepest = iter_forest(&forest).last().unwrap();
        assert_eq!(deepest.level, depth - 1);
        assert_eq!(deepest.parent.as_deref(), Some("n9998"));
    }

    #[test]
    fn test_build_empty() {
        assert!(GraphBuilder::build(&[], &[]).is_empty());
        assert!(GraphBuilder::default_roots(&[]).is_empty());
    }

    #[test]
    fn test_default_roots_unreferenced_components() {
        let components = vec![
            lib("a", &["c"]),
            lib("b", &["c"]),
            lib("c", &[]),
            lib("d", &["d"]),
        ];
        assert_eq!(GraphBuilder::default_roots(&components), ids(&["a", "b", "d"]));
    }

    #[test]
    fn test_default_roots_pure_cycle_falls_back_to_first() {
        let components = vec![lib("a", &["b"]), lib("b", &["a"])];
        assert_eq!(GraphBuilder::default_roots(&components), ids(&["a"]));
    }

    #[test]
    fn test_application_root() {
        let components = vec![
            lib("lib", &[]),
            Component::new("app", "app", "1", ComponentType::Application),
            Component::new("app2", "app2", "1", ComponentType::Application),
        ];
        assert_eq!(
            GraphBuilder::application_root(&components, None),
            Some("app".to_string())
        );
        assert_eq!(
            GraphBuilder::application_root(&components, Some("app2")),
            Some("app2".to_string())
        );
        assert_eq!(
            GraphBuilder::application_root(&components, Some("nope")),
            Some("app".to_string())
        );
        assert_eq!(GraphBuilder::application_root(&[lib("x", &[])], None), None);
    }

    #[test]
    fn test_nodes_are_snapshots() {
        let mut components = vec![lib("a", &[])];
        let forest = GraphBuilder::build(&ids(&["a"]), &components);
        components[0].name = "renamed".to_string();
        assert_eq!(forest[0].name, "a");
    }
}
