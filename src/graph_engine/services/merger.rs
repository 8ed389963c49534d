use crate::graph_engine::domain::Component;
use std::collections::{HashMap, HashSet};

/// Merger service combining several component lists into one canonical list
///
/// Components are deduplicated by `name@version`. The output keeps the order
/// in which keys were first seen, walking sources in the given order and each
/// source in list order.
pub struct Merger;

impl Merger {
    /// Merges `sources` into a canonical component list
    ///
    /// Never fails. Duplicate keys are folded into the first occurrence:
    /// - `dependencies`: union, first-seen order
    /// - `vulnerabilities`: union by vulnerability id
    /// - `risk_level`, `cve_count`: maximum
    /// - `license`, `description`, `publisher`: first non-empty value
    /// - `metadata`: later non-null values fill gaps
    ///
    /// Dependency edges are resolved within their own source: an edge to a
    /// component whose id was folded into another entry, or renamed to keep
    /// ids unique, is rewritten to that entry's canonical id.
    pub fn merge<S>(sources: &[S]) -> Vec<Component>
    where
        S: AsRef<[Component]>,
    {
        let mut canonical: Vec<Component> = Vec::new();
        let mut index_by_key: HashMap<String, usize> = HashMap::new();
        let mut used_ids: HashSet<String> = HashSet::new();

        for source in sources {
            let components = source.as_ref();

            // Pass 1: canonical slot of every component in this source
            let mut canonical_ids: HashMap<&str, String> = HashMap::new();
            let mut slots: Vec<(usize, bool)> = Vec::with_capacity(components.len());
            for component in components {
                let key = component.dedup_key();
                let slot = match index_by_key.get(&key) {
                    Some(&index) => (index, false),
                    None => {
                        let mut first = component.clone();
                        first.id = Self::unique_id(&first.id, &key, &used_ids);
                        used_ids.insert(first.id.clone());
                        index_by_key.insert(key, canonical.len());
                        canonical.push(first);
                        (canonical.len() - 1, true)
                    }
                };
                canonical_ids
                    .entry(component.id.as_str())
                    .or_insert_with(|| canonical[slot.0].id.clone());
                slots.push(slot);
            }

            // Pass 2: edges through the source's id map
            for (component, (index, is_first)) in components.iter().zip(slots) {
                let dependencies: Vec<String> = component
                    .dependencies
                    .iter()
                    .map(|dep| {
                        canonical_ids
                            .get(dep.as_str())
                            .cloned()
                            .unwrap_or_else(|| dep.clone())
                    })
                    .collect();

                if is_first {
                    canonical[index].dependencies = dependencies;
                } else {
                    let mut incoming = component.clone();
                    incoming.dependencies = dependencies;
                    Self::merge_into(&mut canonical[index], &incoming);
                }
            }
        }

        canonical
    }

    /// Folds a later occurrence into the canonical entry
    fn merge_into(existing: &mut Component, incoming: &Component) {
        for dependency in &incoming.dependencies {
            if !existing.dependencies.contains(dependency) {
                existing.dependencies.push(dependency.clone());
            }
        }

        for vulnerability in &incoming.vulnerabilities {
            let known = existing
                .vulnerabilities
                .iter()
                .any(|v| v.id == vulnerability.id);
            if !known {
                existing.vulnerabilities.push(vulnerability.clone());
            }
        }

        existing.risk_level = existing.risk_level.max(incoming.risk_level);
        existing.cve_count = existing.cve_count.max(incoming.cve_count);

        fill_if_empty(&mut existing.description, &incoming.description);
        fill_if_empty(&mut existing.license, &incoming.license);
        fill_if_empty(&mut existing.publisher, &incoming.publisher);

        if let Some(incoming_metadata) = &incoming.metadata {
            match existing.metadata.as_mut() {
                Some(metadata) => metadata.fill_gaps_from(incoming_metadata),
                None => existing.metadata = Some(incoming_metadata.clone()),
            }
        }
    }

    /// Keeps ids unique across distinct keys.
    ///
    /// A second key arriving with an id that is already taken is renamed to
    /// its `name@version` key (suffixed with a counter if that is taken too).
    fn unique_id(id: &str, key: &str, used_ids: &HashSet<String>) -> String {
        if !used_ids.contains(id) {
            return id.to_string();
        }
        if !used_ids.contains(key) {
            return key.to_string();
        }
        (2..)
            .map(|n| format!("{}#{}", key, n))
            .find(|candidate| !used_ids.contains(candidate))
            .unwrap_or_else(|| key.to_string())
    }
}

fn fill_if_empty(target: &mut String, candidate: &str) {
    if target.trim().is_empty() && !candidate.trim().is_empty() {
        *target = candidate.to_string();
    }
}
