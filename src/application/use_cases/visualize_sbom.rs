use crate::application::dto::{VisualizationRequest, VisualizationResponse};
use crate::graph_engine::domain::{iter_forest, Component, SbomStatistics};
use crate::graph_engine::services::{ComponentFilter, GraphBuilder, LayoutEngine, Merger};
use crate::ports::outbound::{ComponentGenerator, ProgressReporter, ProjectFileReader};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::Path;

/// VisualizeSbomUseCase - turns component-list files into a positioned forest
///
/// Reads every source, runs it through the generator, then merges, filters,
/// selects roots, builds and lays out the graph. Only the read and generate
/// steps can fail; the graph engine itself never does.
///
/// # Type Parameters
/// * `R` - ProjectFileReader implementation
/// * `G` - ComponentGenerator implementation
/// * `P` - ProgressReporter implementation
pub struct VisualizeSbomUseCase<R, G, P> {
    file_reader: R,
    generator: G,
    progress_reporter: P,
}

impl<R, G, P> VisualizeSbomUseCase<R, G, P>
where
    R: ProjectFileReader,
    G: ComponentGenerator,
    P: ProgressReporter,
{
    pub fn new(file_reader: R, generator: G, progress_reporter: P) -> Self {
        Self {
            file_reader,
            generator,
            progress_reporter,
        }
    }

    /// Executes the visualization pipeline
    ///
    /// # Errors
    /// Returns an error if a source cannot be read, is rejected by the
    /// generator, or an exclude pattern is invalid
    pub fn execute(&self, request: VisualizationRequest) -> Result<VisualizationResponse> {
        // Step 1: Read and generate every source
        let sources = self.load_sources(&request)?;

        // Step 2: Merge into the canonical list
        let merged = Merger::merge(&sources);
        self.progress_reporter.report(&format!(
            "🔗 Merged into {} unique component(s)",
            merged.len()
        ));

        // Step 3: Derived view
        let (components, unmatched_patterns) = self.apply_filters(merged, &request)?;

        // Step 4: Build and position the forest
        let roots = self.select_roots(&components, request.root.as_deref());
        let forest = GraphBuilder::build(&roots, &components);
        let forest = LayoutEngine::new(request.layout).layout(forest);
        self.progress_reporter.report(&format!(
            "🌳 Built {} tree(s) with {} node(s)",
            forest.len(),
            iter_forest(&forest).count()
        ));

        let statistics = SbomStatistics::from_components(&components);

        Ok(VisualizationResponse {
            components,
            forest,
            statistics,
            unmatched_patterns,
        })
    }

    fn load_sources(&self, request: &VisualizationRequest) -> Result<Vec<Vec<Component>>> {
        let total = request.sources.len();
        self.progress_reporter
            .report(&format!("📖 Loading {} SBOM source(s)...", total));

        let mut sources = Vec::with_capacity(total);
        for (index, path) in request.sources.iter().enumerate() {
            sources.push(self.load_source(path, request)?);
            self.progress_reporter.report_progress(
                index + 1,
                total,
                Some(&path.display().to_string()),
            );
        }

        let loaded: usize = sources.iter().map(Vec::len).sum();
        self.progress_reporter.report(&format!(
            "✅ Loaded {} component(s) from {} source(s)",
            loaded, total
        ));
        Ok(sources)
    }

    fn load_source(&self, path: &Path, request: &VisualizationRequest) -> Result<Vec<Component>> {
        let file = self.file_reader.read_project_file(path)?;
        let components = self
            .generator
            .generate(std::slice::from_ref(&file), &request.generator_config)
            .map_err(|e| SbomError::InvalidSbom {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        Ok(components)
    }

    /// Applies the request's filter criteria
    ///
    /// An empty result is not an error: it renders as an empty graph.
    fn apply_filters(
        &self,
        components: Vec<Component>,
        request: &VisualizationRequest,
    ) -> Result<(Vec<Component>, Vec<String>)> {
        let mut filter = ComponentFilter::new()
            .with_exclude_patterns(request.exclude_patterns.clone())?
            .with_types(request.types.iter().copied())
            .with_risk_levels(request.risk_levels.iter().copied())
            .vulnerable_only(request.vulnerable_only);
        if let Some(term) = &request.search {
            filter = filter.with_search(term.as_str());
        }

        if filter.is_pass_through() {
            return Ok((components, Vec::new()));
        }

        let original_count = components.len();
        let filtered = filter.apply(&components);

        let removed = original_count - filtered.len();
        if removed > 0 {
            self.progress_reporter
                .report(&format!("🚫 Filtered out {} component(s)", removed));
        }
        if filtered.is_empty() && original_count > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: All {} component(s) were filtered out. The graph will be empty.",
                original_count
            ));
        }

        let unmatched_patterns = filter.unmatched_patterns();
        for pattern in &unmatched_patterns {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any component.",
                pattern
            ));
        }

        Ok((filtered, unmatched_patterns))
    }

    fn select_roots(&self, components: &[Component], designated: Option<&str>) -> Vec<String> {
        let Some(designated) = designated else {
            return GraphBuilder::default_roots(components);
        };

        match GraphBuilder::application_root(components, Some(designated)) {
            Some(root) => {
                if root != designated {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Root '{}' not found, using application '{}' instead.",
                        designated, root
                    ));
                }
                vec![root]
            }
            None => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Root '{}' not found and no application component exists. Showing all top-level components.",
                    designated
                ));
                GraphBuilder::default_roots(components)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_engine::domain::{ComponentType, RiskLevel};
    use crate::ports::outbound::{GenerationError, GeneratorConfig, ProjectFile};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct InMemoryReader {
        files: HashMap<PathBuf, String>,
    }

    impl ProjectFileReader for InMemoryReader {
        fn read_project_file(&self, path: &Path) -> Result<ProjectFile> {
            let content = self
                .files
                .get(path)
                .ok_or_else(|| anyhow::anyhow!("missing {}", path.display()))?;
            Ok(ProjectFile::new(path.display().to_string(), content.clone()))
        }
    }

    /// Generator returning a fixed component list per file name
    struct TableGenerator {
        table: HashMap<String, Vec<Component>>,
    }

    impl ComponentGenerator for TableGenerator {
        fn generate(
            &self,
            files: &[ProjectFile],
            _config: &GeneratorConfig,
        ) -> std::result::Result<Vec<Component>, GenerationError> {
            let file = files.first().ok_or(GenerationError::Empty)?;
            self.table
                .get(&file.name)
                .cloned()
                .ok_or_else(|| GenerationError::InvalidInput {
                    file: file.name.clone(),
                    reason: "unknown".to_string(),
                })
        }
    }

    #[derive(Default)]
    struct CollectingReporter {
        errors: RefCell<Vec<String>>,
    }

    impl ProgressReporter for CollectingReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
        fn report_completion(&self, _message: &str) {}
    }

    fn use_case(
        sources: Vec<(&str, Vec<Component>)>,
    ) -> VisualizeSbomUseCase<InMemoryReader, TableGenerator, CollectingReporter> {
        let files = sources
            .iter()
            .map(|(name, _)| (PathBuf::from(name), String::new()))
            .collect();
        let table = sources
            .into_iter()
            .map(|(name, components)| (name.to_string(), components))
            .collect();
        VisualizeSbomUseCase::new(
            InMemoryReader { files },
            TableGenerator { table },
            CollectingReporter::default(),
        )
    }

    fn frontend() -> Vec<Component> {
        vec![
            Component::new("app", "web", "1.0.0", ComponentType::Application)
                .with_dependencies(["react"]),
            Component::new("react", "react", "18.2.0", ComponentType::Library),
        ]
    }

    fn backend() -> Vec<Component> {
        vec![
            Component::new("react-2", "react", "18.2.0", ComponentType::Library)
                .with_dependencies(["lodash"])
                .with_risk(RiskLevel::High, 1),
            Component::new("lodash", "lodash", "4.17.21", ComponentType::Dependency),
        ]
    }

    #[test]
    fn test_execute_merges_sources() {
        let use_case = use_case(vec![("a.json", frontend()), ("b.json", backend())]);
        let request = VisualizationRequest::builder()
            .sources(["a.json", "b.json"])
            .build()
            .unwrap();

        let response = use_case.execute(request).unwrap();

        assert_eq!(response.components.len(), 3);
        assert_eq!(response.statistics.total, 3);
        assert_eq!(response.statistics.high_risk, 1);
        // react keeps its first id; lodash is referenced, so "app" is the only root
        assert_eq!(response.forest.len(), 1);
        assert_eq!(response.forest[0].id, "app");
        assert_eq!(response.forest[0].x, 100.0);
    }

    #[test]
    fn test_execute_designated_root() {
        let use_case = use_case(vec![("a.json", frontend())]);
        let request = VisualizationRequest::builder()
            .source("a.json")
            .root(Some("react".to_string()))
            .build()
            .unwrap();

        let response = use_case.execute(request).unwrap();
        assert_eq!(response.forest.len(), 1);
        assert_eq!(response.forest[0].id, "react");
        assert!(use_case.progress_reporter.errors.borrow().is_empty());
    }

    #[test]
    fn test_execute_missing_root_falls_back_to_application() {
        let use_case = use_case(vec![("a.json", frontend())]);
        let request = VisualizationRequest::builder()
            .source("a.json")
            .root(Some("nope".to_string()))
            .build()
            .unwrap();

        let response = use_case.execute(request).unwrap();
        assert_eq!(response.forest[0].id, "app");
        assert!(use_case.progress_reporter.errors.borrow()[0].contains("Root 'nope' not found"));
    }

    #[test]
    fn test_execute_filters_and_reports_unmatched() {
        let use_case = use_case(vec![("a.json", frontend())]);
        let request = VisualizationRequest::builder()
            .source("a.json")
            .exclude_patterns(vec!["react".to_string(), "vue*".to_string()])
            .build()
            .unwrap();

        let response = use_case.execute(request).unwrap();
        assert_eq!(response.components.len(), 1);
        assert_eq!(response.unmatched_patterns, vec!["vue*"]);
        // dangling edge to the excluded component is dropped
        assert!(response.forest[0].children.is_empty());
    }

    #[test]
    fn test_execute_everything_filtered_is_not_an_error() {
        let use_case = use_case(vec![("a.json", frontend())]);
        let request = VisualizationRequest::builder()
            .source("a.json")
            .vulnerable_only(true)
            .build()
            .unwrap();

        let response = use_case.execute(request).unwrap();
        assert!(response.components.is_empty());
        assert!(response.forest.is_empty());
        assert!(use_case.progress_reporter.errors.borrow()[0].contains("filtered out"));
    }

    #[test]
    fn test_execute_generator_error_names_path() {
        let use_case = use_case(vec![("a.json", frontend())]);
        let mut request = VisualizationRequest::builder()
            .source("a.json")
            .build()
            .unwrap();
        request.sources = vec![PathBuf::from("a.json"), PathBuf::from("missing.json")];

        let err = use_case.execute(request).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
