//! sbom-graph - SBOM dependency graph engine
//!
//! This library merges SBOM component lists into one canonical set, builds a
//! cycle-safe dependency tree forest from it, lays the forest out on a 2D
//! grid and exports the result as a standalone document, following hexagonal
//! architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Graph Engine** (`graph_engine`): Domain model and pure services
//!   (merge, filter, build, layout)
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use sbom_graph::prelude::*;
//!
//! let frontend = vec![
//!     Component::new("app", "web", "1.0.0", ComponentType::Application)
//!         .with_dependencies(["react"]),
//!     Component::new("react", "react", "18.2.0", ComponentType::Library),
//! ];
//! let backend = vec![Component::new("api", "api", "2.0.0", ComponentType::Application)];
//!
//! let components = Merger::merge(&[frontend, backend]);
//! let roots = GraphBuilder::default_roots(&components);
//! let forest = LayoutEngine::default().layout(GraphBuilder::build(&roots, &components));
//!
//! let html = HtmlExporter::new()
//!     .export(&forest, &components, &ExportOptions::default())
//!     .unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod adapters;
pub mod application;
pub mod graph_engine;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::exporters::{HtmlExporter, JsonExporter};
    pub use crate::adapters::outbound::filesystem::{
        download_html, FileSystemReader, FileSystemWriter, StdoutPresenter, TempFileDownloadSink,
    };
    pub use crate::adapters::outbound::generators::SbomJsonGenerator;
    pub use crate::application::dto::{OutputFormat, VisualizationRequest, VisualizationResponse};
    pub use crate::application::factories::{ExporterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::VisualizeSbomUseCase;
    pub use crate::graph_engine::domain::{
        Component, ComponentMetadata, ComponentType, ExportOptions, RiskLevel, SbomDocument,
        SbomStatistics, TreeNode, Vulnerability,
    };
    pub use crate::graph_engine::services::{
        ComponentFilter, GraphBuilder, LayoutConfig, LayoutEngine, Merger,
    };
    pub use crate::ports::outbound::{
        ComponentGenerator, DocumentExporter, DownloadSink, GenerationError, GeneratorConfig,
        OutputPresenter, ProgressReporter, ProjectFile, ProjectFileReader, SaveOutcome,
    };
    pub use crate::shared::Result;
}
