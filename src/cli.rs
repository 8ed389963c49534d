use clap::Parser;
use std::path::PathBuf;

use sbom_graph::application::dto::OutputFormat;
use sbom_graph::graph_engine::domain::{ComponentType, RiskLevel};

/// Merge SBOM component lists and render them as a dependency graph
#[derive(Parser, Debug)]
#[command(name = "sbom-graph")]
#[command(version)]
#[command(about = "Merge SBOM component lists and render them as a dependency graph", long_about = None)]
pub struct Args {
    /// Component-list JSON files, merged in the given order
    #[arg(value_name = "FILE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output format: html or json [default: html]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Document title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Document description shown under the title
    #[arg(short, long)]
    pub description: Option<String>,

    /// Omit the metadata block (makes the document byte-for-byte reproducible)
    #[arg(long)]
    pub no_metadata: bool,

    /// Omit the legend
    #[arg(long)]
    pub no_legend: bool,

    /// Omit the statistics block
    #[arg(long)]
    pub no_statistics: bool,

    /// Render an adjacency matrix instead of the tree
    #[arg(long)]
    pub matrix: bool,

    /// Render a single tree rooted at this component id
    #[arg(short, long, value_name = "ID")]
    pub root: Option<String>,

    /// Exclude components matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "eslint-*" -e "jest"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Keep only these component types: application, library, dependency
    #[arg(long = "type", value_name = "TYPE", value_delimiter = ',')]
    pub types: Vec<ComponentType>,

    /// Keep only these risk levels: low, medium, high
    #[arg(long = "risk", value_name = "LEVEL", value_delimiter = ',')]
    pub risk_levels: Vec<RiskLevel>,

    /// Keep only components whose name or description contains this text
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Keep only components with known vulnerabilities
    #[arg(long)]
    pub vulnerable_only: bool,

    /// Include components scoped as development dependencies
    #[arg(long)]
    pub include_dev: bool,

    /// Include components scoped as optional dependencies
    #[arg(long)]
    pub include_optional: bool,

    /// Only print errors and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to config file (default: auto-discover sbom-graph.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
