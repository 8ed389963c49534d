use super::escape::escape_html;
use super::palette::{risk_color, risk_color_for, type_color};
use super::svg::{render_matrix, render_tree};
use crate::graph_engine::domain::{
    iter_forest, Component, ComponentType, ExportOptions, RiskLevel, SbomStatistics, TreeNode,
};
use crate::ports::outbound::DocumentExporter;
use crate::shared::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

const STYLE: &str = r#"body { font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; margin: 24px; color: #111827; }
header h1 { margin: 0 0 4px 0; font-size: 22px; }
header p { margin: 0; color: #4B5563; }
section { margin-top: 16px; }
dl.metadata { display: grid; grid-template-columns: max-content auto; gap: 2px 12px; font-size: 13px; }
dl.metadata dt { color: #6B7280; }
table { border-collapse: collapse; font-size: 13px; }
th, td { border: 1px solid #E5E7EB; padding: 4px 10px; text-align: left; }
.legend { display: flex; flex-wrap: wrap; gap: 8px 20px; font-size: 13px; }
.legend-item { display: flex; align-items: center; gap: 6px; }
.swatch { width: 14px; height: 14px; border-radius: 3px; display: inline-block; }
.swatch.outline { background: transparent; border: 3px solid; box-sizing: border-box; }
.graph-container { margin-top: 20px; overflow: auto; border: 1px solid #E5E7EB; }
.node-name { font-size: 12px; fill: #FFFFFF; font-weight: 600; }
.node-version { font-size: 10px; fill: #F9FAFB; }
.row-label, .col-label { font-size: 11px; fill: #374151; }
.empty { font-size: 14px; fill: #6B7280; }
.severity { color: #FFFFFF; border-radius: 3px; padding: 0 6px; }"#;

/// HtmlExporter adapter producing a standalone HTML document
///
/// The document embeds a single SVG graphic (tree or adjacency matrix) and
/// optional metadata, statistics and legend sections. Every piece of
/// SBOM-originated text is escaped. With metadata disabled, identical input
/// gives byte-identical output.
pub struct HtmlExporter {
    timestamp: Option<DateTime<Utc>>,
}

impl HtmlExporter {
    pub fn new() -> Self {
        Self { timestamp: None }
    }

    /// Exporter stamping every document with a fixed generation time
    pub fn with_timestamp(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: Some(timestamp),
        }
    }

    fn generated_at(&self) -> String {
        self.timestamp
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl HtmlExporter {
    fn render_head(&self, output: &mut String, options: &ExportOptions) {
        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n");
        output.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        let _ = writeln!(output, "<title>{}</title>", escape_html(&options.title));
        let _ = writeln!(output, "<style>\n{}\n</style>", STYLE);
        output.push_str("</head>\n<body>\n");
    }

    fn render_header(&self, output: &mut String, options: &ExportOptions) {
        output.push_str("<header>\n");
        let _ = writeln!(output, "<h1>{}</h1>", escape_html(&options.title));
        if !options.description.trim().is_empty() {
            let _ = writeln!(
                output,
                "<p class=\"description\">{}</p>",
                escape_html(&options.description)
            );
        }
        output.push_str("</header>\n");
    }

    fn render_metadata(&self, output: &mut String, components: &[Component]) {
        output.push_str("<section class=\"metadata\">\n<h2>Metadata</h2>\n<dl class=\"metadata\">\n");
        let _ = writeln!(output, "<dt>Generated</dt><dd>{}</dd>", self.generated_at());
        let _ = writeln!(output, "<dt>Tool</dt><dd>{} {}</dd>", TOOL_NAME, TOOL_VERSION);
        let _ = writeln!(output, "<dt>Components</dt><dd>{}</dd>", components.len());
        output.push_str("</dl>\n</section>\n");
    }

    fn render_statistics(&self, output: &mut String, components: &[Component]) {
        let stats = SbomStatistics::from_components(components);

        output.push_str("<section class=\"statistics\">\n<h2>Statistics</h2>\n<table>\n");
        output.push_str("<tr><th>Metric</th><th>Count</th></tr>\n");
        let _ = writeln!(output, "<tr><td>Total components</td><td>{}</td></tr>", stats.total);
        for component_type in ComponentType::ALL {
            let _ = writeln!(
                output,
                "<tr><td>{}</td><td>{}</td></tr>",
                plural(component_type),
                stats.count_for_type(component_type)
            );
        }
        for risk_level in RiskLevel::BY_SEVERITY {
            let _ = writeln!(
                output,
                "<tr><td>{} risk</td><td>{}</td></tr>",
                risk_level.label(),
                stats.count_for_risk(risk_level)
            );
        }
        let _ = writeln!(output, "<tr><td>Known CVEs</td><td>{}</td></tr>", stats.total_cves);
        output.push_str("</table>\n</section>\n");

        self.render_vulnerabilities(output, components);
    }

    fn render_vulnerabilities(&self, output: &mut String, components: &[Component]) {
        let rows: Vec<_> = components
            .iter()
            .flat_map(|c| c.vulnerabilities.iter().map(move |v| (c, v)))
            .collect();
        if rows.is_empty() {
            return;
        }

        output.push_str("<section class=\"vulnerabilities\">\n<h2>Vulnerabilities</h2>\n<table>\n");
        output.push_str("<tr><th>Component</th><th>ID</th><th>Severity</th><th>Description</th></tr>\n");
        for (component, vulnerability) in rows {
            let _ = writeln!(
                output,
                "<tr><td>{}</td><td>{}</td><td><span class=\"severity\" style=\"background: {}\">{}</span></td><td>{}</td></tr>",
                escape_html(&component.dedup_key()),
                escape_html(&vulnerability.id),
                risk_color_for(&vulnerability.severity),
                escape_html(&vulnerability.severity),
                escape_html(&vulnerability.description)
            );
        }
        output.push_str("</table>\n</section>\n");
    }

    fn render_legend(&self, output: &mut String, forest: &[TreeNode], options: &ExportOptions) {
        output.push_str("<section class=\"legend-section\">\n<h2>Legend</h2>\n<div class=\"legend\">\n");
        for component_type in ComponentType::ALL {
            let _ = writeln!(
                output,
                "<div class=\"legend-item\"><span class=\"swatch\" style=\"background: {}\"></span>{}</div>",
                type_color(component_type),
                component_type.label()
            );
        }
        for risk_level in RiskLevel::BY_SEVERITY {
            let _ = writeln!(
                output,
                "<div class=\"legend-item\"><span class=\"swatch outline\" style=\"border-color: {}\"></span>{} risk</div>",
                risk_color(risk_level),
                risk_level.label()
            );
        }
        output.push_str("</div>\n");

        let visibility = if options.matrix_mode {
            "Matrix view: a filled cell means the row component depends on the column component. Cell color follows the row's type, outline follows the column's risk.".to_string()
        } else {
            format!(
                "Tree view: all {} nodes in {} tree(s) are expanded. Fill color shows the component type, outline shows the risk level. A component reachable through several paths appears once per path.",
                iter_forest(forest).count(),
                forest.len()
            )
        };
        let _ = writeln!(output, "<p class=\"visibility\">{}</p>", visibility);
        output.push_str("</section>\n");
    }

    fn render_graph(
        &self,
        output: &mut String,
        forest: &[TreeNode],
        components: &[Component],
        options: &ExportOptions,
    ) {
        output.push_str("<main class=\"graph-container\">\n");
        if options.matrix_mode {
            output.push_str(&render_matrix(components));
        } else {
            output.push_str(&render_tree(forest));
        }
        output.push_str("</main>\n");
    }
}

impl DocumentExporter for HtmlExporter {
    fn export(
        &self,
        forest: &[TreeNode],
        components: &[Component],
        options: &ExportOptions,
    ) -> Result<String> {
        let mut output = String::new();

        self.render_head(&mut output, options);
        self.render_header(&mut output, options);
        if options.include_metadata {
            self.render_metadata(&mut output, components);
        }
        if options.include_statistics {
            self.render_statistics(&mut output, components);
        }
        if options.include_legend {
            self.render_legend(&mut output, forest, options);
        }
        self.render_graph(&mut output, forest, components, options);
        output.push_str("</body>\n</html>\n");

        Ok(output)
    }
}

fn plural(component_type: ComponentType) -> &'static str {
    match component_type {
        ComponentType::Application => "Applications",
        ComponentType::Library => "Libraries",
        ComponentType::Dependency => "Dependencies",
    }
}
