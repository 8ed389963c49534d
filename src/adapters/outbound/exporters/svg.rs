//! SVG renderers for the exported graphic.
//!
//! Both renderers return exactly one `<svg>` root element. Geometry comes
//! straight from the positioned forest; nothing is laid out again here.

use super::escape::{escape_html, escape_html_attr};
use super::palette::{risk_color, type_color};
use crate::graph_engine::domain::{iter_forest, Component, TreeNode};
use crate::graph_engine::services::LayoutEngine;
use std::collections::HashMap;
use std::fmt::Write;

pub const NODE_WIDTH: f64 = 160.0;
pub const NODE_HEIGHT: f64 = 36.0;
const MARGIN: f64 = 40.0;

const MATRIX_CELL: f64 = 18.0;
const MATRIX_LABEL_WIDTH: f64 = 180.0;

const EMPTY_WIDTH: f64 = 480.0;
const EMPTY_HEIGHT: f64 = 120.0;
const EMPTY_MESSAGE: &str = "No components to display";

/// Longest name drawn inside a node before it is shortened with an ellipsis
const MAX_LABEL_CHARS: usize = 20;

/// Renders the positioned forest as boxes joined by parent-to-child edges
pub fn render_tree(forest: &[TreeNode]) -> String {
    let Some(bounds) = LayoutEngine::bounds(forest) else {
        return render_empty();
    };

    // Offsets below half a node push boxes to negative coordinates
    let left = bounds.min_x - NODE_WIDTH / 2.0 - MARGIN;
    let top = bounds.min_y - NODE_HEIGHT / 2.0 - MARGIN;
    let width = bounds.max_x + NODE_WIDTH / 2.0 + MARGIN - left;
    let height = bounds.max_y + NODE_HEIGHT / 2.0 + MARGIN - top;

    let mut svg = String::new();
    open_svg(&mut svg, (left, top), width, height, "tree");

    svg.push_str("<g class=\"edges\">\n");
    for node in iter_forest(forest) {
        for child in &node.children {
            write_edge(&mut svg, node, child);
        }
    }
    svg.push_str("</g>\n<g class=\"nodes\">\n");
    for node in iter_forest(forest) {
        write_node(&mut svg, node);
    }
    svg.push_str("</g>\n</svg>\n");
    svg
}

/// Renders an adjacency matrix over the canonical components.
///
/// Row `i`, column `j` is filled when component `i` declares a dependency on
/// component `j`. Dependencies on ids outside the list have no column.
pub fn render_matrix(components: &[Component]) -> String {
    if components.is_empty() {
        return render_empty();
    }

    let column: HashMap<&str, usize> = components
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id.as_str(), i))
        .collect();

    let n = components.len() as f64;
    let grid_origin = MATRIX_LABEL_WIDTH;
    let size = grid_origin + n * MATRIX_CELL + MARGIN;

    let mut svg = String::new();
    open_svg(&mut svg, (0.0, 0.0), size, size, "matrix");

    svg.push_str("<g class=\"labels\">\n");
    for (i, component) in components.iter().enumerate() {
        let offset = grid_origin + i as f64 * MATRIX_CELL + MATRIX_CELL * 0.7;
        let label = escape_html(&shorten(&component.name));
        let _ = writeln!(
            svg,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" class=\"row-label\">{}</text>",
            grid_origin - 6.0,
            offset,
            label
        );
        let _ = writeln!(
            svg,
            "<text x=\"0\" y=\"0\" transform=\"translate({:.1},{:.1}) rotate(-90)\" class=\"col-label\">{}</text>",
            offset,
            grid_origin - 6.0,
            label
        );
    }
    svg.push_str("</g>\n<g class=\"cells\">\n");

    for (row, component) in components.iter().enumerate() {
        let y = grid_origin + row as f64 * MATRIX_CELL;
        if row % 2 == 0 {
            let _ = writeln!(
                svg,
                "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" class=\"row-stripe\" fill=\"#F3F4F6\"/>",
                grid_origin,
                y,
                n * MATRIX_CELL,
                MATRIX_CELL
            );
        }
        for dependency in &component.dependencies {
            let Some(&col) = column.get(dependency.as_str()) else {
                continue;
            };
            let target = &components[col];
            let _ = writeln!(
                svg,
                "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\" stroke=\"{}\" data-from=\"{}\" data-to=\"{}\"><title>{} → {}</title></rect>",
                grid_origin + col as f64 * MATRIX_CELL,
                y,
                MATRIX_CELL,
                MATRIX_CELL,
                type_color(component.component_type),
                risk_color(target.risk_level),
                escape_html_attr(&component.id),
                escape_html_attr(&target.id),
                escape_html(&component.dedup_key()),
                escape_html(&target.dedup_key())
            );
        }
    }
    svg.push_str("</g>\n</svg>\n");
    svg
}

fn render_empty() -> String {
    let mut svg = String::new();
    open_svg(&mut svg, (0.0, 0.0), EMPTY_WIDTH, EMPTY_HEIGHT, "empty");
    let _ = writeln!(
        svg,
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" class=\"empty\">{}</text>",
        EMPTY_WIDTH / 2.0,
        EMPTY_HEIGHT / 2.0,
        EMPTY_MESSAGE
    );
    svg.push_str("</svg>\n");
    svg
}

fn open_svg(svg: &mut String, origin: (f64, f64), width: f64, height: f64, mode: &str) {
    let (x, y) = origin;
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"graph graph-{mode}\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"{x:.0} {y:.0} {width:.0} {height:.0}\" role=\"img\">"
    );
}

fn write_edge(svg: &mut String, parent: &TreeNode, child: &TreeNode) {
    let start_x = parent.x + NODE_WIDTH / 2.0;
    let end_x = child.x - NODE_WIDTH / 2.0;
    let mid_x = (start_x + end_x) / 2.0;
    let _ = writeln!(
        svg,
        "<path d=\"M{:.1},{:.1} C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}\" class=\"edge\" fill=\"none\" stroke=\"#9CA3AF\"/>",
        start_x, parent.y, mid_x, parent.y, mid_x, child.y, end_x, child.y
    );
}

fn write_node(svg: &mut String, node: &TreeNode) {
    let left = node.x - NODE_WIDTH / 2.0;
    let top = node.y - NODE_HEIGHT / 2.0;

    let _ = writeln!(
        svg,
        "<g class=\"node\" data-id=\"{}\" data-level=\"{}\" data-type=\"{}\" data-risk=\"{}\">",
        escape_html_attr(&node.id),
        node.level,
        node.component_type,
        node.risk_level
    );
    let _ = writeln!(
        svg,
        "<title>{}@{} ({}, {} risk, {} CVEs)</title>",
        escape_html(&node.name),
        escape_html(&node.version),
        node.component_type.label(),
        node.risk_level.label(),
        node.cve_count
    );
    let _ = writeln!(
        svg,
        "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" rx=\"6\" fill=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>",
        left,
        top,
        NODE_WIDTH,
        NODE_HEIGHT,
        type_color(node.component_type),
        risk_color(node.risk_level)
    );
    let _ = writeln!(
        svg,
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" class=\"node-name\">{}</text>",
        node.x,
        node.y - 2.0,
        escape_html(&shorten(&node.name))
    );
    let _ = writeln!(
        svg,
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" class=\"node-version\">{}</text>",
        node.x,
        node.y + 12.0,
        escape_html(&shorten(&node.version))
    );
    svg.push_str("</g>\n");
}

fn shorten(text: &str) -> String {
    if text.chars().count() <= MAX_LABEL_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(MAX_LABEL_CHARS - 1).collect();
    short.push('…');
    short
}
