/// Exporter adapters for the supported document formats
mod escape;
mod html_exporter;
mod json_exporter;
mod palette;
mod svg;

pub use escape::{escape_html, escape_html_attr};
pub use html_exporter::HtmlExporter;
pub use json_exporter::JsonExporter;
pub use palette::{risk_color, risk_color_for, type_color};
