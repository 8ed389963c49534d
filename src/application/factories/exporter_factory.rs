use crate::adapters::outbound::exporters::{HtmlExporter, JsonExporter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DocumentExporter;

/// Factory for creating document exporters
///
/// Selects the exporter adapter matching the requested output format.
pub struct ExporterFactory;

impl ExporterFactory {
    /// Creates an exporter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use sbom_graph::application::dto::OutputFormat;
    /// use sbom_graph::application::factories::ExporterFactory;
    ///
    /// let exporter = ExporterFactory::create(OutputFormat::Html);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn DocumentExporter> {
        match format {
            OutputFormat::Html => Box::new(HtmlExporter::new()),
            OutputFormat::Json => Box::new(JsonExporter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use sbom_graph::application::dto::OutputFormat;
    /// use sbom_graph::application::factories::ExporterFactory;
    ///
    /// let message = ExporterFactory::progress_message(OutputFormat::Html);
    /// assert_eq!(message, "📝 Exporting HTML dependency graph...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Html => "📝 Exporting HTML dependency graph...",
            OutputFormat::Json => "📝 Exporting merged component list as JSON...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_engine::domain::ExportOptions;

    #[test]
    fn test_create_html_exporter() {
        let exporter = ExporterFactory::create(OutputFormat::Html);
        let document = exporter.export(&[], &[], &ExportOptions::default()).unwrap();
        assert!(document.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_create_json_exporter() {
        let exporter = ExporterFactory::create(OutputFormat::Json);
        let document = exporter.export(&[], &[], &ExportOptions::default()).unwrap();
        assert_eq!(document.trim(), "[]");
    }

    #[test]
    fn test_progress_message_json() {
        let message = ExporterFactory::progress_message(OutputFormat::Json);
        assert_eq!(message, "📝 Exporting merged component list as JSON...");
    }
}
