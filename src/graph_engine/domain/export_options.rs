/// Default document title
pub const DEFAULT_TITLE: &str = "SBOM Dependency Graph";

/// ExportOptions value object controlling what an exported document contains
///
/// Metadata, legend and statistics are on by default; matrix mode is off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub title: String,
    pub description: String,
    pub include_metadata: bool,
    pub include_legend: bool,
    pub include_statistics: bool,
    pub matrix_mode: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
            include_metadata: true,
            include_legend: true,
            include_statistics: true,
            matrix_mode: false,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn include_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    pub fn include_legend(mut self, include: bool) -> Self {
        self.include_legend = include;
        self
    }

    pub fn include_statistics(mut self, include: bool) -> Self {
        self.include_statistics = include;
        self
    }

    pub fn matrix_mode(mut self, enabled: bool) -> Self {
        self.matrix_mode = enabled;
        self
    }
}
