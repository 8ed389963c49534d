use sbom_graph::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ProjectFileReader serving files from memory
pub struct MockProjectFileReader {
    pub files: HashMap<PathBuf, String>,
    pub should_fail: bool,
}

impl MockProjectFileReader {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            files: HashMap::new(),
            should_fail: true,
        }
    }
}

impl ProjectFileReader for MockProjectFileReader {
    fn read_project_file(&self, path: &Path) -> Result<ProjectFile> {
        if self.should_fail {
            anyhow::bail!("Mock file read failure");
        }
        let content = self
            .files
            .get(path)
            .ok_or_else(|| anyhow::anyhow!("Mock file not found: {}", path.display()))?;
        Ok(ProjectFile::new(path.display().to_string(), content.clone()))
    }
}
