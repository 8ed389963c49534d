use sbom_graph::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ComponentGenerator parsing files with `SbomDocument` and recording
/// every config it was called with
#[derive(Default, Clone)]
pub struct MockComponentGenerator {
    pub failure: Option<GenerationError>,
    pub calls: Arc<Mutex<Vec<GeneratorConfig>>>,
}

impl MockComponentGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure(failure: GenerationError) -> Self {
        Self {
            failure: Some(failure),
            calls: Arc::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ComponentGenerator for MockComponentGenerator {
    fn generate(
        &self,
        files: &[ProjectFile],
        config: &GeneratorConfig,
    ) -> std::result::Result<Vec<Component>, GenerationError> {
        self.calls.lock().unwrap().push(config.clone());
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }

        let mut components = Vec::new();
        for file in files {
            let parsed = SbomDocument::parse(&file.content).map_err(|e| {
                GenerationError::InvalidInput {
                    file: file.name.clone(),
                    reason: e.to_string(),
                }
            })?;
            components.extend(parsed);
        }
        Ok(components)
    }
}
