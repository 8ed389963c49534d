//! Configuration file support for sbom-graph.
//!
//! Provides YAML-based configuration through `sbom-graph.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use sbom_graph::graph_engine::services::LayoutConfig;
use sbom_graph::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-graph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub include_metadata: Option<bool>,
    pub include_legend: Option<bool>,
    pub include_statistics: Option<bool>,
    pub matrix_mode: Option<bool>,
    pub root: Option<String>,
    pub exclude_components: Option<Vec<String>>,
    pub layout: Option<LayoutSection>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// `layout:` section; every key falls back to the built-in default.
#[derive(Debug, Deserialize, Default)]
pub struct LayoutSection {
    pub base_offset: Option<f64>,
    pub level_gap: Option<f64>,
    pub row_height: Option<f64>,
    pub top_offset: Option<f64>,
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Layout spacing with unset keys taken from `LayoutConfig::default()`
    pub fn layout_config(&self) -> LayoutConfig {
        let defaults = LayoutConfig::default();
        match &self.layout {
            None => defaults,
            Some(section) => LayoutConfig {
                base_offset: section.base_offset.unwrap_or(defaults.base_offset),
                level_gap: section.level_gap.unwrap_or(defaults.level_gap),
                row_height: section.row_height.unwrap_or(defaults.row_height),
                top_offset: section.top_offset.unwrap_or(defaults.top_offset),
            },
        }
    }

    /// Unknown keys, nested ones prefixed with their section
    pub fn unknown_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.unknown_fields.keys().cloned().collect();
        if let Some(layout) = &self.layout {
            keys.extend(layout.unknown_fields.keys().map(|k| format!("layout.{}", k)));
        }
        keys
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    eprintln!("📄 Auto-discovered config file: {}", config_path.display());
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref patterns) = config.exclude_components {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: exclude_components[{}] must not be empty.\n\n\
                     💡 Hint: Remove the entry or give a component name pattern (e.g., \"eslint-*\").",
                    i
                );
            }
        }
    }

    if let Some(ref layout) = config.layout {
        let gaps = [("level_gap", layout.level_gap), ("row_height", layout.row_height)];
        for (name, value) in gaps {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    bail!(
                        "Invalid config: layout.{} must be a positive number, got {}.",
                        name,
                        value
                    );
                }
            }
        }
        let offsets = [("base_offset", layout.base_offset), ("top_offset", layout.top_offset)];
        for (name, value) in offsets {
            if let Some(value) = value {
                if !value.is_finite() {
                    bail!("Invalid config: layout.{} must be a finite number.", name);
                }
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
