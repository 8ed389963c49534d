use crate::graph_engine::domain::{Component, ComponentType, RiskLevel};
use crate::shared::Result;
use std::cell::Cell;
use std::collections::HashSet;

/// Maximum number of exclude patterns to prevent DoS attacks
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// ComponentFilter - derived view over a canonical component list
///
/// The filter is an explicit pure function: callers apply it whenever the
/// criteria or the input change. Removed components leave dangling edges
/// behind, which the graph builder ignores.
#[derive(Debug, Default)]
pub struct ComponentFilter {
    exclude_patterns: Vec<ExcludePattern>,
    types: HashSet<ComponentType>,
    risk_levels: HashSet<RiskLevel>,
    search: Option<String>,
    vulnerable_only: bool,
}

impl ComponentFilter {
    /// Creates a filter that keeps everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds name exclusion patterns; `*` matches any run of characters
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (length, characters, wildcard only)
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        self.exclude_patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// Keeps only the given types (empty = all types)
    pub fn with_types(mut self, types: impl IntoIterator<Item = ComponentType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    /// Keeps only the given risk levels (empty = all levels)
    pub fn with_risk_levels(mut self, risk_levels: impl IntoIterator<Item = RiskLevel>) -> Self {
        self.risk_levels = risk_levels.into_iter().collect();
        self
    }

    /// Case-insensitive search over name and description
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_lowercase());
        self
    }

    pub fn vulnerable_only(mut self, enabled: bool) -> Self {
        self.vulnerable_only = enabled;
        self
    }

    /// Returns `true` when no criterion is set
    pub fn is_pass_through(&self) -> bool {
        self.exclude_patterns.is_empty()
            && self.types.is_empty()
            && self.risk_levels.is_empty()
            && self.search.is_none()
            && !self.vulnerable_only
    }

    /// Applies every criterion, preserving input order
    pub fn apply(&self, components: &[Component]) -> Vec<Component> {
        components
            .iter()
            .filter(|c| self.keeps(c))
            .cloned()
            .collect()
    }

    fn keeps(&self, component: &Component) -> bool {
        if self.is_excluded(&component.name) {
            return false;
        }
        if !self.types.is_empty() && !self.types.contains(&component.component_type) {
            return false;
        }
        if !self.risk_levels.is_empty() && !self.risk_levels.contains(&component.risk_level) {
            return false;
        }
        if self.vulnerable_only && !component.is_vulnerable() {
            return false;
        }
        match &self.search {
            Some(term) => {
                component.name.to_lowercase().contains(term)
                    || component.description.to_lowercase().contains(term)
            }
            None => true,
        }
    }

    /// Every pattern is evaluated so that match bookkeeping stays accurate
    fn is_excluded(&self, name: &str) -> bool {
        self.exclude_patterns
            .iter()
            .fold(false, |excluded, p| p.matches(name) || excluded)
    }

    /// Patterns that matched no component during previous `apply` calls
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.exclude_patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// A single exclusion pattern with its compiled segments
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    segments: Vec<String>,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let segments = pattern.split('*').map(str::to_string).collect();
        Ok(Self {
            original: pattern,
            segments,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, name: &str) -> bool {
        let is_match = glob_match(&self.segments, name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

/// Anchored wildcard match.
///
/// `segments` is the pattern split on `*`: the first segment must be a
/// prefix, the last a suffix, and the middle ones must appear in order
/// between them.
fn glob_match(segments: &[String], name: &str) -> bool {
    match segments {
        [] => name.is_empty(),
        [exact] => name == exact,
        [first, middle @ .., last] => {
            if name.len() < first.len() + last.len()
                || !name.starts_with(first.as_str())
                || !name.ends_with(last.as_str())
            {
                return false;
            }
            let mut rest = &name[first.len()..name.len() - last.len()];
            for part in middle {
                match rest.find(part.as_str()) {
                    Some(pos) => rest = &rest[pos + part.len()..],
                    None => return false,
                }
            }
            true
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        anyhow::bail!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, '-', '_', '.', '@', '/', ':' and '*' are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

/// Component names from npm, Maven and PyPI share this alphabet
fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '@' | '/' | ':' | '*')
}
