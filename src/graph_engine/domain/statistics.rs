use super::{Component, ComponentType, RiskLevel};

/// Aggregate counts over a canonical (possibly filtered) component set
///
/// Counted once per component, never per tree occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SbomStatistics {
    pub total: usize,
    pub applications: usize,
    pub libraries: usize,
    pub dependencies: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
    pub total_cves: u64,
    pub vulnerable_components: usize,
}

impl SbomStatistics {
    /// Single pass over `components`
    pub fn from_components(components: &[Component]) -> Self {
        let mut stats = Self::default();
        for component in components {
            stats.total += 1;
            match component.component_type {
                ComponentType::Application => stats.applications += 1,
                ComponentType::Library => stats.libraries += 1,
                ComponentType::Dependency => stats.dependencies += 1,
            }
            match component.risk_level {
                RiskLevel::High => stats.high_risk += 1,
                RiskLevel::Medium => stats.medium_risk += 1,
                RiskLevel::Low => stats.low_risk += 1,
            }
            stats.total_cves += u64::from(component.cve_count);
            if component.is_vulnerable() {
                stats.vulnerable_components += 1;
            }
        }
        stats
    }

    pub fn count_for_type(&self, component_type: ComponentType) -> usize {
        match component_type {
            ComponentType::Application => self.applications,
            ComponentType::Library => self.libraries,
            ComponentType::Dependency => self.dependencies,
        }
    }

    pub fn count_for_risk(&self, risk_level: RiskLevel) -> usize {
        match risk_level {
            RiskLevel::High => self.high_risk,
            RiskLevel::Medium => self.medium_risk,
            RiskLevel::Low => self.low_risk,
        }
    }
}
