use crate::graph_engine::domain::{ComponentType, RiskLevel};

/// Fill color of a node by component type
pub fn type_color(component_type: ComponentType) -> &'static str {
    match component_type {
        ComponentType::Application => "rgb(16, 185, 129)",
        ComponentType::Library => "rgb(59, 130, 246)",
        ComponentType::Dependency => "rgb(249, 115, 22)",
    }
}

/// Stroke color of a node by risk level
pub fn risk_color(risk_level: RiskLevel) -> &'static str {
    match risk_level {
        RiskLevel::High => "#EF4444",
        RiskLevel::Medium => "#F59E0B",
        RiskLevel::Low => "#10B981",
    }
}

/// Risk color for a raw risk label; anything unrecognized maps to the low color
pub fn risk_color_for(label: &str) -> &'static str {
    label
        .parse::<RiskLevel>()
        .map(risk_color)
        .unwrap_or_else(|_| risk_color(RiskLevel::Low))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_colors() {
        assert_eq!(type_color(ComponentType::Application), "rgb(16, 185, 129)");
        assert_eq!(type_color(ComponentType::Library), "rgb(59, 130, 246)");
        assert_eq!(type_color(ComponentType::Dependency), "rgb(249, 115, 22)");
    }

    #[test]
    fn test_risk_colors() {
        assert_eq!(risk_color(RiskLevel::High), "#EF4444");
        assert_eq!(risk_color(RiskLevel::Medium), "#F59E0B");
        assert_eq!(risk_color(RiskLevel::Low), "#10B981");
    }

    #[test]
    fn test_risk_color_for_labels() {
        assert_eq!(risk_color_for("HIGH"), "#EF4444");
        assert_eq!(risk_color_for("medium"), "#F59E0B");
        assert_eq!(risk_color_for("critical"), "#10B981");
        assert_eq!(risk_color_for(""), "#10B981");
    }
}
