//! Literal master data shown by the configuration pages.

use contracts::master_data::rules::{ForecastRule, RuleScope};
use contracts::master_data::spc_codes::SpcCodeMapping;

fn rule(id: &str, name: &str, description: &str, scope: RuleScope, enabled: bool) -> ForecastRule {
    ForecastRule {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        scope,
        enabled,
    }
}

pub fn mock_rules() -> Vec<ForecastRule> {
    use RuleScope::*;
    vec![
        rule("r-01", "P6 to L3 roll-up", "Aggregate P6 activities into L3 work packages by WBS code", L3, true),
        rule("r-02", "L3 weekly spread", "Spread L3 budget hours evenly across the planned weeks", L3, true),
        rule("r-03", "L4 breakdown by SPC", "Split L3 hours into L4 activities using SPC code weights", L4, true),
        rule("r-04", "L4 minimum duration", "Merge L4 activities shorter than one week into their neighbour", L4, false),
        rule("r-05", "Craft allocation", "Allocate L4 hours to crafts from the SPC craft mapping", Craft, true),
        rule("r-06", "Overtime uplift", "Apply a 10% uplift to crafts working planned overtime", Craft, false),
        rule("r-07", "Headcount rounding", "Round craft headcount up to whole workers per shift", Craft, true),
    ]
}

fn mapping(code: &str, description: &str, craft: &str, l4: &str, active: bool) -> SpcCodeMapping {
    SpcCodeMapping {
        spc_code: code.to_string(),
        description: description.to_string(),
        craft: craft.to_string(),
        l4_activity: l4.to_string(),
        is_active: active,
    }
}

pub fn mock_spc_codes() -> Vec<SpcCodeMapping> {
    vec![
        mapping("SPC-1100", "Plate cutting and bevelling", "Structural Fitting", "L4-FAB-CUT", true),
        mapping("SPC-1120", "Sub-assembly fit-up", "Structural Fitting", "L4-FAB-FIT", true),
        mapping("SPC-1140", "Block erection", "Structural Fitting", "L4-ERECT-01", true),
        mapping("SPC-2100", "Butt welding, plate", "Welding", "L4-WELD-PLT", true),
        mapping("SPC-2110", "Fillet welding, stiffeners", "Welding", "L4-WELD-STF", true),
        mapping("SPC-2130", "Weld repair", "Welding", "L4-WELD-RPR", false),
        mapping("SPC-3100", "Spool fabrication", "Pipefitting", "L4-PIPE-SPL", true),
        mapping("SPC-3120", "Pipe installation", "Pipefitting", "L4-PIPE-INS", true),
        mapping("SPC-3140", "Hydrotest preparation", "Pipefitting", "L4-PIPE-HT", true),
        mapping("SPC-4100", "Cable tray installation", "Electrical", "L4-ELEC-TRY", true),
        mapping("SPC-4120", "Cable pulling", "Electrical", "L4-ELEC-CBL", true),
        mapping("SPC-4140", "Termination and testing", "Electrical", "L4-ELEC-TRM", true),
        mapping("SPC-5100", "Surface preparation, blasting", "Painting", "L4-PAINT-SP", true),
        mapping("SPC-5120", "Primer and top coat", "Painting", "L4-PAINT-CT", true),
        mapping("SPC-6100", "Scaffold erection", "Scaffolding", "L4-SCAF-ER", true),
        mapping("SPC-6120", "Scaffold dismantling", "Scaffolding", "L4-SCAF-DM", true),
        mapping("SPC-7100", "Hot insulation", "Insulation", "L4-INSU-HOT", true),
        mapping("SPC-7120", "Cold insulation", "Insulation", "L4-INSU-CLD", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::master_data::spc_codes::distinct_crafts;
    use std::collections::HashSet;

    #[test]
    fn test_spc_codes_are_unique() {
        let rows = mock_spc_codes();
        let codes: HashSet<_> = rows.iter().map(|r| r.spc_code.as_str()).collect();
        assert_eq!(codes.len(), rows.len());
    }

    #[test]
    fn test_spc_crafts_match_forecast_crafts() {
        let forecasts = crate::forecasting::data::mock_forecasts();
        for craft in distinct_crafts(&mock_spc_codes()) {
            assert!(forecasts.iter().any(|r| r.craft == craft), "{craft}");
        }
    }

    #[test]
    fn test_every_scope_has_rules() {
        let rules = mock_rules();
        for scope in [RuleScope::L3, RuleScope::L4, RuleScope::Craft] {
            assert!(rules.iter().any(|r| r.scope == scope));
        }
    }
}
