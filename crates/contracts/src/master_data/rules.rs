use serde::{Deserialize, Serialize};

/// Level of the activity hierarchy a breakdown rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleScope {
    L3,
    L4,
    Craft,
}

impl RuleScope {
    pub fn label(&self) -> &'static str {
        match self {
            RuleScope::L3 => "L3 activity",
            RuleScope::L4 => "L4 activity",
            RuleScope::Craft => "Craft",
        }
    }
}

/// P6 to L4 breakdown rule, shown as configuration only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub scope: RuleScope,
    pub enabled: bool,
}
