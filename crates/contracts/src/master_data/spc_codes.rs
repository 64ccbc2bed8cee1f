use serde::{Deserialize, Serialize};

/// Standard Process Code assigned to a craft and an L4 activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpcCodeMapping {
    pub spc_code: String,
    pub description: String,
    pub craft: String,
    pub l4_activity: String,
    pub is_active: bool,
}

impl SpcCodeMapping {
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.spc_code.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.craft.to_lowercase().contains(&query)
            || self.l4_activity.to_lowercase().contains(&query)
    }
}

/// Distinct crafts in first-seen order, for the craft filter.
pub fn distinct_crafts(rows: &[SpcCodeMapping]) -> Vec<String> {
    let mut crafts: Vec<String> = Vec::new();
    for row in rows {
        if !crafts.contains(&row.craft) {
            crafts.push(row.craft.clone());
        }
    }
    crafts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(code: &str, craft: &str) -> SpcCodeMapping {
        SpcCodeMapping {
            spc_code: code.to_string(),
            description: "Structural steel erection".to_string(),
            craft: craft.to_string(),
            l4_activity: "L4-ERECT-01".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_matches_search() {
        let m = mapping("SPC-2100", "Ironworker");
        assert!(m.matches_search("2100"));
        assert!(m.matches_search("iron"));
        assert!(m.matches_search("erect"));
        assert!(!m.matches_search("painting"));
    }

    #[test]
    fn test_distinct_crafts() {
        let rows = vec![
            mapping("A", "Welder"),
            mapping("B", "Pipefitter"),
            mapping("C", "Welder"),
        ];
        assert_eq!(distinct_crafts(&rows), vec!["Welder", "Pipefitter"]);
    }
}
