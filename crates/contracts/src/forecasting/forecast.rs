use serde::{Deserialize, Serialize};

/// One craft's forecast line for a month (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftForecast {
    pub id: String,
    pub craft: String,
    pub month: String,
    pub forecast_hours: f64,
    pub actual_hours: Option<f64>,
    pub headcount: u32,
}

impl CraftForecast {
    /// Hours per head, `None` for an empty crew.
    pub fn hours_per_head(&self) -> Option<f64> {
        (self.headcount > 0).then(|| self.forecast_hours / self.headcount as f64)
    }
}

/// Sum of forecast hours per month, in first-seen month order.
pub fn monthly_totals(rows: &[CraftForecast]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for row in rows {
        match totals.iter_mut().find(|(m, _)| *m == row.month) {
            Some((_, sum)) => *sum += row.forecast_hours,
            None => totals.push((row.month.clone(), row.forecast_hours)),
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(craft: &str, month: &str, hours: f64, headcount: u32) -> CraftForecast {
        CraftForecast {
            id: format!("{craft}-{month}"),
            craft: craft.to_string(),
            month: month.to_string(),
            forecast_hours: hours,
            actual_hours: None,
            headcount,
        }
    }

    #[test]
    fn test_hours_per_head() {
        assert_eq!(row("Welding", "2026-10", 1600.0, 10).hours_per_head(), Some(160.0));
        assert_eq!(row("Welding", "2026-10", 1600.0, 0).hours_per_head(), None);
    }

    #[test]
    fn test_monthly_totals_keep_first_seen_order() {
        let rows = vec![
            row("Welding", "2026-11", 100.0, 1),
            row("Pipefitting", "2026-10", 50.0, 1),
            row("Pipefitting", "2026-11", 25.0, 1),
        ];
        assert_eq!(
            monthly_totals(&rows),
            vec![("2026-11".to_string(), 125.0), ("2026-10".to_string(), 50.0)]
        );
    }
}
