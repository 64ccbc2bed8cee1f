use super::forecast::CraftForecast;
use serde::{Deserialize, Serialize};

/// Forecast versus actual hours for a single craft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftVariance {
    pub craft: String,
    pub forecast_hours: f64,
    pub actual_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceSeverity {
    OnTrack,
    Watch,
    Critical,
}

impl VarianceSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            VarianceSeverity::OnTrack => "On track",
            VarianceSeverity::Watch => "Watch",
            VarianceSeverity::Critical => "Critical",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            VarianceSeverity::OnTrack => "success",
            VarianceSeverity::Watch => "warning",
            VarianceSeverity::Critical => "error",
        }
    }
}

impl CraftVariance {
    /// Actual minus forecast. Positive means overrun.
    pub fn variance_hours(&self) -> f64 {
        self.actual_hours - self.forecast_hours
    }

    /// Variance relative to forecast, `None` when nothing was forecast.
    pub fn variance_percent(&self) -> Option<f64> {
        (self.forecast_hours != 0.0)
            .then(|| self.variance_hours() / self.forecast_hours * 100.0)
    }

    /// `Watch` from half the threshold, `Critical` beyond it. A row with no
    /// forecast but booked hours is always critical.
    pub fn severity(&self, threshold_percent: f64) -> VarianceSeverity {
        match self.variance_percent() {
            Some(pct) if pct.abs() > threshold_percent => VarianceSeverity::Critical,
            Some(pct) if pct.abs() >= threshold_percent / 2.0 => VarianceSeverity::Watch,
            Some(_) => VarianceSeverity::OnTrack,
            None if self.actual_hours != 0.0 => VarianceSeverity::Critical,
            None => VarianceSeverity::OnTrack,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarianceSummary {
    pub forecast_hours: f64,
    pub actual_hours: f64,
    pub variance_hours: f64,
    pub variance_percent: Option<f64>,
    pub crafts_over_threshold: usize,
}

pub fn summarize_variances(rows: &[CraftVariance], threshold_percent: f64) -> VarianceSummary {
    let forecast_hours: f64 = rows.iter().map(|r| r.forecast_hours).sum();
    let actual_hours: f64 = rows.iter().map(|r| r.actual_hours).sum();
    let total = CraftVariance {
        craft: String::new(),
        forecast_hours,
        actual_hours,
    };
    VarianceSummary {
        forecast_hours,
        actual_hours,
        variance_hours: total.variance_hours(),
        variance_percent: total.variance_percent(),
        crafts_over_threshold: rows
            .iter()
            .filter(|r| r.severity(threshold_percent) == VarianceSeverity::Critical)
            .count(),
    }
}

/// Variance rows for `month`, one per craft that has booked actuals.
pub fn variances_for_month(rows: &[CraftForecast], month: &str) -> Vec<CraftVariance> {
    rows.iter()
        .filter(|r| r.month == month)
        .filter_map(|r| {
            r.actual_hours.map(|actual| CraftVariance {
                craft: r.craft.clone(),
                forecast_hours: r.forecast_hours,
                actual_hours: actual,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(forecast: f64, actual: f64) -> CraftVariance {
        CraftVariance {
            craft: "Welding".to_string(),
            forecast_hours: forecast,
            actual_hours: actual,
        }
    }

    #[test]
    fn test_variance_hours_and_percent() {
        let row = v(1000.0, 1150.0);
        assert_eq!(row.variance_hours(), 150.0);
        assert_eq!(row.variance_percent(), Some(15.0));
        assert_eq!(v(1000.0, 900.0).variance_percent(), Some(-10.0));
        assert_eq!(v(0.0, 10.0).variance_percent(), None);
    }

    #[test]
    fn test_severity_against_threshold() {
        assert_eq!(v(1000.0, 1020.0).severity(10.0), VarianceSeverity::OnTrack);
        assert_eq!(v(1000.0, 1050.0).severity(10.0), VarianceSeverity::Watch);
        assert_eq!(v(1000.0, 900.0).severity(10.0), VarianceSeverity::Watch);
        assert_eq!(v(1000.0, 1101.0).severity(10.0), VarianceSeverity::Critical);
        assert_eq!(v(0.0, 5.0).severity(10.0), VarianceSeverity::Critical);
        assert_eq!(v(0.0, 0.0).severity(10.0), VarianceSeverity::OnTrack);
    }

    #[test]
    fn test_summary() {
        let rows = vec![v(1000.0, 1200.0), v(500.0, 480.0)];
        let summary = summarize_variances(&rows, 10.0);
        assert_eq!(summary.forecast_hours, 1500.0);
        assert_eq!(summary.actual_hours, 1680.0);
        assert_eq!(summary.variance_hours, 180.0);
        assert_eq!(summary.variance_percent, Some(12.0));
        assert_eq!(summary.crafts_over_threshold, 1);
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize_variances(&[], 10.0);
        assert_eq!(summary.variance_percent, None);
        assert_eq!(summary.crafts_over_threshold, 0);
    }

    #[test]
    fn test_variances_for_month_skips_rows_without_actuals() {
        let line = |craft: &str, month: &str, actual: Option<f64>| CraftForecast {
            id: format!("{craft}-{month}"),
            craft: craft.to_string(),
            month: month.to_string(),
            forecast_hours: 100.0,
            actual_hours: actual,
            headcount: 1,
        };
        let rows = vec![
            line("Welding", "2026-09", Some(110.0)),
            line("Painting", "2026-09", None),
            line("Welding", "2026-10", Some(90.0)),
        ];
        let variances = variances_for_month(&rows, "2026-09");
        assert_eq!(variances.len(), 1);
        assert_eq!(variances[0].craft, "Welding");
        assert_eq!(variances[0].variance_hours(), 10.0);
    }
}
