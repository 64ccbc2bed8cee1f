//! Demo forecast data. Actuals are booked up to the current period only.

use contracts::forecasting::approvals::{Approval, ApprovalStatus};
use contracts::forecasting::forecast::CraftForecast;

pub const MONTHS: [&str; 5] = ["2026-08", "2026-09", "2026-10", "2026-11", "2026-12"];
const MONTH_FACTORS: [f64; 5] = [0.95, 1.0, 1.05, 1.1, 0.9];

/// (craft, base monthly hours, headcount, actual/forecast ratio for the
/// months that have actuals)
const CRAFTS: [(&str, f64, u32, [f64; 3]); 7] = [
    ("Welding", 4800.0, 30, [1.02, 1.08, 1.14]),
    ("Pipefitting", 4200.0, 26, [0.97, 1.03, 1.06]),
    ("Electrical", 3100.0, 19, [1.00, 0.96, 0.92]),
    ("Structural Fitting", 3600.0, 22, [1.04, 1.01, 1.02]),
    ("Painting", 1900.0, 12, [0.88, 0.93, 0.85]),
    ("Scaffolding", 1500.0, 10, [1.01, 1.00, 0.98]),
    ("Insulation", 1200.0, 8, [0.95, 1.12, 1.03]),
];

pub fn mock_forecasts() -> Vec<CraftForecast> {
    let mut rows = Vec::new();
    for (m, month) in MONTHS.iter().enumerate() {
        for (craft, base, headcount, ratios) in CRAFTS.iter() {
            let forecast_hours = (base * MONTH_FACTORS[m]).round();
            rows.push(CraftForecast {
                id: format!("{}-{}", craft.to_lowercase().replace(' ', "-"), month),
                craft: craft.to_string(),
                month: month.to_string(),
                forecast_hours,
                actual_hours: ratios.get(m).map(|r| (forecast_hours * r).round()),
                headcount: *headcount,
            });
        }
    }
    rows
}

#[allow(clippy::too_many_arguments)]
fn approval(
    id: &str,
    project: &str,
    period: &str,
    submitted_by: &str,
    submitted_at: &str,
    total_hours: f64,
    status: ApprovalStatus,
    comment: Option<&str>,
) -> Approval {
    Approval {
        id: id.to_string(),
        project: project.to_string(),
        period: period.to_string(),
        submitted_by: submitted_by.to_string(),
        submitted_at: submitted_at.to_string(),
        total_hours,
        status,
        comment: comment.map(str::to_string),
    }
}

pub fn mock_approvals() -> Vec<Approval> {
    use ApprovalStatus::*;
    vec![
        approval("apr-101", "Hull Block B12", "2026-10", "Tom Becker", "2026-10-09T14:20:00Z", 6420.0, Pending, None),
        approval("apr-102", "Topside Module M-07", "2026-10", "Aisha Rahman", "2026-10-10T09:05:00Z", 8875.0, Pending, None),
        approval("apr-103", "Jacket J-3", "2026-10", "Kenji Watanabe", "2026-10-08T16:40:00Z", 3310.0, Approved, Some("Matches P6 baseline")),
        approval("apr-104", "Piperack PR-2", "2026-10", "Tom Becker", "2026-10-07T11:15:00Z", 2140.0, Rejected, Some("Painting hours missing")),
        approval("apr-105", "Flare Boom FB-1", "2026-10", "Priya Nair", "2026-10-11T08:30:00Z", 1560.0, Pending, None),
        approval("apr-098", "Hull Block B12", "2026-09", "Tom Becker", "2026-09-09T13:00:00Z", 6105.0, Approved, None),
        approval("apr-099", "Topside Module M-07", "2026-09", "Aisha Rahman", "2026-09-10T10:12:00Z", 8420.0, Approved, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::forecasting::variance::{variances_for_month, VarianceSeverity};

    #[test]
    fn test_actuals_only_up_to_current_period() {
        let rows = mock_forecasts();
        assert_eq!(rows.len(), MONTHS.len() * CRAFTS.len());
        assert!(rows.iter().filter(|r| r.month == "2026-11").all(|r| r.actual_hours.is_none()));
        assert!(rows.iter().filter(|r| r.month == "2026-10").all(|r| r.actual_hours.is_some()));
    }

    #[test]
    fn test_current_period_severities() {
        let variances = variances_for_month(&mock_forecasts(), "2026-10");
        let severity = |craft: &str| {
            variances
                .iter()
                .find(|v| v.craft == craft)
                .map(|v| v.severity(10.0))
        };
        assert_eq!(severity("Welding"), Some(VarianceSeverity::Critical));
        assert_eq!(severity("Painting"), Some(VarianceSeverity::Critical));
        assert_eq!(severity("Pipefitting"), Some(VarianceSeverity::Watch));
        assert_eq!(severity("Scaffolding"), Some(VarianceSeverity::OnTrack));
    }
}
