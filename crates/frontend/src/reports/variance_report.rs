use crate::forecasting::data::{mock_forecasts, MONTHS};
use crate::shared::components::table::{format_hours, format_signed_percent, TableCellHours};
use crate::shared::components::ui::{use_toast, Badge, Button as KitButton, ButtonVariant, Select, Tone};
use crate::shared::components::{PageHeader, StatCard, StatFormat};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_period;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_REPORT;
use contracts::forecasting::forecast::CraftForecast;
use contracts::forecasting::variance::{
    summarize_variances, variances_for_month, CraftVariance, VarianceSeverity,
};
use leptos::prelude::*;
use thaw::*;

/// Variance row together with its classification, as exported.
#[derive(Debug, Clone, PartialEq)]
pub struct VarianceLine {
    pub variance: CraftVariance,
    pub severity: VarianceSeverity,
}

impl CsvExportable for VarianceLine {
    fn headers() -> Vec<&'static str> {
        vec!["Craft", "Forecast hours", "Actual hours", "Variance hours", "Variance %", "Status"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let v = &self.variance;
        vec![
            v.craft.clone(),
            format!("{:.1}", v.forecast_hours),
            format!("{:.1}", v.actual_hours),
            format!("{:.1}", v.variance_hours()),
            v.variance_percent().map(|p| format!("{p:.1}")).unwrap_or_default(),
            self.severity.label().to_string(),
        ]
    }
}

pub fn variance_lines(rows: &[CraftForecast], month: &str, threshold_percent: f64) -> Vec<VarianceLine> {
    variances_for_month(rows, month)
        .into_iter()
        .map(|variance| VarianceLine {
            severity: variance.severity(threshold_percent),
            variance,
        })
        .collect()
}

/// Months with at least one craft's actuals booked, newest first.
pub fn reportable_months(rows: &[CraftForecast]) -> Vec<String> {
    MONTHS
        .iter()
        .rev()
        .filter(|m| rows.iter().any(|r| r.month == **m && r.actual_hours.is_some()))
        .map(|m| m.to_string())
        .collect()
}

#[component]
pub fn VarianceReportPage() -> impl IntoView {
    let config = use_config();
    let toast = use_toast();
    let threshold = config.forecast.variance_threshold_percent;
    let rows = StoredValue::new(mock_forecasts());

    let months = rows.with_value(|r| reportable_months(r));
    let month = RwSignal::new(months.first().cloned().unwrap_or_default());
    let month_options: Vec<(String, String)> = months
        .iter()
        .map(|m| (m.clone(), format_period(m)))
        .collect();

    let lines = Memo::new(move |_| rows.with_value(|r| variance_lines(r, &month.get(), threshold)));
    let summary = Memo::new(move |_| {
        lines.with(|l| {
            let variances: Vec<CraftVariance> = l.iter().map(|line| line.variance.clone()).collect();
            summarize_variances(&variances, threshold)
        })
    });

    let export = move |_| {
        let filename = format!("mlf-variance-{}.csv", month.get_untracked());
        match lines.with_untracked(|l| export_to_csv(l, &filename)) {
            Ok(()) => toast.success(format!("Exported {filename}")),
            Err(e) => {
                log::error!("CSV export failed: {e}");
                toast.error(format!("Export failed: {e}"));
            }
        }
    };

    view! {
        <PageFrame page_id="mlf-variance-report--report" category=PAGE_CAT_REPORT>
            <PageHeader
                title="MLF Variance Report"
                subtitle=format!("Forecast versus actual hours, flagged beyond {threshold:.0}%")
            >
                <Select
                    value=month
                    options=month_options
                    on_change=Callback::new(move |m: String| month.set(m))
                />
                <KitButton variant=ButtonVariant::Secondary icon_name="download" on_click=Callback::new(export)>
                    "Export CSV"
                </KitButton>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Forecast hours"
                        icon_name="clock"
                        value=Signal::derive(move || Some(summary.get().forecast_hours))
                        format=StatFormat::Hours
                    />
                    <StatCard
                        label="Actual hours"
                        icon_name="activity"
                        value=Signal::derive(move || Some(summary.get().actual_hours))
                        format=StatFormat::Hours
                    />
                    <StatCard
                        label="Overall variance"
                        icon_name="trending-up"
                        value=Signal::derive(move || summary.get().variance_percent)
                        format=StatFormat::Percent
                        change_percent=Signal::derive(move || summary.get().variance_percent)
                    />
                    <StatCard
                        label="Crafts beyond threshold"
                        icon_name="alert-triangle"
                        value=Signal::derive(move || Some(summary.get().crafts_over_threshold as f64))
                        format=StatFormat::Integer
                        tone=Signal::derive(move || {
                            if summary.get().crafts_over_threshold > 0 {
                                Some(Tone::Error)
                            } else {
                                Some(Tone::Success)
                            }
                        })
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:id="mlf-variance-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>"Craft"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Forecast"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Actual"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Variance"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Variance %"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || lines.get()
                                key=|l| l.variance.craft.clone()
                                children=move |line| {
                                    let v = line.variance;
                                    let craft = v.craft.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-weight: 500;">{craft}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell class="text-right">{format_hours(v.forecast_hours)}</TableCell>
                                            <TableCell class="text-right">{format_hours(v.actual_hours)}</TableCell>
                                            <TableCellHours value=Some(v.variance_hours()) signed=true />
                                            <TableCell class="text-right">{format_signed_percent(v.variance_percent())}</TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge tone=Tone::from_name(line.severity.badge_variant()) dot=true>
                                                        {line.severity.label()}
                                                    </Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || lines.with(|l| l.is_empty())>
                        <div class="table__empty">"No actuals booked for this month."</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;

    #[test]
    fn test_reportable_months_skip_future() {
        let months = reportable_months(&mock_forecasts());
        assert_eq!(months, vec!["2026-10", "2026-09", "2026-08"]);
    }

    #[test]
    fn test_variance_lines_flag_critical_crafts() {
        let lines = variance_lines(&mock_forecasts(), "2026-10", 10.0);
        assert_eq!(lines.len(), 7);
        let welding = lines.iter().find(|l| l.variance.craft == "Welding").unwrap();
        assert_eq!(welding.severity, VarianceSeverity::Critical);
        assert!(variance_lines(&mock_forecasts(), "2026-12", 10.0).is_empty());
    }

    #[test]
    fn test_csv_row() {
        let line = VarianceLine {
            variance: CraftVariance {
                craft: "Welding".to_string(),
                forecast_hours: 1000.0,
                actual_hours: 1150.0,
            },
            severity: VarianceSeverity::Critical,
        };
        let csv = build_csv(&[line]).unwrap();
        assert!(csv.ends_with("Welding,1000.0,1150.0,150.0,15.0,Critical\n"));
    }
}
