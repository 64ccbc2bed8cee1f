use crate::forecasting::data::mock_forecasts;
use crate::shared::components::table::{format_hours, TableCellHours};
use crate::shared::components::ui::{use_toast, Button as KitButton, ButtonVariant, Progress, Tone};
use crate::shared::components::{MonthSelector, PageHeader, StatCard, StatFormat};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_period;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::forecasting::forecast::{monthly_totals, CraftForecast};
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastTotals {
    pub forecast_hours: f64,
    pub actual_hours: Option<f64>,
    pub headcount: u32,
}

/// Totals for one month. Actuals are summed only when every row has them.
pub fn forecast_totals(rows: &[CraftForecast]) -> ForecastTotals {
    ForecastTotals {
        forecast_hours: rows.iter().map(|r| r.forecast_hours).sum(),
        actual_hours: rows.iter().map(|r| r.actual_hours).sum::<Option<f64>>(),
        headcount: rows.iter().map(|r| r.headcount).sum(),
    }
}

#[component]
pub fn MonthlyForecastPage() -> impl IntoView {
    let config = use_config();
    let toast = use_toast();
    let all_rows = StoredValue::new(mock_forecasts());
    let period = RwSignal::new(config.forecast.current_period.clone());

    let month_rows = Memo::new(move |_| {
        let month = period.get();
        all_rows.with_value(|rows| {
            rows.iter()
                .filter(|r| r.month == month)
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let totals = Memo::new(move |_| month_rows.with(|rows| forecast_totals(rows)));
    let trend = all_rows.with_value(|rows| monthly_totals(rows));
    let trend_max = trend.iter().map(|(_, h)| *h).fold(0.0, f64::max);

    let submit = move |_| {
        toast.success(format!("{} forecast submitted for approval", format_period(&period.get_untracked())));
    };

    view! {
        <PageFrame page_id="monthly-forecast--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Monthly Forecast"
                subtitle=Signal::derive(move || Some(format!("Craft hours for {}", format_period(&period.get()))))
            >
                <MonthSelector period=period current_period=config.forecast.current_period.clone() />
                <KitButton variant=ButtonVariant::Primary icon_name="check" on_click=Callback::new(submit)>
                    "Submit for approval"
                </KitButton>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Forecast hours"
                        icon_name="clock"
                        value=Signal::derive(move || Some(totals.get().forecast_hours))
                        format=StatFormat::Hours
                    />
                    <StatCard
                        label="Actual hours"
                        icon_name="activity"
                        value=Signal::derive(move || totals.get().actual_hours)
                        format=StatFormat::Hours
                        subtitle=Signal::derive(move || {
                            totals.get().actual_hours.is_none().then(|| "Not booked yet".to_string())
                        })
                    />
                    <StatCard
                        label="Headcount"
                        icon_name="users"
                        value=Signal::derive(move || Some(totals.get().headcount as f64))
                        format=StatFormat::Integer
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>"Craft"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Headcount"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Forecast (h)"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Hours / head"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Actual (h)"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Variance (h)"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || month_rows.get()
                                key=|r| r.id.clone()
                                children=move |row| {
                                    let per_head = row
                                        .hours_per_head()
                                        .map(format_hours)
                                        .unwrap_or_else(|| "\u{2014}".to_string());
                                    let variance = row.actual_hours.map(|a| a - row.forecast_hours);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.craft.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="text-right">{row.headcount}</TableCell>
                                            <TableCellHours value=Signal::derive(move || Some(row.forecast_hours)) />
                                            <TableCell class="text-right">{per_head}</TableCell>
                                            <TableCellHours value=Signal::derive(move || row.actual_hours) />
                                            <TableCellHours value=Signal::derive(move || variance) signed=true />
                                        </TableRow>
                                    }
                                }
                            />
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout><strong>"Total"</strong></TableCellLayout>
                                </TableCell>
                                <TableCell class="text-right">{move || totals.get().headcount}</TableCell>
                                <TableCellHours value=Signal::derive(move || Some(totals.get().forecast_hours)) bold=true />
                                <TableCell></TableCell>
                                <TableCellHours value=Signal::derive(move || totals.get().actual_hours) bold=true />
                                <TableCellHours
                                    value=Signal::derive(move || {
                                        let t = totals.get();
                                        t.actual_hours.map(|a| a - t.forecast_hours)
                                    })
                                    signed=true
                                    bold=true
                                />
                            </TableRow>
                        </TableBody>
                    </Table>
                </div>

                <div class="forecast-trend">
                    <h3 class="forecast-trend__title">"Forecast by month"</h3>
                    {trend
                        .into_iter()
                        .map(|(month, hours)| {
                            let is_selected = {
                                let month = month.clone();
                                move || period.get() == month
                            };
                            view! {
                                <div class="forecast-trend__row" class:forecast-trend__row--selected=is_selected>
                                    <span class="forecast-trend__label">{format_period(&month)}</span>
                                    <Progress value=hours max=trend_max tone=Tone::Primary />
                                    <span class="forecast-trend__value">{format!("{} h", format_hours(hours))}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_totals_for_current_month() {
        let rows: Vec<CraftForecast> = mock_forecasts()
            .into_iter()
            .filter(|r| r.month == "2026-10")
            .collect();
        let totals = forecast_totals(&rows);
        assert_eq!(totals.headcount, 127);
        assert!(totals.actual_hours.is_some());
    }

    #[test]
    fn test_forecast_totals_without_actuals() {
        let rows: Vec<CraftForecast> = mock_forecasts()
            .into_iter()
            .filter(|r| r.month == "2026-12")
            .collect();
        assert_eq!(forecast_totals(&rows).actual_hours, None);
        assert_eq!(forecast_totals(&[]).forecast_hours, 0.0);
    }
}
