use crate::forecasting::data::{mock_approvals, mock_forecasts, MONTHS};
use crate::forecasting::monthly_forecast::forecast_totals;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Alert, Badge, Card, Progress, Tone};
use crate::shared::components::{PageHeader, StatCard, StatFormat};
use crate::shared::config::use_config;
use crate::shared::date_utils::{format_period, parse_period};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_role;
use chrono::{Datelike, NaiveDate};
use contracts::forecasting::approvals::status_counts;
use contracts::forecasting::variance::{summarize_variances, variances_for_month};
use contracts::system::navigation::{page_configs, pages};
use leptos::prelude::*;

/// Forecasts for a period are due on the 25th.
pub const SUBMISSION_DAY: u32 = 25;

pub fn submission_deadline(period: &str) -> Option<NaiveDate> {
    parse_period(period).and_then(|d| d.with_day(SUBMISSION_DAY))
}

/// Last of `periods` (sorted ascending) for which `has_actuals` holds.
pub fn latest_closed_period(periods: &[&str], has_actuals: impl Fn(&str) -> bool) -> Option<String> {
    periods
        .iter()
        .rev()
        .find(|p| has_actuals(p))
        .map(|p| p.to_string())
}

#[component]
pub fn HomeDashboard() -> impl IntoView {
    let config = use_config();
    let ctx = use_app_context();
    let role = use_role();

    let forecasts = mock_forecasts();
    let current = config.forecast.current_period.clone();
    let threshold = config.forecast.variance_threshold_percent;

    let current_rows: Vec<_> = forecasts.iter().filter(|r| r.month == current).cloned().collect();
    let totals = forecast_totals(&current_rows);

    let closed = latest_closed_period(&MONTHS, |m| {
        let mut rows = forecasts.iter().filter(|r| r.month == m).peekable();
        rows.peek().is_some() && rows.all(|r| r.actual_hours.is_some())
    });
    let variance = closed
        .as_deref()
        .map(|m| summarize_variances(&variances_for_month(&forecasts, m), threshold));

    let (pending, approved, rejected) = status_counts(&mock_approvals());
    let decided_share = if pending + approved + rejected == 0 {
        0.0
    } else {
        (approved + rejected) as f64 / (pending + approved + rejected) as f64 * 100.0
    };

    let deadline = submission_deadline(&current)
        .map(|d| d.format("%d %B %Y").to_string())
        .unwrap_or_default();

    let quick_links = move || {
        let permissions = role.permissions();
        page_configs()
            .iter()
            .filter(|p| p.id != pages::HOME && permissions.iter().any(|id| id == p.id))
            .collect::<Vec<_>>()
    };

    let variance_percent = variance.as_ref().and_then(|v| v.variance_percent);
    let over_threshold = variance.as_ref().map(|v| v.crafts_over_threshold).unwrap_or(0);
    let closed_label = closed.as_deref().map(format_period).unwrap_or_else(|| "-".to_string());

    view! {
        <PageFrame page_id="home--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Home"
                subtitle=format!("{} overview", format_period(&current))
            >
                {move || role.current.get().map(|r| view! {
                    <Badge tone=Tone::Info>{format!("Signed in as {}", r.name)}</Badge>
                })}
            </PageHeader>

            <div class="page__content">
                <Alert tone=Tone::Info title="Submission window open">
                    {format!("{} forecasts are due by {deadline}.", format_period(&current))}
                </Alert>

                <div class="stat-grid">
                    <StatCard
                        label="Forecast hours"
                        icon_name="clock"
                        value=Some(totals.forecast_hours)
                        format=StatFormat::Hours
                        subtitle=format_period(&current)
                    />
                    <StatCard
                        label="Headcount"
                        icon_name="hard-hat"
                        value=Some(totals.headcount as f64)
                        format=StatFormat::Integer
                    />
                    <StatCard
                        label="Variance"
                        icon_name="activity"
                        value=variance_percent
                        format=StatFormat::Percent
                        tone={ if over_threshold > 0 { Tone::Warning } else { Tone::Success } }
                        subtitle=format!("Closed month: {closed_label}")
                    />
                    <StatCard
                        label="Pending approvals"
                        icon_name="check-circle"
                        value=Some(pending as f64)
                        format=StatFormat::Integer
                        tone=Tone::Warning
                    />
                </div>

                <div class="dashboard-grid">
                    <Card title="Approval progress" description="Share of submitted forecasts already decided">
                        <Progress value=decided_share tone=Tone::Success show_label=true />
                        <div class="dashboard__legend">
                            <Badge tone=Tone::Warning dot=true>{format!("{pending} pending")}</Badge>
                            <Badge tone=Tone::Success dot=true>{format!("{approved} approved")}</Badge>
                            <Badge tone=Tone::Error dot=true>{format!("{rejected} rejected")}</Badge>
                        </div>
                    </Card>

                    <Card title="Variance watch" description=format!("Crafts beyond {threshold:.0}% in {closed_label}")>
                        {if over_threshold == 0 {
                            view! { <p>"All crafts are within the threshold."</p> }.into_any()
                        } else {
                            view! {
                                <p>{format!("{over_threshold} craft(s) need attention.")}</p>
                            }.into_any()
                        }}
                    </Card>

                    <Card title="Quick links">
                        <div class="quick-links">
                            <For
                                each=quick_links
                                key=|p| p.id
                                children=move |p| {
                                    let id = p.id;
                                    view! {
                                        <button
                                            class="quick-links__item"
                                            on:click=move |_| {
                                                ctx.navigate_to(id);
                                            }
                                        >
                                            {icon("chevron-right")}
                                            <span>{p.title}</span>
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </Card>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_deadline() {
        assert_eq!(submission_deadline("2026-10"), NaiveDate::from_ymd_opt(2026, 10, 25));
        assert_eq!(submission_deadline("bad"), None);
    }

    #[test]
    fn test_latest_closed_period() {
        let months = ["2026-08", "2026-09", "2026-10", "2026-11"];
        let closed = latest_closed_period(&months, |m| m <= "2026-10");
        assert_eq!(closed.as_deref(), Some("2026-10"));
        assert_eq!(latest_closed_period(&months, |_| false), None);
    }
}
