use crate::shared::components::ui::{
    use_toast, Badge, Button as KitButton, ButtonVariant, Card, Size, Tone, Tooltip,
};
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_REPORT;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct PowerBiReport {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub workspace: &'static str,
    pub refreshed_at: &'static str,
}

pub const REPORTS: &[PowerBiReport] = &[
    PowerBiReport {
        id: "pbi-mlf-overview",
        name: "MLF Overview",
        description: "Forecast, actual and variance hours by month and craft",
        workspace: "Yard Planning",
        refreshed_at: "2026-10-14T22:00:00Z",
    },
    PowerBiReport {
        id: "pbi-craft-loading",
        name: "Craft Loading",
        description: "Headcount demand per craft against available workforce",
        workspace: "Yard Planning",
        refreshed_at: "2026-10-14T22:00:00Z",
    },
    PowerBiReport {
        id: "pbi-spc-productivity",
        name: "SPC Productivity",
        description: "Earned versus burned hours per SPC code",
        workspace: "Production Control",
        refreshed_at: "2026-10-13T06:30:00Z",
    },
    PowerBiReport {
        id: "pbi-approval-cycle",
        name: "Approval Cycle Time",
        description: "Days from forecast submission to approval per project",
        workspace: "Production Control",
        refreshed_at: "2026-10-12T06:30:00Z",
    },
];

/// Distinct workspaces in listing order.
pub fn workspaces(reports: &[PowerBiReport]) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for r in reports {
        if !names.contains(&r.workspace) {
            names.push(r.workspace);
        }
    }
    names
}

#[component]
pub fn PowerBiReportsPage() -> impl IntoView {
    let toast = use_toast();

    let open_report = move |report: &'static PowerBiReport| {
        log::info!("Open Power BI report {}", report.id);
        toast.info(format!("{} opens in the Power BI workspace \"{}\"", report.name, report.workspace));
    };

    view! {
        <PageFrame page_id="power-bi-reports--report" category=PAGE_CAT_REPORT>
            <PageHeader title="Power BI Reports" subtitle="Published labor analytics">
                <Badge>{format!("{} reports", REPORTS.len())}</Badge>
            </PageHeader>

            <div class="page__content">
                {workspaces(REPORTS)
                    .into_iter()
                    .map(|workspace| view! {
                        <section class="report-group">
                            <h2 class="report-group__title">{workspace}</h2>
                            <div class="report-grid">
                                {REPORTS
                                    .iter()
                                    .filter(|r| r.workspace == workspace)
                                    .map(|report| view! {
                                        <Card
                                            title=report.name
                                            description=report.description
                                            footer=move || view! {
                                                <KitButton
                                                    variant=ButtonVariant::Outline
                                                    size=Size::Sm
                                                    icon_name="external-link"
                                                    on_click=Callback::new(move |_| open_report(report))
                                                >
                                                    "Open report"
                                                </KitButton>
                                            }
                                        >
                                            <Tooltip text="Scheduled refresh, nightly">
                                                <Badge tone=Tone::Info>
                                                    {format!("Refreshed {}", format_datetime(report.refreshed_at))}
                                                </Badge>
                                            </Tooltip>
                                        </Card>
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspaces_keep_order() {
        assert_eq!(workspaces(REPORTS), vec!["Yard Planning", "Production Control"]);
    }

    #[test]
    fn test_report_ids_unique() {
        let ids: std::collections::HashSet<_> = REPORTS.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), REPORTS.len());
    }
}
