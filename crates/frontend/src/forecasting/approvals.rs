use crate::forecasting::data::mock_approvals;
use crate::shared::components::table::format_hours;
use crate::shared::components::ui::{use_toast, Badge, TabItem, Tabs, Tone};
use crate::shared::components::{PageHeader, StatCard, StatFormat};
use crate::shared::date_utils::{format_datetime, format_period};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::forecasting::approvals::{status_counts, Approval, ApprovalAction, ApprovalStatus};
use leptos::prelude::*;
use thaw::*;

/// Applies `action` to the approval `id` in place.
pub fn apply_action(
    items: &mut [Approval],
    id: &str,
    action: ApprovalAction,
    comment: Option<String>,
) -> Result<ApprovalStatus, String> {
    let item = items
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| format!("Approval {id} not found"))?;
    let next = item.status.transition(action).map_err(|e| e.to_string())?;
    item.status = next;
    if action == ApprovalAction::Reopen {
        item.comment = None;
    } else if comment.is_some() {
        item.comment = comment;
    }
    Ok(next)
}

fn status_filter(tab: &str) -> Option<ApprovalStatus> {
    match tab {
        "pending" => Some(ApprovalStatus::Pending),
        "approved" => Some(ApprovalStatus::Approved),
        "rejected" => Some(ApprovalStatus::Rejected),
        _ => None,
    }
}

/// State of the reject dialog. Every open starts from a blank comment, so a
/// dialog dismissed by its mask or Escape leaves nothing behind.
#[derive(Clone, Copy)]
pub struct RejectDialog {
    pub open: RwSignal<bool>,
    pub target: RwSignal<Option<String>>,
    pub comment: RwSignal<String>,
}

impl RejectDialog {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            target: RwSignal::new(None),
            comment: RwSignal::new(String::new()),
        }
    }

    pub fn open_for(&self, id: String) {
        self.comment.set(String::new());
        self.target.set(Some(id));
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
        self.target.set(None);
        self.comment.set(String::new());
    }

    /// Target id and trimmed comment (`None` when blank), then closes.
    pub fn take(&self) -> Option<(String, Option<String>)> {
        let target = self.target.get_untracked();
        let comment = self.comment.with_untracked(|c| {
            let c = c.trim();
            (!c.is_empty()).then(|| c.to_string())
        });
        self.close();
        target.map(|id| (id, comment))
    }
}

impl Default for RejectDialog {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ForecastApprovalsPage() -> impl IntoView {
    let toast = use_toast();
    let approvals = RwSignal::new(mock_approvals());
    let tab = RwSignal::new("pending".to_string());
    let reject = RejectDialog::new();

    let counts = Memo::new(move |_| approvals.with(|a| status_counts(a)));
    let filtered = Memo::new(move |_| {
        let filter = status_filter(&tab.get());
        approvals.with(|items| {
            items
                .iter()
                .filter(|a| filter.is_none_or(|s| a.status == s))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let run_action = move |id: String, action: ApprovalAction, comment: Option<String>| {
        let mut result = Ok(ApprovalStatus::Pending);
        approvals.update(|items| result = apply_action(items, &id, action, comment));
        match result {
            Ok(status) => {
                log::info!("Approval {id} -> {}", status.label());
                toast.success(format!("Forecast {}", status.label().to_lowercase()));
            }
            Err(e) => {
                log::warn!("Approval {id}: {e}");
                toast.error(e);
            }
        }
    };

    let confirm_reject = move |_| {
        if let Some((id, comment)) = reject.take() {
            run_action(id, ApprovalAction::Reject, comment);
        }
    };

    view! {
        <PageFrame page_id="forecast-approvals--list" category=PAGE_CAT_LIST>
            <PageHeader title="Forecast Approvals" subtitle="Review submitted forecasts" />

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Pending"
                        icon_name="clock"
                        value=Signal::derive(move || Some(counts.get().0 as f64))
                        format=StatFormat::Integer
                        tone=Tone::Warning
                    />
                    <StatCard
                        label="Approved"
                        icon_name="check-circle"
                        value=Signal::derive(move || Some(counts.get().1 as f64))
                        format=StatFormat::Integer
                        tone=Tone::Success
                    />
                    <StatCard
                        label="Rejected"
                        icon_name="x"
                        value=Signal::derive(move || Some(counts.get().2 as f64))
                        format=StatFormat::Integer
                        tone=Tone::Error
                    />
                </div>

                <Tabs
                    tabs=vec![
                        TabItem::new("pending", "Pending"),
                        TabItem::new("approved", "Approved"),
                        TabItem::new("rejected", "Rejected"),
                        TabItem::new("all", "All"),
                    ]
                    selected=tab
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>"Project"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Period"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Submitted by"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Submitted"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Hours"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Comment"</TableHeaderCell>
                                <TableHeaderCell min_width=170.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || filtered.get()
                                key=|a| format!("{}:{}", a.id, a.status.label())
                                children=move |item| {
                                    let status = item.status;
                                    let id_approve = item.id.clone();
                                    let id_reject = item.id.clone();
                                    let id_reopen = item.id.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{item.project.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_period(&item.period)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.submitted_by.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&item.submitted_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="text-right">{format_hours(item.total_hours)}</TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge tone=Tone::from_name(status.badge_variant()) dot=true>
                                                        {status.label()}
                                                    </Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.comment.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {if status == ApprovalStatus::Pending {
                                                    view! {
                                                        <Flex gap=FlexGap::Small>
                                                            <Button
                                                                appearance=ButtonAppearance::Primary
                                                                size=ButtonSize::Small
                                                                on_click=move |_| run_action(id_approve.clone(), ApprovalAction::Approve, None)
                                                            >
                                                                "Approve"
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Secondary
                                                                size=ButtonSize::Small
                                                                on_click=move |_| reject.open_for(id_reject.clone())
                                                            >
                                                                "Reject"
                                                            </Button>
                                                        </Flex>
                                                    }.into_any()
                                                } else {
                                                    view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click=move |_| run_action(id_reopen.clone(), ApprovalAction::Reopen, None)
                                                        >
                                                            "Reopen"
                                                        </Button>
                                                    }.into_any()
                                                }}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || filtered.with(|f| f.is_empty())>
                        <div class="table__empty">"No forecasts in this state."</div>
                    </Show>
                </div>
            </div>

            <Dialog open={reject.open}>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Reject forecast"</DialogTitle>
                        <DialogContent>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Reason (optional)"</Label>
                                <Textarea value={reject.comment} placeholder="What needs to change?" />
                            </Flex>
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| reject.close()
                            >
                                "Cancel"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=confirm_reject>
                                "Reject"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_action_updates_status_and_comment() {
        let mut items = mock_approvals();
        let status = apply_action(
            &mut items,
            "apr-101",
            ApprovalAction::Reject,
            Some("Welding too high".to_string()),
        );
        assert_eq!(status, Ok(ApprovalStatus::Rejected));
        let item = items.iter().find(|a| a.id == "apr-101").unwrap();
        assert_eq!(item.comment.as_deref(), Some("Welding too high"));

        assert_eq!(
            apply_action(&mut items, "apr-101", ApprovalAction::Reopen, None),
            Ok(ApprovalStatus::Pending)
        );
        assert_eq!(items.iter().find(|a| a.id == "apr-101").unwrap().comment, None);
    }

    #[test]
    fn test_apply_action_rejects_invalid_transition() {
        let mut items = mock_approvals();
        let err = apply_action(&mut items, "apr-103", ApprovalAction::Approve, None).unwrap_err();
        assert_eq!(err, "cannot approve a forecast that is Approved");
        assert!(apply_action(&mut items, "missing", ApprovalAction::Approve, None).is_err());
    }

    #[test]
    fn test_reject_dialog_opens_blank_after_dismissal() {
        Owner::new().with(|| {
            let dialog = RejectDialog::new();
            dialog.open_for("apr-101".to_string());
            dialog.comment.set("Welding too high".to_string());
            // dismissed by mask or Escape: only `open` flips
            dialog.open.set(false);

            dialog.open_for("apr-102".to_string());
            assert!(dialog.open.get_untracked());
            assert_eq!(dialog.comment.get_untracked(), "");
            assert_eq!(dialog.target.get_untracked().as_deref(), Some("apr-102"));
        });
    }

    #[test]
    fn test_reject_dialog_take_trims_and_closes() {
        Owner::new().with(|| {
            let dialog = RejectDialog::new();
            dialog.open_for("apr-105".to_string());
            dialog.comment.set("   ".to_string());
            assert_eq!(dialog.take(), Some(("apr-105".to_string(), None)));
            assert!(!dialog.open.get_untracked());
            assert_eq!(dialog.target.get_untracked(), None);

            dialog.open_for("apr-101".to_string());
            dialog.comment.set(" Painting missing ".to_string());
            assert_eq!(
                dialog.take(),
                Some(("apr-101".to_string(), Some("Painting missing".to_string())))
            );
            assert_eq!(dialog.take(), None);
        });
    }

    #[test]
    fn test_status_filter() {
        assert_eq!(status_filter("approved"), Some(ApprovalStatus::Approved));
        assert_eq!(status_filter("all"), None);
    }
}
