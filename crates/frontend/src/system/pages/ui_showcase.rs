//! Every UI kit widget on one page, reachable at `/ui-showcase` without a role.

use crate::shared::components::calendar::Calendar;
use crate::shared::components::ui::*;
use crate::shared::components::{MonthSelector, PageHeader, PaginationControls, StatCard, StatFormat};
use crate::shared::config::use_config;
use crate::shared::list_utils::{paginate, SearchInput};
use crate::shared::modal::{Modal, ModalSize};
use crate::shared::date_utils::parse_period;
use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

#[component]
fn ShowcaseSection(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="showcase__section">
            <h2 class="showcase__title">{title}</h2>
            <div class="showcase__body">{children()}</div>
        </section>
    }
}

#[component]
pub fn UiShowcasePage() -> impl IntoView {
    let config = use_config();
    let toast = use_toast();

    let text = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let craft = RwSignal::new(String::new());
    let shift = RwSignal::new("day".to_string());
    let overtime = RwSignal::new(true);
    let notify = RwSignal::new(false);
    let progress = RwSignal::new(64.0);
    let tab = RwSignal::new("overview".to_string());
    let modal_open = RwSignal::new(false);
    let alert_visible = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let period = RwSignal::new(config.forecast.current_period.clone());
    let selected_day = RwSignal::new(None::<NaiveDate>);

    let rows: Vec<u32> = (1..=42).collect();
    let page = RwSignal::new(0usize);
    let page_size = RwSignal::new(config.ui.default_page_size);
    let slice = Memo::new(move |_| paginate(&rows, page.get(), page_size.get()));

    let craft_options = Signal::derive(|| {
        ["Welding", "Pipefitting", "Electrical", "Painting"]
            .iter()
            .map(|c| (c.to_lowercase(), c.to_string()))
            .collect::<Vec<_>>()
    });
    let first_of_period = parse_period(&config.forecast.current_period).unwrap_or_default();
    let deadline = first_of_period.with_day(25).unwrap_or(first_of_period);

    view! {
        <div class="showcase">
            <PageHeader title="UI Showcase" subtitle="Components used across the forecast pages">
                <a class="button button--outline" href="/login">"Back to login"</a>
            </PageHeader>

            <ShowcaseSection title="Buttons">
                <div class="showcase__row">
                    <Button variant=ButtonVariant::Primary icon_name="plus">"Primary"</Button>
                    <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                    <Button variant=ButtonVariant::Outline>"Outline"</Button>
                    <Button variant=ButtonVariant::Ghost>"Ghost"</Button>
                    <Button variant=ButtonVariant::Danger>"Danger"</Button>
                    <Button size=Size::Sm>"Small"</Button>
                    <Button size=Size::Lg>"Large"</Button>
                    <Button loading=true>"Saving"</Button>
                    <Button disabled=true>"Disabled"</Button>
                </div>
            </ShowcaseSection>

            <ShowcaseSection title="Badges and avatars">
                <div class="showcase__row">
                    <Badge>"Neutral"</Badge>
                    <Badge tone=Tone::Primary>"Primary"</Badge>
                    <Badge tone=Tone::Success dot=true>"Approved"</Badge>
                    <Badge tone=Tone::Warning dot=true>"Pending"</Badge>
                    <Badge tone=Tone::Error>"Rejected"</Badge>
                    <Badge tone=Tone::Info>"Read only"</Badge>
                    <RoleBadge name="Planner" color="#7c3aed" />
                    <Avatar name="Maria del Rio" />
                    <Avatar name="Tom Becker" size=Size::Lg color="#0f766e" />
                    <Tooltip text="Tooltips work on hover and focus">
                        <Button variant=ButtonVariant::Ghost icon_name="info">"Hover me"</Button>
                    </Tooltip>
                </div>
            </ShowcaseSection>

            <ShowcaseSection title="Form controls">
                <div class="showcase__grid">
                    <Input
                        label="Project"
                        value=text
                        on_input=Callback::new(move |v| text.set(v))
                        placeholder="e.g. Module M-12"
                        hint="Shown in the forecast header"
                    />
                    <Input
                        label="Headcount"
                        value=Signal::derive(|| "-3".to_string())
                        input_type="number"
                        error="Headcount cannot be negative"
                    />
                    <Select
                        label="Craft"
                        value=craft
                        on_change=Callback::new(move |v| craft.set(v))
                        options=craft_options
                        placeholder="Select a craft"
                    />
                    <Textarea
                        label="Comment"
                        value=notes
                        on_input=Callback::new(move |v| notes.set(v))
                        max_length=200
                    />
                    <RadioGroup
                        label="Shift"
                        name="shift"
                        value=shift
                        on_change=Callback::new(move |v| shift.set(v))
                        options=vec![
                            ("day".to_string(), "Day".to_string()),
                            ("night".to_string(), "Night".to_string()),
                        ]
                        inline=true
                    />
                    <Checkbox
                        label="Include overtime"
                        checked=overtime
                        on_change=Callback::new(move |v| overtime.set(v))
                        description="Adds approved overtime to forecast hours"
                    />
                    <Switch
                        checked=notify
                        on_change=Callback::new(move |v| notify.set(v))
                        label="Email me when a forecast is approved"
                    />
                    <SearchInput value=search on_change=Callback::new(move |v| search.set(v)) />
                </div>
            </ShowcaseSection>

            <ShowcaseSection title="Feedback">
                <Show when=move || alert_visible.get()>
                    <Alert
                        tone=Tone::Warning
                        title="Forecast due"
                        on_dismiss=Callback::new(move |_| alert_visible.set(false))
                    >
                        "October forecasts close on the 25th."
                    </Alert>
                </Show>
                <Alert tone=Tone::Success>"All crafts submitted."</Alert>
                <Progress value=progress tone=Tone::Primary show_label=true />
                <div class="showcase__row">
                    <Button
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_| progress.update(|p| *p = (*p + 12.0).min(100.0)))
                    >
                        "Advance"
                    </Button>
                    <Button on_click=Callback::new(move |_| toast.success("Forecast saved"))>"Toast"</Button>
                    <Button
                        variant=ButtonVariant::Danger
                        on_click=Callback::new(move |_| toast.error("Could not submit forecast"))
                    >
                        "Error toast"
                    </Button>
                    <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |_| modal_open.set(true))>
                        "Open modal"
                    </Button>
                </div>
            </ShowcaseSection>

            <ShowcaseSection title="Cards and stats">
                <div class="showcase__row">
                    <StatCard
                        label="Forecast hours"
                        icon_name="clock"
                        value=Signal::derive(|| Some(18240.0))
                        format=StatFormat::Hours
                        change_percent=3.4
                    />
                    <StatCard
                        label="Variance"
                        icon_name="activity"
                        value=Signal::derive(|| Some(12.6))
                        format=StatFormat::Percent
                        tone=Tone::Error
                        subtitle="Above threshold"
                    />
                </div>
                <Card title="Card" description="With header, body and footer" footer=|| view! { "Footer" }>
                    <Tabs
                        tabs=vec![
                            TabItem::new("overview", "Overview"),
                            TabItem::new("crafts", "Crafts"),
                            TabItem::new("history", "History").disabled(),
                        ]
                        selected=tab
                    />
                    <p>{move || format!("Selected tab: {}", tab.get())}</p>
                </Card>
            </ShowcaseSection>

            <ShowcaseSection title="Dates">
                <div class="showcase__row">
                    <MonthSelector period=period current_period=config.forecast.current_period.clone() />
                    <Calendar
                        initial_month=first_of_period
                        selected=selected_day
                        marked=vec![deadline]
                    />
                </div>
                <p>
                    {move || selected_day.get().map(|d| d.format("%d %b %Y").to_string()).unwrap_or_else(|| "No day selected".to_string())}
                </p>
            </ShowcaseSection>

            <ShowcaseSection title="Pagination">
                <p>{move || format!("Rows: {:?}", slice.get().items)}</p>
                <PaginationControls
                    current_page=Signal::derive(move || slice.get().page)
                    total_pages=Signal::derive(move || slice.get().total_pages)
                    total_count=Signal::derive(move || slice.get().total_count)
                    page_size=page_size
                    on_page_change=Callback::new(move |p| page.set(p))
                    on_page_size_change=Callback::new(move |s| {
                        page_size.set(s);
                        page.set(0);
                    })
                />
            </ShowcaseSection>

            <Show when=move || modal_open.get()>
                <Modal
                    title="Submit forecast"
                    size=ModalSize::Small
                    on_close=Callback::new(move |_| modal_open.set(false))
                    footer=move || view! {
                        <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_| modal_open.set(false))>
                            "Cancel"
                        </Button>
                        <Button on_click=Callback::new(move |_| modal_open.set(false))>"Submit"</Button>
                    }
                >
                    <p>"Submit the October forecast for approval?"</p>
                </Modal>
            </Show>
        </div>
    }
}
