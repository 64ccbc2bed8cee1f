use super::calendar::shift_month;
use crate::shared::date_utils::{format_period, parse_period};
use leptos::prelude::*;

/// `YYYY-MM` period `delta` months away, `None` when `period` is malformed.
pub fn shift_period(period: &str, delta: i32) -> Option<String> {
    let first = parse_period(period)?;
    shift_month(first, delta).map(|d| d.format("%Y-%m").to_string())
}

/// Previous/next buttons around a forecast period.
#[component]
pub fn MonthSelector(
    /// `YYYY-MM`
    period: RwSignal<String>,
    /// Resets to this period
    #[prop(into)]
    current_period: String,
) -> impl IntoView {
    let step = move |delta: i32| {
        if let Some(next) = shift_period(&period.get_untracked(), delta) {
            period.set(next);
        }
    };
    let is_current = {
        let current_period = current_period.clone();
        move || period.get() == current_period
    };

    view! {
        <div class="month-selector">
            <button class="month-selector__btn" title="Previous month" on:click=move |_| step(-1)>
                {crate::shared::icons::icon("chevron-left")}
            </button>
            <span class="month-selector__label">{move || format_period(&period.get())}</span>
            <button class="month-selector__btn" title="Next month" on:click=move |_| step(1)>
                {crate::shared::icons::icon("chevron-right")}
            </button>
            <button
                class="month-selector__btn month-selector__btn--text"
                title="Current period"
                disabled=is_current
                on:click=move |_| period.set(current_period.clone())
            >
                "Current"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_period() {
        assert_eq!(shift_period("2026-10", -1).as_deref(), Some("2026-09"));
        assert_eq!(shift_period("2026-12", 1).as_deref(), Some("2027-01"));
        assert_eq!(shift_period("bad", 1), None);
    }
}
