//! Month calendar. Weeks start on Monday.

use chrono::{Datelike, Months, NaiveDate};
use leptos::prelude::*;

pub type Week = [Option<NaiveDate>; 7];

pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Weeks of `year`/`month`, padded with `None` before the 1st and after the
/// last day. Between 4 and 6 rows; `None` for an invalid month.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<Week>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    let days_in_month = next.signed_duration_since(first).num_days() as usize;
    let lead = first.weekday().num_days_from_monday() as usize;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; lead];
    cells.extend(first.iter_days().take(days_in_month).map(Some));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    Some(
        cells
            .chunks(7)
            .map(|chunk| {
                let mut week: Week = [None; 7];
                week.copy_from_slice(chunk);
                week
            })
            .collect(),
    )
}

/// First day of the month `delta` months away from `date`'s month.
pub fn shift_month(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let first = date.with_day(1)?;
    if delta >= 0 {
        first.checked_add_months(Months::new(delta as u32))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    }
}

#[component]
pub fn Calendar(
    /// Any day of the month shown first
    initial_month: NaiveDate,
    selected: RwSignal<Option<NaiveDate>>,
    /// Days drawn with a marker (e.g. submission deadlines)
    #[prop(optional)]
    marked: Vec<NaiveDate>,
    #[prop(optional)] on_select: Option<Callback<NaiveDate>>,
) -> impl IntoView {
    let shown = RwSignal::new(initial_month.with_day(1).unwrap_or(initial_month));
    let marked = StoredValue::new(marked);

    let step = move |delta: i32| {
        if let Some(next) = shift_month(shown.get_untracked(), delta) {
            shown.set(next);
        }
    };

    view! {
        <div class="calendar">
            <div class="calendar__header">
                <button class="calendar__nav" title="Previous month" on:click=move |_| step(-1)>
                    {crate::shared::icons::icon("chevron-left")}
                </button>
                <span class="calendar__title">{move || shown.get().format("%B %Y").to_string()}</span>
                <button class="calendar__nav" title="Next month" on:click=move |_| step(1)>
                    {crate::shared::icons::icon("chevron-right")}
                </button>
            </div>
            <div class="calendar__grid">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|d| view! { <span class="calendar__weekday">{*d}</span> })
                    .collect_view()}
                {move || {
                    let month = shown.get();
                    month_grid(month.year(), month.month())
                        .unwrap_or_default()
                        .into_iter()
                        .flatten()
                        .map(|cell| match cell {
                            None => view! { <span class="calendar__day calendar__day--empty"></span> }.into_any(),
                            Some(day) => {
                                let is_marked = marked.with_value(|m| m.contains(&day));
                                view! {
                                    <button
                                        class="calendar__day"
                                        class:calendar__day--selected=move || selected.get() == Some(day)
                                        class:calendar__day--marked=is_marked
                                        on:click=move |_| {
                                            selected.set(Some(day));
                                            if let Some(handler) = on_select {
                                                handler.run(day);
                                            }
                                        }
                                    >
                                        {day.day()}
                                    </button>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_grid_october_2026() {
        // 1 Oct 2026 is a Thursday
        let grid = month_grid(2026, 10).unwrap();
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0][..3], [None, None, None]);
        assert_eq!(grid[0][3], Some(d(2026, 10, 1)));
        assert_eq!(grid[4][5], Some(d(2026, 10, 31)));
        assert_eq!(grid[4][6], None);
    }

    #[test]
    fn test_month_grid_contains_every_day_once() {
        for month in 1..=12 {
            let grid = month_grid(2024, month).unwrap();
            assert!((4..=6).contains(&grid.len()));
            let days: Vec<NaiveDate> = grid.iter().flatten().flatten().copied().collect();
            assert_eq!(days.first().map(|x| x.day()), Some(1));
            assert!(days.windows(2).all(|w| w[1] == w[0].succ_opt().unwrap()));
        }
        let feb = month_grid(2024, 2).unwrap();
        assert_eq!(feb.iter().flatten().flatten().count(), 29);
    }

    #[test]
    fn test_month_grid_four_rows() {
        // February 2027 starts on a Monday and has 28 days
        assert_eq!(month_grid(2027, 2).unwrap().len(), 4);
    }

    #[test]
    fn test_month_grid_invalid_month() {
        assert!(month_grid(2026, 13).is_none());
        assert!(month_grid(2026, 0).is_none());
    }

    #[test]
    fn test_shift_month() {
        assert_eq!(shift_month(d(2026, 10, 15), 1), Some(d(2026, 11, 1)));
        assert_eq!(shift_month(d(2026, 1, 31), -1), Some(d(2025, 12, 1)));
        assert_eq!(shift_month(d(2026, 12, 5), 2), Some(d(2027, 2, 1)));
    }
}
