//! List helpers shared by every table page: search, sort, paging and the
//! search box component.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Row types that can be matched against a search query.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Row types that can be ordered by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Blank filter returns everything.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// One page of a list plus the numbers the pagination controls need.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    /// Page actually returned, clamped into range (0-indexed).
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Out-of-range pages are clamped to the last page; an empty list still has
/// one (empty) page.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageSlice<T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = if total_count == 0 {
        1
    } else {
        total_count.div_ceil(page_size)
    };
    let page = page.min(total_pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total_count);
    PageSlice {
        items: items.get(start..end).unwrap_or(&[]).to_vec(),
        page,
        total_pages,
        total_count,
    }
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Search box with a 300 ms debounce and a clear button.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // dropping the previous Timeout cancels it
        pending.set_value(Some(Timeout::new(300, move || {
            on_change.run(new_value);
        })));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        hours: u32,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "hours" => self.hours.cmp(&other.hours),
                _ => self.name.cmp(other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Welding", hours: 300 },
            Row { name: "Painting", hours: 100 },
            Row { name: "Pipefitting", hours: 200 },
        ]
    }

    #[test]
    fn test_sort_list() {
        let mut items = rows();
        sort_list(&mut items, "hours", true);
        assert_eq!(items[0].name, "Painting");
        sort_list(&mut items, "name", false);
        assert_eq!(items[0].name, "Welding");
    }

    #[test]
    fn test_filter_list() {
        assert_eq!(filter_list(rows(), "  ").len(), 3);
        let found = filter_list(rows(), "PI");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Pipefitting");
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=7).collect();
        let page = paginate(&items, 1, 3);
        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 7);

        let last = paginate(&items, 2, 3);
        assert_eq!(last.items, vec![7]);
    }

    #[test]
    fn test_paginate_clamps_page() {
        let items: Vec<u32> = (1..=4).collect();
        let page = paginate(&items, 9, 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.items, vec![3, 4]);

        let empty = paginate::<u32>(&[], 3, 10);
        assert_eq!(empty.page, 0);
        assert_eq!(empty.total_pages, 1);
        assert!(empty.items.is_empty());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("hours", "name", true), " ⇅");
    }
}
