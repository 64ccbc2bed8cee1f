use crate::shared::config::use_config;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// "Page 2 of 5 (47)" style summary for the pagination bar.
pub fn page_summary(page: usize, total_pages: usize, total_count: usize) -> String {
    format!("{} / {} ({})", page + 1, total_pages.max(1), total_count)
}

#[component]
pub fn PaginationControls(
    /// 0-indexed
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    /// Defaults to `[ui] page_size_options` from the config
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let config = use_config();
    let default_size = config.ui.default_page_size;
    let page_size_opts = page_size_options.unwrap_or_else(|| config.ui.page_size_options.clone());

    let is_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=move || current_page.get() == 0
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || page_summary(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if !is_last() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
                disabled=is_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=is_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(default_size);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_summary() {
        assert_eq!(page_summary(1, 5, 47), "2 / 5 (47)");
        assert_eq!(page_summary(0, 0, 0), "1 / 1 (0)");
    }
}
