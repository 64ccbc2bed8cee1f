use crate::master_data::data::mock_spc_codes;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Badge, Checkbox, Select, Tone};
use crate::shared::components::PageHeader;
use crate::shared::config::use_config;
use crate::shared::list_utils::{filter_list, paginate, sort_list, PageSlice, SearchInput, Searchable, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CONFIG;
use contracts::master_data::spc_codes::{distinct_crafts, SpcCodeMapping};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for SpcCodeMapping {
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches_search(filter)
    }
}

impl Sortable for SpcCodeMapping {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "description" => self.description.cmp(&other.description),
            "craft" => self
                .craft
                .cmp(&other.craft)
                .then_with(|| self.spc_code.cmp(&other.spc_code)),
            "l4_activity" => self.l4_activity.cmp(&other.l4_activity),
            _ => self.spc_code.cmp(&other.spc_code),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpcListState {
    pub search_query: String,
    /// Empty means every craft.
    pub craft: String,
    pub active_only: bool,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl SpcListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_query: String::new(),
            craft: String::new(),
            active_only: false,
            sort_field: "spc_code".to_string(),
            sort_ascending: true,
            page: 0,
            page_size,
        }
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    pub fn visible(&self, rows: &[SpcCodeMapping]) -> PageSlice<SpcCodeMapping> {
        let rows: Vec<_> = rows
            .iter()
            .filter(|r| self.craft.is_empty() || r.craft == self.craft)
            .filter(|r| !self.active_only || r.is_active)
            .cloned()
            .collect();
        let mut data = filter_list(rows, &self.search_query);
        sort_list(&mut data, &self.sort_field, self.sort_ascending);
        paginate(&data, self.page, self.page_size)
    }
}

#[component]
pub fn SpcCodeMappingPage() -> impl IntoView {
    let config = use_config();
    let rows = StoredValue::new(mock_spc_codes());
    let state = RwSignal::new(SpcListState::new(config.ui.default_page_size));
    let visible = Memo::new(move |_| state.with(|s| rows.with_value(|r| s.visible(r))));

    let craft_options = rows.with_value(|r| {
        let mut options = vec![(String::new(), "All crafts".to_string())];
        options.extend(distinct_crafts(r).into_iter().map(|c| (c.clone(), c)));
        options
    });

    let search = Signal::derive(move || state.with(|s| s.search_query.clone()));
    let craft = Signal::derive(move || state.with(|s| s.craft.clone()));
    let active_only = Signal::derive(move || state.with(|s| s.active_only));
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));

    view! {
        <PageFrame page_id="spc-code-mapping--config" category=PAGE_CAT_CONFIG>
            <PageHeader title="SPC Code Mapping" subtitle="Standard Process Codes by craft and L4 activity">
                <Badge>{move || visible.with(|v| format!("{} codes", v.total_count))}</Badge>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <SearchInput
                                value=search
                                on_change=Callback::new(move |query: String| {
                                    state.update(|s| {
                                        s.search_query = query;
                                        s.page = 0;
                                    })
                                })
                                placeholder="Code, description, craft or activity..."
                            />
                            <Select
                                value=craft
                                options=craft_options
                                on_change=Callback::new(move |c: String| {
                                    state.update(|s| {
                                        s.craft = c;
                                        s.page = 0;
                                    })
                                })
                            />
                            <Checkbox
                                label="Active only"
                                checked=active_only
                                on_change=Callback::new(move |on: bool| {
                                    state.update(|s| {
                                        s.active_only = on;
                                        s.page = 0;
                                    })
                                })
                            />
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || visible.with(|v| v.page))
                                total_pages=Signal::derive(move || visible.with(|v| v.total_pages))
                                total_count=Signal::derive(move || visible.with(|v| v.total_count))
                                page_size=Signal::derive(move || state.with(|s| s.page_size))
                                on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                                on_page_size_change=Callback::new(move |size| {
                                    state.update(|s| {
                                        s.page_size = size;
                                        s.page = 0;
                                    })
                                })
                            />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="spc-code-mapping-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="SPC code" sort_field="spc_code" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Description" sort_field="description" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=220.0 />
                                <SortableHeaderCell label="Craft" sort_field="craft" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="L4 activity" sort_field="l4_activity" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=130.0 />
                                <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get().items
                                key=|r| r.spc_code.clone()
                                children=move |row| {
                                    let (tone, text) = if row.is_active {
                                        (Tone::Success, "Active")
                                    } else {
                                        (Tone::Neutral, "Inactive")
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <code>{row.spc_code.clone()}</code>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.description.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.craft.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.l4_activity.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge tone=tone>{text}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || visible.with(|v| v.total_count == 0)>
                        <div class="table__empty">"No SPC codes match the filters."</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_craft_filter() {
        let mut state = SpcListState::new(50);
        state.craft = "Welding".to_string();
        let page = state.visible(&mock_spc_codes());
        assert_eq!(page.total_count, 3);
        assert!(page.items.iter().all(|r| r.craft == "Welding"));
    }

    #[test]
    fn test_active_only_and_search() {
        let mut state = SpcListState::new(50);
        state.active_only = true;
        state.search_query = "insulation".to_string();
        let page = state.visible(&mock_spc_codes());
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].spc_code, "SPC-7100");
    }

    #[test]
    fn test_sort_by_craft_descending() {
        let mut state = SpcListState::new(5);
        state.toggle_sort("craft");
        state.toggle_sort("craft");
        let page = state.visible(&mock_spc_codes());
        assert_eq!(page.items[0].craft, "Welding");
        assert_eq!(page.total_pages, 4);
    }
}
