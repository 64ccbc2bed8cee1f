//! Role-filtered navigation menu.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_role;
use contracts::system::navigation::{filter_navigation, navigation_tree, visible_children, NavItem};
use leptos::prelude::*;

#[component]
fn SidebarLink(item: NavItem, #[prop(optional)] nested: bool) -> impl IntoView {
    let ctx = use_app_context();
    let id = StoredValue::new(item.id.clone());

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--nested=nested
            class:app-sidebar__item--active=move || id.with_value(|id| ctx.is_active(id))
            title=item.label.clone()
            on:click=move |_| {
                id.with_value(|id| ctx.navigate_to(id));
            }
        >
            <div class="app-sidebar__item-content">
                {icon(&item.icon)}
                <span class="app-sidebar__label">{item.label.clone()}</span>
            </div>
        </div>
    }
}

#[component]
fn SidebarGroup(item: NavItem, children_items: Vec<NavItem>) -> impl IntoView {
    let ctx = use_app_context();
    let role_ctx = use_role();
    let id = StoredValue::new(item.id.clone());
    let children_items = StoredValue::new(children_items);

    // A group may itself be a page (Master Data).
    let on_click = move |_| {
        id.with_value(|id| {
            if role_ctx.can_access(id) {
                ctx.navigate_to(id);
            } else {
                ctx.toggle_group(id);
            }
        });
        ctx.sidebar_open.set(true);
    };

    view! {
        <div>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || id.with_value(|id| ctx.is_active(id))
                title=item.label.clone()
                on:click=on_click
            >
                <div class="app-sidebar__item-content">
                    {icon(&item.icon)}
                    <span class="app-sidebar__label">{item.label.clone()}</span>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=move || id.with_value(|id| ctx.is_expanded(id))
                    on:click=move |ev| {
                        ev.stop_propagation();
                        id.with_value(|id| ctx.toggle_group(id));
                    }
                >
                    {icon("chevron-right")}
                </div>
            </div>
            <Show when=move || ctx.sidebar_open.get() && id.with_value(|id| ctx.is_expanded(id))>
                <div class="app-sidebar__children">
                    {children_items
                        .get_value()
                        .into_iter()
                        .map(|child| view! { <SidebarLink item=child nested=true /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let role_ctx = use_role();
    let tree = StoredValue::new(navigation_tree());

    let menu = move || {
        let permissions = role_ctx.permissions();
        tree.with_value(|tree| {
            filter_navigation(tree, &permissions)
                .into_iter()
                .map(|item| {
                    let children: Vec<NavItem> = visible_children(&item, &permissions)
                        .into_iter()
                        .cloned()
                        .collect();
                    if item.has_children() && !children.is_empty() {
                        view! { <SidebarGroup item=item children_items=children /> }.into_any()
                    } else {
                        view! { <SidebarLink item=item /> }.into_any()
                    }
                })
                .collect_view()
        })
    };

    view! {
        <nav class="app-sidebar__content" class:app-sidebar__content--collapsed=move || !ctx.sidebar_open.get()>
            {menu}
        </nav>
    }
}
