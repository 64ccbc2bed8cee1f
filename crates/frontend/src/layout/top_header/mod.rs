//! Top bar: brand, active page title, role switcher, sidebar toggle, logout.

pub mod role_switcher;

use crate::layout::global_context::use_app_context;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::system::auth::context::use_role;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use role_switcher::RoleSwitcher;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let role_ctx = use_role();
    let config = use_config();
    let navigate = use_navigate();

    let is_sidebar_visible = move || ctx.sidebar_open.get();

    let logout = move |_| {
        role_ctx.logout();
        navigate("/login", Default::default());
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_sidebar()
                    title=move || if is_sidebar_visible() { "Collapse navigation" } else { "Expand navigation" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">{config.app.title.clone()}</span>
                <span class="top-header__separator">"/"</span>
                <span class="top-header__page">{move || ctx.active_title()}</span>
            </div>

            <div class="top-header__actions">
                <RoleSwitcher />
                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
