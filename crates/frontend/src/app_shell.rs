//! Root components of the `/app` route.
//!
//! - `AppShell`: role gate, redirects to `/login` without a role
//! - `MainLayout`: Shell with Sidebar and the active page

use crate::layout::global_context::use_app_context;
use crate::layout::left::Sidebar;
use crate::layout::pages::ActivePage;
use crate::layout::Shell;
use crate::system::auth::guard::RequireRole;
use leptos::prelude::*;

/// Starts URL and role synchronisation once, when the layout is created.
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();

    // ?page= first so a deep link is checked against the current role
    ctx.init_url_sync();
    ctx.init_role_sync();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ActivePage /> }.into_any()
        />
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireRole>
            <MainLayout />
        </RequireRole>
    }
}
