use super::context::use_role;
use leptos::prelude::*;
use leptos_router::components::Redirect;

/// Renders `children` only while a role is selected, otherwise sends the
/// user to `/login`.
#[component]
pub fn RequireRole(children: ChildrenFn) -> impl IntoView {
    let role_ctx = use_role();

    view! {
        <Show
            when=move || role_ctx.is_logged_in()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}
