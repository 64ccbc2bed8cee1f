use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::components::ui::{ToastHost, ToastService};
use crate::shared::config::load_config;
use crate::system::auth::context::RoleContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(load_config());

    // One role context shared by the login page, the guard and the shell.
    let role = RoleContext::new();
    provide_context(role);
    provide_context(AppGlobalContext::new(role));

    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
