use crate::app_shell::AppShell;
use crate::system::pages::login::LoginPage;
use crate::system::pages::ui_showcase::UiShowcasePage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// `/login`, `/app` (role required) and `/ui-showcase`. Anything else goes
/// to `/login`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/login" /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/app") view=AppShell />
                <Route path=path!("/ui-showcase") view=UiShowcasePage />
            </Routes>
        </Router>
    }
}
