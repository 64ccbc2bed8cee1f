use super::registry::render_page_content;
use crate::layout::global_context::use_app_context;
use crate::system::auth::context::use_role;
use leptos::prelude::*;

/// Content area. A page the current role may not see renders nothing.
#[component]
pub fn ActivePage() -> impl IntoView {
    let ctx = use_app_context();
    let role_ctx = use_role();

    let visible_page = Memo::new(move |_| {
        let page_id = ctx.active_page.get();
        role_ctx.can_access(&page_id).then_some(page_id)
    });

    move || match visible_page.get() {
        Some(page_id) => {
            leptos::logging::log!("render page '{}'", page_id);
            render_page_content(&page_id)
        }
        None => ().into_any(),
    }
}
