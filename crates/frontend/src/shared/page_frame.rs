//! Root wrapper for every page rendered in the content area.
//!
//! ```rust
//! # use leptos::prelude::*;
//! # use frontend::shared::page_frame::PageFrame;
//! # use frontend::shared::page_standard::PAGE_CAT_CONFIG;
//! #[component]
//! pub fn SpcCodeMappingPage() -> impl IntoView {
//!     view! {
//!         <PageFrame page_id="spc-code-mapping--config" category=PAGE_CAT_CONFIG>
//!             <div class="page__header">...</div>
//!             <div class="page__content">...</div>
//!         </PageFrame>
//!     }
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// `{page}--{category}`, e.g. `"mlf-variance-report--report"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");

    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_REPORT => "page page--report",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
