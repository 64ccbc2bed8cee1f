use crate::system::auth::context::RoleContext;
use contracts::system::navigation::{
    navigation_tree, page_after_role_change, page_config, pages, parent_group_id,
};
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
struct PageQuery {
    page: Option<String>,
}

/// `?page=` value of a location search string.
fn page_from_search(search: &str) -> Option<String> {
    serde_qs::from_str::<PageQuery>(search.trim_start_matches('?'))
        .ok()
        .and_then(|q| q.page)
        .filter(|p| !p.is_empty())
}

fn search_for_page(page_id: &str) -> String {
    let query = serde_qs::to_string(&PageQuery {
        page: Some(page_id.to_string()),
    })
    .unwrap_or_default();
    format!("?{query}")
}

/// Shell state: which page is shown and how the sidebar looks.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<String>,
    pub sidebar_open: RwSignal<bool>,
    pub expanded_groups: RwSignal<Vec<String>>,
    role: RoleContext,
}

impl AppGlobalContext {
    pub fn new(role: RoleContext) -> Self {
        Self {
            active_page: RwSignal::new(pages::HOME.to_string()),
            sidebar_open: RwSignal::new(true),
            expanded_groups: RwSignal::new(vec![]),
            role,
        }
    }

    /// Activates `page_id` if the current role may see it.
    pub fn navigate_to(&self, page_id: &str) -> bool {
        if !self.role.can_access(page_id) {
            log::warn!("Navigation to '{page_id}' rejected for the current role");
            return false;
        }
        self.activate(page_id);
        true
    }

    fn activate(&self, page_id: &str) {
        leptos::logging::log!("activate page '{}'", page_id);
        self.active_page.set(page_id.to_string());
        if let Some(group) = parent_group_id(&navigation_tree(), page_id) {
            self.expanded_groups.update(|groups| {
                if !groups.contains(&group) {
                    groups.push(group);
                }
            });
        }
    }

    pub fn is_active(&self, page_id: &str) -> bool {
        self.active_page.with(|p| p == page_id)
    }

    pub fn active_title(&self) -> String {
        self.active_page
            .with(|p| page_config(p).map(|c| c.title.to_string()))
            .unwrap_or_default()
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn toggle_group(&self, group_id: &str) {
        self.expanded_groups.update(|groups| {
            if let Some(pos) = groups.iter().position(|g| g == group_id) {
                groups.remove(pos);
            } else {
                groups.push(group_id.to_string());
            }
        });
    }

    pub fn is_expanded(&self, group_id: &str) -> bool {
        self.expanded_groups.with(|groups| groups.iter().any(|g| g == group_id))
    }

    /// Keeps the active page consistent with the role: whenever the role
    /// changes and the active page is no longer permitted, jumps to the
    /// first permitted page in page-config order. If there is none the
    /// active page stays and the content area renders blank.
    pub fn init_role_sync(&self) {
        let this = *self;
        Effect::new(move |_| {
            let permissions = this.role.permissions();
            let active = this.active_page.get_untracked();
            if let Some(next) = page_after_role_change(&active, &permissions) {
                leptos::logging::log!("role change: '{}' not permitted, moving to '{}'", active, next);
                this.activate(next);
            }
        });
    }

    /// Restores `?page=` from the address bar and mirrors the active page
    /// back into it.
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page_id) = page_from_search(&search) {
            if page_config(&page_id).is_some() {
                self.navigate_to(&page_id);
            } else {
                log::warn!("Ignoring unknown page '{page_id}' in URL");
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = search_for_page(&this.active_page.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;

    #[test]
    fn test_page_query_round_trip() {
        assert_eq!(search_for_page("mlf-variance-report"), "?page=mlf-variance-report");
        assert_eq!(
            page_from_search("?page=spc-code-mapping").as_deref(),
            Some("spc-code-mapping")
        );
        assert_eq!(page_from_search(""), None);
        assert_eq!(page_from_search("?page="), None);
    }

    #[test]
    fn test_navigate_to_requires_permission() {
        Owner::new().with(|| {
            let role = RoleContext::new();
            role.login("fab-management").unwrap();
            let ctx = AppGlobalContext::new(role);
            assert!(!ctx.navigate_to(pages::USER_MANAGEMENT));
            assert_eq!(ctx.active_page.get_untracked(), pages::HOME);
            assert!(ctx.navigate_to(pages::MLF_VARIANCE_REPORT));
            assert!(ctx.is_expanded("reports"));
        });
    }

    #[tokio::test]
    async fn test_role_change_moves_off_forbidden_page() {
        let _ = Executor::init_tokio();
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let owner = Owner::new();
                owner.set();

                let role = RoleContext::new();
                role.login("administrator").unwrap();
                let ctx = AppGlobalContext::new(role);
                assert!(ctx.navigate_to(pages::USER_MANAGEMENT));
                ctx.init_role_sync();
                Executor::tick().await;
                assert_eq!(ctx.active_page.get_untracked(), pages::USER_MANAGEMENT);

                role.switch_role("fab-management").unwrap();
                Executor::tick().await;
                assert_eq!(ctx.active_page.get_untracked(), pages::HOME);

                role.switch_role("planner").unwrap();
                Executor::tick().await;
                assert_eq!(ctx.active_page.get_untracked(), pages::MONTHLY_FORECAST);

                // nothing is permitted, the page stays
                role.logout();
                Executor::tick().await;
                assert_eq!(ctx.active_page.get_untracked(), pages::MONTHLY_FORECAST);
            })
            .await;
    }

    #[test]
    fn test_toggle_group() {
        Owner::new().with(|| {
            let ctx = AppGlobalContext::new(RoleContext::new());
            ctx.toggle_group("forecasting");
            assert!(ctx.is_expanded("forecasting"));
            ctx.toggle_group("forecasting");
            assert!(!ctx.is_expanded("forecasting"));
        });
    }
}
