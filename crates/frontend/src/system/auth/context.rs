//! Current role for the session. Nothing is persisted: a reload starts
//! logged out.

use contracts::system::roles::{RoleCatalog, UserRole};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct RoleContext {
    pub current: RwSignal<Option<UserRole>>,
    pub available: StoredValue<RoleCatalog>,
}

impl RoleContext {
    pub fn new() -> Self {
        Self::with_catalog(RoleCatalog::built_in())
    }

    pub fn with_catalog(catalog: RoleCatalog) -> Self {
        Self {
            current: RwSignal::new(None),
            available: StoredValue::new(catalog),
        }
    }

    pub fn login(&self, role_id: &str) -> Result<(), String> {
        let role = self.lookup(role_id)?;
        log::info!("Logged in as '{}'", role.id);
        self.current.set(Some(role));
        Ok(())
    }

    /// Same as `login`, but a no-op when `role_id` is already current.
    pub fn switch_role(&self, role_id: &str) -> Result<(), String> {
        let unchanged = self
            .current
            .with_untracked(|c| c.as_ref().map(|r| r.id == role_id).unwrap_or(false));
        if unchanged {
            return Ok(());
        }
        let role = self.lookup(role_id)?;
        leptos::logging::log!("Switching role to '{}'", role.id);
        self.current.set(Some(role));
        Ok(())
    }

    pub fn logout(&self) {
        log::info!("Logged out");
        self.current.set(None);
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.with(|c| c.is_some())
    }

    /// Empty when logged out.
    pub fn permissions(&self) -> Vec<String> {
        self.current
            .with(|c| c.as_ref().map(|r| r.permissions.clone()).unwrap_or_default())
    }

    pub fn can_access(&self, page_id: &str) -> bool {
        self.current
            .with(|c| c.as_ref().map(|r| r.permits(page_id)).unwrap_or(false))
    }

    pub fn roles(&self) -> Vec<UserRole> {
        self.available.with_value(|catalog| catalog.all().to_vec())
    }

    fn lookup(&self, role_id: &str) -> Result<UserRole, String> {
        self.available
            .with_value(|catalog| catalog.find(role_id).cloned())
            .ok_or_else(|| {
                log::warn!("Unknown role '{role_id}'");
                format!("Unknown role: {role_id}")
            })
    }
}

impl Default for RoleContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_role() -> RoleContext {
    use_context::<RoleContext>().expect("RoleContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_and_logout() {
        Owner::new().with(|| {
            let ctx = RoleContext::new();
            assert!(ctx.permissions().is_empty());
            ctx.login("planner").unwrap();
            assert!(ctx.can_access("spc-code-mapping"));
            assert!(!ctx.can_access("home"));
            ctx.logout();
            assert!(!ctx.is_logged_in());
        });
    }

    #[test]
    fn test_unknown_role_keeps_current() {
        Owner::new().with(|| {
            let ctx = RoleContext::new();
            ctx.login("administrator").unwrap();
            assert_eq!(ctx.switch_role("ghost"), Err("Unknown role: ghost".to_string()));
            assert_eq!(
                ctx.current.get_untracked().map(|r| r.id),
                Some("administrator".to_string())
            );
        });
    }

    #[test]
    fn test_switch_role() {
        Owner::new().with(|| {
            let ctx = RoleContext::new();
            ctx.login("administrator").unwrap();
            ctx.switch_role("fab-management").unwrap();
            assert_eq!(
                ctx.permissions(),
                vec!["home", "mlf-variance-report", "power-bi-reports"]
            );
            assert_eq!(ctx.roles().len(), 6);
        });
    }
}
