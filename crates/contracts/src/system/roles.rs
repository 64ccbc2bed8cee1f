use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::navigation::pages;

/// Named bundle of page-level permissions controlling which pages a user sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Page ids this role may open. Unique, order is irrelevant.
    pub permissions: Vec<String>,
    pub icon: String,
    pub color: String,
    /// Display-only marker, nothing enforces it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read_only: Option<bool>,
}

impl UserRole {
    pub fn permits(&self, page_id: &str) -> bool {
        self.permissions.iter().any(|p| p == page_id)
    }

    pub fn read_only(&self) -> bool {
        self.is_read_only.unwrap_or(false)
    }
}

fn role(
    id: &str,
    name: &str,
    description: &str,
    permissions: &[&str],
    icon: &str,
    color: &str,
    is_read_only: Option<bool>,
) -> UserRole {
    UserRole {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
        icon: icon.to_string(),
        color: color.to_string(),
        is_read_only,
    }
}

static BUILT_IN_ROLES: Lazy<Vec<UserRole>> = Lazy::new(|| {
    vec![
        role(
            "administrator",
            "Administrator",
            "Full access to forecasting, configuration and user administration",
            pages::ALL,
            "shield",
            "#7c3aed",
            None,
        ),
        role(
            "project-controls",
            "Project Controls",
            "Prepares monthly forecasts and maintains master data",
            &[
                pages::HOME,
                pages::MONTHLY_FORECAST,
                pages::FORECAST_APPROVALS,
                pages::MASTER_DATA_CONFIGURATION,
                pages::SPC_CODE_MAPPING,
                pages::MLF_VARIANCE_REPORT,
                pages::POWER_BI_REPORTS,
            ],
            "clipboard",
            "#2563eb",
            None,
        ),
        role(
            "fab-management",
            "Fab Management",
            "Reviews variance and Power BI reporting for the fabrication yard",
            &[pages::HOME, pages::MLF_VARIANCE_REPORT, pages::POWER_BI_REPORTS],
            "building",
            "#059669",
            None,
        ),
        role(
            "craft-supervisor",
            "Craft Supervisor",
            "Submits craft forecasts and follows their approval",
            &[
                pages::HOME,
                pages::MONTHLY_FORECAST,
                pages::FORECAST_APPROVALS,
            ],
            "hard-hat",
            "#d97706",
            None,
        ),
        role(
            "planner",
            "Planner",
            "Maintains L3/L4 activity breakdown and SPC code mapping",
            &[
                pages::MONTHLY_FORECAST,
                pages::MASTER_DATA_CONFIGURATION,
                pages::SPC_CODE_MAPPING,
            ],
            "calendar",
            "#0891b2",
            None,
        ),
        role(
            "executive-viewer",
            "Executive Viewer",
            "Read-only access to summary dashboards",
            &[pages::HOME, pages::POWER_BI_REPORTS],
            "eye",
            "#64748b",
            Some(true),
        ),
    ]
});

/// The hard-coded role list. Built once, never mutated.
pub fn built_in_roles() -> Vec<UserRole> {
    BUILT_IN_ROLES.clone()
}

/// In-memory lookup over the available roles.
#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    roles: Vec<UserRole>,
}

impl RoleCatalog {
    pub fn new(roles: Vec<UserRole>) -> Self {
        Self { roles }
    }

    pub fn built_in() -> Self {
        Self::new(built_in_roles())
    }

    pub fn all(&self) -> &[UserRole] {
        &self.roles
    }

    pub fn find(&self, id: &str) -> Option<&UserRole> {
        self.roles.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_six_built_in_roles_with_unique_ids() {
        let roles = built_in_roles();
        assert_eq!(roles.len(), 6);
        let ids: HashSet<_> = roles.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_permissions_are_unique_and_known() {
        for role in built_in_roles() {
            let unique: HashSet<_> = role.permissions.iter().collect();
            assert_eq!(unique.len(), role.permissions.len(), "{}", role.id);
            for p in &role.permissions {
                assert!(pages::ALL.contains(&p.as_str()), "{} -> {}", role.id, p);
            }
        }
    }

    #[test]
    fn test_fab_management_permissions() {
        let catalog = RoleCatalog::built_in();
        let fab = catalog.find("fab-management").unwrap();
        assert_eq!(
            fab.permissions,
            vec!["home", "mlf-variance-report", "power-bi-reports"]
        );
        assert!(fab.permits("home"));
        assert!(!fab.permits("user-management"));
    }

    #[test]
    fn test_find_unknown_role() {
        assert!(RoleCatalog::built_in().find("guest").is_none());
    }

    #[test]
    fn test_read_only_flag_is_optional_in_json() {
        let catalog = RoleCatalog::built_in();
        let admin = serde_json::to_value(catalog.find("administrator").unwrap()).unwrap();
        assert!(admin.get("is_read_only").is_none());

        let viewer = catalog.find("executive-viewer").unwrap();
        assert!(viewer.read_only());
        let json = serde_json::to_string(viewer).unwrap();
        let back: UserRole = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, viewer);
    }
}
