//! Sidebar navigation tree, page-title configuration and the two role rules
//! built on top of them:
//! - which navigation items a role sees
//! - which page becomes active after a role change

use serde::{Deserialize, Serialize};

/// Page ids. Roles grant permissions in terms of these.
pub mod pages {
    pub const HOME: &str = "home";
    pub const MONTHLY_FORECAST: &str = "monthly-forecast";
    pub const FORECAST_APPROVALS: &str = "forecast-approvals";
    pub const MASTER_DATA_CONFIGURATION: &str = "master-data-configuration";
    pub const SPC_CODE_MAPPING: &str = "spc-code-mapping";
    pub const MLF_VARIANCE_REPORT: &str = "mlf-variance-report";
    pub const POWER_BI_REPORTS: &str = "power-bi-reports";
    pub const USER_MANAGEMENT: &str = "user-management";
    pub const SYSTEM_SETTINGS: &str = "system-settings";

    pub const ALL: &[&str] = &[
        HOME,
        MONTHLY_FORECAST,
        FORECAST_APPROVALS,
        MASTER_DATA_CONFIGURATION,
        SPC_CODE_MAPPING,
        MLF_VARIANCE_REPORT,
        POWER_BI_REPORTS,
        USER_MANAGEMENT,
        SYSTEM_SETTINGS,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub icon: String,
    /// Sub-items, one level deep.
    #[serde(default)]
    pub children: Vec<NavItem>,
}

impl NavItem {
    fn leaf(id: &str, label: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            children: Vec::new(),
        }
    }

    fn group(id: &str, label: &str, icon: &str, children: Vec<NavItem>) -> Self {
        Self {
            children,
            ..Self::leaf(id, label, icon)
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// The fixed sidebar tree.
pub fn navigation_tree() -> Vec<NavItem> {
    vec![
        NavItem::leaf(pages::HOME, "Home", "home"),
        NavItem::group(
            "forecasting",
            "Forecasting",
            "trending-up",
            vec![
                NavItem::leaf(pages::MONTHLY_FORECAST, "Monthly Forecast", "calendar"),
                NavItem::leaf(pages::FORECAST_APPROVALS, "Forecast Approvals", "check-circle"),
            ],
        ),
        NavItem::group(
            pages::MASTER_DATA_CONFIGURATION,
            "Master Data",
            "database",
            vec![NavItem::leaf(pages::SPC_CODE_MAPPING, "SPC Code Mapping", "list")],
        ),
        NavItem::group(
            "reports",
            "Reports",
            "bar-chart",
            vec![
                NavItem::leaf(pages::MLF_VARIANCE_REPORT, "MLF Variance Report", "activity"),
                NavItem::leaf(pages::POWER_BI_REPORTS, "Power BI Reports", "layout-dashboard"),
            ],
        ),
        NavItem::group(
            "administration",
            "Administration",
            "settings",
            vec![
                NavItem::leaf(pages::USER_MANAGEMENT, "User Management", "users"),
                NavItem::leaf(pages::SYSTEM_SETTINGS, "System Settings", "sliders"),
            ],
        ),
    ]
}

fn permitted(permissions: &[String], id: &str) -> bool {
    permissions.iter().any(|p| p == id)
}

/// Keeps the items whose own id or at least one sub-item id is permitted.
///
/// Order is preserved and kept items carry all of their sub-items. A role
/// with no matching permissions gets an empty menu.
pub fn filter_navigation(items: &[NavItem], permissions: &[String]) -> Vec<NavItem> {
    items
        .iter()
        .filter(|item| {
            permitted(permissions, &item.id)
                || item.children.iter().any(|c| permitted(permissions, &c.id))
        })
        .cloned()
        .collect()
}

/// Sub-items of `item` the sidebar actually renders.
pub fn visible_children<'a>(item: &'a NavItem, permissions: &[String]) -> Vec<&'a NavItem> {
    item.children
        .iter()
        .filter(|c| permitted(permissions, &c.id))
        .collect()
}

/// Id of the group that holds `page_id` as a sub-item.
pub fn parent_group_id(items: &[NavItem], page_id: &str) -> Option<String> {
    items
        .iter()
        .find(|item| item.children.iter().any(|c| c.id == page_id))
        .map(|item| item.id.clone())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Page-title configuration. Iteration order is the lookup order used by
/// [`page_after_role_change`].
const PAGE_CONFIGS: &[PageConfig] = &[
    PageConfig {
        id: pages::HOME,
        title: "Home",
        subtitle: "Monthly Labor Forecast overview",
    },
    PageConfig {
        id: pages::MONTHLY_FORECAST,
        title: "Monthly Forecast",
        subtitle: "Craft hours and headcount by month",
    },
    PageConfig {
        id: pages::FORECAST_APPROVALS,
        title: "Forecast Approvals",
        subtitle: "Review submitted forecasts",
    },
    PageConfig {
        id: pages::MASTER_DATA_CONFIGURATION,
        title: "Master Data Configuration",
        subtitle: "P6 to L4 breakdown rules",
    },
    PageConfig {
        id: pages::SPC_CODE_MAPPING,
        title: "SPC Code Mapping",
        subtitle: "Standard Process Codes per craft",
    },
    PageConfig {
        id: pages::MLF_VARIANCE_REPORT,
        title: "MLF Variance Report",
        subtitle: "Forecast versus actual hours by craft",
    },
    PageConfig {
        id: pages::POWER_BI_REPORTS,
        title: "Power BI Reports",
        subtitle: "Published report workspaces",
    },
    PageConfig {
        id: pages::USER_MANAGEMENT,
        title: "User Management",
        subtitle: "Users and role assignments",
    },
    PageConfig {
        id: pages::SYSTEM_SETTINGS,
        title: "System Settings",
        subtitle: "Forecast period and display preferences",
    },
];

pub fn page_configs() -> &'static [PageConfig] {
    PAGE_CONFIGS
}

pub fn page_config(id: &str) -> Option<&'static PageConfig> {
    PAGE_CONFIGS.iter().find(|c| c.id == id)
}

/// Page to switch to after the current role changed.
///
/// `None` means "keep `active`": either it is still permitted, or no
/// configured page is permitted at all.
pub fn page_after_role_change(active: &str, permissions: &[String]) -> Option<&'static str> {
    if permitted(permissions, active) {
        return None;
    }
    PAGE_CONFIGS
        .iter()
        .map(|c| c.id)
        .find(|id| permitted(permissions, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::roles::RoleCatalog;

    fn perms(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn ids(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_filter_keeps_item_iff_self_or_child_permitted() {
        let tree = navigation_tree();
        for role in RoleCatalog::built_in().all() {
            let filtered = filter_navigation(&tree, &role.permissions);
            for item in &tree {
                let expected = role.permits(&item.id)
                    || item.children.iter().any(|c| role.permits(&c.id));
                let present = filtered.iter().any(|f| f.id == item.id);
                assert_eq!(expected, present, "role {} item {}", role.id, item.id);
            }
        }
    }

    #[test]
    fn test_filter_preserves_order_and_children() {
        let tree = navigation_tree();
        let filtered = filter_navigation(
            &tree,
            &perms(&[pages::POWER_BI_REPORTS, pages::HOME]),
        );
        assert_eq!(ids(&filtered), vec!["home", "reports"]);
        assert_eq!(filtered[1].children.len(), 2);
    }

    #[test]
    fn test_filter_with_no_matching_permissions_is_empty() {
        let tree = navigation_tree();
        assert!(filter_navigation(&tree, &[]).is_empty());
        assert!(filter_navigation(&tree, &perms(&["unknown-page"])).is_empty());
    }

    #[test]
    fn test_visible_children_hides_forbidden_sub_items() {
        let tree = navigation_tree();
        let reports = tree.iter().find(|i| i.id == "reports").unwrap();
        let visible = visible_children(reports, &perms(&[pages::MLF_VARIANCE_REPORT]));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, pages::MLF_VARIANCE_REPORT);
    }

    #[test]
    fn test_parent_group_id() {
        let tree = navigation_tree();
        assert_eq!(
            parent_group_id(&tree, pages::FORECAST_APPROVALS).as_deref(),
            Some("forecasting")
        );
        assert_eq!(parent_group_id(&tree, pages::HOME), None);
    }

    #[test]
    fn test_every_page_has_config_and_nav_entry() {
        let tree = navigation_tree();
        for page in pages::ALL {
            assert!(page_config(page).is_some(), "{page}");
            let in_tree = tree
                .iter()
                .any(|i| i.id == *page || i.children.iter().any(|c| c.id == *page));
            assert!(in_tree, "{page}");
        }
        assert_eq!(page_configs().len(), pages::ALL.len());
    }

    #[test]
    fn test_active_page_kept_when_permitted() {
        let p = perms(&[pages::HOME, pages::USER_MANAGEMENT]);
        assert_eq!(page_after_role_change(pages::USER_MANAGEMENT, &p), None);
    }

    #[test]
    fn test_switch_to_fab_management_moves_to_home() {
        let catalog = RoleCatalog::built_in();
        let fab = catalog.find("fab-management").unwrap();
        assert_eq!(
            page_after_role_change(pages::USER_MANAGEMENT, &fab.permissions),
            Some(pages::HOME)
        );
    }

    #[test]
    fn test_first_permitted_page_in_config_order() {
        // planner has no "home": first config key it holds is monthly-forecast
        let catalog = RoleCatalog::built_in();
        let planner = catalog.find("planner").unwrap();
        assert_eq!(
            page_after_role_change(pages::USER_MANAGEMENT, &planner.permissions),
            Some(pages::MONTHLY_FORECAST)
        );

        // order in the permission list does not matter
        let p = perms(&[pages::SYSTEM_SETTINGS, pages::SPC_CODE_MAPPING]);
        assert_eq!(
            page_after_role_change(pages::HOME, &p),
            Some(pages::SPC_CODE_MAPPING)
        );
    }

    #[test]
    fn test_no_permitted_page_leaves_active_unchanged() {
        assert_eq!(page_after_role_change(pages::HOME, &[]), None);
        assert_eq!(
            page_after_role_change(pages::HOME, &perms(&["not-a-page"])),
            None
        );
    }
}
