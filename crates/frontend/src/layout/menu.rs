//! Menu configuration shared by the header mega menu and the menu dashboard.

/// One navigable action of a menu section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuAction {
    pub label: &'static str,
    pub path: &'static str,
    /// `false` keeps the action in the header menu only.
    pub show_in_dashboard: bool,
    pub admin_only: bool,
}

impl MenuAction {
    const fn new(label: &'static str, path: &'static str) -> Self {
        Self {
            label,
            path,
            show_in_dashboard: true,
            admin_only: false,
        }
    }

    const fn menu_only(self) -> Self {
        Self {
            show_in_dashboard: false,
            ..self
        }
    }

    const fn admin(self) -> Self {
        Self {
            admin_only: true,
            ..self
        }
    }

    pub fn is_visible(&self, is_admin: bool) -> bool {
        is_admin || !self.admin_only
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSection {
    pub key: &'static str,
    pub title: &'static str,
    /// Name understood by [`crate::shared::icons::icon`]
    pub icon: &'static str,
    pub actions: &'static [MenuAction],
}

impl MenuSection {
    /// Actions the user may open, in configuration order.
    pub fn menu_actions(&self, is_admin: bool) -> Vec<MenuAction> {
        self.actions
            .iter()
            .copied()
            .filter(|a| a.is_visible(is_admin))
            .collect()
    }

    pub fn dashboard_actions(&self, is_admin: bool) -> Vec<MenuAction> {
        self.menu_actions(is_admin)
            .into_iter()
            .filter(|a| a.show_in_dashboard)
            .collect()
    }
}

pub const MENU: &[MenuSection] = &[
    MenuSection {
        key: "master",
        title: "Master Entry",
        icon: "master",
        actions: &[MenuAction::new("Add Model Record", "/CreateModel")],
    },
    MenuSection {
        key: "warranty",
        title: "Warranty Replacement / Repair",
        icon: "warranty",
        actions: &[MenuAction::new("Update SRF Record", "/UpdateWarrantySRF")],
    },
    MenuSection {
        key: "vendor",
        title: "Vendor Activity",
        icon: "vendor",
        actions: &[MenuAction::new("Settle Final Vendor", "/FinalSettlementVendor").admin()],
    },
    MenuSection {
        key: "upload",
        title: "Uploads",
        icon: "upload",
        actions: &[MenuAction::new("Upload CG SRF Numbers", "/UploadCGSRFNumber")
            .admin()
            .menu_only()],
    },
];

/// Sections with at least one action the user may open.
pub fn menu_sections(is_admin: bool) -> Vec<MenuSection> {
    MENU.iter()
        .copied()
        .filter(|s| !s.menu_actions(is_admin).is_empty())
        .collect()
}

/// Sections rendered as cards on the menu dashboard.
pub fn dashboard_sections(is_admin: bool) -> Vec<MenuSection> {
    MENU.iter()
        .copied()
        .filter(|s| !s.dashboard_actions(is_admin).is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::routes::{route_for, Access};

    #[test]
    fn test_every_action_has_a_route() {
        for section in MENU {
            for action in section.actions {
                let route = route_for(action.path)
                    .unwrap_or_else(|| panic!("no route for {}", action.path));
                assert_eq!(action.admin_only, route.access == Access::Admin, "{}", action.path);
            }
        }
    }

    #[test]
    fn test_standard_user_sections() {
        let keys: Vec<&str> = menu_sections(false).iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["master", "warranty"]);
    }

    #[test]
    fn test_menu_only_action_is_not_on_dashboard() {
        let menu: Vec<&str> = menu_sections(true).iter().map(|s| s.key).collect();
        let dashboard: Vec<&str> = dashboard_sections(true).iter().map(|s| s.key).collect();
        assert!(menu.contains(&"upload"));
        assert!(!dashboard.contains(&"upload"));
        assert!(dashboard.contains(&"vendor"));
    }
}
