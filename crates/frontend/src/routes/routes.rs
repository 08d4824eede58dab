//! URL routes and their access tiers.

use crate::domain::a001_model::ui::create::ModelCreatePage;
use crate::domain::a002_warranty::ui::update::WarrantyUpdatePage;
use crate::domain::a003_vendor::ui::final_settlement::VendorFinalSettlementPage;
use crate::domain::a005_cg_srf_number::ui::upload::CgSrfUploadPage;
use crate::layout::Shell;
use crate::system::auth::guard::{RequireAdmin, RequireAuth};
use crate::system::pages::login::LoginPage;
use crate::system::pages::menu_dashboard::MenuDashboardPage;
use crate::system::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

pub const LOGIN_PATH: &str = "/";
pub const HOME_PATH: &str = "/MenuDashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    MenuDashboard,
    CreateModel,
    UpdateWarrantySrf,
    FinalSettlementVendor,
    UploadCgSrfNumber,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub page: Page,
    pub access: Access,
}

pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: LOGIN_PATH,
        page: Page::Login,
        access: Access::Public,
    },
    RouteDef {
        path: HOME_PATH,
        page: Page::MenuDashboard,
        access: Access::Authenticated,
    },
    RouteDef {
        path: "/CreateModel",
        page: Page::CreateModel,
        access: Access::Authenticated,
    },
    RouteDef {
        path: "/UpdateWarrantySRF",
        page: Page::UpdateWarrantySrf,
        access: Access::Authenticated,
    },
    RouteDef {
        path: "/FinalSettlementVendor",
        page: Page::FinalSettlementVendor,
        access: Access::Admin,
    },
    RouteDef {
        path: "/UploadCGSRFNumber",
        page: Page::UploadCgSrfNumber,
        access: Access::Admin,
    },
];

/// Unknown paths still require a session.
pub const NOT_FOUND: RouteDef = RouteDef {
    path: "*",
    page: Page::NotFound,
    access: Access::Authenticated,
};

pub fn route_for(path: &str) -> Option<RouteDef> {
    ROUTES.iter().copied().find(|r| r.path == path)
}

fn access_of(page: Page) -> Access {
    ROUTES
        .iter()
        .find(|r| r.page == page)
        .map_or(NOT_FOUND.access, |r| r.access)
}

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::MenuDashboard => view! { <MenuDashboardPage /> }.into_any(),
        Page::CreateModel => view! { <ModelCreatePage /> }.into_any(),
        Page::UpdateWarrantySrf => view! { <WarrantyUpdatePage /> }.into_any(),
        Page::FinalSettlementVendor => view! { <VendorFinalSettlementPage /> }.into_any(),
        Page::UploadCgSrfNumber => view! { <CgSrfUploadPage /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

/// The page behind the guard its route asks for.
fn guarded(page: Page) -> AnyView {
    match access_of(page) {
        Access::Public => page_view(page),
        Access::Authenticated => view! {
            <RequireAuth>
                <Shell>{page_view(page)}</Shell>
            </RequireAuth>
        }
        .into_any(),
        Access::Admin => view! {
            <RequireAdmin>
                <Shell>{page_view(page)}</Shell>
            </RequireAdmin>
        }
        .into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| guarded(Page::NotFound)>
            <Route path=path!("/") view=|| guarded(Page::Login) />
            <Route path=path!("/MenuDashboard") view=|| guarded(Page::MenuDashboard) />
            <Route path=path!("/CreateModel") view=|| guarded(Page::CreateModel) />
            <Route path=path!("/UpdateWarrantySRF") view=|| guarded(Page::UpdateWarrantySrf) />
            <Route
                path=path!("/FinalSettlementVendor")
                view=|| guarded(Page::FinalSettlementVendor)
            />
            <Route path=path!("/UploadCGSRFNumber") view=|| guarded(Page::UploadCgSrfNumber) />
        </Routes>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.path, b.path);
                assert_ne!(a.page, b.page);
            }
        }
    }

    #[test]
    fn test_access_tiers() {
        assert_eq!(access_of(Page::Login), Access::Public);
        assert_eq!(access_of(Page::CreateModel), Access::Authenticated);
        assert_eq!(access_of(Page::UpdateWarrantySrf), Access::Authenticated);
        assert_eq!(access_of(Page::FinalSettlementVendor), Access::Admin);
        assert_eq!(access_of(Page::UploadCgSrfNumber), Access::Admin);
        assert_eq!(access_of(Page::NotFound), Access::Authenticated);
    }

    #[test]
    fn test_source_lines_fit_width() {
        let source = include_str!("routes.rs");
        for (n, line) in source.lines().enumerate() {
            assert!(line.chars().count() <= 100, "line {} is too wide", n + 1);
        }
    }

    #[test]
    fn test_route_lookup() {
        assert_eq!(route_for("/MenuDashboard").map(|r| r.page), Some(Page::MenuDashboard));
        assert_eq!(route_for("/menudashboard"), None);
        assert_eq!(route_for("/Unknown"), None);
    }
}
