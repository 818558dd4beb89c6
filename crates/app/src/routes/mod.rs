pub mod driver_dashboard;
pub mod marketplace;
pub mod not_found;
pub mod profile;
pub mod sign_in;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdMenu, LdPackage, LdTruck, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{
    find_route, sidebar_entries, AppError, LayoutKey, OrderRecord, RouteEntry, ROUTES,
};
use shared_ui::theme::ThemeState;
use shared_ui::{
    Navbar, NavbarSpacer, NavbarTitle, Sidebar, SidebarContent, SidebarFooter,
    SidebarGroupLabel, SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton,
    SidebarMenuItem, SidebarProvider, SidebarTrigger, Switch, SwitchThumb,
};

use driver_dashboard::DriverDashboard;
use marketplace::Marketplace;
use not_found::NotFound;
use profile::ProfilePage;
use sign_in::SignIn;

/// Application routes.
///
/// Paths mirror the `ROUTES` table in `shared_types::navigation`; the
/// logout paths only exist as redirects.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::SignIn {})]
    #[redirect("/admin", || Route::Marketplace {})]
    #[redirect("/admin/logout", || Route::SignIn {})]
    #[redirect("/driver", || Route::DriverDashboard {})]
    #[redirect("/driver/logout", || Route::SignIn {})]
    #[layout(AuthLayout)]
        #[route("/auth/sign-in")]
        SignIn {},
    #[end_layout]
    #[layout(AdminLayout)]
        #[route("/admin/orders")]
        Marketplace {},
        #[route("/admin/profile")]
        AdminProfile {},
    #[end_layout]
    #[layout(DriverLayout)]
        #[route("/driver/dashboard")]
        DriverDashboard {},
        #[route("/driver/profile")]
        DriverProfile {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn AdminProfile() -> Element {
    rsx! { ProfilePage { layout: LayoutKey::Admin } }
}

#[component]
fn DriverProfile() -> Element {
    rsx! { ProfilePage { layout: LayoutKey::Driver } }
}

/// Centered shell for the sign-in page; no sidebar.
#[component]
fn AuthLayout() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        div { class: "auth-shell",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn AdminLayout() -> Element {
    rsx! { DashboardShell { layout: LayoutKey::Admin } }
}

#[component]
fn DriverLayout() -> Element {
    rsx! { DashboardShell { layout: LayoutKey::Driver } }
}

/// Load a bundled catalog. Failures are logged and become the text shown
/// in place of the list.
pub(crate) fn load_catalog(
    name: &str,
    load: fn() -> Result<Vec<OrderRecord>, AppError>,
) -> Result<Vec<OrderRecord>, String> {
    load().map_err(|e| {
        tracing::error!(catalog = name, error = %e, "Failed to load orders");
        e.user_message()
    })
}

fn entry_icon(entry: &RouteEntry) -> Element {
    if entry.override_target.is_some() {
        return rsx! { Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 } };
    }
    match (entry.layout, entry.path.ends_with("/profile")) {
        (_, true) => rsx! { Icon::<LdUser> { icon: LdUser, width: 18, height: 18 } },
        (LayoutKey::Driver, false) => rsx! { Icon::<LdTruck> { icon: LdTruck, width: 18, height: 18 } },
        _ => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
    }
}

/// Sidebar + navbar frame shared by the admin and driver areas.
///
/// Links come from the route table filtered for `layout`.
#[component]
fn DashboardShell(layout: LayoutKey) -> Element {
    let route: Route = use_route();
    let path = route.to_string();
    let mut theme: ThemeState = use_context();

    let entries = sidebar_entries(ROUTES, layout);
    let page_title = find_route(ROUTES, &path).map(|e| e.name).unwrap_or("");
    let area = match layout {
        LayoutKey::Admin => "Fleet",
        LayoutKey::Driver => "Driver",
        LayoutKey::Auth => "Account",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: true,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        Icon::<LdTruck> { icon: LdTruck, width: 22, height: 22 }
                        span { class: "sidebar-brand-name", "Horizon" }
                    }
                }
                SidebarContent {
                    SidebarGroupLabel { "{area}" }
                    SidebarMenu {
                        for entry in entries {
                            SidebarMenuItem { key: "{entry.layout.segment()}-{entry.name}",
                                Link { to: entry.href(),
                                    SidebarMenuButton { active: entry.is_active(&path),
                                        {entry_icon(&entry)}
                                        "{entry.name}"
                                    }
                                }
                            }
                        }
                    }
                }
                SidebarFooter {
                    div { class: "sidebar-footer-row",
                        span { class: "sidebar-footer-label", "Dark mode" }
                        Switch {
                            checked: Some((theme.is_dark)()),
                            on_checked_change: move |checked: bool| {
                                theme.is_dark.set(checked);
                                theme.apply();
                            },
                            SwitchThumb {}
                        }
                    }
                }
            }

            SidebarInset {
                Navbar {
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    NavbarTitle { "{page_title}" }
                    NavbarSpacer {}
                    span { class: "navbar-area", "{area}" }
                }
                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
