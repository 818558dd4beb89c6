//! Route configuration and the sidebar link filter.

use serde::{Deserialize, Serialize};

/// Layout a route renders inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKey {
    Auth,
    Admin,
    Driver,
}

impl LayoutKey {
    /// First path segment owned by this layout.
    pub fn segment(&self) -> &'static str {
        match self {
            LayoutKey::Auth => "auth",
            LayoutKey::Admin => "admin",
            LayoutKey::Driver => "driver",
        }
    }

    /// Landing page of the layout.
    pub fn home(&self) -> &'static str {
        match self {
            LayoutKey::Auth => SIGN_IN_PATH,
            LayoutKey::Admin => "/admin/orders",
            LayoutKey::Driver => "/driver/dashboard",
        }
    }
}

pub const SIGN_IN_PATH: &str = "/auth/sign-in";

/// One navigable entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub name: &'static str,
    pub layout: LayoutKey,
    pub path: &'static str,
    pub visible: bool,
    /// Where the link actually goes, when it differs from `path`.
    pub override_target: Option<&'static str>,
}

impl RouteEntry {
    pub const fn new(name: &'static str, layout: LayoutKey, path: &'static str) -> Self {
        Self {
            name,
            layout,
            path,
            visible: true,
            override_target: None,
        }
    }

    pub const fn hidden(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }

    pub const fn redirect_to(self, target: &'static str) -> Self {
        Self {
            override_target: Some(target),
            ..self
        }
    }

    /// Link target.
    pub fn href(&self) -> &'static str {
        self.override_target.unwrap_or(self.path)
    }

    /// Active-link check. Compares the full path exactly.
    pub fn is_active(&self, current_path: &str) -> bool {
        let current = current_path.split(['?', '#']).next().unwrap_or(current_path);
        let current = if current.len() > 1 {
            current.trim_end_matches('/')
        } else {
            current
        };
        self.override_target.is_none() && self.path == current
    }
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry::new("Sign In", LayoutKey::Auth, SIGN_IN_PATH).hidden(),
    RouteEntry::new("Orders", LayoutKey::Admin, "/admin/orders"),
    RouteEntry::new("Profile", LayoutKey::Admin, "/admin/profile"),
    RouteEntry::new("Logout", LayoutKey::Admin, "/admin/logout").redirect_to(SIGN_IN_PATH),
    RouteEntry::new("My Orders", LayoutKey::Driver, "/driver/dashboard"),
    RouteEntry::new("Profile", LayoutKey::Driver, "/driver/profile"),
    RouteEntry::new("Logout", LayoutKey::Driver, "/driver/logout").redirect_to(SIGN_IN_PATH),
];

/// Sidebar links for `active`, in table order.
///
/// Visible entries of the active layout come first. Visible auth entries are
/// appended unless the active layout already has an entry of the same name.
pub fn sidebar_entries(routes: &[RouteEntry], active: LayoutKey) -> Vec<RouteEntry> {
    let own: Vec<RouteEntry> = routes
        .iter()
        .filter(|r| r.visible && r.layout == active)
        .copied()
        .collect();
    if active == LayoutKey::Auth {
        return own;
    }
    let shared = routes.iter().filter(|r| {
        r.visible && r.layout == LayoutKey::Auth && !own.iter().any(|o| o.name == r.name)
    });
    own.iter().copied().chain(shared.copied()).collect()
}

/// Entry whose path matches `path` exactly.
pub fn find_route(routes: &[RouteEntry], path: &str) -> Option<RouteEntry> {
    routes.iter().find(|r| r.path == path).copied()
}
