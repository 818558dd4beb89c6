use pretty_assertions::assert_eq;
use shared_types::{find_route, sidebar_entries, LayoutKey, RouteEntry, ROUTES, SIGN_IN_PATH};

fn names(entries: &[RouteEntry]) -> Vec<&'static str> {
    entries.iter().map(|e| e.name).collect()
}

const SHARED_TABLE: &[RouteEntry] = &[
    RouteEntry::new("Help", LayoutKey::Auth, "/auth/help"),
    RouteEntry::new("Profile", LayoutKey::Auth, "/auth/profile"),
    RouteEntry::new("Sign In", LayoutKey::Auth, "/auth/sign-in").hidden(),
    RouteEntry::new("Orders", LayoutKey::Admin, "/admin/orders"),
    RouteEntry::new("Profile", LayoutKey::Admin, "/admin/profile"),
    RouteEntry::new("Secret", LayoutKey::Admin, "/admin/secret").hidden(),
    RouteEntry::new("My Orders", LayoutKey::Driver, "/driver/dashboard"),
];

#[test]
fn visible_auth_entries_fill_in_missing_names() {
    assert_eq!(
        names(&sidebar_entries(SHARED_TABLE, LayoutKey::Admin)),
        vec!["Orders", "Profile", "Help"]
    );
    assert_eq!(
        names(&sidebar_entries(SHARED_TABLE, LayoutKey::Driver)),
        vec!["My Orders", "Help", "Profile"]
    );
}

#[test]
fn auth_layout_lists_only_its_visible_entries() {
    assert_eq!(
        names(&sidebar_entries(SHARED_TABLE, LayoutKey::Auth)),
        vec!["Help", "Profile"]
    );
    assert!(sidebar_entries(ROUTES, LayoutKey::Auth).is_empty());
}

#[test]
fn logout_links_point_at_sign_in() {
    for layout in [LayoutKey::Admin, LayoutKey::Driver] {
        let logout = sidebar_entries(ROUTES, layout)
            .into_iter()
            .find(|e| e.name == "Logout")
            .expect("logout entry");
        assert_eq!(logout.href(), SIGN_IN_PATH);
        assert!(!logout.is_active(logout.path));
    }
}

#[test]
fn active_link_needs_exact_path() {
    let orders = find_route(ROUTES, "/admin/orders").expect("orders route");
    assert!(orders.is_active("/admin/orders"));
    assert!(orders.is_active("/admin/orders/"));
    assert!(orders.is_active("/admin/orders?page=2"));
    assert!(!orders.is_active("/admin/orders-archive"));
    assert!(!orders.is_active("/admin"));
    assert!(!orders.is_active("/driver/orders"));
}

#[test]
fn each_layout_home_is_in_the_table() {
    for layout in [LayoutKey::Auth, LayoutKey::Admin, LayoutKey::Driver] {
        let entry = find_route(ROUTES, layout.home()).expect("home route");
        assert_eq!(entry.layout, layout);
    }
}
