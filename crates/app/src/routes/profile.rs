use dioxus::prelude::*;
use shared_types::{driver_orders, DeliveryStatus, LayoutKey};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, DetailItem, DetailList, PageHeader};

use crate::format_helpers::initials;
use crate::routes::load_catalog;

struct Profile {
    name: &'static str,
    role: &'static str,
    email: &'static str,
    region: &'static str,
}

fn profile_for(layout: LayoutKey) -> Profile {
    match layout {
        LayoutKey::Driver => Profile {
            name: "Marcus Bell",
            role: "Driver",
            email: "marcus.bell@example.com",
            region: "Greater Toronto",
        },
        LayoutKey::Admin | LayoutKey::Auth => Profile {
            name: "Dana Whitfield",
            role: "Fleet Manager",
            email: "dana.whitfield@example.com",
            region: "Ontario",
        },
    }
}

/// Read-only account page.
#[component]
pub fn ProfilePage(layout: LayoutKey) -> Element {
    let profile = profile_for(layout);
    let orders = use_hook(|| load_catalog("driver", driver_orders).unwrap_or_default());
    let completed = orders
        .iter()
        .filter(|o| o.status == DeliveryStatus::Completed)
        .count();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./profile.css") }
        div { class: "profile",
            PageHeader { title: "Profile" }

            Card {
                CardHeader {
                    div { class: "profile-identity",
                        div { class: "profile-avatar", "{initials(profile.name)}" }
                        div {
                            CardTitle { "{profile.name}" }
                            p { class: "profile-role", "{profile.role}" }
                        }
                    }
                }
                CardContent {
                    DetailList {
                        DetailItem { label: "Email", value: profile.email.to_string() }
                        DetailItem { label: "Region", value: profile.region.to_string() }
                        DetailItem { label: "Assigned orders", value: orders.len().to_string() }
                        DetailItem { label: "Completed", value: completed.to_string() }
                    }
                }
            }
        }
    }
}
