use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMapPin, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{daily_orders, tomorrow_orders, OrderRecord};
use shared_ui::{
    Badge, BadgeTone, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardFooter, CardGrid, CardHeader, CardMedia, CardTitle, EmptyState, PageHeader,
};

use crate::components::map_widget::MapWidget;
use crate::components::order_workflow::OrderWorkflowDialog;
use crate::format_helpers::order_title;
use crate::routes::load_catalog;

/// Fleet overview: today's and tomorrow's orders as map cards.
#[component]
pub fn Marketplace() -> Element {
    let daily = use_hook(|| load_catalog("daily", daily_orders));
    let tomorrow = use_hook(|| load_catalog("tomorrow", tomorrow_orders));
    let mut selected = use_signal(|| None::<OrderRecord>);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./marketplace.css") }
        div { class: "marketplace",
            PageHeader {
                title: "Orders",
                subtitle: "Deliveries scheduled across the fleet".to_string(),
            }

            OrderSection {
                title: "Daily Orders",
                orders: daily,
                on_details: move |order| selected.set(Some(order)),
            }
            OrderSection {
                title: "Tomorrow's orders",
                orders: tomorrow,
                on_details: move |order| selected.set(Some(order)),
            }
        }

        OrderWorkflowDialog {
            order: selected(),
            on_close: move |_| selected.set(None),
        }
    }
}

#[component]
fn OrderSection(
    title: String,
    orders: Result<Vec<OrderRecord>, String>,
    on_details: EventHandler<OrderRecord>,
) -> Element {
    rsx! {
        section { class: "marketplace-section",
            h2 { class: "marketplace-section-title", "{title}" }
            match orders {
                Err(message) => rsx! {
                    EmptyState { message: message }
                },
                Ok(orders) if orders.is_empty() => rsx! {
                    EmptyState { message: "Nothing scheduled." }
                },
                Ok(orders) => rsx! {
                    CardGrid {
                        for order in orders {
                            OrderCard {
                                key: "{order.order_id}",
                                order: order,
                                on_details: on_details,
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn OrderCard(order: OrderRecord, on_details: EventHandler<OrderRecord>) -> Element {
    let tone = BadgeTone::from_color(order.status.color().as_str());
    let driver = order.driver.clone().unwrap_or_else(|| "Unassigned".to_string());
    let km = format!("{:.1}", order.distance_km);

    rsx! {
        Card { class: "order-card",
            CardMedia {
                MapWidget { address: order.address.clone(), compact: true }
            }
            CardHeader {
                div { class: "order-card-heading",
                    CardTitle { "{order_title(&order.order_id)}" }
                    Badge { tone: tone, "{order.status.label()}" }
                }
                CardDescription {
                    span { class: "order-card-driver",
                        Icon::<LdUser> { icon: LdUser, width: 14, height: 14 }
                        "{driver}"
                    }
                }
            }
            CardContent {
                p { class: "order-card-address",
                    Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                    "{order.address}"
                }
                p { class: "order-card-distance", "{km} kilometers to go" }
            }
            CardFooter {
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    onclick: {
                        let order = order.clone();
                        move |_| on_details.call(order.clone())
                    },
                    "Details"
                }
            }
        }
    }
}
