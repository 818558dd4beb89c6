use dioxus::prelude::*;
use shared_types::{driver_orders, DeliveryStatus, OrderRecord, ALL_STATUSES};
use shared_ui::{Badge, BadgeTone, EmptyState, PageHeader};

use crate::components::order_workflow::OrderWorkflowDialog;
use crate::components::orders_table::OrdersTable;
use crate::routes::load_catalog;

fn count_by_status(orders: &[OrderRecord], status: DeliveryStatus) -> usize {
    orders.iter().filter(|o| o.status == status).count()
}

/// Driver's assigned orders with the delivery workflow behind each row.
#[component]
pub fn DriverDashboard() -> Element {
    let orders = use_hook(|| load_catalog("driver", driver_orders));
    let mut selected = use_signal(|| None::<OrderRecord>);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./driver_dashboard.css") }
        div { class: "driver-dashboard",
            PageHeader {
                title: "My Orders",
                subtitle: "Open an order to start or finish the delivery".to_string(),
                if let Ok(list) = &orders {
                    div { class: "status-summary",
                        for status in ALL_STATUSES.iter().copied() {
                            Badge {
                                key: "{status.label()}",
                                tone: BadgeTone::from_color(status.color().as_str()),
                                "{status.label()}: {count_by_status(list, status)}"
                            }
                        }
                    }
                }
            }

            match orders.clone() {
                Ok(list) => rsx! {
                    OrdersTable {
                        orders: list,
                        on_view: move |order| selected.set(Some(order)),
                    }
                },
                Err(message) => rsx! {
                    EmptyState { message: message }
                },
            }
        }

        OrderWorkflowDialog {
            order: selected(),
            on_close: move |_| selected.set(None),
        }
    }
}
