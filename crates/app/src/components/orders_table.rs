use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdEye;
use dioxus_free_icons::Icon;
use shared_types::{OrderColumn, OrderRecord, SortDirection, SortState, ALL_COLUMNS};
use shared_ui::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, DataTableSortColumn, SortIndicator,
};

fn indicator(sort: SortState, column: OrderColumn) -> SortIndicator {
    match sort.direction_of(column) {
        Some(SortDirection::Ascending) => SortIndicator::Ascending,
        Some(SortDirection::Descending) => SortIndicator::Descending,
        None => SortIndicator::Unsorted,
    }
}

/// Sortable table of orders showing the first page of the current sort.
///
/// The action button raises `on_view` and does nothing else.
#[component]
pub fn OrdersTable(orders: Vec<OrderRecord>, on_view: EventHandler<OrderRecord>) -> Element {
    let mut sort = use_signal(SortState::unsorted);
    let current = sort();
    let rows: Vec<OrderRecord> = current
        .visible_rows(&orders)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./orders_table.css") }
        DataTable {
            DataTableHeader {
                for column in ALL_COLUMNS.iter().copied() {
                    if column.is_sortable() {
                        DataTableSortColumn {
                            key: "{column.header()}",
                            label: column.header(),
                            indicator: indicator(current, column),
                            on_toggle: move |_| sort.set(sort().toggle(column)),
                        }
                    } else {
                        DataTableColumn { key: "{column.header()}", "{column.header()}" }
                    }
                }
            }
            DataTableBody {
                if rows.is_empty() {
                    DataTableEmpty { colspan: ALL_COLUMNS.len(), "No orders assigned." }
                }
                for order in rows {
                    DataTableRow { key: "{order.order_id}",
                        DataTableCell {
                            button {
                                class: "orders-view",
                                r#type: "button",
                                title: "View order",
                                "aria-label": "View order {order.order_id}",
                                onclick: {
                                    let order = order.clone();
                                    move |_| on_view.call(order.clone())
                                },
                                Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                            }
                        }
                        DataTableCell { span { class: "orders-id", "#{order.order_id}" } }
                        DataTableCell {
                            span { class: "status-pill",
                                span { class: "status-dot", "data-color": order.status.color().as_str() }
                                "{order.status.label()}"
                            }
                        }
                        DataTableCell { "{order.customer_name}" }
                        DataTableCell { span { class: "orders-address", "{order.address}" } }
                        DataTableCell { "{order.distance_km:.1}" }
                    }
                }
            }
        }
    }
}
