use pretty_assertions::assert_eq;
use shared_types::{
    driver_orders, DeliveryStatus, OrderColumn, OrderId, OrderRecord, SortDirection, SortState,
    PAGE_SIZE,
};

use crate::common::order;

fn ids(rows: &[&OrderRecord]) -> Vec<u64> {
    rows.iter()
        .map(|o| match o.order_id {
            OrderId::Number(n) => n,
            OrderId::Text(_) => panic!("unexpected text id"),
        })
        .collect()
}

#[test]
fn unsorted_table_shows_first_page_in_input_order() {
    let orders = driver_orders().expect("bundled orders");
    assert!(orders.len() > PAGE_SIZE);

    let rows = SortState::unsorted().visible_rows(&orders);
    assert_eq!(rows.len(), PAGE_SIZE);
    assert_eq!(ids(&rows), (1001..=1010).collect::<Vec<_>>());
}

#[test]
fn distance_sort_orders_whole_set_before_paging() {
    let orders = driver_orders().expect("bundled orders");

    let asc = SortState::by(OrderColumn::Distance, SortDirection::Ascending).visible_rows(&orders);
    assert_eq!(ids(&asc)[0], 1009);
    assert!(asc.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));

    let desc = SortState::by(OrderColumn::Distance, SortDirection::Descending).visible_rows(&orders);
    assert_eq!(ids(&desc)[0], 1003);
    assert!(desc.windows(2).all(|w| w[0].distance_km >= w[1].distance_km));
}

#[test]
fn status_sort_is_stable_in_both_directions() {
    let orders = vec![
        order(1, DeliveryStatus::Completed, "A", 1.0),
        order(2, DeliveryStatus::Pending, "B", 1.0),
        order(3, DeliveryStatus::Completed, "C", 1.0),
        order(4, DeliveryStatus::Pending, "D", 1.0),
        order(5, DeliveryStatus::InProgress, "E", 1.0),
    ];

    let asc = SortState::by(OrderColumn::Status, SortDirection::Ascending).apply(&orders);
    assert_eq!(ids(&asc), vec![2, 4, 5, 1, 3]);

    let desc = SortState::by(OrderColumn::Status, SortDirection::Descending).apply(&orders);
    assert_eq!(ids(&desc), vec![1, 3, 5, 2, 4]);
}

#[test]
fn customer_sort_ignores_case() {
    let orders = vec![
        order(1, DeliveryStatus::Pending, "bruno", 1.0),
        order(2, DeliveryStatus::Pending, "Ana", 1.0),
        order(3, DeliveryStatus::Pending, "Carla", 1.0),
    ];
    let rows = SortState::by(OrderColumn::Customer, SortDirection::Ascending).apply(&orders);
    assert_eq!(ids(&rows), vec![2, 1, 3]);
}

#[test]
fn sorting_does_not_touch_input() {
    let orders = driver_orders().expect("bundled orders");
    let before = orders.clone();
    let _ = SortState::by(OrderColumn::Customer, SortDirection::Descending).apply(&orders);
    assert_eq!(orders, before);
}

#[test]
fn header_clicks_cycle_through_sorts() {
    let s = SortState::unsorted().toggle(OrderColumn::Distance);
    assert_eq!(s.direction_of(OrderColumn::Distance), Some(SortDirection::Ascending));
    let s = s.toggle(OrderColumn::Distance);
    assert_eq!(s.direction_of(OrderColumn::Distance), Some(SortDirection::Descending));
    let s = s.toggle(OrderColumn::Distance);
    assert_eq!(s, SortState::unsorted());

    let s = SortState::by(OrderColumn::Status, SortDirection::Descending).toggle(OrderColumn::OrderId);
    assert_eq!(s, SortState::by(OrderColumn::OrderId, SortDirection::Ascending));

    assert_eq!(s.toggle(OrderColumn::Action), s);
}

#[test]
fn short_lists_show_every_row() {
    let orders = vec![order(1, DeliveryStatus::Pending, "A", 3.0)];
    assert_eq!(SortState::unsorted().visible_rows(&orders).len(), 1);
    assert!(SortState::unsorted().visible_rows(&[]).is_empty());
}
