use pretty_assertions::assert_eq;
use shared_types::{
    daily_orders, driver_orders, parse_orders, tomorrow_orders, DeliveryStatus, OrderId,
    StatusColor, NO_INSTRUCTIONS,
};

#[test]
fn bundled_catalogs_load() {
    assert_eq!(driver_orders().expect("driver").len(), 12);
    assert!(!daily_orders().expect("daily").is_empty());
    assert!(!tomorrow_orders().expect("tomorrow").is_empty());
}

#[test]
fn marketplace_orders_name_a_driver() {
    for order in daily_orders()
        .expect("daily")
        .into_iter()
        .chain(tomorrow_orders().expect("tomorrow"))
    {
        assert!(order.driver.is_some(), "order {} has no driver", order.order_id);
    }
}

#[test]
fn mixed_field_shapes_are_normalized() {
    let orders = parse_orders(
        r#"[
            { "order": 7, "status": "in progress", "customer": ["Ana", "a.png"], "address": "X", "distance": "3.5" },
            { "order": "A-1", "status": "Shipped", "customer": "Bo", "address": "Y", "distance": 2 }
        ]"#,
    )
    .expect("parses");

    assert_eq!(orders[0].order_id, OrderId::Number(7));
    assert_eq!(orders[0].status, DeliveryStatus::InProgress);
    assert_eq!(orders[0].customer_name, "Ana");
    assert_eq!(orders[0].distance_km, 3.5);
    assert_eq!(orders[1].order_id, OrderId::Text("A-1".to_string()));
    assert_eq!(orders[1].status, DeliveryStatus::Pending);
    assert_eq!(orders[1].instructions_or_default(), NO_INSTRUCTIONS);
}

#[test]
fn negative_distance_is_rejected() {
    let result = parse_orders(
        r#"[{ "order": 1, "status": "Pending", "customer": "A", "address": "X", "distance": -1 }]"#,
    );
    assert!(result.is_err());
}

#[test]
fn status_colours() {
    assert_eq!(DeliveryStatus::Completed.color(), StatusColor::Green);
    assert_eq!(DeliveryStatus::InProgress.color(), StatusColor::Yellow);
    assert_eq!(DeliveryStatus::Pending.color(), StatusColor::Red);
}
