//! Display formatting for order data.

use shared_types::OrderId;

/// "4.2 km", trimming a trailing ".0".
pub fn format_distance(km: f64) -> String {
    let rounded = (km * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{} km", rounded as u64)
    } else {
        format!("{rounded:.1} km")
    }
}

/// "17 min" or "1 h 5 min".
pub fn format_eta(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}

pub fn order_title(id: &OrderId) -> String {
    format!("Order #{id}")
}

/// Up to two uppercase initials, e.g. "Ana Souza" -> "AS".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}
