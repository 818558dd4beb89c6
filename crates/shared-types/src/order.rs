use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::AppError;

// ── Delivery status ─────────────────────────────────────────────────

/// Delivery status of an order.
///
/// Ordered so that `Pending < InProgress < Completed`; the workflow only
/// ever moves forward along that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum DeliveryStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// All statuses in workflow order.
pub const ALL_STATUSES: &[DeliveryStatus] = &[
    DeliveryStatus::Pending,
    DeliveryStatus::InProgress,
    DeliveryStatus::Completed,
];

/// Colour of the status dot rendered in the orders table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Green,
    Yellow,
    Red,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Green => "green",
            StatusColor::Yellow => "yellow",
            StatusColor::Red => "red",
        }
    }
}

impl DeliveryStatus {
    /// Human label, matching the strings in the bundled order data.
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::InProgress => "In Progress",
            DeliveryStatus::Completed => "Completed",
        }
    }

    /// Lenient parse of stored status text.
    ///
    /// Anything that is not recognisably in-progress or completed is treated
    /// as pending, which is also where a fresh order starts.
    pub fn from_str_or_default(s: &str) -> Self {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "inprogress" => DeliveryStatus::InProgress,
            "completed" => DeliveryStatus::Completed,
            _ => DeliveryStatus::Pending,
        }
    }

    pub fn color(&self) -> StatusColor {
        match self {
            DeliveryStatus::Completed => StatusColor::Green,
            DeliveryStatus::InProgress => StatusColor::Yellow,
            DeliveryStatus::Pending => StatusColor::Red,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DeliveryStatus::Completed)
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for DeliveryStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for DeliveryStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(DeliveryStatus::from_str_or_default(&raw))
    }
}

// ── Order id ────────────────────────────────────────────────────────

/// Order identifier. Bundled data uses both numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Number(u64),
    Text(String),
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderId::Number(n) => write!(f, "{}", n),
            OrderId::Text(s) => f.write_str(s),
        }
    }
}

impl PartialOrd for OrderId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderId {
    /// Numbers sort numerically and before text ids.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (OrderId::Number(a), OrderId::Number(b)) => a.cmp(b),
            (OrderId::Number(_), OrderId::Text(_)) => Ordering::Less,
            (OrderId::Text(_), OrderId::Number(_)) => Ordering::Greater,
            (OrderId::Text(a), OrderId::Text(b)) => a.cmp(b),
        }
    }
}

// ── Order record ────────────────────────────────────────────────────

/// A static description of one delivery job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "order")]
    pub order_id: OrderId,
    #[serde(default)]
    pub status: DeliveryStatus,
    #[serde(rename = "customer", deserialize_with = "customer_name")]
    pub customer_name: String,
    pub address: String,
    #[serde(rename = "distance", deserialize_with = "distance_km")]
    pub distance_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Driver assigned to the order, shown on the admin order cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
}

/// Fallback text when an order carries no instructions.
pub const NO_INSTRUCTIONS: &str = "No special instructions for this delivery.";

impl OrderRecord {
    /// Instructions text, falling back to the standard placeholder.
    pub fn instructions_or_default(&self) -> &str {
        match self.instructions.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => NO_INSTRUCTIONS,
        }
    }

    /// Rough delivery estimate: three minutes per whole kilometre plus five.
    /// Saturates at `u32::MAX` for absurd distances.
    pub fn estimated_minutes(&self) -> u32 {
        let km = self.distance_km.max(0.0).floor().min(u32::MAX as f64) as u32;
        km.saturating_mul(3).saturating_add(5)
    }
}

/// Bundled data stores the customer either as a plain name or as a
/// `[name, avatar]` pair; only the name is kept.
fn customer_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Customer {
        Name(String),
        List(Vec<String>),
    }

    match Customer::deserialize(deserializer)? {
        Customer::Name(name) => Ok(name),
        Customer::List(parts) => parts
            .into_iter()
            .next()
            .ok_or_else(|| serde::de::Error::custom("customer list is empty")),
    }
}

/// Distances arrive as numbers or numeric strings and must be non-negative.
fn distance_km<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Distance {
        Number(f64),
        Text(String),
    }

    let value = match Distance::deserialize(deserializer)? {
        Distance::Number(n) => n,
        Distance::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid distance: {s}")))?,
    };
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom(format!(
            "distance must be a non-negative number, got {value}"
        )))
    }
}

// ── Bundled catalogs ────────────────────────────────────────────────

const DRIVER_ORDERS_JSON: &str = include_str!("../data/driver_orders.json");
const DAILY_ORDERS_JSON: &str = include_str!("../data/daily_orders.json");
const TOMORROW_ORDERS_JSON: &str = include_str!("../data/tomorrow_orders.json");

/// Parse an ordered list of orders from JSON.
pub fn parse_orders(json: &str) -> Result<Vec<OrderRecord>, AppError> {
    Ok(serde_json::from_str(json)?)
}

/// Orders assigned to the signed-in driver.
pub fn driver_orders() -> Result<Vec<OrderRecord>, AppError> {
    parse_orders(DRIVER_ORDERS_JSON)
}

/// Orders scheduled for today, shown on the admin orders page.
pub fn daily_orders() -> Result<Vec<OrderRecord>, AppError> {
    parse_orders(DAILY_ORDERS_JSON)
}

/// Orders scheduled for tomorrow, shown on the admin orders page.
pub fn tomorrow_orders() -> Result<Vec<OrderRecord>, AppError> {
    parse_orders(TOMORROW_ORDERS_JSON)
}
