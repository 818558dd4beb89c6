//! Address resolution model: the lookup URL, interpretation of the service
//! response, and the guard that keeps superseded lookups from overwriting
//! newer results.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Shown when the service answers with zero candidates.
pub const ADDRESS_NOT_FOUND: &str = "Address not found";

/// Shown for any transport or parse failure.
pub const FETCH_ERROR: &str = "Error fetching location";

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// What the map widget displays.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoState {
    Loading,
    Ready(GeoPoint),
    Error(String),
}

impl GeoState {
    pub fn point(&self) -> Option<GeoPoint> {
        match self {
            GeoState::Ready(p) => Some(*p),
            _ => None,
        }
    }
}

/// One search candidate. The service sends coordinates as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeCandidate {
    pub lat: String,
    pub lon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl GeocodeCandidate {
    pub fn to_point(&self) -> Result<GeoPoint, AppError> {
        let lat = self.lat.trim().parse::<f64>();
        let lon = self.lon.trim().parse::<f64>();
        match (lat, lon) {
            (Ok(lat), Ok(lon)) => {
                let point = GeoPoint { lat, lon };
                if point.is_valid() {
                    Ok(point)
                } else {
                    Err(AppError::geocoding(format!(
                        "coordinates out of range: {lat}, {lon}"
                    )))
                }
            }
            _ => Err(AppError::geocoding(format!(
                "unparseable coordinates: {:?}, {:?}",
                self.lat, self.lon
            ))),
        }
    }
}

/// Interpret a successful response body. Only the first candidate counts.
///
/// `Ok(None)` means the address resolved to nothing.
pub fn first_point(candidates: &[GeocodeCandidate]) -> Result<Option<GeoPoint>, AppError> {
    match candidates.first() {
        Some(candidate) => candidate.to_point().map(Some),
        None => Ok(None),
    }
}

/// Map the outcome of a lookup onto what the widget shows.
///
/// Failures never fall back to default coordinates.
pub fn state_from_lookup(result: Result<Option<GeoPoint>, AppError>) -> GeoState {
    match result {
        Ok(Some(point)) => GeoState::Ready(point),
        Ok(None) => GeoState::Error(ADDRESS_NOT_FOUND.to_string()),
        Err(_) => GeoState::Error(FETCH_ERROR.to_string()),
    }
}

/// Forward-search URL for `address`.
pub fn search_url(endpoint: &str, address: &str) -> String {
    format!(
        "{}?format=json&q={}",
        endpoint.trim_end_matches('?'),
        urlencoding::encode(address)
    )
}

/// OpenStreetMap embed URL showing the area around `center`, no marker.
///
/// The bounding box spans roughly one map tile at `zoom`.
pub fn area_url(center: GeoPoint, zoom: u8) -> String {
    let lon_span = 360.0 / f64::from(1u32 << zoom.min(19));
    let lat_span = lon_span * center.lat.to_radians().cos().abs().max(0.01);
    let (west, east) = (center.lon - lon_span / 2.0, center.lon + lon_span / 2.0);
    let (south, north) = (center.lat - lat_span / 2.0, center.lat + lat_span / 2.0);
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={west:.6},{south:.6},{east:.6},{north:.6}&layer=mapnik"
    )
}

/// Embed URL centred on `point` with a single marker on it.
pub fn embed_url(point: GeoPoint, zoom: u8) -> String {
    format!(
        "{}&marker={:.6},{:.6}",
        area_url(point, zoom),
        point.lat,
        point.lon
    )
}

/// Monotonic ticket handed to each lookup so only the latest may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Generation counter guarding asynchronous lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveGeneration {
    current: u64,
}

impl ResolveGeneration {
    /// Start a new lookup, superseding every earlier ticket.
    pub fn next(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}
