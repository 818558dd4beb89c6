use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use shared_types::{
    DeliveryBackend, DeliveryStatus, GeocodingConfig, OrderId, OrderRecord, Photo, Signature,
    UploadOutcome,
};
use std::cell::RefCell;

/// Address the mock geocoder answers with a single Cupertino candidate.
pub const KNOWN_ADDRESS: &str = "1 Infinite Loop, Cupertino, CA";
/// Query that makes the mock answer 500.
pub const FAILING_ADDRESS: &str = "boom";
/// Query that makes the mock answer 200 with a non-JSON body.
pub const GARBAGE_ADDRESS: &str = "garbage";

/// One request as seen by the mock geocoder.
#[derive(Debug, Clone, PartialEq)]
pub struct SeenRequest {
    pub q: Option<String>,
    pub format: Option<String>,
    pub user_agent: Option<String>,
}

pub type Seen = Arc<Mutex<Vec<SeenRequest>>>;

async fn search(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let q = params.get("q").cloned();
    seen.lock().unwrap().push(SeenRequest {
        q: q.clone(),
        format: params.get("format").cloned(),
        user_agent: headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    match q.as_deref().unwrap_or_default() {
        FAILING_ADDRESS => (StatusCode::INTERNAL_SERVER_ERROR, "upstream down").into_response(),
        GARBAGE_ADDRESS => (StatusCode::OK, "<html>rate limited</html>").into_response(),
        q if q.contains("Cupertino") => Json(serde_json::json!([
            {
                "lat": "37.3318598",
                "lon": "-122.0302485",
                "display_name": "Apple Infinite Loop, Cupertino, California"
            },
            { "lat": "0", "lon": "0" }
        ]))
        .into_response(),
        _ => Json(serde_json::json!([])).into_response(),
    }
}

/// Start the mock geocoder on an ephemeral port.
///
/// Returns the search endpoint URL and the log of received requests.
pub async fn spawn_geocoder() -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/search", get(search))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock geocoder");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock geocoder");
    });

    (format!("http://{}/search", addr), seen)
}

/// An endpoint on a port nothing listens on.
pub async fn dead_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}/search", addr)
}

pub fn geocoding_config(endpoint: String) -> GeocodingConfig {
    GeocodingConfig {
        endpoint,
        user_agent: "horizon-tests/0.1".to_string(),
    }
}

pub fn order(id: u64, status: DeliveryStatus, customer: &str, distance_km: f64) -> OrderRecord {
    OrderRecord {
        order_id: OrderId::Number(id),
        status,
        customer_name: customer.to_string(),
        address: format!("{} Queen St W, Toronto, ON", id),
        distance_km,
        instructions: None,
        driver: None,
    }
}

pub fn photo(name: &str) -> UploadOutcome {
    UploadOutcome::Success {
        name: name.to_string(),
        display_url: format!("data:image/png;base64,{}", name),
    }
}

pub fn rejected(name: &str) -> UploadOutcome {
    UploadOutcome::Failure {
        name: name.to_string(),
        reason: "not an image".to_string(),
    }
}

/// Backend call as recorded by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Status(OrderId, DeliveryStatus),
    Photos(OrderId, Vec<String>),
    Signature(OrderId),
}

/// Backend that keeps every call for later assertions.
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: RefCell<Vec<BackendCall>>,
}

impl DeliveryBackend for RecordingBackend {
    fn report_status_change(&self, order_id: &OrderId, status: DeliveryStatus) {
        self.calls
            .borrow_mut()
            .push(BackendCall::Status(order_id.clone(), status));
    }

    fn persist_photos(&self, order_id: &OrderId, photos: &[Photo]) {
        self.calls.borrow_mut().push(BackendCall::Photos(
            order_id.clone(),
            photos.iter().map(|p| p.name.clone()).collect(),
        ));
    }

    fn persist_signature(&self, order_id: &OrderId, _signature: &Signature) {
        self.calls
            .borrow_mut()
            .push(BackendCall::Signature(order_id.clone()));
    }
}
