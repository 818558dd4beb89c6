use shared_types::{AppErrorKind, GeoState, GeocodeClient, ADDRESS_NOT_FOUND, FETCH_ERROR};

use crate::common::{
    dead_endpoint, geocoding_config, spawn_geocoder, FAILING_ADDRESS, GARBAGE_ADDRESS,
    KNOWN_ADDRESS,
};

#[tokio::test]
async fn known_address_resolves_to_first_candidate() {
    let (endpoint, _seen) = spawn_geocoder().await;
    let client = GeocodeClient::new(&geocoding_config(endpoint));

    let state = client.resolve(KNOWN_ADDRESS).await;
    let point = state.point().expect("resolved");
    assert!((point.lat - 37.33).abs() < 0.5, "lat was {}", point.lat);
    assert!((point.lon + 122.03).abs() < 0.5, "lon was {}", point.lon);
}

#[tokio::test]
async fn zero_candidates_is_address_not_found() {
    let (endpoint, _seen) = spawn_geocoder().await;
    let client = GeocodeClient::new(&geocoding_config(endpoint));

    assert_eq!(client.lookup("Nowhere Lane 0").await, Ok(None));
    assert_eq!(
        client.resolve("Nowhere Lane 0").await,
        GeoState::Error(ADDRESS_NOT_FOUND.to_string())
    );
}

#[tokio::test]
async fn server_error_is_fetch_error() {
    let (endpoint, _seen) = spawn_geocoder().await;
    let client = GeocodeClient::new(&geocoding_config(endpoint));

    let err = client.lookup(FAILING_ADDRESS).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Geocoding);
    assert!(err.message.contains("500"), "message was {}", err.message);
    assert_eq!(
        client.resolve(FAILING_ADDRESS).await,
        GeoState::Error(FETCH_ERROR.to_string())
    );
}

#[tokio::test]
async fn malformed_body_is_fetch_error() {
    let (endpoint, _seen) = spawn_geocoder().await;
    let client = GeocodeClient::new(&geocoding_config(endpoint));

    assert_eq!(
        client.resolve(GARBAGE_ADDRESS).await,
        GeoState::Error(FETCH_ERROR.to_string())
    );
}

#[tokio::test]
async fn unreachable_service_is_fetch_error() {
    let client = GeocodeClient::new(&geocoding_config(dead_endpoint().await));

    assert_eq!(
        client.resolve(KNOWN_ADDRESS).await,
        GeoState::Error(FETCH_ERROR.to_string())
    );
}

#[tokio::test]
async fn request_carries_address_format_and_user_agent() {
    let (endpoint, seen) = spawn_geocoder().await;
    let client = GeocodeClient::new(&geocoding_config(endpoint));

    client.resolve("84 Nipigon Ave, Toronto, ON").await;

    let requests = seen.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].q.as_deref(), Some("84 Nipigon Ave, Toronto, ON"));
    assert_eq!(requests[0].format.as_deref(), Some("json"));
    assert_eq!(requests[0].user_agent.as_deref(), Some("horizon-tests/0.1"));
}
