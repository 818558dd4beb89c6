use crate::error::AppError;
use crate::feature_flags::GeocodingConfig;
use crate::geocode::{first_point, search_url, state_from_lookup, GeoPoint, GeoState, GeocodeCandidate};

/// HTTP client for the public forward-geocoding service.
///
/// One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    endpoint: String,
    user_agent: String,
}

impl GeocodeClient {
    pub fn new(config: &GeocodingConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Look up `address`, returning the first candidate's coordinates.
    #[tracing::instrument(skip(self))]
    pub async fn lookup(&self, address: &str) -> Result<Option<GeoPoint>, AppError> {
        let url = search_url(&self.endpoint, address);
        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .send()
            .await
            .map_err(|e| AppError::geocoding(format!("Geocoding request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::geocoding(format!(
                "Geocoding service error ({}): {}",
                status, body
            )));
        }

        let candidates: Vec<GeocodeCandidate> = response
            .json()
            .await
            .map_err(|e| AppError::geocoding(format!("Invalid geocoding response: {}", e)))?;

        tracing::debug!(candidates = candidates.len(), "Geocoding lookup finished");
        first_point(&candidates)
    }

    /// Resolve `address` straight to the widget state. Failures are logged
    /// and surfaced only as the generic fetch error.
    pub async fn resolve(&self, address: &str) -> GeoState {
        let result = self.lookup(address).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, address = address, "Geocoding error");
        }
        state_from_lookup(result)
    }
}
