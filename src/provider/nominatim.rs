//! Nominatim geocoding backend.
//!
//! Queries the OpenStreetMap Nominatim search API and decodes its JSON place
//! list. This is the provider the engine ships with; hosts pointing at a
//! self-hosted Nominatim instance (or a test server) can override the base
//! URL with [`NominatimProvider::with_base_url`].

use crate::domain::Place;
use crate::provider::{ProviderError, SuggestionProvider};
use async_trait::async_trait;

/// Public Nominatim instance operated by the OpenStreetMap foundation.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// User agent sent with every request, as the Nominatim usage policy asks
/// applications to identify themselves.
const USER_AGENT: &str = "searchbox/0.1";

/// Suggestion provider backed by the Nominatim search API.
pub struct NominatimProvider {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimProvider {
    /// Creates a provider against the public Nominatim instance.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a provider against a custom Nominatim instance.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .expect("failed to build reqwest client");

        Self {
            client,
            base_url: base_url.to_string(),
        }
    }
}

impl Default for NominatimProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SuggestionProvider for NominatimProvider {
    async fn fetch(&self, query: &str) -> Result<Vec<Place>, ProviderError> {
        // The engine hands the query over already normalized, with spaces
        // collapsed to the `+` separator, so it is interpolated as-is.
        let url = format!("{}/search?format=json&q={}", self.base_url, query);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status { status });
        }

        let body = response.text().await?;
        let places = serde_json::from_str(&body)?;
        Ok(places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_decodes_place_list() {
        let mut server = Server::new_async().await;

        let _m = server
            .mock("GET", "/search?format=json&q=paris")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {
                        "place_id": 88025164,
                        "licence": "Data © OpenStreetMap contributors, ODbL 1.0.",
                        "osm_type": "relation",
                        "osm_id": 71525,
                        "boundingbox": ["48.8155755", "48.902156", "2.224122", "2.4697602"],
                        "lat": "48.8566969",
                        "lon": "2.3514616",
                        "display_name": "Paris, Ile-de-France, Metropolitan France, France",
                        "class": "boundary",
                        "type": "administrative",
                        "importance": 0.9654895765402
                    },
                    {
                        "place_id": 116271,
                        "display_name": "Paris, Lamar County, Texas, United States"
                    }
                ]"#,
            )
            .create_async()
            .await;

        let provider = NominatimProvider::with_base_url(&server.url());
        let places = provider.fetch("paris").await.unwrap();

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].place_id, 88025164);
        assert_eq!(places[0].kind.as_deref(), Some("administrative"));
        assert_eq!(places[0].boundingbox.len(), 4);
        assert_eq!(
            places[1].display_name,
            "Paris, Lamar County, Texas, United States"
        );
    }

    #[tokio::test]
    async fn fetch_sends_plus_separated_query() {
        let mut server = Server::new_async().await;

        let _m = server
            .mock("GET", "/search?format=json&q=new+york")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"place_id": 1, "display_name": "New York, United States"}]"#)
            .create_async()
            .await;

        let provider = NominatimProvider::with_base_url(&server.url());
        let places = provider.fetch("new+york").await.unwrap();

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].display_name, "New York, United States");
    }

    #[tokio::test]
    async fn fetch_rejects_error_status() {
        let mut server = Server::new_async().await;

        let _m = server
            .mock("GET", "/search?format=json&q=paris")
            .with_status(503)
            .create_async()
            .await;

        let provider = NominatimProvider::with_base_url(&server.url());
        let err = provider.fetch("paris").await.unwrap_err();

        assert!(matches!(
            err,
            ProviderError::Status { status } if status.as_u16() == 503
        ));
    }

    #[tokio::test]
    async fn fetch_rejects_malformed_body() {
        let mut server = Server::new_async().await;

        let _m = server
            .mock("GET", "/search?format=json&q=paris")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let provider = NominatimProvider::with_base_url(&server.url());
        let err = provider.fetch("paris").await.unwrap_err();

        assert!(matches!(err, ProviderError::Decode(_)));
    }
}
