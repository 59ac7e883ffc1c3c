//! Heroes REST API Client
//!
//! HTTP backend for the heroes endpoint contract.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::backend::{BackendError, BackendResult, HeroBackend};
use crate::hero::{Hero, HeroId, NewHero};

/// Configuration for the HTTP backend
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Base URL of the API (e.g., "http://localhost:8082/api")
    pub base_url: String,
    /// Optional request timeout in milliseconds. None waits indefinitely.
    pub request_timeout_ms: Option<u64>,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8082/api".to_string(),
            request_timeout_ms: None,
        }
    }
}

/// Heroes REST API client
pub struct HttpBackend {
    client: Client,
    config: HttpBackendConfig,
}

impl HttpBackend {
    /// Create a new HTTP backend with the given configuration
    pub fn new(config: HttpBackendConfig) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build()?;

        let config = HttpBackendConfig {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            ..config
        };

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &HttpBackendConfig {
        &self.config
    }

    /// Collection URL: `{base}/heroes`
    pub fn heroes_url(&self) -> String {
        format!("{}/heroes", self.config.base_url)
    }

    /// Entity URL: `{base}/heroes/{id}`
    pub fn hero_url(&self, id: HeroId) -> String {
        format!("{}/heroes/{}", self.config.base_url, id)
    }

    /// Filtered collection URL: `{base}/heroes?name={term}`
    pub fn search_url(&self, term: &str) -> String {
        format!("{}?name={}", self.heroes_url(), urlencoding::encode(term))
    }

    /// Map a non-success response into an API error, preferring the
    /// server's error message when the body carries one
    async fn error_from_response(response: Response) -> BackendError {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorEnvelope>(&text)
            .map(|envelope| envelope.error.message)
            .unwrap_or(text);

        BackendError::Api { status, message }
    }

    async fn expect_json<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
        if response.status().is_success() {
            response.json().await.map_err(BackendError::Request)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn expect_success(response: Response) -> BackendResult<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}

#[async_trait]
impl HeroBackend for HttpBackend {
    async fn list(&self) -> BackendResult<Vec<Hero>> {
        let response = self
            .client
            .get(self.heroes_url())
            .send()
            .await
            .map_err(BackendError::from_transport)?;

        Self::expect_json(response).await
    }

    async fn get(&self, id: HeroId) -> BackendResult<Hero> {
        let response = self
            .client
            .get(self.hero_url(id))
            .send()
            .await
            .map_err(BackendError::from_transport)?;

        Self::expect_json(response).await
    }

    async fn search(&self, term: &str) -> BackendResult<Vec<Hero>> {
        let response = self
            .client
            .get(self.search_url(term))
            .send()
            .await
            .map_err(BackendError::from_transport)?;

        Self::expect_json(response).await
    }

    async fn create(&self, hero: &NewHero) -> BackendResult<Hero> {
        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(self.heroes_url())
            .json(hero)
            .send()
            .await
            .map_err(BackendError::from_transport)?;

        Self::expect_json(response).await
    }

    async fn update(&self, hero: &Hero) -> BackendResult<()> {
        let response = self
            .client
            .put(self.heroes_url())
            .json(hero)
            .send()
            .await
            .map_err(BackendError::from_transport)?;

        Self::expect_success(response).await
    }

    async fn delete(&self, id: HeroId) -> BackendResult<()> {
        let response = self
            .client
            .delete(self.hero_url(id))
            .send()
            .await
            .map_err(BackendError::from_transport)?;

        Self::expect_success(response).await
    }
}

// ============================================
// Response DTOs
// ============================================

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{build_router, AppState};
    use crate::service::InMemoryBackend;
    use std::sync::Arc;

    fn backend(base_url: &str) -> HttpBackend {
        HttpBackend::new(HttpBackendConfig {
            base_url: base_url.to_string(),
            request_timeout_ms: Some(5_000),
        })
        .unwrap()
    }

    /// Serve the mock API on an ephemeral port and return its base URL
    async fn spawn_server() -> String {
        let store = Arc::new(InMemoryBackend::with_fixture());
        let router = build_router(AppState::new(store));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    #[test]
    fn test_default_config() {
        let config = HttpBackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:8082/api");
        assert!(config.request_timeout_ms.is_none());
    }

    #[test]
    fn test_urls() {
        let backend = backend("http://localhost:8082/api/");
        assert_eq!(backend.heroes_url(), "http://localhost:8082/api/heroes");
        assert_eq!(backend.hero_url(13), "http://localhost:8082/api/heroes/13");
        assert_eq!(
            backend.search_url("dr iq"),
            "http://localhost:8082/api/heroes?name=dr%20iq"
        );
    }

    #[tokio::test]
    async fn test_crud_against_mock_server() {
        let base = spawn_server().await;
        let backend = backend(&base);

        let heroes = backend.list().await.unwrap();
        assert_eq!(heroes.len(), crate::fixture::MOCK_HEROES.len());

        let windstorm = backend.get(1).await.unwrap();
        assert_eq!(windstorm, Hero::new(1, "Windstorm"));

        let created = backend.create(&NewHero::new("Zeta")).await.unwrap();
        assert_eq!(created, Hero::new(21, "Zeta"));

        backend.update(&Hero::new(21, "Zeta Prime")).await.unwrap();
        assert_eq!(backend.get(21).await.unwrap().name, "Zeta Prime");

        let found = backend.search("mag").await.unwrap();
        let names: Vec<_> = found.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Magneta", "Magma"]);

        backend.delete(21).await.unwrap();
        assert_eq!(backend.list().await.unwrap().len(), crate::fixture::MOCK_HEROES.len());
    }

    #[tokio::test]
    async fn test_missing_hero_is_api_error() {
        let base = spawn_server().await;
        let err = backend(&base).get(999).await.unwrap_err();

        match err {
            BackendError::Api { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("999"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Port 9 (discard) is not listening on loopback in test environments
        let err = backend("http://127.0.0.1:9/api").list().await.unwrap_err();
        assert!(matches!(
            err,
            BackendError::Unavailable | BackendError::Request(_)
        ));
    }
}
