//! Data access layer
//!
//! A class selection resolves to the class record plus the liquids in that
//! class. The data comes either from the embedded dataset or from a remote
//! liquid-class server speaking the JSON contract below.
//!
//! - `GET /api/liquid-class/{name}` returns a [`LiquidClass`], or 404
//! - `GET /api/liquids[?liquid_class={name}]` returns a [`LiquidRecord`] array
//! - `GET /api/liquid-classes` returns every class name, in server order

use crate::constants::*;
use crate::dataset::Dataset;
use crate::settings::{Settings, SourceKind};
use crate::types::{LiquidClass, LiquidRecord};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid server URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request superseded by a newer selection")]
    Cancelled,
}

/// Result of resolving one class selection
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    /// `None` when no class was requested or the class does not exist
    pub class: Option<LiquidClass>,
    pub liquids: Vec<LiquidRecord>,
}

/// HTTP client for a liquid-class server
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let invalid = |reason: String| FetchError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };
        let parsed = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) base URL".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("liquid-class-library/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            base_url: parsed,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Fetch a class by name. A 404 means the class does not exist.
    pub async fn liquid_class(&self, name: &str) -> Result<Option<LiquidClass>, FetchError> {
        let [api, resource] = LIQUID_CLASS_SEGMENTS;
        let url = self.endpoint(&[api, resource, name]);
        debug!(%url, "Fetching liquid class");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(class = name, "Liquid class not found on server");
            return Ok(None);
        }

        decode(check_status(response)?).await.map(Some)
    }

    /// Fetch liquids, filtered server-side when `class` is given
    pub async fn liquids(&self, class: Option<&str>) -> Result<Vec<LiquidRecord>, FetchError> {
        let url = self.endpoint(&LIQUIDS_SEGMENTS);
        debug!(%url, class = ?class, "Fetching liquids");

        let mut request = self.client.get(url.clone());
        if let Some(name) = class {
            request = request.query(&[(LIQUID_CLASS_QUERY, name)]);
        }

        let response = request.send().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

        decode(check_status(response)?).await
    }

    /// Names for the class selector
    pub async fn liquid_class_names(&self) -> Result<Vec<String>, FetchError> {
        let url = self.endpoint(&LIQUID_CLASSES_SEGMENTS);
        debug!(%url, "Fetching liquid class names");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        decode(check_status(response)?).await
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Status {
            url: response.url().to_string(),
            status,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
    let url = response.url().to_string();
    response.json::<T>().await.map_err(|source| {
        if source.is_decode() {
            FetchError::Decode { url, source }
        } else {
            FetchError::Transport { url, source }
        }
    })
}

/// Where class selections are resolved
#[derive(Clone)]
pub enum DataSource {
    Embedded(Arc<Dataset>),
    Remote(ApiClient),
}

impl DataSource {
    pub fn from_settings(settings: &Settings, dataset: Arc<Dataset>) -> Result<Self, FetchError> {
        match settings.source {
            SourceKind::Embedded => Ok(DataSource::Embedded(dataset)),
            SourceKind::Remote => ApiClient::new(
                &settings.api_base_url,
                Duration::from_secs(settings.request_timeout_secs.max(1)),
            )
            .map(DataSource::Remote),
        }
    }

    /// Short label for the status bar
    pub fn describe(&self) -> String {
        match self {
            DataSource::Embedded(_) => "Embedded dataset".to_string(),
            DataSource::Remote(api) => match api.base_url().host_str() {
                Some(host) => match api.base_url().port() {
                    Some(port) => format!("{}:{}", host, port),
                    None => host.to_string(),
                },
                None => api.base_url().to_string(),
            },
        }
    }

    /// Class names for the selector, in source order
    pub async fn class_names(&self) -> Result<Vec<String>, FetchError> {
        match self {
            DataSource::Embedded(dataset) => Ok(dataset.class_names()),
            DataSource::Remote(api) => api.liquid_class_names().await,
        }
    }

    /// Resolve a selection. Remote requests are issued one after another:
    /// class details first, then the filtered liquids.
    pub async fn load(&self, class: Option<&str>) -> Result<Loaded, FetchError> {
        match self {
            DataSource::Embedded(dataset) => Ok(Loaded {
                class: class.and_then(|name| dataset.find_class(name).cloned()),
                liquids: dataset.liquids_in_class(class),
            }),
            DataSource::Remote(api) => {
                let record = match class {
                    Some(name) => api.liquid_class(name).await?,
                    None => None,
                };
                let liquids = api.liquids(class).await?;
                Ok(Loaded {
                    class: record,
                    liquids,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    type Routes = dyn Fn(&str) -> (u16, String) + Send + Sync;

    /// Loopback HTTP server answering each request target via `routes`.
    /// Returns the base URL and the log of request targets.
    async fn serve(routes: Arc<Routes>) -> (String, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let routes = routes.clone();
                let log = log.clone();
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match stream.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }
                    let head = String::from_utf8_lossy(&buf);
                    let target = head.split_whitespace().nth(1).unwrap_or("/").to_string();
                    log.lock().unwrap().push(target.clone());

                    let (status, body) = routes(&target);
                    let response = format!(
                        "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        (format!("http://{}", addr), seen)
    }

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Duration::from_secs(5)).unwrap()
    }

    fn dataset() -> Arc<Dataset> {
        Arc::new(Dataset::builtin())
    }

    /// Serves the built-in dataset the way the reference server does
    fn dataset_routes() -> Arc<Routes> {
        let data = dataset();
        Arc::new(move |target: &str| -> (u16, String) {
            let class_prefix = "/api/liquid-class/";
            if let Some(name) = target.strip_prefix(class_prefix) {
                let name = name.replace("%20", " ");
                return match data.find_class(&name) {
                    Some(class) => (200, serde_json::to_string(class).unwrap()),
                    None => (404, r#"{"error":"Liquid class not found"}"#.to_string()),
                };
            }
            if target == "/api/liquid-classes" {
                return (200, serde_json::to_string(&data.class_names()).unwrap());
            }
            if let Some(rest) = target.strip_prefix("/api/liquids") {
                let filter = rest
                    .strip_prefix("?liquid_class=")
                    .map(|v| v.replace("%20", " ").replace('+', " "));
                let liquids = data.liquids_in_class(filter.as_deref());
                return (200, serde_json::to_string(&liquids).unwrap());
            }
            (404, "{}".to_string())
        })
    }

    #[tokio::test]
    async fn embedded_load_filters_and_looks_up() {
        let source = DataSource::Embedded(dataset());
        let loaded = source.load(Some("Organic-Low")).await.unwrap();
        assert_eq!(loaded.class.as_ref().map(|c| c.name.as_str()), Some("Organic-Low"));
        assert_eq!(loaded.liquids.len(), 7);

        let all = source.load(None).await.unwrap();
        assert!(all.class.is_none());
        assert_eq!(all.liquids.len(), 20);
    }

    #[tokio::test]
    async fn embedded_unknown_class_is_not_an_error() {
        let loaded = DataSource::Embedded(dataset()).load(Some("Cryogenic")).await.unwrap();
        assert!(loaded.class.is_none());
        assert!(loaded.liquids.is_empty());
    }

    #[tokio::test]
    async fn remote_load_matches_embedded_and_issues_class_then_liquids() {
        let (base, seen) = serve(dataset_routes()).await;
        let remote = DataSource::Remote(client(&base));
        let embedded = DataSource::Embedded(dataset());

        let from_server = remote.load(Some("Viscous")).await.unwrap();
        let from_memory = embedded.load(Some("Viscous")).await.unwrap();
        assert_eq!(from_server, from_memory);

        let targets = seen.lock().unwrap().clone();
        assert_eq!(
            targets,
            ["/api/liquid-class/Viscous", "/api/liquids?liquid_class=Viscous"]
        );
    }

    #[tokio::test]
    async fn remote_without_class_only_fetches_liquids() {
        let (base, seen) = serve(dataset_routes()).await;
        let loaded = DataSource::Remote(client(&base)).load(None).await.unwrap();
        assert_eq!(loaded.liquids.len(), 20);
        assert_eq!(seen.lock().unwrap().clone(), ["/api/liquids"]);
    }

    #[tokio::test]
    async fn class_names_are_percent_encoded() {
        let (base, seen) = serve(dataset_routes()).await;
        let api = client(&format!("{}/", base));
        assert!(api.liquid_class("Aqueous Buffer/x").await.unwrap().is_none());
        assert_eq!(seen.lock().unwrap()[0], "/api/liquid-class/Aqueous%20Buffer%2Fx");
    }

    #[tokio::test]
    async fn missing_class_maps_to_none() {
        let (base, _) = serve(dataset_routes()).await;
        let loaded = DataSource::Remote(client(&base)).load(Some("Cryogenic")).await.unwrap();
        assert!(loaded.class.is_none());
        assert!(loaded.liquids.is_empty());
    }

    #[tokio::test]
    async fn class_names_come_from_the_server() {
        let (base, seen) = serve(dataset_routes()).await;
        let names = client(&base).liquid_class_names().await.unwrap();
        assert_eq!(names, dataset().class_names());
        assert_eq!(*seen.lock().unwrap(), ["/api/liquid-classes"]);

        let extra: Arc<Routes> = Arc::new(|_: &str| -> (u16, String) {
            (200, r#"["Aqueous","Cryogenic"]"#.to_string())
        });
        let (base, _) = serve(extra).await;
        let names = client(&base).liquid_class_names().await.unwrap();
        assert_eq!(names, ["Aqueous", "Cryogenic"]);
    }

    #[tokio::test]
    async fn embedded_class_names_follow_dataset_order() {
        let names = DataSource::Embedded(dataset()).class_names().await.unwrap();
        assert_eq!(names.len(), 11);
        assert_eq!(names, dataset().class_names());
    }

    #[tokio::test]
    async fn class_names_failure_is_an_error() {
        let routes: Arc<Routes> = Arc::new(|_: &str| (503u16, String::new()));
        let (base, _) = serve(routes).await;
        let err = client(&base).liquid_class_names().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status, .. } if status == StatusCode::SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn server_error_is_a_status_failure() {
        let (base, seen) = serve(Arc::new(|_: &str| (500u16, "{}".to_string()))).await;
        let err = DataSource::Remote(client(&base)).load(Some("Serum")).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR));
        // The liquids request is never sent once the class request failed.
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_failure() {
        let (base, _) = serve(Arc::new(|_: &str| (200u16, "[{\"name\": 3}]".to_string()))).await;
        let err = client(&base).liquids(None).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }), "{err}");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = client(&format!("http://{}", addr)).liquids(None).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }), "{err}");
    }

    #[tokio::test]
    async fn hung_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });
        let api = ApiClient::new(&format!("http://{}", addr), Duration::from_millis(200)).unwrap();
        let err = api.liquids(None).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { ref source, .. } if source.is_timeout()));
    }

    #[test]
    fn rejects_non_http_base_urls() {
        for bad in ["not a url", "mailto:lab@example.com", "ftp://example.com"] {
            assert!(matches!(
                ApiClient::new(bad, Duration::from_secs(1)),
                Err(FetchError::InvalidUrl { .. })
            ));
        }
    }

    #[test]
    fn describe_names_the_server() {
        let remote = DataSource::Remote(client("http://lab-server:5000/"));
        assert_eq!(remote.describe(), "lab-server:5000");
        assert_eq!(DataSource::Embedded(dataset()).describe(), "Embedded dataset");
    }

    #[test]
    fn settings_choose_the_source() {
        let mut settings = Settings::default();
        assert!(matches!(
            DataSource::from_settings(&settings, dataset()),
            Ok(DataSource::Embedded(_))
        ));
        settings.source = SourceKind::Remote;
        settings.api_base_url = "http://localhost:8080".into();
        assert!(matches!(
            DataSource::from_settings(&settings, dataset()),
            Ok(DataSource::Remote(_))
        ));
        settings.api_base_url = "::".into();
        assert!(DataSource::from_settings(&settings, dataset()).is_err());
    }
}
