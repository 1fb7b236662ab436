//! Fixture definitions for extra stub routes loaded from YAML.

use std::{fs, path::Path, time::Duration};

use axum::http::Method;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::chain::HandlerChain;
use crate::handlers::StubHandler;

/// Fixture schema version understood by this loader.
pub const SUPPORTED_VERSION: u8 = 1;

/// Methods accepted in `match.method`.
const KNOWN_METHODS: [Method; 7] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::HEAD,
    Method::OPTIONS,
];

/// Errors that can occur when loading or processing fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// I/O error while reading fixture file.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Fixture file written for another schema version.
    #[error("unsupported fixture version {0}, expected {SUPPORTED_VERSION}")]
    UnsupportedVersion(u8),
    /// Route path that can never match a request path.
    #[error("route {path:?}: path must start with '/'")]
    InvalidPath { path: String },
    /// Unsupported HTTP method in a route matcher.
    #[error("route {path}: unknown method {method:?}")]
    InvalidMethod { path: String, method: String },
    /// Delay that humantime cannot parse.
    #[error("route {path}: invalid delay {delay:?}: {source}")]
    InvalidDelay {
        path: String,
        delay: String,
        #[source]
        source: humantime::DurationError,
    },
}

/// A collection of stub routes.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FixtureBook {
    /// Schema version of the fixture file.
    pub version: Option<u8>,
    /// Stub routes, in match order.
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// A route definition with matcher and response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Route {
    /// Request matcher criteria.
    #[serde(rename = "match")]
    pub matcher: Matcher,
    /// Response to return when matched.
    pub respond: Respond,
}

/// Request matching criteria for a fixture route.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Matcher {
    /// Exact URL path.
    pub path: String,
    /// HTTP method, any method when absent.
    pub method: Option<String>,
}

/// Response data for a matched fixture route.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Respond {
    /// Artificial delay in humantime syntax (`250ms`, `2s`).
    pub delay: Option<String>,
    /// JSON body.
    pub body: serde_json::Value,
}

impl FixtureBook {
    /// Load fixtures from a YAML file.
    ///
    /// # Parameters
    ///
    /// - `path` - Path to the YAML fixtures file
    ///
    /// # Returns
    ///
    /// Returns `Ok(FixtureBook)` on success, or `FixtureError` if the file cannot be read or parsed.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let txt = fs::read_to_string(path)?;
        let book = Self::from_yaml_str(&txt)?;
        info!(path = %path.display(), routes = book.routes.len(), "loaded fixtures");
        Ok(book)
    }

    /// Parse fixtures from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::Yaml` if the text is not a valid fixture book, or
    /// `FixtureError::UnsupportedVersion` for a version other than
    /// [`SUPPORTED_VERSION`]. A missing version is accepted.
    pub fn from_yaml_str(txt: &str) -> Result<Self, FixtureError> {
        let book: Self = serde_yaml::from_str(txt)?;
        match book.version {
            Some(version) if version != SUPPORTED_VERSION => {
                Err(FixtureError::UnsupportedVersion(version))
            }
            _ => Ok(book),
        }
    }

    /// Turn every route into a stub handler, preserving order.
    ///
    /// # Returns
    ///
    /// Returns a `HandlerChain` with one `StubHandler` per route.
    ///
    /// # Errors
    ///
    /// Returns error if a route has a relative path, an unknown method or an
    /// unparseable delay.
    pub fn into_chain(self) -> Result<HandlerChain, FixtureError> {
        self.routes
            .into_iter()
            .try_fold(HandlerChain::new(), |chain, route| Ok(chain.with(route.into_stub()?)))
    }
}

impl Route {
    /// Build the stub handler described by this route.
    ///
    /// # Errors
    ///
    /// Returns error if the path, method or delay is invalid.
    pub fn into_stub(self) -> Result<StubHandler, FixtureError> {
        let Route { matcher, respond } = self;
        if !matcher.path.starts_with('/') {
            return Err(FixtureError::InvalidPath { path: matcher.path });
        }
        let mut stub = StubHandler::new(matcher.path.clone(), respond.body);

        if let Some(method) = matcher.method {
            stub = stub.with_method(parse_method(&matcher.path, &method)?);
        }
        if let Some(delay) = respond.delay {
            stub = stub.with_delay(parse_delay(&matcher.path, &delay)?);
        }
        Ok(stub)
    }
}

fn parse_method(path: &str, method: &str) -> Result<Method, FixtureError> {
    let upper = method.trim().to_ascii_uppercase();
    KNOWN_METHODS.into_iter().find(|m| m.as_str() == upper).ok_or_else(|| {
        FixtureError::InvalidMethod { path: path.to_string(), method: method.to_string() }
    })
}

fn parse_delay(path: &str, delay: &str) -> Result<Duration, FixtureError> {
    humantime::parse_duration(delay.trim()).map_err(|source| FixtureError::InvalidDelay {
        path: path.to_string(),
        delay: delay.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::handlers::MockRequest;

    const QUOTES_YAML: &str = r#"
version: 1
routes:
  - match:
      path: /quotes
      method: get
    respond:
      delay: 250ms
      body: [{"id": "q-1", "total": 120.5}]
  - match:
      path: /settings
    respond:
      body: {"currency": "EUR"}
"#;

    /// Test loading a fixture book from a file.
    #[test]
    fn test_load_from_yaml() {
        let temp_file = NamedTempFile::new().expect("create temp file");
        fs::write(&temp_file, QUOTES_YAML).expect("write temp file");

        let book = FixtureBook::load_from_path(&temp_file).expect("load fixture book");
        assert_eq!(book.version, Some(1));
        assert_eq!(book.routes.len(), 2);
        assert_eq!(book.routes[0].matcher.path, "/quotes");
        assert_eq!(book.routes[0].matcher.method.as_deref(), Some("get"));
        assert_eq!(book.routes[0].respond.delay.as_deref(), Some("250ms"));
        assert_eq!(book.routes[1].matcher.method, None);
        assert_eq!(book.routes[1].respond.body, json!({"currency": "EUR"}));
    }

    /// Test that an empty document yields no routes.
    #[test]
    fn test_load_minimal_yaml() {
        let book = FixtureBook::from_yaml_str("version: 1\n").expect("parse");
        assert!(book.routes.is_empty());
        assert!(book.into_chain().expect("chain").is_empty());
    }

    /// Test invalid YAML handling.
    #[test]
    fn test_load_invalid_yaml() {
        let temp_file = NamedTempFile::new().expect("create temp file");
        fs::write(&temp_file, "invalid: yaml: content: [").expect("write temp file");

        let result = FixtureBook::load_from_path(&temp_file);
        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    /// Test file not found handling.
    #[test]
    fn test_load_nonexistent_file() {
        let result = FixtureBook::load_from_path("/nonexistent/file.yaml");
        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    /// Test converting routes into stubs.
    #[test]
    fn test_into_stub() {
        let book = FixtureBook::from_yaml_str(QUOTES_YAML).expect("parse");
        let quotes = book.routes[0].clone().into_stub().expect("valid route");
        assert_eq!(quotes.path(), "/quotes");
        assert_eq!(quotes.method(), Some(&Method::GET));
        assert_eq!(quotes.delay(), Duration::from_millis(250));

        let settings = book.routes[1].clone().into_stub().expect("valid route");
        assert_eq!(settings.method(), None);
        assert_eq!(settings.delay(), Duration::ZERO);
    }

    /// Test rejection of fixture files for another schema version.
    #[test]
    fn test_unsupported_version() {
        let err = FixtureBook::from_yaml_str("version: 2\nroutes: []\n").unwrap_err();
        assert!(matches!(err, FixtureError::UnsupportedVersion(2)));

        let book = FixtureBook::from_yaml_str("routes: []\n").expect("version is optional");
        assert_eq!(book.version, None);
    }

    /// Test rejection of paths without a leading slash.
    #[test]
    fn test_invalid_path() {
        let yaml = "routes:\n  - match: {path: quotes}\n    respond: {body: []}\n";
        let err = FixtureBook::from_yaml_str(yaml).expect("parse").into_chain().unwrap_err();
        assert!(matches!(err, FixtureError::InvalidPath { ref path } if path == "quotes"));
    }

    /// Test rejection of unknown methods.
    #[test]
    fn test_invalid_method() {
        let yaml = "routes:\n  - match: {path: /x, method: FETCH}\n    respond: {body: null}\n";
        let err = FixtureBook::from_yaml_str(yaml).expect("parse").into_chain().unwrap_err();
        assert!(matches!(err, FixtureError::InvalidMethod { ref method, .. } if method == "FETCH"));
    }

    /// Test rejection of malformed delays.
    #[test]
    fn test_invalid_delay() {
        let yaml = "routes:\n  - match: {path: /x}\n    respond: {delay: soon, body: 1}\n";
        let err = FixtureBook::from_yaml_str(yaml).expect("parse").into_chain().unwrap_err();
        assert!(matches!(err, FixtureError::InvalidDelay { ref path, .. } if path == "/x"));
        assert!(err.to_string().contains("soon"));
    }

    /// Test that fixture stubs answer in file order.
    #[tokio::test(start_paused = true)]
    async fn test_fixture_chain_dispatch() {
        let chain = FixtureBook::from_yaml_str(QUOTES_YAML)
            .expect("parse")
            .into_chain()
            .expect("chain");
        assert_eq!(chain.len(), 2);

        let quotes = chain.dispatch(&MockRequest::get("/quotes")).await;
        assert_eq!(quotes, Some(json!([{"id": "q-1", "total": 120.5}])));

        let settings = chain.dispatch(&MockRequest::new(Method::PATCH, "/settings")).await;
        assert_eq!(settings, Some(json!({"currency": "EUR"})));

        assert!(chain.dispatch(&MockRequest::new(Method::POST, "/quotes")).await.is_none());
    }
}
