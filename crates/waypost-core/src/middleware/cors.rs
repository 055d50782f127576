//! CORS (Cross-Origin Resource Sharing) middleware
//!
//! Inactive until at least one header is configured. Once configured,
//! `OPTIONS` requests are answered directly with the configured headers and
//! every other response gets the configured `Access-Control-Allow-Origin`.

use super::Middleware;
use crate::headers::{CONTENT_LENGTH, CONTENT_TYPE};
use crate::{mime, Error, Headers, Method, Request, Response, ResponseBuilder, Result, StatusCode};

pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";

/// CORS configuration: the headers sent on preflight responses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsConfig {
    headers: Headers,
}

impl CorsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header. Names and values must be valid HTTP header text.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        http::HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            Error::InvalidHeaderConfiguration(format!("invalid header name `{name}`: {e}"))
        })?;
        http::HeaderValue::from_str(value).map_err(|e| {
            Error::InvalidHeaderConfiguration(format!("invalid value for `{name}`: {e}"))
        })?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Build from a configuration value, which must be a table of strings
    pub fn from_toml(value: &toml::Value) -> Result<Self> {
        let toml::Value::Table(table) = value else {
            return Err(Error::InvalidHeaderConfiguration(format!(
                "expected headers to be a table, received a {} instead",
                value.type_str()
            )));
        };

        table.iter().try_fold(Self::new(), |config, (name, value)| match value {
            toml::Value::String(value) => config.header(name, value),
            other => Err(Error::InvalidHeaderConfiguration(format!(
                "expected `{name}` to be a string, received a {} instead",
                other.type_str()
            ))),
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.headers.is_empty()
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }
}

/// CORS middleware
pub struct Cors {
    config: CorsConfig,
}

impl Cors {
    pub fn new(config: CorsConfig) -> Self {
        Self { config }
    }

    fn preflight(&self) -> Response {
        ResponseBuilder::new(StatusCode::OK)
            .header(CONTENT_TYPE, mime::TEXT)
            .header(CONTENT_LENGTH, "0")
            .headers(&self.config.headers)
            .build()
    }
}

impl Middleware for Cors {
    fn before(&self, req: &mut Request) -> Option<Response> {
        if !self.config.is_configured() || req.method != Method::Options {
            return None;
        }
        tracing::trace!(path = %req.path, "answering CORS preflight");
        Some(self.preflight())
    }

    fn after(&self, _req: &Request, res: &mut Response) {
        if let Some(origin) = self.config.headers.get(ACCESS_CONTROL_ALLOW_ORIGIN) {
            res.headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Cors {
        Cors::new(
            CorsConfig::new()
                .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
                .unwrap()
                .header("Access-Control-Allow-Methods", "GET, POST")
                .unwrap(),
        )
    }

    #[test]
    fn test_unconfigured_passes_through() {
        let cors = Cors::new(CorsConfig::new());
        let mut req = Request::new(Method::Options, "/tasks");
        assert!(cors.before(&mut req).is_none());

        let mut res = Response::not_found();
        cors.after(&req, &mut res);
        assert_eq!(res, Response::not_found());
    }

    #[test]
    fn test_preflight_response() {
        let cors = configured();
        let mut req = Request::new(Method::Options, "/tasks");

        let (status, headers, body) = cors.before(&mut req).unwrap().into_parts();
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
        assert_eq!(headers.get("Content-Type"), Some("text/plain"));
        assert_eq!(headers.get("Content-Length"), Some("0"));
        assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN), Some("*"));
        assert_eq!(headers.get("Access-Control-Allow-Methods"), Some("GET, POST"));
    }

    #[test]
    fn test_non_preflight_gets_only_origin_header() {
        let cors = configured();
        let mut req = Request::new(Method::Get, "/tasks");
        assert!(cors.before(&mut req).is_none());

        let mut res = Response::not_found();
        cors.after(&req, &mut res);
        assert_eq!(res.header(ACCESS_CONTROL_ALLOW_ORIGIN), Some("*"));
        assert!(res.header("Access-Control-Allow-Methods").is_none());
    }

    #[test]
    fn test_configured_preflight_headers_override_defaults() {
        let cors = Cors::new(CorsConfig::new().header("Content-Type", "application/json").unwrap());
        let mut req = Request::new(Method::Options, "/");

        let res = cors.before(&mut req).unwrap();
        assert_eq!(res.content_type(), Some("application/json"));
    }

    #[test]
    fn test_from_toml_table() {
        let value: toml::Value = toml::from_str(r#"Access-Control-Allow-Origin = "*""#).unwrap();
        let config = CorsConfig::from_toml(&value).unwrap();

        assert!(config.is_configured());
        assert_eq!(config.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN), Some("*"));
    }

    #[test]
    fn test_from_toml_rejects_non_table() {
        let err = CorsConfig::from_toml(&toml::Value::String("*".into())).unwrap_err();
        assert!(matches!(err, Error::InvalidHeaderConfiguration(_)));
        assert!(err.to_string().contains("received a string"));

        let err = CorsConfig::from_toml(&toml::Value::Array(vec![])).unwrap_err();
        assert!(matches!(err, Error::InvalidHeaderConfiguration(_)));
    }

    #[test]
    fn test_from_toml_rejects_non_string_values() {
        let value: toml::Value = toml::from_str("Access-Control-Max-Age = 600").unwrap();
        let err = CorsConfig::from_toml(&value).unwrap_err();
        assert!(err.to_string().contains("received a integer"));
    }

    #[test]
    fn test_rejects_invalid_header_text() {
        assert!(matches!(
            CorsConfig::new().header("Bad Name", "*"),
            Err(Error::InvalidHeaderConfiguration(_))
        ));
        assert!(matches!(
            CorsConfig::new().header("X-Ok", "line\nbreak"),
            Err(Error::InvalidHeaderConfiguration(_))
        ));
    }
}
