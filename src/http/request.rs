use std::collections::HashMap;

use crate::http::parser::parse_cookies;

/// HTTP request methods that can key a route.
///
/// Anything else on the request line is kept as raw text on the
/// [`Request`] and answered with 405 Method Not Allowed by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
}

/// Represents a parsed HTTP request from a client.
///
/// Fields that could not be extracted from a malformed message are empty
/// rather than missing. Header names are lower-cased; cookies are derived
/// from the `cookie` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Method token exactly as sent (e.g. "GET")
    pub method: String,
    /// The request path, query string included (e.g. "/echo?x=1")
    pub path: String,
    /// HTTP version token (typically "HTTP/1.0")
    pub version: String,
    /// Lower-cased header names to trimmed values
    pub headers: HashMap<String, String>,
    /// Cookie names to values
    pub cookies: HashMap<String, String>,
    /// Everything after the first blank line
    pub body: String,
}

/// Builder for constructing Request objects.
#[derive(Default)]
pub struct RequestBuilder {
    method: Option<String>,
    path: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
    body: String,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of the method (case-sensitive, uppercase)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string names a routable method, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use plainhttp::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("PATCH"), None);
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
        }
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Stores the header under its lower-cased name, as the parser does.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(key.into().trim().to_ascii_lowercase(), value.into().trim().to_string());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        let cookies = self
            .headers
            .get("cookie")
            .map(|raw| parse_cookies(raw))
            .unwrap_or_default();

        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path: self.path.ok_or("path missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.0".to_string()),
            headers: self.headers,
            cookies,
            body: self.body,
        })
    }
}

impl Request {
    /// Retrieves a header value by name, ignoring ASCII case.
    ///
    /// # Arguments
    ///
    /// * `key` - Header name to look up
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the header value if present, `None` otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    /// Retrieves a cookie sent in the `cookie` header.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(|v| v.as_str())
    }

    /// Retrieves the Content-Length header value and parses it as a usize.
    ///
    /// Returns 0 if the header is missing or not a valid number.
    pub fn content_length(&self) -> usize {
        self.header("Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// The routable method, if the request line named one.
    pub fn route_method(&self) -> Option<Method> {
        Method::from_str(&self.method)
    }

    /// True when method, path and version were all present on the request line.
    pub fn is_well_formed(&self) -> bool {
        !self.method.is_empty() && !self.path.is_empty() && !self.version.is_empty()
    }
}
