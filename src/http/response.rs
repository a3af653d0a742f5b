use std::time::SystemTime;

use serde::Serialize;

use crate::http::writer::serialize_response;

/// Protocol version written on every status line.
pub const HTTP_VERSION: &str = "HTTP/1.0";

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const TEXT_HTML: &str = "text/html; charset=utf-8";
pub const APPLICATION_JSON: &str = "application/json; charset=utf-8";

/// HTTP status codes supported by the server.
///
/// Common HTTP status codes used in responses:
/// - `Ok` (200): Request successful
/// - `Created` (201): Resource created successfully
/// - `NoContent` (204): Successful request with no content
/// - `BadRequest` (400): Malformed request
/// - `NotFound` (404): Resource not found
/// - `MethodNotAllowed` (405): HTTP method not supported
/// - `InternalServerError` (500): Server error
///
/// Any other code is carried as `Other` and reported as "Unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 204 No Content
    NoContent,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
    /// A code without a known reason phrase
    Other(u16),
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use plainhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Other(418).as_u16(), 418);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NoContent => 204,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
            StatusCode::Other(code) => *code,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use plainhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// assert_eq!(StatusCode::Other(418).reason_phrase(), "Unknown");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NoContent => "No Content",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::Other(_) => "Unknown",
        }
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        match code {
            200 => StatusCode::Ok,
            201 => StatusCode::Created,
            204 => StatusCode::NoContent,
            400 => StatusCode::BadRequest,
            404 => StatusCode::NotFound,
            405 => StatusCode::MethodNotAllowed,
            500 => StatusCode::InternalServerError,
            other => StatusCode::Other(other),
        }
    }
}

/// An HTTP/1.0 response under construction.
///
/// Every setter consumes and returns the response so calls chain. Headers
/// keep the order they were first set in; `Content-Length` and `Date` are
/// filled in when the response is serialized.
///
/// # Example
///
/// ```
/// # use plainhttp::http::response::{Response, StatusCode};
/// let response = Response::new(StatusCode::Created)
///     .header("X-Request-Id", "42")
///     .text("done");
///
/// assert_eq!(response.header_value("Content-Type"), Some("text/plain; charset=utf-8"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in insertion order
    pub headers: Vec<(String, String)>,
    /// Response body
    pub body: String,
}

impl Default for Response {
    fn default() -> Self {
        Self::new(StatusCode::Ok)
    }
}

impl Response {
    /// Creates an empty response with the specified status code.
    pub fn new(status: impl Into<StatusCode>) -> Self {
        Self {
            status: status.into(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    /// Changes the status code (and with it the reason phrase).
    pub fn status(mut self, status: impl Into<StatusCode>) -> Self {
        self.status = status.into();
        self
    }

    /// Adds or replaces a header.
    ///
    /// # Arguments
    ///
    /// * `key` - Header name; an existing header of the same name (ignoring
    ///   ASCII case) is replaced where it stands
    /// * `value` - Header value
    ///
    /// # Example
    ///
    /// ```ignore
    /// response.header("Set-Cookie", "session=abc123; Path=/")
    ///     .header("Cache-Control", "no-cache")
    /// ```
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_header(key.into(), value.into());
        self
    }

    pub fn content_type(self, value: impl Into<String>) -> Self {
        self.header("Content-Type", value)
    }

    /// Sets a plain text body.
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self.content_type(TEXT_PLAIN)
    }

    /// Sets an HTML body.
    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self.content_type(TEXT_HTML)
    }

    /// Serializes `data` as the JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        self.body = serde_json::to_string(data)?;
        Ok(self.content_type(APPLICATION_JSON))
    }

    /// Looks up a header that has been set, ignoring ASCII case.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Serializes with the `Date` header taken from `now`.
    pub fn serialize_at(&self, now: SystemTime) -> Vec<u8> {
        let mut finished = self.clone();
        // Byte length, not char count
        finished.set_header("Content-Length".to_string(), self.body.len().to_string());
        finished.set_header("Date".to_string(), httpdate::fmt_http_date(now));

        serialize_response(&finished)
    }

    /// Serializes the complete message as it goes on the wire.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.serialize_at(SystemTime::now())
    }

    fn set_header(&mut self, key: String, value: String) {
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&key))
        {
            Some(slot) => *slot = (key, value),
            None => self.headers.push((key, value)),
        }
    }
}
