use std::collections::HashMap;

use tracing::debug;

use crate::http::request::Request;

const HEADER_TERMINATOR: &str = "\r\n\r\n";

/// Parses the complete text of one received message into a [`Request`].
///
/// Never fails: pieces that cannot be found are left empty, which lets the
/// router answer with 404/405 instead of the connection erroring out.
pub fn parse_http_request(raw: &str) -> Request {
    // Only the first blank line separates headers from the body
    let (head, body) = raw.split_once(HEADER_TERMINATOR).unwrap_or((raw, ""));

    let mut lines = head.split("\r\n");

    // Request line
    let mut parts = lines.next().unwrap_or_default().split(' ');
    let method = parts.next().unwrap_or_default();
    let path = parts.next().unwrap_or_default();
    let version = parts.next().unwrap_or_default();

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        headers.insert(
            key.trim().to_ascii_lowercase(),
            value.trim().to_string(),
        );
    }

    let cookies = headers
        .get("cookie")
        .map(|raw| parse_cookies(raw))
        .unwrap_or_default();

    Request {
        method: method.to_string(),
        path: path.to_string(),
        version: version.to_string(),
        headers,
        cookies,
        body: body.to_string(),
    }
}

/// Splits a `cookie` header value into name/value pairs.
///
/// The value is everything after the first `=`, so `token=a=b` keeps `a=b`.
/// A pair without `=` maps to an empty value; pairs with an empty name are
/// dropped.
pub fn parse_cookies(header: &str) -> HashMap<String, String> {
    let mut cookies = HashMap::new();

    for pair in header.split(';') {
        let pair = pair.trim();
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        let name = name.trim();

        if name.is_empty() {
            continue;
        }

        cookies.insert(name.to_string(), value.trim().to_string());
    }

    cookies
}

/// Dumps a parsed request at debug level.
pub fn log_request(request: &Request) {
    debug!(
        method = %request.method,
        path = %request.path,
        version = %request.version,
        "Parsed request"
    );

    for (key, value) in &request.headers {
        debug!(header = %key, value = %value, "Request header");
    }

    if !request.body.is_empty() {
        debug!(body = %request.body, "Request body");
    }
}
