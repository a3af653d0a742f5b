use plainhttp::http::request::{Method, Request, RequestBuilder};
use std::collections::HashMap;

#[test]
fn test_request_header_retrieval_ignores_case() {
    let mut headers = HashMap::new();
    headers.insert("host".to_string(), "example.com".to_string());
    headers.insert("content-type".to_string(), "application/json".to_string());

    let req = Request {
        method: "GET".to_string(),
        path: "/".to_string(),
        version: "HTTP/1.0".to_string(),
        headers,
        ..Default::default()
    };

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("CONTENT-TYPE"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_content_length_missing_or_invalid() {
    let missing = RequestBuilder::new().method("GET").path("/").build().unwrap();
    assert_eq!(missing.content_length(), 0);

    let invalid = RequestBuilder::new()
        .method("POST")
        .path("/echo")
        .header("Content-Length", "not-a-number")
        .build()
        .unwrap();
    assert_eq!(invalid.content_length(), 0);
}

#[test]
fn test_request_builder_defaults_version_and_lowercases_headers() {
    let req = RequestBuilder::new()
        .method("GET")
        .path("/echo")
        .header("X-Trace", " abc ")
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.0");
    assert_eq!(req.headers.get("x-trace").unwrap(), "abc");
}

#[test]
fn test_request_builder_derives_cookies() {
    let req = RequestBuilder::new()
        .method("GET")
        .path("/cookie/get")
        .header("Cookie", "session=abc123; theme=dark")
        .build()
        .unwrap();

    assert_eq!(req.cookie("session"), Some("abc123"));
    assert_eq!(req.cookie("theme"), Some("dark"));
    assert_eq!(req.cookie("missing"), None);
}

#[test]
fn test_request_builder_requires_method_and_path() {
    assert!(RequestBuilder::new().path("/").build().is_err());
    assert!(RequestBuilder::new().method("GET").build().is_err());
}

#[test]
fn test_method_from_str() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
    ];

    for (method_str, expected) in methods {
        assert_eq!(Method::from_str(method_str), Some(expected));
        assert_eq!(expected.as_str(), method_str);
    }

    for unsupported in ["PATCH", "HEAD", "OPTIONS", "get", ""] {
        assert_eq!(Method::from_str(unsupported), None);
    }
}

#[test]
fn test_request_well_formed() {
    let req = RequestBuilder::new().method("GET").path("/").build().unwrap();
    assert!(req.is_well_formed());

    assert!(!Request::default().is_well_formed());
}
