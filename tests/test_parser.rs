use plainhttp::http::parser::{parse_cookies, parse_http_request};

#[test]
fn test_parse_simple_get_request() {
    let req = "GET / HTTP/1.0\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req);

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.0");
    assert_eq!(parsed.headers.get("host").unwrap(), "example.com");
    assert_eq!(parsed.headers.len(), 1);
    assert!(parsed.body.is_empty());
}

#[test]
fn test_parse_post_request_with_body() {
    let req = "POST /echo HTTP/1.0\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello";
    let parsed = parse_http_request(req);

    assert_eq!(parsed.method, "POST");
    assert_eq!(parsed.path, "/echo");
    assert_eq!(parsed.body, "hello");
    assert_eq!(parsed.content_length(), 5);
}

#[test]
fn test_parse_header_names_lowercased_and_values_trimmed() {
    let req = "GET /path HTTP/1.0\r\nHost:   example.com  \r\nUser-Agent: test-client\r\nACCEPT:*/*\r\n\r\n";
    let parsed = parse_http_request(req);

    assert_eq!(parsed.headers.len(), 3);
    assert_eq!(parsed.headers.get("host").unwrap(), "example.com");
    assert_eq!(parsed.headers.get("user-agent").unwrap(), "test-client");
    assert_eq!(parsed.headers.get("accept").unwrap(), "*/*");
    assert!(!parsed.headers.contains_key("Host"));
}

#[test]
fn test_parse_header_value_keeps_later_colons() {
    let req = "GET / HTTP/1.0\r\nHost: localhost:8080\r\n\r\n";
    let parsed = parse_http_request(req);

    assert_eq!(parsed.headers.get("host").unwrap(), "localhost:8080");
}

#[test]
fn test_parse_duplicate_header_last_wins() {
    let req = "GET / HTTP/1.0\r\nX-Tag: one\r\nx-tag: two\r\n\r\n";
    let parsed = parse_http_request(req);

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.headers.get("x-tag").unwrap(), "two");
}

#[test]
fn test_parse_line_without_colon_is_ignored() {
    let req = "GET / HTTP/1.0\r\nBrokenHeader\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req);

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.headers.get("host").unwrap(), "example.com");
}

#[test]
fn test_parse_body_keeps_later_blank_lines() {
    let req = "POST /echo HTTP/1.0\r\n\r\nfirst\r\n\r\nsecond";
    let parsed = parse_http_request(req);

    assert_eq!(parsed.body, "first\r\n\r\nsecond");
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let req = "GET /search?q=rust HTTP/1.0\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req);

    assert_eq!(parsed.path, "/search?q=rust");
}

#[test]
fn test_parse_missing_blank_line_yields_headers_and_empty_body() {
    let req = "GET / HTTP/1.0\r\nHost: example.com\r\n";
    let parsed = parse_http_request(req);

    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.headers.get("host").unwrap(), "example.com");
    assert!(parsed.body.is_empty());
}

#[test]
fn test_parse_malformed_request_line_yields_empty_fields() {
    let parsed = parse_http_request("GARBAGE\r\n\r\n");

    assert_eq!(parsed.method, "GARBAGE");
    assert_eq!(parsed.path, "");
    assert_eq!(parsed.version, "");
    assert!(!parsed.is_well_formed());
}

#[test]
fn test_parse_empty_input() {
    let parsed = parse_http_request("");

    assert_eq!(parsed.method, "");
    assert_eq!(parsed.path, "");
    assert_eq!(parsed.version, "");
    assert!(parsed.headers.is_empty());
    assert!(parsed.cookies.is_empty());
    assert!(parsed.body.is_empty());
}

#[test]
fn test_parse_unroutable_method_is_kept_verbatim() {
    let parsed = parse_http_request("PATCH / HTTP/1.0\r\n\r\n");

    assert_eq!(parsed.method, "PATCH");
    assert!(parsed.route_method().is_none());
}

#[test]
fn test_parse_cookie_header() {
    let req = "GET /cookie/get HTTP/1.0\r\nCookie: a=1; b=two; c=\r\n\r\n";
    let parsed = parse_http_request(req);

    assert_eq!(parsed.cookies.len(), 3);
    assert_eq!(parsed.cookies.get("a").unwrap(), "1");
    assert_eq!(parsed.cookies.get("b").unwrap(), "two");
    assert_eq!(parsed.cookies.get("c").unwrap(), "");
}

#[test]
fn test_parse_cookies_edge_cases() {
    let cookies = parse_cookies(" ; =orphan; flag; jwt=x.y=z ;");

    assert_eq!(cookies.len(), 2);
    assert_eq!(cookies.get("flag").unwrap(), "");
    assert_eq!(cookies.get("jwt").unwrap(), "x.y=z");
}

#[test]
fn test_parse_without_cookie_header_has_no_cookies() {
    let parsed = parse_http_request("GET / HTTP/1.0\r\nHost: x\r\n\r\n");

    assert!(parsed.cookies.is_empty());
}
