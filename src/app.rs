//! Demonstration routes
//!
//! The compiled-in surface the binary serves: a welcome document, a plain
//! text greeting, request echoing and a cookie round trip.

use serde_json::json;

use crate::server::router::Router;

pub const SESSION_COOKIE: &str = "session=abc123";

pub fn router() -> Router {
    let mut router = Router::new();

    router
        .get("/", |_req, res| {
            Ok(res.json(&json!({
                "message": "Welcome to the HTTP/1.0 server!",
                "endpoints": [
                    "GET /",
                    "GET /hello",
                    "GET /echo",
                    "POST /echo",
                    "GET /cookie/set",
                    "GET /cookie/get",
                ],
            }))?)
        })
        .get("/hello", |_req, res| Ok(res.text("Hello, World!")))
        .get("/echo", |req, res| {
            Ok(res.json(&json!({
                "method": req.method,
                "path": req.path,
                "version": req.version,
                "headers": req.headers,
            }))?)
        })
        .post("/echo", |req, res| {
            Ok(res.json(&json!({
                "method": req.method,
                "path": req.path,
                "body": req.body,
                "headers": req.headers,
            }))?)
        })
        .get("/cookie/set", |_req, res| {
            Ok(res
                .header("Set-Cookie", format!("{SESSION_COOKIE}; Path=/"))
                .json(&json!({
                    "message": "Cookie set",
                    "cookie": SESSION_COOKIE,
                }))?)
        })
        .get("/cookie/get", |req, res| {
            Ok(res.json(&json!({
                "message": "Received cookies",
                "cookies": req.cookies,
            }))?)
        });

    router
}
