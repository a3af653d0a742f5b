//! plainhttp - HTTP/1.0 over raw TCP
//!
//! Request parsing, response building, exact-path routing and the
//! connection loop, plus the demonstration routes served by the binary.

pub mod app;
pub mod config;
pub mod http;
pub mod server;
