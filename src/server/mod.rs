//! Serving: the route table and the TCP accept loop.

pub mod listener;
pub mod router;

pub use router::{ErrorBody, Handler, Router};
