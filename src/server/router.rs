//! Exact-path request routing
//!
//! Routes are registered once at startup, keyed by method and the literal
//! request path. Dispatch is the single place where handler faults are
//! turned into responses.

use std::any::Any;
use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};

use serde::Serialize;
use tracing::{error, warn};

use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};

/// Application logic for one method and path.
///
/// Receives the request and a fresh 200 response to fill in.
pub type Handler = Box<dyn Fn(&Request, Response) -> anyhow::Result<Response> + Send + Sync>;

/// JSON payload of every error response the router produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: status.reason_phrase().to_string(),
            message: message.into(),
        }
    }

    /// Builds the error response for `status` carrying this body.
    pub fn into_response(self, status: StatusCode) -> Response {
        match Response::new(status).json(&self) {
            Ok(response) => response,
            Err(_) => Response::new(status).text(self.message),
        }
    }
}

/// Route table: method, then exact path, to handler.
pub struct Router {
    routes: HashMap<Method, HashMap<String, Handler>>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a router with an empty table for every routable method.
    pub fn new() -> Self {
        let routes = [Method::GET, Method::POST, Method::PUT, Method::DELETE]
            .into_iter()
            .map(|method| (method, HashMap::new()))
            .collect();

        Self { routes }
    }

    /// Register `handler` for `method` and the exact `path`.
    ///
    /// Registering the same pair twice keeps the later handler.
    pub fn route<F>(&mut self, method: Method, path: &str, handler: F) -> &mut Self
    where
        F: Fn(&Request, Response) -> anyhow::Result<Response> + Send + Sync + 'static,
    {
        self.routes
            .entry(method)
            .or_default()
            .insert(path.to_string(), Box::new(handler));
        self
    }

    pub fn get<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(&Request, Response) -> anyhow::Result<Response> + Send + Sync + 'static,
    {
        self.route(Method::GET, path, handler)
    }

    pub fn post<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(&Request, Response) -> anyhow::Result<Response> + Send + Sync + 'static,
    {
        self.route(Method::POST, path, handler)
    }

    pub fn put<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(&Request, Response) -> anyhow::Result<Response> + Send + Sync + 'static,
    {
        self.route(Method::PUT, path, handler)
    }

    pub fn delete<F>(&mut self, path: &str, handler: F) -> &mut Self
    where
        F: Fn(&Request, Response) -> anyhow::Result<Response> + Send + Sync + 'static,
    {
        self.route(Method::DELETE, path, handler)
    }

    /// Number of registered routes across all methods.
    pub fn len(&self) -> usize {
        self.routes.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Produce the response for `request`.
    ///
    /// Unknown methods get 405, unknown paths 404. A handler that returns an
    /// error or panics gets 500 with the fault's message.
    pub fn dispatch(&self, request: &Request) -> Response {
        let Some(table) = request
            .route_method()
            .and_then(|method| self.routes.get(&method))
        else {
            warn!(method = %request.method, path = %request.path, "Unsupported method");
            return ErrorBody::new(
                StatusCode::MethodNotAllowed,
                format!("Unsupported method: {}", request.method),
            )
            .into_response(StatusCode::MethodNotAllowed);
        };

        let Some(handler) = table.get(&request.path) else {
            warn!(method = %request.method, path = %request.path, "No route for path");
            return ErrorBody::new(
                StatusCode::NotFound,
                format!("Path not found: {}", request.path),
            )
            .into_response(StatusCode::NotFound);
        };

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            handler(request, Response::new(StatusCode::Ok))
        }));

        let message = match outcome {
            Ok(Ok(response)) => return response,
            Ok(Err(e)) => e.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };

        error!(
            method = %request.method,
            path = %request.path,
            error = %message,
            "Handler failed"
        );

        ErrorBody::new(StatusCode::InternalServerError, message)
            .into_response(StatusCode::InternalServerError)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
