//! Shared application state
//!
//! One `App` is built at startup and shared (behind an `Arc`) by every
//! connection task. It owns the catalog handle, the static pages and the
//! request log, and decides how handler failures reach the client.

use crate::catalog::Catalog;
use crate::config::{Config, InvalidParameterPolicy, PagesConfig};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::request_log::RequestLog;
use crate::routes::{self, HandlerError};

pub const INVALID_PARAMETER: &str = "Invalid parameter";

#[derive(Debug, Clone)]
pub struct App {
    pub catalog: Catalog,
    pub pages: PagesConfig,
    pub request_log: RequestLog,
    pub invalid_parameter: InvalidParameterPolicy,
}

impl App {
    pub fn new(catalog: Catalog, pages: PagesConfig) -> Self {
        Self {
            catalog,
            pages,
            request_log: RequestLog::disabled(),
            invalid_parameter: InvalidParameterPolicy::default(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self {
            catalog: Catalog::new(cfg.catalog.seed.clone()),
            pages: cfg.pages.clone(),
            request_log: RequestLog::new(cfg.request_log.path.clone()),
            invalid_parameter: cfg.invalid_parameter,
        }
    }

    pub fn with_request_log(mut self, request_log: RequestLog) -> Self {
        self.request_log = request_log;
        self
    }

    pub fn with_invalid_parameter(mut self, policy: InvalidParameterPolicy) -> Self {
        self.invalid_parameter = policy;
        self
    }

    /// Logs, routes and handles one request.
    ///
    /// `None` means the connection should be closed without a response.
    pub async fn respond(&self, req: &Request) -> Option<Response> {
        tracing::info!(
            method = %req.method,
            path = %req.path,
            user_agent = req.user_agent(),
            "Request received"
        );

        self.request_log.record(req).await;

        match routes::dispatch(req, &self.catalog, &self.pages).await {
            Ok(response) => Some(response),
            Err(e) => self.handler_failure(req, e),
        }
    }

    fn handler_failure(&self, req: &Request, error: HandlerError) -> Option<Response> {
        tracing::warn!(
            method = %req.method,
            path = %req.path,
            error = %error,
            policy = ?self.invalid_parameter,
            "Handler failed"
        );

        match self.invalid_parameter {
            InvalidParameterPolicy::BadRequest => Some(Response::bad_request(INVALID_PARAMETER)),
            InvalidParameterPolicy::Close => None,
        }
    }
}
