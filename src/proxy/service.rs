//! Proxy service abstraction layer.
//!
//! The routes depend on the `ProxyService` trait so handlers can be tested
//! with a canned service instead of real upstream traffic.

use super::executor::execute_request;
use super::types::{ApiRequest, ApiResponse};
use crate::error::AppError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

pub type ProxyFuture<'a> = Pin<Box<dyn Future<Output = Result<ApiResponse, AppError>> + Send + 'a>>;

/// Trait for proxy services that execute HTTP requests.
pub trait ProxyService: Send + Sync {
    /// Executes a proxy request and returns the wrapped upstream response.
    fn execute(&self, request: ApiRequest) -> ProxyFuture<'_>;
}

/// Default HTTP proxy service backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct HttpProxyService {
    client: reqwest::Client,
}

impl HttpProxyService {
    /// Creates a service whose outbound calls time out after `timeout`, or
    /// never when `None`.
    pub fn new(timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Creates a new `HttpProxyService` wrapped in an `Arc`.
    pub fn arc(timeout: Option<Duration>) -> Result<Arc<Self>, AppError> {
        Self::new(timeout).map(Arc::new)
    }
}

impl ProxyService for HttpProxyService {
    fn execute(&self, request: ApiRequest) -> ProxyFuture<'_> {
        Box::pin(async move { execute_request(&self.client, request).await })
    }
}
