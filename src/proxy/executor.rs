//! Upstream request execution.
//!
//! Performs exactly one outbound call for an `ApiRequest`: no retries, and
//! redirects are followed by the client. Any upstream status, including 4xx
//! and 5xx, is a successful result.

use super::response_builder::{build_response, collect_headers, ResponseBuildParams};
use super::types::{ApiRequest, ApiResponse};
use crate::error::AppError;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use std::str::FromStr;

/// Builds the outbound request from the envelope.
fn build_upstream_request(
    client: &reqwest::Client,
    request: ApiRequest,
) -> Result<reqwest::RequestBuilder, AppError> {
    let url = url::Url::parse(request.url.trim())
        .map_err(|e| AppError::InvalidUrl(format!("{} ({})", request.url, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::InvalidUrl(format!(
            "{} (unsupported scheme '{}')",
            request.url,
            url.scheme()
        )));
    }

    let mut builder = client.request(request.method.to_reqwest(), url);
    let mut has_content_type = false;

    // Add headers
    for (key, value) in request.headers.unwrap_or_default() {
        let name = HeaderName::from_str(key.trim())
            .map_err(|_| AppError::InvalidHeader(format!("invalid name '{}'", key)))?;
        let value = HeaderValue::from_str(&value)
            .map_err(|_| AppError::InvalidHeader(format!("invalid value for '{}'", key)))?;
        has_content_type |= name == CONTENT_TYPE;
        builder = builder.header(name, value);
    }

    if !request.method.supports_body() {
        return Ok(builder);
    }

    // Add body
    builder = match request.body {
        None | Some(Value::Null) => builder,
        Some(Value::String(raw)) => builder.body(raw),
        Some(json) => {
            if !has_content_type {
                builder = builder.header(CONTENT_TYPE, "application/json");
            }
            builder.body(json.to_string())
        }
    };

    Ok(builder)
}

/// Executes the request described by `request` and wraps the upstream result.
pub async fn execute_request(
    client: &reqwest::Client,
    request: ApiRequest,
) -> Result<ApiResponse, AppError> {
    let builder = build_upstream_request(client, request)?;

    let response = builder.send().await?;
    let status = response.status().as_u16();
    let headers = collect_headers(response.headers());
    let body_bytes = response.bytes().await?.to_vec();

    tracing::debug!(status, size = body_bytes.len(), "Upstream responded");

    Ok(build_response(ResponseBuildParams {
        status,
        headers,
        body_bytes,
    }))
}
