//! Response building utilities for proxy responses.
//!
//! Turns the raw upstream status, headers and body bytes into the
//! `ApiResponse` envelope the UI renders.

use super::types::ApiResponse;
use base64::Engine;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::collections::BTreeMap;

/// Determines if response body is likely binary based on content-type.
///
/// A missing content type is treated as text.
pub fn is_binary_content(content_type: Option<&str>) -> bool {
    let ct = match content_type {
        Some(ct) => ct.to_lowercase(),
        None => return false,
    };

    let text_types = [
        "text/",
        "application/json",
        "application/xml",
        "application/javascript",
        "application/x-javascript",
        "application/ecmascript",
        "application/x-www-form-urlencoded",
        "+json",
        "+xml",
    ];

    !text_types.iter().any(|t| ct.contains(t))
}

/// Flattens a header map into lower-case names, joining repeated headers
/// with `", "`. Values that are not valid UTF-8 are decoded lossily.
pub fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut collected: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    collected
}

/// Interprets an upstream text body: blank is `null`, valid JSON is kept as
/// JSON, anything else becomes a JSON string.
pub fn parse_body(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parameters for building a proxy response.
pub struct ResponseBuildParams {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body_bytes: Vec<u8>,
}

/// Builds an `ApiResponse` from raw upstream response data.
///
/// Binary bodies are base64 encoded; text bodies go through [`parse_body`].
pub fn build_response(params: ResponseBuildParams) -> ApiResponse {
    let ResponseBuildParams {
        status,
        headers,
        body_bytes,
    } = params;

    let content_type = headers.get("content-type").map(|s| s.as_str());
    let body = if is_binary_content(content_type) && !body_bytes.is_empty() {
        Value::String(base64::engine::general_purpose::STANDARD.encode(&body_bytes))
    } else {
        parse_body(&String::from_utf8_lossy(&body_bytes))
    };

    ApiResponse {
        status_code: status,
        body,
        headers,
    }
}
