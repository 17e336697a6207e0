//! Text rendering of the last response, error, or idle state.

use serde::Serialize;

use crate::proxy::ApiResponse;

pub const EMPTY_MESSAGE: &str = "Enter a URL and click Send to get a response.";
pub const LOADING_MESSAGE: &str = "Sending...";

/// Colour class of the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Ok,
    Err,
}

impl StatusClass {
    pub fn of(status_code: u16) -> Self {
        if status_code < 400 {
            StatusClass::Ok
        } else {
            StatusClass::Err
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatusClass::Ok => "status-ok",
            StatusClass::Err => "status-err",
        }
    }
}

/// What the response pane currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResponseView {
    #[default]
    Empty,
    Loading,
    Error(String),
    Response(ApiResponse),
}

impl ResponseView {
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            ResponseView::Response(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ResponseView::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        match self {
            ResponseView::Empty => EMPTY_MESSAGE.to_string(),
            ResponseView::Loading => LOADING_MESSAGE.to_string(),
            ResponseView::Error(message) => message.clone(),
            ResponseView::Response(response) => render_response(response),
        }
    }
}

/// Two-space indented JSON; empty when the value cannot be serialized.
pub fn pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

fn render_response(response: &ApiResponse) -> String {
    format!(
        "Status: {} ({})\n\nBody\n{}\n\nHeaders\n{}",
        response.status_code,
        StatusClass::of(response.status_code).css_class(),
        pretty_json(&response.body),
        pretty_json(&response.headers),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_status_class_boundary() {
        assert_eq!(StatusClass::of(200), StatusClass::Ok);
        assert_eq!(StatusClass::of(399), StatusClass::Ok);
        assert_eq!(StatusClass::of(400), StatusClass::Err);
        assert_eq!(StatusClass::of(503).css_class(), "status-err");
    }

    #[test]
    fn test_render_idle_states() {
        assert_eq!(ResponseView::Empty.render(), EMPTY_MESSAGE);
        assert_eq!(ResponseView::Loading.render(), "Sending...");
        assert_eq!(
            ResponseView::Error("Failed to connect to the backend proxy.".to_string()).render(),
            "Failed to connect to the backend proxy."
        );
    }

    #[test]
    fn test_render_response() {
        let view = ResponseView::Response(ApiResponse {
            status_code: 201,
            body: json!({"id": 7}),
            headers: BTreeMap::from([("server".to_string(), "mock".to_string())]),
        });

        assert_eq!(
            view.render(),
            "Status: 201 (status-ok)\n\nBody\n{\n  \"id\": 7\n}\n\nHeaders\n{\n  \"server\": \"mock\"\n}"
        );
        assert!(view.response().is_some());
        assert!(view.error().is_none());
    }

    #[test]
    fn test_render_null_body() {
        let view = ResponseView::Response(ApiResponse {
            status_code: 404,
            body: serde_json::Value::Null,
            headers: BTreeMap::new(),
        });
        assert_eq!(
            view.render(),
            "Status: 404 (status-err)\n\nBody\nnull\n\nHeaders\n{}"
        );
    }
}
