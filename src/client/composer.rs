//! Editable request form state and its conversion into an `ApiRequest`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::history::HistoryEntry;
use crate::error::ClientError;
use crate::proxy::{ApiRequest, HttpMethod};

pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/todos/1";

/// One key/value line of the headers editor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeaderRow {
    pub key: String,
    pub value: String,
}

impl HeaderRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Rows with an empty (after trimming) key never reach the proxy.
    pub fn is_blank(&self) -> bool {
        self.key.trim().is_empty()
    }

    /// Parses a `Key: Value` line as typed on a command line.
    pub fn parse(line: &str) -> Result<Self, ClientError> {
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| ClientError::InvalidInput(format!("Header must be 'Key: Value', got '{}'", line)))?;
        Ok(Self::new(key.trim(), value.trim()))
    }
}

/// Parses the single JSON object headers field into rows, in the order the
/// keys were written. Non-string values are kept as their JSON text.
pub fn headers_from_json(raw: &str) -> Result<Vec<HeaderRow>, ClientError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let object: serde_json::Map<String, Value> =
        serde_json::from_str(raw).map_err(ClientError::InvalidHeaders)?;

    Ok(object
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            HeaderRow { key, value }
        })
        .collect())
}

/// Form state of the request being composed.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestComposer {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<HeaderRow>,
    pub body: String,
}

impl Default for RequestComposer {
    fn default() -> Self {
        Self {
            method: HttpMethod::Get,
            url: DEFAULT_URL.to_string(),
            headers: vec![HeaderRow::new("Accept", "application/json")],
            body: String::new(),
        }
    }
}

impl RequestComposer {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_header(key, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn add_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.push(HeaderRow::new(key, value));
    }

    /// Appends an empty row, as the "add header" button does.
    pub fn add_empty_header(&mut self) {
        self.headers.push(HeaderRow::default());
    }

    pub fn update_header(&mut self, index: usize, key: impl Into<String>, value: impl Into<String>) -> bool {
        match self.headers.get_mut(index) {
            Some(row) => {
                row.key = key.into();
                row.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn remove_header(&mut self, index: usize) -> Option<HeaderRow> {
        (index < self.headers.len()).then(|| self.headers.remove(index))
    }

    /// Headers as submitted: blank-key rows dropped, keys trimmed, later
    /// duplicates win. `None` when nothing remains.
    pub fn header_map(&self) -> Option<HashMap<String, String>> {
        let map: HashMap<String, String> = self
            .headers
            .iter()
            .filter(|row| !row.is_blank())
            .map(|row| (row.key.trim().to_string(), row.value.clone()))
            .collect();

        (!map.is_empty()).then_some(map)
    }

    /// Parsed body, `None` when the input is blank.
    pub fn parsed_body(&self) -> Result<Option<Value>, ClientError> {
        if self.body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&self.body)
            .map(Some)
            .map_err(ClientError::InvalidBody)
    }

    /// Validates the form and builds the envelope sent to the proxy.
    pub fn build_request(&self) -> Result<ApiRequest, ClientError> {
        let body = self.parsed_body()?;
        Ok(ApiRequest {
            url: self.url.clone(),
            method: self.method,
            headers: self.header_map(),
            body,
        })
    }

    /// Replaces the form with a past request.
    pub fn load(&mut self, entry: &HistoryEntry) {
        self.method = entry.method;
        self.url = entry.url.clone();
        self.headers = entry.headers.clone();
        self.body = entry.body.clone();
    }

    /// Equivalent curl invocation of the current form.
    pub fn to_curl(&self) -> String {
        super::curl::generate_curl(self.method, &self.url, &self.headers, &self.body)
    }
}
