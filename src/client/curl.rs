//! curl command line equivalent of a composed request.

use super::composer::HeaderRow;
use crate::proxy::HttpMethod;

/// Wraps `value` in single quotes, escaping embedded quotes as `'\''`.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Builds `curl --request <METHOD> --url '<url>' [--header ...] [--data ...]`.
///
/// Header rows with a blank key or blank value are skipped. The data flag is
/// omitted for GET and for a blank body.
pub fn generate_curl(method: HttpMethod, url: &str, headers: &[HeaderRow], body: &str) -> String {
    let mut parts = vec![
        "curl".to_string(),
        "--request".to_string(),
        method.to_string(),
        "--url".to_string(),
        shell_quote(url),
    ];

    for row in headers {
        let key = row.key.trim();
        if key.is_empty() || row.value.trim().is_empty() {
            continue;
        }
        parts.push("--header".to_string());
        parts.push(shell_quote(&format!("{}: {}", key, row.value)));
    }

    if method != HttpMethod::Get && !body.trim().is_empty() {
        parts.push("--data".to_string());
        parts.push(shell_quote(body));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_without_headers() {
        assert_eq!(
            generate_curl(HttpMethod::Get, "https://example.com/todos/1", &[], ""),
            "curl --request GET --url 'https://example.com/todos/1'"
        );
    }

    #[test]
    fn test_get_omits_data() {
        let cmd = generate_curl(HttpMethod::Get, "https://example.com", &[], "{\"a\":1}");
        assert!(!cmd.contains("--data"));
    }

    #[test]
    fn test_post_with_headers_and_body() {
        let headers = vec![
            HeaderRow::new("Content-Type", "application/json"),
            HeaderRow::new("", "orphan value"),
            HeaderRow::new("X-Empty", "  "),
            HeaderRow::new("Authorization", "Bearer t0k3n"),
        ];
        assert_eq!(
            generate_curl(HttpMethod::Post, "https://example.com/items", &headers, "{\"name\":\"widget\"}"),
            "curl --request POST --url 'https://example.com/items' \
             --header 'Content-Type: application/json' \
             --header 'Authorization: Bearer t0k3n' \
             --data '{\"name\":\"widget\"}'"
        );
    }

    #[test]
    fn test_single_quotes_are_escaped() {
        let headers = vec![HeaderRow::new("X-Note", "it's")];
        let cmd = generate_curl(HttpMethod::Put, "https://example.com/?q='x'", &headers, "{\"s\":\"don't\"}");
        assert_eq!(
            cmd,
            r#"curl --request PUT --url 'https://example.com/?q='\''x'\''' --header 'X-Note: it'\''s' --data '{"s":"don'\''t"}'"#
        );
    }

    #[test]
    fn test_blank_body_omits_data_for_delete() {
        let cmd = generate_curl(HttpMethod::Delete, "https://example.com/items/1", &[], " ");
        assert_eq!(cmd, "curl --request DELETE --url 'https://example.com/items/1'");
    }
}
