//! The compose, send, view, record cycle.

use chrono::Utc;

use super::composer::RequestComposer;
use super::history::{HistoryEntry, HistoryStore};
use super::invoker::ProxyClient;
use super::viewer::ResponseView;
use crate::error::ClientError;

/// One tester session: the form, the response pane and the history, bound to
/// a proxy.
#[derive(Debug)]
pub struct Session {
    pub composer: RequestComposer,
    pub view: ResponseView,
    pub history: HistoryStore,
    client: ProxyClient,
}

impl Session {
    pub fn new(client: ProxyClient, history: HistoryStore) -> Self {
        Self {
            composer: RequestComposer::default(),
            view: ResponseView::Empty,
            history,
            client,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, ResponseView::Loading)
    }

    /// Sends the composed request.
    ///
    /// The previous response is cleared first. Invalid JSON aborts before any
    /// network call; both that and a proxy transport failure leave the error
    /// in the view and write no history. Any decoded proxy envelope is a
    /// success and is recorded.
    pub async fn send(&mut self) -> Result<(), ClientError> {
        self.view = ResponseView::Loading;

        let request = match self.composer.build_request() {
            Ok(request) => request,
            Err(e) => {
                self.view = ResponseView::Error(e.to_string());
                return Err(e);
            }
        };

        match self.client.send(&request).await {
            Ok(response) => {
                self.view = ResponseView::Response(response);
                let entry = HistoryEntry::from_composer(&self.composer, Utc::now().timestamp_millis());
                if let Err(e) = self.history.push(entry) {
                    tracing::warn!(error = %e, "Failed to record history");
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = ?e, "Proxy call failed");
                self.view = ResponseView::Error(e.to_string());
                Err(e)
            }
        }
    }

    /// Loads a history entry back into the composer.
    pub fn replay(&mut self, id: i64) -> Result<(), ClientError> {
        let entry = self
            .history
            .get(id)
            .ok_or(ClientError::UnknownHistoryEntry(id))?;
        self.composer.load(entry);
        Ok(())
    }

    pub fn clear_history(&mut self) -> Result<(), ClientError> {
        self.history.clear()?;
        Ok(())
    }

    pub fn curl(&self) -> String {
        self.composer.to_curl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::HttpMethod;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn proxy_returning(status: u16) -> MockServer {
        let proxy = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "statusCode": status,
                "body": {"ok": status < 400},
                "headers": {}
            })))
            .mount(&proxy)
            .await;
        proxy
    }

    #[tokio::test]
    async fn test_successful_send_updates_view_and_history() {
        let proxy = proxy_returning(200).await;
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(ProxyClient::new(proxy.uri()), HistoryStore::open(dir.path()));
        session.composer = RequestComposer::new(HttpMethod::Post, "https://example.com/items")
            .with_header("Content-Type", "application/json")
            .with_header("", "dropped")
            .with_body("{\"a\": 1}");

        session.send().await.unwrap();

        assert_eq!(session.view.response().unwrap().status_code, 200);
        assert_eq!(session.history.len(), 1);
        let entry = &session.history.entries()[0];
        assert_eq!(entry.method, HttpMethod::Post);
        assert_eq!(entry.body, "{\"a\": 1}");
        // history keeps the rows as typed
        assert_eq!(entry.headers.len(), 2);
    }

    #[tokio::test]
    async fn test_history_write_failure_does_not_fail_send() {
        let proxy = proxy_returning(200).await;
        let dir = TempDir::new().unwrap();
        let not_a_dir = dir.path().join("data");
        std::fs::write(&not_a_dir, "plain file").unwrap();

        let mut session = Session::new(ProxyClient::new(proxy.uri()), HistoryStore::open(&not_a_dir));
        session.send().await.unwrap();

        assert_eq!(session.view.response().unwrap().status_code, 200);
        assert_eq!(session.history.len(), 1);
        assert!(!session.history.path().exists());
    }

    #[tokio::test]
    async fn test_upstream_error_status_is_recorded() {
        let proxy = proxy_returning(500).await;
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(ProxyClient::new(proxy.uri()), HistoryStore::open(dir.path()));

        session.send().await.unwrap();

        assert_eq!(session.view.response().unwrap().status_code, 500);
        assert_eq!(session.history.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_body_makes_no_call_and_no_history() {
        let proxy = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&proxy)
            .await;

        let dir = TempDir::new().unwrap();
        let mut session = Session::new(ProxyClient::new(proxy.uri()), HistoryStore::open(dir.path()));
        session.composer.body = "{broken".to_string();

        let err = session.send().await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidBody(_)));
        assert_eq!(session.view.error(), Some("Invalid JSON format in Body input."));
        assert!(session.history.is_empty());
    }

    #[tokio::test]
    async fn test_connection_failure_clears_previous_response() {
        let proxy = proxy_returning(200).await;
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(ProxyClient::new(proxy.uri()), HistoryStore::open(dir.path()));
        session.send().await.unwrap();
        assert!(session.view.response().is_some());

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let dead = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        session.client = ProxyClient::new(dead);

        let err = session.send().await.unwrap_err();
        assert!(matches!(err, ClientError::Connection(_)));
        assert!(session.view.response().is_none());
        assert_eq!(session.view.error(), Some("Failed to connect to the backend proxy."));
        assert_eq!(session.history.len(), 1);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_replay_loads_entry_into_composer() {
        let proxy = proxy_returning(200).await;
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(ProxyClient::new(proxy.uri()), HistoryStore::open(dir.path()));
        session.composer = RequestComposer::new(HttpMethod::Delete, "https://example.com/items/9");
        session.send().await.unwrap();
        let id = session.history.entries()[0].id;

        session.composer = RequestComposer::default();
        session.replay(id).unwrap();
        assert_eq!(session.composer.method, HttpMethod::Delete);
        assert_eq!(session.composer.url, "https://example.com/items/9");
        assert_eq!(
            session.curl(),
            "curl --request DELETE --url 'https://example.com/items/9'"
        );

        assert!(matches!(
            session.replay(id + 1),
            Err(ClientError::UnknownHistoryEntry(_))
        ));
    }
}
