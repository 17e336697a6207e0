//! Request composer, proxy invoker, response viewer and history store.
//!
//! The same rules the embedded page applies in the browser, usable from Rust.

pub mod composer;
pub mod curl;
pub mod history;
pub mod invoker;
pub mod session;
pub mod viewer;

pub use composer::{headers_from_json, HeaderRow, RequestComposer};
pub use curl::generate_curl;
pub use history::{HistoryEntry, HistoryError, HistoryStore, HISTORY_STORAGE_KEY, MAX_HISTORY_ENTRIES};
pub use invoker::ProxyClient;
pub use session::Session;
pub use viewer::{ResponseView, StatusClass};
