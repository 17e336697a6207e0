pub mod executor;
pub mod response_builder;
pub mod service;
pub mod types;

pub use executor::execute_request;
pub use response_builder::{build_response, collect_headers, is_binary_content, parse_body, ResponseBuildParams};
pub use service::{HttpProxyService, ProxyFuture, ProxyService};
pub use types::*;
