pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;
pub mod server;

pub use config::Config;
pub use error::{AppError, ClientError};
pub use proxy::{execute_request, ApiRequest, ApiResponse, HttpMethod};
