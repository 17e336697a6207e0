use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::proxy::HttpMethod;

#[derive(Parser)]
#[command(name = "fake-postman")]
#[command(about = "Fake Postman - compose HTTP requests and send them through a proxy")]
pub struct Cli {
    /// Base URL of the proxy server
    #[arg(long, global = true)]
    pub proxy_url: Option<String>,

    /// Directory holding the request history
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the proxy server and the web UI (default)
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Send a request through the proxy and print the response
    Send(RequestArgs),

    /// Print the curl equivalent of a request
    Curl(RequestArgs),

    /// Request history commands
    History(HistoryArgs),
}

#[derive(Args, Clone)]
pub struct RequestArgs {
    /// Request URL
    pub url: String,

    /// HTTP method
    #[arg(short = 'X', long = "request", default_value = "GET")]
    pub method: HttpMethod,

    /// Header as 'Key: Value' (repeatable)
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// All headers as one JSON object
    #[arg(long)]
    pub headers_json: Option<String>,

    /// JSON request body
    #[arg(short = 'd', long = "data")]
    pub body: Option<String>,
}

#[derive(Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommands,
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List past requests, newest first
    List,

    /// Show a past request as JSON
    Show {
        /// History entry id
        id: i64,
    },

    /// Send a past request again
    Replay {
        /// History entry id
        id: i64,
    },

    /// Print the curl equivalent of a past request
    Curl {
        /// History entry id
        id: i64,
    },

    /// Delete all history
    Clear,
}
