pub mod history;
pub mod send;

use std::error::Error;

use crate::cli::{Cli, Commands, RequestArgs};
use crate::client::{headers_from_json, HeaderRow, HistoryStore, ProxyClient, RequestComposer, Session};
use crate::config::Config;
use crate::error::ClientError;
use crate::server;

pub type CommandResult<T = ()> = Result<T, Box<dyn Error>>;

/// Applies command line overrides to the environment configuration.
pub fn resolve_config(cli: &Cli, mut config: Config) -> Config {
    if let Some(Commands::Serve { port: Some(port) }) = &cli.command {
        config.port = *port;
    }
    if let Some(proxy_url) = &cli.proxy_url {
        config.proxy_url = proxy_url.clone();
    }
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    config
}

pub async fn run(cli: Cli, config: Config) -> CommandResult {
    match cli.command {
        None | Some(Commands::Serve { .. }) => server::serve(&config).await?,
        Some(Commands::Send(args)) => {
            let mut session = open_session(&config);
            session.composer = compose(&args)?;
            send::run(&mut session).await?;
        }
        Some(Commands::Curl(args)) => println!("{}", compose(&args)?.to_curl()),
        Some(Commands::History(args)) => {
            let mut session = open_session(&config);
            history::run(&mut session, args.command).await?;
        }
    }
    Ok(())
}

pub fn open_session(config: &Config) -> Session {
    Session::new(
        ProxyClient::new(config.proxy_url.clone()),
        HistoryStore::open(&config.data_dir),
    )
}

/// Builds the composer from command line request arguments. JSON headers
/// come first, `-H` rows after them.
pub fn compose(args: &RequestArgs) -> Result<RequestComposer, ClientError> {
    let mut composer = RequestComposer::new(args.method, args.url.clone());

    if let Some(raw) = &args.headers_json {
        composer.headers = headers_from_json(raw)?;
    }
    for line in &args.headers {
        composer.headers.push(HeaderRow::parse(line)?);
    }
    if let Some(body) = &args.body {
        composer.body = body.clone();
    }

    Ok(composer)
}
