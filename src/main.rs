use clap::Parser;
use fake_postman::cli::{Cli, Commands};
use fake_postman::{commands, Config};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = commands::resolve_config(&cli, Config::from_env());

    match commands::run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    let serving = matches!(cli.command, None | Some(Commands::Serve { .. }));
    let default_filter = if serving {
        "fake_postman=debug,tower_http=debug"
    } else if cli.verbose {
        "fake_postman=debug"
    } else {
        "fake_postman=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
