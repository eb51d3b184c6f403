use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod format;
mod prompt;
mod store;

fn main() {
    let cli = cli::Cli::parse();

    let config = match config::WalletConfig::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            format::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            format::print_error(&format!("failed to create Tokio runtime: {}", e));
            std::process::exit(1);
        }
    };
    rt.block_on(async {
        if let Err(e) = cli::run(cli, config).await {
            tracing::debug!("command failed: {:?}", e);
            format::print_error(&e.to_string());
            std::process::exit(1);
        }
    });
}
