//! nordservers
//!
//! Lists NordVPN servers by egress location and prints OpenVPN configs.
//! Payload goes to stdout; the table header, progress, and errors go to
//! stderr.

use std::io;

use clap::Parser;
use nordservers::cli::{report, run, usage_exit_code, Cli};
use nordservers::client::HttpFetcher;
use nordservers_core::ProviderConfig;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = usage_exit_code(&e);
            // Help and version go to stdout, usage errors to stderr.
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_tracing(cli.verbose);

    let mode = cli.mode();
    tracing::debug!(?mode, "mode selected");

    let fetcher = match HttpFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(e) => std::process::exit(report(&e, cli.verbose)),
    };
    let config = ProviderConfig::default();

    let mut out = io::stdout().lock();
    let mut diag = io::stderr();

    if let Err(e) = run(&mode, &fetcher, &config, &mut out, &mut diag).await {
        std::process::exit(report(&e, cli.verbose));
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time()
                .with_target(false),
        )
        .init();
}
