//! Command line encoder for zkSync-style layer-2 transactions.

#[macro_use]
extern crate zktx;

use clap::Parser;

mod commands;
mod helpers;

#[derive(Debug, Parser)]
#[command(version, about = "Encode and hash zkSync transactions")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

fn main() -> anyhow::Result<()> {
    // Install the tracing subscriber that will listen for events and filters. We try to use the
    // `RUST_LOG` environment variable and default to RUST_LOG=info if unset.
    #[cfg(feature = "dev")]
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    #[cfg(feature = "dev")]
    std::panic::set_hook(Box::new(|info| {
        if std::env::var_os("RUST_BACKTRACE").is_some() {
            dev_error!("panic happens: {info}");
            let bt = std::backtrace::Backtrace::force_capture();
            dev_error!("backtrace:\n{bt}");
        }
    }));

    Cli::parse().command.run()
}
