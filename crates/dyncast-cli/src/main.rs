//! CLI entrypoint for dyncast.

mod cli;
mod commands;
mod config;
mod input;

use clap::Parser;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::Mode;
use config::CliConfig;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let config = CliConfig::discover(cli.config.as_deref(), &cwd)?;
    init_tracing(&config, cli.verbose)?;

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Convert {
            to,
            json,
            strict,
            inputs,
        } => {
            let mode = Mode {
                strict: strict || config.strict,
                json: json || config.json_input,
            };
            commands::convert(&mut out, to, &inputs, mode)
        }
        Command::Xfloat { strict, inputs } => {
            commands::xfloat(&mut out, &inputs, strict || config.strict)
        }
        Command::Stats { stat, values } => commands::stats(&mut out, stat, &values),
        Command::Math { op } => commands::math(&mut out, &op),
        Command::Layouts => commands::layouts(&mut out),
    }
}

fn init_tracing(config: &CliConfig, verbose: bool) -> anyhow::Result<()> {
    let directive: Directive = if verbose {
        tracing::Level::DEBUG.into()
    } else {
        config.log_directive()?
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(directive)
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
