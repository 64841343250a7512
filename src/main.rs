//! bcp-banner - BCP-Shell banner generator.

mod adapters;
mod cli;
mod config;
mod context;
mod error;
mod generator;
mod output;
mod ports;
mod render;
mod style;

use std::path::Path;
use std::process;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::BannerError;
use crate::generator::{create_banner, list_banners};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "bcp_banner=debug" } else { "bcp_banner=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), BannerError> {
    match cli.command {
        Some(Commands::Create { name, text, style }) => {
            let (config, ctx) = load_context(cli.config.as_deref(), cli.root.as_deref())?;
            let style = style.unwrap_or_else(|| config.default_style());
            let path = create_banner(&ctx, &name, &text, style)?;
            println!("✓ Banner created: {name}");
            println!("  Location: {}", path.display());
        }
        Some(Commands::List) => {
            let (_, ctx) = load_context(cli.config.as_deref(), cli.root.as_deref())?;
            let names = list_banners(&ctx)?;
            println!("Available banners:");
            println!("{}", "-".repeat(40));
            for name in names {
                println!("  • {name}");
            }
        }
        Some(Commands::Unknown(args)) => {
            tracing::debug!(?args, "unrecognized subcommand");
            print_help()?;
        }
        None => print_help()?,
    }

    Ok(())
}

/// Load the config file and build a live context on the resolved storage root.
fn load_context(
    config_override: Option<&Path>,
    root_override: Option<&Path>,
) -> Result<(Config, ServiceContext), BannerError> {
    let config_path = config::discover_config_path(config_override);
    let config = Config::load(&config_path).map_err(BannerError::Config)?;

    let root = config.storage_root(root_override)?;
    tracing::debug!(root = %root.display(), config = %config_path.display(), "resolved storage");
    Ok((config, ServiceContext::live(root)))
}

fn print_help() -> Result<(), BannerError> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}
