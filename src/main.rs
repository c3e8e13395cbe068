use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use cuppa::config::CuppaConfig;
use cuppa::report::{render_json, render_text};
use cuppa::upstream::lookup::search_all;
use cuppa::upstream::providers::{build_client, create_provider};
use cuppa::upstream::types::ProviderType;

#[derive(Parser)]
#[command(name = "cuppa")]
#[command(version, about = "Find the releases a package has published upstream")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/cuppa/config.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every release of the given packages
    Releases {
        /// Provider to query
        #[arg(long, default_value = "cpan")]
        provider: ProviderType,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Package names
        #[arg(required = true)]
        names: Vec<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = CuppaConfig::load_or_default(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(file) = cli.log_file {
        config.logging.file = Some(file);
    }

    let _guard = cuppa::logging::init(&config.logging)?;

    match cli.command {
        Command::Releases {
            provider,
            json,
            names,
        } => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(releases(&config, provider, json, &names)),
    }
}

async fn releases(
    config: &CuppaConfig,
    provider_type: ProviderType,
    json: bool,
    names: &[String],
) -> anyhow::Result<ExitCode> {
    let client = build_client(&config.http).context("failed to create HTTP client")?;
    let provider = create_provider(provider_type, config, client)?;

    let lookups = search_all(provider.as_ref(), names).await;

    if json {
        println!("{}", render_json(&lookups)?);
    } else {
        print!("{}", render_text(&lookups));
    }

    if lookups.iter().any(|lookup| lookup.is_error()) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
