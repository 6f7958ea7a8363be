/*
[INPUT]:  CLI arguments, YAML configuration file, COLUMN_* env vars, Ctrl-C
[OUTPUT]: Pretty-printed JSON results of Column API calls on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or shutdown handling
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use column_cli::cli::init::run_init;
use column_cli::commands::{self, Command};
use column_cli::signal;
use column_cli::config::CliConfig;
use column_client::ColumnClient;

#[derive(Parser, Debug)]
#[command(name = "column-cli", version, about = "Command-line client for the Column banking API")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Validate configuration and build the client without calling the API
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    if let Command::Init { output } = &args.command {
        return run_init(output);
    }

    info!(
        config_path = ?args.config_path,
        dry_run = args.dry_run,
        "starting column-cli"
    );

    let config = CliConfig::load(args.config_path.as_deref()).context("load config")?;
    let client = ColumnClient::with_config(config.api_key()?, config.client_config())
        .context("build client")?;
    info!(
        environment = %client.environment(),
        base_url = %client.base_url(),
        "client ready"
    );

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let value = tokio::select! {
        result = commands::execute(&client, args.command) => result?,
        _ = signal::interrupted() => anyhow::bail!("interrupted; request abandoned"),
    };

    let rendered = serde_json::to_string_pretty(&value).context("render output")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
