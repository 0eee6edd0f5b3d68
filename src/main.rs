use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::error;

use changelog_resolver::config::{ResolverConfig, load_config};
use changelog_resolver::logging::init_logging;
use changelog_resolver::output::{OutputFormat, render_resolution, render_versions};
use changelog_resolver::source::{DocumentSource, LocalFileSource, RemoteSource, SourceSelector};

#[derive(Parser)]
#[command(name = "changelog-resolver")]
#[command(version, about = "Show the changelog entry for an installed or requested version")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file (defaults to $XDG_CONFIG_HOME/changelog-resolver/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Local changelog file
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Remote changelog URL, used for versions newer than the installed one
    #[arg(long, global = true)]
    url: Option<String>,

    /// Currently installed version
    #[arg(long, global = true)]
    installed: Option<String>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Log level or filter directives
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Write log records as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show one changelog entry (the latest when no version is given)
    Show {
        /// Version to show, with or without a leading `v`
        version: Option<String>,
    },
    /// List every version in the changelog, newest first
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_logging(&cli.log_level, cli.log_json).ok();

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let config = apply_overrides(load_config(cli.config.as_deref())?, &cli);
    let selector = build_selector(&config)?;
    let format = OutputFormat::from_json_flag(cli.json);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let output = match cli.command {
        Some(Command::List) => {
            let versions = runtime.block_on(selector.list_versions())?;
            render_versions(&versions, format)?
        }
        Some(Command::Show { version }) => {
            let resolution = runtime.block_on(
                selector.resolve(version.as_deref(), config.installed_version.as_deref()),
            )?;
            render_resolution(&resolution, format)?
        }
        None => {
            let resolution = runtime.block_on(selector.resolve(None, None))?;
            render_resolution(&resolution, format)?
        }
    };

    Ok(output)
}

fn apply_overrides(mut config: ResolverConfig, cli: &Cli) -> ResolverConfig {
    if let Some(file) = &cli.file {
        config.source.local_path = file.clone();
    }
    if let Some(url) = &cli.url {
        config.source.remote_url = Some(url.clone());
    }
    if let Some(installed) = &cli.installed {
        config.installed_version = Some(installed.clone());
    }
    config
}

fn build_selector(config: &ResolverConfig) -> anyhow::Result<SourceSelector> {
    let local: Arc<dyn DocumentSource> =
        Arc::new(LocalFileSource::new(config.source.local_path.clone()));

    let remote = match &config.source.remote_url {
        Some(url) => {
            let source = RemoteSource::new(url, config.source.fetch_timeout())
                .context("Failed to create HTTP client")?;
            Some(Arc::new(source) as Arc<dyn DocumentSource>)
        }
        None => None,
    };

    Ok(SourceSelector::new(local, remote))
}
