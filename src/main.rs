// tradeflow: a terminal walkthrough of a decentralized marketplace's
// escrow flow, system architecture, and smart contract modules.

mod app;
mod config;
mod content;
mod error;
mod state;
mod terminal;
mod ui;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::Config;
use crate::content::ContentSnapshot;
use crate::error::{Result, TradeFlowError};
use crate::state::TabId;
use crate::terminal::TerminalGuard;

#[derive(Parser, Debug)]
#[command(
    name = "tradeflow",
    version,
    about = "Explore how the marketplace escrow, architecture, and contracts fit together"
)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Style classification passed through from the host, shown in the status bar
    #[arg(long = "class", value_name = "NAME")]
    class_name: Option<String>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, value_name = "FILTER", default_value = "info")]
    log_level: String,

    /// Print one panel as plain text and exit
    #[arg(long, value_enum, value_name = "TAB")]
    print: Option<TabId>,

    /// Width used by --print
    #[arg(long, default_value_t = 100)]
    width: usize,

    /// Print all content as JSON and exit
    #[arg(long, conflicts_with = "print")]
    dump: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_tracing(config::log_dir().as_deref(), &cli.log_level)?;

    if let Some(output) = render_output(&cli)? {
        println!("{output}");
        return Ok(());
    }

    let config = resolve_config(&cli)?;
    let mut app = App::from_config(&config)?;
    let mut guard = TerminalGuard::new(config.mouse)?;
    let result = app.run(guard.terminal_mut());
    drop(guard);

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    result
}

/// Config file (explicit path or the platform default) with CLI overrides applied.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => match Config::load() {
            Err(TradeFlowError::NoConfigDir) => Config::default(),
            other => other?,
        },
    };
    if let Some(class_name) = &cli.class_name {
        config.class_name = Some(class_name.clone());
    }
    Ok(config)
}

/// Text for the non-interactive modes, or `None` when the UI should start.
fn render_output(cli: &Cli) -> Result<Option<String>> {
    if cli.dump {
        return Ok(Some(serde_json::to_string_pretty(&ContentSnapshot::new())?));
    }
    if let Some(tab) = cli.print {
        tracing::info!(?tab, width = cli.width, "printing panel");
        return Ok(Some(ui::render_panel(tab).root.plain_text(cli.width)));
    }
    Ok(None)
}

/// Log to a file under `dir`. The terminal belongs to the UI.
///
/// A log directory that cannot be created, or a subscriber that is already
/// installed, only costs the log file: a warning goes to stderr and the run
/// continues. A malformed filter is still an error.
fn init_tracing(dir: Option<&Path>, log_level: &str) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .map_err(|err| TradeFlowError::Logging(err.to_string()))?;

    let Some(dir) = dir else {
        return Ok(None);
    };
    if let Err(err) = std::fs::create_dir_all(dir) {
        eprintln!(
            "warning: logging disabled, cannot create {}: {err}",
            dir.display()
        );
        return Ok(None);
    }

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, "tradeflow.log"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
    {
        eprintln!("warning: logging disabled: {err}");
        return Ok(None);
    }

    Ok(Some(guard))
}
