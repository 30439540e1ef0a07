use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod app;
mod config;
mod render;
mod repl;

use app::GameApp;
use config::CliConfig;
use shiritori::ShiritoriConfig;

#[derive(Parser)]
#[command(name = "shiritori")]
#[command(about = "Two-player Shiritori in the terminal")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Offline word list used instead of the online dictionary
    #[arg(short, long)]
    word_list: Option<PathBuf>,

    /// Seconds per turn
    #[arg(short, long)]
    turn_seconds: Option<u32>,

    /// Countdown value below which the timer is shown as a warning
    #[arg(long, default_value = "4")]
    warn_below: u32,

    /// File used to load and save the input history
    #[arg(long)]
    history: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // SHIRITORI_LOG_* select level, format and output; stderr by default
    shiritori::error::logging::init_from_env().map_err(|e| anyhow::anyhow!(e))?;

    let cli = Cli::parse();

    let mut engine = match &cli.config {
        Some(path) => ShiritoriConfig::from_file(path)?,
        None => ShiritoriConfig::default(),
    };
    if let Some(word_list) = cli.word_list {
        engine.dictionary.word_list = Some(word_list);
    }
    if let Some(turn_seconds) = cli.turn_seconds {
        engine.game.turn_seconds = turn_seconds;
    }
    engine.validate()?;

    let config = CliConfig {
        engine,
        warn_below_seconds: cli.warn_below,
        history_file: cli.history,
    };

    let mut app = GameApp::new(config)?;
    app.run().await?;

    Ok(())
}
