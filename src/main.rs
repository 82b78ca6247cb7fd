use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::game::Game;
use connect_four::ui::TextClient;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,

    /// Override player 1's name
    #[arg(long)]
    first: Option<String>,

    /// Override player 2's name
    #[arg(long)]
    second: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(name) = cli.first {
        config.first.name = Some(name);
    }
    if let Some(name) = cli.second {
        config.second.name = Some(name);
    }
    config.validate().context("validating command-line overrides")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .with_context(|| format!("invalid log filter '{}'", config.log.filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut client = TextClient::new(stdin.lock(), io::stdout());
    let (first, second) = client.read_players(&config).context("reading player names")?;

    let mut game = Game::new(first, second);
    client.run(&mut game).context("playing game")?;

    Ok(())
}
