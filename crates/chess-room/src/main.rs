//! Chess Room - play games in named rooms from the terminal.

use anyhow::Context;
use chess_room::console::{self, Command};
use chess_room::{MemoryStore, RoomConfig, RoomService};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Chess Room - host chess games in named rooms.
#[derive(Parser)]
#[command(name = "chess-room")]
#[command(about = "Host chess games in named rooms from the terminal")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value_os_t = RoomConfig::default_path())]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = RoomConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!(
        max_rooms = config.max_rooms,
        max_room_name_length = config.max_room_name_length,
        "chess-room ready"
    );

    let mut service = RoomService::new(MemoryStore::new(), config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", console::HELP);

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let command = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(e) => {
                println!("error: {}", e);
                continue;
            }
        };
        match console::execute(&mut service, &command) {
            Ok(out) if out.is_empty() => {}
            Ok(out) => println!("{}", out),
            Err(e) => println!("error: {}", e),
        }
        stdout.flush()?;
    }

    tracing::info!("shutting down");
    Ok(())
}
