use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use minefield_core::{CellCount, Coord};

use settings::{FileSettings, Overrides, Settings};

mod command;
mod render;
mod session;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal minesweeper", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width, clamped to the configured maximum
    #[arg(short = 'W', long)]
    width: Option<Coord>,

    /// Board height, clamped to the configured maximum
    #[arg(short = 'H', long)]
    height: Option<Coord>,

    /// Number of mines, clamped to leave at least one safe cell
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with default parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reject reveals after a mine was hit
    #[arg(long)]
    locked: bool,

    /// Print reveals and boards as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("seed: {:?}", args.seed);

    let file = match &args.config {
        Some(path) => FileSettings::load(path)?,
        None => FileSettings::default(),
    };
    let overrides = Overrides {
        width: args.width,
        height: args.height,
        mines: args.mines,
        locked: args.locked,
    };
    let settings = Settings::resolve(file, overrides);

    let mut session = session::Session::new(settings, args.seed, args.json);
    session.run(io::stdin().lock(), &mut io::stdout().lock())
}
