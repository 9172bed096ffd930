//! Pass-and-play party game for one shared terminal.
//!
//! Walks the table through setup, one secret briefing per seat, and
//! the game-on screen. Options: --players, --spies, --locations, --seed.

use clap::Parser;
use coverup::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seats at the table
    #[arg(long)]
    players: Option<usize>,
    /// Spies hidden among them
    #[arg(long)]
    spies: Option<usize>,
    /// JSON location catalog to play instead of the builtin one
    #[arg(long)]
    locations: Option<String>,
    /// Fixed RNG seed for reproducible deals
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let catalog = match &args.locations {
        Some(path) => locations::Catalog::load(path)?,
        None => locations::Catalog::builtin(),
    };
    let setup = match (args.players, args.spies) {
        (None, None) => game::Setup::default(),
        (players, spies) => game::Setup::try_from((
            players.unwrap_or(DEFAULT_PLAYERS),
            spies.unwrap_or(DEFAULT_SPIES),
        ))?,
    };
    cli::Table::new(catalog, setup, args.seed).run()
}
