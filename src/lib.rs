//! Core types and table flow for a pass-and-play hidden-role party game.
//!
//! One shared device walks the table: every seat gets a secret briefing,
//! spies get left in the dark, and the group starts interrogating. The
//! library holds all of the logic (catalog, dealing, reveal sequencing);
//! the `cli` feature adds the terminal frontend that passes the device.

#[cfg(feature = "cli")]
pub mod cli;
pub mod game;
pub mod locations;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index around the table (0-based internally, 1-based in display).
pub type Seat = usize;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Fewest seats a round can brief.
pub const MIN_PLAYERS: usize = 3;
/// Most seats the setup will offer.
pub const MAX_PLAYERS: usize = 25;
/// Every round hides at least one spy.
pub const MIN_SPIES: usize = 1;
/// Seats at a freshly opened table.
pub const DEFAULT_PLAYERS: usize = 4;
/// Spies at a freshly opened table.
pub const DEFAULT_SPIES: usize = 1;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG level to file; the terminal only sees
/// WARN and up so prompts stay clean.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
