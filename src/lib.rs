//! UK postcode sector lookup.
//!
//! Builds one row per active postcode sector from the NSPL extract and
//! joins on region names and the 2011 rural/urban classification.
//!
//! - [`io`]: CSV/Parquet reads and writes on local disk or S3
//! - [`table`]: the in-memory table passed between stages
//! - [`lookup`]: base extraction, contributors, and the [`lookup::Assembler`]
pub mod config;
pub mod io;
pub mod lookup;
pub mod table;

#[cfg(feature = "cli")]
mod cli;
mod error;

#[cfg(feature = "cli")]
pub use cli::*;
pub use config::*;
pub use error::*;

use const_format::concatcp;

// ============================================================================
// SOURCE AND DESTINATION PATHS
// Relative to the configured bucket (or NSPL root for the published lookup).
// ============================================================================
/// NSPL release the lookup is built from.
pub const NSPL_VERSION: &str = "NSPL_AUG_2020_UK";
/// Raw NSPL postcode extract.
pub const NSPL_EXTRACT: &str = concatcp!("raw/Data/", NSPL_VERSION, ".csv");
/// Pre-cleaned NSPL lookup, relative to the NSPL root.
pub const NSPL_LOOKUP: &str = concatcp!("nspl/", NSPL_VERSION, "/clean/lookup_nspl_aug_2020_uk.parquet");
/// Region (GOR) names and codes.
#[rustfmt::skip]
pub const REGION_NAMES:      &str = "raw/Documents/Region names and codes EN as at 12_10 (GOR).csv";
/// Rural/urban (2011) indicator names and codes.
#[rustfmt::skip]
pub const RURAL_URBAN_NAMES: &str = "raw/Documents/Rural Urban (2011) Indicator names and codes GB as at 12_16.csv";
/// The assembled lookup table.
#[rustfmt::skip]
pub const LOOKUP:            &str = "clean/lookup.csv";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Postfix function application.
pub trait Pipe: Sized {
    fn pipe<F, T>(self, f: F) -> T
    where
        F: FnOnce(Self) -> T,
    {
        f(self)
    }
}
impl<T> Pipe for T {}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
