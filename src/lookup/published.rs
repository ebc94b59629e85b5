use crate::Config;
use crate::Result;
use crate::io::Adapter;
use crate::io::ReadOptions;
use crate::io::join;
use crate::table::Table;

/// The published, already-cleaned NSPL area lookup.
pub fn nspl(adapter: &Adapter, config: &Config, options: &ReadOptions) -> Result<Table> {
    let ref path = join(config.nspl_root(), crate::NSPL_LOOKUP);
    log::info!("fetching nspl lookup from {}", path);
    adapter.read_parquet(path, options)
}
