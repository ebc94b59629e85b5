//! Lookup Binary
//!
//! Builds clean/lookup.csv from the NSPL extract and the ONS
//! classification tables, or copies the published NSPL lookup.
//!
//! Options: build [--output] [--limit], nspl <destination>, --bucket, --profile

use postsector::*;

fn main() -> anyhow::Result<()> {
    log()?;
    Cli::run()
}
