//! Assembly of the postcode sector lookup table.
//!
//! The base table comes from the NSPL extract ([`extract`] → [`activate`]
//! → [`sectorize`] → [`deduplicate`]); every [`Contributor`] in the
//! [`Registry`] then adds its attributes through a validated left join.
mod assembler;
mod base;
mod contributor;
mod published;
mod region;
mod rural;
mod sector;

pub use assembler::*;
pub use base::*;
pub use contributor::*;
pub use published::*;
pub use region::*;
pub use rural::*;
pub use sector::*;

pub const POSTCODE: &str = "postcode";
pub const TERMINATION_DATE: &str = "termination_date";
pub const SECTOR_KEY: &str = "sector_key";
pub const REGION_CODE: &str = "region_code";
pub const REGION_NAME: &str = "region_name";
pub const RURAL_URBAN_CODE: &str = "rural_urban_code";
pub const RURAL_URBAN_NAME: &str = "rural_urban_name";
pub const IS_URBAN: &str = "is_urban";
