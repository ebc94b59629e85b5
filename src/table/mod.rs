//! In-memory tables exchanged between the storage adapter and the assembler.
mod column;
mod data;
mod kind;
#[allow(clippy::module_inception)]
mod table;

pub use column::*;
pub use data::*;
pub use kind::*;
pub use table::*;
