use super::*;
use crate::Pipe;
use crate::Result;
use crate::io::Adapter;
use crate::io::ReadOptions;
use crate::table::Column;
use crate::table::Kind;
use crate::table::Table;

const PSEUDO: &str = "(pseudo)";

/// Region (GOR) names by region code.
pub struct Region {
    adapter: Adapter,
    path: String,
}

impl Region {
    pub fn new(adapter: Adapter, path: String) -> Self {
        Self { adapter, path }
    }
    /// Strip the pseudo-region marker: `"(pseudo) Wales"` becomes `"Wales"`.
    pub fn clean(table: Table) -> Result<Table> {
        let names = table
            .text(REGION_NAME)?
            .iter()
            .map(|n| n.as_deref().map(|n| n.replace(PSEUDO, "").trim().to_string()))
            .collect::<Vec<Option<String>>>();
        table.with(Column::text(REGION_NAME, names))
    }
}

impl Contributor for Region {
    fn key(&self) -> &str {
        REGION_CODE
    }
    fn contribute(&self) -> Result<Table> {
        let options = ReadOptions::default()
            .columns(["GOR10CD", "GOR10NM"])
            .kind("GOR10CD", Kind::Text)
            .kind("GOR10NM", Kind::Text);
        self.adapter
            .read_csv(&self.path, &options)?
            .rename(&[("GOR10CD", REGION_CODE), ("GOR10NM", REGION_NAME)])?
            .pipe(Self::clean)
    }
}
