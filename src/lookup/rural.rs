use super::*;
use crate::Pipe;
use crate::Result;
use crate::io::Adapter;
use crate::io::ReadOptions;
use crate::table::Column;
use crate::table::Kind;
use crate::table::Table;
use regex::Regex;
use std::sync::LazyLock;

/// 2011 rural/urban codes classed as urban, across the England & Wales
/// (letter-digit) and Scotland (digit) schemes. Case-sensitive.
const URBAN: [&str; 9] = ["A1", "B1", "C1", "C2", "1", "2", "3", "4", "5"];

/// Parenthesised country qualifier, e.g. `(England/Wales)`.
static QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([\w/]*\)").expect("qualifier pattern compiles"));

/// Rural/urban classification names by code, plus an `is_urban` flag.
pub struct RuralUrban {
    adapter: Adapter,
    path: String,
}

impl RuralUrban {
    pub fn new(adapter: Adapter, path: String) -> Self {
        Self { adapter, path }
    }
    pub fn is_urban(code: &str) -> bool {
        URBAN.contains(&code)
    }
    /// Derive `is_urban` from the code and drop the country qualifier from the name.
    pub fn clean(table: Table) -> Result<Table> {
        let flags = table
            .text(RURAL_URBAN_CODE)?
            .iter()
            .map(|c| Some(c.as_deref().is_some_and(Self::is_urban) as i64))
            .collect::<Vec<Option<i64>>>();
        let names = table
            .text(RURAL_URBAN_NAME)?
            .iter()
            .map(|n| n.as_deref().map(|n| QUALIFIER.replace_all(n, "").trim().to_string()))
            .collect::<Vec<Option<String>>>();
        table
            .with(Column::text(RURAL_URBAN_NAME, names))?
            .with(Column::integer(IS_URBAN, flags))
    }
}

impl Contributor for RuralUrban {
    fn key(&self) -> &str {
        RURAL_URBAN_CODE
    }
    fn contribute(&self) -> Result<Table> {
        let options = ReadOptions::default()
            .columns(["RU11IND", "RU11NM"])
            .kind("RU11IND", Kind::Text)
            .kind("RU11NM", Kind::Text);
        self.adapter
            .read_csv(&self.path, &options)?
            .rename(&[("RU11IND", RURAL_URBAN_CODE), ("RU11NM", RURAL_URBAN_NAME)])?
            .pipe(Self::clean)
    }
}
