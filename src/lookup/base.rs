use super::*;
use crate::Result;
use crate::io::Adapter;
use crate::io::ReadOptions;
use crate::table::Column;
use crate::table::Kind;
use crate::table::Table;

/// NSPL column → our column. Every one of them is read as text.
const NSPL_COLUMNS: [(&str, &str); 4] = [
    ("pcds", POSTCODE),
    ("doterm", TERMINATION_DATE),
    ("rgn", REGION_CODE),
    ("ru11ind", RURAL_URBAN_CODE),
];

/// Read the postcode extract, keeping only the columns used downstream.
///
/// The rural/urban code stays text even where it looks numeric, so that
/// `"1"` still joins with the classification table's code.
pub fn extract(adapter: &Adapter, path: &str, limit: Option<usize>) -> Result<Table> {
    let options = NSPL_COLUMNS
        .iter()
        .fold(ReadOptions::default(), |options, (raw, _)| options.kind(*raw, Kind::Text))
        .columns(NSPL_COLUMNS.iter().map(|(raw, _)| *raw))
        .limit(limit);
    adapter.read_csv(path, &options)?.rename(&NSPL_COLUMNS)
}

/// Drop terminated postcodes, then the termination date itself.
pub fn activate(table: Table) -> Result<Table> {
    let dates = table.column(TERMINATION_DATE)?.data();
    let mask = (0..dates.len())
        .map(|i| dates.is_null(i))
        .collect::<Vec<bool>>();
    table.filter(&mask).drop(TERMINATION_DATE)
}

/// Replace the postcode with its sector.
pub fn sectorize(table: Table) -> Result<Table> {
    let sectors = table
        .text(POSTCODE)?
        .iter()
        .map(|p| p.as_deref().map(Sector::from).map(String::from))
        .collect::<Vec<Option<String>>>();
    table
        .with(Column::text(SECTOR_KEY, sectors))?
        .drop(POSTCODE)
}

/// One row per sector. The first row in input order wins.
pub fn deduplicate(table: Table) -> Result<Table> {
    table.distinct(SECTOR_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> Table {
        Table::new(vec![
            Column::text(POSTCODE, [Some("SW1A 2AA"), Some("SW1A 2AB"), Some("SW1A 2AD"), Some("CF10 1AA")]),
            Column::text(TERMINATION_DATE, [None, Some("202001"), None, None]),
            Column::text(REGION_CODE, [Some("E12000007"), Some("E12000007"), Some("E12000009"), Some("W99999999")]),
            Column::text(RURAL_URBAN_CODE, [Some("A1"), Some("A1"), Some("B1"), Some("1")]),
        ])
        .unwrap()
    }

    #[test]
    fn terminated_postcodes_are_dropped() {
        let table = activate(raw()).unwrap();
        assert_eq!(table.rows(), 3);
        assert!(!table.has(TERMINATION_DATE));
        assert!(
            !table
                .text(POSTCODE)
                .unwrap()
                .contains(&Some("SW1A 2AB".to_string()))
        );
    }
    #[test]
    fn postcode_becomes_sector() {
        let table = sectorize(raw()).unwrap();
        assert!(!table.has(POSTCODE));
        assert_eq!(table.text(SECTOR_KEY).unwrap()[3].as_deref(), Some("CF10 1"));
    }
    #[test]
    fn first_sector_row_wins() {
        let table = activate(raw())
            .and_then(sectorize)
            .and_then(deduplicate)
            .unwrap();
        assert_eq!(
            table.text(SECTOR_KEY).unwrap(),
            &[Some("SW1A 2".to_string()), Some("CF10 1".to_string())]
        );
        assert_eq!(
            table.text(RURAL_URBAN_CODE).unwrap(),
            &[Some("A1".to_string()), Some("1".to_string())]
        );
    }
}
