use super::*;
use crate::Config;
use crate::Result;
use crate::io::Adapter;
use crate::io::Format;
use crate::io::WriteOptions;
use crate::table::Table;

/// Per-run knobs.
#[derive(Debug, Clone, Default)]
pub struct Run {
    /// Read at most this many rows of the postcode extract.
    pub limit: Option<usize>,
    /// Destination overriding `clean/lookup.csv` under the bucket.
    /// The format follows the extension.
    pub output: Option<String>,
}

/// Builds the sector lookup table.
///
/// A run goes extract → filter → deduplicate → contribute, then
/// lowercases text, sorts columns and writes once at the very end.
/// Any failure aborts the run before the write, so nothing partial lands.
pub struct Assembler {
    adapter: Adapter,
    config: Config,
    registry: Registry,
}

impl Assembler {
    pub fn new(config: Config, registry: Registry) -> Self {
        Self {
            adapter: Adapter::from(&config),
            config,
            registry,
        }
    }
    /// Assembler with the region and rural/urban contributors.
    pub fn standard(config: Config) -> Self {
        let registry = Registry::standard(&Adapter::from(&config), &config);
        Self::new(config, registry)
    }

    /// The base sector table: active postcodes only, one row per sector.
    pub fn base(&self, limit: Option<usize>) -> Result<Table> {
        let ref path = self.config.path(crate::NSPL_EXTRACT);
        log::info!("extracting postcodes from {}", path);
        let table = extract(&self.adapter, path, limit)?;
        let total = table.rows();
        let table = activate(table)?;
        log::info!("{} of {} postcodes active", table.rows(), total);
        let table = deduplicate(sectorize(table)?)?;
        log::info!("{} distinct sectors", table.rows());
        Ok(table)
    }

    /// Left join every registered contributor, in registration order.
    pub fn contribute(&self, base: Table) -> Result<Table> {
        match self.registry.is_empty() {
            true => log::warn!("no contributors registered"),
            false => log::info!("joining {} contributors", self.registry.len()),
        }
        self.registry.iter().try_fold(base, |table, contributor| {
            let attributes = contributor.contribute()?;
            log::info!(
                "joining {} attribute rows on {}",
                attributes.rows(),
                contributor.key()
            );
            table.merge(&attributes, contributor.key())
        })
    }

    pub fn run(&self, run: &Run) -> Result<Table> {
        let table = self.base(run.limit)?;
        let table = normalize(self.contribute(table)?);
        let ref output = run
            .output
            .clone()
            .unwrap_or_else(|| self.config.path(crate::LOOKUP));
        self.adapter
            .write(&table, output, Format::infer(output), &WriteOptions::default())?;
        Ok(table)
    }
}

/// Lowercase text for consistent capitalisation and fix the column order.
pub fn normalize(table: Table) -> Table {
    table.lowercase().sorted()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::table::Column;

    /// Contributor serving a fixed table.
    struct Fixed(&'static str, Table);

    impl Contributor for Fixed {
        fn key(&self) -> &str {
            self.0
        }
        fn contribute(&self) -> Result<Table> {
            Ok(self.1.clone())
        }
    }

    fn base() -> Table {
        Table::new(vec![
            Column::text(SECTOR_KEY, [Some("SW1A 2"), Some("LL57 4")]),
            Column::text(REGION_CODE, [Some("E12000007"), Some("W99999999")]),
        ])
        .unwrap()
    }
    fn assembler(contributor: Fixed) -> Assembler {
        Assembler::new(Config::default(), Registry::new().register(contributor))
    }

    #[test]
    fn contributes_in_registration_order() {
        let names = Table::new(vec![
            Column::text(REGION_CODE, [Some("E12000007")]),
            Column::text(REGION_NAME, [Some("London")]),
        ])
        .unwrap();
        let table = assembler(Fixed(REGION_CODE, names))
            .contribute(base())
            .unwrap();
        assert_eq!(table.names().collect::<Vec<_>>(), [SECTOR_KEY, REGION_CODE, REGION_NAME]);
        assert_eq!(
            table.text(REGION_NAME).unwrap(),
            &[Some("London".to_string()), None]
        );
    }
    #[test]
    fn duplicate_attribute_key_aborts() {
        let names = Table::new(vec![
            Column::text(REGION_CODE, [Some("E12000007"), Some("E12000007")]),
            Column::text(REGION_NAME, [Some("London"), Some("Greater London")]),
        ])
        .unwrap();
        let err = assembler(Fixed(REGION_CODE, names))
            .contribute(base())
            .unwrap_err();
        assert!(matches!(err, Error::Cardinality { count: 2, .. }));
    }
    #[test]
    fn normalize_lowercases_and_sorts() {
        let table = normalize(base());
        assert_eq!(table.names().collect::<Vec<_>>(), [REGION_CODE, SECTOR_KEY]);
        assert_eq!(table.text(SECTOR_KEY).unwrap()[0].as_deref(), Some("sw1a 2"));
    }
}
