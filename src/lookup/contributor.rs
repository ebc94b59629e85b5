use crate::Config;
use crate::Result;
use crate::io::Adapter;
use crate::table::Table;

/// A source of attributes to join onto the base sector table.
pub trait Contributor {
    /// Column shared with the base table. Must be unique in [`Contributor::contribute`]'s output.
    fn key(&self) -> &str;
    /// Build the attribute table. Called once per run.
    fn contribute(&self) -> Result<Table>;
}

/// Contributors in the order they are joined.
///
/// Built once at startup and read-only afterwards. Registration order is
/// join order, which fixes nothing but the order errors surface in, since
/// each join is an independent left join on its own key.
#[derive(Default)]
pub struct Registry(Vec<Box<dyn Contributor>>);

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }
    /// The region and rural/urban classifications, reading from `config`'s bucket.
    pub fn standard(adapter: &Adapter, config: &Config) -> Self {
        Self::new()
            .register(super::Region::new(adapter.clone(), config.path(crate::REGION_NAMES)))
            .register(super::RuralUrban::new(adapter.clone(), config.path(crate::RURAL_URBAN_NAMES)))
    }
    pub fn register<C>(mut self, contributor: C) -> Self
    where
        C: Contributor + 'static,
    {
        self.0.push(Box::new(contributor));
        self
    }
    pub fn iter(&self) -> impl Iterator<Item = &dyn Contributor> {
        self.0.iter().map(|c| c.as_ref())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
