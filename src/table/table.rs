use super::Column;
use super::Data;
use crate::Error;
use crate::Pipe;
use crate::Result;
use std::collections::HashMap;
use std::collections::HashSet;

/// An ordered sequence of equally long, uniquely named columns.
///
/// Every transformation consumes the table and hands back a new one,
/// so a failed step never leaves a half-modified table behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Assemble a table, rejecting ragged or duplicated columns.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let ref mut seen = HashSet::new();
        if let Some(c) = columns.iter().find(|c| !seen.insert(c.name())) {
            return Err(Error::Schema(format!("duplicate column `{}`", c.name())));
        }
        if let Some(c) = columns.iter().find(|c| c.len() != columns[0].len()) {
            return Err(Error::Schema(format!(
                "column `{}` has {} rows, expected {}",
                c.name(),
                c.len(),
                columns[0].len()
            )));
        }
        Ok(Self { columns })
    }

    pub fn rows(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }
    pub fn width(&self) -> usize {
        self.columns.len()
    }
    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.width())
    }
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }
    pub fn has(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| Error::Schema(format!("no column `{}`", name)))
    }

    /// Text values of `name`, failing if the column holds numbers.
    pub fn text(&self, name: &str) -> Result<&[Option<String>]> {
        match self.column(name)?.data() {
            Data::Text(values) => Ok(values),
            other => Err(Error::Schema(format!("column `{}` is {}, not text", name, other.kind()))),
        }
    }
    /// Integer values of `name`, failing if the column holds text or floats.
    pub fn integer(&self, name: &str) -> Result<&[Option<i64>]> {
        match self.column(name)?.data() {
            Data::Integer(values) => Ok(values),
            other => Err(Error::Schema(format!("column `{}` is {}, not integer", name, other.kind()))),
        }
    }

    /// Keep only `names`, in the given order.
    pub fn select<S: AsRef<str>>(self, names: &[S]) -> Result<Self> {
        let mut columns = self.columns;
        names
            .iter()
            .map(|name| {
                columns
                    .iter()
                    .position(|c| c.name() == name.as_ref())
                    .map(|i| columns.swap_remove(i))
                    .ok_or_else(|| Error::Schema(format!("no column `{}`", name.as_ref())))
            })
            .collect::<Result<Vec<_>>>()
            .and_then(Self::new)
    }
    /// Rename columns by (from, to) pairs. Unknown sources are ignored.
    pub fn rename(self, pairs: &[(&str, &str)]) -> Result<Self> {
        self.columns
            .into_iter()
            .map(|c| match pairs.iter().find(|(from, _)| *from == c.name()) {
                Some((_, to)) => c.rename(*to),
                None => c,
            })
            .collect::<Vec<_>>()
            .pipe(Self::new)
    }
    pub fn drop(self, name: &str) -> Result<Self> {
        match self.has(name) {
            true => Ok(Self {
                columns: self.columns.into_iter().filter(|c| c.name() != name).collect(),
            }),
            false => Err(Error::Schema(format!("no column `{}`", name))),
        }
    }
    /// Append `column`, or replace the column of the same name in place.
    pub fn with(mut self, column: Column) -> Result<Self> {
        if !self.columns.is_empty() && column.len() != self.rows() {
            return Err(Error::Schema(format!(
                "column `{}` has {} rows, expected {}",
                column.name(),
                column.len(),
                self.rows()
            )));
        }
        match self.columns.iter().position(|c| c.name() == column.name()) {
            Some(i) => self.columns[i] = column,
            None => self.columns.push(column),
        }
        Ok(self)
    }
    /// Rows where `mask` is true.
    pub fn filter(self, mask: &[bool]) -> Self {
        Self {
            columns: self
                .columns
                .into_iter()
                .map(|c| c.map(|d| d.filter(mask)))
                .collect(),
        }
    }

    /// One row per distinct value of `key`: the first one encountered.
    /// Nulls form a group of their own.
    pub fn distinct(self, key: &str) -> Result<Self> {
        let ref data = self.column(key)?.data().clone();
        let ref mut seen = HashSet::new();
        let mask = (0..data.len())
            .map(|i| seen.insert(data.render(i)))
            .collect::<Vec<bool>>();
        Ok(self.filter(&mask))
    }

    /// Left join `right` on the column `key` that both tables carry.
    ///
    /// Validated many-to-one: every non-null key may appear at most once
    /// in `right`, otherwise the join fails with [`Error::Cardinality`]
    /// and `self` is dropped unmodified. Left rows without a match get
    /// nulls in every column contributed by `right`. Null keys never match.
    pub fn merge(self, right: &Table, key: &str) -> Result<Self> {
        let lhs = self.column(key)?.data();
        let rhs = right.column(key)?.data();
        if lhs.kind() != rhs.kind() {
            return Err(Error::Schema(format!(
                "join key `{}` is {} on the left but {} on the right",
                key,
                lhs.kind(),
                rhs.kind()
            )));
        }
        if let Some(c) = right
            .columns
            .iter()
            .filter(|c| c.name() != key)
            .find(|c| self.has(c.name()))
        {
            return Err(Error::Schema(format!("column `{}` exists on both sides", c.name())));
        }
        let index = Self::unique(rhs, key)?;
        let indices = (0..lhs.len())
            .map(|i| lhs.render(i).and_then(|k| index.get(&k).copied()))
            .collect::<Vec<Option<usize>>>();
        let joined = right
            .columns
            .iter()
            .filter(|c| c.name() != key)
            .map(|c| Column::new(c.name(), c.data().take(&indices)))
            .collect::<Vec<Column>>();
        self.columns
            .into_iter()
            .chain(joined)
            .collect::<Vec<_>>()
            .pipe(Self::new)
    }

    /// Position of each non-null key, or the first key that repeats.
    fn unique(keys: &Data, name: &str) -> Result<HashMap<String, usize>> {
        let mut counts = HashMap::<String, usize>::new();
        (0..keys.len())
            .filter_map(|i| keys.render(i))
            .for_each(|k| *counts.entry(k).or_default() += 1);
        if let Some((value, count)) = (0..keys.len())
            .filter_map(|i| keys.render(i))
            .find_map(|k| counts.get(&k).filter(|n| **n > 1).map(|n| (k, *n)))
        {
            return Err(Error::Cardinality {
                key: name.to_string(),
                value,
                count,
            });
        }
        Ok((0..keys.len())
            .filter_map(|i| keys.render(i).map(|k| (k, i)))
            .collect())
    }

    /// Lowercase every text column.
    pub fn lowercase(self) -> Self {
        Self {
            columns: self
                .columns
                .into_iter()
                .map(|c| c.map(Data::lowercase))
                .collect(),
        }
    }
    /// Columns in alphabetical order of name.
    pub fn sorted(mut self) -> Self {
        self.columns.sort_by(|a, b| a.name().cmp(b.name()));
        self
    }
}
