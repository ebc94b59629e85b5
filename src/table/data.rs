use super::Kind;
use crate::Error;
use crate::Result;

/// Nullable values of a single column, stored by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    Text(Vec<Option<String>>),
    Integer(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
}

impl Data {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Text(_) => Kind::Text,
            Self::Integer(_) => Kind::Integer,
            Self::Float(_) => Kind::Float,
        }
    }
    pub fn len(&self) -> usize {
        match self {
            Self::Text(v) => v.len(),
            Self::Integer(v) => v.len(),
            Self::Float(v) => v.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn is_null(&self, i: usize) -> bool {
        match self {
            Self::Text(v) => v[i].is_none(),
            Self::Integer(v) => v[i].is_none(),
            Self::Float(v) => v[i].is_none(),
        }
    }

    /// Textual form of row `i`, as written to CSV and compared in joins.
    /// Floats always keep a decimal point.
    pub fn render(&self, i: usize) -> Option<String> {
        match self {
            Self::Text(v) => v[i].clone(),
            Self::Integer(v) => v[i].map(|x| x.to_string()),
            Self::Float(v) => v[i].map(|x| match x.is_finite() && x.fract() == 0. {
                true => format!("{:.1}", x),
                false => x.to_string(),
            }),
        }
    }

    /// Cast raw text into `kind`.
    /// `column` only names the culprit when a value does not fit.
    pub fn parse(column: &str, raw: Vec<Option<String>>, kind: Kind) -> Result<Self> {
        match kind {
            Kind::Text => Ok(Self::Text(raw)),
            Kind::Integer => raw
                .into_iter()
                .map(|v| v.map(|s| coerce::<i64>(column, kind, s)).transpose())
                .collect::<Result<Vec<_>>>()
                .map(Self::Integer),
            Kind::Float => raw
                .into_iter()
                .map(|v| v.map(|s| coerce::<f64>(column, kind, s)).transpose())
                .collect::<Result<Vec<_>>>()
                .map(Self::Float),
        }
    }

    /// Rows where `mask` is true, in order.
    pub fn filter(&self, mask: &[bool]) -> Self {
        match self {
            Self::Text(v) => Self::Text(select(v, mask)),
            Self::Integer(v) => Self::Integer(select(v, mask)),
            Self::Float(v) => Self::Float(select(v, mask)),
        }
    }

    /// Gather rows by index. `None` yields a null row.
    pub fn take(&self, indices: &[Option<usize>]) -> Self {
        match self {
            Self::Text(v) => Self::Text(gather(v, indices)),
            Self::Integer(v) => Self::Integer(gather(v, indices)),
            Self::Float(v) => Self::Float(gather(v, indices)),
        }
    }

    /// Lowercase text in place. Numbers are untouched.
    pub fn lowercase(self) -> Self {
        match self {
            Self::Text(v) => Self::Text(
                v.into_iter()
                    .map(|s| s.map(|s| s.to_lowercase()))
                    .collect(),
            ),
            other => other,
        }
    }
}

fn coerce<T: std::str::FromStr>(column: &str, kind: Kind, value: String) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| Error::TypeCoercion {
        column: column.to_string(),
        kind,
        value,
    })
}

fn select<T: Clone>(values: &[T], mask: &[bool]) -> Vec<T> {
    values
        .iter()
        .zip(mask)
        .filter(|(_, keep)| **keep)
        .map(|(v, _)| v.clone())
        .collect()
}

fn gather<T: Clone>(values: &[Option<T>], indices: &[Option<usize>]) -> Vec<Option<T>> {
    indices
        .iter()
        .map(|i| i.and_then(|i| values[i].clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(String::from)).collect()
    }

    #[test]
    fn parses_declared_integers() {
        let data = Data::parse("n", raw(&[Some("1"), None, Some(" 3")]), Kind::Integer).unwrap();
        assert_eq!(data, Data::Integer(vec![Some(1), None, Some(3)]));
    }
    #[test]
    fn rejects_uncoercible_value() {
        let err = Data::parse("code", raw(&[Some("1"), Some("A1")]), Kind::Integer).unwrap_err();
        match err {
            Error::TypeCoercion { column, value, .. } => {
                assert_eq!(column, "code");
                assert_eq!(value, "A1");
            }
            other => panic!("unexpected {other}"),
        }
    }
    #[test]
    fn text_keeps_leading_zeros() {
        let data = Data::parse("code", raw(&[Some("01")]), Kind::Text).unwrap();
        assert_eq!(data.render(0).as_deref(), Some("01"));
    }
    #[test]
    fn floats_render_with_decimal_point() {
        let data = Data::Float(vec![Some(1.), Some(0.25), None]);
        assert_eq!(data.render(0).as_deref(), Some("1.0"));
        assert_eq!(data.render(1).as_deref(), Some("0.25"));
        assert_eq!(data.render(2), None);
    }
    #[test]
    fn take_fills_missing_with_null() {
        let data = Data::Integer(vec![Some(7), Some(8)]);
        assert_eq!(
            data.take(&[Some(1), None, Some(0)]),
            Data::Integer(vec![Some(8), None, Some(7)])
        );
    }
}
