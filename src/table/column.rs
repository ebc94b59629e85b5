use super::Data;
use super::Kind;

/// A named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: Data,
}

impl Column {
    pub fn new(name: impl Into<String>, data: Data) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
    pub fn text<S>(name: impl Into<String>, values: impl IntoIterator<Item = Option<S>>) -> Self
    where
        S: Into<String>,
    {
        Self::new(
            name,
            Data::Text(values.into_iter().map(|v| v.map(Into::into)).collect()),
        )
    }
    pub fn integer(name: impl Into<String>, values: impl IntoIterator<Item = Option<i64>>) -> Self {
        Self::new(name, Data::Integer(values.into_iter().collect()))
    }
    pub fn float(name: impl Into<String>, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self::new(name, Data::Float(values.into_iter().collect()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn data(&self) -> &Data {
        &self.data
    }
    pub fn kind(&self) -> Kind {
        self.data.kind()
    }
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn rename(self, name: impl Into<String>) -> Self {
        Self::new(name, self.data)
    }
    pub fn map(self, f: impl FnOnce(Data) -> Data) -> Self {
        Self {
            name: self.name,
            data: f(self.data),
        }
    }
}
