/// Storage type of a column.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    Text,
    Integer,
    Float,
}

impl Kind {
    /// Narrowest kind that holds every value.
    /// All-null columns stay Text.
    pub fn infer<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: Clone,
    {
        let mut values = values.into_iter();
        if values.clone().next().is_none() {
            Self::Text
        } else if values.clone().all(|v| v.parse::<i64>().is_ok()) {
            Self::Integer
        } else if values.all(|v| v.parse::<f64>().is_ok()) {
            Self::Float
        } else {
            Self::Text
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_integers() {
        assert_eq!(Kind::infer(["1", "2", "05"]), Kind::Integer);
    }
    #[test]
    fn infers_floats() {
        assert_eq!(Kind::infer(["1", "2.5"]), Kind::Float);
    }
    #[test]
    fn infers_text() {
        assert_eq!(Kind::infer(["1", "A1"]), Kind::Text);
    }
    #[test]
    fn empty_is_text() {
        assert_eq!(Kind::infer(std::iter::empty::<&str>()), Kind::Text);
    }
}
