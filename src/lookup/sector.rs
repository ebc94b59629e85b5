/// Postcode sector: the postcode minus its last two characters,
/// i.e. the outcode plus the first character of the incode.
/// `"SW1A 2AA"` becomes `"SW1A 2"`.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sector(String);

impl From<&str> for Sector {
    fn from(postcode: &str) -> Self {
        let n = postcode.chars().count().saturating_sub(2);
        Self(postcode.chars().take(n).collect())
    }
}

impl From<Sector> for String {
    fn from(sector: Sector) -> Self {
        sector.0
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_unit_suffix() {
        assert_eq!(Sector::from("SW1A 2AA").to_string(), "SW1A 2");
        assert_eq!(Sector::from("SW1A2AA").to_string(), "SW1A2");
        assert_eq!(Sector::from("M1 1AE").to_string(), "M1 1");
    }
    #[test]
    fn short_input_is_empty() {
        assert_eq!(Sector::from("A").to_string(), "");
        assert_eq!(Sector::from("").to_string(), "");
    }
    #[test]
    fn deterministic() {
        assert_eq!(Sector::from("EH1 1YZ"), Sector::from("EH1 1YZ"));
    }
}
