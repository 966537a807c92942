//! Country directory tables.
//!
//! Two associations keyed by country code ("GB", "US") describe the dialling
//! rules the normalizer works from: the international calling code and the
//! national trunk prefix. Both preserve insertion order, and value lookups
//! scan in that order, so duplicate calling codes resolve to the first
//! inserted country on every run.

/// Ordered association of country codes to international calling codes.
///
/// `insert` on an existing country updates the value in place without moving
/// the entry; [`CallingCodeTable::country_for_code`] returns the first
/// inserted match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallingCodeTable {
    entries: Vec<(String, u32)>,
}

impl CallingCodeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or updates an entry, keeping an updated entry's original position.
    pub fn insert(&mut self, country: impl Into<String>, code: u32) {
        let country = country.into();
        match self.entries.iter().position(|(c, _)| *c == country) {
            Some(index) => self.entries[index].1 = code,
            None => self.entries.push((country, code)),
        }
    }

    /// Returns the calling code for a country, if known.
    pub fn get(&self, country: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(c, _)| c == country)
            .map(|(_, code)| *code)
    }

    /// Returns the first inserted country whose calling code equals `code`.
    pub fn country_for_code(&self, code: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(country, _)| country.as_str())
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(c, code)| (c.as_str(), *code))
    }
}

/// Ordered association of country codes to national trunk prefixes.
///
/// A prefix may be more than one digit ("072") or empty; an empty prefix
/// never matches a dialled number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable {
    entries: Vec<(String, String)>,
}

impl PrefixTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or updates an entry, keeping an updated entry's original position.
    pub fn insert(&mut self, country: impl Into<String>, prefix: impl Into<String>) {
        let country = country.into();
        let prefix = prefix.into();
        match self.entries.iter().position(|(c, _)| *c == country) {
            Some(index) => self.entries[index].1 = prefix,
            None => self.entries.push((country, prefix)),
        }
    }

    /// Returns the trunk prefix for a country, if known.
    pub fn get(&self, country: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == country)
            .map(|(_, prefix)| prefix.as_str())
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, p)| (c.as_str(), p.as_str()))
    }
}
