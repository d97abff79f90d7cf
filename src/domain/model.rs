use chrono::{DateTime, Utc};
use std::time::Duration;

/// Ordered list of raw name tokens, as read from a name file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    names: Vec<Vec<u8>>,
}

impl NameList {
    pub fn new(names: Vec<Vec<u8>>) -> Self {
        Self { names }
    }

    /// Builds a list from string slices. Mostly useful in tests.
    pub fn from_strs(names: &[&str]) -> Self {
        Self::new(names.iter().map(|n| n.as_bytes().to_vec()).collect())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.names.get(index).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.names.iter().map(Vec::as_slice)
    }
}

impl<'a> IntoIterator for &'a NameList {
    type Item = &'a [u8];
    type IntoIter = std::iter::Map<std::slice::Iter<'a, Vec<u8>>, fn(&'a Vec<u8>) -> &'a [u8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.names
            .iter()
            .map(Vec::as_slice as fn(&'a Vec<u8>) -> &'a [u8])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Firstname,
    Lastname,
}

impl NameField {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameField::Firstname => "firstnames",
            NameField::Lastname => "lastnames",
        }
    }
}

/// A substitution marker recognised inside a format template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    FirstnamePlain,
    FirstnameTruncated(usize),
    LastnamePlain,
    LastnameTruncated(usize),
}

impl Placeholder {
    pub fn field(&self) -> NameField {
        match self {
            Placeholder::FirstnamePlain | Placeholder::FirstnameTruncated(_) => NameField::Firstname,
            Placeholder::LastnamePlain | Placeholder::LastnameTruncated(_) => NameField::Lastname,
        }
    }

    pub fn truncate_len(&self) -> Option<usize> {
        match self {
            Placeholder::FirstnameTruncated(n) | Placeholder::LastnameTruncated(n) => Some(*n),
            Placeholder::FirstnamePlain | Placeholder::LastnamePlain => None,
        }
    }

    /// The bytes this placeholder stands for, never longer than the name itself.
    pub fn render<'a>(&self, firstname: &'a [u8], lastname: &'a [u8]) -> &'a [u8] {
        let value = match self.field() {
            NameField::Firstname => firstname,
            NameField::Lastname => lastname,
        };
        match self.truncate_len() {
            Some(n) => &value[..n.min(value.len())],
            None => value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub firstnames: usize,
    pub lastnames: usize,
    pub lines_written: u64,
    pub bytes_written: u64,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}
