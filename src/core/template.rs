//! Format template scanning and expansion.
//!
//! A template is arbitrary text with `{firstname}`, `{lastname}`,
//! `{firstname}(N)` and `{lastname}(N)` markers. Expansion rescans the raw
//! template for every pair instead of keeping a token list, so any byte that
//! is not part of a recognised marker is written through untouched.

use crate::domain::model::{NameField, Placeholder};
use std::io::{self, Write};

const FIRSTNAME_TOKEN: &[u8] = b"{firstname}";
const LASTNAME_TOKEN: &[u8] = b"{lastname}";

impl NameField {
    fn token(&self) -> &'static [u8] {
        match self {
            NameField::Firstname => FIRSTNAME_TOKEN,
            NameField::Lastname => LASTNAME_TOKEN,
        }
    }

    fn plain(&self) -> Placeholder {
        match self {
            NameField::Firstname => Placeholder::FirstnamePlain,
            NameField::Lastname => Placeholder::LastnamePlain,
        }
    }

    fn truncated(&self, len: usize) -> Placeholder {
        match self {
            NameField::Firstname => Placeholder::FirstnameTruncated(len),
            NameField::Lastname => Placeholder::LastnameTruncated(len),
        }
    }
}

/// Matches a placeholder at the very start of `rest`.
///
/// Returns the placeholder and the number of template bytes it spans.
/// Firstname forms are tried before lastname forms, truncated before plain.
pub fn match_placeholder(rest: &[u8]) -> Option<(Placeholder, usize)> {
    for field in [NameField::Firstname, NameField::Lastname] {
        let token = field.token();
        let Some(after) = rest.strip_prefix(token) else {
            continue;
        };

        return Some(match match_truncation(after) {
            Some((len, consumed)) => (field.truncated(len), token.len() + consumed),
            None => (field.plain(), token.len()),
        });
    }
    None
}

/// Parses `(N...)` directly after a placeholder token.
///
/// At least one digit must follow `(`. Everything up to and including the
/// first `)` is consumed; an unterminated group swallows the rest of the
/// template.
fn match_truncation(after: &[u8]) -> Option<(usize, usize)> {
    let digits = after.strip_prefix(b"(")?;
    let digit_count = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if digit_count == 0 {
        return None;
    }

    let len = digits[..digit_count].iter().fold(0usize, |acc, d| {
        acc.saturating_mul(10).saturating_add(usize::from(d - b'0'))
    });

    let consumed = match after.iter().position(|&b| b == b')') {
        Some(close) => close + 1,
        None => after.len(),
    };

    Some((len, consumed))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: Vec<u8>,
}

impl Template {
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        Self { raw: raw.into() }
    }

    /// Placeholders in the order the expander would meet them.
    pub fn placeholders(&self) -> Vec<Placeholder> {
        let mut found = Vec::new();
        let mut cursor = 0;
        while cursor < self.raw.len() {
            match match_placeholder(&self.raw[cursor..]) {
                Some((placeholder, consumed)) => {
                    found.push(placeholder);
                    cursor += consumed;
                }
                None => cursor += 1,
            }
        }
        found
    }

    /// Writes the template for one name pair, without a line terminator.
    pub fn expand<W: Write + ?Sized>(
        &self,
        firstname: &[u8],
        lastname: &[u8],
        sink: &mut W,
    ) -> io::Result<()> {
        let raw = self.raw.as_slice();
        let mut literal_start = 0;
        let mut cursor = 0;

        while cursor < raw.len() {
            match match_placeholder(&raw[cursor..]) {
                Some((placeholder, consumed)) => {
                    sink.write_all(&raw[literal_start..cursor])?;
                    sink.write_all(placeholder.render(firstname, lastname))?;
                    cursor += consumed;
                    literal_start = cursor;
                }
                None => cursor += 1,
            }
        }

        sink.write_all(&raw[literal_start..])
    }
}

impl From<&str> for Template {
    fn from(raw: &str) -> Self {
        Self::new(raw.as_bytes())
    }
}
