use crate::domain::model::NameList;
use crate::utils::error::{CrafterError, Result};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead};

pub const DEFAULT_MAX_NAME_LENGTH: usize = 99;

/// What to do with a line longer than the maximum name length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OverlongPolicy {
    /// Keep the first bytes up to the limit and drop the remainder of the line.
    #[default]
    Truncate,
    /// Fail the load.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    pub max_name_length: usize,
    pub overlong: OverlongPolicy,
    /// Drop one `\r` left before the `\n`. Off by default, so CRLF files keep the `\r`.
    pub strip_carriage_return: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            overlong: OverlongPolicy::Truncate,
            strip_carriage_return: false,
        }
    }
}

pub struct NameListLoader {
    options: LoaderOptions,
}

impl NameListLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Reads one name per line from the current position of `source`.
    pub fn load<R: BufRead>(&self, mut source: R) -> Result<NameList> {
        let max = self.options.max_name_length;
        let mut names: Vec<Vec<u8>> = Vec::new();
        let mut line_number = 0usize;

        loop {
            let mut token = Vec::new();
            let Some(line) = read_bounded_line(&mut source, &mut token, max + 1)? else {
                break;
            };
            line_number += 1;

            let mut length = line.length;
            if self.options.strip_carriage_return && line.last_byte == Some(b'\r') {
                length -= 1;
                token.truncate(length);
            }

            if length > max {
                match self.options.overlong {
                    OverlongPolicy::Truncate => {
                        tracing::debug!(
                            "Line {} is {} bytes, truncating to {}",
                            line_number,
                            length,
                            max
                        );
                        token.truncate(max);
                    }
                    OverlongPolicy::Reject => {
                        return Err(CrafterError::NameTooLong {
                            line: line_number,
                            length,
                            max,
                        });
                    }
                }
            }

            names
                .try_reserve(1)
                .map_err(|_| CrafterError::ResourceExhausted {
                    what: format!("name list ({} entries)", names.len()),
                })?;
            names.push(token);
        }

        Ok(NameList::new(names))
    }
}

impl Default for NameListLoader {
    fn default() -> Self {
        Self::new(LoaderOptions::default())
    }
}

struct LineRead {
    /// Payload length of the whole line, terminator excluded.
    length: usize,
    last_byte: Option<u8>,
}

/// Reads one `\n`-terminated line, keeping at most `keep` bytes of it in `token`.
///
/// The remainder of an overlong line is consumed and discarded chunk by chunk.
/// Returns `None` at end of input.
fn read_bounded_line<R: BufRead>(
    source: &mut R,
    token: &mut Vec<u8>,
    keep: usize,
) -> io::Result<Option<LineRead>> {
    let mut length = 0usize;
    let mut last_byte = None;
    let mut saw_input = false;

    loop {
        let (used, done) = {
            let available = match source.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                break;
            }
            saw_input = true;

            let (payload, done) = match available.iter().position(|&b| b == b'\n') {
                Some(newline) => (&available[..newline], true),
                None => (available, false),
            };

            let room = keep.saturating_sub(token.len());
            token.extend_from_slice(&payload[..payload.len().min(room)]);
            if let Some(&last) = payload.last() {
                last_byte = Some(last);
            }
            length += payload.len();

            (payload.len() + usize::from(done), done)
        };

        source.consume(used);
        if done {
            return Ok(Some(LineRead { length, last_byte }));
        }
    }

    Ok(saw_input.then_some(LineRead { length, last_byte }))
}
