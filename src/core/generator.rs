use crate::core::template::Template;
use crate::domain::model::{GenerationReport, NameList};
use crate::domain::ports::GenerationObserver;
use crate::utils::error::{CrafterError, Result};
use chrono::Utc;
use std::io::{self, Write};
use std::time::Instant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Refuse to run when the pairing would produce more lines than this.
    pub max_lines: Option<u64>,
}

/// Writes one expanded template line per (firstname, lastname) pair.
pub struct Generator {
    options: GenerateOptions,
}

impl Generator {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Fails when pairing the two lists would exceed the configured line cap.
    pub fn check_limit(&self, firstnames: &NameList, lastnames: &NameList) -> Result<()> {
        let requested = firstnames.len() as u128 * lastnames.len() as u128;
        match self.options.max_lines {
            Some(limit) if requested > u128::from(limit) => {
                Err(CrafterError::OutputLimitExceeded { requested, limit })
            }
            _ => Ok(()),
        }
    }

    pub fn generate<W, O>(
        &self,
        firstnames: &NameList,
        lastnames: &NameList,
        template: &Template,
        sink: W,
        observer: &O,
    ) -> Result<GenerationReport>
    where
        W: Write,
        O: GenerationObserver + ?Sized,
    {
        self.check_limit(firstnames, lastnames)?;

        let started_at = Utc::now();
        let start = Instant::now();
        observer.generation_started(firstnames.len(), lastnames.len());

        let mut sink = CountingWriter::new(sink);
        let mut lines_written = 0u64;

        for firstname in firstnames {
            for lastname in lastnames {
                template.expand(firstname, lastname, &mut sink)?;
                sink.write_all(b"\n")?;
                lines_written += 1;
            }
        }
        sink.flush()?;

        let report = GenerationReport {
            firstnames: firstnames.len(),
            lastnames: lastnames.len(),
            lines_written,
            bytes_written: sink.bytes_written(),
            started_at,
            elapsed: start.elapsed(),
        };
        observer.generation_finished(&report);

        Ok(report)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GenerateOptions::default())
    }
}

struct CountingWriter<W> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.bytes += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
