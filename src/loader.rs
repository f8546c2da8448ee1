//! Job list loader.
//!
//! # Input Format
//!
//! ```text
//! <total_jobs>
//! <weight_1> <length_1>
//! <weight_2> <length_2>
//! ...
//! ```
//!
//! Job numbers follow line position: every line after the count line takes
//! the next number, whether or not it parses. Lines whose weight or length
//! is not an unsigned integer, including lines that are not valid UTF-8,
//! are skipped. Only the final job count check can turn skipped lines
//! into an error.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::dispatching::{RankedQueue, ScoringRule};
use crate::error::{Error, Result};
use crate::models::Job;
use crate::validation::validate_job_count;

/// Jobs loaded from one input, ranked both ways.
#[derive(Debug)]
pub struct LoadedJobs {
    /// Job count declared on the first line.
    pub declared: usize,
    /// Jobs ranked by `weight - length`.
    pub difference: RankedQueue,
    /// Jobs ranked by `weight / length`.
    pub ratio: RankedQueue,
    /// Job lines read after the count line.
    pub lines_seen: usize,
    /// Job lines that did not parse.
    pub skipped: usize,
}

/// Reads and parses the job list at `path`.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<LoadedJobs> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "Read job list");
    parse_bytes(&bytes)
}

/// Parses a job list into two ranked collections.
///
/// # Errors
/// - [`Error::MissingCount`] if there is no first line.
/// - [`Error::InvalidCount`] if the first line is not an unsigned integer.
/// - [`Error::CountMismatch`] if the loaded job count differs from the declared one.
pub fn parse_jobs(text: &str) -> Result<LoadedJobs> {
    parse_bytes(text.as_bytes())
}

/// Parses a raw job list. Job lines that are not valid UTF-8 are skipped.
///
/// # Errors
/// Same as [`parse_jobs`]; a count line that is not valid UTF-8 is
/// [`Error::InvalidCount`].
pub fn parse_bytes(bytes: &[u8]) -> Result<LoadedJobs> {
    let mut lines = split_lines(bytes);
    let count_line = lines.next().ok_or(Error::MissingCount)?;
    let declared = parse_count(&String::from_utf8_lossy(count_line))?;

    // Never more jobs than bytes
    let capacity = declared.min(bytes.len());
    let mut difference = RankedQueue::with_capacity(ScoringRule::Difference, capacity);
    let mut ratio = RankedQueue::with_capacity(ScoringRule::Ratio, capacity);
    let mut number: u32 = 1;
    let mut lines_seen = 0;
    let mut skipped = 0;

    for line in lines {
        lines_seen += 1;
        let job = std::str::from_utf8(line)
            .ok()
            .and_then(|line| parse_job_line(number, line));
        match job {
            Some(job) => {
                if job.length() == 0 {
                    warn!(job = %job, "Job has zero length");
                }
                difference.push(job);
                ratio.push(job);
            }
            None => {
                debug!(number, line = %String::from_utf8_lossy(line), "Skipping unparsable job line");
                skipped += 1;
            }
        }
        number = number.saturating_add(1);
    }

    validate_job_count(declared, difference.len(), ratio.len())?;
    info!(declared, lines_seen, skipped, "Loaded jobs");

    Ok(LoadedJobs {
        declared,
        difference,
        ratio,
        lines_seen,
        skipped,
    })
}

/// Splits on `\n` like [`str::lines`], dropping a trailing `\r`.
fn split_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = (!bytes.is_empty()).then(|| bytes.strip_suffix(b"\n").unwrap_or(bytes));
    body.into_iter()
        .flat_map(|body| body.split(|&b| b == b'\n'))
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

fn parse_count(line: &str) -> Result<usize> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|source| Error::InvalidCount {
        line: trimmed.to_string(),
        source,
    })
}

/// Parses `<weight> <length>`; extra tokens are ignored.
fn parse_job_line(number: u32, line: &str) -> Option<Job> {
    let mut tokens = line.split_whitespace();
    let weight = tokens.next()?.parse().ok()?;
    let length = tokens.next()?.parse().ok()?;
    Some(Job::new(number, weight, length))
}
