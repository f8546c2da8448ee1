//! Post-parse validation for job lists.
//!
//! Malformed job lines are skipped while loading, so the only place they
//! surface is here: the number of loaded jobs must match the count the
//! input declared, in both ranked collections.

use crate::error::{Error, Result};

/// Checks that both ranked collections hold exactly `declared` jobs.
///
/// # Returns
/// `Ok(())` if both counts match, [`Error::CountMismatch`] otherwise.
pub fn validate_job_count(declared: usize, difference: usize, ratio: usize) -> Result<()> {
    if difference != declared || ratio != declared {
        return Err(Error::CountMismatch {
            declared,
            difference,
            ratio,
        });
    }
    Ok(())
}
