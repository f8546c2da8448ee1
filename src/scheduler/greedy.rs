//! Difference-vs-ratio greedy comparison.
//!
//! # Algorithm
//!
//! 1. Load jobs into two queues, one per scoring rule.
//! 2. Reduce each queue independently (no shared accumulators).
//! 3. Report both weighted sums. The ratio schedule is optimal,
//!    so `good.weighted_sum <= bad.weighted_sum` always holds.
//!
//! # Complexity
//! O(n log n) per rule.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::CompletionKpi;
use crate::dispatching::RankedQueue;
use crate::error::Result;
use crate::loader::{self, LoadedJobs};

/// Both greedy schedules for one job list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Schedule ranked by `weight - length`.
    pub bad: CompletionKpi,
    /// Schedule ranked by `weight / length`.
    pub good: CompletionKpi,
}

impl Comparison {
    /// Runs both reductions on already loaded jobs.
    ///
    /// # Errors
    /// [`Error::Overflow`](crate::Error::Overflow) if either weighted sum
    /// does not fit in `i64`.
    pub fn from_loaded(loaded: LoadedJobs) -> Result<Self> {
        let bad = reduce_logged(loaded.difference)?;
        let good = reduce_logged(loaded.ratio)?;
        let comparison = Self { bad, good };
        info!(gap = comparison.gap(), "Compared greedy schedules");
        Ok(comparison)
    }

    /// Parses `text` and runs both reductions.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_loaded(loader::parse_jobs(text)?)
    }

    /// Loads the job list at `path` and runs both reductions.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_loaded(loader::load_from_path(path)?)
    }

    /// How much worse the difference schedule is than the optimum.
    pub fn gap(&self) -> i64 {
        self.bad.weighted_sum - self.good.weighted_sum
    }
}

fn reduce_logged(queue: RankedQueue) -> Result<CompletionKpi> {
    let kpi = CompletionKpi::reduce(queue)?;
    info!(
        rule = %kpi.rule,
        description = kpi.rule.description(),
        weighted_sum = kpi.weighted_sum,
        completion_time = kpi.completion_time,
        "Reduced schedule"
    );
    Ok(kpi)
}
