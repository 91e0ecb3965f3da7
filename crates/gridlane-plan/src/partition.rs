//! Randomized partitioning of the command list into execution lanes.

use gridlane_core::errors::{ErrorInfo, GridlaneError};
use gridlane_core::rng::RngHandle;
use rand::seq::SliceRandom;
use serde::Serialize;

/// Ordered commands assigned to one lane script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lane {
    commands: Vec<String>,
}

impl Lane {
    /// Commands in execution order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Number of commands assigned to the lane.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the lane received no commands (total < lane count).
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Applies a uniform random permutation to the command list.
///
/// Jobs rendered from nearby parameter points tend to have correlated
/// runtimes, so a contiguous split of the enumeration order would skew lane
/// completion times. Shuffling first decorrelates lane content from job
/// identifiers. The permutation is driven entirely by the injected handle.
pub fn shuffle_commands(commands: &mut [String], rng: &mut RngHandle) {
    commands.shuffle(rng.inner_mut());
}

/// Splits the command list into `lane_count` contiguous chunks whose sizes
/// differ by at most one: with total = q * n + r, the first r lanes get q + 1
/// commands and the rest get q. Lanes beyond the total come out empty.
pub fn split_into_lanes(
    commands: Vec<String>,
    lane_count: usize,
) -> Result<Vec<Lane>, GridlaneError> {
    if lane_count == 0 {
        return Err(GridlaneError::Config(
            ErrorInfo::new("lane-count-zero", "cannot split commands into zero lanes")
                .with_hint("set lane_count to at least 1"),
        ));
    }
    let total = commands.len();
    let quotient = total / lane_count;
    let remainder = total % lane_count;
    let mut lanes = Vec::with_capacity(lane_count);
    let mut rest = commands;
    for idx in 0..lane_count {
        let take = quotient + usize::from(idx < remainder);
        let tail = rest.split_off(take);
        lanes.push(Lane { commands: rest });
        rest = tail;
    }
    Ok(lanes)
}
