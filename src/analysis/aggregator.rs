//! Grouping and summary statistics.
//!
//! Pure functions over slices of already-fetched data. Every result is
//! recomputed from scratch on each state change; nothing here caches.

use crate::models::{Politician, Vote, VoteChoice};
use std::collections::BTreeMap;

/// Group key used for politicians with no (or an empty) state code.
pub const UNKNOWN_STATE: &str = "Unknown";

/// Election year highlighted by the upcoming-election section.
pub const UPCOMING_ELECTION_YEAR: i32 = 2026;

/// How many upcoming-election entries are shown before the overflow line.
pub const UPCOMING_DISPLAY_LIMIT: usize = 12;

/// Partition the filtered roster by state code.
///
/// Members keep their filtered-roster order; the `BTreeMap` keys come out
/// lexicographically sorted, which is the order groups are rendered in.
/// The union of all groups is exactly the input, with multiplicity.
pub fn group_by_state(politicians: &[Politician]) -> BTreeMap<String, Vec<Politician>> {
    let mut grouped: BTreeMap<String, Vec<Politician>> = BTreeMap::new();

    for politician in politicians {
        let key = match politician.state.as_deref() {
            Some(state) if !state.is_empty() => state.to_string(),
            _ => UNKNOWN_STATE.to_string(),
        };
        grouped.entry(key).or_default().push(politician.clone());
    }

    grouped
}

/// The subset of the filtered roster up for election in 2026.
#[derive(Debug, Clone, Default)]
pub struct UpcomingElections {
    members: Vec<Politician>,
}

impl UpcomingElections {
    /// Select the upcoming-election subset, in filtered-roster order.
    pub fn from_filtered(filtered: &[Politician]) -> Self {
        let members = filtered
            .iter()
            .filter(|p| p.election_year == Some(UPCOMING_ELECTION_YEAR))
            .cloned()
            .collect();
        Self { members }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// The entries shown, capped at [`UPCOMING_DISPLAY_LIMIT`].
    pub fn visible(&self) -> &[Politician] {
        let cap = self.members.len().min(UPCOMING_DISPLAY_LIMIT);
        &self.members[..cap]
    }

    /// How many entries exceed the display cap.
    pub fn overflow(&self) -> usize {
        self.members.len().saturating_sub(UPCOMING_DISPLAY_LIMIT)
    }
}

/// Summary statistics over a voting record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct VoteSummary {
    pub total: usize,
    pub yes_count: usize,
    pub no_count: usize,
    pub yes_pct: u32,
    pub no_pct: u32,
}

impl VoteSummary {
    /// Compute counts and rounded percentages from a voting record.
    ///
    /// Vote values outside Yes/No count toward `total` only, so the two
    /// percentages need not sum to 100. An empty record yields all zeros
    /// rather than dividing by zero.
    pub fn from_votes(votes: &[Vote]) -> Self {
        let total = votes.len();
        let yes_count = votes.iter().filter(|v| v.vote == VoteChoice::Yes).count();
        let no_count = votes.iter().filter(|v| v.vote == VoteChoice::No).count();

        Self {
            total,
            yes_count,
            no_count,
            yes_pct: percentage(yes_count, total),
            no_pct: percentage(no_count, total),
        }
    }
}

/// `round(count / total * 100)`, with 0 for an empty total.
fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}
