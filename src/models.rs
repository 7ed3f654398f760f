//! Data models for the political tracker.
//!
//! This module contains the core data structures shared across the
//! application: politicians, votes, and the wire envelope used by
//! the remote API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 50 two-letter state postal codes accepted by the `--state` filter.
pub const US_STATES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", //
    "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", //
    "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", //
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", //
    "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Party affiliation of a politician.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    Democrat,
    Republican,
    Independent,
    Nonpartisan,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Democrat => write!(f, "Democrat"),
            Party::Republican => write!(f, "Republican"),
            Party::Independent => write!(f, "Independent"),
            Party::Nonpartisan => write!(f, "Nonpartisan"),
        }
    }
}

impl FromStr for Party {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "democrat" => Ok(Party::Democrat),
            "republican" => Ok(Party::Republican),
            "independent" => Ok(Party::Independent),
            "nonpartisan" => Ok(Party::Nonpartisan),
            other => Err(format!(
                "Unknown party '{}' (expected Democrat, Republican, Independent or Nonpartisan)",
                other
            )),
        }
    }
}

/// A politician as returned by the roster endpoint.
///
/// Immutable for the lifetime of a session; every derived view
/// (filtered roster, groups, upcoming subset) is computed fresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Politician {
    /// Unique, stable identifier assigned by the data source.
    pub id: u64,
    pub name: String,
    /// Two-letter postal code; may be absent for federal-only roles.
    #[serde(default)]
    pub state: Option<String>,
    /// Free-text role description, e.g. "U.S. Senator".
    pub position: String,
    pub party: Party,
    /// Year of the next election, when known.
    #[serde(default)]
    pub election_year: Option<i32>,
}

/// How a politician voted on a bill.
///
/// The API only documents "Yes" and "No", but any other wire value is
/// preserved rather than rejected: it counts toward vote totals without
/// landing in either percentage bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VoteChoice {
    Yes,
    No,
    Other(String),
}

impl From<String> for VoteChoice {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Yes" => VoteChoice::Yes,
            "No" => VoteChoice::No,
            _ => VoteChoice::Other(s),
        }
    }
}

impl From<VoteChoice> for String {
    fn from(choice: VoteChoice) -> Self {
        match choice {
            VoteChoice::Yes => "Yes".to_string(),
            VoteChoice::No => "No".to_string(),
            VoteChoice::Other(s) => s,
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteChoice::Yes => write!(f, "Yes"),
            VoteChoice::No => write!(f, "No"),
            VoteChoice::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Legislative status of a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BillStatus {
    Passed,
    Failed,
    /// Any in-progress status, kept with its wire text (e.g. "In Committee").
    InProgress(String),
}

impl From<String> for BillStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Passed" => BillStatus::Passed,
            "Failed" => BillStatus::Failed,
            _ => BillStatus::InProgress(s),
        }
    }
}

impl From<BillStatus> for String {
    fn from(status: BillStatus) -> Self {
        match status {
            BillStatus::Passed => "Passed".to_string(),
            BillStatus::Failed => "Failed".to_string(),
            BillStatus::InProgress(s) => s,
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillStatus::Passed => write!(f, "Passed"),
            BillStatus::Failed => write!(f, "Failed"),
            BillStatus::InProgress(s) => write!(f, "{}", s),
        }
    }
}

/// A single entry in a politician's voting record.
///
/// Fetched fresh on each selection and discarded on "back"; never cached
/// across selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    /// Bill identifier; also carries the topic keyword used for the
    /// impact sentence (e.g. "HR-2021-Infrastructure").
    pub bill_number: String,
    pub title: String,
    pub description: String,
    pub vote: VoteChoice,
    pub status: BillStatus,
    pub introduced_date: NaiveDate,
    /// Number of voting rounds the bill went through (>= 1).
    pub vote_rounds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pros: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cons: Option<String>,
}

/// Wire wrapper used by both API endpoints: `{ "data": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Vec<T>,
}
