//! Client-side roster filtering.
//!
//! The filtered roster is always the conjunction (AND) of the criteria
//! that are actually set; an unset criterion is a wildcard. Filtering
//! never mutates the input roster and preserves its order.

use crate::models::{Party, Politician};

/// The five independent filter criteria.
///
/// `None` means "all" for that criterion. A `Some("")` search term is
/// also treated as a wildcard, matching the behavior of an empty search
/// box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against name OR position.
    pub search: Option<String>,
    /// Exact party match.
    pub party: Option<Party>,
    /// Substring match against position, so "Governor" also matches
    /// compound titles like "Lieutenant Governor".
    pub position: Option<String>,
    /// Exact election-year match; politicians without a year never match.
    pub election_year: Option<i32>,
    /// Exact state-code match; politicians without a state never match.
    pub state: Option<String>,
}

impl FilterCriteria {
    /// Criteria with every field at its wildcard value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no criterion is active (filtering is the identity).
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, str::is_empty)
            && self.party.is_none()
            && self.position.is_none()
            && self.election_year.is_none()
            && self.state.is_none()
    }

    /// Whether a single politician satisfies every active criterion.
    pub fn matches(&self, politician: &Politician) -> bool {
        if let Some(term) = self.search.as_deref().filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let in_name = politician.name.to_lowercase().contains(&term);
            let in_position = politician.position.to_lowercase().contains(&term);
            if !in_name && !in_position {
                return false;
            }
        }

        if let Some(party) = self.party {
            if politician.party != party {
                return false;
            }
        }

        if let Some(ref position) = self.position {
            if !politician.position.contains(position.as_str()) {
                return false;
            }
        }

        if let Some(year) = self.election_year {
            if politician.election_year != Some(year) {
                return false;
            }
        }

        if let Some(ref state) = self.state {
            if politician.state.as_deref() != Some(state.as_str()) {
                return false;
            }
        }

        true
    }

    /// Produce the filtered roster, preserving the input order.
    pub fn apply(&self, roster: &[Politician]) -> Vec<Politician> {
        roster.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Vec<Politician> {
        vec![
            Politician {
                id: 1,
                name: "Jane Doe".to_string(),
                state: Some("CA".to_string()),
                position: "U.S. Senator".to_string(),
                party: Party::Democrat,
                election_year: Some(2026),
            },
            Politician {
                id: 2,
                name: "John Roe".to_string(),
                state: Some("TX".to_string()),
                position: "Governor".to_string(),
                party: Party::Republican,
                election_year: Some(2028),
            },
            Politician {
                id: 3,
                name: "Alex Poe".to_string(),
                state: None,
                position: "Lieutenant Governor".to_string(),
                party: Party::Independent,
                election_year: None,
            },
        ]
    }

    fn ids(politicians: &[Politician]) -> Vec<u64> {
        politicians.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let roster = sample_roster();
        let filtered = FilterCriteria::empty().apply(&roster);
        assert_eq!(filtered, roster);
    }

    #[test]
    fn test_search_matches_name_case_insensitive() {
        let roster = sample_roster();
        let criteria = FilterCriteria {
            search: Some("jane".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&criteria.apply(&roster)), vec![1]);
    }

    #[test]
    fn test_search_matches_position_too() {
        let roster = sample_roster();
        let criteria = FilterCriteria {
            search: Some("senator".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&criteria.apply(&roster)), vec![1]);
    }

    #[test]
    fn test_empty_search_term_is_wildcard() {
        let roster = sample_roster();
        let criteria = FilterCriteria {
            search: Some(String::new()),
            ..Default::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(criteria.apply(&roster), roster);
    }

    #[test]
    fn test_party_exact_match() {
        let roster = sample_roster();
        let criteria = FilterCriteria {
            party: Some(Party::Republican),
            ..Default::default()
        };
        assert_eq!(ids(&criteria.apply(&roster)), vec![2]);
    }

    #[test]
    fn test_position_substring_match() {
        let roster = sample_roster();
        let criteria = FilterCriteria {
            position: Some("Governor".to_string()),
            ..Default::default()
        };
        // Substring, not exact: matches both "Governor" and "Lieutenant Governor".
        assert_eq!(ids(&criteria.apply(&roster)), vec![2, 3]);
    }

    #[test]
    fn test_election_year_exact_and_absent_never_matches() {
        let roster = sample_roster();
        let criteria = FilterCriteria {
            election_year: Some(2026),
            ..Default::default()
        };
        assert_eq!(ids(&criteria.apply(&roster)), vec![1]);
    }

    #[test]
    fn test_state_exact_and_absent_never_matches() {
        let roster = sample_roster();
        let criteria = FilterCriteria {
            state: Some("TX".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&criteria.apply(&roster)), vec![2]);
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let roster = sample_roster();
        let criteria = FilterCriteria {
            position: Some("Governor".to_string()),
            party: Some(Party::Independent),
            ..Default::default()
        };
        assert_eq!(ids(&criteria.apply(&roster)), vec![3]);
    }

    #[test]
    fn test_filter_is_subset_and_idempotent() {
        let roster = sample_roster();
        let criteria = FilterCriteria {
            search: Some("o".to_string()),
            ..Default::default()
        };

        let once = criteria.apply(&roster);
        assert!(once.iter().all(|p| roster.contains(p)));

        let twice = criteria.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_matches_yields_empty_result() {
        let roster = sample_roster();
        let criteria = FilterCriteria {
            search: Some("zz-nobody".to_string()),
            ..Default::default()
        };
        assert!(criteria.apply(&roster).is_empty());
    }
}
