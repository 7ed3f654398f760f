//! Application state and its reducer.
//!
//! All view state lives in a single immutable-per-update [`AppState`];
//! every user action goes through [`reduce`], which returns the next
//! state. The filtered roster is recomputed wholesale whenever the
//! roster or the criteria change.

use crate::filter::FilterCriteria;
use crate::models::{Politician, Vote};
use tracing::debug;

/// Which politician, if any, is currently selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Selected(u64),
}

/// The whole application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Full roster as fetched; never mutated after load.
    pub roster: Vec<Politician>,
    /// Roster after applying `criteria`.
    pub filtered: Vec<Politician>,
    pub criteria: FilterCriteria,
    pub group_by_state: bool,
    pub selection: Selection,
    /// Voting record for the selected politician; discarded on `Back`.
    pub voting_record: Vec<Vote>,
    /// Bumped on every `Select`. A `VotesLoaded` carrying an older
    /// generation is a stale in-flight response and is dropped.
    pub fetch_generation: u64,
}

/// A user or network event driving a state transition.
#[derive(Debug, Clone)]
pub enum Action {
    RosterLoaded(Vec<Politician>),
    CriteriaChanged(FilterCriteria),
    ClearFilters,
    ToggleGrouping,
    Select(u64),
    VotesLoaded {
        politician_id: u64,
        generation: u64,
        votes: Vec<Vote>,
    },
    Back,
}

/// Pure state transition.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::RosterLoaded(roster) => {
            let filtered = state.criteria.apply(&roster);
            AppState {
                roster,
                filtered,
                ..state
            }
        }
        Action::CriteriaChanged(criteria) => {
            let filtered = criteria.apply(&state.roster);
            AppState {
                criteria,
                filtered,
                ..state
            }
        }
        Action::ClearFilters => {
            let criteria = FilterCriteria::empty();
            let filtered = criteria.apply(&state.roster);
            AppState {
                criteria,
                filtered,
                ..state
            }
        }
        Action::ToggleGrouping => AppState {
            group_by_state: !state.group_by_state,
            ..state
        },
        Action::Select(id) => AppState {
            selection: Selection::Selected(id),
            voting_record: Vec::new(),
            fetch_generation: state.fetch_generation + 1,
            ..state
        },
        Action::VotesLoaded {
            politician_id,
            generation,
            votes,
        } => {
            let current = state.selection == Selection::Selected(politician_id)
                && generation == state.fetch_generation;
            if !current {
                debug!(
                    politician_id,
                    generation, "Dropping stale voting-record response"
                );
                return state;
            }
            AppState {
                voting_record: votes,
                ..state
            }
        }
        Action::Back => AppState {
            selection: Selection::None,
            voting_record: Vec::new(),
            ..state
        },
    }
}
