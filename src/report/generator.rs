//! Roster and voting-record rendering.
//!
//! This module generates the text, Markdown and JSON views from the
//! application state. Rendering is pure string generation; all derived
//! data (groups, upcoming subset, vote summary) is computed here from
//! the filtered roster and voting record.

use crate::analysis::{
    group_by_state, impact_sentence, UpcomingElections, VoteSummary, UPCOMING_ELECTION_YEAR,
};
use crate::app::AppState;
use crate::models::{Politician, Vote};
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Shown when the filtered roster is empty.
const NO_MATCHES: &str = "No politicians match your search criteria. Try adjusting your filters!";

/// Shown when a politician has no voting record.
const NO_VOTES: &str = "No voting records available for this politician.";

/// Serializable roster view (the JSON output format).
#[derive(Debug, Serialize)]
pub struct RosterView {
    pub total: usize,
    pub matching: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming: Option<UpcomingView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<BTreeMap<String, Vec<Politician>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub politicians: Option<Vec<Politician>>,
}

/// Serializable upcoming-election section.
#[derive(Debug, Serialize)]
pub struct UpcomingView {
    pub count: usize,
    pub visible: Vec<Politician>,
    pub overflow: usize,
}

impl RosterView {
    /// Build the view from application state.
    ///
    /// Grouped mode replaces the flat list and suppresses the upcoming
    /// section entirely.
    pub fn from_state(state: &AppState, show_upcoming: bool) -> Self {
        let upcoming = if state.group_by_state || !show_upcoming {
            None
        } else {
            let upcoming = UpcomingElections::from_filtered(&state.filtered);
            (!upcoming.is_empty()).then(|| UpcomingView {
                count: upcoming.len(),
                visible: upcoming.visible().to_vec(),
                overflow: upcoming.overflow(),
            })
        };

        let (groups, politicians) = if state.group_by_state {
            (Some(group_by_state(&state.filtered)), None)
        } else {
            (None, Some(state.filtered.clone()))
        };

        Self {
            total: state.roster.len(),
            matching: state.filtered.len(),
            upcoming,
            groups,
            politicians,
        }
    }
}

/// Serializable voting-record view (the JSON output format).
#[derive(Debug, Serialize)]
pub struct RecordView {
    pub politician: Politician,
    pub summary: VoteSummary,
    pub votes: Vec<VoteView>,
}

/// A vote plus its derived impact sentence.
#[derive(Debug, Serialize)]
pub struct VoteView {
    #[serde(flatten)]
    pub vote: Vote,
    pub impact: &'static str,
}

impl RecordView {
    pub fn new(politician: Politician, votes: &[Vote]) -> Self {
        Self {
            politician,
            summary: VoteSummary::from_votes(votes),
            votes: votes
                .iter()
                .map(|v| VoteView {
                    impact: impact_sentence(&v.bill_number),
                    vote: v.clone(),
                })
                .collect(),
        }
    }
}

/// Generate the plain-text roster view.
pub fn generate_roster_text(state: &AppState, show_upcoming: bool) -> String {
    let view = RosterView::from_state(state, show_upcoming);
    let mut output = String::new();

    output.push_str(&format!(
        "Tracking {} politicians across all 50 states\n",
        view.total
    ));
    output.push_str(&format!(
        "Showing {} of {} politicians\n\n",
        view.matching, view.total
    ));

    if let Some(ref upcoming) = view.upcoming {
        output.push_str(&format!(
            "Up for Election in {} ({} politicians)\n",
            UPCOMING_ELECTION_YEAR, upcoming.count
        ));
        for politician in &upcoming.visible {
            output.push_str(&format!("  {}\n", politician_line(politician)));
        }
        if upcoming.overflow > 0 {
            output.push_str(&format!(
                "  ...and {} more up for election in {}\n",
                upcoming.overflow, UPCOMING_ELECTION_YEAR
            ));
        }
        output.push('\n');
    }

    if let Some(ref groups) = view.groups {
        output.push_str("Politicians by State\n\n");
        for (group_state, members) in groups {
            output.push_str(&format!("{} ({} politicians)\n", group_state, members.len()));
            for politician in members {
                output.push_str(&format!("  {}\n", politician_line(politician)));
            }
            output.push('\n');
        }
        if groups.is_empty() {
            output.push_str(NO_MATCHES);
            output.push('\n');
        }
    } else if let Some(ref politicians) = view.politicians {
        output.push_str(&format!("All Politicians ({})\n", politicians.len()));
        if politicians.is_empty() {
            output.push_str(NO_MATCHES);
            output.push('\n');
        } else {
            for politician in politicians {
                output.push_str(&format!("  {}\n", politician_line(politician)));
            }
        }
    }

    output
}

/// Generate the Markdown roster view.
pub fn generate_roster_markdown(state: &AppState, show_upcoming: bool) -> String {
    let view = RosterView::from_state(state, show_upcoming);
    let mut output = String::new();

    output.push_str("# Political Accountability Tracker\n\n");
    output.push_str(&format!(
        "Tracking {} politicians across all 50 states. Showing **{}** of {}.\n\n",
        view.total, view.matching, view.total
    ));

    if let Some(ref upcoming) = view.upcoming {
        output.push_str(&format!(
            "## Up for Election in {}\n\n{} politicians\n\n",
            UPCOMING_ELECTION_YEAR, upcoming.count
        ));
        for politician in &upcoming.visible {
            output.push_str(&format!("- {}\n", politician_line(politician)));
        }
        if upcoming.overflow > 0 {
            output.push_str(&format!(
                "\n*...and {} more up for election in {}*\n",
                upcoming.overflow, UPCOMING_ELECTION_YEAR
            ));
        }
        output.push('\n');
    }

    if let Some(ref groups) = view.groups {
        output.push_str("## Politicians by State\n\n");
        for (group_state, members) in groups {
            output.push_str(&format!(
                "### {} ({} politicians)\n\n",
                group_state,
                members.len()
            ));
            for politician in members {
                output.push_str(&format!("- {}\n", politician_line(politician)));
            }
            output.push('\n');
        }
        if groups.is_empty() {
            output.push_str(&format!("{}\n", NO_MATCHES));
        }
    } else if let Some(ref politicians) = view.politicians {
        output.push_str(&format!("## All Politicians ({})\n\n", politicians.len()));
        if politicians.is_empty() {
            output.push_str(&format!("{}\n", NO_MATCHES));
        } else {
            for politician in politicians {
                output.push_str(&format!("- {}\n", politician_line(politician)));
            }
        }
    }

    output
}

/// Generate the JSON roster view.
pub fn generate_roster_json(state: &AppState, show_upcoming: bool) -> Result<String> {
    let view = RosterView::from_state(state, show_upcoming);
    serde_json::to_string_pretty(&view).map_err(Into::into)
}

/// Generate the plain-text voting-record view.
pub fn generate_record_text(politician: &Politician, votes: &[Vote]) -> String {
    let view = RecordView::new(politician.clone(), votes);
    let mut output = String::new();

    output.push_str(&format!("{}\n", view.politician.name));
    output.push_str(&format!(
        "State: {}\n",
        view.politician.state.as_deref().unwrap_or("N/A")
    ));
    output.push_str(&format!("Position: {}\n", view.politician.position));
    output.push_str(&format!("Party: {}\n", view.politician.party));
    if let Some(year) = view.politician.election_year {
        output.push_str(&format!("Next election: {}\n", year));
    }
    output.push('\n');

    output.push_str("Voting Summary\n");
    output.push_str(&format!("  Total Votes Cast: {}\n", view.summary.total));
    output.push_str(&format!(
        "  Yes Votes: {} ({}%)\n",
        view.summary.yes_count, view.summary.yes_pct
    ));
    output.push_str(&format!(
        "  No Votes: {} ({}%)\n\n",
        view.summary.no_count, view.summary.no_pct
    ));

    output.push_str(&format!("Voting Record ({} votes)\n", view.summary.total));
    if view.votes.is_empty() {
        output.push_str(&format!("{}\n", NO_VOTES));
        return output;
    }

    for entry in &view.votes {
        output.push('\n');
        output.push_str(&generate_vote_block_text(entry));
    }

    output
}

fn generate_vote_block_text(entry: &VoteView) -> String {
    let vote = &entry.vote;
    let mut block = String::new();

    block.push_str(&format!("{} - {}\n", vote.bill_number, vote.title));
    block.push_str(&format!("  Voted: {}\n", vote.vote));
    block.push_str(&format!("  What this bill does: {}\n", vote.description));
    if vote.vote_rounds > 1 {
        block.push_str(&format!(
            "  Voting process: went through {} rounds of voting\n",
            vote.vote_rounds
        ));
    }
    if let Some(ref pros) = vote.pros {
        block.push_str(&format!("  Arguments for: {}\n", pros));
    }
    if let Some(ref cons) = vote.cons {
        block.push_str(&format!("  Arguments against: {}\n", cons));
    }
    block.push_str(&format!(
        "  Status: {} | Introduced: {}\n",
        vote.status,
        format_long_date(vote.introduced_date)
    ));
    block.push_str(&format!("  Impact: {}\n", entry.impact));

    block
}

/// Generate the Markdown voting-record view.
pub fn generate_record_markdown(politician: &Politician, votes: &[Vote]) -> String {
    let view = RecordView::new(politician.clone(), votes);
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", view.politician.name));
    output.push_str(&format!(
        "**State:** {} | **Position:** {} | **Party:** {}\n",
        view.politician.state.as_deref().unwrap_or("N/A"),
        view.politician.position,
        view.politician.party
    ));
    if let Some(year) = view.politician.election_year {
        output.push_str(&format!("\n**Next election:** {}\n", year));
    }
    output.push('\n');

    output.push_str("## Voting Summary\n\n");
    output.push_str("| Total | Yes | No |\n");
    output.push_str("|:---:|:---:|:---:|\n");
    output.push_str(&format!(
        "| {} | {} ({}%) | {} ({}%) |\n\n",
        view.summary.total,
        view.summary.yes_count,
        view.summary.yes_pct,
        view.summary.no_count,
        view.summary.no_pct
    ));

    output.push_str(&format!("## Voting Record ({} votes)\n\n", view.summary.total));
    if view.votes.is_empty() {
        output.push_str(&format!("{}\n", NO_VOTES));
        return output;
    }

    for entry in &view.votes {
        output.push_str(&generate_vote_block_markdown(entry));
    }

    output
}

fn generate_vote_block_markdown(entry: &VoteView) -> String {
    let vote = &entry.vote;
    let mut block = String::new();

    block.push_str(&format!("### {} - {}\n\n", vote.bill_number, vote.title));
    block.push_str(&format!("**Voted:** {}\n\n", vote.vote));
    block.push_str(&format!("**What this bill does:** {}\n\n", vote.description));
    if vote.vote_rounds > 1 {
        block.push_str(&format!(
            "**Voting process:** this bill went through {} rounds of voting before reaching its current status.\n\n",
            vote.vote_rounds
        ));
    }
    if let Some(ref pros) = vote.pros {
        block.push_str(&format!("**Arguments for:** {}\n\n", pros));
    }
    if let Some(ref cons) = vote.cons {
        block.push_str(&format!("**Arguments against:** {}\n\n", cons));
    }
    block.push_str(&format!(
        "**Status:** {} | **Introduced:** {}\n\n",
        vote.status,
        format_long_date(vote.introduced_date)
    ));
    block.push_str(&format!("> {}\n\n", entry.impact));
    block.push_str("---\n\n");

    block
}

/// Generate the JSON voting-record view.
pub fn generate_record_json(politician: &Politician, votes: &[Vote]) -> Result<String> {
    let view = RecordView::new(politician.clone(), votes);
    serde_json::to_string_pretty(&view).map_err(Into::into)
}

/// One-line politician summary used by the list views.
fn politician_line(politician: &Politician) -> String {
    let mut line = format!(
        "{} - {} ({}), {}",
        politician.name,
        politician.position,
        politician.party,
        politician.state.as_deref().unwrap_or("N/A")
    );
    if let Some(year) = politician.election_year {
        line.push_str(&format!(" - next election {}", year));
    }
    line
}

/// Long-format date, e.g. "March 5, 2024".
fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillStatus, Party, VoteChoice};

    fn politician(id: u64, name: &str, state: Option<&str>, election_year: Option<i32>) -> Politician {
        Politician {
            id,
            name: name.to_string(),
            state: state.map(String::from),
            position: "U.S. Senator".to_string(),
            party: Party::Democrat,
            election_year,
        }
    }

    fn vote(choice: VoteChoice) -> Vote {
        Vote {
            bill_number: "HR-2021-Infrastructure".to_string(),
            title: "Infrastructure Investment Act".to_string(),
            description: "Funds roads and bridges.".to_string(),
            vote: choice,
            status: BillStatus::Passed,
            introduced_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            vote_rounds: 3,
            pros: Some("Creates jobs".to_string()),
            cons: None,
        }
    }

    fn roster_state(group_by_state: bool) -> AppState {
        let roster = vec![
            politician(1, "Jane Doe", Some("CA"), Some(2026)),
            politician(2, "John Roe", Some("TX"), Some(2028)),
        ];
        AppState {
            filtered: roster.clone(),
            roster,
            group_by_state,
            ..Default::default()
        }
    }

    #[test]
    fn test_roster_text_flat_view() {
        let output = generate_roster_text(&roster_state(false), true);

        assert!(output.contains("Showing 2 of 2 politicians"));
        assert!(output.contains("Up for Election in 2026 (1 politicians)"));
        assert!(output.contains("All Politicians (2)"));
        assert!(output.contains("Jane Doe"));
        assert!(output.contains("next election 2026"));
    }

    #[test]
    fn test_roster_text_grouped_suppresses_upcoming() {
        let output = generate_roster_text(&roster_state(true), true);

        assert!(!output.contains("Up for Election"));
        assert!(output.contains("Politicians by State"));
        // Keys render sorted: CA before TX.
        let ca = output.find("CA (1 politicians)").unwrap();
        let tx = output.find("TX (1 politicians)").unwrap();
        assert!(ca < tx);
    }

    #[test]
    fn test_roster_text_no_upcoming_setting() {
        let output = generate_roster_text(&roster_state(false), false);
        assert!(!output.contains("Up for Election"));
    }

    #[test]
    fn test_roster_text_empty_filter_result() {
        let state = AppState {
            roster: vec![politician(1, "Jane Doe", Some("CA"), None)],
            filtered: Vec::new(),
            ..Default::default()
        };

        let output = generate_roster_text(&state, true);
        assert!(output.contains("Showing 0 of 1 politicians"));
        assert!(output.contains(NO_MATCHES));
    }

    #[test]
    fn test_roster_markdown_sections() {
        let output = generate_roster_markdown(&roster_state(false), true);

        assert!(output.contains("# Political Accountability Tracker"));
        assert!(output.contains("## Up for Election in 2026"));
        assert!(output.contains("## All Politicians (2)"));
    }

    #[test]
    fn test_roster_json_shape() {
        let output = generate_roster_json(&roster_state(false), true).unwrap();

        assert!(output.contains("\"total\": 2"));
        assert!(output.contains("\"matching\": 2"));
        assert!(output.contains("\"upcoming\""));
        assert!(output.contains("\"politicians\""));
        assert!(!output.contains("\"groups\""));
    }

    #[test]
    fn test_roster_json_grouped_shape() {
        let output = generate_roster_json(&roster_state(true), true).unwrap();

        assert!(output.contains("\"groups\""));
        assert!(!output.contains("\"politicians\""));
        assert!(!output.contains("\"upcoming\""));
    }

    #[test]
    fn test_record_text_summary_and_blocks() {
        let p = politician(1, "Jane Doe", Some("CA"), Some(2026));
        let votes = vec![
            vote(VoteChoice::Yes),
            vote(VoteChoice::Yes),
            vote(VoteChoice::No),
        ];

        let output = generate_record_text(&p, &votes);

        assert!(output.contains("Total Votes Cast: 3"));
        assert!(output.contains("Yes Votes: 2 (67%)"));
        assert!(output.contains("No Votes: 1 (33%)"));
        assert!(output.contains("HR-2021-Infrastructure - Infrastructure Investment Act"));
        assert!(output.contains("went through 3 rounds of voting"));
        assert!(output.contains("Arguments for: Creates jobs"));
        assert!(output.contains("Introduced: March 5, 2024"));
        assert!(output.contains("Affects roads, bridges, and broadband internet access nationwide"));
    }

    #[test]
    fn test_record_text_empty_record() {
        let p = politician(1, "Jane Doe", Some("CA"), None);
        let output = generate_record_text(&p, &[]);

        assert!(output.contains("Total Votes Cast: 0"));
        assert!(output.contains("Yes Votes: 0 (0%)"));
        assert!(output.contains(NO_VOTES));
    }

    #[test]
    fn test_record_markdown_table() {
        let p = politician(1, "Jane Doe", Some("CA"), Some(2026));
        let votes = vec![vote(VoteChoice::Yes)];

        let output = generate_record_markdown(&p, &votes);

        assert!(output.contains("# Jane Doe"));
        assert!(output.contains("| 1 | 1 (100%) | 0 (0%) |"));
        assert!(output.contains("### HR-2021-Infrastructure"));
    }

    #[test]
    fn test_record_json_includes_impact() {
        let p = politician(1, "Jane Doe", Some("CA"), None);
        let votes = vec![vote(VoteChoice::Yes)];

        let output = generate_record_json(&p, &votes).unwrap();

        assert!(output.contains("\"summary\""));
        assert!(output.contains("\"yes_pct\": 100"));
        assert!(output.contains("\"impact\""));
    }

    #[test]
    fn test_politician_line_without_state_or_year() {
        let line = politician_line(&politician(1, "Alex Poe", None, None));
        assert_eq!(line, "Alex Poe - U.S. Senator (Democrat), N/A");
    }
}
