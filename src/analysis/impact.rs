//! Topic-keyword impact inference.
//!
//! Bill numbers from the data source embed a topic keyword
//! (e.g. "HR-2021-Infrastructure"). The impact sentence shown with each
//! vote is a lookup over an ordered keyword table: first match wins.

/// Ordered (keyword, sentence) pairs. Order is priority order.
pub const IMPACT_TOPICS: &[(&str, &str)] = &[
    (
        "Infrastructure",
        "Affects roads, bridges, and broadband internet access nationwide",
    ),
    (
        "Climate",
        "Impacts environmental policy and green energy investments",
    ),
    (
        "Healthcare",
        "Changes healthcare costs and insurance coverage for millions",
    ),
    ("Tax", "Modifies tax rates and affects household income"),
    (
        "Education",
        "Influences school funding and student loan programs",
    ),
    (
        "Border",
        "Affects immigration policy and border security measures",
    ),
    (
        "Defense",
        "Determines military spending and national security priorities",
    ),
    ("Workers", "Changes labor laws and worker protections"),
    ("Energy", "Affects domestic energy production and prices"),
    (
        "For the People",
        "Reforms voting rights and campaign finance laws",
    ),
];

/// Sentence used when no topic keyword is found in the bill number.
pub const GENERIC_IMPACT: &str = "Significant policy change affecting constituents";

/// Derive the impact sentence for a bill number.
pub fn impact_sentence(bill_number: &str) -> &'static str {
    IMPACT_TOPICS
        .iter()
        .find(|(keyword, _)| bill_number.contains(keyword))
        .map(|(_, sentence)| *sentence)
        .unwrap_or(GENERIC_IMPACT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(
            impact_sentence("HR-2021-Infrastructure"),
            "Affects roads, bridges, and broadband internet access nationwide"
        );
        assert_eq!(
            impact_sentence("S-14-Energy"),
            "Affects domestic energy production and prices"
        );
        assert_eq!(
            impact_sentence("HR-1-For the People"),
            "Reforms voting rights and campaign finance laws"
        );
    }

    #[test]
    fn test_first_match_wins() {
        // "Climate" appears before "Energy" in the table, so a bill naming
        // both gets the climate sentence.
        assert_eq!(
            impact_sentence("S-9-Climate-Energy"),
            "Impacts environmental policy and green energy investments"
        );
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(impact_sentence("HR-404-Unrelated"), GENERIC_IMPACT);
        assert_eq!(impact_sentence(""), GENERIC_IMPACT);
    }
}
