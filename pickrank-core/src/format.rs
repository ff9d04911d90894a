use std::fmt::Display;

use crate::constants::RANKED_LIST_HEADING;

/// Render a ranking as a 1-based numbered listing, most-preferred first.
///
/// ```rust
/// use pickrank_core::format_ranking;
///
/// let text = format_ranking(&["Pizza", "Sushi"]);
/// assert_eq!(text, "Your Ranked List:\n\n1. Pizza\n2. Sushi");
/// ```
pub fn format_ranking<D: Display>(list: &[D]) -> String {
    let lines: Vec<String> = list
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect();
    format!("{RANKED_LIST_HEADING}\n\n{}", lines.join("\n"))
}
