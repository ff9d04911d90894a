/// Output formatting: numbered list and JSON.
use pickrank_core::{Choice, comparison_bounds, format_ranking};
use serde::Serialize;

use crate::bail;

#[derive(Serialize)]
struct JsonRankedItem<'a> {
    rank: usize,
    name: &'a str,
}

#[derive(Serialize)]
struct JsonChoice<'a> {
    winner: &'a str,
    loser: &'a str,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    items: Vec<JsonRankedItem<'a>>,
    total_comparisons: usize,
    choices: Vec<JsonChoice<'a>>,
}

/// Print the numbered ranking followed by a one-line summary.
pub fn print_text(ranked: &[&String], comparisons: usize) {
    let (min, max) = comparison_bounds(ranked.len());
    println!("{}", format_ranking(ranked));
    println!(
        "\n{} items ranked with {} picks (possible range {}-{})",
        ranked.len(),
        comparisons,
        min,
        max,
    );
}

pub fn render_json(ranked: &[&String], pool: &[String], choices: &[Choice]) -> String {
    let output = JsonOutput {
        items: ranked
            .iter()
            .enumerate()
            .map(|(i, name)| JsonRankedItem { rank: i + 1, name: name.as_str() })
            .collect(),
        total_comparisons: choices.len(),
        choices: choices
            .iter()
            .map(|c| JsonChoice { winner: &pool[c.winner], loser: &pool[c.loser] })
            .collect(),
    };

    serde_json::to_string_pretty(&output)
        .unwrap_or_else(|e| bail(format!("Failed to serialize ranking: {e}")))
}

/// Print results as JSON.
pub fn print_json(ranked: &[&String], pool: &[String], choices: &[Choice]) {
    println!("{}", render_json(ranked, pool, choices));
}
