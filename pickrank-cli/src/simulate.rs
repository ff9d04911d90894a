/// Simulate command: drives the engine with a scripted user.
///
/// Each trial draws a hidden preference order over N anonymous items and
/// answers every presented pair from it, optionally flipping an answer at
/// random to model an inconsistent user. Reports how many picks each ranking
/// took against the theoretical bounds and how close the result landed to
/// the hidden order.

use pickrank_core::{RankingState, Slot, comparison_bounds};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::bail;

/// Outcome of a single simulated session.
struct TrialOutcome {
    comparisons: usize,
    exact: bool,
    /// Sum over items of |final position - hidden position|.
    displacement: usize,
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub size: usize,
    pub trials: usize,
    pub flip_rate: f64,
    pub seed: u64,
    pub min_comparisons: usize,
    pub max_comparisons: usize,
    pub mean_comparisons: f64,
    pub lower_bound: usize,
    pub upper_bound: usize,
    pub exact_recoveries: usize,
    pub mean_displacement: f64,
}

/// Run `trials` simulated sessions over `size` items.
pub fn run_simulation(size: usize, trials: usize, flip_rate: f64, seed: Option<u64>) -> SimulationReport {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);

    let outcomes: Vec<TrialOutcome> = (0..trials)
        .map(|trial| {
            let outcome = simulate_once(&mut rng, size, flip_rate);
            tracing::debug!(
                trial,
                comparisons = outcome.comparisons,
                exact = outcome.exact,
                "trial finished"
            );
            outcome
        })
        .collect();

    let (lower_bound, upper_bound) = comparison_bounds(size);
    let total: usize = outcomes.iter().map(|o| o.comparisons).sum();
    let displacement: usize = outcomes.iter().map(|o| o.displacement).sum();

    SimulationReport {
        size,
        trials,
        flip_rate,
        seed,
        min_comparisons: outcomes.iter().map(|o| o.comparisons).min().unwrap_or(0),
        max_comparisons: outcomes.iter().map(|o| o.comparisons).max().unwrap_or(0),
        mean_comparisons: total as f64 / trials.max(1) as f64,
        lower_bound,
        upper_bound,
        exact_recoveries: outcomes.iter().filter(|o| o.exact).count(),
        mean_displacement: displacement as f64 / (trials.max(1) * size) as f64,
    }
}

fn simulate_once(rng: &mut StdRng, size: usize, flip_rate: f64) -> TrialOutcome {
    let mut hidden: Vec<usize> = (0..size).collect();
    hidden.shuffle(rng);

    // hidden_rank[item] = position of item in the hidden order
    let mut hidden_rank = vec![0; size];
    for (pos, &item) in hidden.iter().enumerate() {
        hidden_rank[item] = pos;
    }

    let mut state = RankingState::new((0..size).collect::<Vec<usize>>())
        .unwrap_or_else(|e| bail(format!("Cannot simulate: {e}")));

    while let Some(pair) = state.current_pair() {
        let mut pick = if hidden_rank[*pair.first] < hidden_rank[*pair.second] {
            Slot::First
        } else {
            Slot::Second
        };
        if flip_rate > 0.0 && rng.random_bool(flip_rate) {
            pick = pick.other();
        }
        state
            .resolve(pick)
            .unwrap_or_else(|e| bail(format!("Engine rejected a simulated pick: {e}")));
    }

    let ranked = state.ranked_indices();
    let displacement = ranked
        .iter()
        .enumerate()
        .map(|(pos, &item)| pos.abs_diff(hidden_rank[item]))
        .sum();

    TrialOutcome {
        comparisons: state.comparisons(),
        exact: ranked == hidden.as_slice(),
        displacement,
    }
}

pub fn print_report(report: &SimulationReport, json: bool) {
    if json {
        let text = serde_json::to_string_pretty(report)
            .unwrap_or_else(|e| bail(format!("Failed to serialize report: {e}")));
        println!("{text}");
        return;
    }

    println!("Simulated {} rankings of {} items (seed {})", report.trials, report.size, report.seed);
    if report.flip_rate > 0.0 {
        println!("Answer flip rate: {:.1}%", report.flip_rate * 100.0);
    }
    println!(
        "Picks per ranking: min {} | mean {:.2} | max {}  (bounds {}-{})",
        report.min_comparisons,
        report.mean_comparisons,
        report.max_comparisons,
        report.lower_bound,
        report.upper_bound,
    );
    println!(
        "Hidden order recovered exactly: {}/{} | mean displacement per item: {:.3}",
        report.exact_recoveries, report.trials, report.mean_displacement,
    );
}
