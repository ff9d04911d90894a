/// Presenter loop: show each pair, collect a pick, feed it to the engine.
///
/// Picks come either from a script (`--picks`) or from answers typed on
/// `input`. Prompts are written to `out` so stdout stays free for the
/// final ranking.
use pickrank_core::{RankingState, Slot};
use std::io::{BufRead, Write};

use crate::parse::{PickInput, parse_pick};
use crate::prompt::{Progress, build_prompt};

/// Where the next pick comes from.
pub enum PickSource {
    Scripted { picks: std::vec::IntoIter<Slot>, total: usize },
    Interactive,
}

impl PickSource {
    pub fn scripted(picks: Vec<Slot>) -> Self {
        let total = picks.len();
        PickSource::Scripted { picks: picks.into_iter(), total }
    }

    /// Scripted picks not consumed yet. Always 0 when interactive.
    pub fn unused(&self) -> usize {
        match self {
            PickSource::Scripted { picks, .. } => picks.len(),
            PickSource::Interactive => 0,
        }
    }
}

pub struct PromptStyle<'a> {
    pub question: &'a str,
    pub show_progress: bool,
}

/// How a session ended without error.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Complete,
    /// The user quit or input ended before the ranking was complete.
    Abandoned,
}

/// Run picks until the ranking completes, the user walks away, or a
/// scripted sequence runs dry (an error).
pub fn run_session<R: BufRead, W: Write>(
    state: &mut RankingState<String>,
    source: &mut PickSource,
    input: &mut R,
    out: &mut W,
    style: &PromptStyle<'_>,
) -> Result<Outcome, String> {
    while let Some(pair) = state.current_pair() {
        let progress = style.show_progress.then(|| Progress {
            placed: state.placed(),
            total: state.len(),
            max_remaining: state.remaining_upper_bound(),
        });
        let text = build_prompt(style.question, pair.get(Slot::First), pair.get(Slot::Second), progress);

        let pick = match source {
            PickSource::Scripted { picks, total } => picks.next().ok_or_else(|| {
                format!("Ran out of scripted picks after {total}; the ranking needs more")
            })?,
            PickSource::Interactive => match ask(input, out, &text)? {
                Some(slot) => slot,
                None => return Ok(Outcome::Abandoned),
            },
        };

        state.resolve(pick).map_err(|e| e.to_string())?;
    }

    let unused = source.unused();
    if unused > 0 {
        tracing::warn!(unused, "ranking finished before all scripted picks were used");
    }
    Ok(Outcome::Complete)
}

/// Show a prompt and read answers until one is valid.
/// Returns `None` when the user quits or input ends.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<Slot>, String> {
    loop {
        write!(out, "{text}")
            .and_then(|_| out.flush())
            .map_err(|e| format!("Failed to write prompt: {e}"))?;

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => return Ok(None),
            Ok(_) => {}
            Err(e) => return Err(format!("Failed to read answer: {e}")),
        }

        match parse_pick(&line) {
            Ok(PickInput::Pick(slot)) => return Ok(Some(slot)),
            Ok(PickInput::Quit) => return Ok(None),
            Err(e) => writeln!(out, "  {e}. Type 1 or 2.")
                .map_err(|e| format!("Failed to write prompt: {e}"))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, empty};

    const STYLE: PromptStyle<'static> = PromptStyle { question: "Which?", show_progress: true };

    fn state_of(items: &[&str]) -> RankingState<String> {
        RankingState::new(items.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    fn ranked(state: &RankingState<String>) -> Vec<&str> {
        state.ranked_list().into_iter().map(String::as_str).collect()
    }

    #[test]
    fn test_ask_reprompts_until_valid_answer() {
        let mut out = Vec::new();
        let pick = ask(&mut Cursor::new("x\n7\n2\n"), &mut out, "pick: ").unwrap();
        assert_eq!(pick, Some(Slot::Second));

        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("pick: ").count(), 3);
        assert_eq!(shown.matches("Type 1 or 2.").count(), 2);
    }

    #[test]
    fn test_ask_returns_none_on_quit_or_end_of_input() {
        assert_eq!(ask(&mut Cursor::new(""), &mut Vec::new(), "pick: ").unwrap(), None);
        assert_eq!(ask(&mut Cursor::new("q\n1\n"), &mut Vec::new(), "pick: ").unwrap(), None);
    }

    #[test]
    fn test_scripted_session_completes() {
        let mut state = state_of(&["a", "b", "c"]);
        let mut source = PickSource::scripted(vec![Slot::First, Slot::Second]);

        let outcome = run_session(&mut state, &mut source, &mut empty(), &mut Vec::new(), &STYLE).unwrap();
        assert_eq!(outcome, Outcome::Complete);
        assert_eq!(ranked(&state), vec!["c", "a", "b"]);
        assert_eq!(source.unused(), 0);
    }

    #[test]
    fn test_short_script_is_an_error() {
        let mut state = state_of(&["a", "b", "c"]);
        let mut source = PickSource::scripted(vec![Slot::First]);

        let err = run_session(&mut state, &mut source, &mut empty(), &mut Vec::new(), &STYLE).unwrap_err();
        assert!(err.contains("Ran out of scripted picks after 1"), "got: {err}");
        assert!(!state.is_complete());
        assert_eq!(state.comparisons(), 1);
    }

    #[test]
    fn test_leftover_script_picks_are_not_an_error() {
        let mut state = state_of(&["a", "b"]);
        let mut source = PickSource::scripted(vec![Slot::Second, Slot::First, Slot::First]);

        let outcome = run_session(&mut state, &mut source, &mut empty(), &mut Vec::new(), &STYLE).unwrap();
        assert_eq!(outcome, Outcome::Complete);
        assert_eq!(ranked(&state), vec!["b", "a"]);
        assert_eq!(source.unused(), 2);
    }

    #[test]
    fn test_interactive_session_shows_pairs_and_progress() {
        let mut state = state_of(&["a", "b", "c"]);
        let mut out = Vec::new();

        let outcome = run_session(
            &mut state,
            &mut PickSource::Interactive,
            &mut Cursor::new("1\nhuh\n1\n1\n"),
            &mut out,
            &STYLE,
        )
        .unwrap();
        assert_eq!(outcome, Outcome::Complete);
        assert_eq!(ranked(&state), vec!["a", "b", "c"]);

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Which?  [0/3 placed, at most 3 picks left]\n  1) a\n  2) b\n"));
        assert!(shown.contains("  1) b\n  2) c\n"));
    }

    #[test]
    fn test_interactive_session_can_be_abandoned() {
        let mut state = state_of(&["a", "b", "c"]);
        let outcome = run_session(
            &mut state,
            &mut PickSource::Interactive,
            &mut Cursor::new("2\nq\n"),
            &mut Vec::new(),
            &STYLE,
        )
        .unwrap();
        assert_eq!(outcome, Outcome::Abandoned);
        assert_eq!(ranked(&state), vec!["b", "a"]);
        assert!(!state.is_complete());
    }
}
