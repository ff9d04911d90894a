/// Turning what the user typed into a pick.
///
/// Accepts slot numbers and a few spelled-out aliases so the prompt reads
/// naturally whether the pair is shown side by side or stacked.
use pickrank_core::{RankError, Slot};

/// One answer from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickInput {
    Pick(Slot),
    Quit,
}

/// Parse a single answer. Case and surrounding whitespace are ignored.
pub fn parse_pick(input: &str) -> Result<PickInput, RankError> {
    let answer = input.trim().to_ascii_lowercase();
    match answer.as_str() {
        "1" | "a" | "first" | "left" | "l" => Ok(PickInput::Pick(Slot::First)),
        "2" | "b" | "second" | "right" | "r" => Ok(PickInput::Pick(Slot::Second)),
        "q" | "quit" | "exit" => Ok(PickInput::Quit),
        "" => Err(RankError::InvalidPick("empty answer".to_string())),
        other => match other.parse::<usize>() {
            Ok(position) => Slot::from_position(position).map(PickInput::Pick),
            Err(_) => Err(RankError::InvalidPick(format!("unrecognized answer \"{}\"", input.trim()))),
        },
    }
}

/// Parse a scripted pick sequence such as `"1,2,2"` or `"a b a"`.
pub fn parse_pick_script(script: &str) -> Result<Vec<Slot>, RankError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| match parse_pick(token)? {
            PickInput::Pick(slot) => Ok(slot),
            PickInput::Quit => Err(RankError::InvalidPick(format!(
                "\"{token}\" cannot appear in a pick script"
            ))),
        })
        .collect()
}
