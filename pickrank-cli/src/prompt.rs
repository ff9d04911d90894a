/// Prompt building for one pairwise question.

/// Question shown above each pair when the config doesn't override it.
pub const DEFAULT_QUESTION: &str = "Which do you prefer?";

/// How far along the session is, shown next to the question.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    pub placed: usize,
    pub total: usize,
    pub max_remaining: usize,
}

/// Build the text shown for one pair. The answer is read on the last line.
pub fn build_prompt(question: &str, first: &str, second: &str, progress: Option<Progress>) -> String {
    let status = match progress {
        Some(p) => format!(
            "  [{}/{} placed, at most {} picks left]",
            p.placed, p.total, p.max_remaining
        ),
        None => String::new(),
    };
    format!(
        "\n{question}{status}\n\
         \x20 1) {first}\n\
         \x20 2) {second}\n\
         Pick 1 or 2 (q to quit): "
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_contains_all_parts() {
        let prompt = build_prompt("Which is tastier?", "Pizza", "Sushi", None);
        assert!(prompt.starts_with("\nWhich is tastier?\n"));
        assert!(prompt.contains("  1) Pizza\n"));
        assert!(prompt.contains("  2) Sushi\n"));
        assert!(prompt.ends_with("Pick 1 or 2 (q to quit): "));
    }

    #[test]
    fn test_build_prompt_with_progress() {
        let progress = Progress { placed: 2, total: 5, max_remaining: 7 };
        let prompt = build_prompt(DEFAULT_QUESTION, "a", "b", Some(progress));
        assert!(prompt.contains("Which do you prefer?  [2/5 placed, at most 7 picks left]\n"));
    }
}
