/// pickrank-core: interactive insertion-ranking engine.
///
/// Builds a total order over a list of items by asking "which of these two
/// do you prefer?" one pair at a time. Each pick is fed back through
/// `resolve()`, which places the item being scanned or moves on to the next
/// probe, and hands back the next pair to show. No IO, no threads, no
/// blocking: the caller waits for the user however it likes.
///
/// Candidates are scanned against the ranked list from the top down and
/// inserted before the first entry they beat. The engine trusts the user to
/// be transitive and never re-asks a decided question.
///
/// # Quick start
///
/// ```rust
/// use pickrank_core::{format_ranking, RankingState, Slot, Step};
///
/// let mut state = RankingState::new(vec!["Pizza", "Sushi", "Tacos"]).unwrap();
///
/// // Pizza vs Sushi: Pizza. Pizza vs Tacos: Pizza. Sushi vs Tacos: Tacos.
/// state.resolve(Slot::First).unwrap();
/// state.resolve(Slot::First).unwrap();
/// let step = state.resolve(Slot::Second).unwrap();
///
/// let Step::Complete(ranking) = step else { panic!("expected a full ranking") };
/// assert_eq!(ranking, vec![&"Pizza", &"Tacos", &"Sushi"]);
/// println!("{}", format_ranking(&ranking));
/// ```

pub mod constants;
pub mod error;
pub mod format;
pub mod scheduler;
pub mod session;
pub mod state;
pub mod types;

// Re-export primary public API at crate root.
pub use error::{RankError, Result};
pub use format::format_ranking;
pub use session::SharedRanking;
pub use state::{RankingState, comparison_bounds};
pub use types::{Choice, Phase, PresentedPair, Slot, Step};
