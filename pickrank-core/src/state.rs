/// The data model of one ranking session.
///
/// Items live once in the pool and are referred to everywhere else by pool
/// index, so value-equal items can never be confused with one another.
/// All mutation goes through `resolve()` (see `scheduler.rs`).
use crate::constants::MIN_POOL_SIZE;
use crate::error::{RankError, Result};
use crate::types::{Choice, Phase, PresentedPair, Slot};

#[derive(Debug, Clone)]
pub struct RankingState<T> {
    /// Every item to rank, fixed for the session.
    pub(crate) pool: Vec<T>,
    /// Pool indices placed so far, most-preferred first.
    pub(crate) ranked: Vec<usize>,
    /// Index into `ranked` of the current probe.
    pub(crate) cursor: usize,
    /// Pool indices bound to the first and second slot.
    pub(crate) slots: [usize; 2],
    pub(crate) phase: Phase,
    /// Every resolved comparison, in order.
    pub(crate) choices: Vec<Choice>,
}

impl<T> RankingState<T> {
    /// Start a session over `pool`. The first pair is `(pool[0], pool[1])`.
    pub fn new(pool: Vec<T>) -> Result<Self> {
        if pool.len() < MIN_POOL_SIZE {
            return Err(RankError::InvalidInput { len: pool.len() });
        }

        Ok(RankingState {
            ranked: Vec::with_capacity(pool.len()),
            cursor: 0,
            slots: [0, 1],
            phase: Phase::Initial,
            choices: Vec::new(),
            pool,
        })
    }

    /// The pair awaiting a pick, or `None` once complete.
    pub fn current_pair(&self) -> Option<PresentedPair<'_, T>> {
        if self.is_complete() {
            return None;
        }
        Some(PresentedPair {
            first: &self.pool[self.slots[Slot::First.index()]],
            second: &self.pool[self.slots[Slot::Second.index()]],
            phase: self.phase,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Items placed so far, most-preferred first. Final once complete.
    pub fn ranked_list(&self) -> Vec<&T> {
        self.ranked.iter().map(|&idx| &self.pool[idx]).collect()
    }

    /// Same as `ranked_list()`, as pool indices.
    pub fn ranked_indices(&self) -> &[usize] {
        &self.ranked
    }

    /// Consume the session, returning the items in ranked order.
    ///
    /// Items not yet placed are dropped, so call this after completion
    /// unless partial progress is what you want.
    pub fn into_ranked_list(self) -> Vec<T> {
        let mut pool: Vec<Option<T>> = self.pool.into_iter().map(Some).collect();
        self.ranked.iter().filter_map(|&idx| pool[idx].take()).collect()
    }

    pub fn pool(&self) -> &[T] {
        &self.pool
    }

    /// Number of items in the pool.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Always false: construction rejects pools smaller than two.
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Number of items placed in the ranked list.
    pub fn placed(&self) -> usize {
        self.ranked.len()
    }

    /// Index into the ranked list of the probe currently presented.
    pub fn scan_cursor(&self) -> usize {
        self.cursor
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Number of successful `resolve()` calls so far.
    pub fn comparisons(&self) -> usize {
        self.choices.len()
    }

    /// The most `resolve()` calls still needed to finish from here.
    ///
    /// The current candidate can face at most every probe from the cursor
    /// down; each later item can face every item placed before it.
    pub fn remaining_upper_bound(&self) -> usize {
        let n = self.pool.len();
        match self.phase {
            Phase::Complete => 0,
            Phase::Initial => comparison_bounds(n).1,
            Phase::Scanning { .. } => {
                let placed = self.ranked.len();
                let current = placed - self.cursor;
                let later: usize = (placed + 1..n).sum();
                current + later
            }
        }
    }
}

/// Minimum and maximum number of picks needed to rank `n` items.
///
/// Minimum is `n - 1` (every candidate beats the top item or loses to a
/// single-item list), maximum is `n(n-1)/2` (every candidate is walked to
/// the bottom).
pub fn comparison_bounds(n: usize) -> (usize, usize) {
    if n < MIN_POOL_SIZE {
        return (0, 0);
    }
    (n - 1, n * (n - 1) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_presents_first_two_items() {
        let state = RankingState::new(vec!["x", "y", "z"]).unwrap();
        let pair = state.current_pair().unwrap();
        assert_eq!(*pair.first, "x");
        assert_eq!(*pair.second, "y");
        assert_eq!(pair.phase, Phase::Initial);
        assert!(state.ranked_list().is_empty());
        assert_eq!(state.scan_cursor(), 0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_new_rejects_small_pools() {
        assert_eq!(
            RankingState::<i32>::new(vec![]).unwrap_err(),
            RankError::InvalidInput { len: 0 }
        );
        assert_eq!(
            RankingState::new(vec!["only"]).unwrap_err(),
            RankError::InvalidInput { len: 1 }
        );
    }

    #[test]
    fn test_reads_are_idempotent() {
        let state = RankingState::new(vec![1, 2, 3]).unwrap();
        assert_eq!(state.current_pair(), state.current_pair());
        assert_eq!(state.ranked_list(), state.ranked_list());
    }

    #[test]
    fn test_reads_are_idempotent_mid_scan_and_after_completion() {
        let mut state = RankingState::new(vec!["a", "b", "c"]).unwrap();
        state.resolve(Slot::First).unwrap(); // [a, b]
        state.resolve(Slot::First).unwrap(); // a beats c, probe moves to b
        assert_eq!(state.scan_cursor(), 1);

        let pair = state.current_pair();
        assert_eq!(pair, state.current_pair());
        assert_eq!(state.ranked_list(), state.ranked_list());
        assert_eq!(state.scan_cursor(), 1);
        assert_eq!(state.comparisons(), 2);

        state.resolve(Slot::Second).unwrap(); // c beats b
        assert!(state.is_complete());
        assert_eq!(state.current_pair(), None);
        assert_eq!(state.current_pair(), state.current_pair());
        assert_eq!(state.ranked_list(), vec![&"a", &"c", &"b"]);
        assert_eq!(state.ranked_list(), state.ranked_list());
    }

    #[test]
    fn test_comparison_bounds() {
        assert_eq!(comparison_bounds(1), (0, 0));
        assert_eq!(comparison_bounds(2), (1, 1));
        assert_eq!(comparison_bounds(3), (2, 3));
        assert_eq!(comparison_bounds(10), (9, 45));
    }

    #[test]
    fn test_remaining_upper_bound_starts_at_max() {
        let state = RankingState::new(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(state.remaining_upper_bound(), 6);
    }

    #[test]
    fn test_into_ranked_list_keeps_placed_order() {
        let mut state = RankingState::new(vec!["a".to_string(), "b".to_string()]).unwrap();
        state.resolve(Slot::Second).unwrap();
        assert_eq!(state.into_ranked_list(), vec!["b".to_string(), "a".to_string()]);
    }
}
