/// Mutex-guarded session for hosts that may dispatch picks concurrently.
///
/// `RankingState` itself is a plain single-threaded state machine. When
/// picks can arrive from several threads, wrap it here: every call holds the
/// session lock for its whole duration, so `resolve()` calls are serialized.
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::state::RankingState;
use crate::types::{Slot, Step};

pub struct SharedRanking<T> {
    inner: Arc<Mutex<RankingState<T>>>,
}

impl<T> Clone for SharedRanking<T> {
    fn clone(&self) -> Self {
        SharedRanking { inner: Arc::clone(&self.inner) }
    }
}

impl<T> std::fmt::Debug for SharedRanking<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRanking").finish_non_exhaustive()
    }
}

impl<T: Clone> SharedRanking<T> {
    pub fn new(pool: Vec<T>) -> Result<Self> {
        Ok(Self::from_state(RankingState::new(pool)?))
    }

    pub fn from_state(state: RankingState<T>) -> Self {
        SharedRanking { inner: Arc::new(Mutex::new(state)) }
    }

    /// Resolve a pick and return the next pair, or `None` when complete.
    pub fn resolve(&self, pick: Slot) -> Result<Option<(T, T)>> {
        let mut state = self.lock();
        match state.resolve(pick)? {
            Step::Next(pair) => Ok(Some((pair.first.clone(), pair.second.clone()))),
            Step::Complete(_) => Ok(None),
        }
    }

    pub fn current_pair(&self) -> Option<(T, T)> {
        self.lock()
            .current_pair()
            .map(|pair| (pair.first.clone(), pair.second.clone()))
    }

    pub fn is_complete(&self) -> bool {
        self.lock().is_complete()
    }

    pub fn ranked_list(&self) -> Vec<T> {
        self.lock().ranked_list().into_iter().cloned().collect()
    }

    /// Run `f` against the state while holding the session lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&RankingState<T>) -> R) -> R {
        f(&self.lock())
    }

    // Transitions are planned before they are applied, so a panic while the
    // lock was held cannot have left the state half-updated.
    fn lock(&self) -> MutexGuard<'_, RankingState<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RankError;
    use std::thread;

    #[test]
    fn test_shared_session_walks_to_completion() {
        let session = SharedRanking::new(vec!["X", "Y", "Z"]).unwrap();
        assert_eq!(session.current_pair(), Some(("X", "Y")));
        assert_eq!(session.resolve(Slot::First).unwrap(), Some(("X", "Z")));
        assert_eq!(session.resolve(Slot::First).unwrap(), Some(("Y", "Z")));
        assert_eq!(session.resolve(Slot::First).unwrap(), None);
        assert!(session.is_complete());
        assert_eq!(session.ranked_list(), vec!["X", "Y", "Z"]);
        assert_eq!(session.resolve(Slot::First).unwrap_err(), RankError::AlreadyComplete);
    }

    #[test]
    fn test_concurrent_picks_are_serialized() {
        let n = 8;
        let session = SharedRanking::new((0..n).collect::<Vec<usize>>()).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let session = session.clone();
                thread::spawn(move || {
                    let pick = if t % 2 == 0 { Slot::First } else { Slot::Second };
                    let mut accepted = 0;
                    while session.resolve(pick).is_ok() {
                        accepted += 1;
                    }
                    accepted
                })
            })
            .collect();

        let accepted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert!(session.is_complete());
        assert_eq!(accepted, session.with_state(|s| s.comparisons()));

        let mut ranked = session.ranked_list();
        ranked.sort_unstable();
        assert_eq!(ranked, (0..n).collect::<Vec<_>>());
    }
}
