use crate::error::{RankError, Result};

/// One of the two presentation slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// Map a 1-based on-screen position to a slot.
    pub fn from_position(position: usize) -> Result<Self> {
        match position {
            1 => Ok(Slot::First),
            2 => Ok(Slot::Second),
            other => Err(RankError::InvalidPick(format!(
                "slot {other} does not exist, expected 1 or 2"
            ))),
        }
    }

    /// 1-based on-screen position.
    pub fn position(self) -> usize {
        match self {
            Slot::First => 1,
            Slot::Second => 2,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }

    pub(crate) fn index(self) -> usize {
        self.position() - 1
    }
}

/// Which of the three pair configurations the session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Both slots hold undecided pool items; nothing is ranked yet.
    Initial,
    /// One slot holds the candidate, the other the probe at the scan cursor.
    Scanning { candidate: Slot },
    /// Every pool item is ranked. No pair is presented.
    Complete,
}

/// A resolved comparison, recorded by pool index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Choice {
    pub winner: usize,
    pub loser: usize,
}

/// The two items currently bound to the presentation slots.
#[derive(Debug, PartialEq, Eq)]
pub struct PresentedPair<'a, T> {
    pub first: &'a T,
    pub second: &'a T,
    pub phase: Phase,
}

// Derived Clone/Copy would require `T: Clone`.
impl<T> Clone for PresentedPair<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PresentedPair<'_, T> {}

impl<'a, T> PresentedPair<'a, T> {
    pub fn get(&self, slot: Slot) -> &'a T {
        match slot {
            Slot::First => self.first,
            Slot::Second => self.second,
        }
    }

    /// Slot holding the candidate, if a scan is in progress.
    pub fn candidate_slot(&self) -> Option<Slot> {
        match self.phase {
            Phase::Scanning { candidate } => Some(candidate),
            _ => None,
        }
    }
}

/// What a successful `resolve()` hands back to the presenter.
#[derive(Debug, PartialEq, Eq)]
pub enum Step<'a, T> {
    /// The next pair to present.
    Next(PresentedPair<'a, T>),
    /// The ranking is complete; most-preferred first.
    Complete(Vec<&'a T>),
}

impl<'a, T> Step<'a, T> {
    pub fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }
}
