/// Insertion scheduler: the transition function of a ranking session.
///
/// Each `resolve()` is planned against an immutable view of the state first
/// and only then applied, so a rejected pick never touches the session and
/// an accepted one produces the complete next state in a single step.
///
/// The case analysis is over which role won, not which slot:
///
/// | phase    | winner    | probes left | effect                              |
/// |----------|-----------|-------------|-------------------------------------|
/// | initial  | either    | -           | seed `[winner, loser]`              |
/// | scanning | probe     | yes         | advance cursor                      |
/// | scanning | probe     | no          | append candidate, restart scan      |
/// | scanning | candidate | -           | insert before probe, restart scan   |
use crate::error::{RankError, Result};
use crate::state::RankingState;
use crate::types::{Choice, Phase, Slot, Step};

/// A fully decided transition, computed before anything is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    /// Round one: both items of the initial pair are placed.
    Seed { winner: usize, loser: usize },
    /// The probe beat the candidate and more probes remain below it.
    Advance,
    /// The probe beat the candidate and was the last entry: append.
    Append { candidate: usize },
    /// The candidate beat the probe: insert at the probe's position.
    Insert { candidate: usize, at: usize },
}

impl<T> RankingState<T> {
    /// Apply the user's pick and return the next pair or the final ranking.
    ///
    /// Fails with `AlreadyComplete` after the last item has been placed.
    /// On failure the state is unchanged.
    pub fn resolve(&mut self, pick: Slot) -> Result<Step<'_, T>> {
        let transition = self.plan(pick)?;
        let winner = self.slots[pick.index()];
        let loser = self.slots[pick.other().index()];

        self.choices.push(Choice { winner, loser });
        self.apply(transition, pick);

        Ok(match self.current_pair() {
            Some(pair) => Step::Next(pair),
            None => Step::Complete(self.ranked_list()),
        })
    }

    /// `resolve()` with a 1-based slot position, as typed by a user.
    pub fn resolve_position(&mut self, position: usize) -> Result<Step<'_, T>> {
        if self.is_complete() {
            return Err(RankError::AlreadyComplete);
        }
        let pick = Slot::from_position(position)?;
        self.resolve(pick)
    }

    fn plan(&self, pick: Slot) -> Result<Transition> {
        match self.phase {
            Phase::Complete => Err(RankError::AlreadyComplete),
            Phase::Initial => Ok(Transition::Seed {
                winner: self.slots[pick.index()],
                loser: self.slots[pick.other().index()],
            }),
            Phase::Scanning { candidate: candidate_slot } => {
                let candidate = self.slots[candidate_slot.index()];
                let probe_pos = self.cursor;
                debug_assert_eq!(self.ranked[probe_pos], self.slots[candidate_slot.other().index()]);

                if pick == candidate_slot {
                    Ok(Transition::Insert { candidate, at: probe_pos })
                } else if probe_pos + 1 == self.ranked.len() {
                    Ok(Transition::Append { candidate })
                } else {
                    Ok(Transition::Advance)
                }
            }
        }
    }

    fn apply(&mut self, transition: Transition, pick: Slot) {
        tracing::debug!(?transition, ?pick, placed = self.ranked.len(), cursor = self.cursor, "resolving pick");

        match transition {
            Transition::Seed { winner, loser } => {
                self.ranked.push(winner);
                self.ranked.push(loser);
            }
            Transition::Advance => {
                self.cursor += 1;
                // The winning slot held the probe; the candidate stays put.
                self.slots[pick.index()] = self.ranked[self.cursor];
                return;
            }
            Transition::Append { candidate } => self.ranked.push(candidate),
            Transition::Insert { candidate, at } => self.ranked.insert(at, candidate),
        }

        self.cursor = 0;
        self.start_next_scan(pick);
    }

    /// After a placement: finish, or bind the winning slot to the top of the
    /// ranked list and the losing slot to the next undecided pool item.
    fn start_next_scan(&mut self, winning_slot: Slot) {
        let placed = self.ranked.len();
        if placed == self.pool.len() {
            self.phase = Phase::Complete;
            tracing::info!(items = placed, comparisons = self.choices.len(), "ranking complete");
            return;
        }

        self.slots[winning_slot.index()] = self.ranked[0];
        self.slots[winning_slot.other().index()] = placed;
        self.phase = Phase::Scanning { candidate: winning_slot.other() };
    }
}
