// Hunt/target guessing logic for computer players.
//
// Shots are uniform over unattacked cells until something is hit. Each hit
// queues its four orthogonal neighbours, which are tried first in FIFO order.
// A sinking empties the queue. Two damaged ships share one queue, so
// neighbours of one may be spent while chasing the other.

use crate::{
    common::{AttackResult, Coord},
    config::Rules,
};
use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use rand::{seq::IndexedRandom, Rng};

/// Queued candidate. May lie off the grid; filtered when consumed.
pub type Candidate = (isize, isize);

/// Pending-target queue driving the computer's shot selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuntTarget {
    pending: VecDeque<Candidate>,
}

impl HuntTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates still queued, front first.
    pub fn pending(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.pending.iter().copied()
    }

    /// Returns `true` while no hit is being followed up.
    pub fn is_hunting(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queue a candidate at the back.
    pub fn push(&mut self, candidate: Candidate) {
        self.pending.push_back(candidate);
    }

    /// Pick the next coordinate to fire at.
    ///
    /// Drains queued candidates until one is on the grid and unattacked,
    /// then falls back to a uniform random unattacked cell. `None` once
    /// every cell has been attacked.
    pub fn next_target<R: Rng + ?Sized>(
        &mut self,
        rules: &Rules,
        attacked: &BTreeSet<Coord>,
        rng: &mut R,
    ) -> Option<Coord> {
        while let Some((r, c)) = self.pending.pop_front() {
            if r < 0 || c < 0 {
                continue;
            }
            let coord = (r as usize, c as usize);
            if rules.contains(coord) && !attacked.contains(&coord) {
                log::trace!("targeting queued {:?}", coord);
                return Some(coord);
            }
        }
        let coord = random_target(rules, attacked, rng)?;
        log::trace!("hunting at {:?}", coord);
        Some(coord)
    }

    /// Update the queue with the result of a shot at `coord`.
    pub fn observe(&mut self, coord: Coord, result: AttackResult) {
        match result {
            AttackResult::Hit => {
                let (r, c) = (coord.0 as isize, coord.1 as isize);
                self.pending
                    .extend([(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)]);
            }
            AttackResult::Sunk => self.pending.clear(),
            AttackResult::Miss | AttackResult::Already => {}
        }
    }
}

/// Uniform choice among cells not yet in `attacked`.
pub fn random_target<R: Rng + ?Sized>(
    rules: &Rules,
    attacked: &BTreeSet<Coord>,
    rng: &mut R,
) -> Option<Coord> {
    let size = rules.size();
    let free: Vec<Coord> = (0..size)
        .flat_map(|r| (0..size).map(move |c| (r, c)))
        .filter(|coord| !attacked.contains(coord))
        .collect();
    free.choose(rng).copied()
}
