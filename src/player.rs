//! Human and computer players: board ownership and attack bookkeeping.

use crate::{
    ai::HuntTarget,
    board::{Board, Placement, Shot},
    common::{AttackResult, Coord, GameError},
    config::Rules,
    ship::Orientation,
};
use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use rand::Rng;

/// Result of an attack as reported to the caller, with a readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct AttackOutcome {
    #[cfg_attr(feature = "std", serde(flatten))]
    pub shot: Shot,
    pub message: String,
}

impl AttackOutcome {
    pub fn result(&self) -> AttackResult {
        self.shot.result
    }

    pub fn coordinates(&self) -> Coord {
        self.shot.coordinates
    }

    /// Record of the ship sunk by this attack, if any.
    pub fn sunk_ship(&self) -> Option<&Placement> {
        self.shot.sunk_ship.as_ref()
    }
}

/// A participant in a match.
///
/// Computer players carry a [`HuntTarget`] queue and may call
/// [`Player::smart_attack`]; human players pick their own coordinates.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    board: Board,
    attacks: BTreeSet<Coord>,
    targeting: Option<HuntTarget>,
}

impl Player {
    /// Human player with an empty standard board.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board: Board::standard(),
            attacks: BTreeSet::new(),
            targeting: None,
        }
    }

    /// Computer player with an empty standard board.
    pub fn computer(name: impl Into<String>) -> Self {
        Self {
            targeting: Some(HuntTarget::new()),
            ..Self::new(name)
        }
    }

    /// Replace the board with an empty one built from `rules`.
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.board = Board::new(rules);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_computer(&self) -> bool {
        self.targeting.is_some()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Coordinates already fired at on the opponent board.
    pub fn attacked(&self) -> &BTreeSet<Coord> {
        &self.attacks
    }

    pub fn has_attacked(&self, coord: Coord) -> bool {
        self.attacks.contains(&coord)
    }

    /// Targeting state; `None` for human players.
    pub fn targeting(&self) -> Option<&HuntTarget> {
        self.targeting.as_ref()
    }

    pub fn targeting_mut(&mut self) -> Option<&mut HuntTarget> {
        self.targeting.as_mut()
    }

    /// Place one ship on this player's board.
    pub fn place_ship(
        &mut self,
        name: &str,
        start: Coord,
        orientation: Orientation,
    ) -> Result<&Placement, GameError> {
        self.board.place_ship(name, start, orientation)
    }

    /// Randomly place every remaining ship and return the resulting fleet.
    pub fn place_ships_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&[Placement], GameError> {
        self.board.auto_place_fleet(rng)?;
        Ok(self.board.fleet())
    }

    /// Fire at `coord` on the opponent board.
    ///
    /// Repeated coordinates report `Already` without touching either side.
    /// Coordinates off the grid report `Already` and are not recorded.
    pub fn attack(&mut self, opponent: &mut Board, coord: Coord) -> AttackOutcome {
        if self.attacks.contains(&coord) {
            return self.outcome(Shot {
                result: AttackResult::Already,
                coordinates: coord,
                sunk_ship: None,
            });
        }
        if !opponent.rules().contains(coord) {
            let (row, col) = coord;
            return AttackOutcome {
                shot: opponent.receive_attack(coord),
                message: format!(
                    "{} cannot fire at ({}, {}): outside the grid.",
                    self.name, row, col
                ),
            };
        }

        self.attacks.insert(coord);
        let shot = opponent.receive_attack(coord);
        self.outcome(shot)
    }

    /// Let the computer choose and fire its next shot.
    ///
    /// Fails with `NotComputerPlayer` for humans and with `NoLegalMoves`
    /// once every opponent cell has been attacked.
    pub fn smart_attack<R: Rng + ?Sized>(
        &mut self,
        opponent: &mut Board,
        rng: &mut R,
    ) -> Result<AttackOutcome, GameError> {
        let Some(targeting) = self.targeting.as_mut() else {
            return Err(GameError::NotComputerPlayer);
        };
        let coord = targeting
            .next_target(opponent.rules(), &self.attacks, rng)
            .ok_or(GameError::NoLegalMoves)?;

        let outcome = self.attack(opponent, coord);
        if let Some(targeting) = self.targeting.as_mut() {
            targeting.observe(coord, outcome.result());
        }
        Ok(outcome)
    }

    fn outcome(&self, shot: Shot) -> AttackOutcome {
        let (row, col) = shot.coordinates;
        let message = match (&shot.result, &shot.sunk_ship) {
            (AttackResult::Miss, _) => {
                format!("{} fired at ({}, {}) and missed.", self.name, row, col)
            }
            (AttackResult::Hit, _) => {
                format!("{} scored a hit at ({}, {})!", self.name, row, col)
            }
            (AttackResult::Sunk, Some(sunk)) => format!(
                "{} sunk the {} at ({}, {})!",
                self.name,
                sunk.ship.name(),
                row,
                col
            ),
            (AttackResult::Sunk, None) => {
                format!("{} sunk a ship at ({}, {})!", self.name, row, col)
            }
            (AttackResult::Already, _) => {
                format!("{} already fired at ({}, {}).", self.name, row, col)
            }
        };
        AttackOutcome { shot, message }
    }
}
