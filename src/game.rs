//! Match orchestration: placement phase, alternating turns and win detection.

use crate::{
    board::Placement,
    common::{AttackResult, Coord, GameError},
    config::Rules,
    player::{AttackOutcome, Player},
    ship::Orientation,
};
use alloc::string::String;
use rand::Rng;

/// Name given to the computer opponent.
pub const COMPUTER_NAME: &str = "AI";

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Human is still placing ships.
    Placement,
    /// Shots are being exchanged; carries whose turn it is.
    InProgress(Side),
    /// A fleet was destroyed.
    Finished { winner: Side },
}

/// Human vs. computer match.
///
/// Owns both players and threads each attack to the opposing board. The
/// human always fires first, and a repeated coordinate keeps the turn.
/// Any pause before the computer fires is left to the caller.
#[derive(Debug, Clone)]
pub struct GameEngine {
    rules: Rules,
    human: Player,
    computer: Player,
    status: GameStatus,
    turns: usize,
}

impl GameEngine {
    /// Standard match for a human named `human_name`.
    pub fn new(human_name: impl Into<String>) -> Self {
        Self::with_rules(Rules::standard(), human_name)
    }

    pub fn with_rules(rules: Rules, human_name: impl Into<String>) -> Self {
        Self {
            rules,
            human: Player::new(human_name).with_rules(rules),
            computer: Player::computer(COMPUTER_NAME).with_rules(rules),
            status: GameStatus::Placement,
            turns: 0,
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side expected to fire next, if the match is running.
    pub fn turn(&self) -> Option<Side> {
        match self.status {
            GameStatus::InProgress(side) => Some(side),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Completed computer turns, i.e. full rounds played.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Place one of the human's ships.
    pub fn place_human_ship(
        &mut self,
        name: &str,
        start: Coord,
        orientation: Orientation,
    ) -> Result<&Placement, GameError> {
        self.ensure_placement()?;
        self.human.place_ship(name, start, orientation)
    }

    /// Randomly place whatever the human has not placed yet.
    pub fn place_human_ships_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&[Placement], GameError> {
        self.ensure_placement()?;
        self.human.place_ships_randomly(rng)
    }

    /// Deploy the computer fleet and hand the first turn to the human.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.ensure_placement()?;
        if !self.human.board().all_ships_placed() {
            return Err(GameError::FleetIncomplete);
        }
        self.computer.place_ships_randomly(rng)?;
        self.status = GameStatus::InProgress(Side::Human);
        log::info!("match started: {} vs {}", self.human.name(), self.computer.name());
        Ok(())
    }

    /// Human fires at `coord` on the computer board.
    pub fn human_attack(&mut self, coord: Coord) -> Result<AttackOutcome, GameError> {
        self.ensure_turn(Side::Human)?;
        let outcome = self.human.attack(self.computer.board_mut(), coord);
        self.after_attack(Side::Human, &outcome);
        Ok(outcome)
    }

    /// Computer picks and fires its shot at the human board.
    pub fn computer_attack<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<AttackOutcome, GameError> {
        self.ensure_turn(Side::Computer)?;
        let outcome = self.computer.smart_attack(self.human.board_mut(), rng)?;
        self.turns += 1;
        self.after_attack(Side::Computer, &outcome);
        Ok(outcome)
    }

    /// Discard both players and return to the placement phase.
    pub fn reset(&mut self) {
        let name = String::from(self.human.name());
        *self = Self::with_rules(self.rules, name);
        log::info!("match reset");
    }

    fn after_attack(&mut self, side: Side, outcome: &AttackOutcome) {
        log::debug!("{}", outcome.message);
        if outcome.result() == AttackResult::Already {
            return;
        }
        let target = match side {
            Side::Human => &self.computer,
            Side::Computer => &self.human,
        };
        self.status = if target.board().all_ships_sunk() {
            log::info!("{:?} wins", side);
            GameStatus::Finished { winner: side }
        } else {
            GameStatus::InProgress(side.opponent())
        };
    }

    fn ensure_placement(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::Placement => Ok(()),
            GameStatus::InProgress(_) => Err(GameError::AlreadyStarted),
            GameStatus::Finished { .. } => Err(GameError::GameOver),
        }
    }

    fn ensure_turn(&self, side: Side) -> Result<(), GameError> {
        match self.status {
            GameStatus::Placement => Err(GameError::NotStarted),
            GameStatus::Finished { .. } => Err(GameError::GameOver),
            GameStatus::InProgress(turn) if turn != side => Err(GameError::OutOfTurn),
            GameStatus::InProgress(_) => Ok(()),
        }
    }
}
