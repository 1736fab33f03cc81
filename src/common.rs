//! Common types for Broadside: coordinates, attack results and errors.

use alloc::string::String;

/// A `(row, col)` position on the grid.
pub type Coord = (usize, usize);

/// Kind of outcome produced by an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum AttackResult {
    /// Shot landed in water.
    Miss,
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot destroyed the last segment of a ship.
    Sunk,
    /// The cell was already attacked; nothing changed.
    Already,
}

/// Errors returned by rules, placement and match operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Ship length must be a positive integer.
    InvalidLength,
    /// Named ship is not part of the fleet definition.
    UnknownShip(String),
    /// Ship with this name is already on the board.
    DuplicatePlacement(&'static str),
    /// Ship span leaves the grid.
    OutOfBounds,
    /// Ship span crosses a cell that is not empty.
    CellOccupied,
    /// Smart attack requested from a human player.
    NotComputerPlayer,
    /// Every cell of the opponent grid was already attacked.
    NoLegalMoves,
    /// Board size and fleet definition cannot describe a playable game.
    InvalidRules(&'static str),
    /// Random placement could not fit the remaining fleet.
    UnableToPlaceFleet,
    /// Match cannot start before every ship is placed.
    FleetIncomplete,
    /// Match has not started yet.
    NotStarted,
    /// Match already left the placement phase.
    AlreadyStarted,
    /// Match already has a winner.
    GameOver,
    /// It is the other side's turn.
    OutOfTurn,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidLength => write!(f, "Ship length must be a positive integer"),
            GameError::UnknownShip(name) => write!(f, "Invalid ship: {}", name),
            GameError::DuplicatePlacement(name) => write!(f, "{} already placed", name),
            GameError::OutOfBounds => write!(f, "Invalid placement: out of bounds"),
            GameError::CellOccupied => write!(f, "Invalid placement: cell already occupied"),
            GameError::NotComputerPlayer => {
                write!(f, "Smart attack is only available to computer players")
            }
            GameError::NoLegalMoves => write!(f, "Every cell has already been attacked"),
            GameError::InvalidRules(reason) => write!(f, "Invalid rules: {}", reason),
            GameError::UnableToPlaceFleet => write!(f, "Unable to place the fleet randomly"),
            GameError::FleetIncomplete => write!(f, "Not every ship has been placed"),
            GameError::NotStarted => write!(f, "The match has not started"),
            GameError::AlreadyStarted => write!(f, "The match has already started"),
            GameError::GameOver => write!(f, "The match is over"),
            GameError::OutOfTurn => write!(f, "It is not this side's turn"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
