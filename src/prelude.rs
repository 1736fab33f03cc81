//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackOutcome, AttackResult, Board, Cell, Coord, GameEngine, GameError, GameStatus,
    Orientation, Player, Rules, Side, BOARD_SIZE, STANDARD_FLEET,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
