//! Ship definitions and per-vessel damage tracking.

use crate::common::{Coord, GameError};
use alloc::vec::Vec;

/// Axis along which a ship extends from its start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Both axes, in sampling order.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// `(row, col)` step taken for each segment.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    /// Every cell covered by a ship of `length` starting at `start`.
    ///
    /// Returns `OutOfBounds` as soon as a segment would fall outside a
    /// `size`×`size` grid.
    pub fn span(self, start: Coord, length: usize, size: usize) -> Result<Vec<Coord>, GameError> {
        let (dr, dc) = self.step();
        let (row, col) = start;
        let mut cells = Vec::with_capacity(length);
        for i in 0..length {
            let r = row.checked_add(dr * i).ok_or(GameError::OutOfBounds)?;
            let c = col.checked_add(dc * i).ok_or(GameError::OutOfBounds)?;
            if r >= size || c >= size {
                return Err(GameError::OutOfBounds);
            }
            cells.push((r, c));
        }
        Ok(cells)
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A single vessel and the damage it has taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    name: &'static str,
    length: usize,
    hits: usize,
}

impl Ship {
    /// Build an undamaged ship. Fails with `InvalidLength` for zero length.
    pub fn new(name: &'static str, length: usize) -> Result<Self, GameError> {
        if length == 0 {
            return Err(GameError::InvalidLength);
        }
        Ok(Self {
            name,
            length,
            hits: 0,
        })
    }

    /// Register a hit. Extra hits on a sunk ship are ignored.
    pub fn hit(&mut self) {
        if self.hits < self.length {
            self.hits += 1;
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Segments still afloat.
    pub fn remaining(&self) -> usize {
        self.length - self.hits
    }
}

impl TryFrom<ShipType> for Ship {
    type Error = GameError;

    fn try_from(def: ShipType) -> Result<Self, Self::Error> {
        Ship::new(def.name(), def.length())
    }
}
