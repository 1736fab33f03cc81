//! Game board state: cell grid, fleet placement and attack resolution.

use crate::common::{AttackResult, Coord, GameError};
use crate::config::Rules;
use crate::ship::{Orientation, Ship};
use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

/// Random start/axis samples tried per ship before the fleet is restarted.
const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;
/// Full fleet restarts before random placement gives up.
const MAX_FLEET_RESTARTS: usize = 32;

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(&'static str),
    Miss,
    Hit(&'static str),
    Sunk(&'static str),
}

impl Cell {
    /// Returns `true` once the cell has received an attack.
    pub fn is_attacked(&self) -> bool {
        matches!(self, Cell::Miss | Cell::Hit(_) | Cell::Sunk(_))
    }

    /// Name of the ship covering this cell, if any.
    pub fn ship_name(&self) -> Option<&'static str> {
        match *self {
            Cell::Occupied(name) | Cell::Hit(name) | Cell::Sunk(name) => Some(name),
            Cell::Empty | Cell::Miss => None,
        }
    }
}

/// A ship on the board together with the cells it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Placement {
    pub ship: Ship,
    pub coordinates: Vec<Coord>,
    pub orientation: Orientation,
}

/// Outcome of a single attack resolved by a board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Shot {
    pub result: AttackResult,
    pub coordinates: Coord,
    /// Full record of the ship destroyed by this shot.
    #[cfg_attr(feature = "std", serde(skip_serializing_if = "Option::is_none"))]
    pub sunk_ship: Option<Placement>,
}

impl Shot {
    fn plain(result: AttackResult, coordinates: Coord) -> Self {
        Shot {
            result,
            coordinates,
            sunk_ship: None,
        }
    }
}

/// One side's grid and fleet.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    rules: Rules,
    cells: Vec<Cell>,
    fleet: Vec<Placement>,
}

impl Board {
    /// Create an empty board for the given rules.
    pub fn new(rules: Rules) -> Self {
        Board {
            rules,
            cells: vec![Cell::Empty; rules.cell_count()],
            fleet: Vec::with_capacity(rules.fleet().len()),
        }
    }

    /// Empty standard 10×10 board.
    pub fn standard() -> Self {
        Board::new(Rules::standard())
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// State of the cell at `coord`, or `None` off the grid.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Placed ships, in placement order.
    pub fn fleet(&self) -> &[Placement] {
        &self.fleet
    }

    /// Placement record of the named ship.
    pub fn placement(&self, name: &str) -> Option<&Placement> {
        self.fleet.iter().find(|p| p.ship.name() == name)
    }

    /// Fleet names not yet placed, in definition order.
    pub fn unplaced(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules
            .fleet()
            .iter()
            .map(|def| def.name())
            .filter(move |name| self.placement(name).is_none())
    }

    /// Number of placed ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.fleet.iter().filter(|p| !p.ship.is_sunk()).count()
    }

    /// Place the named ship with its first segment at `start`.
    ///
    /// Validation runs to completion before any cell is touched, so a
    /// failed placement leaves the board unchanged.
    pub fn place_ship(
        &mut self,
        name: &str,
        start: Coord,
        orientation: Orientation,
    ) -> Result<&Placement, GameError> {
        let def = self
            .rules
            .ship_type(name)
            .ok_or_else(|| GameError::UnknownShip(name.to_string()))?;
        if self.placement(def.name()).is_some() {
            return Err(GameError::DuplicatePlacement(def.name()));
        }
        let coordinates = orientation.span(start, def.length(), self.rules.size())?;
        if coordinates
            .iter()
            .any(|&c| self.cell(c) != Some(Cell::Empty))
        {
            return Err(GameError::CellOccupied);
        }

        let ship = Ship::try_from(def)?;
        for &c in &coordinates {
            let i = self.rules.size() * c.0 + c.1;
            self.cells[i] = Cell::Occupied(def.name());
        }
        log::debug!(
            "placed {} at {:?} ({:?})",
            def.name(),
            start,
            orientation
        );
        self.fleet.push(Placement {
            ship,
            coordinates,
            orientation,
        });
        Ok(&self.fleet[self.fleet.len() - 1])
    }

    /// Randomly place every ship not yet on the board.
    ///
    /// Samples a uniform start cell and axis per attempt and discards
    /// failures. Works on a scratch copy, so the board only changes once
    /// the whole fleet fits.
    pub fn auto_place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let size = self.rules.size();
        for restart in 0..MAX_FLEET_RESTARTS {
            let mut scratch = self.clone();
            let pending: Vec<&'static str> = self.unplaced().collect();
            let mut complete = true;
            for name in pending {
                let mut placed = false;
                for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                    let orientation = Orientation::ALL[rng.random_range(0..2)];
                    let start = (rng.random_range(0..size), rng.random_range(0..size));
                    if scratch.place_ship(name, start, orientation).is_ok() {
                        placed = true;
                        break;
                    }
                }
                if !placed {
                    complete = false;
                    break;
                }
            }
            if complete {
                *self = scratch;
                return Ok(());
            }
            log::debug!("random placement dead end, restart {}", restart + 1);
        }
        Err(GameError::UnableToPlaceFleet)
    }

    /// Resolve an attack at `coord`.
    ///
    /// Attacked cells and coordinates off the grid report `Already` and
    /// leave the board untouched.
    pub fn receive_attack(&mut self, coord: Coord) -> Shot {
        let Some(i) = self.index(coord) else {
            return Shot::plain(AttackResult::Already, coord);
        };
        match self.cells[i] {
            Cell::Miss | Cell::Hit(_) | Cell::Sunk(_) => Shot::plain(AttackResult::Already, coord),
            Cell::Empty => {
                self.cells[i] = Cell::Miss;
                log::debug!("miss at {:?}", coord);
                Shot::plain(AttackResult::Miss, coord)
            }
            Cell::Occupied(name) => {
                self.cells[i] = Cell::Hit(name);
                // Occupied cells are only written by `place_ship`, which records the fleet entry.
                let Some(slot) = self.fleet.iter().position(|p| p.ship.name() == name) else {
                    return Shot::plain(AttackResult::Hit, coord);
                };
                let placement = &mut self.fleet[slot];
                placement.ship.hit();
                if !placement.ship.is_sunk() {
                    log::debug!("hit {} at {:?}", name, coord);
                    return Shot::plain(AttackResult::Hit, coord);
                }

                let size = self.rules.size();
                for &(r, c) in &placement.coordinates {
                    self.cells[size * r + c] = Cell::Sunk(name);
                }
                log::debug!("sunk {} at {:?}", name, coord);
                Shot {
                    result: AttackResult::Sunk,
                    coordinates: coord,
                    sunk_ship: Some(placement.clone()),
                }
            }
        }
    }

    /// Returns `true` when every ship of the fleet definition is placed.
    pub fn all_ships_placed(&self) -> bool {
        self.fleet.len() == self.rules.fleet().len()
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.fleet.iter().all(|p| p.ship.is_sunk())
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.rules
            .contains(coord)
            .then(|| self.rules.size() * coord.0 + coord.1)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {}, fleet: {:?} }}", self.rules.size(), self.fleet)?;
        for row in self.cells.chunks(self.rules.size()) {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(_) => 'S',
                    Cell::Miss => 'o',
                    Cell::Hit(_) => 'X',
                    Cell::Sunk(_) => '#',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
