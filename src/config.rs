use crate::common::{Coord, GameError};
use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const STANDARD_FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("carrier", 5),
    ShipType::new("battleship", 4),
    ShipType::new("destroyer", 3),
    ShipType::new("submarine", 3),
    ShipType::new("patrolBoat", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Grid size and fleet definition shared by both sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    size: usize,
    fleet: &'static [ShipType],
}

impl Rules {
    /// Standard 10×10 grid with the five-ship fleet.
    pub const fn standard() -> Self {
        Rules {
            size: BOARD_SIZE,
            fleet: &STANDARD_FLEET,
        }
    }

    /// Validate a custom grid size and fleet.
    pub fn new(size: usize, fleet: &'static [ShipType]) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidRules("board size must be positive"));
        }
        if fleet.is_empty() {
            return Err(GameError::InvalidRules("fleet must not be empty"));
        }
        let mut total = 0usize;
        for (i, def) in fleet.iter().enumerate() {
            if def.length() == 0 {
                return Err(GameError::InvalidLength);
            }
            if def.name().is_empty() {
                return Err(GameError::InvalidRules("ship names must not be empty"));
            }
            if fleet[..i].iter().any(|other| other.name() == def.name()) {
                return Err(GameError::InvalidRules("ship names must be unique"));
            }
            if def.length() > size {
                return Err(GameError::InvalidRules("ship longer than the board"));
            }
            total += def.length();
        }
        if total > size * size {
            return Err(GameError::InvalidRules("fleet does not fit on the board"));
        }
        Ok(Rules { size, fleet })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn fleet(&self) -> &'static [ShipType] {
        self.fleet
    }

    /// Number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Length of the named ship, if it belongs to the fleet.
    pub fn ship_length(&self, name: &str) -> Option<usize> {
        self.ship_type(name).map(|def| def.length())
    }

    /// Canonical fleet entry for `name`.
    pub fn ship_type(&self, name: &str) -> Option<ShipType> {
        self.fleet.iter().copied().find(|def| def.name() == name)
    }

    /// Returns `true` if `coord` lies on the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.0 < self.size && coord.1 < self.size
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::standard()
    }
}
