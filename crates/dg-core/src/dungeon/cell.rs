//! Cell categories

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Occupancy of one grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellType {
    #[default]
    Empty = 0,
    Room = 1,
    Corridor = 2,
}

impl CellType {
    /// Room or corridor: anything a tile gets built on
    pub const fn is_solid(&self) -> bool {
        matches!(self, CellType::Room | CellType::Corridor)
    }

    /// Display character for plain map dumps
    pub const fn symbol(&self) -> char {
        match self {
            CellType::Empty => ' ',
            CellType::Room => '.',
            CellType::Corridor => '#',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(CellType::default(), CellType::Empty);
    }

    #[test]
    fn test_solidity() {
        assert!(!CellType::Empty.is_solid());
        assert!(CellType::Room.is_solid());
        assert!(CellType::Corridor.is_solid());
    }

    #[test]
    fn test_symbols_unique() {
        let symbols: Vec<char> = CellType::iter().map(|c| c.symbol()).collect();
        assert_eq!(symbols, vec![' ', '.', '#']);
    }
}
