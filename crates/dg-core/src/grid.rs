//! Bounded, offset-addressable 2D grid
//!
//! A `SpatialGrid` stores one value per cell in a dense row-major vector.
//! Logical coordinates are shifted by `offset` before indexing, so a grid of
//! size 10x10 with offset (5, 5) covers logical coordinates -5..5 on both
//! axes.
//!
//! Every accessor is bounds-checked. `get`, `get_mut` and `set` report an
//! out-of-range position to the caller; `Index`/`IndexMut` panic on it, the
//! same way slice indexing does. No access ever lands in the wrong slot.

use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::geometry::Coord;

/// Dense 2D container with an addressing offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialGrid<T> {
    data: Vec<T>,
    size: Coord,
    offset: Coord,
}

impl<T: Clone + Default> SpatialGrid<T> {
    /// Create a grid with every cell default-initialized
    pub fn new(size: Coord, offset: Coord) -> Self {
        Self::filled(size, offset, T::default())
    }
}

impl<T: Clone> SpatialGrid<T> {
    /// Create a grid with every cell set to `value`
    ///
    /// Negative dimensions are treated as zero.
    pub fn filled(size: Coord, offset: Coord, value: T) -> Self {
        let size = Coord::new(size.x.max(0), size.y.max(0));
        Self {
            data: vec![value; (size.x as usize) * (size.y as usize)],
            size,
            offset,
        }
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> SpatialGrid<T> {
    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    pub fn offset(&self) -> Coord {
        self.offset
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Storage position of `pos` when it lies within `[0, size)` on both axes
    fn local(&self, pos: Coord) -> Option<Coord> {
        let x = pos.x.checked_add(self.offset.x)?;
        let y = pos.y.checked_add(self.offset.y)?;
        (x >= 0 && y >= 0 && x < self.size.x && y < self.size.y).then_some(Coord::new(x, y))
    }

    /// True iff `pos + offset` lies within `[0, size)` on both axes
    pub fn contains(&self, pos: Coord) -> bool {
        self.local(pos).is_some()
    }

    /// Flat index for `pos`, or `None` when out of range
    pub fn index_of(&self, pos: Coord) -> Option<usize> {
        let p = self.local(pos)?;
        Some(p.x as usize + self.size.x as usize * p.y as usize)
    }

    pub fn get(&self, pos: Coord) -> Option<&T> {
        self.index_of(pos).map(|i| &self.data[i])
    }

    pub fn get_mut(&mut self, pos: Coord) -> Option<&mut T> {
        match self.index_of(pos) {
            Some(i) => Some(&mut self.data[i]),
            None => None,
        }
    }

    /// Store `value` at `pos`
    pub fn set(&mut self, pos: Coord, value: T) -> Result<(), GridError> {
        let i = self.index_of(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        self.data[i] = value;
        Ok(())
    }

    /// All logical coordinates, row by row
    pub fn positions(&self) -> impl Iterator<Item = Coord> + use<T> {
        let (w, h, off) = (self.size.x, self.size.y, self.offset);
        (0..h).flat_map(move |y| (0..w).map(move |x| Coord::new(x, y) - off))
    }

    /// `(logical coordinate, value)` pairs, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.positions().zip(self.data.iter())
    }

    /// True if `pos` lies on the outermost ring of the grid
    pub fn on_border(&self, pos: Coord) -> bool {
        self.local(pos).is_some_and(|p| {
            p.x == 0 || p.y == 0 || p.x == self.size.x - 1 || p.y == self.size.y - 1
        })
    }

    fn out_of_bounds(&self, pos: Coord) -> GridError {
        GridError::OutOfBounds {
            pos,
            width: self.size.x,
            height: self.size.y,
            offset: self.offset,
        }
    }
}

impl<T> Index<Coord> for SpatialGrid<T> {
    type Output = T;

    fn index(&self, pos: Coord) -> &T {
        match self.index_of(pos) {
            Some(i) => &self.data[i],
            None => panic!("{}", self.out_of_bounds(pos)),
        }
    }
}

impl<T> IndexMut<Coord> for SpatialGrid<T> {
    fn index_mut(&mut self, pos: Coord) -> &mut T {
        match self.index_of(pos) {
            Some(i) => &mut self.data[i],
            None => panic!("{}", self.out_of_bounds(pos)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_default_filled() {
        let grid: SpatialGrid<u8> = SpatialGrid::new(Coord::new(4, 3), Coord::ZERO);
        assert_eq!(grid.len(), 12);
        assert!(grid.iter().all(|(_, v)| *v == 0));
    }

    #[test]
    fn test_row_major_index() {
        let grid: SpatialGrid<u8> = SpatialGrid::new(Coord::new(4, 3), Coord::ZERO);
        assert_eq!(grid.index_of(Coord::new(0, 0)), Some(0));
        assert_eq!(grid.index_of(Coord::new(3, 0)), Some(3));
        assert_eq!(grid.index_of(Coord::new(1, 2)), Some(9));
        assert_eq!(grid.index_of(Coord::new(4, 0)), None);
    }

    #[test]
    fn test_contains_with_offset() {
        let grid: SpatialGrid<u8> = SpatialGrid::new(Coord::new(10, 10), Coord::new(5, 5));
        assert!(grid.contains(Coord::new(-5, -5)));
        assert!(grid.contains(Coord::new(4, 4)));
        assert!(!grid.contains(Coord::new(5, 0)));
        assert!(!grid.contains(Coord::new(-6, 0)));
    }

    #[test]
    fn test_set_get() {
        let mut grid: SpatialGrid<u8> = SpatialGrid::new(Coord::new(5, 5), Coord::new(2, 2));
        grid.set(Coord::new(-2, 2), 7).unwrap();
        assert_eq!(grid.get(Coord::new(-2, 2)), Some(&7));
        assert_eq!(grid[Coord::new(-2, 2)], 7);
    }

    #[test]
    fn test_set_out_of_bounds_is_error() {
        let mut grid: SpatialGrid<u8> = SpatialGrid::new(Coord::new(3, 3), Coord::ZERO);
        let err = grid.set(Coord::new(-1, 0), 1).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
        assert!(grid.get(Coord::new(3, 3)).is_none());
    }

    #[test]
    #[should_panic(expected = "outside the grid")]
    fn test_index_out_of_bounds_panics() {
        let grid: SpatialGrid<u8> = SpatialGrid::new(Coord::new(3, 3), Coord::ZERO);
        let _ = grid[Coord::new(3, 0)];
    }

    #[test]
    fn test_positions_cover_grid_once() {
        let grid: SpatialGrid<u8> = SpatialGrid::new(Coord::new(3, 2), Coord::new(1, 0));
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], Coord::new(-1, 0));
        assert_eq!(positions[5], Coord::new(1, 1));
        assert!(positions.iter().all(|p| grid.contains(*p)));
    }

    #[test]
    fn test_on_border() {
        let grid: SpatialGrid<u8> = SpatialGrid::new(Coord::new(4, 4), Coord::ZERO);
        assert!(grid.on_border(Coord::new(0, 2)));
        assert!(grid.on_border(Coord::new(3, 3)));
        assert!(!grid.on_border(Coord::new(1, 2)));
        assert!(!grid.on_border(Coord::new(4, 2)));
    }

    #[test]
    fn test_extreme_coords_are_out_of_range() {
        let mut grid: SpatialGrid<u8> = SpatialGrid::new(Coord::new(4, 4), Coord::new(2, -2));
        for pos in [
            Coord::new(i32::MAX, 0),
            Coord::new(0, i32::MIN),
            Coord::new(i32::MAX, i32::MIN),
            Coord::new(i32::MIN, i32::MAX),
        ] {
            assert!(!grid.contains(pos), "{pos}");
            assert_eq!(grid.index_of(pos), None);
            assert!(grid.get(pos).is_none());
            assert!(grid.get_mut(pos).is_none());
            assert!(grid.set(pos, 1).is_err());
            assert!(!grid.on_border(pos));
        }
    }

    #[test]
    fn test_fill() {
        let mut grid = SpatialGrid::filled(Coord::new(2, 2), Coord::ZERO, 1u8);
        grid.fill(9);
        assert!(grid.iter().all(|(_, v)| *v == 9));
    }
}
