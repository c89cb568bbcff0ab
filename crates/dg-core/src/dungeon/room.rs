//! Rooms: axis-aligned rectangles on the level grid
//!
//! A room owns no cells. The grid marks its area with `CellType::Room`.

use serde::{Deserialize, Serialize};

use crate::geometry::{Coord, Point};

/// Rectangle covering `x..x + width` by `y..y + height`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Room {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn position(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Exclusive right edge
    pub fn x_max(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub fn y_max(&self) -> i32 {
        self.y + self.height
    }

    /// Geometric center
    pub fn center(&self) -> Point {
        Point::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Cell holding the center, truncated onto the grid
    pub fn center_cell(&self) -> Coord {
        self.center().truncate()
    }

    /// Same room grown by `margin` cells on every side
    pub fn inflate(&self, margin: i32) -> Room {
        Room::new(
            self.x - margin,
            self.y - margin,
            self.width + 2 * margin,
            self.height + 2 * margin,
        )
    }

    /// True if the two rectangles share any cell
    pub fn intersects(&self, other: &Room) -> bool {
        !(self.x >= other.x_max()
            || self.x_max() <= other.x
            || self.y >= other.y_max()
            || self.y_max() <= other.y)
    }

    pub fn contains(&self, pos: Coord) -> bool {
        pos.x >= self.x && pos.x < self.x_max() && pos.y >= self.y && pos.y < self.y_max()
    }

    /// Every cell inside the room, row by row
    pub fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let (x0, x1, y0, y1) = (self.x, self.x_max(), self.y, self.y_max());
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| Coord::new(x, y)))
    }

    pub fn area(&self) -> i32 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let room = Room::new(2, 4, 3, 4);
        assert_eq!(room.center(), Point::new(3.5, 6.0));
        assert_eq!(room.center_cell(), Coord::new(3, 6));
    }

    #[test]
    fn test_intersects_half_open() {
        let a = Room::new(0, 0, 3, 3);
        let touching = Room::new(3, 0, 2, 2);
        let overlapping = Room::new(2, 2, 2, 2);
        assert!(!a.intersects(&touching));
        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
    }

    #[test]
    fn test_inflated_buffer_catches_neighbours() {
        let a = Room::new(0, 0, 3, 3);
        let adjacent = Room::new(3, 0, 2, 2);
        assert!(adjacent.inflate(1).intersects(&a));
        let spaced = Room::new(4, 0, 2, 2);
        assert!(!spaced.inflate(1).intersects(&a));
    }

    #[test]
    fn test_cells() {
        let room = Room::new(1, 1, 2, 3);
        let cells: Vec<_> = room.cells().collect();
        assert_eq!(cells.len() as i32, room.area());
        assert!(cells.iter().all(|c| room.contains(*c)));
        assert!(!room.contains(Coord::new(3, 1)));
    }
}
