//! ASCII map rendering
//!
//! Rooms draw as `.`, corridors as box-drawing glyphs picked from their
//! connections, corridor cells in front of a door as `+`. Empty space is
//! blank.

use dg_core::dungeon::{CellType, GeneratedLevel, Sides, TileClassification};
use dg_core::{Coord, Direction, SpatialGrid};

/// Glyph for a set of corridor connections
fn corridor_glyph(sides: Sides) -> char {
    const N: u8 = Sides::NORTH.bits();
    const E: u8 = Sides::EAST.bits();
    const S: u8 = Sides::SOUTH.bits();
    const W: u8 = Sides::WEST.bits();

    match sides.bits() {
        b if b == N | S => '│',
        b if b == E | W => '─',
        b if b == N | E => '└',
        b if b == E | S => '┌',
        b if b == S | W => '┐',
        b if b == W | N => '┘',
        b if b == W | N | E => '┴',
        b if b == N | E | S => '├',
        b if b == E | S | W => '┬',
        b if b == S | W | N => '┤',
        b if b == N | E | S | W => '┼',
        b if b == N => '╵',
        b if b == E => '╶',
        b if b == S => '╷',
        b if b == W => '╴',
        _ => '#',
    }
}

/// True if a room cell next to `pos` has a door facing it
fn faces_door(tiles: &TileClassification, pos: Coord) -> bool {
    Direction::ALL.into_iter().any(|dir| {
        tiles
            .get(pos.step(dir))
            .is_some_and(|t| t.doors.contains(dir.opposite().side()))
    })
}

fn glyph_at(grid: &SpatialGrid<CellType>, tiles: &TileClassification, pos: Coord) -> char {
    match grid.get(pos) {
        Some(CellType::Room) => '.',
        Some(CellType::Corridor) if faces_door(tiles, pos) => '+',
        Some(CellType::Corridor) => tiles
            .get(pos)
            .and_then(|t| t.corridor)
            .map_or('#', |tile| corridor_glyph(tile.connections())),
        Some(CellType::Empty) | None => ' ',
    }
}

/// Render a grid and its classification, one line per row
pub fn render_grid(grid: &SpatialGrid<CellType>, tiles: &TileClassification) -> String {
    let origin = -grid.offset();
    let mut out = String::with_capacity(grid.len() * 3 + grid.height() as usize);
    for y in 0..grid.height() {
        let line: String = (0..grid.width())
            .map(|x| glyph_at(grid, tiles, origin + Coord::new(x, y)))
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn render_ascii(level: &GeneratedLevel) -> String {
    render_grid(&level.grid, &level.tiles)
}
