//! Grid and tile-space primitives used by generation and spawning.

use crate::state::Grid;
use crate::types::{Pos, TileKind};

pub(super) fn neighbors(pos: Pos) -> [Pos; 4] {
    [
        Pos { y: pos.y - 1, x: pos.x },
        Pos { y: pos.y, x: pos.x + 1 },
        Pos { y: pos.y + 1, x: pos.x },
        Pos { y: pos.y, x: pos.x - 1 },
    ]
}

pub(super) fn interior_floor_tiles(grid: &Grid) -> Vec<Pos> {
    grid.positions()
        .filter(|&pos| grid.is_interior(pos) && grid.tile_at(pos) == TileKind::Floor)
        .collect()
}

/// Opens every interior wall next to `pos`. Border cells are left alone.
pub(super) fn clear_adjacent_walls(grid: &mut Grid, pos: Pos) {
    for next in neighbors(pos) {
        if grid.is_interior(next) && grid.tile_at(next) == TileKind::Wall {
            grid.set_tile(next, TileKind::Floor);
        }
    }
}

pub(super) fn seal_corners(grid: &mut Grid) {
    let right = grid.width as i32 - 1;
    let bottom = grid.height as i32 - 1;
    for corner in [
        Pos { y: 0, x: 0 },
        Pos { y: 0, x: right },
        Pos { y: bottom, x: 0 },
        Pos { y: bottom, x: right },
    ] {
        grid.set_tile(corner, TileKind::Wall);
    }
}

pub(super) fn wall_border(grid: &mut Grid) {
    let right = grid.width as i32 - 1;
    let bottom = grid.height as i32 - 1;
    for y in 0..=bottom {
        grid.set_tile(Pos { y, x: 0 }, TileKind::Wall);
        grid.set_tile(Pos { y, x: right }, TileKind::Wall);
    }
    for x in 0..=right {
        grid.set_tile(Pos { y: 0, x }, TileKind::Wall);
        grid.set_tile(Pos { y: bottom, x }, TileKind::Wall);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_walls_spares_the_border() {
        let mut grid = Grid::filled(5, 5, TileKind::Wall);
        let center = Pos { y: 1, x: 1 };
        grid.set_tile(center, TileKind::Stairs);
        clear_adjacent_walls(&mut grid, center);

        assert_eq!(grid.tile_at(Pos { y: 1, x: 2 }), TileKind::Floor);
        assert_eq!(grid.tile_at(Pos { y: 2, x: 1 }), TileKind::Floor);
        assert_eq!(grid.tile_at(Pos { y: 0, x: 1 }), TileKind::Wall);
        assert_eq!(grid.tile_at(Pos { y: 1, x: 0 }), TileKind::Wall);
    }

    #[test]
    fn interior_floor_excludes_border_holes() {
        let mut grid = Grid::filled(5, 5, TileKind::Wall);
        grid.set_tile(Pos { y: 2, x: 0 }, TileKind::Floor);
        grid.set_tile(Pos { y: 2, x: 2 }, TileKind::Floor);
        assert_eq!(interior_floor_tiles(&grid), vec![Pos { y: 2, x: 2 }]);
    }
}
