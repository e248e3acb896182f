//! Level layout: random tile scatter, walled border with wraparound holes,
//! then stairs and chest placement.

use log::debug;
use rand_chacha::ChaCha8Rng;

use crate::content::GenerationChances;
use crate::dice;
use crate::state::Grid;
use crate::types::{EngineError, GRID_HEIGHT, GRID_WIDTH, Pos, TileKind};

use super::grid::{clear_adjacent_walls, interior_floor_tiles, seal_corners, wall_border};

pub const HOLE_PASSES: usize = 3;

pub struct LevelGenerator {
    chances: GenerationChances,
    width: usize,
    height: usize,
}

impl LevelGenerator {
    pub fn new(chances: GenerationChances) -> Self {
        Self { chances, width: GRID_WIDTH, height: GRID_HEIGHT }
    }

    pub fn with_size(chances: GenerationChances, width: usize, height: usize) -> Self {
        Self { chances, width, height }
    }

    pub fn generate(&self, depth: u32, rng: &mut ChaCha8Rng) -> Result<Grid, EngineError> {
        self.chances.validate()?;
        if self.width < 3 || self.height < 3 {
            return Err(EngineError::GridTooSmall { width: self.width, height: self.height });
        }

        let mut grid = Grid::filled(self.width, self.height, TileKind::Floor);
        self.scatter_tiles(&mut grid, rng);
        wall_border(&mut grid);
        self.punch_holes(&mut grid, rng);

        let stairs = place_reachable(&mut grid, TileKind::Stairs, "stairs", rng)?;
        let chest = place_reachable(&mut grid, TileKind::ChestClosed, "chest", rng)?;

        debug!(
            "generated depth {depth}: wall chance {:.3}, stairs at {stairs:?}, chest at {chest:?}, {} walls",
            self.chances.wall,
            grid.count(TileKind::Wall)
        );
        Ok(grid)
    }

    fn scatter_tiles(&self, grid: &mut Grid, rng: &mut ChaCha8Rng) {
        let chances = &self.chances;
        let mut fountain_placed = false;
        let mut shop_placed = false;

        for y in 1..(self.height - 1) {
            for x in 1..(self.width - 1) {
                let f = dice::unit(rng);
                let tile = if f < chances.fountain && !fountain_placed {
                    fountain_placed = true;
                    TileKind::FountainFull
                } else if f < chances.shop_armor && !shop_placed {
                    shop_placed = true;
                    TileKind::ShopArmor
                } else if f < chances.shop_health && !shop_placed {
                    shop_placed = true;
                    TileKind::ShopHealth
                } else if f < chances.coin {
                    TileKind::Coin
                } else if f < chances.wall {
                    TileKind::Wall
                } else {
                    TileKind::Floor
                };
                grid.set_tile(Pos { y: y as i32, x: x as i32 }, tile);
            }
        }
    }

    fn punch_holes(&self, grid: &mut Grid, rng: &mut ChaCha8Rng) {
        let right = self.width as i32 - 1;
        let bottom = self.height as i32 - 1;
        for _ in 0..HOLE_PASSES {
            let x = dice::range(rng, 1, self.width - 1) as i32;
            let y = dice::range(rng, 1, self.height - 1) as i32;
            grid.set_tile(Pos { y, x: 0 }, TileKind::Floor);
            grid.set_tile(Pos { y, x: right }, TileKind::Floor);
            grid.set_tile(Pos { y: 0, x }, TileKind::Floor);
            grid.set_tile(Pos { y: bottom, x }, TileKind::Floor);
            seal_corners(grid);
        }
    }
}

fn place_reachable(
    grid: &mut Grid,
    tile: TileKind,
    label: &'static str,
    rng: &mut ChaCha8Rng,
) -> Result<Pos, EngineError> {
    let candidates = interior_floor_tiles(grid);
    if candidates.is_empty() {
        return Err(EngineError::NoFloorTile(label));
    }
    let pos = candidates[dice::index(rng, candidates.len())];
    grid.set_tile(pos, tile);
    clear_adjacent_walls(grid, pos);
    Ok(pos)
}
