//! Spawn coordinate allocation for the player and monsters on a fresh level.

use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::dice;
use crate::state::Grid;
use crate::types::{EngineError, Pos, TileKind};

/// Unclaimed floor coordinates of the current level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SpawnPool {
    open: Vec<Pos>,
}

/// Every `Floor` tile of `grid`, border holes included.
pub fn available_spawns(grid: &Grid) -> SpawnPool {
    let open = grid.positions().filter(|&pos| grid.tile_at(pos) == TileKind::Floor).collect();
    SpawnPool { open }
}

impl SpawnPool {
    /// Removes and returns a coordinate chosen uniformly from what is left.
    pub fn take(&mut self, rng: &mut ChaCha8Rng) -> Result<Pos, EngineError> {
        if self.open.is_empty() {
            return Err(EngineError::SpawnExhausted);
        }
        let idx = dice::index(rng, self.open.len());
        Ok(self.open.swap_remove(idx))
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.open.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
