//! Procedural level generation and spawn allocation.

mod generator;
mod grid;
mod spawns;

use rand_chacha::ChaCha8Rng;

pub use generator::{HOLE_PASSES, LevelGenerator};
pub use spawns::{SpawnPool, available_spawns};

use crate::content::GenerationChances;
use crate::state::Grid;
use crate::types::EngineError;

pub fn generate_level(
    depth: u32,
    chances: GenerationChances,
    rng: &mut ChaCha8Rng,
) -> Result<Grid, EngineError> {
    LevelGenerator::new(chances).generate(depth, rng)
}
