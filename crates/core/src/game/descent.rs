//! Moving the player down to a freshly generated level.

use super::*;
use crate::game::bootstrap::{Level, build_level};

impl Game {
    pub(super) fn descend(&mut self, events: &mut Vec<TurnEvent>) -> Result<(), EngineError> {
        let depth = self.state.depth + 1;
        let wall_chance = self.tuning.next_wall_chance(self.state.wall_chance);
        let chances = GenerationChances { wall: wall_chance, ..self.tuning.generation };

        let Level { grid, mut spawns, monsters } = build_level(depth, chances, &mut self.rng)?;
        let entry = spawns.take(&mut self.rng)?;
        self.player_mut()?.actor.pos = entry;

        self.state.grid = grid;
        self.state.spawns = spawns;
        self.state.monsters = monsters;
        self.state.depth = depth;
        self.state.wall_chance = wall_chance;
        self.state.score += DESCENT_SCORE;

        info!("descended to depth {depth} (wall chance {wall_chance:.3}), entering at {entry:?}");
        events.push(TurnEvent::Descended { depth });
        Ok(())
    }
}
