use log::{debug, info, warn};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use crate::content::*;
use crate::dice;
use crate::mapgen::{LevelGenerator, SpawnPool, available_spawns};
use crate::state::*;
use crate::types::*;

mod bootstrap;
mod combat;
mod descent;
mod engine;
mod hash;
mod monsters;
mod movement;
mod rewards;
#[cfg(test)]
mod test_support;

pub use combat::{AttackOutcome, AttackProfile, DefenseProfile, resolve_attack};

/// One seeded dungeon run. Owns the world state and the only random stream
/// that mutates it.
pub struct Game {
    seed: u64,
    turn: u64,
    rng: ChaCha8Rng,
    tuning: Tuning,
    state: WorldState,
}

impl Game {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_turn(&self) -> u64 {
        self.turn
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.phase == Phase::PlayerDead
    }

    /// Terminal call once the player has died; the caller owns process exit.
    pub fn acknowledge_death(&self) -> Result<FinalScore, EngineError> {
        if !self.is_game_over() {
            return Err(EngineError::PlayerAlive);
        }
        let class = self.state.class.ok_or(EngineError::NoPlayer)?;
        Ok(FinalScore {
            class,
            score: self.state.score,
            depth: self.state.depth,
            monsters_killed: self.state.monsters_killed,
        })
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            grid: self.state.grid.clone(),
            player: self.state.player.clone(),
            monsters: self.state.monsters.values().cloned().collect(),
            depth: self.state.depth,
            score: self.state.score,
            monsters_killed: self.state.monsters_killed,
            buffs: self.state.buffs,
            phase: self.state.phase,
        }
    }

    /// Runs one player action. On error the world, turn counter and random
    /// stream are put back as they were before the action.
    fn transact<F>(&mut self, action: F) -> Result<TurnReport, EngineError>
    where
        F: FnOnce(&mut Self, &mut Vec<TurnEvent>) -> Result<(), EngineError>,
    {
        let saved = (self.turn, self.rng.clone(), self.state.clone());
        let mut events = Vec::new();
        match action(self, &mut events) {
            Ok(()) => Ok(self.report(events)),
            Err(err) => {
                warn!("turn {} rolled back: {err}", self.turn);
                (self.turn, self.rng, self.state) = saved;
                Err(err)
            }
        }
    }

    fn report(&self, events: Vec<TurnEvent>) -> TurnReport {
        TurnReport { snapshot: self.snapshot(), events }
    }

    fn player_mut(&mut self) -> Result<&mut Player, EngineError> {
        self.state.player.as_mut().ok_or(EngineError::NoPlayer)
    }
}
