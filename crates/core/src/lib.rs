pub mod content;
pub mod dice;
pub mod game;
pub mod mapgen;
pub mod state;
pub mod types;

pub use content::{DropChances, GenerationChances, Tuning};
pub use game::{AttackOutcome, AttackProfile, DefenseProfile, Game, resolve_attack};
pub use state::{
    Actor, Buffs, Grid, Immortality, Player, PlayerAttributes, TurnReport, WorldSnapshot,
    WorldState,
};
pub use types::*;
