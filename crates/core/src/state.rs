use serde::Serialize;
use slotmap::SlotMap;

use crate::content::MAX_ARMOR;
use crate::mapgen::SpawnPool;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Actor {
    pub kind: ActorKind,
    pub pos: Pos,
    pub health: f64,
    pub max_health: f64,
    pub damage: f64,
    pub dodge_chance: f64,
}

impl Actor {
    pub fn new(kind: ActorKind, pos: Pos, max_health: f64, damage: f64, dodge_chance: f64) -> Self {
        Self { kind, pos, health: max_health, max_health, damage, dodge_chance }
    }

    /// Applies a health delta, clamping only at `max_health`.
    pub fn change_health(&mut self, delta: f64) {
        self.health = (self.health + delta).min(self.max_health);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerAttributes {
    pub class: ClassKind,
    pub armor: i32,
    pub max_armor: i32,
    pub critical_chance: f64,
    pub critical_damage: f64,
    pub coins: u32,
    pub potions: u32,
}

impl PlayerAttributes {
    pub fn new(class: ClassKind, armor: i32, critical_chance: f64, critical_damage: f64) -> Self {
        Self {
            class,
            armor: armor.min(MAX_ARMOR),
            max_armor: MAX_ARMOR,
            critical_chance,
            critical_damage,
            coins: 0,
            potions: 0,
        }
    }

    /// Upper-clamped only; callers decide whether a decrement is allowed.
    pub fn change_armor(&mut self, delta: i32) {
        self.armor = (self.armor + delta).min(self.max_armor);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Player {
    pub actor: Actor,
    pub attributes: PlayerAttributes,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Immortality {
    pub turns_remaining: u32,
    pub health_at_activation: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Buffs {
    pub immortality: Option<Immortality>,
    pub one_hit_kill: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, tile: TileKind) -> Self {
        Self { width, height, tiles: vec![tile; width * height] }
    }

    /// Out-of-bounds reads as `Wall`.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn is_interior(&self, pos: Pos) -> bool {
        pos.x > 0
            && pos.y > 0
            && (pos.x as usize) < self.width - 1
            && (pos.y as usize) < self.height - 1
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 }))
    }

    pub fn count(&self, tile: TileKind) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    pub fn find(&self, tile: TileKind) -> Option<Pos> {
        self.positions().find(|&pos| self.tile_at(pos) == tile)
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[derive(Clone)]
pub struct WorldState {
    pub grid: Grid,
    pub player: Option<Player>,
    pub monsters: SlotMap<MonsterId, Actor>,
    pub spawns: SpawnPool,
    pub depth: u32,
    pub score: u64,
    pub monsters_killed: u32,
    pub wall_chance: f64,
    pub buffs: Buffs,
    pub class: Option<ClassKind>,
    pub phase: Phase,
}

impl WorldState {
    pub fn monster_at(&self, pos: Pos) -> Option<MonsterId> {
        self.monsters.iter().find(|(_, monster)| monster.pos == pos).map(|(id, _)| id)
    }

    pub fn player_pos(&self) -> Option<Pos> {
        self.player.as_ref().map(|player| player.actor.pos)
    }
}

/// Read-only copy of the world handed to the presentation layer after a turn.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub grid: Grid,
    pub player: Option<Player>,
    pub monsters: Vec<Actor>,
    pub depth: u32,
    pub score: u64,
    pub monsters_killed: u32,
    pub buffs: Buffs,
    pub phase: Phase,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TurnReport {
    pub snapshot: WorldSnapshot,
    pub events: Vec<TurnEvent>,
}

impl TurnReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
