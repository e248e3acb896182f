use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct MonsterId;
}

pub const GRID_WIDTH: usize = 25;
pub const GRID_HEIGHT: usize = 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn offset(self, axis: Axis, step: i32) -> Pos {
        match axis {
            Axis::Horizontal => Pos { y: self.y, x: self.x + step },
            Axis::Vertical => Pos { y: self.y + step, x: self.x },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn orthogonal(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Floor,
    ChestClosed,
    ChestOpened,
    Stairs,
    Coin,
    FountainFull,
    FountainEmpty,
    ShopHealth,
    ShopArmor,
}

impl TileKind {
    /// Tiles the player can never step onto, with or without wraparound.
    pub fn blocks_player(self) -> bool {
        matches!(self, TileKind::Wall | TileKind::ChestOpened | TileKind::FountainEmpty)
    }

    /// Tiles the player may land on when wrapping around a grid edge.
    pub fn accepts_wraparound(self) -> bool {
        matches!(self, TileKind::Floor | TileKind::Coin | TileKind::Stairs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Monster,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Knight,
    Warrior,
    Thief,
}

impl ClassKind {
    pub fn name(self) -> &'static str {
        match self {
            ClassKind::Knight => "Knight",
            ClassKind::Warrior => "Warrior",
            ClassKind::Thief => "Thief",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    AwaitingClassSelection,
    Playing,
    PlayerDead,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuffKind {
    Immortality,
    OneHitKill,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChestReward {
    HealthPotion,
    KillAllMonsters,
    OneHitKill,
    Damage,
    Immortality,
    Dodge,
    Armor,
    CriticalDamage,
    MaxHealth,
    CriticalChance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopItem {
    HealthPotion,
    Armor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterDrop {
    HealthPotion,
    Coin,
}

/// Everything that happened during one player action, in order.
///
/// The presentation layer reads the list once and drops it; nothing in the
/// engine consults past events.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TurnEvent {
    ClassSelected(ClassKind),
    Bumped { target: Pos },
    MonsterHit { at: Pos, amount: f64, critical: bool },
    MonsterDodged { at: Pos },
    PlayerHit { amount: f64, armor_absorbed: bool },
    PlayerDodged,
    AttackNegated,
    MonsterKilled { at: Pos, drop: Option<MonsterDrop> },
    TerrainDestroyed { at: Pos },
    ChestOpened(ChestReward),
    CoinCollected,
    FountainUsed,
    Purchased(ShopItem),
    InsufficientFunds { item: ShopItem, price: u32 },
    PotionUsed,
    NoPotion,
    BuffExpired(BuffKind),
    Descended { depth: u32 },
    PlayerDied { score: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FinalScore {
    pub class: ClassKind,
    pub score: u64,
    pub depth: u32,
    pub monsters_killed: u32,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("{name} chance must lie in [0, 1), got {value}")]
    InvalidChance { name: &'static str, value: f64 },
    #[error("no floor tile left to place the {0}")]
    NoFloorTile(&'static str),
    #[error("a {width}x{height} grid has no interior")]
    GridTooSmall { width: usize, height: usize },
    #[error("spawn pool exhausted")]
    SpawnExhausted,
    #[error("no player is present")]
    NoPlayer,
    #[error("a class has already been chosen")]
    ClassAlreadyChosen,
    #[error("step must be -1 or +1, got {0}")]
    InvalidStep(i32),
    #[error("the player is still alive")]
    PlayerAlive,
}
