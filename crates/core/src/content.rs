use serde::{Deserialize, Serialize};

use crate::types::{ChestReward, ClassKind, EngineError, ShopItem};

pub const MAX_ARMOR: i32 = 100;

pub const KILL_SCORE: u64 = 50;
pub const DESCENT_SCORE: u64 = 100;
pub const CHEST_SCORE: u64 = 20;
pub const COIN_SCORE: u64 = 1;

pub const POTION_HEAL: f64 = 30.0;
pub const IMMORTALITY_EXPIRY_PENALTY: f64 = 100.0;
pub const BUFF_TURNS: u32 = 5;

pub const MONSTER_BASE_HEALTH: f64 = 9.0;
pub const MONSTER_DODGE_CHANCE: f64 = 0.1;

pub struct ClassStats {
    pub max_health: f64,
    pub armor: i32,
    pub damage: f64,
    pub dodge_chance: f64,
    pub critical_chance: f64,
    pub critical_damage: f64,
}

pub fn get_class_stats(class: ClassKind) -> ClassStats {
    match class {
        ClassKind::Knight => ClassStats {
            max_health: 100.0,
            armor: 100,
            damage: 5.0,
            dodge_chance: 0.10,
            critical_chance: 0.10,
            critical_damage: 3.0,
        },
        ClassKind::Warrior => ClassStats {
            max_health: 60.0,
            armor: 50,
            damage: 15.0,
            dodge_chance: 0.05,
            critical_chance: 0.30,
            critical_damage: 5.0,
        },
        ClassKind::Thief => ClassStats {
            max_health: 150.0,
            armor: 100,
            damage: 2.0,
            dodge_chance: 0.30,
            critical_chance: 0.05,
            critical_damage: 2.0,
        },
    }
}

pub struct MonsterStats {
    pub max_health: f64,
    pub damage: f64,
    pub dodge_chance: f64,
}

/// Monster strength grows linearly with depth.
pub fn monster_stats_for_depth(depth: u32) -> MonsterStats {
    MonsterStats {
        max_health: MONSTER_BASE_HEALTH + f64::from(depth),
        damage: f64::from(depth),
        dodge_chance: MONSTER_DODGE_CHANCE,
    }
}

pub fn monster_capacity(depth: u32) -> usize {
    depth as usize + 2
}

pub fn shop_price(item: ShopItem) -> u32 {
    match item {
        ShopItem::HealthPotion => 5,
        ShopItem::Armor => 10,
    }
}

pub const SHOP_ARMOR_GAIN: i32 = 30;

pub const CHEST_DAMAGE_GAIN: f64 = 1.0;
pub const CHEST_DODGE_GAIN: f64 = 0.05;
pub const CHEST_ARMOR_GAIN: i32 = 30;
pub const CHEST_CRITICAL_DAMAGE_GAIN: f64 = 1.0;
pub const CHEST_MAX_HEALTH_GAIN: f64 = 10.0;
pub const CHEST_CRITICAL_CHANCE_GAIN: f64 = 0.02;

/// Cumulative upper bounds evaluated against one draw.
const CHEST_TABLE: [(f64, ChestReward); 10] = [
    (0.30, ChestReward::HealthPotion),
    (0.35, ChestReward::KillAllMonsters),
    (0.40, ChestReward::OneHitKill),
    (0.60, ChestReward::Damage),
    (0.65, ChestReward::Immortality),
    (0.70, ChestReward::Dodge),
    (0.80, ChestReward::Armor),
    (0.90, ChestReward::CriticalDamage),
    (0.95, ChestReward::MaxHealth),
    (1.00, ChestReward::CriticalChance),
];

pub fn pick_chest_reward(draw: f64) -> ChestReward {
    CHEST_TABLE
        .iter()
        .find(|(bound, _)| draw < *bound)
        .map_or(ChestReward::CriticalChance, |(_, reward)| *reward)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationChances {
    pub wall: f64,
    pub coin: f64,
    pub fountain: f64,
    pub shop_health: f64,
    pub shop_armor: f64,
}

impl Default for GenerationChances {
    fn default() -> Self {
        Self { wall: 0.05, coin: 0.01, fountain: 0.001, shop_health: 0.003, shop_armor: 0.002 }
    }
}

impl GenerationChances {
    pub fn validate(&self) -> Result<(), EngineError> {
        for (name, value) in [
            ("wall", self.wall),
            ("coin", self.coin),
            ("fountain", self.fountain),
            ("shop_health", self.shop_health),
            ("shop_armor", self.shop_armor),
        ] {
            check_chance(name, value)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropChances {
    pub potion: f64,
    pub coin: f64,
}

impl Default for DropChances {
    fn default() -> Self {
        Self { potion: 0.15, coin: 0.40 }
    }
}

/// Engine knobs that can be overridden from a config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub generation: GenerationChances,
    pub wall_chance_step: f64,
    pub wall_chance_cap: f64,
    pub drops: DropChances,
    pub bump_consumes_turn: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            generation: GenerationChances::default(),
            wall_chance_step: 0.005,
            wall_chance_cap: 0.25,
            drops: DropChances::default(),
            bump_consumes_turn: true,
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), EngineError> {
        self.generation.validate()?;
        check_chance("wall_chance_cap", self.wall_chance_cap)?;
        check_chance("drop potion", self.drops.potion)?;
        check_chance("drop coin", self.drops.coin)?;
        if !(0.0..1.0).contains(&self.wall_chance_step) {
            return Err(EngineError::InvalidChance {
                name: "wall_chance_step",
                value: self.wall_chance_step,
            });
        }
        let ramp_peak = self.wall_chance_cap + self.wall_chance_step;
        check_chance("wall_chance_cap + wall_chance_step", ramp_peak)?;
        Ok(())
    }

    /// Wall chance for the level after `current`, held below the cap.
    pub fn next_wall_chance(&self, current: f64) -> f64 {
        if current < self.wall_chance_cap { current + self.wall_chance_step } else { current }
    }
}

fn check_chance(name: &'static str, value: f64) -> Result<(), EngineError> {
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::InvalidChance { name, value })
    }
}
