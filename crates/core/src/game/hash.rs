//! Stable world-state hashing for determinism checks.
//! Floats are hashed by bit pattern, so equal hashes mean bit-identical runs.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

fn write_actor(hasher: &mut Xxh3, actor: &Actor) {
    hasher.write_i32(actor.pos.y);
    hasher.write_i32(actor.pos.x);
    hasher.write_u64(actor.health.to_bits());
    hasher.write_u64(actor.max_health.to_bits());
    hasher.write_u64(actor.damage.to_bits());
    hasher.write_u64(actor.dodge_chance.to_bits());
}

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.turn);
        hasher.write_u32(self.state.depth);
        hasher.write_u64(self.state.score);
        hasher.write_u32(self.state.monsters_killed);
        hasher.write_u64(self.state.wall_chance.to_bits());
        hasher.write_u8(self.state.phase as u8);

        for tile in &self.state.grid.tiles {
            hasher.write_u8(*tile as u8);
        }

        if let Some(player) = &self.state.player {
            write_actor(&mut hasher, &player.actor);
            let attributes = &player.attributes;
            hasher.write_u8(attributes.class as u8);
            hasher.write_i32(attributes.armor);
            hasher.write_u64(attributes.critical_chance.to_bits());
            hasher.write_u64(attributes.critical_damage.to_bits());
            hasher.write_u32(attributes.coins);
            hasher.write_u32(attributes.potions);
        }
        for monster in self.state.monsters.values() {
            write_actor(&mut hasher, monster);
        }

        if let Some(immortality) = self.state.buffs.immortality {
            hasher.write_u32(immortality.turns_remaining);
            hasher.write_u64(immortality.health_at_activation.to_bits());
        }
        if let Some(turns) = self.state.buffs.one_hit_kill {
            hasher.write_u32(turns);
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_hashes_identically() {
        let a = Game::start(123, Tuning::default()).expect("start");
        let b = Game::start(123, Tuning::default()).expect("start");
        let c = Game::start(124, Tuning::default()).expect("start");
        assert_eq!(a.snapshot_hash(), b.snapshot_hash());
        assert_ne!(a.snapshot_hash(), c.snapshot_hash());
    }

    #[test]
    fn hash_tracks_player_changes() {
        let mut game = Game::start(9, Tuning::default()).expect("start");
        let before = game.snapshot_hash();
        game.select_class(ClassKind::Thief).expect("class");
        assert_ne!(before, game.snapshot_hash());
    }
}
