//! Greedy monster chase with a terrain-destroying fallback.
//!
//! Every monster reads the live player position, so an earlier monster only
//! influences a later one through the map and its own new position.

use super::*;

fn coordinate(pos: Pos, axis: Axis) -> i32 {
    match axis {
        Axis::Horizontal => pos.x,
        Axis::Vertical => pos.y,
    }
}

/// `+1` when `target` lies at or beyond `from` along `axis`, else `-1`.
fn toward(from: Pos, target: Pos, axis: Axis) -> i32 {
    if coordinate(target, axis) >= coordinate(from, axis) { 1 } else { -1 }
}

impl Game {
    pub(super) fn advance_monsters(&mut self, events: &mut Vec<TurnEvent>) {
        let ids: Vec<MonsterId> = self.state.monsters.keys().collect();
        for id in ids {
            self.advance_monster(id, events);
        }
    }

    fn advance_monster(&mut self, id: MonsterId, events: &mut Vec<TurnEvent>) {
        let Some(target) = self.state.player_pos() else {
            return;
        };
        let Some(from) = self.state.monsters.get(id).map(|monster| monster.pos) else {
            return;
        };

        let dx = (target.x - from.x).abs();
        let dy = (target.y - from.y).abs();
        let primary = if dx >= dy { Axis::Horizontal } else { Axis::Vertical };
        let secondary = primary.orthogonal();
        let primary_step = toward(from, target, primary);
        let secondary_step = toward(from, target, secondary);

        if self.try_step(id, primary, primary_step, events)
            || self.try_step(id, secondary, secondary_step, events)
            || self.try_step(id, secondary, -secondary_step, events)
        {
            return;
        }

        let blocked = from.offset(primary, primary_step);
        let tile = self.state.grid.tile_at(blocked);
        if self.state.grid.in_bounds(blocked) && !matches!(tile, TileKind::Stairs | TileKind::Floor)
        {
            self.state.grid.set_tile(blocked, TileKind::Floor);
            debug!("monster at {from:?} destroyed {tile:?} at {blocked:?}");
            events.push(TurnEvent::TerrainDestroyed { at: blocked });
        }
    }

    /// One step for monster `id`. Attacking the player counts as success
    /// while leaving the monster in place.
    fn try_step(
        &mut self,
        id: MonsterId,
        axis: Axis,
        step: i32,
        events: &mut Vec<TurnEvent>,
    ) -> bool {
        let Some(monster) = self.state.monsters.get(id) else {
            return false;
        };
        let damage = monster.damage;
        let to = monster.pos.offset(axis, step);

        if !self.state.grid.in_bounds(to) || self.state.grid.tile_at(to) != TileKind::Floor {
            return false;
        }
        if self.state.monsters.iter().any(|(other, monster)| other != id && monster.pos == to) {
            return false;
        }
        if self.state.player_pos() == Some(to) {
            self.monster_attacks(damage, events);
            return true;
        }

        if let Some(monster) = self.state.monsters.get_mut(id) {
            monster.pos = to;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn ties_prefer_horizontal_movement() {
        let mut game = arena_game(3);
        place_player(&mut game, Pos { y: 5, x: 5 });
        let id = add_monster(&mut game, Pos { y: 2, x: 2 }, 10.0, 1.0);

        game.advance_monsters(&mut Vec::new());

        assert_eq!(game.state.monsters[id].pos, Pos { y: 2, x: 3 });
    }

    #[test]
    fn larger_vertical_gap_moves_vertically() {
        let mut game = arena_game(3);
        place_player(&mut game, Pos { y: 2, x: 5 });
        let id = add_monster(&mut game, Pos { y: 8, x: 4 }, 10.0, 1.0);

        game.advance_monsters(&mut Vec::new());

        assert_eq!(game.state.monsters[id].pos, Pos { y: 7, x: 4 });
    }

    #[test]
    fn blocked_primary_falls_back_to_secondary_toward_player() {
        let mut game = arena_game(3);
        place_player(&mut game, Pos { y: 6, x: 8 });
        let id = add_monster(&mut game, Pos { y: 5, x: 4 }, 10.0, 1.0);
        game.state.grid.set_tile(Pos { y: 5, x: 5 }, TileKind::Wall);

        game.advance_monsters(&mut Vec::new());

        assert_eq!(game.state.monsters[id].pos, Pos { y: 6, x: 4 });
    }

    #[test]
    fn monsters_do_not_stack() {
        let mut game = arena_game(3);
        place_player(&mut game, Pos { y: 5, x: 9 });
        let front = add_monster(&mut game, Pos { y: 5, x: 6 }, 10.0, 1.0);
        game.state.grid.set_tile(Pos { y: 5, x: 7 }, TileKind::Wall);
        game.state.grid.set_tile(Pos { y: 4, x: 6 }, TileKind::Wall);
        game.state.grid.set_tile(Pos { y: 6, x: 6 }, TileKind::Wall);
        let back = add_monster(&mut game, Pos { y: 5, x: 5 }, 10.0, 1.0);
        game.state.grid.set_tile(Pos { y: 4, x: 5 }, TileKind::Wall);
        game.state.grid.set_tile(Pos { y: 6, x: 5 }, TileKind::Wall);

        game.advance_monsters(&mut Vec::new());

        assert_ne!(game.state.monsters[front].pos, game.state.monsters[back].pos);
        assert_eq!(game.state.monsters[back].pos, Pos { y: 5, x: 5 });
    }

    #[test]
    fn boxed_in_monster_eats_the_wall_toward_the_player() {
        let mut game = arena_game(3);
        place_player(&mut game, Pos { y: 5, x: 9 });
        let id = add_monster(&mut game, Pos { y: 5, x: 5 }, 10.0, 1.0);
        for pos in [Pos { y: 5, x: 6 }, Pos { y: 4, x: 5 }, Pos { y: 6, x: 5 }] {
            game.state.grid.set_tile(pos, TileKind::Wall);
        }

        let mut events = Vec::new();
        game.advance_monsters(&mut events);

        assert_eq!(game.state.monsters[id].pos, Pos { y: 5, x: 5 });
        assert_eq!(game.state.grid.tile_at(Pos { y: 5, x: 6 }), TileKind::Floor);
        assert_eq!(events, vec![TurnEvent::TerrainDestroyed { at: Pos { y: 5, x: 6 } }]);
    }

    #[test]
    fn stairs_are_never_destroyed() {
        let mut game = arena_game(3);
        place_player(&mut game, Pos { y: 5, x: 9 });
        let id = add_monster(&mut game, Pos { y: 5, x: 5 }, 10.0, 1.0);
        game.state.grid.set_tile(Pos { y: 5, x: 6 }, TileKind::Stairs);
        game.state.grid.set_tile(Pos { y: 4, x: 5 }, TileKind::Wall);
        game.state.grid.set_tile(Pos { y: 6, x: 5 }, TileKind::Wall);

        let mut events = Vec::new();
        game.advance_monsters(&mut events);

        assert_eq!(game.state.monsters[id].pos, Pos { y: 5, x: 5 });
        assert_eq!(game.state.grid.tile_at(Pos { y: 5, x: 6 }), TileKind::Stairs);
        assert!(events.is_empty());
    }

    #[test]
    fn adjacent_monster_attacks_instead_of_moving() {
        let mut game = arena_game(3);
        place_player(&mut game, Pos { y: 5, x: 6 });
        let id = add_monster(&mut game, Pos { y: 5, x: 5 }, 10.0, 4.0);
        set_player_dodge(&mut game, 0.0);

        let mut events = Vec::new();
        game.advance_monsters(&mut events);

        assert_eq!(game.state.monsters[id].pos, Pos { y: 5, x: 5 });
        assert_eq!(events, vec![TurnEvent::PlayerHit { amount: 2.0, armor_absorbed: true }]);
        let player = game.state.player.as_ref().expect("player");
        assert_eq!(player.attributes.armor, 99);
        assert_eq!(player.actor.health, 98.0);
    }
}
