//! Shared test fixtures for the `game` submodule test suites.
//! It does not own production gameplay logic.

use super::*;

/// Walled rectangle with an all-floor interior and no holes.
pub(super) fn open_floor_grid() -> Grid {
    let mut grid = Grid::filled(GRID_WIDTH, GRID_HEIGHT, TileKind::Wall);
    for y in 1..(GRID_HEIGHT - 1) {
        for x in 1..(GRID_WIDTH - 1) {
            grid.set_tile(Pos { y: y as i32, x: x as i32 }, TileKind::Floor);
        }
    }
    grid
}

/// A Knight in an empty walled arena with no monsters, standing at (5, 5).
pub(super) fn arena_game(seed: u64) -> Game {
    let mut game = Game::start(seed, Tuning::default()).expect("start should succeed");
    game.select_class(ClassKind::Knight).expect("class selection should succeed");
    game.state.grid = open_floor_grid();
    game.state.monsters = SlotMap::with_key();
    game.state.spawns = available_spawns(&game.state.grid);
    place_player(&mut game, Pos { y: 5, x: 5 });
    game
}

pub(super) fn place_player(game: &mut Game, pos: Pos) {
    game.player_mut().expect("fixture needs a player").actor.pos = pos;
}

pub(super) fn set_player_dodge(game: &mut Game, dodge: f64) {
    game.player_mut().expect("fixture needs a player").actor.dodge_chance = dodge;
}

pub(super) fn set_armor(game: &mut Game, armor: i32) {
    game.player_mut().expect("fixture needs a player").attributes.armor = armor;
}

/// Adds a monster that never dodges.
pub(super) fn add_monster(game: &mut Game, pos: Pos, health: f64, damage: f64) -> MonsterId {
    game.state.monsters.insert(Actor::new(ActorKind::Monster, pos, health, damage, 0.0))
}
