//! Player death, terminal acknowledgement and post-death guards.

use super::support::*;

fn doomed_game() -> Game {
    let mut game = arena_game(404);
    set_armor(&mut game, 0);
    set_player_dodge(&mut game, 0.0);
    game.player_mut().expect("player").actor.health = 1.0;
    add_monster(&mut game, Pos { y: 5, x: 6 }, 50.0, 5.0);
    game.state.score = 170;
    game
}

#[test]
fn lethal_hit_ends_the_run() {
    let mut game = doomed_game();

    let report = game.use_potion().expect("turn");

    assert!(game.is_game_over());
    assert_eq!(report.snapshot.phase, Phase::PlayerDead);
    assert!(report.snapshot.player.is_none());
    assert_eq!(report.events.last(), Some(&TurnEvent::PlayerDied { score: 170 }));
}

#[test]
fn acknowledgement_reports_the_final_tally() {
    let mut game = doomed_game();
    game.use_potion().expect("turn");

    let score = game.acknowledge_death().expect("player is dead");

    assert_eq!(
        score,
        FinalScore { class: ClassKind::Knight, score: 170, depth: 1, monsters_killed: 0 }
    );
}

#[test]
fn actions_after_death_are_rejected_without_side_effects() {
    let mut game = doomed_game();
    game.use_potion().expect("turn");
    let hash = game.snapshot_hash();

    assert_eq!(game.move_horizontal(1), Err(EngineError::NoPlayer));
    assert_eq!(game.use_potion(), Err(EngineError::NoPlayer));
    assert_eq!(game.select_class(ClassKind::Thief), Err(EngineError::ClassAlreadyChosen));
    assert_eq!(game.snapshot_hash(), hash);
}

#[test]
fn death_takes_priority_over_stairs() {
    let mut game = doomed_game();
    game.state.grid.set_tile(Pos { y: 4, x: 5 }, TileKind::Stairs);
    game.state.monsters.clear();
    game.player_mut().expect("player").actor.health = 0.5;

    game.move_vertical(-1).expect("step onto stairs");

    assert!(game.is_game_over());
    assert_eq!(game.state.depth, 1);
}
