//! Player attacks resolved through the movement entry points.

use super::support::*;

#[test]
fn knight_attack_on_adjacent_monster_keeps_player_in_place() {
    let mut game = arena_game(123);
    let start = Pos { y: 5, x: 5 };
    let target = Pos { y: 5, x: 6 };
    let id = add_monster(&mut game, target, 10.0, 1.0);

    let report = game.move_horizontal(1).expect("attack");

    let health = game.state.monsters[id].health;
    assert!(health == 10.0 - 5.0 || health == 10.0 - 8.0, "unexpected health {health}");
    assert_eq!(game.state.player_pos(), Some(start));
    assert!(report.events.iter().any(|event| matches!(
        event,
        TurnEvent::MonsterHit { at, .. } if *at == target
    )));
}

#[test]
fn attack_across_a_wraparound_edge_leaves_player_on_the_near_side() {
    let mut game = arena_game(5);
    let right = game.state.grid.width as i32 - 1;
    game.state.grid.set_tile(Pos { y: 7, x: 0 }, TileKind::Floor);
    game.state.grid.set_tile(Pos { y: 7, x: right }, TileKind::Floor);
    place_player(&mut game, Pos { y: 7, x: right });
    let id = add_monster(&mut game, Pos { y: 7, x: 0 }, 30.0, 1.0);

    game.move_horizontal(1).expect("attack");

    assert_eq!(game.state.player_pos(), Some(Pos { y: 7, x: right }));
    assert!(game.state.monsters[id].health < 30.0);
}

#[test]
fn one_hit_kill_slays_and_cleans_up_in_the_same_turn() {
    let mut game = arena_game(77);
    game.state.buffs.one_hit_kill = Some(BUFF_TURNS);
    add_monster(&mut game, Pos { y: 4, x: 5 }, 10.0, 1.0);

    let report = game.move_vertical(-1).expect("attack");

    assert!(game.state.monsters.is_empty());
    assert_eq!(game.state.monsters_killed, 1);
    assert!(game.state.score >= KILL_SCORE);
    assert!(report.events.iter().any(|event| matches!(
        event,
        TurnEvent::MonsterKilled { at, .. } if *at == Pos { y: 4, x: 5 }
    )));
}

#[test]
fn kill_all_chest_reward_gives_no_kill_credit() {
    let mut sweeps = 0;
    for seed in 0..400 {
        let mut game = arena_game(seed);
        add_monster(&mut game, Pos { y: 10, x: 10 }, 10.0, 1.0);
        add_monster(&mut game, Pos { y: 12, x: 14 }, 10.0, 1.0);
        game.state.grid.set_tile(Pos { y: 5, x: 6 }, TileKind::ChestClosed);

        let report = game.move_horizontal(1).expect("open");
        if !report.events.contains(&TurnEvent::ChestOpened(ChestReward::KillAllMonsters)) {
            continue;
        }
        sweeps += 1;
        assert!(report.snapshot.monsters.is_empty());
        assert_eq!(report.snapshot.monsters_killed, 0);
        assert_eq!(report.snapshot.score, CHEST_SCORE);
    }
    assert!(sweeps > 0, "no seed rolled the kill-all reward");
}
