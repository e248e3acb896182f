use dungeon_core::{ClassKind, Game, Phase, TileKind, TurnEvent, Tuning};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Clone, Copy, Debug)]
enum Action {
    Left,
    Right,
    Up,
    Down,
    Potion,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn check_invariants(game: &Game, map_seed: u64) -> Result<(), String> {
    let state = game.state();
    let grid = &state.grid;

    if grid.count(TileKind::Stairs) > 1 {
        return Err(format!("Invariant failed: several stairs on map_seed {}", map_seed));
    }
    for (id, monster) in state.monsters.iter() {
        if grid.tile_at(monster.pos) == TileKind::Wall {
            return Err(format!("Invariant failed: monster inside wall on map_seed {}", map_seed));
        }
        if monster.health > monster.max_health {
            return Err(format!("Invariant failed: HP > Max HP on map_seed {}", map_seed));
        }
        if state.monsters.iter().any(|(other, m)| other != id && m.pos == monster.pos) {
            return Err(format!("Invariant failed: stacked monsters on map_seed {}", map_seed));
        }
    }

    match (&state.player, state.phase) {
        (Some(player), Phase::Playing) => {
            if player.actor.health > player.actor.max_health {
                return Err(format!("Invariant failed: player HP > Max HP on map_seed {}", map_seed));
            }
            if player.actor.health < 1.0 {
                return Err(format!("Invariant failed: dying player kept on map_seed {}", map_seed));
            }
            if grid.tile_at(player.actor.pos).blocks_player() {
                return Err(format!("Invariant failed: player inside wall on map_seed {}", map_seed));
            }
        }
        (None, Phase::PlayerDead) => {}
        (player, phase) => {
            return Err(format!(
                "Invariant failed: phase {:?} with player present = {} on map_seed {}",
                phase,
                player.is_some(),
                map_seed
            ));
        }
    }
    Ok(())
}

fn run_fuzz_simulation(map_seed: u64, choice_seed: u64, max_turns: u64) -> Result<(), String> {
    let mut game = Game::start(map_seed, Tuning::default()).map_err(|err| err.to_string())?;
    let mut rng = ChaCha8Rng::seed_from_u64(choice_seed);
    let class = choose(&mut rng, &[ClassKind::Knight, ClassKind::Warrior, ClassKind::Thief]);
    game.select_class(class).map_err(|err| err.to_string())?;

    let mut depth = game.state().depth;
    while !game.is_game_over() && game.current_turn() < max_turns {
        let action = choose(
            &mut rng,
            &[Action::Left, Action::Right, Action::Up, Action::Down, Action::Potion],
        );
        let report = match action {
            Action::Left => game.move_horizontal(-1),
            Action::Right => game.move_horizontal(1),
            Action::Up => game.move_vertical(-1),
            Action::Down => game.move_vertical(1),
            Action::Potion => game.use_potion(),
        }
        .map_err(|err| format!("{action:?} failed on map_seed {map_seed}: {err}"))?;

        let descended = report.events.iter().any(|event| matches!(event, TurnEvent::Descended { .. }));
        let new_depth = game.state().depth;
        if descended != (new_depth == depth + 1) || new_depth < depth {
            return Err(format!("Invariant failed: depth jumped on map_seed {}", map_seed));
        }
        depth = new_depth;

        if report.snapshot.depth != new_depth || report.snapshot.score != game.state().score {
            return Err(format!("Invariant failed: stale snapshot on map_seed {}", map_seed));
        }
        check_invariants(&game, map_seed)?;
    }

    if game.is_game_over() {
        let score = game.acknowledge_death().map_err(|err| err.to_string())?;
        if score.class != class || score.depth != depth {
            return Err(format!("Invariant failed: final score mismatch on map_seed {}", map_seed));
        }
    }
    Ok(())
}

#[test]
fn test_fuzz_game_simulation() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(20));
    let seeds = (any::<u64>(), any::<u64>());

    runner
        .run(&seeds, |(map_seed, choice_seed)| {
            run_fuzz_simulation(map_seed, choice_seed, 1500).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("semantic fuzz simulation should preserve invariants");
}
