use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::{ClassKind, Game, Phase, TileKind};
use dungeon_tools::config::resolve_tuning;
use dungeon_tools::script::Command;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    turns: u64,
    /// Number of consecutive seeds to play, starting at `seed`
    #[arg(short, long, default_value_t = 1)]
    runs: u64,
    #[arg(long)]
    config: Option<PathBuf>,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn check_invariants(game: &Game) -> Result<()> {
    let state = game.state();
    let grid = &state.grid;
    let turn = game.current_turn();

    for (id, monster) in state.monsters.iter() {
        if grid.tile_at(monster.pos) == TileKind::Wall {
            bail!("Invariant failed: monster inside wall at {:?} on turn {turn}", monster.pos);
        }
        if monster.health > monster.max_health {
            bail!("Invariant failed: monster HP > Max HP on turn {turn}");
        }
        if state.monsters.iter().any(|(other, m)| other != id && m.pos == monster.pos) {
            bail!("Invariant failed: monsters stacked at {:?} on turn {turn}", monster.pos);
        }
    }
    match (&state.player, state.phase) {
        (Some(player), Phase::Playing) => {
            if player.actor.health > player.actor.max_health {
                bail!("Invariant failed: player HP > Max HP on turn {turn}");
            }
            if grid.tile_at(player.actor.pos).blocks_player() {
                bail!("Invariant failed: player inside {:?}", grid.tile_at(player.actor.pos));
            }
        }
        (None, Phase::PlayerDead) => {}
        (_, phase) => bail!("Invariant failed: inconsistent phase {phase:?} on turn {turn}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let tuning = resolve_tuning(args.config.as_deref())?;

    for seed in args.seed..args.seed.saturating_add(args.runs) {
        println!("Starting Fuzz harness on seed {} for max {} turns...", seed, args.turns);
        let mut game = Game::start(seed, tuning.clone())?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let class = choose(&mut rng, &[ClassKind::Knight, ClassKind::Warrior, ClassKind::Thief]);
        game.select_class(class)?;

        while !game.is_game_over() && game.current_turn() < args.turns {
            let command = choose(
                &mut rng,
                &[Command::Left, Command::Right, Command::Up, Command::Down, Command::Potion],
            );
            command.apply(&mut game)?;
            check_invariants(&game)?;
        }

        match game.acknowledge_death() {
            Ok(score) => println!(
                "{} died after {} turns on depth {} with score {}",
                class.name(),
                game.current_turn(),
                score.depth,
                score.score
            ),
            Err(_) => println!(
                "{} survived {} turns, depth {}, score {}",
                class.name(),
                game.current_turn(),
                game.state().depth,
                game.state().score
            ),
        }
        println!("Snapshot Hash: {}", game.snapshot_hash());
    }
    Ok(())
}
