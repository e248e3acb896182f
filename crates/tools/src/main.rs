use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dungeon_core::{FinalScore, Game, TurnReport};
use dungeon_tools::ClassArg;
use dungeon_tools::config::resolve_tuning;
use dungeon_tools::render::{describe_event, render_snapshot};
use dungeon_tools::script::parse_script;
use log::info;
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for level generation and every combat roll
    #[arg(short, long, default_value_t = 123)]
    seed: u64,
    #[arg(short, long, value_enum, default_value_t = ClassArg::Knight)]
    class: ClassArg,
    /// TOML file overriding the default tuning
    #[arg(long)]
    config: Option<PathBuf>,
    /// Inline command script, e.g. "llj p hh"
    #[arg(short = 'm', long, conflicts_with = "script_file")]
    moves: Option<String>,
    /// File holding a command script
    #[arg(long)]
    script_file: Option<PathBuf>,
    /// Print one JSON turn report per line instead of the ASCII view
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    turns: u64,
    snapshot_hash: u64,
    final_score: Option<FinalScore>,
}

fn emit(report: &TurnReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json().context("Failed to serialize turn report")?);
    } else {
        for event in &report.events {
            println!("{}", describe_event(event));
        }
        println!("{}\n", render_snapshot(&report.snapshot));
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tuning = resolve_tuning(args.config.as_deref())?;
    let script = match (&args.moves, &args.script_file) {
        (Some(moves), _) => moves.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read script file: {}", path.display()))?,
        (None, None) => String::new(),
    };
    let commands = parse_script(&script)?;

    let mut game = Game::start(args.seed, tuning).context("Failed to start game")?;
    let report = game.select_class(args.class.into()).context("Failed to select class")?;
    emit(&report, args.json)?;

    for command in commands {
        if game.is_game_over() {
            info!("player is dead; ignoring the rest of the script");
            break;
        }
        let report = command.apply(&mut game).with_context(|| format!("{command:?} failed"))?;
        emit(&report, args.json)?;
    }

    let final_score = if game.is_game_over() { Some(game.acknowledge_death()?) } else { None };
    let summary = RunSummary {
        seed: game.seed(),
        turns: game.current_turn(),
        snapshot_hash: game.snapshot_hash(),
        final_score,
    };
    if args.json {
        println!("{}", serde_json::to_string(&summary).context("Failed to serialize summary")?);
    } else {
        println!("Turns: {}", summary.turns);
        println!("Snapshot Hash: {}", summary.snapshot_hash);
        match summary.final_score {
            Some(score) => println!(
                "Game over: {} scored {} on depth {} with {} kills",
                score.class.name(),
                score.score,
                score.depth,
                score.monsters_killed
            ),
            None => println!("Still alive at depth {}", game.state().depth),
        }
    }
    Ok(())
}
