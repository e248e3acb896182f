//! Game start-up and class selection.

use super::*;

/// A freshly generated level with its monsters already placed.
pub(super) struct Level {
    pub(super) grid: Grid,
    pub(super) spawns: SpawnPool,
    pub(super) monsters: SlotMap<MonsterId, Actor>,
}

/// Generates a grid for `depth` and spawns its monsters in slot order.
pub(super) fn build_level(
    depth: u32,
    chances: GenerationChances,
    rng: &mut ChaCha8Rng,
) -> Result<Level, EngineError> {
    let grid = LevelGenerator::new(chances).generate(depth, rng)?;
    let mut spawns = available_spawns(&grid);
    let stats = monster_stats_for_depth(depth);

    let mut monsters = SlotMap::with_key();
    for _ in 0..monster_capacity(depth) {
        let pos = spawns.take(rng)?;
        monsters.insert(Actor::new(
            ActorKind::Monster,
            pos,
            stats.max_health,
            stats.damage,
            stats.dodge_chance,
        ));
    }
    debug!("depth {depth}: spawned {} monsters, {} spawns left", monsters.len(), spawns.len());

    Ok(Level { grid, spawns, monsters })
}

impl Game {
    /// Generates the first level with monsters but no player.
    pub fn start(seed: u64, tuning: Tuning) -> Result<Self, EngineError> {
        tuning.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let depth = 1;
        let Level { grid, spawns, monsters } = build_level(depth, tuning.generation, &mut rng)?;

        let state = WorldState {
            grid,
            player: None,
            monsters,
            spawns,
            depth,
            score: 0,
            monsters_killed: 0,
            wall_chance: tuning.generation.wall,
            buffs: Buffs::default(),
            class: None,
            phase: Phase::AwaitingClassSelection,
        };
        info!("game started with seed {seed}");
        Ok(Self { seed, turn: 0, rng, tuning, state })
    }

    /// Places the player with the class's starting attributes. Allowed once.
    pub fn select_class(&mut self, class: ClassKind) -> Result<TurnReport, EngineError> {
        if self.state.class.is_some() {
            return Err(EngineError::ClassAlreadyChosen);
        }
        let pos = self.state.spawns.take(&mut self.rng)?;
        let stats = get_class_stats(class);

        self.state.player = Some(Player {
            actor: Actor::new(
                ActorKind::Player,
                pos,
                stats.max_health,
                stats.damage,
                stats.dodge_chance,
            ),
            attributes: PlayerAttributes::new(
                class,
                stats.armor,
                stats.critical_chance,
                stats.critical_damage,
            ),
        });
        self.state.class = Some(class);
        self.state.phase = Phase::Playing;
        info!("{} enters at {pos:?}", class.name());

        Ok(self.report(vec![TurnEvent::ClassSelected(class)]))
    }
}
