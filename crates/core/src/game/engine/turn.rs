use super::*;

impl Game {
    /// Cleans up the dead, moves monsters, ticks buffs, then checks for death
    /// before stairs.
    pub(in crate::game) fn do_turn(&mut self, events: &mut Vec<TurnEvent>) -> Result<(), EngineError> {
        self.turn += 1;
        self.clean_dead_monsters(events);
        self.advance_monsters(events);
        self.tick_buffs(events);

        let Some(player) = self.state.player.as_ref() else {
            return Ok(());
        };
        if player.actor.health < 1.0 {
            self.kill_player(events);
        } else if self.state.grid.tile_at(player.actor.pos) == TileKind::Stairs {
            self.descend(events)?;
        }
        Ok(())
    }

    fn clean_dead_monsters(&mut self, events: &mut Vec<TurnEvent>) {
        let dead: Vec<MonsterId> = self
            .state
            .monsters
            .iter()
            .filter(|(_, monster)| !monster.is_alive())
            .map(|(id, _)| id)
            .collect();

        for id in dead {
            let Some(monster) = self.state.monsters.remove(id) else {
                continue;
            };
            let drop = self.roll_monster_drop();
            self.state.monsters_killed += 1;
            self.state.score += KILL_SCORE;
            info!("monster at {:?} slain, drop {drop:?}", monster.pos);
            events.push(TurnEvent::MonsterKilled { at: monster.pos, drop });
        }
    }

    fn tick_buffs(&mut self, events: &mut Vec<TurnEvent>) {
        let Some(player) = self.state.player.as_mut() else {
            return;
        };
        let buffs = &mut self.state.buffs;

        if let Some(immortality) = buffs.immortality.as_mut() {
            if immortality.turns_remaining == 0 {
                player.actor.change_health(-IMMORTALITY_EXPIRY_PENALTY);
                player.actor.change_health(immortality.health_at_activation);
                buffs.immortality = None;
                events.push(TurnEvent::BuffExpired(BuffKind::Immortality));
            } else {
                player.actor.change_health(player.actor.max_health);
                immortality.turns_remaining -= 1;
            }
        }

        if let Some(turns) = buffs.one_hit_kill.as_mut() {
            if *turns == 0 {
                buffs.one_hit_kill = None;
                events.push(TurnEvent::BuffExpired(BuffKind::OneHitKill));
            } else {
                *turns -= 1;
            }
        }
    }

    fn kill_player(&mut self, events: &mut Vec<TurnEvent>) {
        self.state.player = None;
        self.state.phase = Phase::PlayerDead;
        info!(
            "player died on depth {} with score {} after {} kills",
            self.state.depth, self.state.score, self.state.monsters_killed
        );
        events.push(TurnEvent::PlayerDied { score: self.state.score });
    }
}
