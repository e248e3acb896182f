//! Attack resolution shared by both directions of a melee exchange.

use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackProfile {
    pub damage: f64,
    pub critical_chance: f64,
    pub critical_bonus: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DefenseProfile {
    pub dodge_chance: f64,
    pub max_health: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttackOutcome {
    Dodged,
    Critical(f64),
    Normal(f64),
}

/// Resolves one attack from a single uniform `draw`.
///
/// One-hit-kill deals the defender's full max health and skips the dodge and
/// critical bands. Otherwise the draw is compared against the dodge band
/// first and the critical band stacked on top of it.
pub fn resolve_attack(
    attacker: AttackProfile,
    defender: DefenseProfile,
    draw: f64,
    one_hit_kill: bool,
) -> AttackOutcome {
    if one_hit_kill {
        AttackOutcome::Normal(defender.max_health)
    } else if draw < defender.dodge_chance {
        AttackOutcome::Dodged
    } else if draw < attacker.critical_chance + defender.dodge_chance {
        AttackOutcome::Critical(attacker.damage + attacker.critical_bonus)
    } else {
        AttackOutcome::Normal(attacker.damage)
    }
}

impl Game {
    pub(super) fn player_attacks(
        &mut self,
        target: MonsterId,
        events: &mut Vec<TurnEvent>,
    ) -> Result<(), EngineError> {
        let player = self.state.player.as_ref().ok_or(EngineError::NoPlayer)?;
        let attacker = AttackProfile {
            damage: player.actor.damage,
            critical_chance: player.attributes.critical_chance,
            critical_bonus: player.attributes.critical_damage,
        };
        let one_hit_kill = self.state.buffs.one_hit_kill.is_some();
        let draw = dice::unit(&mut self.rng);
        let Some(monster) = self.state.monsters.get_mut(target) else {
            return Ok(());
        };
        let defender =
            DefenseProfile { dodge_chance: monster.dodge_chance, max_health: monster.max_health };

        let at = monster.pos;
        match resolve_attack(attacker, defender, draw, one_hit_kill) {
            AttackOutcome::Dodged => events.push(TurnEvent::MonsterDodged { at }),
            AttackOutcome::Critical(amount) => {
                monster.change_health(-amount);
                events.push(TurnEvent::MonsterHit { at, amount, critical: true });
            }
            AttackOutcome::Normal(amount) => {
                monster.change_health(-amount);
                events.push(TurnEvent::MonsterHit { at, amount, critical: false });
            }
        }
        Ok(())
    }

    /// A monster with `damage` strikes the player. Immortality negates the hit
    /// outright; otherwise armor halves it and wears down by one point.
    pub(super) fn monster_attacks(&mut self, damage: f64, events: &mut Vec<TurnEvent>) {
        let draw = dice::unit(&mut self.rng);
        let immortal = self.state.buffs.immortality.is_some();
        let Some(player) = self.state.player.as_mut() else {
            return;
        };
        if immortal {
            events.push(TurnEvent::AttackNegated);
            return;
        }

        let attacker = AttackProfile { damage, critical_chance: 0.0, critical_bonus: 0.0 };
        let defender = DefenseProfile {
            dodge_chance: player.actor.dodge_chance,
            max_health: player.actor.max_health,
        };
        let amount = match resolve_attack(attacker, defender, draw, false) {
            AttackOutcome::Dodged => {
                events.push(TurnEvent::PlayerDodged);
                return;
            }
            AttackOutcome::Critical(amount) | AttackOutcome::Normal(amount) => amount,
        };

        if player.attributes.armor > 0 {
            player.attributes.change_armor(-1);
            let halved = amount / 2.0;
            player.actor.change_health(-halved);
            events.push(TurnEvent::PlayerHit { amount: halved, armor_absorbed: true });
        } else {
            player.actor.change_health(-amount);
            events.push(TurnEvent::PlayerHit { amount, armor_absorbed: false });
        }
    }
}
