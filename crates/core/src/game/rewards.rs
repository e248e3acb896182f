//! Chests, shops, fountains, coins, monster drops and potions.

use super::*;

impl Game {
    pub(super) fn open_chest(&mut self, events: &mut Vec<TurnEvent>) -> Result<(), EngineError> {
        let reward = pick_chest_reward(dice::unit(&mut self.rng));
        self.state.score += CHEST_SCORE;

        match reward {
            ChestReward::KillAllMonsters => self.state.monsters.clear(),
            ChestReward::OneHitKill => self.state.buffs.one_hit_kill = Some(BUFF_TURNS),
            ChestReward::Immortality => {
                let health = self.player_mut()?.actor.health;
                self.state.buffs.immortality =
                    Some(Immortality { turns_remaining: BUFF_TURNS, health_at_activation: health });
            }
            _ => {
                let player = self.player_mut()?;
                match reward {
                    ChestReward::HealthPotion => player.attributes.potions += 1,
                    ChestReward::Damage => player.actor.damage += CHEST_DAMAGE_GAIN,
                    ChestReward::Dodge => player.actor.dodge_chance += CHEST_DODGE_GAIN,
                    ChestReward::Armor => player.attributes.change_armor(CHEST_ARMOR_GAIN),
                    ChestReward::CriticalDamage => {
                        player.attributes.critical_damage += CHEST_CRITICAL_DAMAGE_GAIN;
                    }
                    ChestReward::MaxHealth => player.actor.max_health += CHEST_MAX_HEALTH_GAIN,
                    ChestReward::CriticalChance => {
                        player.attributes.critical_chance += CHEST_CRITICAL_CHANCE_GAIN;
                    }
                    ChestReward::KillAllMonsters
                    | ChestReward::OneHitKill
                    | ChestReward::Immortality => {}
                }
            }
        }
        debug!("chest gave {reward:?}");
        events.push(TurnEvent::ChestOpened(reward));
        Ok(())
    }

    pub(super) fn drink_fountain(&mut self, events: &mut Vec<TurnEvent>) -> Result<(), EngineError> {
        let actor = &mut self.player_mut()?.actor;
        actor.change_health(actor.max_health);
        events.push(TurnEvent::FountainUsed);
        Ok(())
    }

    pub(super) fn buy(&mut self, item: ShopItem, events: &mut Vec<TurnEvent>) -> Result<(), EngineError> {
        let price = shop_price(item);
        let attributes = &mut self.player_mut()?.attributes;
        if attributes.coins < price {
            events.push(TurnEvent::InsufficientFunds { item, price });
            return Ok(());
        }

        attributes.coins -= price;
        match item {
            ShopItem::HealthPotion => attributes.potions += 1,
            ShopItem::Armor => attributes.change_armor(SHOP_ARMOR_GAIN),
        }
        events.push(TurnEvent::Purchased(item));
        Ok(())
    }

    pub(super) fn collect_coin(&mut self) -> Result<(), EngineError> {
        self.player_mut()?.attributes.coins += 1;
        self.state.score += COIN_SCORE;
        Ok(())
    }

    /// One shared draw: the potion band first, then the coin band above it.
    pub(super) fn roll_monster_drop(&mut self) -> Option<MonsterDrop> {
        let draw = dice::unit(&mut self.rng);
        let drops = self.tuning.drops;
        let player = self.state.player.as_mut()?;
        if draw < drops.potion {
            player.attributes.potions += 1;
            Some(MonsterDrop::HealthPotion)
        } else if draw < drops.coin {
            player.attributes.coins += 1;
            self.state.score += COIN_SCORE;
            Some(MonsterDrop::Coin)
        } else {
            None
        }
    }

    /// Drinks a potion if one is held. The turn runs either way.
    pub fn use_potion(&mut self) -> Result<TurnReport, EngineError> {
        if self.state.player.is_none() {
            return Err(EngineError::NoPlayer);
        }
        self.transact(|game, events| {
            let player = game.player_mut()?;
            if player.attributes.potions > 0 {
                player.attributes.potions -= 1;
                player.actor.change_health(POTION_HEAL);
                events.push(TurnEvent::PotionUsed);
            } else {
                events.push(TurnEvent::NoPotion);
            }
            game.do_turn(events)
        })
    }
}
