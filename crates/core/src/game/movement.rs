//! Player movement entry points: wraparound, blocking and destination interactions.

use super::*;

impl Game {
    pub fn move_horizontal(&mut self, step: i32) -> Result<TurnReport, EngineError> {
        self.move_player(Axis::Horizontal, step)
    }

    pub fn move_vertical(&mut self, step: i32) -> Result<TurnReport, EngineError> {
        self.move_player(Axis::Vertical, step)
    }

    fn move_player(&mut self, axis: Axis, step: i32) -> Result<TurnReport, EngineError> {
        if step != 1 && step != -1 {
            return Err(EngineError::InvalidStep(step));
        }
        let from = self.state.player_pos().ok_or(EngineError::NoPlayer)?;

        self.transact(|game, events| {
            match game.destination(from, axis, step) {
                Some(to) => game.enter(from, to, events)?,
                None => {
                    events.push(TurnEvent::Bumped { target: from.offset(axis, step) });
                    if !game.tuning.bump_consumes_turn {
                        return Ok(());
                    }
                }
            }
            game.do_turn(events)
        })
    }

    /// Where a step from `from` lands, or `None` when the move is blocked.
    fn destination(&self, from: Pos, axis: Axis, step: i32) -> Option<Pos> {
        let grid = &self.state.grid;
        let target = from.offset(axis, step);
        if grid.in_bounds(target) {
            return (!grid.tile_at(target).blocks_player()).then_some(target);
        }

        let wrapped = match (axis, step > 0) {
            (Axis::Horizontal, true) => Pos { y: from.y, x: 0 },
            (Axis::Horizontal, false) => Pos { y: from.y, x: grid.width as i32 - 1 },
            (Axis::Vertical, true) => Pos { y: 0, x: from.x },
            (Axis::Vertical, false) => Pos { y: grid.height as i32 - 1, x: from.x },
        };
        grid.tile_at(wrapped).accepts_wraparound().then_some(wrapped)
    }

    /// Resolves whatever waits at `to`. The player only leaves `from` for
    /// plain floor, coins and stairs.
    fn enter(&mut self, from: Pos, to: Pos, events: &mut Vec<TurnEvent>) -> Result<(), EngineError> {
        if let Some(monster) = self.state.monster_at(to) {
            return self.player_attacks(monster, events);
        }

        match self.state.grid.tile_at(to) {
            TileKind::ChestClosed => {
                self.state.grid.set_tile(to, TileKind::ChestOpened);
                self.open_chest(events)?;
            }
            TileKind::FountainFull => {
                self.state.grid.set_tile(to, TileKind::FountainEmpty);
                self.drink_fountain(events)?;
            }
            TileKind::ShopHealth => self.buy(ShopItem::HealthPotion, events)?,
            TileKind::ShopArmor => self.buy(ShopItem::Armor, events)?,
            TileKind::Coin => {
                self.state.grid.set_tile(to, TileKind::Floor);
                self.collect_coin()?;
                events.push(TurnEvent::CoinCollected);
                self.player_mut()?.actor.pos = to;
            }
            _ => self.player_mut()?.actor.pos = to,
        }
        debug!("player {from:?} -> {:?}", self.state.player_pos());
        Ok(())
    }
}
