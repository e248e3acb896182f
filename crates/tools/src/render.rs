use dungeon_core::{ChestReward, MonsterDrop, Pos, ShopItem, TileKind, TurnEvent, WorldSnapshot};

pub fn glyph(tile: TileKind) -> char {
    match tile {
        TileKind::Wall => '#',
        TileKind::Floor => '.',
        TileKind::ChestClosed => 'C',
        TileKind::ChestOpened => 'c',
        TileKind::Stairs => '>',
        TileKind::Coin => '$',
        TileKind::FountainFull => 'F',
        TileKind::FountainEmpty => 'f',
        TileKind::ShopHealth => 'H',
        TileKind::ShopArmor => 'A',
    }
}

/// Grid rows with the player as `@` and monsters as `M`, then a status line.
pub fn render_snapshot(snapshot: &WorldSnapshot) -> String {
    let grid = &snapshot.grid;
    let player = snapshot.player.as_ref().map(|player| player.actor.pos);
    let mut out = String::with_capacity((grid.width + 1) * (grid.height + 1));

    for y in 0..grid.height as i32 {
        for x in 0..grid.width as i32 {
            let pos = Pos { y, x };
            let ch = if player == Some(pos) {
                '@'
            } else if snapshot.monsters.iter().any(|monster| monster.pos == pos) {
                'M'
            } else {
                glyph(grid.tile_at(pos))
            };
            out.push(ch);
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "depth {} | score {} | kills {}",
        snapshot.depth, snapshot.score, snapshot.monsters_killed
    ));
    match &snapshot.player {
        Some(player) => out.push_str(&format!(
            " | hp {:.1}/{:.1} | armor {} | coins {} | potions {}",
            player.actor.health,
            player.actor.max_health,
            player.attributes.armor,
            player.attributes.coins,
            player.attributes.potions
        )),
        None => out.push_str(" | no player"),
    }
    if let Some(immortality) = snapshot.buffs.immortality {
        out.push_str(&format!(" | immortal {}", immortality.turns_remaining));
    }
    if let Some(turns) = snapshot.buffs.one_hit_kill {
        out.push_str(&format!(" | one-hit-kill {turns}"));
    }
    out
}

fn chest_text(reward: ChestReward) -> &'static str {
    match reward {
        ChestReward::HealthPotion => "a health potion",
        ChestReward::KillAllMonsters => "a blast that kills every monster",
        ChestReward::OneHitKill => "one-hit kills for 5 turns",
        ChestReward::Damage => "+1 damage",
        ChestReward::Immortality => "immortality for 5 turns",
        ChestReward::Dodge => "+5% dodge",
        ChestReward::Armor => "+30 armor",
        ChestReward::CriticalDamage => "+1 critical damage",
        ChestReward::MaxHealth => "+10 max health",
        ChestReward::CriticalChance => "+2% critical chance",
    }
}

fn item_text(item: ShopItem) -> &'static str {
    match item {
        ShopItem::HealthPotion => "health potion",
        ShopItem::Armor => "armor",
    }
}

pub fn describe_event(event: &TurnEvent) -> String {
    match event {
        TurnEvent::ClassSelected(class) => format!("You enter the dungeon as a {}.", class.name()),
        TurnEvent::Bumped { .. } => "Something blocks the way.".to_string(),
        TurnEvent::MonsterHit { amount, critical: true, .. } => {
            format!("Critical hit! The monster takes {amount:.1} damage.")
        }
        TurnEvent::MonsterHit { amount, .. } => format!("The monster takes {amount:.1} damage."),
        TurnEvent::MonsterDodged { .. } => "The monster dodges.".to_string(),
        TurnEvent::PlayerHit { amount, armor_absorbed: true } => {
            format!("Your armor soaks half the blow; you take {amount:.1} damage.")
        }
        TurnEvent::PlayerHit { amount, .. } => format!("You take {amount:.1} damage."),
        TurnEvent::PlayerDodged => "You dodge an attack.".to_string(),
        TurnEvent::AttackNegated => "The blow glances off your immortal skin.".to_string(),
        TurnEvent::MonsterKilled { drop, .. } => match drop {
            Some(MonsterDrop::HealthPotion) => "A monster dies and drops a potion.".to_string(),
            Some(MonsterDrop::Coin) => "A monster dies and drops a coin.".to_string(),
            None => "A monster dies.".to_string(),
        },
        TurnEvent::TerrainDestroyed { at } => format!("A monster smashes through at {at:?}."),
        TurnEvent::ChestOpened(reward) => format!("The chest holds {}.", chest_text(*reward)),
        TurnEvent::CoinCollected => "You pick up a coin.".to_string(),
        TurnEvent::FountainUsed => "The fountain restores you fully.".to_string(),
        TurnEvent::Purchased(item) => format!("You buy {}.", item_text(*item)),
        TurnEvent::InsufficientFunds { item, price } => {
            format!("Not enough coins: {} costs {price}.", item_text(*item))
        }
        TurnEvent::PotionUsed => "You drink a potion.".to_string(),
        TurnEvent::NoPotion => "You have no potions.".to_string(),
        TurnEvent::BuffExpired(kind) => format!("{kind:?} wears off."),
        TurnEvent::Descended { depth } => format!("You descend to depth {depth}."),
        TurnEvent::PlayerDied { score } => format!("You died with {score} points."),
    }
}
