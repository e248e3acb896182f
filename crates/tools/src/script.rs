use anyhow::{Result, bail};
use dungeon_core::{EngineError, Game, TurnReport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    Up,
    Down,
    Potion,
}

impl Command {
    pub fn apply(self, game: &mut Game) -> Result<TurnReport, EngineError> {
        match self {
            Command::Left => game.move_horizontal(-1),
            Command::Right => game.move_horizontal(1),
            Command::Up => game.move_vertical(-1),
            Command::Down => game.move_vertical(1),
            Command::Potion => game.use_potion(),
        }
    }
}

/// Parses a command script. Accepts vi keys (`h j k l`), arrow initials
/// (`L R U D`) and `p` for a potion. Whitespace and commas are ignored and
/// `#` comments run to the end of the line.
pub fn parse_script(text: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default();
        for (col, ch) in line.chars().enumerate() {
            let command = match ch {
                'h' | 'L' => Command::Left,
                'l' | 'R' => Command::Right,
                'k' | 'U' => Command::Up,
                'j' | 'D' => Command::Down,
                'p' | 'P' => Command::Potion,
                ',' => continue,
                c if c.is_whitespace() => continue,
                other => bail!("Unknown command {other:?} at line {}, column {}", line_no + 1, col + 1),
            };
            commands.push(command);
        }
    }
    Ok(commands)
}
