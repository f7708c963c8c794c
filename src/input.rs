use crate::game_logic::Direction;

const KEY_RESTART:&str = "r";
const KEY_PAUSE:&str = "p";

/// What a single key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  Turn(Direction),
  Restart,
  TogglePause
}

/// Movement key bindings, matched against `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
  pub up: String,
  pub down: String,
  pub left: String,
  pub right: String
}

impl Default for Controls {
  fn default() -> Self {
    Controls {
      up: "w".to_string(),
      down: "s".to_string(),
      left: "a".to_string(),
      right: "d".to_string()
    }
  }
}

impl Controls {
  pub fn direction_for(&self, key:&str) -> Direction {
    if key == self.up {Direction::Up}
    else if key == self.down {Direction::Down}
    else if key == self.right {Direction::Right}
    else if key == self.left {Direction::Left}
    else {Direction::None}
  }

  /// Restart and pause win over a movement binding on the same key.
  pub fn command_for(&self, key:&str) -> Option<Command> {
    match key {
      KEY_RESTART => Some(Command::Restart),
      KEY_PAUSE   => Some(Command::TogglePause),
      _ => match self.direction_for(key) {
        Direction::None => None,
        dir             => Some(Command::Turn(dir))
      }
    }
  }
}
