use crate::input::Controls;

pub const CELL_SIZE:u32 = 16;
pub const TAIL_LENGTH_DEFAULT:usize = 5; // length is one-based, ∴ len > 0
pub const LOOP_DELAY_BASE:u32 = 240;     // milliseconds
pub const LOOP_DELAY_MIN:u32 = 20;
const SPEED_UP:f64 = 0.9;
const SCORE_SCALE:f64 = 175.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
  pub canvas_id: String,
  pub cell_size: u32, // pixels
  pub initial_tail_length: usize,
  pub base_loop_delay: u32,
  pub min_loop_delay: u32,
  pub speed_up: f64,
  /// Score gain ceiling at a cell size of 8
  pub score_scale: f64,
  pub controls: Controls
}

impl Default for GameConfig {
  fn default() -> Self {
    GameConfig {
      canvas_id: "game".to_string(),
      cell_size: CELL_SIZE,
      initial_tail_length: TAIL_LENGTH_DEFAULT,
      base_loop_delay: LOOP_DELAY_BASE,
      min_loop_delay: LOOP_DELAY_MIN,
      speed_up: SPEED_UP,
      score_scale: SCORE_SCALE,
      controls: Controls::default()
    }
  }
}

impl GameConfig {
  pub fn max_score_gain(&self) -> f64 {
    self.score_scale * (self.cell_size as f64 / 8.0)
  }

  pub fn next_loop_delay(&self, delay:u32) -> u32 {
    let sped_up = (delay as f64 * self.speed_up).floor() as u32;
    sped_up.max(self.min_loop_delay)
  }

  pub fn validate(&self) -> Result<(),&'static str> {
    if self.cell_size == 0 {return Err("cell size must be at least one pixel")}
    if self.initial_tail_length == 0 {return Err("initial tail length must be at least 1")}
    if self.min_loop_delay == 0 {return Err("minimum loop delay must be positive")}
    if self.base_loop_delay < self.min_loop_delay {
      return Err("base loop delay is below the minimum")
    }
    if !(self.speed_up > 0.0 && self.speed_up <= 1.0) {
      return Err("speed up factor must lie in (0, 1]")
    }
    if !(self.score_scale >= 0.0) {return Err("score scale must not be negative")}
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = GameConfig::default();
    assert_eq!(config.canvas_id, "game");
    assert_eq!(config.cell_size, 16);
    assert_eq!(config.initial_tail_length, 5);
    assert_eq!(config.base_loop_delay, 240);
    assert_eq!(config.min_loop_delay, 20);
  }

  #[test]
  fn test_max_score_gain_scales_with_cell_size() {
    assert_eq!(GameConfig::default().max_score_gain(), 350.0);
    let small = GameConfig {cell_size: 8, ..Default::default()};
    assert_eq!(small.max_score_gain(), 175.0);
  }

  #[test]
  fn test_next_loop_delay() {
    let config = GameConfig::default();
    assert_eq!(config.next_loop_delay(240), 216);
    assert_eq!(config.next_loop_delay(216), 194);
    assert_eq!(config.next_loop_delay(22), 20);
    assert_eq!(config.next_loop_delay(20), 20);
  }

  #[test]
  fn test_validate() {
    assert_eq!(GameConfig::default().validate(), Ok(()));
    let bad = [
      GameConfig {cell_size: 0, ..Default::default()},
      GameConfig {initial_tail_length: 0, ..Default::default()},
      GameConfig {min_loop_delay: 0, ..Default::default()},
      GameConfig {base_loop_delay: 10, ..Default::default()},
      GameConfig {speed_up: 0.0, ..Default::default()},
      GameConfig {speed_up: 1.5, ..Default::default()},
      GameConfig {score_scale: -1.0, ..Default::default()},
    ];
    for config in bad {
      assert!(config.validate().is_err(), "{config:?} should be rejected");
    }
  }

  #[test]
  fn test_loop_delay_reaches_floor() {
    let config = GameConfig::default();
    let mut delay = config.base_loop_delay;
    for _ in 0..100 {
      let next = config.next_loop_delay(delay);
      assert!(next <= delay);
      delay = next;
    }
    assert_eq!(delay, 20);
  }
}
