use std::collections::VecDeque;
use std::fmt;

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::rand::Random;
use crate::vector::GridVector;

/// `None` means no movement has been initiated yet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction{#[default] None,Right,Up,Left,Down}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
  Moved,
  FoodCollected {tail_length:usize, score_added:u32, loop_delay:u32},
  Died
}

/// State of one run plus the rules that advance it.
#[derive(Debug)]
pub struct Game<R> {
  grid: Grid,
  config: GameConfig,
  rng: R,
  body: VecDeque<GridVector>, // head first
  direction: Direction,
  tail_length: usize,
  food: Option<GridVector>,
  score: u32,
  loop_delay: u32
}

impl Direction {
  pub fn opposite(self) -> Direction {
    match self {
      Direction::Up    => Direction::Down,
      Direction::Down  => Direction::Up,
      Direction::Left  => Direction::Right,
      Direction::Right => Direction::Left,
      Direction::None  => Direction::None
    }
  }

  pub fn is_opposite(self, other:Direction) -> bool {
    self != Direction::None && self.opposite() == other
  }

  /// Unit step on the grid; zero for `None`.
  pub fn step(self) -> GridVector {
    match self {
      Direction::Up    => GridVector::new( 0,-1),
      Direction::Down  => GridVector::new( 0, 1),
      Direction::Right => GridVector::new( 1, 0),
      Direction::Left  => GridVector::new(-1, 0),
      Direction::None  => GridVector::new( 0, 0)
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Direction::None  => "none",
      Direction::Right => "right",
      Direction::Up    => "up",
      Direction::Left  => "left",
      Direction::Down  => "down"
    };
    f.write_str(name)
  }
}

impl<R:Random> Game<R> {
  pub fn new(grid:Grid, config:GameConfig, rng:R) -> Game<R> {
    let mut body = VecDeque::with_capacity(config.initial_tail_length + 1);
    body.push_front(grid.center());
    Game {
      grid,
      tail_length: config.initial_tail_length.max(1),
      loop_delay: config.base_loop_delay,
      config,
      rng,
      body,
      direction: Direction::None,
      food: None,
      score: 0
    }
  }

  /// Puts the game back at the start of a fresh run.
  pub fn reset(&mut self) {
    log::info!("Starting a new game.");
    self.body.clear();
    self.body.push_front(self.grid.center());
    self.direction = Direction::Up;
    self.tail_length = self.config.initial_tail_length.max(1);
    self.food = None;
    self.score = 0;
    self.loop_delay = self.config.base_loop_delay;
  }

  /// Advances the run by one step: spawn food if needed, move, check for a
  /// self hit, then check for food under the new head.
  pub fn tick(&mut self) -> GameEvent {
    if self.food.is_none() {
      self.food = Some(self.grid.random_cell(&mut self.rng));
    }

    let new_head = self.grid.wrap(self.head() + self.direction.step());
    debug_assert!(!self.grid.is_playable() || self.grid.contains(new_head));
    self.body.push_front(new_head);
    self.body.truncate(self.tail_length);

    if self.body.iter().skip(1).any(|cell| *cell == new_head) {
      return GameEvent::Died;
    }
    if self.food == Some(new_head) {
      return self.collect_food();
    }
    GameEvent::Moved
  }

  fn collect_food(&mut self) -> GameEvent {
    self.tail_length += 1;
    self.food = None;
    let score_added =
      (self.config.max_score_gain() * self.rng.next_unit()).round() as u32;
    self.score += score_added;
    self.loop_delay = self.config.next_loop_delay(self.loop_delay);

    log::info!(
      "Collected food. New tail length: {}, added score: {}, loop delay: {}",
      self.tail_length, score_added, self.loop_delay
    );
    GameEvent::FoodCollected {
      tail_length: self.tail_length,
      score_added,
      loop_delay: self.loop_delay
    }
  }

  /// Turns toward `direction` unless that would reverse onto the neck.
  /// Returns whether the turn was taken. `None` is never a valid turn.
  pub fn change_direction(&mut self, direction:Direction) -> bool {
    if direction == Direction::None || self.direction.is_opposite(direction) {
      return false;
    }
    self.direction = direction;
    log::info!("Switched to direction {direction}");
    true
  }
}

impl<R> Game<R> {
  pub fn head(&self) -> GridVector {
    // never empty: reset and tick both leave at least the head
    self.body[0]
  }

  pub fn body(&self) -> impl Iterator<Item=&GridVector> + '_ {
    self.body.iter()
  }

  pub fn body_len(&self) -> usize {
    self.body.len()
  }

  pub fn direction(&self) -> Direction {
    self.direction
  }

  pub fn tail_length(&self) -> usize {
    self.tail_length
  }

  pub fn food(&self) -> Option<GridVector> {
    self.food
  }

  pub fn score(&self) -> u32 {
    self.score
  }

  pub fn loop_delay(&self) -> u32 {
    self.loop_delay
  }

  pub fn grid(&self) -> &Grid {
    &self.grid
  }

  pub fn config(&self) -> &GameConfig {
    &self.config
  }
}
