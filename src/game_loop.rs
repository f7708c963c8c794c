use crate::game_logic::{Game, GameEvent};
use crate::input::Command;
use crate::rand::Random;
use crate::render::{draw_game, Surface};

/// Delayed single-shot callbacks. A fired timer is handed back through
/// `LoopController::on_timer` with the handle `schedule` returned.
pub trait Scheduler {
  type Handle: Copy + PartialEq;
  fn schedule(&mut self, delay_ms:u32) -> Self::Handle;
  fn cancel(&mut self, handle:Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {Stopped,Running,Paused}

/// Drives ticks on a timer and owns the run/pause/restart lifecycle. At most
/// one tick is ever pending.
pub struct LoopController<R,S:Scheduler,D> {
  game: Game<R>,
  scheduler: S,
  surface: D,
  state: LoopState,
  pending: Option<S::Handle>,
  best_score: u32,
  deaths: u32
}

impl<R:Random, S:Scheduler, D:Surface> LoopController<R,S,D> {
  pub fn new(game:Game<R>, scheduler:S, surface:D) -> Self {
    log::info!("Constructing a new game.");
    LoopController {
      game,
      scheduler,
      surface,
      state: LoopState::Stopped,
      pending: None,
      best_score: 0,
      deaths: 0
    }
  }

  pub fn start(&mut self) {
    self.restart();
  }

  pub fn restart(&mut self) {
    self.cancel_pending();
    if self.best_score > 0 {
      log::info!("Best score this session: {}", self.best_score);
    }
    self.game.reset();
    self.state = LoopState::Running;
    self.schedule_next(0);
  }

  pub fn toggle_pause(&mut self) {
    self.cancel_pending();
    match self.state {
      LoopState::Running => {
        self.state = LoopState::Paused;
        log::info!("Game paused.");
      }
      LoopState::Paused | LoopState::Stopped => {
        self.state = LoopState::Running;
        self.schedule_next(0);
        log::info!("Game resumed.");
      }
    }
  }

  pub fn handle_key(&mut self, key:&str) {
    let command = self.game.config().controls.command_for(key);
    match command {
      Some(Command::Restart)     => self.restart(),
      Some(Command::TogglePause) => self.toggle_pause(),
      Some(Command::Turn(direction)) if self.is_running() => {
        self.game.change_direction(direction);
      }
      _ => {}
    }
  }

  /// Runs the tick for `handle` if it is still the pending one. Timers left
  /// over from before a pause or restart are dropped.
  pub fn on_timer(&mut self, handle:S::Handle) {
    if self.pending != Some(handle) || !self.is_running() {return;}
    self.pending = None;
    self.tick();
  }

  fn tick(&mut self) {
    match self.game.tick() {
      GameEvent::Died => self.on_death(),
      GameEvent::FoodCollected {..} => {
        self.best_score = self.best_score.max(self.game.score());
      }
      GameEvent::Moved => {}
    }
    draw_game(&self.game, &mut self.surface);

    if self.is_running() {
      let delay = self.game.loop_delay();
      self.schedule_next(delay);
    }
  }

  // Death is reported only; the run keeps going.
  fn on_death(&mut self) {
    self.deaths += 1;
    log::warn!("YOU'RE DEAD.");
  }

  fn schedule_next(&mut self, delay_ms:u32) {
    self.pending = Some(self.scheduler.schedule(delay_ms));
  }

  fn cancel_pending(&mut self) {
    if let Some(handle) = self.pending.take() {
      self.scheduler.cancel(handle);
    }
  }
}

impl<R,S:Scheduler,D> LoopController<R,S,D> {
  pub fn is_running(&self) -> bool {
    self.state == LoopState::Running
  }

  pub fn state(&self) -> LoopState {
    self.state
  }

  pub fn has_pending_tick(&self) -> bool {
    self.pending.is_some()
  }

  pub fn best_score(&self) -> u32 {
    self.best_score
  }

  pub fn deaths(&self) -> u32 {
    self.deaths
  }

  pub fn game(&self) -> &Game<R> {
    &self.game
  }

  pub fn scheduler(&self) -> &S {
    &self.scheduler
  }

  pub fn surface(&self) -> &D {
    &self.surface
  }
}
