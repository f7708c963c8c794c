pub mod config;
mod console;
pub mod game_logic;
pub mod game_loop;
pub mod grid;
pub mod input;
pub mod rand;
pub mod render;
pub mod vector;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use config::GameConfig;
use game_logic::Game;
use game_loop::{LoopController, Scheduler};
use grid::Grid;
use rand::MathRandom;
use render::Surface;
use wasm_bindgen::{prelude::*, JsCast};

type BrowserGame = LoopController<MathRandom,TimeoutScheduler,CanvasSurface>;

/// Reasons the page can't host a game.
#[derive(Debug)]
pub enum SetupError {
  NoWindow,
  NoDocument,
  MissingCanvas(String),
  NotACanvas(String),
  NoContext,
  Listener,
  BadConfig(&'static str),
  GridTooSmall {width:u32, height:u32, cell_size:u32}
}

impl fmt::Display for SetupError {
  fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SetupError::NoWindow         => write!(f, "no global window"),
      SetupError::NoDocument       => write!(f, "window has no document"),
      SetupError::MissingCanvas(id)=> write!(f, "no element with id \"{id}\""),
      SetupError::NotACanvas(id)   => write!(f, "element \"{id}\" is not a <canvas>"),
      SetupError::NoContext        => write!(f, "canvas has no 2d context"),
      SetupError::Listener         => write!(f, "failed to register keypress listener"),
      SetupError::BadConfig(why)   => write!(f, "bad config: {why}"),
      SetupError::GridTooSmall {width,height,cell_size} => write!(
        f, "a {width}x{height} canvas doesn't fit one {cell_size}px cell"
      )
    }
  }
}

impl std::error::Error for SetupError {}

impl From<SetupError> for JsValue {
  fn from(e:SetupError) -> JsValue {
    JsValue::from_str(&format!("fxsnake: {e}"))
  }
}

struct CanvasSurface {
  canvas:web_sys::HtmlCanvasElement,
  context:web_sys::CanvasRenderingContext2d
}

impl CanvasSurface {
  fn find(document:&web_sys::Document, id:&str) -> Result<Self,SetupError> {
    let canvas = document
      .get_element_by_id(id).ok_or_else(|| SetupError::MissingCanvas(id.to_string()))?
      .dyn_into::<web_sys::HtmlCanvasElement>()
      .map_err(|_| SetupError::NotACanvas(id.to_string()))?;
    let context = canvas
      .get_context("2d").ok().flatten().ok_or(SetupError::NoContext)?
      .dyn_into::<web_sys::CanvasRenderingContext2d>()
      .map_err(|_| SetupError::NoContext)?;
    Ok(CanvasSurface {canvas,context})
  }
}

impl Surface for CanvasSurface {
  fn fill_rect(&mut self, colour:&str, x:f64, y:f64, w:f64, h:f64) {
    self.context.set_fill_style(&JsValue::from_str(colour));
    self.context.fill_rect(x,y,w,h);
  }

  fn stroke_rect(&mut self, colour:&str, x:f64, y:f64, w:f64, h:f64) {
    self.context.set_stroke_style(&JsValue::from_str(colour));
    self.context.stroke_rect(x,y,w,h);
  }

  fn fill_text_top_right(&mut self, colour:&str, font:&str, text:&str, x:f64, y:f64) {
    self.context.set_fill_style(&JsValue::from_str(colour));
    self.context.set_font(font);
    self.context.set_text_align("right");
    self.context.set_text_baseline("top");
    self.context.fill_text(text,x,y).unwrap_throw();
  }
}

/// `setTimeout` backed scheduler. Every timer runs the same callback, which
/// gets the timer's token as its argument.
struct TimeoutScheduler {
  window:web_sys::Window,
  on_timeout:Closure<dyn FnMut(JsValue)>,
  next_token:u32,
  live:Option<(u32,i32)> // (token, browser timer id)
}

impl Scheduler for TimeoutScheduler {
  type Handle = u32;

  fn schedule(&mut self, delay_ms:u32) -> u32 {
    self.next_token = self.next_token.wrapping_add(1);
    let token = self.next_token;
    let id = self.window
      .set_timeout_with_callback_and_timeout_and_arguments_1(
        self.on_timeout.as_ref().unchecked_ref(),
        delay_ms as i32,
        &JsValue::from(token)
      )
      .unwrap_throw();
    self.live = Some((token,id));
    token
  }

  fn cancel(&mut self, handle:u32) {
    if let Some((token,id)) = self.live {
      if token == handle {
        self.window.clear_timeout_with_handle(id);
        self.live = None;
      }
    }
  }
}

fn playable_grid(config:&GameConfig, width:u32, height:u32) -> Result<Grid,SetupError> {
  config.validate().map_err(SetupError::BadConfig)?;
  let grid = Grid::new(width, height, config.cell_size);
  if !grid.is_playable() {
    return Err(SetupError::GridTooSmall {width, height, cell_size: config.cell_size});
  }
  Ok(grid)
}

fn build(config:GameConfig) -> Result<(),SetupError> {
  let window = web_sys::window().ok_or(SetupError::NoWindow)?;
  let document = window.document().ok_or(SetupError::NoDocument)?;
  let surface = CanvasSurface::find(&document, &config.canvas_id)?;
  let grid = playable_grid(&config, surface.canvas.width(), surface.canvas.height())?;
  let game = Game::new(grid, config, MathRandom);

  let controller = Rc::new_cyclic(|weak:&Weak<RefCell<BrowserGame>>| {
    let weak = weak.clone();
    let on_timeout = Closure::wrap(Box::new(move |token:JsValue| {
      let (Some(controller), Some(token)) = (weak.upgrade(), token.as_f64()) else {return};
      controller.borrow_mut().on_timer(token as u32);
    }) as Box<dyn FnMut(JsValue)>);
    let scheduler = TimeoutScheduler {
      window: window.clone(),
      on_timeout,
      next_token: 0,
      live: None
    };
    RefCell::new(LoopController::new(game, scheduler, surface))
  });

  // The listener owns the only strong handle, so the game lives as long as
  // the page.
  let on_keypress = {
    let controller = Rc::clone(&controller);
    Closure::wrap(Box::new(move |event:web_sys::KeyboardEvent| {
      controller.borrow_mut().handle_key(&event.key());
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>)
  };
  document
    .add_event_listener_with_callback("keypress", on_keypress.as_ref().unchecked_ref())
    .map_err(|_| SetupError::Listener)?;
  on_keypress.forget();

  controller.borrow_mut().start();
  Ok(())
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(),JsValue> {
  console::init(log::LevelFilter::Info);
  build(GameConfig::default())?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_playable_grid_accepts_defaults() {
    let grid = playable_grid(&GameConfig::default(), 320, 240).unwrap();
    assert_eq!((grid.width(), grid.height()), (20, 15));
  }

  #[test]
  fn test_rejects_bad_config() {
    let zero_cell = GameConfig {cell_size: 0, ..Default::default()};
    assert!(matches!(playable_grid(&zero_cell, 320, 240), Err(SetupError::BadConfig(_))));
    let no_tail = GameConfig {initial_tail_length: 0, ..Default::default()};
    assert!(matches!(playable_grid(&no_tail, 320, 240), Err(SetupError::BadConfig(_))));
  }

  #[test]
  fn test_rejects_canvas_smaller_than_a_cell() {
    let config = GameConfig::default();
    assert!(matches!(
      playable_grid(&config, 10, 240),
      Err(SetupError::GridTooSmall {width: 10, height: 240, cell_size: 16})
    ));
    assert!(matches!(playable_grid(&config, 320, 0), Err(SetupError::GridTooSmall {..})));
  }

  #[test]
  fn test_setup_error_messages() {
    let e = SetupError::GridTooSmall {width: 10, height: 240, cell_size: 16};
    assert_eq!(e.to_string(), "a 10x240 canvas doesn't fit one 16px cell");
    assert_eq!(SetupError::MissingCanvas("game".into()).to_string(), "no element with id \"game\"");
  }
}
