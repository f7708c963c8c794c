//! Projection of game state onto a drawing surface. Nothing here mutates the
//! game.

use crate::game_logic::Game;

const BACKGROUND:&str = "white";
const GRID_LINE:&str = "rgba(0,0,0,.1)";
const BODY:&str = "black";
const FOOD:&str = "green";
const SCORE_TEXT:&str = "black";
const SCORE_FONT:&str = "32px SMMaker";
const SCORE_MARGIN:f64 = 8.0;

pub trait Surface {
  fn fill_rect(&mut self, colour:&str, x:f64, y:f64, w:f64, h:f64);
  fn stroke_rect(&mut self, colour:&str, x:f64, y:f64, w:f64, h:f64);
  /// Right aligned, top baseline, so `(x,y)` is the text's top-right corner.
  fn fill_text_top_right(&mut self, colour:&str, font:&str, text:&str, x:f64, y:f64);
}

pub fn draw_game<R>(game:&Game<R>, surface:&mut impl Surface) {
  let grid = game.grid();
  let (surface_w,surface_h) = grid.surface_size();
  let cell = grid.cell_size() as f64;

  surface.fill_rect(BACKGROUND, 0.0, 0.0, surface_w as f64, surface_h as f64);

  for x in 0..grid.width() {
    for y in 0..grid.height() {
      surface.stroke_rect(GRID_LINE, grid.to_pixel(x), grid.to_pixel(y), cell, cell);
    }
  }

  for segment in game.body().take(game.tail_length()) {
    surface.fill_rect(BODY, grid.to_pixel(segment.x), grid.to_pixel(segment.y), cell, cell);
  }

  if let Some(food) = game.food() {
    surface.fill_rect(FOOD, grid.to_pixel(food.x), grid.to_pixel(food.y), cell, cell);
  }

  surface.fill_text_top_right(
    SCORE_TEXT,
    SCORE_FONT,
    &format!("Score: {}", game.score()),
    surface_w as f64 - SCORE_MARGIN,
    SCORE_MARGIN
  );
}
