use crate::rand::Random;
use crate::vector::GridVector;

/// The movement lattice laid over a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
  surface_w: u32,
  surface_h: u32,
  cell_size: u32
}

impl Grid {
  pub const fn new(surface_w:u32, surface_h:u32, cell_size:u32) -> Grid {
    Grid {surface_w, surface_h, cell_size}
  }

  pub fn width(&self) -> i32 {
    self.cells_across(self.surface_w)
  }

  pub fn height(&self) -> i32 {
    self.cells_across(self.surface_h)
  }

  fn cells_across(&self, pixels:u32) -> i32 {
    if self.cell_size == 0 {return 0}
    self.to_grid(pixels as f64).floor() as i32
  }

  /// At least one whole cell on each axis.
  pub fn is_playable(&self) -> bool {
    self.width() > 0 && self.height() > 0
  }

  pub fn cell_size(&self) -> u32 {
    self.cell_size
  }

  pub fn surface_size(&self) -> (u32,u32) {
    (self.surface_w, self.surface_h)
  }

  /// Pixel coordinate to grid units. Not floored.
  pub fn to_grid(&self, coord:f64) -> f64 {
    coord / self.cell_size as f64
  }

  pub fn to_pixel(&self, coord:i32) -> f64 {
    coord as f64 * self.cell_size as f64
  }

  pub fn center(&self) -> GridVector {
    GridVector::floored(self.width() as f64 / 2.0, self.height() as f64 / 2.0)
  }

  /// Independent uniform sample per axis.
  pub fn random_cell(&self, rng:&mut impl Random) -> GridVector {
    let x = rng.scaled(self.width() as f64);
    let y = rng.scaled(self.height() as f64);
    let cell = GridVector::floored(x, y);
    debug_assert!(!self.is_playable() || self.contains(cell), "{cell:?} off the grid");
    cell
  }

  /// Toroidal wrap for a cell at most one step outside the grid.
  pub fn wrap(&self, cell:GridVector) -> GridVector {
    GridVector::new(
      wrap_axis(cell.x, self.width()),
      wrap_axis(cell.y, self.height())
    )
  }

  pub fn contains(&self, cell:GridVector) -> bool {
    (0..self.width()).contains(&cell.x) && (0..self.height()).contains(&cell.y)
  }
}

fn wrap_axis(coord:i32, len:i32) -> i32 {
  if len <= 0 {0}
  else if coord < 0 {len-1}
  else if coord > len-1 {0}
  else {coord}
}
