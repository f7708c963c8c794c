//! Plain 2D coordinates. `Vector2` is real valued, `GridVector` always holds
//! whole grid cells.

use std::ops::Add;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vector2 {
  pub x: f64,
  pub y: f64
}

/// Integer cell coordinate. Components are floored when built from reals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridVector {
  pub x: i32,
  pub y: i32
}

impl Vector2 {
  pub const fn new(x:f64, y:f64) -> Vector2 {
    Vector2 {x,y}
  }

  pub fn plus(self, other:Vector2) -> Vector2 {
    Vector2::new(self.x + other.x, self.y + other.y)
  }
}

impl GridVector {
  pub const fn new(x:i32, y:i32) -> GridVector {
    GridVector {x,y}
  }

  /// Floors both components toward negative infinity.
  pub fn floored(x:f64, y:f64) -> GridVector {
    GridVector {x: x.floor() as i32, y: y.floor() as i32}
  }

  pub fn plus(self, other:GridVector) -> GridVector {
    GridVector::new(self.x + other.x, self.y + other.y)
  }
}

impl Add for Vector2 {
  type Output = Vector2;
  fn add(self, other:Vector2) -> Vector2 {self.plus(other)}
}

impl Add for GridVector {
  type Output = GridVector;
  fn add(self, other:GridVector) -> GridVector {self.plus(other)}
}

impl From<GridVector> for Vector2 {
  fn from(v:GridVector) -> Vector2 {
    Vector2::new(v.x as f64, v.y as f64)
  }
}

impl From<Vector2> for GridVector {
  fn from(v:Vector2) -> GridVector {
    GridVector::floored(v.x, v.y)
  }
}

impl PartialEq<GridVector> for Vector2 {
  fn eq(&self, other:&GridVector) -> bool {
    *self == Vector2::from(*other)
  }
}

impl PartialEq<Vector2> for GridVector {
  fn eq(&self, other:&Vector2) -> bool {
    Vector2::from(*self) == *other
  }
}
