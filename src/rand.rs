use wasm_bindgen::prelude::*;

/// Source of uniform samples in `[0, 1)`.
pub trait Random {
  fn next_unit(&mut self) -> f64;

  fn scaled(&mut self, bound:f64) -> f64 {
    self.next_unit() * bound
  }
}

/// The browser's `Math.random`. Only usable on a wasm target.
#[derive(Debug, Default, Clone, Copy)]
pub struct MathRandom;

impl Random for MathRandom {
  fn next_unit(&mut self) -> f64 {
    random()
  }
}

#[wasm_bindgen]
extern "C" {
  #[wasm_bindgen(js_namespace = Math, js_name = random)]
  fn random() -> f64;
}

/// Replays a fixed list of samples, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct Scripted {
  samples: Vec<f64>,
  next: usize
}

impl Scripted {
  pub fn new(samples:&[f64]) -> Scripted {
    let samples = if samples.is_empty() {vec![0.0]} else {samples.to_vec()};
    Scripted {samples, next: 0}
  }
}

impl Random for Scripted {
  fn next_unit(&mut self) -> f64 {
    let sample = self.samples[self.next % self.samples.len()];
    self.next += 1;
    sample
  }
}
