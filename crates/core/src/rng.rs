//! RNG module - injected shape randomness
//!
//! The session controller draws each new shape from a [`ShapeRng`]. The
//! default source is [`SimpleRng`], a seeded LCG picking uniformly among the
//! seven shapes. [`ScriptedShapes`] replays a fixed sequence for tests and
//! demos.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::PieceKind;

/// Source of the next shape to spawn
pub trait ShapeRng {
    fn next_shape(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The high bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() >> 16) * max) >> 16
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeRng for SimpleRng {
    fn next_shape(&mut self) -> PieceKind {
        let i = self.next_range(PieceKind::COUNT as u32) as usize;
        PieceKind::ALL[i]
    }
}

/// Replays a fixed, non-empty list of shapes, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    shapes: Vec<PieceKind>,
    next: usize,
}

impl ScriptedShapes {
    /// Panics if `shapes` is empty.
    pub fn new(shapes: impl Into<Vec<PieceKind>>) -> Self {
        let shapes = shapes.into();
        assert!(!shapes.is_empty(), "scripted shape list must not be empty");
        Self { shapes, next: 0 }
    }

    /// Always yield the same shape
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl ShapeRng for ScriptedShapes {
    fn next_shape(&mut self) -> PieceKind {
        let kind = self.shapes[self.next];
        self.next = (self.next + 1) % self.shapes.len();
        kind
    }
}

/// Seed derived from the wall clock, for sessions started without one
pub fn seed_from_time() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    (nanos ^ (nanos >> 32)) as u32
}
