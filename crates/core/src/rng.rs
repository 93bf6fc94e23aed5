//! RNG module - injectable randomness for next-shape draws
//!
//! The engine never reaches for a global generator. Every operation that
//! draws takes a `&mut impl RandomSource`, so callers decide whether draws are
//! seeded, scripted, or shared across branches.
//!
//! Provides a simple LCG for deterministic runs and a scripted source for tests.

use crate::types::Shape;

/// A source of uniformly distributed `u32` values
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// # Panics
    ///
    /// Panics if `max` is zero.
    fn next_range(&mut self, max: u32) -> u32 {
        assert!(max > 0, "next_range called with an empty range");
        self.next_u32() % max
    }

    /// Draw the next shape, IPiece and LPiece with equal probability
    fn next_shape(&mut self) -> Shape {
        Shape::ALL[self.next_range(Shape::ALL.len() as u32) as usize]
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
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

    /// Current generator state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG have short periods; rotate the high half down.
        self.state.rotate_right(16)
    }
}

/// Replays a fixed list of values, cycling when exhausted
///
/// `ScriptedRng::shapes(&[Shape::LPiece, Shape::IPiece])` yields exactly that
/// sequence from [`RandomSource::next_shape`].
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<u32>,
    index: usize,
}

impl ScriptedRng {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "scripted rng needs at least one value");
        Self { values, index: 0 }
    }

    /// Script a sequence of shape draws
    pub fn shapes(shapes: &[Shape]) -> Self {
        Self::new(
            shapes
                .iter()
                .map(|s| match s {
                    Shape::IPiece => 0,
                    Shape::LPiece => 1,
                })
                .collect(),
        )
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let v = self.values[self.index];
        self.index = (self.index + 1) % self.values.len();
        v
    }
}
