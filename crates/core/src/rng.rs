//! RNG module - shape providers for spawning
//!
//! The dispatcher draws every new piece from a [`ShapeSource`]. Sources are
//! infinite and cannot be rewound; each kind is consumed exactly once.
//!
//! - [`UniformShapes`]: independent uniform draws over the seven kinds
//! - [`ScriptedShapes`]: replays a fixed cycle (deterministic play and tests)
//!
//! Also provides a simple LCG so seeded games are reproducible.

use crate::error::{CoreError, Result};
use crate::shapes::parse_sequence;
use crate::types::TetrominoKind;

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Takes the high half of the state; the low bits of an LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Provider of the next kind to spawn.
pub trait ShapeSource {
    fn next_kind(&mut self) -> TetrominoKind;
}

impl<S: ShapeSource + ?Sized> ShapeSource for Box<S> {
    fn next_kind(&mut self) -> TetrominoKind {
        (**self).next_kind()
    }
}

/// Uniform random kinds
#[derive(Debug, Clone)]
pub struct UniformShapes {
    rng: SimpleRng,
    seed: u32,
}

impl UniformShapes {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl ShapeSource for UniformShapes {
    fn next_kind(&mut self) -> TetrominoKind {
        TetrominoKind::ALL[self.rng.next_range(TetrominoKind::ALL.len() as u32) as usize]
    }
}

impl Iterator for UniformShapes {
    type Item = TetrominoKind;

    fn next(&mut self) -> Option<TetrominoKind> {
        Some(self.next_kind())
    }
}

/// Repeats a fixed, non-empty sequence of kinds forever.
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    kinds: Vec<TetrominoKind>,
    cursor: usize,
}

impl ScriptedShapes {
    /// Fails with `InvalidShape` on an empty sequence.
    pub fn new(kinds: Vec<TetrominoKind>) -> Result<Self> {
        if kinds.is_empty() {
            return Err(CoreError::InvalidShape(String::new()));
        }
        Ok(Self { kinds, cursor: 0 })
    }

    /// Build from letters, e.g. `"OITSZJL"`.
    pub fn parse(text: &str) -> Result<Self> {
        Self::new(parse_sequence(text)?)
    }

    /// Sequence consisting of a single kind
    pub fn repeat(kind: TetrominoKind) -> Self {
        Self {
            kinds: vec![kind],
            cursor: 0,
        }
    }
}

impl ShapeSource for ScriptedShapes {
    fn next_kind(&mut self) -> TetrominoKind {
        let kind = self.kinds[self.cursor];
        self.cursor = (self.cursor + 1) % self.kinds.len();
        kind
    }
}

impl Iterator for ScriptedShapes {
    type Item = TetrominoKind;

    fn next(&mut self) -> Option<TetrominoKind> {
        Some(self.next_kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_uniform_covers_all_kinds_roughly_evenly() {
        let mut counts = [0u32; 8];
        for kind in UniformShapes::new(7).take(7000) {
            counts[kind.id() as usize] += 1;
        }
        for id in 1..=7 {
            assert!(
                (700..=1300).contains(&counts[id]),
                "kind {id} drawn {} times",
                counts[id]
            );
        }
    }

    #[test]
    fn test_uniform_same_seed_same_sequence() {
        let a: Vec<_> = UniformShapes::new(99).take(50).collect();
        let b: Vec<_> = UniformShapes::new(99).take(50).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_scripted_cycles() {
        let mut s = ScriptedShapes::parse("OI").unwrap();
        assert_eq!(s.next_kind(), TetrominoKind::O);
        assert_eq!(s.next_kind(), TetrominoKind::I);
        assert_eq!(s.next_kind(), TetrominoKind::O);
    }

    #[test]
    fn test_scripted_rejects_empty() {
        assert!(ScriptedShapes::new(Vec::new()).is_err());
        assert!(ScriptedShapes::parse("  ").is_err());
    }
}
