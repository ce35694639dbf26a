use rand::Rng;

use crate::config::MEDIUM_RANDOM_RATE;
use crate::error::{Error, Result};

/// Uniform choice over `moves`; `None` when there is nothing to choose.
pub fn pick_uniform<M: Copy, G: Rng + ?Sized>(moves: &[M], rng: &mut G) -> Option<M> {
    if moves.is_empty() { return None; }
    let idx = rng.gen_range(0..moves.len());
    Some(moves[idx])
}

/// Medium-tier weakening: before each root move is scored, the whole
/// selection is abandoned with probability `rate` and a uniformly random
/// legal move is played instead. Partial scores gathered so far are dropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomMovePolicy {
    rate: f64,
}

impl Default for RandomMovePolicy {
    fn default() -> Self { Self { rate: MEDIUM_RANDOM_RATE } }
}

impl RandomMovePolicy {
    pub fn new(rate: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(Error::Config(format!("random move rate must be within [0, 1], got {rate}")));
        }
        Ok(Self { rate })
    }

    /// Never short-circuits; medium then plays like hard at its own depth.
    pub fn never() -> Self { Self { rate: 0.0 } }

    pub fn rate(&self) -> f64 { self.rate }

    pub fn should_play_random<G: Rng + ?Sized>(&self, rng: &mut G) -> bool {
        rng.gen::<f64>() < self.rate
    }
}
