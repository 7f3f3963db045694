//! Tie-breaking randomness for the update rules.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the random horizontal biases the rules roll per cell, per tick.
pub trait Dice {
    /// −1 or +1, equally likely.
    fn sign(&mut self) -> i32;

    /// −1, 0 or +1, equally likely.
    fn sign_or_zero(&mut self) -> i32;
}

/// [`Dice`] backed by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngDice<ChaCha8Rng> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Dice for RngDice<R> {
    fn sign(&mut self) -> i32 {
        if self.rng.gen_bool(0.5) {
            1
        } else {
            -1
        }
    }

    fn sign_or_zero(&mut self) -> i32 {
        self.rng.gen_range(-1..=1)
    }
}

/// Always rolls the same values. Lets callers pin down exact outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDice {
    pub sign: i32,
    pub sign_or_zero: i32,
}

impl FixedDice {
    /// Bias every roll toward the given side; `sign_or_zero` goes straight up.
    ///
    /// # Panics
    ///
    /// Panics unless `sign` is −1 or +1.
    #[must_use]
    pub fn leaning(sign: i32) -> Self {
        assert!(sign == 1 || sign == -1, "sign must be -1 or +1");
        Self {
            sign,
            sign_or_zero: 0,
        }
    }
}

impl Dice for FixedDice {
    fn sign(&mut self) -> i32 {
        self.sign
    }

    fn sign_or_zero(&mut self) -> i32 {
        self.sign_or_zero
    }
}
