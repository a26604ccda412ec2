use rand::Rng;
use rand::seq::IndexedRandom;

/// Guess samples drawn per goal sample.
pub const GUESS_TO_GOAL_RATIO: usize = 10;

pub const DEFAULT_COMPLEXITY: u32 = 3;

/// Take up to `cap` items, uniformly at random without replacement.
///
/// When the collection already fits under the cap it is returned whole, in order.
pub fn sample<'a, T, R>(items: &'a [T], cap: usize, rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    if items.len() <= cap {
        items.iter().collect()
    } else {
        items.choose_multiple(rng, cap).collect()
    }
}

/// How much of the guess x goal matrix a suggestion request may evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityBudget {
    pub max_goal_samples: usize,
    pub max_guess_samples: usize,
}

impl ComplexityBudget {
    /// Derive sample caps from a complexity level.
    ///
    /// Level `n` allows `1000 * 10^n` feedback comparisons, split so that ten
    /// guesses are sampled for every goal.
    pub fn from_level(level: u32) -> Self {
        let exponent = i32::try_from(level).unwrap_or(i32::MAX);
        let max_comparisons = 1000.0 * 10f64.powi(exponent);
        let goal_samples = (max_comparisons / GUESS_TO_GOAL_RATIO as f64).sqrt() as usize;
        let goal_samples = goal_samples.max(1);

        Self {
            max_goal_samples: goal_samples,
            max_guess_samples: goal_samples.saturating_mul(GUESS_TO_GOAL_RATIO),
        }
    }

    pub fn max_comparisons(&self) -> usize {
        self.max_goal_samples.saturating_mul(self.max_guess_samples)
    }
}

impl Default for ComplexityBudget {
    fn default() -> Self {
        Self::from_level(DEFAULT_COMPLEXITY)
    }
}
