// Scoring of candidate guesses against a sample of possible goals
// The median surviving count is taken as the size of the next candidate set

use crate::debug_log;
use crate::feedback::{Feedback, is_solved, simulate_feedback};
use crate::filter::apply_feedback;
use std::collections::HashMap;

pub struct SignificanceScorer<'a> {
    possible_goals: Vec<&'a str>,
}

impl<'a> SignificanceScorer<'a> {
    /// The goal sample must not be empty.
    pub fn new(possible_goals: Vec<&'a str>) -> Self {
        debug_assert!(!possible_goals.is_empty(), "scoring needs at least one goal");
        Self { possible_goals }
    }

    pub fn goal_count(&self) -> usize {
        self.possible_goals.len()
    }

    /// Fractional median reduction of the goal sample if `word` is guessed.
    ///
    /// 1.0 means the guess always pins down the goal; 0.0 means it never
    /// narrows anything. The value is not clamped.
    pub fn score(&self, word: &str) -> f64 {
        let starting_count = self.possible_goals.len() as f64;

        // The surviving set depends only on the feedback pattern, so goals
        // that produce the same pattern share one filter pass.
        let mut outcomes: HashMap<Vec<Feedback>, usize> = HashMap::new();
        let mut remaining = Vec::with_capacity(self.possible_goals.len());

        for goal in &self.possible_goals {
            let feedback = simulate_feedback(goal, word);
            let count = *outcomes
                .entry(feedback)
                .or_insert_with_key(|feedback| self.outcome_size(word, feedback));
            remaining.push(count);
        }

        debug_log!(
            "{word}: {} distinct outcomes over {} goals",
            outcomes.len(),
            self.possible_goals.len()
        );

        (starting_count - median(&mut remaining)) / starting_count
    }

    /// Goals left to search after seeing `feedback` for `word`. A solved
    /// pattern leaves nothing to search.
    fn outcome_size(&self, word: &str, feedback: &[Feedback]) -> usize {
        // Counted as 0 so that guessing the only possible goal scores 1.0
        if is_solved(feedback) {
            return 0;
        }
        apply_feedback(self.possible_goals.iter().copied(), word, feedback).count()
    }
}

/// Median of the counts; the mean of the two middle values for even lengths.
fn median(values: &mut [usize]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid] as f64
    } else {
        (values[mid - 1] + values[mid]) as f64 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&mut [5, 1, 3]), 3.0);
        assert_eq!(median(&mut [4, 1, 3, 2]), 2.5);
        assert_eq!(median(&mut [7]), 7.0);
        assert!(median(&mut []).is_nan());
    }

    #[test]
    fn test_median_not_mean() {
        // mean would be 34
        assert_eq!(median(&mut [1, 1, 100]), 1.0);
    }

    #[test]
    fn test_guessing_the_only_goal_scores_one() {
        let scorer = SignificanceScorer::new(vec!["crane"]);
        assert_eq!(scorer.score("crane"), 1.0);
    }

    #[test]
    fn test_uninformative_guess_scores_zero() {
        let scorer = SignificanceScorer::new(vec!["aaaaa", "bbbbb", "ccccc"]);
        // no goal shares a letter with the guess, every outcome is NNNNN
        assert_eq!(scorer.score("zzzzz"), 0.0);
    }

    #[test]
    fn test_shared_outcome_counts_once_per_goal() {
        let goals = vec!["abcde", "abcdf", "abcdg"];
        let scorer = SignificanceScorer::new(goals);
        // abcde is solved (0 left); abcdf and abcdg both answer GGGGN and
        // leave each other standing, so the counts are [0, 2, 2].
        let score = scorer.score("abcde");
        assert!((score - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_distinguishing_guess() {
        let scorer = SignificanceScorer::new(vec!["abcde", "abcdf", "abcdg"]);
        // f and g split the last position three ways: [1, 1, 1]
        let score = scorer.score("abcfg");
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_better_guess_scores_higher() {
        let goals = vec!["crane", "crate", "crave", "craze", "slate", "plate"];
        let scorer = SignificanceScorer::new(goals);
        let splitting = scorer.score("vetch");
        let useless = scorer.score("qujiy");
        assert!(splitting > useless);
        assert!(splitting <= 1.0);
    }

    #[test]
    fn test_scores_are_bounded() {
        let goals = vec!["melon", "lemon", "salon", "talon", "nylon"];
        let scorer = SignificanceScorer::new(goals.clone());
        for guess in goals {
            let score = scorer.score(guess);
            assert!((0.0..=1.0).contains(&score), "{guess} scored {score}");
        }
        assert_eq!(scorer.goal_count(), 5);
    }
}
