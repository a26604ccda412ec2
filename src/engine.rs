// Stateful suggestion session
// Candidates only shrink until reset() starts a new game

use crate::error::SolverError;
use crate::feedback::{Feedback, render_feedback};
use crate::filter::apply_feedback;
use crate::sampling::{ComplexityBudget, sample};
use crate::scorer::SignificanceScorer;
use crate::{debug_log, info_log};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// At or below this many candidates, suggestions come from the candidates
/// themselves: two more guesses are then enough, and the next one may win.
pub const VALID_ONLY_THRESHOLD: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: String,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct WordSuggester {
    /// Words still consistent with every feedback seen this game
    valid_words: Vec<String>,
    /// Every guessable word
    all_words: Vec<String>,
    /// Candidate set a fresh game starts from
    answer_words: Vec<String>,
    word_length: usize,
    budget: ComplexityBudget,
    /// Set when feedback eliminated every candidate; cleared by `reset`
    exhausted: Option<SolverError>,
    rng: StdRng,
}

impl WordSuggester {
    /// Start a session where any dictionary word may be the secret.
    pub fn new(words: Vec<String>) -> Result<Self, SolverError> {
        Self::build(words.clone(), words, StdRng::from_os_rng())
    }

    /// Start a session whose secret is drawn from `answers`, while guesses may
    /// use the whole of `words`.
    pub fn with_answers(words: Vec<String>, answers: Vec<String>) -> Result<Self, SolverError> {
        Self::build(words, answers, StdRng::from_os_rng())
    }

    /// Like [`WordSuggester::new`] but with reproducible sampling.
    pub fn with_seed(words: Vec<String>, seed: u64) -> Result<Self, SolverError> {
        Self::build(words.clone(), words, StdRng::seed_from_u64(seed))
    }

    fn build(
        all_words: Vec<String>,
        answer_words: Vec<String>,
        rng: StdRng,
    ) -> Result<Self, SolverError> {
        if all_words.is_empty() || answer_words.is_empty() {
            return Err(SolverError::EmptyDictionary);
        }
        let word_length = all_words[0].len();
        if let Some(word) = all_words
            .iter()
            .chain(&answer_words)
            .find(|w| w.len() != word_length)
        {
            return Err(SolverError::InconsistentWordLength {
                word: word.clone(),
                expected: word_length,
            });
        }

        info_log!(
            "New session: {} guessable words, {} possible answers",
            all_words.len(),
            answer_words.len()
        );

        Ok(Self {
            valid_words: answer_words.clone(),
            all_words,
            answer_words,
            word_length,
            budget: ComplexityBudget::default(),
            exhausted: None,
            rng,
        })
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn remaining_count(&self) -> usize {
        self.valid_words.len()
    }

    pub fn valid_words(&self) -> &[String] {
        &self.valid_words
    }

    pub fn all_words(&self) -> &[String] {
        &self.all_words
    }

    pub fn budget(&self) -> ComplexityBudget {
        self.budget
    }

    pub fn set_max_complexity(&mut self, level: u32) {
        self.budget = ComplexityBudget::from_level(level);
        debug_log!(
            "Complexity {level}: {} goal samples, {} guess samples",
            self.budget.max_goal_samples,
            self.budget.max_guess_samples
        );
    }

    /// Narrow the candidate set with the feedback received for `guess`.
    ///
    /// Fails with [`SolverError::ExhaustedCandidates`] when nothing survives;
    /// the session is unusable until [`WordSuggester::reset`].
    pub fn add_feedback(&mut self, guess: &str, feedback: &[Feedback]) -> Result<(), SolverError> {
        self.check_length(guess.len())?;
        self.check_length(feedback.len())?;

        let guess = guess.to_lowercase();
        let before = self.valid_words.len();
        let remaining: Vec<String> =
            apply_feedback(self.valid_words.drain(..), &guess, feedback).collect();
        self.valid_words = remaining;

        info_log!(
            "Applied {} for {guess}: removed {} words, {} remaining",
            render_feedback(feedback),
            before - self.valid_words.len(),
            self.valid_words.len()
        );

        if self.valid_words.is_empty() {
            log::warn!(
                "No candidates consistent with {} for {guess}",
                render_feedback(feedback)
            );
            let err = SolverError::ExhaustedCandidates {
                guess,
                feedback: render_feedback(feedback),
            };
            self.exhausted = Some(err.clone());
            return Err(err);
        }
        Ok(())
    }

    /// Rank up to `count` guesses by how much they are expected to shrink the
    /// candidate set, best first.
    ///
    /// Guesses come from the candidates when `valid_only` is `Some(true)` or
    /// when few candidates remain; otherwise from the full guess pool.
    pub fn suggest_words(
        &mut self,
        count: usize,
        valid_only: Option<bool>,
    ) -> Result<Vec<Suggestion>, SolverError> {
        if let Some(err) = &self.exhausted {
            return Err(err.clone());
        }

        let valid_only =
            valid_only.unwrap_or(false) || self.valid_words.len() <= VALID_ONLY_THRESHOLD;

        let goals: Vec<&str> = sample(&self.valid_words, self.budget.max_goal_samples, &mut self.rng)
            .into_iter()
            .map(String::as_str)
            .collect();
        let pool = if valid_only {
            &self.valid_words
        } else {
            &self.all_words
        };
        let guesses = sample(pool, self.budget.max_guess_samples, &mut self.rng);

        debug_log!(
            "Scoring {} guesses against {} goals (valid_only = {valid_only})",
            guesses.len(),
            goals.len()
        );

        let scorer = SignificanceScorer::new(goals);
        let mut ranked: Vec<Suggestion> = guesses
            .into_iter()
            .map(|word| Suggestion {
                score: scorer.score(word),
                word: word.clone(),
            })
            .collect();

        // Stable, so equal scores keep their sample order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(count);
        Ok(ranked)
    }

    /// The single best guess.
    pub fn suggest_word(&mut self, valid_only: Option<bool>) -> Result<Suggestion, SolverError> {
        self.suggest_words(1, valid_only)?
            .into_iter()
            .next()
            .ok_or(SolverError::EmptyDictionary)
    }

    /// Uniform pick of a hidden secret. Drawn from the full guess pool, or
    /// from the answers list when the session was given one.
    pub fn random_word(&mut self) -> &str {
        let index = self.rng.random_range(0..self.answer_words.len());
        &self.answer_words[index]
    }

    /// Start a new game over the same dictionary.
    pub fn reset(&mut self) {
        self.valid_words = self.answer_words.clone();
        self.exhausted = None;
        debug_log!("Reset to {} candidates", self.valid_words.len());
    }

    fn check_length(&self, found: usize) -> Result<(), SolverError> {
        if found == self.word_length {
            Ok(())
        } else {
            Err(SolverError::LengthMismatch {
                expected: self.word_length,
                found,
            })
        }
    }
}
