use crate::engine::{Suggestion, WordSuggester};
use crate::error::SolverError;
use crate::feedback::{Feedback, is_solved};
use crate::info_log;
use crate::sampling::DEFAULT_COMPLEXITY;
use std::time::{Duration, Instant};

/// Settings for one run of the tool, fixed once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub letters: usize,
    pub guesses: usize,
    pub hard_mode: bool,
    pub suggestions: usize,
    pub complexity: u32,
}

impl SessionConfig {
    /// Hard mode pins suggestions to the candidates; otherwise the engine decides.
    pub fn valid_only(&self) -> Option<bool> {
        self.hard_mode.then_some(true)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            letters: 5,
            guesses: 6,
            hard_mode: false,
            suggestions: 5,
            complexity: DEFAULT_COMPLEXITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Exit,
    NewGame,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackAction {
    Feedback(Vec<Feedback>),
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionReport {
    pub suggestions: Vec<Suggestion>,
    pub remaining: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Solved { word: String, guesses: usize },
    Exhausted,
    OutOfGuesses,
    Quit,
}

/// Front end of an interactive game.
///
/// `read_guess` and `read_feedback` return `None` for input that was rejected;
/// the loop then asks the same question again.
pub trait GameInterface {
    fn read_guess(&mut self) -> Option<UserAction>;
    fn read_feedback(&mut self) -> Option<FeedbackAction>;
    fn display_computing_message(&mut self);
    fn display_suggestions(&mut self, report: &SuggestionReport);
    fn display_candidates(&mut self, candidates: &[String]);
    fn display_single_candidate(&mut self, word: &str);
    fn display_error(&mut self, error: &SolverError);
    fn display_solution_found(&mut self, solution: &str, guesses: usize);
    fn display_out_of_guesses(&mut self, guesses: usize);
    fn display_exit_message(&mut self);
    fn display_new_game_message(&mut self, word_count: usize);
}

fn compute_suggestions(
    suggester: &mut WordSuggester,
    config: &SessionConfig,
) -> Result<SuggestionReport, SolverError> {
    let start = Instant::now();
    let suggestions = suggester.suggest_words(config.suggestions, config.valid_only())?;
    Ok(SuggestionReport {
        suggestions,
        remaining: suggester.remaining_count(),
        elapsed: start.elapsed(),
    })
}

/// Run games until one ends or the player quits.
///
/// `next` starts over with the same dictionary.
pub fn game_loop<I: GameInterface + ?Sized>(
    suggester: &mut WordSuggester,
    interface: &mut I,
    config: &SessionConfig,
) -> GameOutcome {
    let mut guesses_made = 0;
    let mut needs_suggestions = true;
    // Guess still waiting for valid feedback
    let mut pending_guess: Option<String> = None;

    loop {
        if needs_suggestions {
            if guesses_made >= config.guesses {
                interface.display_out_of_guesses(guesses_made);
                return GameOutcome::OutOfGuesses;
            }
            interface.display_computing_message();
            match compute_suggestions(suggester, config) {
                Ok(report) => interface.display_suggestions(&report),
                Err(e) => {
                    interface.display_error(&e);
                    return GameOutcome::Exhausted;
                }
            }
            needs_suggestions = false;
        }

        let guess = match pending_guess.take() {
            Some(guess) => guess,
            None => match interface.read_guess() {
                Some(UserAction::Guess(guess)) => guess,
                Some(UserAction::Exit) => {
                    interface.display_exit_message();
                    return GameOutcome::Quit;
                }
                Some(UserAction::NewGame) => {
                    suggester.reset();
                    guesses_made = 0;
                    needs_suggestions = true;
                    interface.display_new_game_message(suggester.remaining_count());
                    continue;
                }
                None => continue,
            },
        };

        let feedback = match interface.read_feedback() {
            Some(FeedbackAction::Feedback(feedback)) => feedback,
            Some(FeedbackAction::Exit) => {
                interface.display_exit_message();
                return GameOutcome::Quit;
            }
            None => {
                pending_guess = Some(guess);
                continue;
            }
        };

        if is_solved(&feedback) && feedback.len() == guess.len() {
            guesses_made += 1;
            interface.display_solution_found(&guess, guesses_made);
            return GameOutcome::Solved {
                word: guess,
                guesses: guesses_made,
            };
        }

        match suggester.add_feedback(&guess, &feedback) {
            Ok(()) => {
                guesses_made += 1;
                info_log!("Guess {guesses_made}: {guess}");
                match suggester.valid_words() {
                    [only] => interface.display_single_candidate(only),
                    candidates => interface.display_candidates(candidates),
                }
                needs_suggestions = true;
            }
            Err(e @ SolverError::ExhaustedCandidates { .. }) => {
                interface.display_error(&e);
                return GameOutcome::Exhausted;
            }
            Err(e) => interface.display_error(&e),
        }
    }
}
