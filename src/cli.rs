use crate::error::SolverError;
use crate::feedback::{Feedback, parse_feedback};
use crate::game_state::{
    FeedbackAction, GameInterface, SessionConfig, SuggestionReport, UserAction,
};
use crate::sampling::DEFAULT_COMPLEXITY;
use crate::wordbank::DEFAULT_CORPUS;
use clap::{Parser, Subcommand};
use std::io::BufRead;

/// Suggests information-rich guesses for Wordle-style games
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(long, default_value = DEFAULT_CORPUS, global = true)]
    pub corpus: String,

    /// Optional list of possible answers; guesses still come from the corpus
    #[arg(long, global = true)]
    pub answers: Option<String>,

    /// Number of letters in each word
    #[arg(long, default_value_t = 5, global = true)]
    pub letters: usize,

    /// Number of guesses allowed per game
    #[arg(long, default_value_t = 6, global = true)]
    pub guesses: usize,

    /// Sampling level; each step allows ten times more comparisons
    #[arg(long, default_value_t = DEFAULT_COMPLEXITY, global = true)]
    pub complexity: u32,

    /// Only suggest words that could still be the answer
    #[arg(long, global = true)]
    pub hard_mode: bool,

    /// Number of suggestions to show each round
    #[arg(long, default_value_t = 5, global = true)]
    pub suggestions: usize,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively, entering each guess and the game's response
    Play,
    /// Play simulated games against hidden secrets
    Simulate {
        /// Number of games to simulate
        #[arg(long, default_value_t = 10)]
        games: usize,

        /// Word to open every game with instead of the computed best
        #[arg(long)]
        starting_word: Option<String>,

        /// Use this secret in every game instead of a random one
        #[arg(long)]
        secret: Option<String>,
    },
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            letters: self.letters,
            guesses: self.guesses,
            hard_mode: self.hard_mode,
            suggestions: self.suggestions,
            complexity: self.complexity,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum GuessInput {
    Valid(String),
    Invalid,
    Exit,
    NewGame,
}

pub enum FeedbackInput {
    Valid(Vec<Feedback>),
    Invalid,
    Exit,
}

fn is_valid_word(word: &str, letters: usize) -> bool {
    word.len() == letters && word.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_valid_feedback(feedback: &str, letters: usize) -> bool {
    feedback.len() == letters && feedback.chars().all(|c| Feedback::from_char(c).is_some())
}

/// Read one trimmed line; `None` at end of input.
fn read_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

pub fn read_guess<R: BufRead>(reader: &mut R, letters: usize) -> GuessInput {
    println!("\nWhat word did you use? ('exit' to quit, 'next' for a new game)");
    let Some(input) = read_line(reader) else {
        return GuessInput::Exit;
    };
    let input = input.to_lowercase();

    match input.as_str() {
        "exit" => GuessInput::Exit,
        "next" => GuessInput::NewGame,
        _ if is_valid_word(&input, letters) => GuessInput::Valid(input),
        _ => {
            println!("That word doesn't have {letters} letters");
            GuessInput::Invalid
        }
    }
}

pub fn read_feedback<R: BufRead>(reader: &mut R, letters: usize) -> FeedbackInput {
    println!("What was the game's response? [G = Green, Y = Yellow, N = None]");
    let Some(input) = read_line(reader) else {
        return FeedbackInput::Exit;
    };
    if input.eq_ignore_ascii_case("exit") {
        return FeedbackInput::Exit;
    }

    match parse_feedback(&input) {
        Ok(feedback) if is_valid_feedback(&input, letters) => FeedbackInput::Valid(feedback),
        _ => {
            println!("That doesn't look right... please use one of G, Y or N for each of the {letters} letters");
            FeedbackInput::Invalid
        }
    }
}

pub fn display_suggestions(report: &SuggestionReport) {
    println!(
        "Calculating suggested words took {:.2} seconds",
        report.elapsed.as_secs_f64()
    );
    println!("The top suggested words are:");
    for suggestion in &report.suggestions {
        println!("- {} ({:.3})", suggestion.word, suggestion.score);
    }
    println!("{} possible words remain", report.remaining);
}

pub fn display_candidates(candidates: &[String]) {
    println!("Possible candidates ({})", candidates.len());
    for word in candidates.iter().take(10) {
        println!("{word}");
    }
    if candidates.len() > 10 {
        println!("...and {} more", candidates.len() - 10);
    }
}

pub fn display_error(error: &SolverError) {
    match error {
        SolverError::ExhaustedCandidates { .. } => {
            println!("No candidates remain. Check your inputs. ({error})");
        }
        _ => println!("{error}"),
    }
}

/// Console implementation of [`GameInterface`] over any buffered reader.
pub struct CliInterface<R: BufRead> {
    reader: R,
    letters: usize,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R, letters: usize) -> Self {
        Self { reader, letters }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_guess(&mut self) -> Option<UserAction> {
        match read_guess(&mut self.reader, self.letters) {
            GuessInput::Valid(guess) => Some(UserAction::Guess(guess)),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::NewGame => Some(UserAction::NewGame),
            GuessInput::Invalid => None,
        }
    }

    fn read_feedback(&mut self) -> Option<FeedbackAction> {
        match read_feedback(&mut self.reader, self.letters) {
            FeedbackInput::Valid(feedback) => Some(FeedbackAction::Feedback(feedback)),
            FeedbackInput::Exit => Some(FeedbackAction::Exit),
            FeedbackInput::Invalid => None,
        }
    }

    fn display_computing_message(&mut self) {
        println!("Getting suggestions...");
    }

    fn display_suggestions(&mut self, report: &SuggestionReport) {
        display_suggestions(report);
    }

    fn display_candidates(&mut self, candidates: &[String]) {
        display_candidates(candidates);
    }

    fn display_single_candidate(&mut self, word: &str) {
        println!("Solution found: {word}");
    }

    fn display_error(&mut self, error: &SolverError) {
        display_error(error);
    }

    fn display_solution_found(&mut self, solution: &str, guesses: usize) {
        println!("Solved: {solution} in {guesses} guesses");
    }

    fn display_out_of_guesses(&mut self, guesses: usize) {
        println!("Out of guesses after {guesses} attempts");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        println!("New game started. {word_count} words possible.");
    }
}
