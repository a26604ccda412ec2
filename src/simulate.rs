// Batch simulation: play many games against hidden secrets and report how
// many guesses the suggester needed

use crate::engine::WordSuggester;
use crate::error::SolverError;
use crate::feedback::{render_feedback, simulate_feedback};
use crate::game_state::SessionConfig;
use crate::{debug_log, info_log};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub secret: String,
    /// Guess number that found the secret, if it was found
    pub solved_in: Option<usize>,
    /// (guess, rendered feedback) for every guess made
    pub guesses: Vec<(String, String)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationReport {
    pub max_guesses: usize,
    pub games: Vec<GameRecord>,
}

impl SimulationReport {
    pub fn success_count(&self) -> usize {
        self.games.iter().filter(|g| g.solved_in.is_some()).count()
    }

    pub fn success_percent(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        100.0 * self.success_count() as f64 / self.games.len() as f64
    }

    pub fn losing_words(&self) -> Vec<&str> {
        self.games
            .iter()
            .filter(|g| g.solved_in.is_none())
            .map(|g| g.secret.as_str())
            .collect()
    }

    fn winning_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.games.iter().filter_map(|g| g.solved_in)
    }

    pub fn mean_guesses(&self) -> Option<f64> {
        let wins = self.success_count();
        (wins > 0).then(|| self.winning_counts().sum::<usize>() as f64 / wins as f64)
    }

    pub fn min_guesses(&self) -> Option<usize> {
        self.winning_counts().min()
    }

    pub fn max_guesses_to_win(&self) -> Option<usize> {
        self.winning_counts().max()
    }

    /// Wins per guess number, for every guess number up to the limit.
    pub fn distribution(&self) -> BTreeMap<usize, usize> {
        let mut counts: BTreeMap<usize, usize> = (1..=self.max_guesses).map(|g| (g, 0)).collect();
        for solved_in in self.winning_counts() {
            *counts.entry(solved_in).or_insert(0) += 1;
        }
        counts
    }

    /// `"<guess>: ###"` lines, scaled so the most common guess number spans `width`.
    pub fn histogram_lines(&self, width: usize) -> Vec<String> {
        let distribution = self.distribution();
        let tallest = distribution.values().copied().max().unwrap_or(0);

        distribution
            .into_iter()
            .map(|(guess, count)| {
                let bar = if tallest == 0 { 0 } else { count * width / tallest };
                format!("{guess}: {}", "#".repeat(bar))
            })
            .collect()
    }
}

fn check_length(suggester: &WordSuggester, word: &str) -> Result<(), SolverError> {
    let expected = suggester.word_length();
    if word.len() == expected {
        Ok(())
    } else {
        Err(SolverError::LengthMismatch {
            expected,
            found: word.len(),
        })
    }
}

/// Play one game against `secret`, opening with `first_guess`.
pub fn play_game(
    suggester: &mut WordSuggester,
    config: &SessionConfig,
    secret: &str,
    first_guess: &str,
) -> Result<GameRecord, SolverError> {
    check_length(suggester, secret)?;
    check_length(suggester, first_guess)?;
    suggester.reset();
    let mut record = GameRecord {
        secret: secret.to_string(),
        solved_in: None,
        guesses: Vec::new(),
    };

    for round in 1..=config.guesses {
        let guess = if round == 1 {
            first_guess.to_string()
        } else {
            suggester.suggest_word(config.valid_only())?.word
        };

        let feedback = simulate_feedback(secret, &guess);
        record.guesses.push((guess.clone(), render_feedback(&feedback)));

        if guess == secret {
            record.solved_in = Some(round);
            break;
        }

        debug_log!("Guess {round} was {guess}, response {}", render_feedback(&feedback));
        match suggester.add_feedback(&guess, &feedback) {
            Ok(()) => {}
            Err(SolverError::ExhaustedCandidates { .. }) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(record)
}

/// Simulate `games` games. Every game starts from the same state, so the
/// opening guess is computed once (unless one is given) and reused.
pub fn simulate_games(
    suggester: &mut WordSuggester,
    config: &SessionConfig,
    games: usize,
    starting_word: Option<&str>,
    secret: Option<&str>,
) -> Result<SimulationReport, SolverError> {
    for word in [starting_word, secret].into_iter().flatten() {
        check_length(suggester, word)?;
    }
    suggester.reset();
    let first_guess = match starting_word {
        Some(word) => word.to_lowercase(),
        None => suggester.suggest_word(config.valid_only())?.word,
    };
    info_log!("Opening every game with {first_guess}");

    let mut report = SimulationReport {
        max_guesses: config.guesses,
        games: Vec::with_capacity(games),
    };

    for game in 1..=games {
        let secret = match secret {
            Some(word) => word.to_lowercase(),
            None => suggester.random_word().to_string(),
        };
        let record = play_game(suggester, config, &secret, &first_guess)?;
        info_log!(
            "Game {game}: {} {}",
            record.secret,
            record
                .solved_in
                .map_or("not solved".to_string(), |n| format!("solved in {n}"))
        );
        report.games.push(record);
    }

    Ok(report)
}
