use std::io;
use std::process::ExitCode;
use wordle_suggester::cli::{CliInterface, Command, parse_cli};
use wordle_suggester::logging::init_logging;
use wordle_suggester::simulate::SimulationReport;
use wordle_suggester::{
    SessionConfig, WordSuggester, game_loop, load_wordbank_from_file, simulate_games,
};

const HISTOGRAM_WIDTH: usize = 40;

fn load_words(path: &str, letters: usize) -> Option<Vec<String>> {
    match load_wordbank_from_file(path, letters) {
        Ok(words) => Some(words),
        Err(e) => {
            eprintln!("Failed to load word list from '{path}': {e}");
            None
        }
    }
}

fn print_report(report: &SimulationReport) {
    println!(
        "{} successes in {} games",
        report.success_count(),
        report.games.len()
    );
    println!("({:.2}% success)", report.success_percent());

    let losing = report.losing_words();
    if !losing.is_empty() {
        println!("Words that were not guessed successfully:");
        for word in losing {
            println!("- {word}");
        }
    }

    if let (Some(mean), Some(min), Some(max)) = (
        report.mean_guesses(),
        report.min_guesses(),
        report.max_guesses_to_win(),
    ) {
        println!("Mean guesses to win: {mean:.3}");
        println!("Min guesses: {min}");
        println!("Max guesses: {max}");
        for line in report.histogram_lines(HISTOGRAM_WIDTH) {
            println!("{line}");
        }
    }
}

fn run_simulation(
    suggester: &mut WordSuggester,
    config: &SessionConfig,
    games: usize,
    starting_word: Option<&str>,
    secret: Option<&str>,
) -> ExitCode {
    match simulate_games(suggester, config, games, starting_word, secret) {
        Ok(report) => {
            for (i, game) in report.games.iter().enumerate() {
                println!("\nGame {}", i + 1);
                for (n, (guess, feedback)) in game.guesses.iter().enumerate() {
                    println!("Guess {} was {guess}, response {feedback}", n + 1);
                }
                match game.solved_in {
                    Some(n) => println!("Success in {n} attempts"),
                    None => println!("Did not find {}", game.secret),
                }
            }
            println!();
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Simulation failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);
    let config = cli.session_config();

    let Some(words) = load_words(&cli.corpus, config.letters) else {
        return ExitCode::FAILURE;
    };
    println!("Using dictionary of {} words", words.len());

    let built = match &cli.answers {
        Some(path) => {
            let Some(answers) = load_words(path, config.letters) else {
                return ExitCode::FAILURE;
            };
            println!("Using {} possible answers", answers.len());
            WordSuggester::with_answers(words, answers)
        }
        None => WordSuggester::new(words),
    };
    let mut suggester = match built {
        Ok(suggester) => suggester,
        Err(e) => {
            eprintln!("Cannot start a session: {e}");
            return ExitCode::FAILURE;
        }
    };
    suggester.set_max_complexity(config.complexity);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let stdin = io::stdin();
            let mut interface = CliInterface::new(stdin.lock(), config.letters);
            game_loop(&mut suggester, &mut interface, &config);
            ExitCode::SUCCESS
        }
        Command::Simulate {
            games,
            starting_word,
            secret,
        } => run_simulation(
            &mut suggester,
            &config,
            games,
            starting_word.as_deref(),
            secret.as_deref(),
        ),
    }
}
