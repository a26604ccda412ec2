// Library interface for wordle-suggester
// The binary and the integration tests both go through these modules

pub mod cli;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod game_state;
pub mod logging;
pub mod sampling;
pub mod scorer;
pub mod simulate;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use engine::{Suggestion, WordSuggester};
pub use error::SolverError;
pub use feedback::{Feedback, parse_feedback, render_feedback, simulate_feedback};
pub use filter::{apply_feedback, filter_candidates};
pub use game_state::{GameOutcome, SessionConfig, game_loop};
pub use sampling::{ComplexityBudget, sample};
pub use scorer::SignificanceScorer;
pub use simulate::{SimulationReport, simulate_games};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
