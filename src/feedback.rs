// Feedback symbols and the feedback simulator
// Letters are marked independently: a misplaced letter is Present whenever it
// occurs anywhere in the goal, however often it repeats in the guess.
// filter.rs matches against exactly this rule.

use crate::error::SolverError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position (green)
    Exact,
    /// Letter occurs elsewhere in the goal (yellow)
    Present,
    /// Letter does not occur in the goal
    Absent,
}

impl Feedback {
    /// Parse a single symbol. `N` and `X` both mean absent.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Feedback::Exact),
            'Y' => Some(Feedback::Present),
            'N' | 'X' => Some(Feedback::Absent),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Feedback::Exact => 'G',
            Feedback::Present => 'Y',
            Feedback::Absent => 'N',
        }
    }
}

/// Parse a feedback string such as `"GYNNG"`.
pub fn parse_feedback(input: &str) -> Result<Vec<Feedback>, SolverError> {
    input
        .chars()
        .map(|c| Feedback::from_char(c).ok_or(SolverError::InvalidFeedbackSymbol(c)))
        .collect()
}

pub fn render_feedback(feedback: &[Feedback]) -> String {
    feedback.iter().map(|f| f.to_char()).collect()
}

/// True when every position is `Exact`, i.e. the guess was the goal.
pub fn is_solved(feedback: &[Feedback]) -> bool {
    !feedback.is_empty() && feedback.iter().all(|f| *f == Feedback::Exact)
}

/// Feedback the game would give for `guess` if the secret were `goal`.
///
/// Both words must have the same length.
pub fn simulate_feedback(goal: &str, guess: &str) -> Vec<Feedback> {
    debug_assert_eq!(goal.len(), guess.len());
    let goal = goal.as_bytes();

    guess
        .bytes()
        .enumerate()
        .map(|(i, c)| {
            if goal.get(i) == Some(&c) {
                Feedback::Exact
            } else if goal.contains(&c) {
                Feedback::Present
            } else {
                Feedback::Absent
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fb(s: &str) -> Vec<Feedback> {
        parse_feedback(s).unwrap()
    }

    #[test]
    fn test_last_letter_absent() {
        assert_eq!(simulate_feedback("abcde", "abcdf"), fb("GGGGN"));
    }

    #[test]
    fn test_identical_words_are_solved() {
        let feedback = simulate_feedback("crane", "crane");
        assert!(is_solved(&feedback));
        assert_eq!(render_feedback(&feedback), "GGGGG");
    }

    #[test]
    fn test_present_letters() {
        // c in place, r/a/n/e elsewhere or missing
        assert_eq!(simulate_feedback("charm", "crane"), fb("GYGNN"));
    }

    #[test]
    fn test_repeated_guess_letters_marked_independently() {
        // Both leading e's are Present even though "crane" has a single e,
        // and that e is already matched exactly at the end.
        assert_eq!(simulate_feedback("crane", "eerie"), fb("YYYNG"));
        assert_eq!(simulate_feedback("creep", "speed"), fb("NYGGN"));
    }

    #[test]
    fn test_exact_iff_same_letter_at_position() {
        let goal = "lemon";
        for guess in ["melon", "lemur", "salon", "nomel"] {
            let feedback = simulate_feedback(goal, guess);
            assert_eq!(feedback.len(), goal.len());
            for (i, f) in feedback.iter().enumerate() {
                let same = goal.as_bytes()[i] == guess.as_bytes()[i];
                assert_eq!(*f == Feedback::Exact, same, "{guess} position {i}");
            }
        }
    }

    #[test]
    fn test_parse_feedback_accepts_aliases_and_case() {
        assert_eq!(fb("gyx"), vec![Feedback::Exact, Feedback::Present, Feedback::Absent]);
        assert_eq!(fb("NnXx"), vec![Feedback::Absent; 4]);
    }

    #[test]
    fn test_parse_feedback_rejects_unknown_symbol() {
        assert_eq!(parse_feedback("GGB"), Err(SolverError::InvalidFeedbackSymbol('B')));
    }

    #[test]
    fn test_is_solved_requires_all_exact() {
        assert!(!is_solved(&fb("GGGGY")));
        assert!(!is_solved(&[]));
    }
}
