use crate::feedback::Feedback;

/// Check one word against every position of a (guess, feedback) pair.
///
/// - `Absent`: the guess letter must not occur anywhere in the word
/// - `Present`: the letter must occur, but not at this position
/// - `Exact`: the letter must be at this position
pub fn matches_feedback(word: &str, guess: &str, feedback: &[Feedback]) -> bool {
    let word = word.as_bytes();
    if word.len() != guess.len() {
        return false;
    }

    guess
        .bytes()
        .zip(feedback)
        .enumerate()
        .all(|(i, (c, f))| match f {
            Feedback::Absent => !word.contains(&c),
            Feedback::Present => word[i] != c && word.contains(&c),
            Feedback::Exact => word[i] == c,
        })
}

/// Lazily narrow `words` to those consistent with `feedback` for `guess`.
///
/// Relative order of the input is preserved and the source is never mutated.
pub fn apply_feedback<'a, I>(
    words: I,
    guess: &'a str,
    feedback: &'a [Feedback],
) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .filter(move |word| matches_feedback(word.as_ref(), guess, feedback))
}

/// Owned variant of [`apply_feedback`] over a slice of candidates.
pub fn filter_candidates(candidates: &[String], guess: &str, feedback: &[Feedback]) -> Vec<String> {
    apply_feedback(candidates, guess, feedback).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{parse_feedback, simulate_feedback};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn dictionary() -> Vec<String> {
        words(&[
            "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast",
            "beast", "eerie", "creep", "speed", "lemon", "melon",
        ])
    }

    #[test]
    fn test_single_survivor() {
        let candidates = words(&["abcde", "abcdf", "zzzzz"]);
        let feedback = parse_feedback("GGGGN").unwrap();
        let filtered = filter_candidates(&candidates, "abcdf", &feedback);
        assert_eq!(filtered, vec!["abcde".to_string()]);
    }

    #[test]
    fn test_absent_removes_every_word_with_letter() {
        let candidates = words(&["crane", "slate", "lemon"]);
        let feedback = parse_feedback("NNNNN").unwrap();
        // every candidate shares a letter with "zebra"
        assert!(filter_candidates(&candidates, "zebra", &feedback).is_empty());
    }

    #[test]
    fn test_present_excludes_same_position() {
        let candidates = words(&["melon", "lemon", "salon"]);
        let feedback = parse_feedback("YNNNN").unwrap();
        // 'm' must appear, but not first
        let filtered = filter_candidates(&candidates, "mxxxx", &feedback);
        assert_eq!(filtered, vec!["lemon".to_string()]);
    }

    #[test]
    fn test_survivors_match_simulated_feedback() {
        let dictionary = dictionary();
        for goal in &dictionary {
            for guess in ["crane", "eerie", "toast"] {
                let feedback = simulate_feedback(goal, guess);
                let filtered = filter_candidates(&dictionary, guess, &feedback);
                for word in &dictionary {
                    let survives = filtered.contains(word);
                    assert_eq!(
                        survives,
                        simulate_feedback(word, guess) == feedback,
                        "goal {goal}, guess {guess}, word {word}"
                    );
                }
                assert!(filtered.contains(goal));
            }
        }
    }

    #[test]
    fn test_filtering_is_idempotent_and_monotonic() {
        let dictionary = dictionary();
        let feedback = simulate_feedback("stare", "crate");
        let once = filter_candidates(&dictionary, "crate", &feedback);
        let twice = filter_candidates(&once, "crate", &feedback);
        assert!(once.len() <= dictionary.len());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_order_preserved_and_input_untouched() {
        let dictionary = dictionary();
        let before = dictionary.clone();
        let feedback = parse_feedback("NNNNN").unwrap();
        let filtered = filter_candidates(&dictionary, "quick", &feedback);

        assert_eq!(dictionary, before);
        let positions: Vec<usize> = filtered
            .iter()
            .map(|w| dictionary.iter().position(|d| d == w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn test_lazy_over_borrowed_words() {
        let feedback = parse_feedback("GGGGG").unwrap();
        let source = ["slate", "crane", "trace"];
        let mut iter = apply_feedback(source.iter().copied(), "crane", &feedback);
        assert_eq!(iter.next(), Some("crane"));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_wrong_length_words_never_match() {
        let feedback = parse_feedback("GGGG").unwrap();
        assert!(!matches_feedback("crane", "cran", &feedback));
    }
}
