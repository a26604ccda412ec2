use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const DEFAULT_CORPUS: &str = "/usr/share/dict/words";

fn normalize(line: &str, letters: usize) -> Option<String> {
    let word = line.trim();
    if word.len() == letters && word.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(word.to_ascii_lowercase())
    } else {
        None
    }
}

/// Keep the `letters`-long alphabetic words, lowercased, first occurrence only.
fn collect_words<I: IntoIterator<Item = String>>(lines: I, letters: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    lines
        .into_iter()
        .filter_map(|line| normalize(&line, letters))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

pub fn load_wordbank_from_str(data: &str, letters: usize) -> Vec<String> {
    collect_words(data.lines().map(str::to_string), letters)
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P, letters: usize) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    // System word lists are not always valid UTF-8; such lines are dropped
    // by the alphabetic check rather than failing the whole load.
    let mut lines = Vec::new();
    for line in reader.split(b'\n') {
        lines.push(String::from_utf8_lossy(&line?).into_owned());
    }
    Ok(collect_words(lines, letters))
}
