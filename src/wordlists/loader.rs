//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

use rustc_hash::FxHashSet;

/// Load words from a file
///
/// One word per line. Blank lines and lines starting with `#` are skipped,
/// the rest go through [`normalize_words`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/easy.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    Ok(normalize_words(lines))
}

/// Lowercase, drop non-alphabetic entries and remove repeats (first one wins)
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::normalize_words;
///
/// let words = normalize_words(["Cat", "dog", "cat", "d0g"]);
/// assert_eq!(words, ["cat", "dog"]);
/// ```
pub fn normalize_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty() && w.chars().all(char::is_alphabetic))
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn normalize_lowercases_and_dedups() {
        let words = normalize_words(["Crane", "slate", "CRANE", "irate"]);
        assert_eq!(words, ["crane", "slate", "irate"]);
    }

    #[test]
    fn normalize_skips_invalid() {
        let words = normalize_words(["crane", "ice cream", "abc1", "", "  slate  "]);
        assert_eq!(words, ["crane", "slate"]);
    }

    #[test]
    fn normalize_empty() {
        let input: [&str; 0] = [];
        assert!(normalize_words(input).is_empty());
    }

    #[test]
    fn load_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# tier list").unwrap();
        writeln!(file, "Garden").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "castle").unwrap();
        writeln!(file, "garden").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, ["garden", "castle"]);
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}
