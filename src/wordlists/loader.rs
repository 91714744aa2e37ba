//! Word list loading utilities
//!
//! Loads custom target lists from files with the same filter semantics as
//! the embedded list.

use super::WordList;
use std::fs;
use std::io;
use std::path::Path;

/// Load a word list from a file, one word per line
///
/// Blank lines and entries that are not valid 5-letter words are skipped,
/// duplicates are removed.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;

    let entries: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    Ok(WordList::from_slice(&entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_from_file_filters_invalid_lines() {
        let path = write_temp(
            "wordle_game_loader_test.txt",
            "TANAH\n\nBANGSA\n  salah  \nTANAH\n",
        );

        let list = load_from_file(&path).unwrap();
        let texts: Vec<_> = list.words().iter().map(crate::core::Word::text).collect();
        assert_eq!(texts, ["TANAH", "SALAH"]);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_from_file_missing_path_errors() {
        let path = std::env::temp_dir().join("wordle_game_no_such_list.txt");
        assert!(load_from_file(path).is_err());
    }
}
