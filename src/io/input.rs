//! Record input: the corpus as lines of text.

use crate::core::SeqdistResult;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read every line of the corpus at `path`. `-` means stdin.
pub fn read_lines(path: &Path) -> SeqdistResult<Vec<String>> {
    if path.as_os_str() == "-" {
        let stdin = io::stdin();
        return read_lines_from(stdin.lock());
    }
    let file = File::open(path)?;
    read_lines_from(BufReader::new(file))
}

/// Collect lines from any buffered reader.
pub fn read_lines_from(reader: impl BufRead) -> SeqdistResult<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_lines_from_reader() {
        let lines = read_lines_from(Cursor::new("ATGTAA\nCCC\n")).unwrap();
        assert_eq!(lines, vec!["ATGTAA".to_string(), "CCC".to_string()]);
    }

    #[test]
    fn test_read_lines_empty_input() {
        let lines = read_lines_from(Cursor::new("")).unwrap();
        assert!(lines.is_empty());
    }
}
