use crate::records::{content_lines, first_cell};
use crate::ParseError;

/// Header of the word column in exported sheets.
pub const WORD_HEADER: &str = "Söz";

/// Reads root words from one-record-per-line text.
///
/// The word is the first tab- or comma-separated cell, trimmed. A leading
/// `Söz` header row is skipped; duplicates are kept, in order.
pub fn parse_word_list(input: &str) -> Result<Vec<String>, ParseError> {
    let mut words = Vec::new();

    for (index, (line_no, line)) in content_lines(input).enumerate() {
        let (_, cell) = first_cell(line).map_err(|_| ParseError::Malformed { line: line_no })?;
        let word = cell.trim();

        if index == 0 && word == WORD_HEADER {
            continue;
        }
        if word.is_empty() {
            return Err(ParseError::EmptyWord { line: line_no });
        }
        words.push(word.to_string());
    }

    Ok(words)
}
