//! Tabular input and output around the inflection engine: word lists in,
//! suffix catalogues in and out, result sheets out.

pub mod records;
pub mod wordlist;
pub mod catalogue;
pub mod sheet;

use thiserror::Error;

pub use catalogue::{parse_catalogue, render_catalogue};
pub use sheet::{render_report, Sheet};
pub use wordlist::parse_word_list;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: no word in the first column")]
    EmptyWord { line: usize },
    #[error("line {line}: catalogue entry has no suffix")]
    EmptySuffix { line: usize },
    #[error("line {line}: unreadable record")]
    Malformed { line: usize },
}
