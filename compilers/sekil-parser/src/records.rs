use nom::{
    bytes::complete::take_till,
    character::complete::char,
    combinator::{opt, rest},
    sequence::{pair, preceded},
    IResult,
};

/// Predicate for cell separators in loosely tabular text.
fn is_separator(c: char) -> bool {
    c == '\t' || c == ','
}

/// First cell of a line, up to the first tab or comma.
pub fn first_cell(line: &str) -> IResult<&str, &str> {
    take_till(is_separator)(line)
}

/// `key<TAB>value`; the value (and the tab) may be absent.
pub fn key_value(line: &str) -> IResult<&str, (&str, Option<&str>)> {
    pair(take_till(|c| c == '\t'), opt(preceded(char('\t'), rest)))(line)
}

/// Lines with their 1-based numbers, BOM and blank lines removed.
pub fn content_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .strip_prefix('\u{feff}')
        .unwrap_or(input)
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}
