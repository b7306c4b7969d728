use sekil_protocol::{CatalogueEntry, SuffixCatalogue};

use crate::records::{content_lines, key_value};
use crate::ParseError;

pub const SUFFIX_HEADER: &str = "Şəkilçi";
pub const EXAMPLE_HEADER: &str = "Nümunə";

/// Version stamped on catalogues read from text.
pub const TEXT_CATALOGUE_VERSION: u32 = 1;

/// Reads a `suffix<TAB>example` table.
pub fn parse_catalogue(input: &str) -> Result<SuffixCatalogue, ParseError> {
    let mut entries = Vec::new();

    for (index, (line_no, line)) in content_lines(input).enumerate() {
        let (_, (suffix, example)) = key_value(line).map_err(|_| ParseError::Malformed { line: line_no })?;
        let suffix = suffix.trim();
        let example = example.unwrap_or("").trim();

        if index == 0 && suffix == SUFFIX_HEADER {
            continue;
        }
        if suffix.is_empty() {
            return Err(ParseError::EmptySuffix { line: line_no });
        }
        entries.push(CatalogueEntry {
            suffix: suffix.to_string(),
            example: example.to_string(),
        });
    }

    Ok(SuffixCatalogue {
        version: TEXT_CATALOGUE_VERSION,
        entries,
    })
}

/// Writes the table [`parse_catalogue`] reads, header included.
pub fn render_catalogue(catalogue: &SuffixCatalogue) -> String {
    let mut out = format!("{}\t{}\n", SUFFIX_HEADER, EXAMPLE_HEADER);
    for entry in &catalogue.entries {
        out.push_str(&entry.suffix);
        out.push('\t');
        out.push_str(&entry.example);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_header() {
        let input = "Şəkilçi\tNümunə\nlar\tkitab+lar\nlər\t\ndür\n";
        let catalogue = parse_catalogue(input).unwrap();

        let pairs: Vec<(&str, &str)> = catalogue
            .entries
            .iter()
            .map(|e| (e.suffix.as_str(), e.example.as_str()))
            .collect();
        assert_eq!(pairs, vec![("lar", "kitab+lar"), ("lər", ""), ("dür", "")]);
    }

    #[test]
    fn test_empty_suffix_is_reported() {
        let err = parse_catalogue("lar\tkitab+lar\n\tana+m\n").unwrap_err();
        assert_eq!(err, ParseError::EmptySuffix { line: 2 });
    }

    #[test]
    fn test_render_reads_back() {
        let catalogue = parse_catalogue("ya\tsu+ya\nyük\t\n").unwrap();
        let text = render_catalogue(&catalogue);

        assert!(text.starts_with("Şəkilçi\tNümunə\n"));
        assert_eq!(parse_catalogue(&text).unwrap(), catalogue);
    }
}
