use std::collections::BTreeMap;

use sekil_protocol::{CatalogueEntry, GeneratedForm, SuffixCatalogue};

use crate::rules::SuffixRules;

pub const CATALOGUE_VERSION: u32 = 1;

/// Builds the suffix catalogue for a run.
///
/// Each suffix observed in `forms` keeps the decomposition of the first form
/// that produced it as its example. Suffixes the rules can emit but the run
/// never produced are listed with an empty example.
pub fn extract(forms: &[GeneratedForm], rules: &SuffixRules) -> SuffixCatalogue {
    let mut examples: BTreeMap<String, String> = BTreeMap::new();

    for form in forms.iter().filter(|f| !f.suffix.is_empty()) {
        examples
            .entry(form.suffix.clone())
            .or_insert_with(|| form.decomposition());
    }

    for suffix in rules.suffixes() {
        examples.entry(suffix.to_string()).or_default();
    }

    SuffixCatalogue {
        version: CATALOGUE_VERSION,
        entries: examples
            .into_iter()
            .map(|(suffix, example)| CatalogueEntry { suffix, example })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exceptions::ExceptionTable;
    use crate::generator::Generator;
    use sekil_protocol::CaseSlot;

    #[test]
    fn test_first_occurrence_wins() {
        let rules = SuffixRules::azerbaijani();
        let exceptions = ExceptionTable::azerbaijani();
        let g = Generator::new(&rules, &exceptions);
        let forms = vec![
            g.plural("kitab"),
            g.plural("qapı"),
            g.case("kitab", CaseSlot::Nominative),
            g.case("su", CaseSlot::Dative),
        ];

        let catalogue = extract(&forms, &rules);
        let lookup = |s: &str| {
            catalogue
                .entries
                .iter()
                .find(|e| e.suffix == s)
                .map(|e| e.example.as_str())
        };

        assert_eq!(lookup("lar"), Some("kitab+lar"));
        assert_eq!(lookup("ya"), Some("su+ya"));
        assert_eq!(lookup("dürlər"), Some(""));
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_entries_sorted_and_unique() {
        let rules = SuffixRules::azerbaijani();
        let catalogue = extract(&[], &rules);

        assert_eq!(catalogue.version, CATALOGUE_VERSION);
        assert_eq!(catalogue.entries.len(), rules.suffixes().len());
        assert!(catalogue.entries.windows(2).all(|w| w[0].suffix < w[1].suffix));
    }
}
