use std::collections::HashMap;

use sekil_protocol::{CaseSlot, Person, Slot};

/// Full-form overrides for one irregular root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionEntry {
    pub plural: Option<String>,
    pub case: HashMap<CaseSlot, String>,
    /// Keyed by person; covers both root numbers.
    pub possessive: HashMap<Person, String>,
}

impl ExceptionEntry {
    pub fn with_plural(mut self, form: &str) -> Self {
        self.plural = Some(form.to_string());
        self
    }

    pub fn with_case(mut self, case: CaseSlot, form: &str) -> Self {
        self.case.insert(case, form.to_string());
        self
    }

    pub fn with_possessive(mut self, person: Person, form: &str) -> Self {
        self.possessive.insert(person, form.to_string());
        self
    }
}

/// Lexical overrides consulted before the rule tables.
///
/// Predicative forms have no exception path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionTable {
    entries: HashMap<String, ExceptionEntry>,
}

impl ExceptionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The irregular roots of the standard word list.
    pub fn azerbaijani() -> Self {
        let mut table = Self::new();
        table.insert(
            "su",
            ExceptionEntry::default()
                .with_plural("sular")
                .with_possessive(Person::FirstSingular, "suyum")
                .with_possessive(Person::ThirdSingular, "suyu")
                .with_case(CaseSlot::Dative, "suya")
                .with_case(CaseSlot::Locative, "suda"),
        );
        table.insert("ata", ExceptionEntry::default().with_case(CaseSlot::Dative, "ataya"));
        table.insert("ana", ExceptionEntry::default().with_possessive(Person::FirstSingular, "anam"));
        table
    }

    pub fn insert(&mut self, word: &str, entry: ExceptionEntry) {
        self.entries.insert(word.to_string(), entry);
    }

    /// The overriding form, if `word` has one for `slot`.
    pub fn lookup(&self, word: &str, slot: Slot) -> Option<&str> {
        let entry = self.entries.get(word)?;
        let form = match slot {
            Slot::Plural => entry.plural.as_ref(),
            Slot::Case(case) => entry.case.get(&case),
            Slot::Possessive(p) => entry.possessive.get(&p.person),
            Slot::Predicative(_) => None,
        };
        form.map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
