use sekil_protocol::{
    CaseSlot, FinalType, GeneratedForm, Person, PossessiveSlot, RootNumber, Slot,
};

use crate::exceptions::ExceptionTable;
use crate::rules::SuffixRules;
use crate::vowel::{final_type, last_vowel};

/// Table-driven inflector: exceptions first, then the rule tables.
///
/// No phonological rewriting happens beyond concatenation. Generation never
/// fails; unresolvable inputs come back unchanged with an empty suffix.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    rules: &'a SuffixRules,
    exceptions: &'a ExceptionTable,
}

impl<'a> Generator<'a> {
    pub fn new(rules: &'a SuffixRules, exceptions: &'a ExceptionTable) -> Self {
        Self { rules, exceptions }
    }

    pub fn plural(&self, word: &str) -> GeneratedForm {
        self.generate(word, Slot::Plural)
    }

    pub fn case(&self, word: &str, case: CaseSlot) -> GeneratedForm {
        self.generate(word, Slot::Case(case))
    }

    pub fn possessive(&self, word: &str, person: Person, root: RootNumber) -> GeneratedForm {
        self.generate(word, Slot::Possessive(PossessiveSlot::new(person, root)))
    }

    pub fn predicative(&self, word: &str, person: Person) -> GeneratedForm {
        self.generate(word, Slot::Predicative(person))
    }

    pub fn generate(&self, word: &str, slot: Slot) -> GeneratedForm {
        // 1. Nothing to harmonize with: identity for every slot
        let Some(vowel) = last_vowel(word) else {
            return attach(word, slot, word, "");
        };

        // 2. Lexical overrides
        if let Some(form) = self.exceptions.lookup(word, slot) {
            let root = match slot {
                Slot::Possessive(PossessiveSlot { root: RootNumber::Plural, .. }) => self.plural(word).form,
                _ => word.to_string(),
            };
            return replaced(word, slot, root, form);
        }

        // 3. Rule tables
        match slot {
            Slot::Plural => attach(word, slot, word, self.rules.plural.suffix(vowel)),
            Slot::Case(CaseSlot::Nominative) => attach(word, slot, word, ""),
            Slot::Case(case) => {
                let suffix = self.rules.case.lookup(final_type(word), vowel, case);
                attach(word, slot, word, suffix)
            }
            Slot::Possessive(PossessiveSlot { person, root: RootNumber::Singular }) => {
                let suffix = self.rules.possessive.lookup(final_type(word), vowel, person);
                attach(word, slot, word, suffix)
            }
            Slot::Possessive(PossessiveSlot { person, root: RootNumber::Plural }) => {
                // lar/lər always ends in a consonant; harmony still follows the root
                let plural = self.plural(word).form;
                let suffix = self.rules.possessive.lookup(FinalType::ConsonantFinal, vowel, person);
                attach(word, slot, &plural, suffix)
            }
            Slot::Predicative(person) => {
                let suffix = self.rules.predicative.lookup(final_type(word), vowel, person);
                attach(word, slot, word, suffix)
            }
        }
    }
}

fn attach(word: &str, slot: Slot, root: &str, suffix: &str) -> GeneratedForm {
    GeneratedForm {
        word: word.to_string(),
        slot,
        root: root.to_string(),
        suffix: suffix.to_string(),
        form: format!("{}{}", root, suffix),
        example: None,
    }
}

/// An override replaces the whole form. What it adds to `root` is the
/// form minus the root's first occurrence, which is only a true morpheme
/// boundary when the override starts with the root.
fn replaced(word: &str, slot: Slot, root: String, form: &str) -> GeneratedForm {
    let suffix = match form.strip_prefix(root.as_str()) {
        Some(rest) => rest.to_string(),
        None => form.replacen(root.as_str(), "", 1),
    };
    GeneratedForm {
        word: word.to_string(),
        slot,
        root,
        suffix,
        form: form.to_string(),
        example: None,
    }
}
