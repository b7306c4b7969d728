use rkyv::{Archive, Deserialize, Serialize};
use crate::morphology::{CaseSlot, Person, RootNumber, Slot};
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One generated cell: a word inflected for one slot.
///
/// `form` is always `root` followed by `suffix`, except when a lexical
/// exception replaced the form outright; then `suffix` is whatever the
/// override adds to the word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct GeneratedForm {
    pub word: String,
    pub slot: Slot,
    /// The word itself, or its plural for plural-root possessives.
    pub root: String,
    pub suffix: String,
    pub form: String,
    pub example: Option<String>,
}

impl GeneratedForm {
    /// `root+suffix`, or the bare root when nothing was added.
    pub fn decomposition(&self) -> String {
        if self.suffix.is_empty() {
            self.root.clone()
        } else {
            format!("{}+{}", self.root, self.suffix)
        }
    }
}

impl fmt::Display for GeneratedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decomposition())?;
        if let Some(example) = &self.example {
            write!(f, " ({})", example)?;
        }
        Ok(())
    }
}

pub const PLURAL_HEADERS: [&str; 2] = ["Söz", "Cəm forması"];

pub const CASE_HEADERS: [&str; 7] = [
    "Söz", "Adlıq", "Yiyəlik", "Yönlük", "Təsirlik", "Yerlik", "Çıxışlıq",
];

pub const POSSESSIVE_HEADERS: [&str; 13] = [
    "Söz", "1s_tək", "1s_cəm", "2s_tək", "2s_cəm", "3s_tək", "3s_cəm",
    "1p_tək", "1p_cəm", "2p_tək", "2p_cəm", "3p_tək", "3p_cəm",
];

pub const PREDICATIVE_HEADERS: [&str; 7] = ["Söz", "mən", "sən", "o", "biz", "siz", "onlar"];

pub const ALL_FORMS_SHEET: &str = "Bütün_Sözlər";
pub const ALL_FORMS_HEADER: &str = "Yeni Söz";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct PluralRow {
    pub word: String,
    pub plural: GeneratedForm,
}

impl PluralRow {
    pub fn cells(&self) -> Vec<String> {
        vec![self.word.clone(), format!("{}", self.plural)]
    }
}

/// Forms in [`CaseSlot::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct CaseRow {
    pub word: String,
    pub forms: [GeneratedForm; 6],
}

impl CaseRow {
    pub fn get(&self, case: CaseSlot) -> &GeneratedForm {
        &self.forms[case as usize]
    }

    pub fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(CASE_HEADERS.len());
        cells.push(self.word.clone());
        cells.extend(self.forms.iter().map(|f| format!("{}", f)));
        cells
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct PossessivePair {
    pub person: Person,
    pub singular: GeneratedForm,
    pub plural: GeneratedForm,
}

/// Pairs in [`Person::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct PossessiveRow {
    pub word: String,
    pub forms: [PossessivePair; 6],
}

impl PossessiveRow {
    pub fn get(&self, person: Person, root: RootNumber) -> &GeneratedForm {
        let pair = &self.forms[person as usize];
        match root {
            RootNumber::Singular => &pair.singular,
            RootNumber::Plural => &pair.plural,
        }
    }

    pub fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(POSSESSIVE_HEADERS.len());
        cells.push(self.word.clone());
        for pair in &self.forms {
            cells.push(format!("{}", pair.singular));
            cells.push(format!("{}", pair.plural));
        }
        cells
    }
}

/// Forms in [`Person::ALL`] order, exported under pronoun headers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct PredicativeRow {
    pub word: String,
    pub forms: [GeneratedForm; 6],
}

impl PredicativeRow {
    pub fn get(&self, person: Person) -> &GeneratedForm {
        &self.forms[person as usize]
    }

    pub fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(PREDICATIVE_HEADERS.len());
        cells.push(self.word.clone());
        cells.extend(self.forms.iter().map(|f| format!("{}", f)));
        cells
    }
}

/// Everything a batch run produces, rows in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct BatchReport {
    pub plural: Vec<PluralRow>,
    pub case: Vec<CaseRow>,
    pub possessive: Vec<PossessiveRow>,
    pub predicative: Vec<PredicativeRow>,
    /// Every form in generation order; the source of the suffix catalogue.
    pub all_forms: Vec<GeneratedForm>,
}

impl BatchReport {
    /// Appends a later shard's rows after this one's.
    pub fn append(&mut self, mut other: BatchReport) {
        self.plural.append(&mut other.plural);
        self.case.append(&mut other.case);
        self.possessive.append(&mut other.possessive);
        self.predicative.append(&mut other.predicative);
        self.all_forms.append(&mut other.all_forms);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct CatalogueEntry {
    pub suffix: String,
    /// First observed use, e.g. `kitab+lar`. Empty when never observed.
    pub example: String,
}

/// Suffix → usage example table, sorted by suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct SuffixCatalogue {
    pub version: u32,
    pub entries: Vec<CatalogueEntry>,
}
