use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum Category {
    Plural = 0,
    Case = 1,
    Possessive = 2,
    Predicative = 3,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Plural,
        Category::Case,
        Category::Possessive,
        Category::Predicative,
    ];

    /// Name of the result sheet this category is exported under.
    pub const fn sheet_name(self) -> &'static str {
        match self {
            Category::Plural => "Cəm_Formaları",
            Category::Case => "Hal_Şəkilçiləri",
            Category::Possessive => "Mənsubiyyət_Şəkilçiləri",
            Category::Predicative => "Xəbərlik_Şəkilçiləri",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Category::Plural => "plural",
            Category::Case => "case",
            Category::Possessive => "possessive",
            Category::Predicative => "predicative",
        }
    }
}

impl FromStr for Category {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| LabelError::Category(s.to_string()))
    }
}

/// The six grammatical cases, under their native labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum CaseSlot {
    /// Adlıq. Never suffixed.
    Nominative = 0,
    /// Yiyəlik
    Genitive = 1,
    /// Yönlük
    Dative = 2,
    /// Təsirlik
    Accusative = 3,
    /// Yerlik
    Locative = 4,
    /// Çıxışlıq
    Ablative = 5,
}

impl CaseSlot {
    pub const ALL: [CaseSlot; 6] = [
        CaseSlot::Nominative,
        CaseSlot::Genitive,
        CaseSlot::Dative,
        CaseSlot::Accusative,
        CaseSlot::Locative,
        CaseSlot::Ablative,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CaseSlot::Nominative => "Adlıq",
            CaseSlot::Genitive => "Yiyəlik",
            CaseSlot::Dative => "Yönlük",
            CaseSlot::Accusative => "Təsirlik",
            CaseSlot::Locative => "Yerlik",
            CaseSlot::Ablative => "Çıxışlıq",
        }
    }
}

impl FromStr for CaseSlot {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseSlot::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| LabelError::Case(s.to_string()))
    }
}

/// Grammatical person and number of the possessor / subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum Person {
    FirstSingular = 0,
    SecondSingular = 1,
    ThirdSingular = 2,
    FirstPlural = 3,
    SecondPlural = 4,
    ThirdPlural = 5,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    /// Short code, e.g. `1s`, `3p`.
    pub const fn code(self) -> &'static str {
        match self {
            Person::FirstSingular => "1s",
            Person::SecondSingular => "2s",
            Person::ThirdSingular => "3s",
            Person::FirstPlural => "1p",
            Person::SecondPlural => "2p",
            Person::ThirdPlural => "3p",
        }
    }

    pub const fn pronoun(self) -> &'static str {
        match self {
            Person::FirstSingular => "mən",
            Person::SecondSingular => "sən",
            Person::ThirdSingular => "o",
            Person::FirstPlural => "biz",
            Person::SecondPlural => "siz",
            Person::ThirdPlural => "onlar",
        }
    }
}

impl FromStr for Person {
    type Err = LabelError;

    /// Accepts either the short code (`2p`) or the pronoun (`siz`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Person::ALL
            .into_iter()
            .find(|p| p.code() == s || p.pronoun() == s)
            .ok_or_else(|| LabelError::Person(s.to_string()))
    }
}

/// Which root a possessive suffix is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum RootNumber {
    /// tək
    Singular = 0,
    /// cəm: the pluralized word
    Plural = 1,
}

impl RootNumber {
    pub const fn label(self) -> &'static str {
        match self {
            RootNumber::Singular => "tək",
            RootNumber::Plural => "cəm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct PossessiveSlot {
    pub person: Person,
    pub root: RootNumber,
}

impl PossessiveSlot {
    pub const fn new(person: Person, root: RootNumber) -> Self {
        Self { person, root }
    }
}

/// A single cell of a paradigm: the category plus its discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Slot {
    Plural,
    Case(CaseSlot),
    Possessive(PossessiveSlot),
    Predicative(Person),
}

impl Slot {
    pub const fn category(self) -> Category {
        match self {
            Slot::Plural => Category::Plural,
            Slot::Case(_) => Category::Case,
            Slot::Possessive(_) => Category::Possessive,
            Slot::Predicative(_) => Category::Predicative,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Plural => f.write_str("Cəm forması"),
            Slot::Case(case) => f.write_str(case.label()),
            Slot::Possessive(slot) => write!(f, "{}_{}", slot.person.code(), slot.root.label()),
            Slot::Predicative(person) => f.write_str(person.pronoun()),
        }
    }
}

bitflags! {
    /// Selects which categories a batch run generates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct CategorySet: u8 {
        const PLURAL = 1;
        const CASE = 2;
        const POSSESSIVE = 4;
        const PREDICATIVE = 8;
    }
}

impl CategorySet {
    pub const fn has(self, category: Category) -> bool {
        self.contains(CategorySet::from_category(category))
    }

    pub const fn from_category(category: Category) -> Self {
        match category {
            Category::Plural => CategorySet::PLURAL,
            Category::Case => CategorySet::CASE,
            Category::Possessive => CategorySet::POSSESSIVE,
            Category::Predicative => CategorySet::PREDICATIVE,
        }
    }
}

impl From<Category> for CategorySet {
    fn from(category: Category) -> Self {
        CategorySet::from_category(category)
    }
}

impl FromStr for CategorySet {
    type Err = LabelError;

    /// Comma-separated category codes, e.g. `plural,case`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .try_fold(CategorySet::empty(), |set, part| {
                Ok(set | CategorySet::from(part.parse::<Category>()?))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    Category(String),
    Case(String),
    Person(String),
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelError::Category(s) => write!(f, "unknown category: '{}'", s),
            LabelError::Case(s) => write!(f, "unknown case label: '{}'", s),
            LabelError::Person(s) => write!(f, "unknown person: '{}'", s),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LabelError {}
