#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// All nine vowels of the Azerbaijani Latin alphabet, in lookup order.
pub const VOWELS: &str = "aıouəeiöü";

/// A vowel of the alphabet.
///
/// Only eight of the nine take part in the suffix tables (see [`HarmonyVowel`]).
/// `e` is a real vowel: it makes a word vowel-final and it counts as a front
/// vowel for pluralization, but no case, possessive or predicative table has
/// a row for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Vowel {
    A,
    /// `ı` (dotless i)
    DotlessI,
    O,
    U,
    /// `ə`
    Schwa,
    E,
    I,
    /// `ö`
    OUmlaut,
    /// `ü`
    UUmlaut,
}

impl Vowel {
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Vowel::A),
            'ı' => Some(Vowel::DotlessI),
            'o' => Some(Vowel::O),
            'u' => Some(Vowel::U),
            'ə' => Some(Vowel::Schwa),
            'e' => Some(Vowel::E),
            'i' => Some(Vowel::I),
            'ö' => Some(Vowel::OUmlaut),
            'ü' => Some(Vowel::UUmlaut),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Vowel::A => 'a',
            Vowel::DotlessI => 'ı',
            Vowel::O => 'o',
            Vowel::U => 'u',
            Vowel::Schwa => 'ə',
            Vowel::E => 'e',
            Vowel::I => 'i',
            Vowel::OUmlaut => 'ö',
            Vowel::UUmlaut => 'ü',
        }
    }

    /// Back class `{a, ı, o, u}`. Everything else, `e` included, is front.
    pub const fn is_back(self) -> bool {
        matches!(self, Vowel::A | Vowel::DotlessI | Vowel::O | Vowel::U)
    }

    /// The suffix-table key for this vowel, `None` for `e`.
    pub const fn harmony(self) -> Option<HarmonyVowel> {
        match self {
            Vowel::A => Some(HarmonyVowel::A),
            Vowel::DotlessI => Some(HarmonyVowel::DotlessI),
            Vowel::O => Some(HarmonyVowel::O),
            Vowel::U => Some(HarmonyVowel::U),
            Vowel::Schwa => Some(HarmonyVowel::Schwa),
            Vowel::E => None,
            Vowel::I => Some(HarmonyVowel::I),
            Vowel::OUmlaut => Some(HarmonyVowel::OUmlaut),
            Vowel::UUmlaut => Some(HarmonyVowel::UUmlaut),
        }
    }
}

/// The eight vowels that key the harmony-dependent suffix tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum HarmonyVowel {
    A,
    DotlessI,
    Schwa,
    I,
    O,
    U,
    OUmlaut,
    UUmlaut,
}

impl HarmonyVowel {
    pub const ALL: [HarmonyVowel; 8] = [
        HarmonyVowel::A,
        HarmonyVowel::DotlessI,
        HarmonyVowel::Schwa,
        HarmonyVowel::I,
        HarmonyVowel::O,
        HarmonyVowel::U,
        HarmonyVowel::OUmlaut,
        HarmonyVowel::UUmlaut,
    ];

    pub const fn vowel(self) -> Vowel {
        match self {
            HarmonyVowel::A => Vowel::A,
            HarmonyVowel::DotlessI => Vowel::DotlessI,
            HarmonyVowel::Schwa => Vowel::Schwa,
            HarmonyVowel::I => Vowel::I,
            HarmonyVowel::O => Vowel::O,
            HarmonyVowel::U => Vowel::U,
            HarmonyVowel::OUmlaut => Vowel::OUmlaut,
            HarmonyVowel::UUmlaut => Vowel::UUmlaut,
        }
    }

    pub const fn is_back(self) -> bool {
        self.vowel().is_back()
    }

    /// Rounded family `{o, u, ö, ü}`.
    pub const fn is_rounded(self) -> bool {
        matches!(
            self,
            HarmonyVowel::O | HarmonyVowel::U | HarmonyVowel::OUmlaut | HarmonyVowel::UUmlaut
        )
    }
}

/// Whether a word ends in a vowel or a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum FinalType {
    VowelFinal,
    ConsonantFinal,
}
