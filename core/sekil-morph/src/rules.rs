use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use sekil_protocol::{CaseSlot, FinalType, HarmonyVowel, Person, Vowel};

use HarmonyVowel::*;

// Harmony vowels share suffixes in pairs: backness picks a/ə, rounding
// picks ı/i versus u/ü.
const UNROUNDED_BACK: &[HarmonyVowel] = &[A, DotlessI];
const UNROUNDED_FRONT: &[HarmonyVowel] = &[Schwa, I];
const ROUNDED_BACK: &[HarmonyVowel] = &[O, U];
const ROUNDED_FRONT: &[HarmonyVowel] = &[OUmlaut, UUmlaut];

type Rows<const N: usize> = [(&'static [HarmonyVowel], [&'static str; N]); 4];

const CASE_SLOTS: [CaseSlot; 5] = [
    CaseSlot::Genitive,
    CaseSlot::Dative,
    CaseSlot::Accusative,
    CaseSlot::Locative,
    CaseSlot::Ablative,
];

//                 Yiyəlik  Yönlük  Təsirlik  Yerlik  Çıxışlıq
const CASE_AFTER_CONSONANT: Rows<5> = [
    (UNROUNDED_BACK, ["ın", "a", "ı", "da", "dan"]),
    (UNROUNDED_FRONT, ["in", "ə", "i", "də", "dən"]),
    (ROUNDED_BACK, ["un", "a", "u", "da", "dan"]),
    (ROUNDED_FRONT, ["ün", "ə", "ü", "də", "dən"]),
];

const CASE_AFTER_VOWEL: Rows<5> = [
    (UNROUNDED_BACK, ["nın", "ya", "nı", "da", "dan"]),
    (UNROUNDED_FRONT, ["nin", "yə", "ni", "də", "dən"]),
    (ROUNDED_BACK, ["nun", "ya", "nu", "da", "dan"]),
    (ROUNDED_FRONT, ["nün", "yə", "nü", "də", "dən"]),
];

//                      1s     2s    3s    1p      2p      3p
const POSSESSIVE_AFTER_CONSONANT: Rows<6> = [
    (UNROUNDED_BACK, ["ım", "ın", "ı", "ımız", "ınız", "ları"]),
    (UNROUNDED_FRONT, ["im", "in", "i", "imiz", "iniz", "ləri"]),
    (ROUNDED_BACK, ["um", "un", "u", "umuz", "unuz", "ları"]),
    (ROUNDED_FRONT, ["üm", "ün", "ü", "ümüz", "ünüz", "ləri"]),
];

const POSSESSIVE_AFTER_VOWEL: Rows<6> = [
    (UNROUNDED_BACK, ["m", "n", "sı", "mız", "nız", "ları"]),
    (UNROUNDED_FRONT, ["m", "n", "si", "miz", "niz", "ləri"]),
    (ROUNDED_BACK, ["m", "n", "su", "muz", "nuz", "ları"]),
    (ROUNDED_FRONT, ["m", "n", "sü", "müz", "nüz", "ləri"]),
];

const PREDICATIVE_AFTER_CONSONANT: Rows<6> = [
    (UNROUNDED_BACK, ["am", "san", "dır", "ıq", "sınız", "dırlar"]),
    (UNROUNDED_FRONT, ["əm", "sən", "dir", "ik", "siniz", "dirlər"]),
    (ROUNDED_BACK, ["am", "san", "dur", "uq", "sunuz", "durlar"]),
    (ROUNDED_FRONT, ["əm", "sən", "dür", "ük", "sünüz", "dürlər"]),
];

const PREDICATIVE_AFTER_VOWEL: Rows<6> = [
    (UNROUNDED_BACK, ["yam", "san", "dır", "yıq", "sınız", "dırlar"]),
    (UNROUNDED_FRONT, ["yəm", "sən", "dir", "yik", "siniz", "dirlər"]),
    (ROUNDED_BACK, ["yam", "san", "dur", "yuq", "sunuz", "durlar"]),
    (ROUNDED_FRONT, ["yəm", "sən", "dür", "yük", "sünüz", "dürlər"]),
];

/// Binary back/front pluralization. Needs no harmony key, so it covers `e`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PluralRule;

impl PluralRule {
    pub const BACK: &'static str = "lar";
    pub const FRONT: &'static str = "lər";

    pub fn suffix(&self, vowel: Vowel) -> &'static str {
        if vowel.is_back() {
            Self::BACK
        } else {
            Self::FRONT
        }
    }
}

/// `(final type, harmony vowel, slot) → suffix` for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixTable<K: Eq + Hash> {
    entries: HashMap<(FinalType, HarmonyVowel, K), &'static str>,
}

impl<K: Copy + Eq + Hash> SuffixTable<K> {
    fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    fn with_rows<const N: usize>(mut self, final_type: FinalType, slots: [K; N], rows: &Rows<N>) -> Self {
        for (vowels, suffixes) in rows {
            for &vowel in vowels.iter() {
                for (slot, suffix) in slots.iter().zip(suffixes) {
                    self.entries.insert((final_type, vowel, *slot), *suffix);
                }
            }
        }
        self
    }

    /// Unmapped combinations (the vowel `e`, the nominative) yield `""`.
    pub fn lookup(&self, final_type: FinalType, vowel: Vowel, slot: K) -> &'static str {
        vowel
            .harmony()
            .and_then(|key| self.entries.get(&(final_type, key, slot)))
            .copied()
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn suffixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().copied()
    }
}

/// The four rule tables, built once and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRules {
    pub plural: PluralRule,
    pub case: SuffixTable<CaseSlot>,
    pub possessive: SuffixTable<Person>,
    pub predicative: SuffixTable<Person>,
}

impl SuffixRules {
    /// Standard Azerbaijani tables.
    pub fn azerbaijani() -> Self {
        use FinalType::{ConsonantFinal, VowelFinal};

        Self {
            plural: PluralRule,
            case: SuffixTable::new()
                .with_rows(ConsonantFinal, CASE_SLOTS, &CASE_AFTER_CONSONANT)
                .with_rows(VowelFinal, CASE_SLOTS, &CASE_AFTER_VOWEL),
            possessive: SuffixTable::new()
                .with_rows(ConsonantFinal, Person::ALL, &POSSESSIVE_AFTER_CONSONANT)
                .with_rows(VowelFinal, Person::ALL, &POSSESSIVE_AFTER_VOWEL),
            predicative: SuffixTable::new()
                .with_rows(ConsonantFinal, Person::ALL, &PREDICATIVE_AFTER_CONSONANT)
                .with_rows(VowelFinal, Person::ALL, &PREDICATIVE_AFTER_VOWEL),
        }
    }

    /// Every suffix any table can emit, sorted and deduplicated.
    pub fn suffixes(&self) -> BTreeSet<&'static str> {
        let mut all: BTreeSet<&'static str> = [PluralRule::BACK, PluralRule::FRONT].into_iter().collect();
        all.extend(self.case.suffixes());
        all.extend(self.possessive.suffixes());
        all.extend(self.predicative.suffixes());
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use FinalType::{ConsonantFinal, VowelFinal};

    #[test]
    fn test_table_sizes() {
        let rules = SuffixRules::azerbaijani();
        // 2 final types x 8 vowels x slots
        assert_eq!(rules.case.len(), 2 * 8 * 5);
        assert_eq!(rules.possessive.len(), 2 * 8 * 6);
        assert_eq!(rules.predicative.len(), 2 * 8 * 6);
    }

    #[test]
    fn test_case_epenthesis() {
        let rules = SuffixRules::azerbaijani();
        assert_eq!(rules.case.lookup(ConsonantFinal, Vowel::A, CaseSlot::Genitive), "ın");
        assert_eq!(rules.case.lookup(VowelFinal, Vowel::A, CaseSlot::Genitive), "nın");
        assert_eq!(rules.case.lookup(ConsonantFinal, Vowel::A, CaseSlot::Dative), "a");
        assert_eq!(rules.case.lookup(VowelFinal, Vowel::Schwa, CaseSlot::Dative), "yə");
        assert_eq!(rules.case.lookup(ConsonantFinal, Vowel::OUmlaut, CaseSlot::Accusative), "ü");
        assert_eq!(rules.case.lookup(ConsonantFinal, Vowel::A, CaseSlot::Nominative), "");
    }

    #[test]
    fn test_unkeyed_vowel_yields_nothing() {
        let rules = SuffixRules::azerbaijani();
        for final_type in [ConsonantFinal, VowelFinal] {
            for case in CaseSlot::ALL {
                assert_eq!(rules.case.lookup(final_type, Vowel::E, case), "");
            }
            for person in Person::ALL {
                assert_eq!(rules.possessive.lookup(final_type, Vowel::E, person), "");
                assert_eq!(rules.predicative.lookup(final_type, Vowel::E, person), "");
            }
        }
        assert_eq!(rules.plural.suffix(Vowel::E), "lər");
    }

    #[test]
    fn test_third_person_plural_possessive_ignores_final_type() {
        let rules = SuffixRules::azerbaijani();
        for hv in HarmonyVowel::ALL {
            let expected = if hv.is_back() { "ları" } else { "ləri" };
            for final_type in [ConsonantFinal, VowelFinal] {
                assert_eq!(rules.possessive.lookup(final_type, hv.vowel(), Person::ThirdPlural), expected);
            }
        }
    }

    #[test]
    fn test_predicative_third_person_is_copula() {
        let rules = SuffixRules::azerbaijani();
        for hv in HarmonyVowel::ALL {
            for person in [Person::ThirdSingular, Person::ThirdPlural] {
                let after_consonant = rules.predicative.lookup(ConsonantFinal, hv.vowel(), person);
                let after_vowel = rules.predicative.lookup(VowelFinal, hv.vowel(), person);
                assert!(after_consonant.starts_with('d'));
                assert_eq!(after_consonant, after_vowel);
            }
        }
        assert_eq!(rules.predicative.lookup(VowelFinal, Vowel::A, Person::FirstSingular), "yam");
        assert_eq!(rules.predicative.lookup(ConsonantFinal, Vowel::A, Person::FirstSingular), "am");
    }

    #[test]
    fn test_catalogue_suffixes() {
        let suffixes = SuffixRules::azerbaijani().suffixes();
        for s in ["lar", "lər", "nın", "ümüz", "dürlər", "m"] {
            assert!(suffixes.contains(s), "missing {}", s);
        }
        assert!(!suffixes.contains(""));
    }

    fn any_vowel() -> impl Strategy<Value = Vowel> {
        prop::sample::select(sekil_protocol::VOWELS.chars().filter_map(Vowel::from_char).collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn test_construction_is_deterministic(vowel in any_vowel(), case_idx in 0usize..6, person_idx in 0usize..6) {
            let first = SuffixRules::azerbaijani();
            let second = SuffixRules::azerbaijani();
            prop_assert_eq!(&first, &second);

            let case = CaseSlot::ALL[case_idx];
            let person = Person::ALL[person_idx];
            for final_type in [ConsonantFinal, VowelFinal] {
                prop_assert_eq!(first.case.lookup(final_type, vowel, case), second.case.lookup(final_type, vowel, case));
                prop_assert_eq!(first.possessive.lookup(final_type, vowel, person), second.possessive.lookup(final_type, vowel, person));
                prop_assert_eq!(first.predicative.lookup(final_type, vowel, person), second.predicative.lookup(final_type, vowel, person));
            }
        }

        #[test]
        fn test_suffix_vowels_agree_in_backness(vowel in any_vowel(), person_idx in 0usize..6) {
            // Every harmonized suffix carries only vowels of the root's class
            prop_assume!(vowel.harmony().is_some());
            let rules = SuffixRules::azerbaijani();
            let person = Person::ALL[person_idx];
            for final_type in [ConsonantFinal, VowelFinal] {
                let suffix = rules.possessive.lookup(final_type, vowel, person);
                for v in suffix.chars().filter_map(Vowel::from_char) {
                    prop_assert_eq!(v.is_back(), vowel.is_back());
                }
            }
        }
    }
}
