use sekil_protocol::{FinalType, Vowel};

/// Last vowel of the word, scanning from the end.
///
/// `None` for vowel-less tokens (acronyms, abbreviations); such words are
/// never inflected.
pub fn last_vowel(word: &str) -> Option<Vowel> {
    word.chars().rev().find_map(Vowel::from_char)
}

/// Vowel-final iff the very last character is a vowel, harmony key or not.
pub fn final_type(word: &str) -> FinalType {
    match word.chars().next_back().and_then(Vowel::from_char) {
        Some(_) => FinalType::VowelFinal,
        None => FinalType::ConsonantFinal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_vowel() {
        assert_eq!(last_vowel("kitab"), Some(Vowel::A));
        assert_eq!(last_vowel("gözəl"), Some(Vowel::Schwa));
        assert_eq!(last_vowel("ev"), Some(Vowel::E));
        assert_eq!(last_vowel("qapı"), Some(Vowel::DotlessI));
        assert_eq!(last_vowel("xyz"), None);
        assert_eq!(last_vowel(""), None);
    }

    #[test]
    fn test_final_type() {
        assert_eq!(final_type("ana"), FinalType::VowelFinal);
        assert_eq!(final_type("kafe"), FinalType::VowelFinal);
        assert_eq!(final_type("kitab"), FinalType::ConsonantFinal);
        assert_eq!(final_type(""), FinalType::ConsonantFinal);
    }
}
