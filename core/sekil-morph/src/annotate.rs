use std::collections::HashMap;

use rkyv::AlignedVec;
use sekil_protocol::{ArchivedSuffixCatalogue, GeneratedForm, SuffixCatalogue};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("invalid suffix catalogue archive: {0}")]
    InvalidArchive(String),
    #[error("failed to archive suffix catalogue: {0}")]
    Archive(String),
}

/// Suffix text → usage example, read-only for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleMap {
    examples: HashMap<String, String>,
}

impl ExampleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only catalogue entries that carry an example.
    pub fn from_catalogue(catalogue: &SuffixCatalogue) -> Self {
        catalogue
            .entries
            .iter()
            .map(|e| (e.suffix.as_str(), e.example.as_str()))
            .collect()
    }

    pub fn from_archived(catalogue: &ArchivedSuffixCatalogue) -> Self {
        catalogue
            .entries
            .iter()
            .map(|e| (e.suffix.as_str(), e.example.as_str()))
            .collect()
    }

    /// Validates a compiled catalogue before reading it.
    pub fn from_archive_bytes(bytes: &[u8]) -> Result<Self, AnnotateError> {
        // Archives need their root aligned; file buffers give no such guarantee
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let archived = rkyv::check_archived_root::<SuffixCatalogue>(&aligned)
            .map_err(|e| AnnotateError::InvalidArchive(format!("{:?}", e)))?;
        Ok(Self::from_archived(archived))
    }

    pub fn insert(&mut self, suffix: &str, example: &str) {
        if !example.is_empty() {
            self.examples.insert(suffix.to_string(), example.to_string());
        }
    }

    pub fn example_for(&self, suffix: &str) -> Option<&str> {
        self.examples.get(suffix).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Attaches the example catalogued for exactly this form's suffix.
    pub fn annotate(&self, mut form: GeneratedForm) -> GeneratedForm {
        form.example = self.example_for(&form.suffix).map(str::to_string);
        form
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for ExampleMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut map = ExampleMap::new();
        for (suffix, example) in iter {
            map.insert(suffix, example);
        }
        map
    }
}

/// Serializes a catalogue into the zero-copy form read by
/// [`ExampleMap::from_archive_bytes`].
pub fn archive_catalogue(catalogue: &SuffixCatalogue) -> Result<AlignedVec, AnnotateError> {
    rkyv::to_bytes::<_, 1024>(catalogue).map_err(|e| AnnotateError::Archive(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sekil_protocol::{CatalogueEntry, Slot};

    fn catalogue() -> SuffixCatalogue {
        SuffixCatalogue {
            version: 1,
            entries: vec![
                CatalogueEntry { suffix: "lar".to_string(), example: "kitab+lar".to_string() },
                CatalogueEntry { suffix: "lər".to_string(), example: String::new() },
            ],
        }
    }

    fn plural(word: &str, suffix: &str) -> GeneratedForm {
        GeneratedForm {
            word: word.to_string(),
            slot: Slot::Plural,
            root: word.to_string(),
            suffix: suffix.to_string(),
            form: format!("{}{}", word, suffix),
            example: None,
        }
    }

    #[test]
    fn test_empty_examples_are_dropped() {
        let map = ExampleMap::from_catalogue(&catalogue());
        assert_eq!(map.len(), 1);
        assert_eq!(map.example_for("lar"), Some("kitab+lar"));
        assert_eq!(map.example_for("lər"), None);
    }

    #[test]
    fn test_annotate_exact_suffix_only() {
        let map = ExampleMap::from_catalogue(&catalogue());

        let annotated = map.annotate(plural("qapı", "lar"));
        assert_eq!(format!("{}", annotated), "qapı+lar (kitab+lar)");

        let plain = map.annotate(plural("ev", "lər"));
        assert_eq!(plain.example, None);
        assert_eq!(format!("{}", plain), "ev+lər");
    }

    #[test]
    fn test_archive_roundtrip() {
        let bytes = archive_catalogue(&catalogue()).expect("Failed to archive catalogue");

        // Shift by one byte to break the alignment the serializer gave us
        let mut shifted = vec![0u8];
        shifted.extend_from_slice(&bytes);
        let map = ExampleMap::from_archive_bytes(&shifted[1..]).expect("Failed to load catalogue");

        assert_eq!(map, ExampleMap::from_catalogue(&catalogue()));
    }

    #[test]
    fn test_garbage_archive_is_rejected() {
        let result = ExampleMap::from_archive_bytes(&[0xFF; 3]);
        assert!(matches!(result, Err(AnnotateError::InvalidArchive(_))));
    }
}
