//! Suffix generation for Azerbaijani nouns: plural, case, possessive and
//! predicative forms driven by vowel harmony tables.

pub mod vowel;
pub mod rules;
pub mod exceptions;
pub mod generator;
pub mod annotate;
pub mod catalogue;
pub mod pipeline;

pub use annotate::{archive_catalogue, AnnotateError, ExampleMap};
pub use exceptions::{ExceptionEntry, ExceptionTable};
pub use generator::Generator;
pub use pipeline::{Pipeline, PipelineOptions};
pub use rules::{PluralRule, SuffixRules, SuffixTable};
pub use vowel::{final_type, last_vowel};

/// Owns the tables for a process; hand out generators by reference.
#[derive(Debug, Clone)]
pub struct Engine {
    rules: SuffixRules,
    exceptions: ExceptionTable,
}

impl Engine {
    pub fn new(rules: SuffixRules, exceptions: ExceptionTable) -> Self {
        Self { rules, exceptions }
    }

    pub fn azerbaijani() -> Self {
        Self::new(SuffixRules::azerbaijani(), ExceptionTable::azerbaijani())
    }

    pub fn rules(&self) -> &SuffixRules {
        &self.rules
    }

    pub fn generator(&self) -> Generator<'_> {
        Generator::new(&self.rules, &self.exceptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sekil_protocol::{CaseSlot, Person, RootNumber};

    #[test]
    fn test_documented_examples() {
        let engine = Engine::azerbaijani();
        let g = engine.generator();

        assert_eq!(g.case("su", CaseSlot::Dative).form, "suya");
        assert_eq!(g.case("su", CaseSlot::Locative).form, "suda");
        assert_eq!(g.possessive("ana", Person::FirstSingular, RootNumber::Singular).form, "anam");
        assert_eq!(g.plural("su").form, "sular");
        assert_eq!(g.plural("xyz").form, "xyz");
        assert_eq!(g.case("ev", CaseSlot::Locative).form, "ev");
        assert_eq!(g.plural("ev").form, "evlər");
    }

    #[test]
    fn test_run_then_catalogue() {
        let engine = Engine::azerbaijani();
        let examples = ExampleMap::new();
        let report = Pipeline::new(engine.generator(), &examples, PipelineOptions::default())
            .run(&["kitab", "gül"][..]);

        let catalogue = catalogue::extract(&report.all_forms, engine.rules());
        let next_run = ExampleMap::from_catalogue(&catalogue);

        assert_eq!(next_run.example_for("lar"), Some("kitab+lar"));
        assert_eq!(next_run.example_for("ün"), Some("gül+ün"));
        assert_eq!(next_run.example_for("yük"), None);
    }
}
