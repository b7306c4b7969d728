use std::panic;
use std::thread;

use sekil_protocol::{
    BatchReport, CaseRow, CaseSlot, Category, CategorySet, GeneratedForm, Person, PluralRow,
    PossessivePair, PossessiveRow, PredicativeRow, RootNumber,
};

use crate::annotate::ExampleMap;
use crate::generator::Generator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub categories: CategorySet,
    /// Input shards processed in parallel; 0 and 1 both mean sequential.
    pub workers: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            categories: CategorySet::all(),
            workers: 1,
        }
    }
}

/// Runs every selected category over a word list, one row per word.
pub struct Pipeline<'a> {
    generator: Generator<'a>,
    examples: &'a ExampleMap,
    options: PipelineOptions,
}

impl<'a> Pipeline<'a> {
    pub fn new(generator: Generator<'a>, examples: &'a ExampleMap, options: PipelineOptions) -> Self {
        Self { generator, examples, options }
    }

    /// Rows come back in input order whatever the worker count.
    pub fn run<W: AsRef<str> + Sync>(&self, words: &[W]) -> BatchReport {
        let workers = self.options.workers.max(1).min(words.len().max(1));
        if workers == 1 {
            return self.run_shard(words);
        }

        let shard_len = words.len().div_ceil(workers);
        thread::scope(|scope| {
            let handles: Vec<_> = words
                .chunks(shard_len)
                .map(|shard| scope.spawn(move || self.run_shard(shard)))
                .collect();

            let mut report = BatchReport::default();
            for handle in handles {
                match handle.join() {
                    Ok(shard) => report.append(shard),
                    Err(payload) => panic::resume_unwind(payload),
                }
            }
            report
        })
    }

    fn run_shard<W: AsRef<str>>(&self, words: &[W]) -> BatchReport {
        let mut report = BatchReport::default();
        for word in words {
            self.process_word(word.as_ref(), &mut report);
        }
        report
    }

    fn process_word(&self, word: &str, report: &mut BatchReport) {
        let selected = self.options.categories;

        // 1. Plural
        if selected.has(Category::Plural) {
            let plural = self.emit(self.generator.plural(word), report);
            report.plural.push(PluralRow { word: word.to_string(), plural });
        }

        // 2. Cases
        if selected.has(Category::Case) {
            let forms = CaseSlot::ALL.map(|case| self.emit(self.generator.case(word, case), report));
            report.case.push(CaseRow { word: word.to_string(), forms });
        }

        // 3. Possessives, singular root then plural root per person
        if selected.has(Category::Possessive) {
            let forms = Person::ALL.map(|person| {
                let singular = self.emit(self.generator.possessive(word, person, RootNumber::Singular), report);
                let plural = self.emit(self.generator.possessive(word, person, RootNumber::Plural), report);
                PossessivePair { person, singular, plural }
            });
            report.possessive.push(PossessiveRow { word: word.to_string(), forms });
        }

        // 4. Predicatives
        if selected.has(Category::Predicative) {
            let forms = Person::ALL.map(|person| self.emit(self.generator.predicative(word, person), report));
            report.predicative.push(PredicativeRow { word: word.to_string(), forms });
        }
    }

    /// Annotates a form and records it in the flattened collection.
    fn emit(&self, form: GeneratedForm, report: &mut BatchReport) -> GeneratedForm {
        let form = self.examples.annotate(form);
        report.all_forms.push(form.clone());
        form
    }
}
