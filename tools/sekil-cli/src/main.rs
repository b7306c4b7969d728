use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use sekil_morph::{archive_catalogue, catalogue, Engine, ExampleMap, Pipeline, PipelineOptions};
use sekil_protocol::{BatchReport, CategorySet};

#[derive(Parser)]
#[command(author, version, about = "Generates Azerbaijani inflection tables from a word list")]
struct Cli {
    /// Suppress status lines (warnings are still printed)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inflect every word of a list and write the report as JSON
    Generate {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Suffix catalogue (text table or compiled .bin) for usage examples
        #[arg(short, long, value_name = "FILE")]
        examples: Option<PathBuf>,

        /// Comma-separated categories: plural,case,possessive,predicative
        #[arg(long, value_name = "LIST", default_value = "plural,case,possessive,predicative")]
        only: CategorySet,

        #[arg(short, long, default_value_t = 1)]
        workers: usize,

        /// Also write one .tsv per result sheet into this directory
        #[arg(long, value_name = "DIR")]
        tsv_dir: Option<PathBuf>,
    },
    /// Extract the suffix catalogue from a generated report
    Catalogue {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Compile a catalogue table to the zero-copy binary form
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

/// On-disk envelope of a generation run.
#[derive(Serialize, Deserialize)]
struct ReportFile {
    words: usize,
    report: BatchReport,
}

struct Status {
    quiet: bool,
}

impl Status {
    fn say(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", message.as_ref());
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let status = Status { quiet: cli.quiet };

    match cli.command {
        Command::Generate { input, output, examples, only, workers, tsv_dir } => {
            let options = PipelineOptions { categories: only, workers };
            generate(&status, &input, &output, examples.as_deref(), options, tsv_dir.as_deref())
        }
        Command::Catalogue { input, output } => extract_catalogue(&status, &input, &output),
        Command::Compile { input, output } => compile(&status, &input, &output),
    }
}

fn generate(
    status: &Status,
    input: &Path,
    output: &Path,
    examples: Option<&Path>,
    options: PipelineOptions,
    tsv_dir: Option<&Path>,
) -> Result<()> {
    status.say(format!("📖 Reading words from {:?}...", input));
    let text = fs::read_to_string(input).with_context(|| format!("cannot read {:?}", input))?;
    let words = sekil_parser::parse_word_list(&text).with_context(|| format!("bad word list {:?}", input))?;

    // A broken catalogue only costs the annotations
    let examples = match examples {
        Some(path) => load_examples(path).unwrap_or_else(|e| {
            eprintln!("⚠️  Suffix examples unavailable, continuing without them: {:#}", e);
            ExampleMap::new()
        }),
        None => ExampleMap::new(),
    };

    status.say(format!(
        "⚙️  Inflecting {} words ({} examples, {} workers)...",
        words.len(),
        examples.len(),
        options.workers.max(1)
    ));
    let engine = Engine::azerbaijani();
    let report = Pipeline::new(engine.generator(), &examples, options).run(&words[..]);

    if let Some(dir) = tsv_dir {
        fs::create_dir_all(dir).with_context(|| format!("cannot create {:?}", dir))?;
        for sheet in sekil_parser::render_report(&report) {
            let path = dir.join(format!("{}.tsv", sheet.name));
            fs::write(&path, sheet.body).with_context(|| format!("cannot write {:?}", path))?;
        }
        status.say(format!("🗂️  Sheets written to {:?}", dir));
    }

    let forms = report.all_forms.len();
    let file = ReportFile { words: words.len(), report };
    let json = serde_json::to_string_pretty(&file)?;
    fs::write(output, json).with_context(|| format!("cannot write {:?}", output))?;

    status.say(format!("✅ Success! {} forms written to {:?}", forms, output));
    Ok(())
}

fn load_examples(path: &Path) -> Result<ExampleMap> {
    if is_compiled(path) {
        let bytes = fs::read(path).with_context(|| format!("cannot read {:?}", path))?;
        Ok(ExampleMap::from_archive_bytes(&bytes)?)
    } else {
        let text = fs::read_to_string(path).with_context(|| format!("cannot read {:?}", path))?;
        let catalogue = sekil_parser::parse_catalogue(&text)?;
        Ok(ExampleMap::from_catalogue(&catalogue))
    }
}

fn is_compiled(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("bin" | "rkyv"))
}

fn extract_catalogue(status: &Status, input: &Path, output: &Path) -> Result<()> {
    status.say(format!("📖 Reading report from {:?}...", input));
    let json = fs::read_to_string(input).with_context(|| format!("cannot read {:?}", input))?;
    let file: ReportFile = serde_json::from_str(&json).with_context(|| format!("bad report {:?}", input))?;

    let engine = Engine::azerbaijani();
    let catalogue = catalogue::extract(&file.report.all_forms, engine.rules());
    let observed = catalogue.entries.iter().filter(|e| !e.example.is_empty()).count();

    fs::write(output, sekil_parser::render_catalogue(&catalogue))
        .with_context(|| format!("cannot write {:?}", output))?;

    status.say(format!(
        "✅ Success! {} suffixes ({} with examples) written to {:?}",
        catalogue.entries.len(),
        observed,
        output
    ));
    Ok(())
}

fn compile(status: &Status, input: &Path, output: &Path) -> Result<()> {
    status.say(format!("📖 Reading catalogue from {:?}...", input));
    let text = fs::read_to_string(input).with_context(|| format!("cannot read {:?}", input))?;
    let catalogue = sekil_parser::parse_catalogue(&text)?;

    status.say(format!("⚙️  Compiling catalogue with {} entries...", catalogue.entries.len()));
    let bytes = archive_catalogue(&catalogue)?;
    fs::write(output, &bytes[..]).with_context(|| format!("cannot write {:?}", output))?;

    status.say(format!("✅ Success! Binary written to {:?}", output));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::parse_from([
            "sekil", "generate", "-i", "words.txt", "-o", "out.json", "--only", "plural,case", "-w", "4",
        ]);
        match cli.command {
            Command::Generate { only, workers, examples, .. } => {
                assert_eq!(only, CategorySet::PLURAL | CategorySet::CASE);
                assert_eq!(workers, 4);
                assert!(examples.is_none());
            }
            _ => panic!("Expected generate"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_category() {
        let result = Cli::try_parse_from(["sekil", "generate", "-i", "a", "-o", "b", "--only", "dual"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_compiled_catalogue_detection() {
        assert!(is_compiled(Path::new("suffixes.bin")));
        assert!(!is_compiled(Path::new("suffixes.tsv")));
    }

    #[test]
    fn test_report_file_roundtrip() {
        let engine = Engine::azerbaijani();
        let examples = ExampleMap::new();
        let report = Pipeline::new(engine.generator(), &examples, PipelineOptions::default()).run(&["ana"][..]);
        let file = ReportFile { words: 1, report };

        let json = serde_json::to_string(&file).unwrap();
        let back: ReportFile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.report, file.report);
    }

    #[test]
    fn test_missing_examples_file_is_an_error_not_a_panic() {
        assert!(load_examples(Path::new("/nonexistent/sekil/catalogue.tsv")).is_err());
    }
}
