//! Implementation of the `conjugo check` command.

use clap::Args;
use conjugo::morphology::merge::apply_override;
use conjugo::{regular_paradigm, Conjugator, COPULA_LEMMA};
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::commands::sources::SourceArgs;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code if any problem is found
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for check results.
#[derive(Debug, Serialize)]
struct CheckJson {
    verbs: usize,
    overrides: usize,
    problems: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let lexicon = args.sources.load_lexicon()?;
    let irregulars = args.sources.load_irregulars()?;

    let mut problems: Vec<String> = lexicon
        .warnings()
        .iter()
        .chain(irregulars.warnings())
        .map(ToString::to_string)
        .collect();
    let verbs = lexicon.len();
    let overrides = irregulars.len();

    let conjugator = Conjugator::new(lexicon, irregulars);
    problems.extend(override_problems(&conjugator));
    let failed = !problems.is_empty();

    if args.json {
        let output = CheckJson {
            verbs,
            overrides,
            problems,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        for problem in &problems {
            let label = "warning:".if_supports_color(Stream::Stdout, |t| t.yellow());
            println!("{label} {problem}");
        }
        let mark = if failed {
            "!".if_supports_color(Stream::Stdout, |t| t.yellow()).to_string()
        } else {
            "✓".if_supports_color(Stream::Stdout, |t| t.green()).to_string()
        };
        println!(
            "{} {}: {} verbs, {} overrides, {} problems",
            mark,
            args.sources.verbs.display(),
            verbs,
            overrides,
            problems.len()
        );
    }

    if args.strict && failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Overrides without a verb record, and overrides that do not merge.
fn override_problems(conjugator: &Conjugator) -> Vec<String> {
    let mut problems = Vec::new();
    for lemma in conjugator.irregulars().lemmas() {
        let Some(overlay) = conjugator.irregulars().get(lemma) else {
            continue;
        };
        let Some(verb) = conjugator.find(lemma) else {
            if lemma != COPULA_LEMMA {
                problems.push(format!("override for '{lemma}' has no verb record"));
            }
            continue;
        };
        let generated = regular_paradigm(verb, conjugator.copula());
        if let Err(e) = apply_override(lemma, &generated, overlay) {
            problems.push(e.to_string());
        }
    }
    problems
}
