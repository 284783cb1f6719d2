//! Implementation of the `conjugo conjugate` command.

use std::collections::BTreeMap;

use clap::Args;
use comfy_table::Table;
use conjugo::types::NonFinite;
use conjugo::{
    Branch, Conjugator, Derivation, DerivedVerb, Paradigm, TABLES_VERSION, Verb, VerbRecord,
};
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::commands::sources::SourceArgs;
use crate::output::table::{
    declension_table, gerund_table, imperative_table, infinitive_table, tense_table,
};

/// Arguments for the conjugate command.
#[derive(Debug, Args)]
pub struct ConjugateArgs {
    /// Lemma to conjugate, with or without macrons (e.g., amō, amo)
    pub lemma: String,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Also build the paradigm from the compound's base verb
    #[arg(long)]
    pub compound: bool,

    /// Also show iterative, inchoative and desiderative verbs
    #[arg(long)]
    pub derived: bool,
}

/// JSON output for one verb.
#[derive(Serialize)]
struct ConjugateJson<'a> {
    lemma: &'a str,
    tables_version: u32,
    summary: String,
    /// The record as the lexicon understood it.
    record: VerbRecord,
    paradigm: &'a Paradigm,
    #[serde(skip_serializing_if = "Option::is_none")]
    compound: Option<Paradigm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    derived: Option<BTreeMap<Derivation, DerivedVerb>>,
}

/// Run the conjugate command.
pub fn run_conjugate(args: ConjugateArgs) -> Result<i32> {
    let lexicon = args.sources.load_lexicon()?;
    let irregulars = args.sources.load_irregulars()?;
    let conjugator = Conjugator::new(lexicon, irregulars);

    let found = conjugator
        .find(&args.lemma)
        .or_else(|| conjugator.find_demacronized(&args.lemma));
    let Some(verb) = found else {
        return report_unknown(&conjugator, &args);
    };

    let paradigm = conjugator.paradigm(verb);
    let compound = if args.compound {
        conjugator.compound_paradigm(verb)
    } else {
        None
    };
    let derived = args.derived.then(|| conjugator.derived_verbs(verb));

    if args.json {
        let output = ConjugateJson {
            lemma: verb.lemma(),
            tables_version: TABLES_VERSION,
            summary: verb.to_string(),
            record: verb.to_record(),
            paradigm: &paradigm,
            compound,
            derived,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
        return Ok(exitcode::OK);
    }

    println!("{}", verb.if_supports_color(Stream::Stdout, |t| t.bold()));
    print_paradigm(&paradigm);
    if let Some(compound) = &compound {
        print_compound(verb, compound);
    }
    if let Some(derived) = &derived {
        print_derived(derived);
    }
    Ok(exitcode::OK)
}

fn report_unknown(conjugator: &Conjugator, args: &ConjugateArgs) -> Result<i32> {
    let suggestions = conjugator.suggest(&args.lemma);
    if args.json {
        let output = serde_json::json!({
            "error": format!("unknown verb '{}'", args.lemma),
            "suggestions": suggestions,
        });
        eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        let label = "error:".if_supports_color(Stream::Stderr, |t| t.red());
        eprintln!("{label} unknown verb '{}'", args.lemma);
        if !suggestions.is_empty() {
            eprintln!("  did you mean: {}?", suggestions.join(", "));
        }
    }
    Ok(exitcode::DATAERR)
}

fn print_paradigm(paradigm: &Paradigm) {
    for branch in paradigm.branches() {
        match branch {
            Branch::Indicative { forms, .. } => {
                print_section(branch.title(), tense_table(&forms.tenses()));
            }
            Branch::Subjunctive { forms, .. } => {
                print_section(branch.title(), tense_table(&forms.tenses()));
            }
            Branch::Imperatives(imperatives) => {
                print_section(branch.title(), imperative_table(imperatives));
            }
            Branch::NonFinite(non_finite) => print_non_finite(non_finite),
        }
    }
}

fn print_non_finite(non_finite: &NonFinite) {
    print_section("INFINITIVES", infinitive_table(&non_finite.infinitives));
    print_section(
        "GERUND AND SUPINE",
        gerund_table(
            &[
                ("Gerund", &non_finite.gerund),
                ("Gerund (-undus)", &non_finite.gerund_undus),
            ],
            &non_finite.supine,
        ),
    );
    for (name, declension) in non_finite.participles.declined() {
        let title = format!("{name}: {}", declension.nominative());
        print_section(&title, Some(declension_table(declension)));
    }
}

fn print_section(title: &str, table: Option<Table>) {
    if let Some(table) = table {
        println!("\n{}", title.if_supports_color(Stream::Stdout, |t| t.cyan()));
        println!("{table}");
    }
}

fn print_compound(verb: &Verb, compound: &Paradigm) {
    let Some((prefix, base)) = verb.compound() else {
        return;
    };
    let heading = format!("=== Compound paradigm: {prefix} + {base} ===");
    println!("\n{}", heading.if_supports_color(Stream::Stdout, |t| t.bold()));
    if compound.is_empty() {
        println!("(base verb '{base}' is not in the lexicon)");
    } else {
        print_paradigm(compound);
    }
}

fn print_derived(derived: &BTreeMap<Derivation, DerivedVerb>) {
    for (derivation, verb) in derived {
        let heading = format!("=== {derivation} ===");
        println!("\n{}", heading.if_supports_color(Stream::Stdout, |t| t.bold()));
        match verb {
            DerivedVerb::SeeAlso { lemma } => println!("see {lemma}"),
            DerivedVerb::Generated {
                description,
                paradigm,
            } => {
                println!("{description}");
                print_paradigm(paradigm);
            }
        }
    }
}
