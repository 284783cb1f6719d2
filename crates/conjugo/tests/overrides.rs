//! Tests for loading irregular overrides and merging them into generated
//! paradigms.

use std::io::Write;

use conjugo::morphology::merge::apply_override;
use conjugo::{Conjugator, IrregularTable, Lexicon, LoadError, LoadWarning, MergeError};
use serde_json::json;
use tempfile::NamedTempFile;

const VERBS: &str = r#"[
    {"lemma": "amō", "principal_parts": ["amāre", "amāvī", "amātum"], "conjugation": 1},
    {"lemma": "regō", "principal_parts": ["regere", "rēxī", "rēctum"], "conjugation": 3},
    {"lemma": "ferō", "principal_parts": ["ferre", "tulī", "lātum"], "conjugation": 3},
    {"lemma": "possum", "principal_parts": ["posse", "potuī", ""], "conjugation": null}
]"#;

fn conjugator(overrides: &str) -> Conjugator {
    Conjugator::new(
        Lexicon::load_str(VERBS).unwrap(),
        IrregularTable::load_str(overrides).unwrap(),
    )
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn whitespace_file_is_an_empty_table() {
    let table = IrregularTable::load_str("  \n").unwrap();
    assert!(table.is_empty());
}

#[test]
fn load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"ferō": {{"INDICATIVE ACTIVE": {{"Present": ["ferō", "fers"]}}}}}}"#
    )
    .unwrap();

    let table = IrregularTable::load(file.path()).unwrap();
    assert_eq!(table.lemmas(), ["ferō"]);
    assert!(table.contains("ferō"));
}

#[test]
fn non_object_entry_is_skipped_with_warning() {
    let table = IrregularTable::load_str(r#"{"ferō": ["fers"], "sum": {}}"#).unwrap();
    assert_eq!(table.lemmas(), ["sum"]);
    assert!(matches!(
        table.warnings(),
        [LoadWarning::InvalidOverride { lemma, .. }] if lemma == "ferō"
    ));
}

#[test]
fn top_level_array_is_rejected() {
    let result = IrregularTable::load_str("[]");
    assert!(matches!(result, Err(LoadError::Shape { .. })));
}

// =========================================================================
// Merging
// =========================================================================

#[test]
fn override_forms_come_first() {
    let conjugator = conjugator(
        r#"{"ferō": {"INDICATIVE ACTIVE": {"Present": ["ferō", "fers", "fert"]}}}"#,
    );
    let paradigm = conjugator.paradigm(conjugator.find("ferō").unwrap());
    let present = &paradigm.indicative_active.present;
    assert_eq!(present[0].to_string(), "ferō");
    assert_eq!(present[1].to_string(), "fers / feris");
    assert_eq!(present[2].to_string(), "fert / ferit");
    assert_eq!(present[5].to_string(), "ferunt");
}

#[test]
fn placeholder_in_override_keeps_generated_form() {
    let conjugator =
        conjugator(r#"{"ferō": {"INDICATIVE ACTIVE": {"Present": ["Ø", "fers"]}}}"#);
    let paradigm = conjugator.paradigm(conjugator.find("ferō").unwrap());
    assert_eq!(paradigm.indicative_active.present[0].to_string(), "ferō");
}

#[test]
fn override_replaces_a_single_form() {
    let conjugator = conjugator(
        r#"{"ferō": {"NON-FINITE": {"INFINITIVES": {"Pres Pass": "ferrī"}}}}"#,
    );
    let paradigm = conjugator.paradigm(conjugator.find("ferō").unwrap());
    assert_eq!(
        paradigm.non_finite.infinitives.present_passive.to_string(),
        "ferrī"
    );
}

#[test]
fn merging_twice_changes_nothing() {
    let conjugator = conjugator("");
    let generated = conjugator.paradigm(conjugator.find("ferō").unwrap());
    let overlay = json!({"INDICATIVE ACTIVE": {"Present": ["ferō", "fers", "fert"]}});

    let once = apply_override("ferō", &generated, &overlay).unwrap();
    let twice = apply_override("ferō", &once, &overlay).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn too_many_slots_is_a_decode_error() {
    let conjugator = conjugator("");
    let generated = conjugator.paradigm(conjugator.find("amō").unwrap());
    let overlay = json!({"INDICATIVE ACTIVE": {"Present": ["a", "b", "c", "d", "e", "f", "g"]}});

    let result = apply_override("amō", &generated, &overlay);
    assert!(matches!(result, Err(MergeError::Decode { lemma, .. }) if lemma == "amō"));
}

#[test]
fn malformed_override_keeps_generated_paradigm() {
    let plain = conjugator("");
    let expected = plain.paradigm(plain.find("amō").unwrap());

    let broken = conjugator(r#"{"amō": {"INDICATIVE ACTIVE": {"Present": 5}}}"#);
    assert_eq!(broken.paradigm(broken.find("amō").unwrap()), expected);
}

#[test]
fn override_adds_a_sparse_participle() {
    let conjugator = conjugator(
        r#"{"possum": {
            "INDICATIVE ACTIVE": {
                "Present": ["possum", "potes", "potest", "possumus", "potestis", "possunt"]
            },
            "NON-FINITE": {"PARTICIPLES": {"PAP": {"M/F": {"Nom Sg": "potēns"}}}}
        }}"#,
    );
    let paradigm = conjugator.paradigm(conjugator.find("possum").unwrap());
    assert_eq!(paradigm.indicative_active.present[1].to_string(), "potes");
    assert_eq!(paradigm.indicative_active.present[5].to_string(), "possunt");

    let present_participle = paradigm.non_finite.participles.present_active.unwrap();
    assert_eq!(present_participle.nominative().to_string(), "potēns");
    let genders: Vec<&str> = present_participle
        .genders()
        .into_iter()
        .map(|(gender, _)| gender)
        .collect();
    assert_eq!(genders, ["M/F", "N"]);
}

#[test]
fn archaic_branches_survive_overrides() {
    let conjugator = conjugator(
        r#"{"regō": {"INDICATIVE ACTIVE": {"Present": ["regō / rēgō"]}}}"#,
    );
    let paradigm = conjugator.paradigm(conjugator.find("regō").unwrap());
    assert_eq!(paradigm.indicative_active.present[0].to_string(), "regō / rēgō");
    assert_eq!(
        paradigm.indicative_active.sigmatic_future.unwrap()[0].to_string(),
        "rexō / rexim"
    );
}

// =========================================================================
// Copula
// =========================================================================

#[test]
fn copula_override_feeds_periphrastic_helpers() {
    let conjugator =
        conjugator(r#"{"sum": {"INDICATIVE ACTIVE": {"Perfect": ["fuī / fūvī"]}}}"#);
    assert_eq!(
        conjugator.copula().indicative_active.perfect[0].to_string(),
        "fuī / fūvī"
    );

    let paradigm = conjugator.paradigm(conjugator.find("amō").unwrap());
    assert_eq!(
        paradigm.indicative_passive.perfect[0].to_string(),
        "amātus sum / amātus fuī / amātus fūvī"
    );
}

#[test]
fn without_override_the_copula_is_classical() {
    let conjugator = conjugator("");
    let copula = conjugator.copula();
    assert_eq!(copula.indicative_active.present[0].to_string(), "sum");
    assert_eq!(
        copula.subjunctive_active.imperfect[2].to_string(),
        "esset / foret"
    );
}
