//! Tests for the archaic branches: sigmatic future, aorist subjunctive,
//! optative and the `-bō` future.

use conjugo::morphology::archaic::{sigmatic_stems, true_root};
use conjugo::{Conjugator, IrregularTable, Lexicon, Tense};

const VERBS: &str = r#"[
    {"lemma": "amō", "principal_parts": ["amāre", "amāvī", "amātum"], "conjugation": 1},
    {"lemma": "regō", "principal_parts": ["regere", "rēxī", "rēctum"], "conjugation": 3},
    {"lemma": "audiō", "principal_parts": ["audīre", "audīvī", "audītum"], "conjugation": 4},
    {"lemma": "hortor", "principal_parts": ["hortārī", "hortātus sum", "hortātum"],
     "conjugation": 1, "properties": {"semantic": ["deponent"]}},
    {"lemma": "sequor", "principal_parts": ["sequī", "secūtus sum", "secūtum"],
     "conjugation": 3, "properties": {"semantic": ["deponent"]}},
    {"lemma": "sum", "principal_parts": ["esse", "fuī", "futūrum"]},
    {"lemma": "faciō", "principal_parts": ["facere", "fēcī", "factum"], "conjugation": 3},
    {"lemma": "afficiō", "principal_parts": ["afficere", "affēcī", "affectum"], "conjugation": 3,
     "properties": {"derivation": ["compound(ad+faciō)"]}},
    {"lemma": "vincō", "principal_parts": ["vincere", "vīcī", "victum"], "conjugation": 3,
     "properties": {"perfect": ["no_infix_perfect"]}},
    {"lemma": "quaerō", "principal_parts": ["quaerere", "quaesīvī", "quaesītum"], "conjugation": 3},
    {"lemma": "crēscō", "principal_parts": ["crēscere", "crēvī", "crētum"], "conjugation": 3,
     "properties": {"derivation": ["inchoative"]}},
    {"lemma": "eō", "principal_parts": ["īre", "iī", "itum"], "conjugation": 4}
]"#;

fn conjugator() -> Conjugator {
    Conjugator::new(Lexicon::load_str(VERBS).unwrap(), IrregularTable::empty())
}

fn row(tense: &Tense) -> Vec<String> {
    tense.iter().map(ToString::to_string).collect()
}

// =========================================================================
// Sigmatic Future and Aorist Subjunctive
// =========================================================================

#[test]
fn sigmatic_future_of_a_consonant_stem() {
    let conjugator = conjugator();
    let paradigm = conjugator.paradigm(conjugator.find("regō").unwrap());
    let sigmatic = paradigm.indicative_active.sigmatic_future.unwrap();
    assert_eq!(
        row(&sigmatic),
        ["rexō / rexim", "rexis", "rexit", "reximus", "rexitis", "rexint"]
    );
}

#[test]
fn exceptional_sigmatic_stem() {
    let conjugator = conjugator();
    let paradigm = conjugator.paradigm(conjugator.find("faciō").unwrap());
    assert_eq!(
        paradigm.indicative_active.sigmatic_future.unwrap()[0].to_string(),
        "faxō / faxim"
    );
    assert_eq!(
        row(&paradigm.subjunctive_active.aorist.unwrap()),
        ["faxim", "faxīs", "faxit", "faxīmus", "faxītis", "faxint"]
    );
}

#[test]
fn compound_of_exception_assimilates_prefix() {
    let conjugator = conjugator();
    let verb = conjugator.find("afficiō").unwrap();
    assert_eq!(sigmatic_stems(verb), ["affax"]);
    let paradigm = conjugator.paradigm(verb);
    assert_eq!(
        paradigm.indicative_active.sigmatic_future.unwrap()[0].to_string(),
        "affaxō / affaxim"
    );
}

#[test]
fn nasal_infix_is_removed() {
    let conjugator = conjugator();
    let verb = conjugator.find("vincō").unwrap();
    assert_eq!(true_root(verb), "vīc");
    assert_eq!(sigmatic_stems(verb), ["vīx"]);
}

#[test]
fn vowel_stems_double_the_s() {
    let conjugator = conjugator();
    let amo = conjugator.find("amō").unwrap();
    assert_eq!(sigmatic_stems(amo), ["amāss"]);
    let paradigm = conjugator.paradigm(amo);
    assert_eq!(
        paradigm.subjunctive_active.aorist.unwrap()[2].to_string(),
        "amāssit"
    );
}

#[test]
fn apophonic_verb_has_its_own_stem() {
    let conjugator = conjugator();
    assert_eq!(sigmatic_stems(conjugator.find("quaerō").unwrap()), ["quaess"]);
}

#[test]
fn inchoatives_and_going_have_no_sigmatic_forms() {
    let conjugator = conjugator();
    for lemma in ["crēscō", "eō"] {
        let paradigm = conjugator.paradigm(conjugator.find(lemma).unwrap());
        assert!(paradigm.indicative_active.sigmatic_future.is_none(), "{lemma}");
        assert!(paradigm.subjunctive_active.aorist.is_none(), "{lemma}");
    }
}

// =========================================================================
// Optative
// =========================================================================

#[test]
fn optative_of_first_conjugation() {
    let conjugator = conjugator();
    let paradigm = conjugator.paradigm(conjugator.find("amō").unwrap());
    let optative = paradigm.subjunctive_active.optative.unwrap();
    assert_eq!(optative[1].to_string(), "amēs");
    assert_eq!(optative[3].to_string(), "amēmus");
}

#[test]
fn optative_from_exception_table() {
    let conjugator = conjugator();
    let paradigm = conjugator.paradigm(conjugator.find("sum").unwrap());
    assert_eq!(
        row(&paradigm.subjunctive_active.optative.unwrap()),
        ["sim", "sīs", "sit", "sīmus", "sītis", "sint"]
    );
}

#[test]
fn third_conjugation_has_no_optative() {
    let conjugator = conjugator();
    let paradigm = conjugator.paradigm(conjugator.find("regō").unwrap());
    assert!(paradigm.subjunctive_active.optative.is_none());
}

// =========================================================================
// -bō Future
// =========================================================================

#[test]
fn bo_future_of_fourth_conjugation() {
    let conjugator = conjugator();
    let paradigm = conjugator.paradigm(conjugator.find("audiō").unwrap());
    assert_eq!(
        row(&paradigm.indicative_active.bo_future.unwrap()),
        ["audībō", "audībis", "audībit", "audībimus", "audībitis", "audībunt"]
    );
    let passive = paradigm.indicative_passive.bo_future.unwrap();
    assert_eq!(passive[0].to_string(), "audībor");
    assert_eq!(passive[1].to_string(), "audīberis / audībere");
}

#[test]
fn bo_future_of_third_conjugation() {
    let conjugator = conjugator();
    let paradigm = conjugator.paradigm(conjugator.find("regō").unwrap());
    assert_eq!(
        paradigm.indicative_active.bo_future.unwrap()[0].to_string(),
        "regēbō"
    );
}

#[test]
fn deponent_bo_future_sits_on_the_active_side() {
    let conjugator = conjugator();
    let paradigm = conjugator.paradigm(conjugator.find("sequor").unwrap());
    assert_eq!(
        paradigm.indicative_active.bo_future.unwrap()[0].to_string(),
        "sequēbor"
    );
    assert!(paradigm.indicative_passive.bo_future.is_none());
}

#[test]
fn first_conjugation_and_going_have_no_bo_future() {
    let conjugator = conjugator();
    for lemma in ["amō", "hortor", "eō"] {
        let paradigm = conjugator.paradigm(conjugator.find(lemma).unwrap());
        assert!(paradigm.indicative_active.bo_future.is_none(), "{lemma}");
    }
}
