//! Tests for loading the verb database, decoding tags and lemma lookup.

use std::io::Write;

use conjugo::lexicon::parse_tag;
use conjugo::{
    Category, Conjugation, Irregularity, LemmaId, Lexicon, LoadError, LoadWarning, Verb,
    VerbRecord, VoiceClass,
};
use tempfile::NamedTempFile;

fn verb(json: &str) -> Verb {
    let record: VerbRecord = serde_json::from_str(json).unwrap();
    Verb::from_record(&record).unwrap()
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"lemma": "amō", "principal_parts": ["amāre", "amāvī", "amātum"], "conjugation": 1}}]"#
    )
    .unwrap();

    let lexicon = Lexicon::load(file.path()).unwrap();
    assert_eq!(lexicon.len(), 1);
    assert!(lexicon.contains("amō"));
}

#[test]
fn missing_file_is_io_error() {
    let result = Lexicon::load("/nonexistent/verbs.json");
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[test]
fn invalid_json_reports_position() {
    let result = Lexicon::load_str("[{\"lemma\": }]");
    let Err(LoadError::Json { line, column, .. }) = result else {
        panic!("expected a JSON error, got {result:?}");
    };
    assert_eq!(line, 1);
    assert!(column > 0);
}

#[test]
fn top_level_object_is_rejected() {
    let result = Lexicon::load_str(r#"{"lemma": "amō"}"#);
    assert!(matches!(result, Err(LoadError::Shape { .. })));
}

#[test]
fn empty_array_is_an_empty_lexicon() {
    let lexicon = Lexicon::load_str("[]").unwrap();
    assert!(lexicon.is_empty());
    assert!(lexicon.warnings().is_empty());
}

// =========================================================================
// Warnings
// =========================================================================

#[test]
fn duplicate_lemma_keeps_later_record() {
    let lexicon = Lexicon::load_str(
        r#"[
            {"lemma": "amō", "principal_parts": ["amāre", "amāvī", "amātum"], "conjugation": 1},
            {"lemma": "amō", "principal_parts": ["amāre", "amāvī", "amātum"], "conjugation": 3}
        ]"#,
    )
    .unwrap();

    assert_eq!(
        lexicon.warnings(),
        [LoadWarning::DuplicateLemma {
            lemma: "amō".to_string()
        }]
    );
    assert_eq!(
        lexicon.get("amō").unwrap().conjugation(),
        Some(Conjugation::Third)
    );
}

#[test]
fn undecodable_record_is_skipped() {
    let lexicon = Lexicon::load_str(
        r#"[
            {"lemma": 42},
            {"lemma": "amō", "principal_parts": ["amāre", "amāvī", "amātum"], "conjugation": 1}
        ]"#,
    )
    .unwrap();

    assert_eq!(lexicon.len(), 1);
    assert!(matches!(
        lexicon.warnings(),
        [LoadWarning::InvalidRecord { index: 0, .. }]
    ));
}

#[test]
fn empty_lemma_and_extra_parts_are_rejected() {
    let lexicon = Lexicon::load_str(
        r#"[
            {"lemma": "  ", "principal_parts": ["amāre"]},
            {"lemma": "amō", "principal_parts": ["amāre", "amāvī", "amātum", "amātūrus"]}
        ]"#,
    )
    .unwrap();

    assert!(lexicon.is_empty());
    assert!(matches!(
        lexicon.warnings(),
        [
            LoadWarning::InvalidRecord { index: 0, .. },
            LoadWarning::InvalidRecord { index: 1, .. }
        ]
    ));
}

#[test]
fn unknown_category_and_malformed_tag_are_kept() {
    let lexicon = Lexicon::load_str(
        r#"[{"lemma": "amō", "principal_parts": ["amāre", "amāvī", "amātum"],
             "conjugation": 1,
             "properties": {"mood": ["poetic"], "perfect": ["v_perfect("]}}]"#,
    )
    .unwrap();

    let warnings = lexicon.warnings();
    assert_eq!(warnings.len(), 2);
    assert!(warnings.contains(&LoadWarning::UnknownCategory {
        lemma: "amō".to_string(),
        category: "mood".to_string(),
    }));
    assert!(
        warnings
            .iter()
            .any(|w| matches!(w, LoadWarning::MalformedTag { tag, .. } if tag == "v_perfect("))
    );

    let tags = lexicon.get("amō").unwrap().tags();
    assert_eq!(
        tags.category(&Category::Other("mood".to_string())),
        [Irregularity::from_name("poetic")]
    );
    assert!(!tags.has_v_perfect());
}

// =========================================================================
// Tags
// =========================================================================

#[test]
fn compound_tags() {
    assert_eq!(
        parse_tag("compound(ad+ferō)").unwrap(),
        Irregularity::Compound {
            prefix: "ad".to_string(),
            base: "ferō".to_string()
        }
    );
    assert_eq!(
        parse_tag("compound(sum)").unwrap(),
        Irregularity::Compound {
            prefix: String::new(),
            base: "sum".to_string()
        }
    );
}

#[test]
fn suppletive_tag_needs_three_stems() {
    assert_eq!(
        parse_tag("suppletive(fer,tul,lāt)").unwrap(),
        Irregularity::Suppletive {
            present: "fer".to_string(),
            perfect: "tul".to_string(),
            supine: "lāt".to_string()
        }
    );
    assert!(matches!(
        parse_tag("suppletive(fer)").unwrap(),
        Irregularity::Other { .. }
    ));
}

#[test]
fn unbalanced_parenthesis_is_a_syntax_error() {
    assert!(parse_tag("compound(ad+ferō").is_err());
    assert!(parse_tag("deponent)").is_err());
}

#[test]
fn tags_display_in_source_syntax() {
    for tag in ["deponent", "compound(ad+ferō)", "compound(sum)", "suppletive(a,b,c)"] {
        assert_eq!(parse_tag(tag).unwrap().to_string(), tag);
    }
}

#[test]
fn tag_queries_look_across_categories() {
    let verb = verb(
        r#"{"lemma": "hortor", "principal_parts": ["hortārī", "hortātus sum", "hortātum"],
            "conjugation": 1, "properties": {"general": ["deponent"]}}"#,
    );
    assert_eq!(verb.voice_class(), VoiceClass::Deponent);
}

// =========================================================================
// Verbs
// =========================================================================

#[test]
fn stems_of_a_regular_verb() {
    let verb = verb(
        r#"{"lemma": "amō", "principal_parts": ["amāre", "amāvī", "amātum"], "conjugation": 1}"#,
    );
    assert_eq!(verb.stems().present, "am");
    assert_eq!(verb.stems().perfect, "amāv");
    assert_eq!(verb.stems().supine, "amāt");
    assert_eq!(verb.voice_class(), VoiceClass::Active);
}

#[test]
fn verb_summary_line() {
    let verb = verb(
        r#"{"lemma": "amō", "principal_parts": ["amāre", "amāvī", "amātum"], "conjugation": 1,
            "properties": {"perfect": ["v_perfect"]}}"#,
    );
    insta::assert_snapshot!(verb.to_string(), @r"
    Verb: amō | Conj: 1 (Active) | Stems: P='am', Perf='amāv', Sup='amāt'
    Markers: v_perfect
    ");
}

#[test]
fn missing_conjugation_is_derived_from_infinitive() {
    let verb = verb(r#"{"lemma": "audiō", "principal_parts": ["audīre", "audīvī", "audītum"]}"#);
    assert_eq!(verb.conjugation(), Some(Conjugation::Fourth));

    let verb = self::verb(r#"{"lemma": "capiō", "principal_parts": ["capere", "cēpī", "captum"]}"#);
    assert_eq!(verb.conjugation(), Some(Conjugation::ThirdIo));
}

#[test]
fn out_of_range_conjugation_stays_unresolved() {
    let verb = verb(
        r#"{"lemma": "amō", "principal_parts": ["amāre", "amāvī", "amātum"], "conjugation": 9}"#,
    );
    assert_eq!(verb.conjugation(), None);
    assert!(verb.to_string().contains("Conj: ?"));
}

#[test]
fn record_round_trips_through_verb() {
    let record: VerbRecord = serde_json::from_str(
        r#"{"lemma": "auferō", "principal_parts": ["auferre", "abstulī", "ablātum"],
            "conjugation": 3, "properties": {"derivation": ["compound(ab+ferō)"]}}"#,
    )
    .unwrap();
    let verb = Verb::from_record(&record).unwrap();
    let rebuilt = Verb::from_record(&verb.to_record()).unwrap();
    assert_eq!(rebuilt.compound(), Some(("ab", "ferō")));
    assert_eq!(rebuilt.conjugation(), verb.conjugation());
    assert_eq!(rebuilt.principal_parts(), verb.principal_parts());
}

// =========================================================================
// Lookup
// =========================================================================

fn small_lexicon() -> Lexicon {
    Lexicon::load_str(
        r#"[
            {"lemma": "amō", "principal_parts": ["amāre", "amāvī", "amātum"], "conjugation": 1},
            {"lemma": "audiō", "principal_parts": ["audīre", "audīvī", "audītum"], "conjugation": 4,
             "properties": {"perfect": ["v_perfect"]}},
            {"lemma": "audeō", "principal_parts": ["audēre", "ausus sum", "ausum"], "conjugation": 2,
             "properties": {"semantic": ["semi_deponent"]}},
            {"lemma": "regō", "principal_parts": ["regere", "rēxī", "rēctum"], "conjugation": 3}
        ]"#,
    )
    .unwrap()
}

#[test]
fn lemmas_are_sorted() {
    let lexicon = small_lexicon();
    let lemmas: Vec<&str> = lexicon.lemmas().collect();
    assert_eq!(lemmas, ["amō", "audeō", "audiō", "regō"]);
}

#[test]
fn lookup_without_macrons() {
    let lexicon = small_lexicon();
    assert_eq!(lexicon.find_demacronized("rego").unwrap().lemma(), "regō");
    assert_eq!(lexicon.find_demacronized(" amō ").unwrap().lemma(), "amō");
    assert!(lexicon.find_demacronized("rogo").is_none());
}

#[test]
fn lookup_by_id() {
    let lexicon = small_lexicon();
    let id = LemmaId::from_lemma("audiō");
    assert_eq!(lexicon.get_by_id(id).unwrap().lemma(), "audiō");
    assert_eq!(lexicon.get("audiō").unwrap().id(), id);
    assert!(lexicon.get_by_id(LemmaId::from_lemma("audio")).is_none());
}

#[test]
fn suggestions_for_typos() {
    let lexicon = small_lexicon();
    assert_eq!(lexicon.suggest("audo"), ["audeō", "audiō", "amō"]);
    assert_eq!(lexicon.suggest("rega"), ["regō"]);
    assert!(lexicon.suggest("xyzzy").is_empty());
}

#[test]
fn tag_listing_and_filtering() {
    let lexicon = small_lexicon();
    let tags: Vec<String> = lexicon.tags().into_iter().collect();
    assert_eq!(tags, ["semi_deponent", "v_perfect"]);

    let filtered: Vec<&str> = lexicon
        .filter_by_tags(&["v_perfect"])
        .into_iter()
        .map(Verb::lemma)
        .collect();
    assert_eq!(filtered, ["audiō"]);
    assert_eq!(lexicon.filter_by_tags(&[]).len(), 4);
}
