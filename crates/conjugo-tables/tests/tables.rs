use std::collections::HashSet;

use conjugo_tables::{
    ASSIMILATIONS, COPULA_INDICATIVE, COPULA_SUBJUNCTIVE, CARRY_EXCEPTIONS, Conjugation,
    IRREGULAR_INFINITIVES, PerfectTense, Voice, assimilated_prefix, bo_future_theme,
    irregular_infinitive, irregular_infinitive_for_lemma, lengthen, person_endings,
    present_connecting_vowel, shorten,
};

#[test]
fn conjugation_labels_round_trip() {
    for conjugation in Conjugation::ALL {
        assert_eq!(Conjugation::from_label(conjugation.label()), Some(conjugation));
    }
}

#[test]
fn numeric_third_io_label_is_accepted() {
    assert_eq!(Conjugation::from_label("3.5"), Some(Conjugation::ThirdIo));
    assert_eq!(Conjugation::from_label(" 2 "), Some(Conjugation::Second));
    assert_eq!(Conjugation::from_label("5"), None);
    assert_eq!(Conjugation::from_label(""), None);
}

#[test]
fn every_ending_row_has_an_ending_in_each_slot() {
    let mut rows = vec![person_endings(Voice::Active), person_endings(Voice::Passive)];
    for tense in PerfectTense::ALL {
        rows.push(tense.endings());
        rows.push(tense.syncopated_endings());
    }
    for row in rows {
        for slot in row {
            assert!(!slot.is_empty());
            assert!(slot.iter().all(|ending| !ending.is_empty()));
        }
    }
}

#[test]
fn passive_second_singular_has_two_alternates() {
    assert_eq!(person_endings(Voice::Passive)[1], &["ris", "re"]);
}

#[test]
fn third_conjugation_connecting_vowels() {
    let active: Vec<&str> = (1..6)
        .map(|slot| present_connecting_vowel(Conjugation::Third, Voice::Active, slot))
        .collect();
    assert_eq!(active, ["i", "i", "i", "i", "u"]);

    let passive: Vec<&str> = (1..6)
        .map(|slot| present_connecting_vowel(Conjugation::Third, Voice::Passive, slot))
        .collect();
    assert_eq!(passive, ["e", "i", "i", "i", "u"]);

    let io_passive: Vec<&str> = (1..6)
        .map(|slot| present_connecting_vowel(Conjugation::ThirdIo, Voice::Passive, slot))
        .collect();
    assert_eq!(io_passive, ["e", "i", "i", "i", "iu"]);
}

#[test]
fn bo_future_only_for_third_and_fourth() {
    assert_eq!(bo_future_theme(Conjugation::First), None);
    assert_eq!(bo_future_theme(Conjugation::Second), None);
    assert_eq!(bo_future_theme(Conjugation::Third), Some("ē"));
    assert_eq!(bo_future_theme(Conjugation::ThirdIo), Some("iē"));
    assert_eq!(bo_future_theme(Conjugation::Fourth), Some("ī"));
}

#[test]
fn helper_preferences_start_with_classical_forms() {
    assert_eq!(PerfectTense::PerfectIndicative.helper_preference()[0], "sum");
    assert_eq!(PerfectTense::PluperfectIndicative.helper_preference()[0], "eram");
    assert_eq!(PerfectTense::FuturePerfectIndicative.helper_preference()[0], "erō");
    assert_eq!(PerfectTense::PerfectSubjunctive.helper_preference()[0], "sim");
    assert_eq!(PerfectTense::PluperfectSubjunctive.helper_preference()[0], "essem");
}

#[test]
fn helper_preferences_have_no_duplicates() {
    for tense in PerfectTense::ALL {
        let list = tense.helper_preference();
        let unique: HashSet<&str> = list.iter().copied().collect();
        assert_eq!(unique.len(), list.len(), "{tense:?}");
    }
}

#[test]
fn copula_helpers_are_all_ranked() {
    let indicative_sources = [
        (PerfectTense::PerfectIndicative, [0, 3]),
        (PerfectTense::PluperfectIndicative, [1, 4]),
        (PerfectTense::FuturePerfectIndicative, [2, 5]),
    ];
    for (tense, sources) in indicative_sources {
        let ranked = tense.helper_preference();
        for source in sources {
            for slot in COPULA_INDICATIVE[source] {
                for helper in slot {
                    assert!(ranked.contains(helper), "{helper} missing from {tense:?}");
                }
            }
        }
    }
    let subjunctive_sources = [
        (PerfectTense::PerfectSubjunctive, [0, 2]),
        (PerfectTense::PluperfectSubjunctive, [1, 3]),
    ];
    for (tense, sources) in subjunctive_sources {
        let ranked = tense.helper_preference();
        for source in sources {
            for slot in COPULA_SUBJUNCTIVE[source] {
                for helper in slot {
                    assert!(ranked.contains(helper), "{helper} missing from {tense:?}");
                }
            }
        }
    }
}

#[test]
fn assimilation_lookup() {
    assert_eq!(assimilated_prefix("ad", 'f'), Some("af"));
    assert_eq!(assimilated_prefix("ad", 'q'), Some("ac"));
    assert_eq!(assimilated_prefix("in", 'p'), Some("im"));
    assert_eq!(assimilated_prefix("in", 'r'), Some("ir"));
    assert_eq!(assimilated_prefix("con", 'l'), Some("col"));
    assert_eq!(assimilated_prefix("ab", 'f'), None);
    assert_eq!(assimilated_prefix("per", 'f'), None);
}

#[test]
fn assimilation_table_has_one_entry_per_initial() {
    let mut seen = HashSet::new();
    for (prefix, initials, _) in ASSIMILATIONS {
        for initial in initials.chars() {
            assert!(seen.insert((*prefix, initial)), "{prefix}+{initial}");
        }
    }
}

#[test]
fn carry_exceptions_cover_ab_fer() {
    assert!(CARRY_EXCEPTIONS.contains(&("ab", "fer", "au")));
}

#[test]
fn irregular_infinitive_lookups_agree() {
    for entry in IRREGULAR_INFINITIVES {
        assert_eq!(irregular_infinitive(entry.infinitive), Some(entry));
        assert_eq!(irregular_infinitive_for_lemma(entry.lemma), Some(entry));
    }
    assert_eq!(irregular_infinitive("amāre"), None);
}

#[test]
fn vowel_length_pairs() {
    assert_eq!(shorten('ā'), Some('a'));
    assert_eq!(shorten('Ō'), Some('O'));
    assert_eq!(shorten('a'), None);
    assert_eq!(lengthen('i'), Some('ī'));
    assert_eq!(lengthen('r'), None);
}
