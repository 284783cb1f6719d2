//! Periphrastic passive perfect: participle plus copula helper.

use conjugo_tables::{COPULA_INDICATIVE, COPULA_SUBJUNCTIVE, EndingRow, PerfectTense};

use crate::types::{Form, IndicativeForms, Paradigm, SubjunctiveForms, Tense};

/// The classical copula paradigm from the built-in tables.
///
/// Only the active finite branches are filled; they are what periphrastic
/// tenses draw their helpers from.
pub fn classical_copula() -> Paradigm {
    let [present, imperfect, future, perfect, pluperfect, future_perfect] =
        COPULA_INDICATIVE.each_ref().map(table_row);
    let [s_present, s_imperfect, s_perfect, s_pluperfect] =
        COPULA_SUBJUNCTIVE.each_ref().map(table_row);
    Paradigm {
        indicative_active: IndicativeForms {
            present,
            imperfect,
            future,
            perfect,
            pluperfect,
            future_perfect,
            ..IndicativeForms::default()
        },
        subjunctive_active: SubjunctiveForms {
            present: s_present,
            imperfect: s_imperfect,
            perfect: s_perfect,
            pluperfect: s_pluperfect,
            ..SubjunctiveForms::default()
        },
        ..Paradigm::default()
    }
}

fn table_row(row: &EndingRow) -> Tense {
    Tense::from_fn(|slot| Form::from_alternates(row[slot].iter().copied()))
}

/// One periphrastic tense over `supine_stem`, with helpers from `copula`.
pub fn periphrastic_tense(supine_stem: &str, tense: PerfectTense, copula: &Paradigm) -> Tense {
    if supine_stem.is_empty() {
        return Tense::placeholder();
    }
    let sources = helper_sources(tense, copula);
    let preference = tense.helper_preference();
    Tense::from_fn(|slot| {
        let participle = if slot < 3 {
            format!("{supine_stem}us")
        } else {
            format!("{supine_stem}ī")
        };
        let helpers = ranked_helpers(sources.map(|source| &source[slot]), preference);
        Form::from_alternates(
            helpers
                .into_iter()
                .map(|helper| format!("{participle} {helper}")),
        )
    })
}

/// Copula tenses whose forms serve as helpers for `tense`.
fn helper_sources(tense: PerfectTense, copula: &Paradigm) -> [&Tense; 2] {
    let indicative = &copula.indicative_active;
    let subjunctive = &copula.subjunctive_active;
    match tense {
        PerfectTense::PerfectIndicative => [&indicative.present, &indicative.perfect],
        PerfectTense::PluperfectIndicative => [&indicative.imperfect, &indicative.pluperfect],
        PerfectTense::FuturePerfectIndicative => [&indicative.future, &indicative.future_perfect],
        PerfectTense::PerfectSubjunctive => [&subjunctive.present, &subjunctive.perfect],
        PerfectTense::PluperfectSubjunctive => [&subjunctive.imperfect, &subjunctive.pluperfect],
    }
}

/// Distinct helpers ordered by `preference`; unlisted helpers keep their
/// relative order after every listed one.
fn ranked_helpers<'a>(forms: [&'a Form; 2], preference: &[&str]) -> Vec<&'a str> {
    let mut helpers: Vec<&str> = Vec::new();
    for helper in forms.into_iter().flat_map(Form::alternates) {
        if !helpers.contains(&helper.as_str()) {
            helpers.push(helper);
        }
    }
    helpers.sort_by_key(|helper| {
        preference
            .iter()
            .position(|preferred| preferred == helper)
            .unwrap_or(usize::MAX)
    });
    helpers
}

/// The five passive perfect-system tenses.
pub fn periphrastic_system(
    supine_stem: &str,
    copula: &Paradigm,
) -> (IndicativeForms, SubjunctiveForms) {
    let build = |tense| periphrastic_tense(supine_stem, tense, copula);
    (
        IndicativeForms {
            perfect: build(PerfectTense::PerfectIndicative),
            pluperfect: build(PerfectTense::PluperfectIndicative),
            future_perfect: build(PerfectTense::FuturePerfectIndicative),
            ..IndicativeForms::default()
        },
        SubjunctiveForms {
            perfect: build(PerfectTense::PerfectSubjunctive),
            pluperfect: build(PerfectTense::PluperfectSubjunctive),
            ..SubjunctiveForms::default()
        },
    )
}
