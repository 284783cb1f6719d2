//! Contracted `v`-perfects (`amāstī` beside `amāvistī`).

use conjugo_tables::{EndingRow, PerfectTense, SYNCOPATED_INFINITIVE_ENDING};

use crate::lexicon::{Verb, VoiceClass};
use crate::morphology::stems::drop_last_chars;
use crate::types::{Form, Paradigm, Tense};

/// Append syncopated alternates to the active perfect system of `verb`.
///
/// Only verbs tagged `v_perfect` with a perfect stem are affected. The full
/// form stays the preferred alternate; a placeholder on either side leaves
/// the slot unchanged.
pub fn apply(paradigm: &mut Paradigm, verb: &Verb) {
    let perfect = verb.stems().perfect.as_str();
    if !verb.tags().has_v_perfect() || perfect.is_empty() {
        return;
    }
    let stem = drop_last_chars(perfect, 1);

    let indicative = &mut paradigm.indicative_active;
    let subjunctive = &mut paradigm.subjunctive_active;
    for (target, tense) in [
        (&mut indicative.perfect, PerfectTense::PerfectIndicative),
        (&mut indicative.pluperfect, PerfectTense::PluperfectIndicative),
        (&mut indicative.future_perfect, PerfectTense::FuturePerfectIndicative),
        (&mut subjunctive.perfect, PerfectTense::PerfectSubjunctive),
        (&mut subjunctive.pluperfect, PerfectTense::PluperfectSubjunctive),
    ] {
        *target = merge(target, &syncopated_tense(stem, tense.syncopated_endings()));
    }

    if verb.voice_class() == VoiceClass::Active {
        let infinitive = &mut paradigm.non_finite.infinitives.perfect_active;
        let syncopated = Form::single(format!("{stem}{SYNCOPATED_INFINITIVE_ENDING}"));
        *infinitive = merge_form(infinitive, &syncopated);
    }
}

/// Syncopated forms of one tense. A stem ending in `l` or `r` takes a
/// linking `u` before an `r`-initial ending.
pub fn syncopated_tense(stem: &str, endings: &EndingRow) -> Tense {
    let linking = if stem.ends_with(['l', 'r']) { "u" } else { "" };
    Tense::from_fn(|slot| {
        Form::from_alternates(endings[slot].iter().map(|ending| {
            if ending.starts_with('r') {
                format!("{stem}{linking}{ending}")
            } else {
                format!("{stem}{ending}")
            }
        }))
    })
}

fn merge(full: &Tense, syncopated: &Tense) -> Tense {
    Tense::from_fn(|slot| merge_form(&full[slot], &syncopated[slot]))
}

fn merge_form(full: &Form, syncopated: &Form) -> Form {
    if syncopated.is_placeholder() {
        return full.clone();
    }
    full.with_alternates(syncopated.alternates().iter().cloned())
}
