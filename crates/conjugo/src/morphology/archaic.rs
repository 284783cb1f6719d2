//! Archaic and theoretical formations: the sigmatic future (`faxō`), the
//! aorist subjunctive (`faxim`), the optative and the `-bō` future of the
//! third and fourth conjugations.
//!
//! These branches are attached to a finished paradigm and are never
//! subject to the irregular overrides.

use std::collections::BTreeSet;

use conjugo_tables::{
    AORIST_S_LOSS_CONSONANTS, AORIST_SUBJUNCTIVE_ENDINGS, APOPHONIC_SIGMATIC_LEMMA,
    APOPHONIC_SIGMATIC_STEM, Conjugation, EndingRow, GO_LEMMA, OPTATIVE_STEMS,
    SIGMATIC_EXCEPTIONS, SIGMATIC_FUTURE_ENDINGS, Voice, bo_future_endings, bo_future_theme,
    infinitive_theme, lengthen, person_endings,
};

use crate::lexicon::{Verb, VoiceClass};
use crate::morphology::assimilation::prefix_word;
use crate::morphology::present_system::with_endings;
use crate::morphology::stems::drop_last_chars;
use crate::types::{Form, Paradigm, Tense};

/// Attach every archaic branch `verb` forms. Branches that are not
/// generated are left as they are.
pub fn attach(paradigm: &mut Paradigm, verb: &Verb) {
    if let Some(tense) = sigmatic_future(verb) {
        paradigm.indicative_active.sigmatic_future = Some(tense);
    }
    if let Some(tense) = aorist_subjunctive(verb) {
        paradigm.subjunctive_active.aorist = Some(tense);
    }
    if let Some(tense) = optative(verb) {
        paradigm.subjunctive_active.optative = Some(tense);
    }
    if verb.voice_class() == VoiceClass::Deponent {
        // A deponent's active meaning is carried by passive forms, as in its
        // regular future (`sequar`), so the active slot takes `sequēbor`.
        if let Some(tense) = bo_future(verb, Voice::Passive) {
            paradigm.indicative_active.bo_future = Some(tense);
        }
    } else {
        if let Some(tense) = bo_future(verb, Voice::Active) {
            paradigm.indicative_active.bo_future = Some(tense);
        }
        if let Some(tense) = bo_future(verb, Voice::Passive) {
            paradigm.indicative_passive.bo_future = Some(tense);
        }
    }
}

/// Present stem with a nasal infix removed, for verbs tagged
/// `no_infix_perfect` (`vinc` gives `vīc`).
///
/// The last `n` or `m` before the final character is dropped and a short
/// vowel in front of it lengthened.
pub fn true_root(verb: &Verb) -> String {
    let stem = verb.stems().present.as_str();
    if !verb.tags().has_no_infix_perfect() {
        return stem.to_string();
    }
    let mut chars: Vec<char> = stem.chars().collect();
    let Some(nasal) = chars
        .iter()
        .take(chars.len().saturating_sub(1))
        .rposition(|c| matches!(c, 'n' | 'm'))
    else {
        return stem.to_string();
    };
    chars.remove(nasal);
    if let Some(index) = nasal.checked_sub(1)
        && let Some(long) = lengthen(chars[index])
    {
        chars[index] = long;
    }
    chars.into_iter().collect()
}

/// Every sigmatic stem of `verb`, sorted and without duplicates.
pub fn sigmatic_stems(verb: &Verb) -> Vec<String> {
    let stem = verb.stems().present.as_str();
    let compound = verb.compound();
    let base = compound.map_or(verb.lemma(), |(_, base)| base);

    if base == APOPHONIC_SIGMATIC_LEMMA {
        return match compound {
            None => vec![APOPHONIC_SIGMATIC_STEM.to_string()],
            Some(_) => vec![format!("{}ss", drop_last_chars(stem, 1))],
        };
    }
    if let Some((_, sigmatic)) = SIGMATIC_EXCEPTIONS.iter().find(|(lemma, _)| *lemma == base) {
        let prefix = compound.map_or("", |(prefix, _)| prefix);
        return vec![prefix_word(prefix, sigmatic)];
    }

    let Some(conjugation) = verb.conjugation() else {
        return Vec::new();
    };
    let stems: BTreeSet<String> = match conjugation {
        Conjugation::First | Conjugation::Second | Conjugation::Fourth => {
            BTreeSet::from([format!("{stem}{}ss", infinitive_theme(conjugation))])
        }
        Conjugation::Third | Conjugation::ThirdIo => consonant_sigmatic_stems(&true_root(verb)),
    };
    stems.into_iter().collect()
}

/// Sound changes of `s` after a consonant-final root.
fn consonant_sigmatic_stems(root: &str) -> BTreeSet<String> {
    let without = |count: usize| drop_last_chars(root, count);
    let ends_with_any = |endings: &[&str]| endings.iter().any(|ending| root.ends_with(ending));

    let stems = if ends_with_any(&["rr", "ll"]) {
        vec![format!("{}s", without(1))]
    } else if root.ends_with("qu") {
        vec![root.to_string(), format!("{}x", without(2))]
    } else if root.ends_with('r') {
        vec![format!("{}rr", without(1)), format!("{}ss", without(1))]
    } else if root.ends_with("mn") {
        vec![format!("{}ps", without(1))]
    } else if root.ends_with('m') {
        vec![format!("{root}ps")]
    } else if root.ends_with('b') {
        vec![format!("{}ps", without(1))]
    } else if root.ends_with("tt") {
        vec![format!("{}ss", without(2))]
    } else if ends_with_any(&["lv", "rv"]) {
        vec![format!("{}s", without(1))]
    } else if root.ends_with('x') {
        vec![root.to_string()]
    } else if ends_with_any(&["rt", "lt"]) {
        vec![format!("{}s", without(1))]
    } else if root.ends_with(['g', 'c', 'h']) {
        vec![format!("{}x", without(1))]
    } else if root.ends_with(['d', 't']) {
        vec![format!("{}ss", without(1))]
    } else {
        vec![format!("{root}s")]
    };
    stems.into_iter().collect()
}

/// Whether the sigmatic formations are suppressed for `verb`.
fn sigmatic_blocked(verb: &Verb) -> bool {
    let tags = verb.tags();
    tags.is_inchoative()
        || tags.is_desiderative()
        || verb.lemma() == GO_LEMMA
        || verb.stems().present.is_empty()
}

/// The sigmatic future, one alternate per stem and ending.
pub fn sigmatic_future(verb: &Verb) -> Option<Tense> {
    if sigmatic_blocked(verb) {
        return None;
    }
    let stems = sigmatic_stems(verb);
    if stems.is_empty() {
        return None;
    }
    Some(over_stems(&stems, &SIGMATIC_FUTURE_ENDINGS, |stem, ending| {
        format!("{stem}{ending}")
    }))
}

/// The aorist subjunctive (`faxim`, `dīxīs`).
///
/// A stem already ending in `s` or `x` absorbs the mood's `s`; elsewhere an
/// `s` between one of `r u m n q` and `i` is lost.
pub fn aorist_subjunctive(verb: &Verb) -> Option<Tense> {
    if sigmatic_blocked(verb) {
        return None;
    }
    let stems = sigmatic_stems(verb);
    if stems.is_empty() {
        return None;
    }
    Some(over_stems(&stems, &AORIST_SUBJUNCTIVE_ENDINGS, |stem, ending| {
        if stem.ends_with(['s', 'x']) {
            format!("{stem}{}", ending.strip_prefix('s').unwrap_or(ending))
        } else {
            drop_aorist_s(&format!("{stem}{ending}"))
        }
    }))
}

fn drop_aorist_s(form: &str) -> String {
    let chars: Vec<char> = form.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(index, &c)| {
            let dropped = c == 's'
                && index > 0
                && AORIST_S_LOSS_CONSONANTS.contains(&chars[index - 1])
                && chars.get(index + 1).is_some_and(|next| matches!(next, 'i' | 'ī'));
            !dropped
        })
        .map(|(_, &c)| c)
        .collect()
}

fn over_stems(
    stems: &[String],
    endings: &EndingRow,
    mut build: impl FnMut(&str, &str) -> String,
) -> Tense {
    Tense::from_fn(|slot| {
        let mut alternates = Vec::new();
        for stem in stems {
            for &ending in endings[slot] {
                alternates.push(build(stem.as_str(), ending));
            }
        }
        Form::from_alternates(alternates)
    })
}

/// The theoretical optative (`amēm`, `sīm`), from the exception table or
/// the first and second conjugation patterns.
pub fn optative(verb: &Verb) -> Option<Tense> {
    let stem = verb.stems().present.as_str();
    if verb.tags().is_inchoative() || stem.is_empty() {
        return None;
    }
    let optative_stem = match OPTATIVE_STEMS
        .iter()
        .find(|(lemma, _)| *lemma == verb.lemma())
    {
        Some((_, optative_stem)) => (*optative_stem).to_string(),
        None => match verb.conjugation()? {
            Conjugation::First => format!("{stem}ē"),
            Conjugation::Second => format!("{stem}eī"),
            _ => return None,
        },
    };
    Some(with_endings(&optative_stem, person_endings(Voice::Active)))
}

/// The `-bō` future of the third and fourth conjugations (`audībō`).
pub fn bo_future(verb: &Verb, voice: Voice) -> Option<Tense> {
    let stem = verb.stems().present.as_str();
    if stem.is_empty() || verb.lemma() == GO_LEMMA {
        return None;
    }
    let theme = bo_future_theme(verb.conjugation()?)?;
    Some(with_endings(&format!("{stem}{theme}"), bo_future_endings(voice)))
}
