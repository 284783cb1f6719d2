//! Present, imperfect and future tenses built on the present stem.

use conjugo_tables::{
    Conjugation, EndingRow, Voice, bo_future_endings, infinitive_theme, long_theme,
    person_endings, present_connecting_vowel, present_subjunctive_theme,
};

use crate::lexicon::{Verb, VoiceClass};
use crate::morphology::macron::macronize;
use crate::morphology::stems::first_alternate;
use crate::types::{Form, Tense};

/// The five tenses of the present system in one voice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresentSystem {
    pub present: Tense,
    pub imperfect: Tense,
    pub future: Tense,
    pub present_subjunctive: Tense,
    pub imperfect_subjunctive: Tense,
}

/// Build the present system of `verb` in `voice`.
///
/// All placeholders when the class is unresolved, the present stem is
/// empty, or the verb is tagged `defective_present`. The copula and
/// semi-deponents have no passive present system.
pub fn present_system(verb: &Verb, voice: Voice) -> PresentSystem {
    let Some(conjugation) = verb.conjugation() else {
        return PresentSystem::default();
    };
    let stem = verb.stems().present.as_str();
    if stem.is_empty() || verb.tags().is_defective_present() {
        return PresentSystem::default();
    }
    let no_passive = verb.is_copula() || verb.voice_class() == VoiceClass::SemiDeponent;
    if voice == Voice::Passive && no_passive {
        return PresentSystem::default();
    }

    let endings = person_endings(voice);
    PresentSystem {
        present: present_indicative(verb.lemma(), stem, conjugation, voice),
        imperfect: with_endings(
            &format!("{stem}{}bā", long_theme(conjugation)),
            endings,
        ),
        future: future_indicative(stem, conjugation, voice),
        present_subjunctive: with_endings(
            &format!("{stem}{}", present_subjunctive_theme(conjugation)),
            endings,
        ),
        imperfect_subjunctive: with_endings(
            &imperfect_subjunctive_base(verb, stem, conjugation),
            endings,
        ),
    }
}

fn present_indicative(lemma: &str, stem: &str, conjugation: Conjugation, voice: Voice) -> Tense {
    let endings = person_endings(voice);
    Tense::from_fn(|slot| {
        if slot == 0 {
            return Form::single(macronize(&first_singular(lemma, voice)));
        }
        let base = format!(
            "{stem}{}",
            present_connecting_vowel(conjugation, voice, slot)
        );
        attach(&base, endings[slot])
    })
}

/// The lemma, or for the passive the lemma with `-ō` turned into `-or`.
fn first_singular(lemma: &str, voice: Voice) -> String {
    match (voice, lemma.strip_suffix('ō')) {
        (Voice::Passive, Some(stem)) => format!("{stem}or"),
        _ => lemma.to_string(),
    }
}

/// The present active infinitive with its final `e` lengthened (`amārē-`).
/// Deponents rebuild the active infinitive from stem and theme.
fn imperfect_subjunctive_base(verb: &Verb, stem: &str, conjugation: Conjugation) -> String {
    let rebuilt = || format!("{stem}{}rē", infinitive_theme(conjugation));
    if verb.voice_class() == VoiceClass::Deponent {
        return rebuilt();
    }
    match first_alternate(&verb.principal_parts().infinitive).strip_suffix('e') {
        Some(body) => format!("{body}ē"),
        None => rebuilt(),
    }
}

fn future_indicative(stem: &str, conjugation: Conjugation, voice: Voice) -> Tense {
    match conjugation {
        Conjugation::First | Conjugation::Second => with_endings(
            &format!("{stem}{}", infinitive_theme(conjugation)),
            bo_future_endings(voice),
        ),
        Conjugation::Third | Conjugation::ThirdIo | Conjugation::Fourth => {
            let infix = if conjugation == Conjugation::Third {
                ""
            } else {
                "i"
            };
            let endings = person_endings(voice);
            Tense::from_fn(|slot| {
                let vowel = if slot == 0 { "a" } else { "ē" };
                attach(&format!("{stem}{infix}{vowel}"), endings[slot])
            })
        }
    }
}

/// `base` plus each alternate ending of one slot, macronized.
pub(crate) fn attach(base: &str, endings: &[&str]) -> Form {
    Form::from_alternates(
        endings
            .iter()
            .map(|ending| macronize(&format!("{base}{ending}"))),
    )
}

/// `base` plus a full ending row, macronized.
pub(crate) fn with_endings(base: &str, endings: &EndingRow) -> Tense {
    Tense::from_fn(|slot| attach(base, endings[slot]))
}
