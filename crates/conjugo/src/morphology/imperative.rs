//! Present and future imperatives.

use conjugo_tables::{
    Conjugation, FACIO_FUTURE_PASSIVE_IMPERATIVE, FACIO_LEMMA, FACIO_PRESENT_PASSIVE_IMPERATIVE,
    IRREGULAR_IMPERATIVES, imperative_plural_theme, imperative_theme, infinitive_theme,
};

use crate::lexicon::{Verb, VoiceClass};
use crate::morphology::assimilation::prefix_word;
use crate::morphology::macron::macronize;
use crate::morphology::stems::{drop_last_chars, first_alternate};
use crate::types::{Form, ImperativeRow, Imperatives};

/// Build the four imperative rows of `verb`.
///
/// Deponents only get passive rows here; the voice transform moves them to
/// the active side. The copula and semi-deponents have no passive rows.
pub fn imperatives(verb: &Verb) -> Imperatives {
    let Some(conjugation) = verb.conjugation() else {
        return Imperatives::default();
    };
    let stem = verb.stems().present.as_str();
    if stem.is_empty() {
        return Imperatives::default();
    }

    let mut rows = Imperatives::default();
    let class = verb.voice_class();
    if class != VoiceClass::Deponent {
        rows.present_active = present_active(verb, stem, conjugation);
        rows.future_active = future_row(stem, conjugation, ["tō", "tō", "tōte", "ntō"]);
    }
    if !verb.is_copula() && class != VoiceClass::SemiDeponent {
        if verb.lemma() == FACIO_LEMMA {
            rows.present_passive = fixed_row(FACIO_PRESENT_PASSIVE_IMPERATIVE);
            rows.future_passive = fixed_row(FACIO_FUTURE_PASSIVE_IMPERATIVE);
        } else {
            rows.present_passive = present_passive(verb, stem, conjugation);
            rows.future_passive = future_row(stem, conjugation, ["tor", "tor", "", "ntor"]);
        }
    }
    rows
}

fn present_active(verb: &Verb, stem: &str, conjugation: Conjugation) -> ImperativeRow {
    let (singular, plural) = match short_imperative(verb) {
        Some(short) => short,
        None => {
            let singular = if conjugation.is_third() {
                format!("{stem}e")
            } else {
                let infinitive = first_alternate(&verb.principal_parts().infinitive);
                drop_last_chars(infinitive, 2).to_string()
            };
            (singular, format!("{stem}{}te", imperative_theme(conjugation)))
        }
    };
    ImperativeRow::new([
        Form::single(macronize(&singular)),
        Form::Placeholder,
        Form::single(macronize(&plural)),
        Form::Placeholder,
    ])
}

/// Short imperatives (`dīc`, `fer`) of the verb or of the base it compounds.
///
/// Compounds of `faciō` weaken the root vowel and take the regular form
/// (`affice`), so only the other bases carry over.
fn short_imperative(verb: &Verb) -> Option<(String, String)> {
    let lookup = |lemma: &str| {
        IRREGULAR_IMPERATIVES
            .iter()
            .find(|(irregular, _, _)| *irregular == lemma)
            .map(|(_, singular, plural)| (*singular, *plural))
    };
    if let Some((singular, plural)) = lookup(verb.lemma()) {
        return Some((singular.to_string(), plural.to_string()));
    }
    let (prefix, base) = verb.compound()?;
    if base == FACIO_LEMMA {
        return None;
    }
    let (singular, plural) = lookup(base)?;
    Some((prefix_word(prefix, singular), prefix_word(prefix, plural)))
}

fn present_passive(verb: &Verb, stem: &str, conjugation: Conjugation) -> ImperativeRow {
    let singular = if verb.voice_class() == VoiceClass::Deponent {
        macronize(&format!("{stem}{}re", infinitive_theme(conjugation)))
    } else {
        first_alternate(&verb.principal_parts().infinitive).to_string()
    };
    let plural = macronize(&format!("{stem}{}minī", imperative_theme(conjugation)));
    ImperativeRow::new([
        Form::single(singular),
        Form::Placeholder,
        Form::single(plural),
        Form::Placeholder,
    ])
}

/// A future row: the first three slots use the singular theme, the last
/// the plural theme before `-nt-`. An empty ending leaves its slot a
/// placeholder.
fn future_row(stem: &str, conjugation: Conjugation, endings: [&str; 4]) -> ImperativeRow {
    let theme = imperative_theme(conjugation);
    let plural_theme = imperative_plural_theme(conjugation);
    ImperativeRow::from_fn(|slot| {
        if endings[slot].is_empty() {
            return Form::Placeholder;
        }
        let theme = if slot == 3 { plural_theme } else { theme };
        Form::single(macronize(&format!("{stem}{theme}{}", endings[slot])))
    })
}

fn fixed_row(forms: [&str; 4]) -> ImperativeRow {
    ImperativeRow::new(forms.map(Form::parse))
}
