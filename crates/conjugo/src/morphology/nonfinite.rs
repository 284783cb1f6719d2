//! Infinitives, gerunds, supines and participles.

use conjugo_tables::{Conjugation, gerundive_theme, long_theme};

use crate::lexicon::{Verb, VoiceClass};
use crate::morphology::decline::{first_second, present_participle};
use crate::morphology::macron::demacronize;
use crate::morphology::perfect_system::perfect_infinitive;
use crate::morphology::stems::{drop_last_chars, first_alternate};
use crate::types::{Form, Gerund, Infinitives, NonFinite, Participles, Supine};

/// Build the non-finite forms of `verb` before any voice transform.
pub fn non_finite(verb: &Verb) -> NonFinite {
    NonFinite {
        infinitives: infinitives(verb),
        gerund: gerund(gerund_stem(verb).as_deref()),
        gerund_undus: gerund(undus_stem(verb).as_deref()),
        supine: supine(verb),
        participles: participles(verb),
    }
}

fn infinitives(verb: &Verb) -> Infinitives {
    let parts = verb.principal_parts();
    let stems = verb.stems();
    let class = verb.voice_class();
    let copula = verb.is_copula();

    let perfect_active = if class == VoiceClass::Active {
        perfect_infinitive(&stems.perfect)
    } else {
        Form::Placeholder
    };
    let perfect_passive = if copula || stems.supine.is_empty() {
        Form::Placeholder
    } else {
        compound_infinitive(&format!("{}us", stems.supine))
    };
    let future_active = stems
        .future_active_participle()
        .map_or(Form::Placeholder, |stem| {
            compound_infinitive(&format!("{stem}us"))
        });
    let supine = first_alternate(&parts.supine);
    let future_passive = if class == VoiceClass::Active && !copula && !supine.is_empty() {
        Form::single(format!("{supine} īrī"))
    } else {
        Form::Placeholder
    };

    Infinitives {
        present_active: Form::parse(&parts.infinitive),
        perfect_active,
        future_active,
        present_passive: present_passive_infinitive(verb),
        perfect_passive,
        future_passive,
    }
}

/// `amārī`, `regī`; non-deponents of the first and third conjugations add
/// the poetic `-ier` form.
fn present_passive_infinitive(verb: &Verb) -> Form {
    let stem = verb.stems().present.as_str();
    let infinitive = first_alternate(&verb.principal_parts().infinitive);
    let class = verb.voice_class();
    if verb.is_copula() || class == VoiceClass::SemiDeponent {
        return Form::Placeholder;
    }
    if stem.is_empty() || infinitive.is_empty() {
        return Form::Placeholder;
    }
    if class == VoiceClass::Deponent {
        return Form::single(infinitive);
    }
    let body = drop_last_chars(infinitive, 1);
    match verb.conjugation() {
        Some(Conjugation::First) => {
            Form::from_alternates([format!("{body}ī"), format!("{body}ier")])
        }
        Some(Conjugation::Third) => Form::from_alternates([format!("{stem}ī"), format!("{stem}ier")]),
        Some(Conjugation::ThirdIo) => Form::single(format!("{stem}ī")),
        _ => Form::single(format!("{body}ī")),
    }
}

/// `amātus, -a, -um esse` with its `fore` alternate.
fn compound_infinitive(participle: &str) -> Form {
    Form::from_alternates([
        format!("{participle}, -a, -um esse"),
        format!("{participle}, -a, -um fore"),
    ])
}

/// Present stem plus the gerundive theme and `nd` (`amand`, `capiend`).
fn gerund_stem(verb: &Verb) -> Option<String> {
    let conjugation = verb.conjugation()?;
    let stem = verb.stems().present.as_str();
    (!verb.is_copula() && !stem.is_empty())
        .then(|| format!("{stem}{}nd", gerundive_theme(conjugation)))
}

/// The older `-und-` stem of the 3-iō and fourth conjugations (`capiund`).
fn undus_stem(verb: &Verb) -> Option<String> {
    let conjugation = verb.conjugation()?;
    let stem = verb.stems().present.as_str();
    let eligible = matches!(conjugation, Conjugation::ThirdIo | Conjugation::Fourth);
    (eligible && !verb.is_copula() && !stem.is_empty()).then(|| format!("{stem}iund"))
}

fn gerund(stem: Option<&str>) -> Gerund {
    let Some(stem) = stem else {
        return Gerund::default();
    };
    let [genitive, dative, accusative, ablative] =
        ["ī", "ō", "um", "ō"].map(|ending| Form::single(format!("{stem}{ending}")));
    Gerund {
        genitive,
        dative,
        accusative,
        ablative,
    }
}

fn supine(verb: &Verb) -> Supine {
    let ablative = if verb.is_copula() {
        None
    } else {
        verb.stems().supine_ablative()
    };
    Supine {
        accusative: Form::parse(&verb.principal_parts().supine),
        ablative: ablative.map_or(Form::Placeholder, Form::single),
    }
}

fn participles(verb: &Verb) -> Participles {
    let stems = verb.stems();
    let copula = verb.is_copula();

    let present_active = verb.conjugation().and_then(|conjugation| {
        let stem = stems.present.as_str();
        if copula || stem.is_empty() {
            return None;
        }
        let theme = long_theme(conjugation);
        Some(present_participle(
            &format!("{stem}{theme}ns"),
            &format!("{stem}{}nt", demacronize(theme)),
        ))
    });
    let perfect_passive = (!copula && !stems.supine.is_empty())
        .then(|| first_second(&stems.supine, &format!("{}us", stems.supine)));
    let future_active = stems
        .future_active_participle()
        .map(|stem| first_second(&stem, &format!("{stem}us")));
    let gerundive = gerund_stem(verb).map(|stem| first_second(&stem, &format!("{stem}us")));
    let gerundive_undus = undus_stem(verb).map(|stem| first_second(&stem, &format!("{stem}us")));

    Participles {
        present_active,
        perfect_passive,
        future_active,
        gerundive,
        gerundive_undus,
    }
}
