//! Deponent and semi-deponent voice transforms.

use std::mem;

use crate::lexicon::VoiceClass;
use crate::types::{Form, ImperativeRow, Paradigm};

/// Rewrite `paradigm` for the verb's voice class. Active verbs are left
/// untouched.
pub fn apply(paradigm: &mut Paradigm, class: VoiceClass) {
    match class {
        VoiceClass::Active => {}
        VoiceClass::Deponent => deponent(paradigm),
        VoiceClass::SemiDeponent => semi_deponent(paradigm),
    }
}

/// Passive forms with active meaning: every passive form moves to the
/// active side and the passive side is left empty.
fn deponent(paradigm: &mut Paradigm) {
    paradigm.indicative_active = mem::take(&mut paradigm.indicative_passive);
    paradigm.subjunctive_active = mem::take(&mut paradigm.subjunctive_passive);

    let imperatives = &mut paradigm.imperatives;
    imperatives.present_active = mem::take(&mut imperatives.present_passive);
    imperatives.future_active = mem::take(&mut imperatives.future_passive);

    let infinitives = &mut paradigm.non_finite.infinitives;
    infinitives.present_active = mem::take(&mut infinitives.present_passive);
    infinitives.perfect_active = mem::take(&mut infinitives.perfect_passive);
    infinitives.future_passive = Form::Placeholder;
}

/// Active present system, passive perfect system with active meaning.
fn semi_deponent(paradigm: &mut Paradigm) {
    let indicative = mem::take(&mut paradigm.indicative_passive);
    let active = &mut paradigm.indicative_active;
    active.perfect = indicative.perfect;
    active.pluperfect = indicative.pluperfect;
    active.future_perfect = indicative.future_perfect;

    let subjunctive = mem::take(&mut paradigm.subjunctive_passive);
    let active = &mut paradigm.subjunctive_active;
    active.perfect = subjunctive.perfect;
    active.pluperfect = subjunctive.pluperfect;

    let infinitives = &mut paradigm.non_finite.infinitives;
    infinitives.perfect_active = mem::take(&mut infinitives.perfect_passive);
    infinitives.present_passive = Form::Placeholder;
    infinitives.future_passive = Form::Placeholder;

    paradigm.imperatives.present_passive = ImperativeRow::placeholder();
    paradigm.imperatives.future_passive = ImperativeRow::placeholder();
}
