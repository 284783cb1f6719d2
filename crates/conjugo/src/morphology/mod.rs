//! Paradigm generation: stems, the finite and non-finite systems, voice
//! transforms and the passes that run over a finished paradigm.

pub mod archaic;
pub mod assimilation;
pub mod compound;
mod conjugator;
pub mod decline;
pub mod derived;
pub mod error;
pub mod imperative;
pub mod macron;
pub mod merge;
pub mod nonfinite;
pub mod perfect_system;
pub mod periphrastic;
pub mod present_system;
pub mod stems;
pub mod syncope;
pub mod voice;

use conjugo_tables::{PerfectTense, Voice};

pub use conjugator::Conjugator;
pub use derived::{Derivation, DerivedVerb};
pub use error::MergeError;

use crate::lexicon::Verb;
use crate::types::{IndicativeForms, Paradigm, SubjunctiveForms};
use imperative::imperatives;
use nonfinite::non_finite;
use perfect_system::perfect_tense;
use periphrastic::periphrastic_system;
use present_system::present_system;

/// Generate the rule-based paradigm of `verb`.
///
/// Covers both voices of the present and perfect systems, imperatives and
/// non-finite forms, followed by the voice transform and the syncopated
/// perfects. `copula` supplies the helpers of periphrastic tenses.
/// Irregular overrides and archaic branches are not applied here.
pub fn regular_paradigm(verb: &Verb, copula: &Paradigm) -> Paradigm {
    let active = present_system(verb, Voice::Active);
    let passive = present_system(verb, Voice::Passive);
    let perfect = verb.stems().perfect.as_str();
    let (perfect_indicative, perfect_subjunctive) = if verb.is_copula() {
        (IndicativeForms::default(), SubjunctiveForms::default())
    } else {
        periphrastic_system(&verb.stems().supine, copula)
    };

    let mut paradigm = Paradigm {
        indicative_active: IndicativeForms {
            present: active.present,
            imperfect: active.imperfect,
            future: active.future,
            perfect: perfect_tense(perfect, PerfectTense::PerfectIndicative),
            pluperfect: perfect_tense(perfect, PerfectTense::PluperfectIndicative),
            future_perfect: perfect_tense(perfect, PerfectTense::FuturePerfectIndicative),
            ..IndicativeForms::default()
        },
        subjunctive_active: SubjunctiveForms {
            present: active.present_subjunctive,
            imperfect: active.imperfect_subjunctive,
            perfect: perfect_tense(perfect, PerfectTense::PerfectSubjunctive),
            pluperfect: perfect_tense(perfect, PerfectTense::PluperfectSubjunctive),
            ..SubjunctiveForms::default()
        },
        indicative_passive: IndicativeForms {
            present: passive.present,
            imperfect: passive.imperfect,
            future: passive.future,
            ..perfect_indicative
        },
        subjunctive_passive: SubjunctiveForms {
            present: passive.present_subjunctive,
            imperfect: passive.imperfect_subjunctive,
            ..perfect_subjunctive
        },
        imperatives: imperatives(verb),
        non_finite: non_finite(verb),
    };
    voice::apply(&mut paradigm, verb.voice_class());
    syncope::apply(&mut paradigm, verb);
    paradigm
}
