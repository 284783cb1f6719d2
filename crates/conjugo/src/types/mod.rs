mod declension;
mod form;
mod lemma_id;
mod paradigm;
mod slots;

pub use declension::{CaseTable, Declension};
pub use form::Form;
pub use lemma_id::LemmaId;
pub use paradigm::{
    Branch, Gerund, Imperatives, IndicativeForms, Infinitives, NonFinite, Paradigm, Participles,
    Supine, SubjunctiveForms,
};
pub use slots::{IMPERATIVE_LABELS, ImperativeRow, PERSON_LABELS, Slots, Tense};
