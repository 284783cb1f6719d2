pub mod lexicon;
pub mod morphology;
pub mod types;

pub use lexicon::{
    Category, IrregularTable, Irregularity, Lexicon, LoadError, LoadWarning, PrincipalParts,
    RawConjugation, RecordError, TagSet, Verb, VerbRecord, VoiceClass,
};
pub use morphology::{Conjugator, Derivation, DerivedVerb, MergeError, regular_paradigm};
pub use types::{Branch, Declension, Form, ImperativeRow, LemmaId, Paradigm, Slots, Tense};

pub use conjugo_tables::{COPULA_LEMMA, Conjugation, PLACEHOLDER, TABLES_VERSION, Voice};
