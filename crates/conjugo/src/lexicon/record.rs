//! The on-disk verb record.

use std::collections::BTreeMap;

use bon::Builder;
use conjugo_tables::Conjugation;
use serde::{Deserialize, Serialize};

/// One entry of the verb database, exactly as stored.
///
/// ```
/// use conjugo::VerbRecord;
///
/// let record = VerbRecord::builder()
///     .lemma("amō")
///     .principal_parts(vec!["amāre".into(), "amāvī".into(), "amātum".into()])
///     .conjugation(1u8.into())
///     .build();
/// assert_eq!(record.lemma, "amō");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct VerbRecord {
    pub lemma: String,

    /// Infinitive, perfect, supine. Missing entries are unattested.
    #[serde(default)]
    #[builder(default)]
    pub principal_parts: Vec<String>,

    #[serde(default)]
    pub conjugation: Option<RawConjugation>,

    /// Category name to tags, e.g. `"semantic": ["deponent"]`.
    #[serde(default)]
    #[builder(default)]
    pub properties: BTreeMap<String, Vec<String>>,
}

/// A conjugation as declared in the database: a number or a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawConjugation {
    Number(f64),
    Text(String),
}

/// How a declared conjugation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredConjugation {
    Resolved(Conjugation),
    /// A number outside the known classes.
    OutOfRange,
    /// Absent, blank, or text that names no class.
    Unparseable,
}

impl RawConjugation {
    pub fn classify(&self) -> DeclaredConjugation {
        match self {
            RawConjugation::Number(number) => {
                let doubled = number * 2.0;
                if doubled.fract() != 0.0 {
                    return DeclaredConjugation::OutOfRange;
                }
                match doubled as i64 {
                    2 => DeclaredConjugation::Resolved(Conjugation::First),
                    4 => DeclaredConjugation::Resolved(Conjugation::Second),
                    6 => DeclaredConjugation::Resolved(Conjugation::Third),
                    7 => DeclaredConjugation::Resolved(Conjugation::ThirdIo),
                    8 => DeclaredConjugation::Resolved(Conjugation::Fourth),
                    _ => DeclaredConjugation::OutOfRange,
                }
            }
            RawConjugation::Text(text) => match Conjugation::from_label(text) {
                Some(conjugation) => DeclaredConjugation::Resolved(conjugation),
                None => DeclaredConjugation::Unparseable,
            },
        }
    }
}

impl From<u8> for RawConjugation {
    fn from(number: u8) -> Self {
        RawConjugation::Number(f64::from(number))
    }
}

impl From<&str> for RawConjugation {
    fn from(text: &str) -> Self {
        RawConjugation::Text(text.to_string())
    }
}

impl From<Conjugation> for RawConjugation {
    fn from(conjugation: Conjugation) -> Self {
        RawConjugation::Text(conjugation.label().to_string())
    }
}
