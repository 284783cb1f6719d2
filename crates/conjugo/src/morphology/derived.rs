//! Iterative, inchoative and desiderative verbs built from a base verb.

use std::collections::BTreeMap;

use conjugo_tables::{Conjugation, infinitive_theme};
use serde::{Deserialize, Serialize};

use crate::lexicon::{Category, Verb, VerbRecord, VoiceClass};
use crate::types::Paradigm;

/// The three derivational patterns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Derivation {
    #[serde(rename = "Iterative Verb")]
    Iterative,
    #[serde(rename = "Inchoative Verb")]
    Inchoative,
    #[serde(rename = "Desiderative Verb")]
    Desiderative,
}

impl Derivation {
    pub const ALL: [Derivation; 3] = [
        Derivation::Iterative,
        Derivation::Inchoative,
        Derivation::Desiderative,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Derivation::Iterative => "Iterative Verb",
            Derivation::Inchoative => "Inchoative Verb",
            Derivation::Desiderative => "Desiderative Verb",
        }
    }

    /// The tag a derived verb of this kind carries.
    fn tag(self) -> &'static str {
        match self {
            Derivation::Iterative => "iterative",
            Derivation::Inchoative => "inchoative",
            Derivation::Desiderative => "desiderative",
        }
    }
}

impl std::fmt::Display for Derivation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A derived verb: either a pointer to an existing lexicon entry or a
/// freshly generated paradigm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DerivedVerb {
    /// The derived lemma already has its own entry.
    SeeAlso { lemma: String },
    Generated {
        /// Summary line of the derived verb.
        description: String,
        paradigm: Box<Paradigm>,
    },
}

impl DerivedVerb {
    pub fn see_also(lemma: impl Into<String>) -> Self {
        DerivedVerb::SeeAlso {
            lemma: lemma.into(),
        }
    }
}

/// Records of the verbs derivable from `verb`.
///
/// Verbs that are themselves derived produce nothing.
pub fn derived_records(verb: &Verb) -> Vec<(Derivation, VerbRecord)> {
    let tags = verb.tags();
    if tags.is_inchoative() || tags.is_desiderative() || tags.is_iterative() {
        return Vec::new();
    }
    Derivation::ALL
        .into_iter()
        .filter_map(|derivation| {
            let record = match derivation {
                Derivation::Iterative => iterative(verb),
                Derivation::Inchoative => inchoative(verb),
                Derivation::Desiderative => desiderative(verb),
            }?;
            Some((derivation, record))
        })
        .collect()
}

/// `dictō` from `dīcō`: supine stem plus `it`, first conjugation.
fn iterative(verb: &Verb) -> Option<VerbRecord> {
    let supine = verb.stems().supine.as_str();
    let tags = verb.tags();
    if supine.is_empty() || tags.is_highly_irregular() || tags.is_deponent() {
        return None;
    }
    let stem = format!("{supine}it");
    Some(
        VerbRecord::builder()
            .lemma(format!("{stem}ō"))
            .principal_parts(vec![
                format!("{stem}āre"),
                format!("{stem}āvī"),
                format!("{stem}ātum"),
            ])
            .conjugation(1u8.into())
            .properties(derivation_tags(Derivation::Iterative))
            .build(),
    )
}

/// `amāscō` from `amō`: present stem, theme vowel and `scō`.
fn inchoative(verb: &Verb) -> Option<VerbRecord> {
    let conjugation = verb.conjugation()?;
    let stem = verb.stems().present.as_str();
    let tags = verb.tags();
    let eligible = matches!(
        conjugation,
        Conjugation::First | Conjugation::Second | Conjugation::Fourth
    );
    if !eligible || stem.is_empty() || tags.is_deponent() || tags.is_highly_irregular() {
        return None;
    }
    let base = format!("{stem}{}", infinitive_theme(conjugation));
    let perfect = if verb.voice_class() == VoiceClass::Active {
        verb.principal_parts().perfect.clone()
    } else {
        String::new()
    };

    let mut properties = derivation_tags(Derivation::Inchoative);
    let semantic: Vec<String> = tags
        .category(&Category::Semantic)
        .iter()
        .map(ToString::to_string)
        .collect();
    if !semantic.is_empty() {
        properties.insert(Category::Semantic.name().to_string(), semantic);
    }

    Some(
        VerbRecord::builder()
            .lemma(format!("{base}scō"))
            .principal_parts(vec![format!("{base}scere"), perfect, String::new()])
            .conjugation(3u8.into())
            .properties(properties)
            .build(),
    )
}

/// `ēsuriō` from `edō`: future active participle stem plus `iō`.
fn desiderative(verb: &Verb) -> Option<VerbRecord> {
    let stem = verb.stems().future_active_participle()?;
    Some(
        VerbRecord::builder()
            .lemma(format!("{stem}iō"))
            .principal_parts(vec![format!("{stem}īre"), String::new(), String::new()])
            .conjugation(4u8.into())
            .properties(derivation_tags(Derivation::Desiderative))
            .build(),
    )
}

fn derivation_tags(derivation: Derivation) -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([(
        Category::Derivation.name().to_string(),
        vec![derivation.tag().to_string()],
    )])
}
