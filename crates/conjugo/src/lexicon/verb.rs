//! The immutable, decoded verb.

use conjugo_tables::{COPULA_LEMMA, Conjugation};

use crate::lexicon::error::{LoadWarning, RecordError};
use crate::lexicon::record::VerbRecord;
use crate::lexicon::tag_parser::decode_properties;
use crate::lexicon::tags::TagSet;
use crate::morphology::stems::{Stems, derive_stems, resolve_conjugation};
use crate::types::LemmaId;

/// Infinitive, perfect and supine as given; empty when unattested.
///
/// For deponents the perfect is a participle phrase such as
/// `hortātus sum`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrincipalParts {
    pub infinitive: String,
    pub perfect: String,
    pub supine: String,
}

/// How a verb's morphology maps onto its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceClass {
    Active,
    /// Passive forms throughout, active meaning, no true passive.
    Deponent,
    /// Active present system, deponent perfect system.
    SemiDeponent,
}

impl std::fmt::Display for VoiceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoiceClass::Active => f.write_str("Active"),
            VoiceClass::Deponent => f.write_str("Deponent"),
            VoiceClass::SemiDeponent => f.write_str("Semi-Deponent"),
        }
    }
}

/// A verb decoded from its record. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    lemma: String,
    parts: PrincipalParts,
    conjugation: Option<Conjugation>,
    tags: TagSet,
    stems: Stems,
}

impl Verb {
    /// Decode a record, discarding tag warnings.
    pub fn from_record(record: &VerbRecord) -> Result<Self, RecordError> {
        Self::from_record_with_warnings(record).map(|(verb, _)| verb)
    }

    /// Decode a record, returning warnings about its tags.
    pub fn from_record_with_warnings(
        record: &VerbRecord,
    ) -> Result<(Self, Vec<LoadWarning>), RecordError> {
        let lemma = record.lemma.trim();
        if lemma.is_empty() {
            return Err(RecordError::EmptyLemma);
        }
        if record.principal_parts.len() > 3 {
            return Err(RecordError::TooManyPrincipalParts {
                lemma: lemma.to_string(),
                count: record.principal_parts.len(),
            });
        }

        let part = |index: usize| {
            record
                .principal_parts
                .get(index)
                .map(|part| part.trim().to_string())
                .unwrap_or_default()
        };
        let parts = PrincipalParts {
            infinitive: part(0),
            perfect: part(1),
            supine: part(2),
        };
        let (tags, warnings) = decode_properties(lemma, &record.properties);
        let conjugation = resolve_conjugation(
            lemma,
            record.conjugation.as_ref(),
            &parts.infinitive,
            tags.is_deponent(),
        );
        let stems = derive_stems(&parts, conjugation, &tags);

        let verb = Verb {
            lemma: lemma.to_string(),
            parts,
            conjugation,
            tags,
            stems,
        };
        Ok((verb, warnings))
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn id(&self) -> LemmaId {
        LemmaId::from_lemma(&self.lemma)
    }

    pub fn principal_parts(&self) -> &PrincipalParts {
        &self.parts
    }

    /// `None` when undeclared and underivable, or declared out of range.
    pub fn conjugation(&self) -> Option<Conjugation> {
        self.conjugation
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn stems(&self) -> &Stems {
        &self.stems
    }

    pub fn voice_class(&self) -> VoiceClass {
        if self.tags.is_deponent() {
            VoiceClass::Deponent
        } else if self.tags.is_semi_deponent() {
            VoiceClass::SemiDeponent
        } else {
            VoiceClass::Active
        }
    }

    /// True for the copula itself, whose paradigm supplies periphrastic
    /// helpers.
    pub fn is_copula(&self) -> bool {
        self.lemma == COPULA_LEMMA
    }

    /// `(prefix, base lemma)` for compounds.
    pub fn compound(&self) -> Option<(&str, &str)> {
        self.tags.compound()
    }

    /// Rebuild the record this verb came from.
    pub fn to_record(&self) -> VerbRecord {
        VerbRecord::builder()
            .lemma(self.lemma.clone())
            .principal_parts(vec![
                self.parts.infinitive.clone(),
                self.parts.perfect.clone(),
                self.parts.supine.clone(),
            ])
            .maybe_conjugation(self.conjugation.map(Into::into))
            .properties(self.tags.to_properties())
            .build()
    }
}

/// One-line summary, with a `Markers:` line when the verb has tags.
///
/// ```text
/// Verb: amō | Conj: 1 (Active) | Stems: P='am', Perf='amāv', Sup='amāt'
/// ```
impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let conjugation = self.conjugation.map_or("?", Conjugation::label);
        write!(
            f,
            "Verb: {} | Conj: {} ({}) | Stems: P='{}', Perf='{}', Sup='{}'",
            self.lemma,
            conjugation,
            self.voice_class(),
            self.stems.present,
            self.stems.perfect,
            self.stems.supine
        )?;
        if !self.tags.is_empty() {
            write!(f, "\nMarkers: {}", self.tags)?;
        }
        Ok(())
    }
}
