//! The public entry point: lookups plus full paradigm assembly.

use std::collections::BTreeMap;

use conjugo_tables::COPULA_LEMMA;
use tracing::warn;

use crate::lexicon::{IrregularTable, Lexicon, Verb};
use crate::morphology::archaic;
use crate::morphology::compound::prefix_paradigm;
use crate::morphology::derived::{Derivation, DerivedVerb, derived_records};
use crate::morphology::merge::apply_override;
use crate::morphology::periphrastic::classical_copula;
use crate::morphology::regular_paradigm;
use crate::types::{LemmaId, Paradigm};

/// Generates paradigms for the verbs of one lexicon.
///
/// ```
/// use conjugo::{Conjugator, IrregularTable, Lexicon};
///
/// let lexicon = Lexicon::load_str(
///     r#"[{"lemma": "amō", "principal_parts": ["amāre", "amāvī", "amātum"], "conjugation": 1}]"#,
/// )
/// .unwrap();
/// let conjugator = Conjugator::new(lexicon, IrregularTable::empty());
/// let verb = conjugator.find("amō").unwrap();
/// let paradigm = conjugator.paradigm(verb);
/// assert_eq!(paradigm.indicative_active.present[2].to_string(), "amat");
/// ```
#[derive(Debug)]
pub struct Conjugator {
    lexicon: Lexicon,
    irregulars: IrregularTable,
    copula: Paradigm,
}

impl Conjugator {
    /// Build a conjugator. The copula's helper forms are the classical
    /// table merged with any override for `sum`.
    pub fn new(lexicon: Lexicon, irregulars: IrregularTable) -> Self {
        let mut copula = classical_copula();
        if let Some(overlay) = irregulars.get(COPULA_LEMMA) {
            match apply_override(COPULA_LEMMA, &copula, overlay) {
                Ok(merged) => copula = merged,
                Err(error) => warn!(%error, "using the classical copula table"),
            }
        }
        Self {
            lexicon,
            irregulars,
            copula,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn irregulars(&self) -> &IrregularTable {
        &self.irregulars
    }

    /// The copula paradigm periphrastic tenses draw their helpers from.
    pub fn copula(&self) -> &Paradigm {
        &self.copula
    }

    pub fn find(&self, lemma: &str) -> Option<&Verb> {
        self.lexicon.get(lemma)
    }

    /// Look a verb up ignoring vowel length.
    pub fn find_demacronized(&self, form: &str) -> Option<&Verb> {
        self.lexicon.find_demacronized(form)
    }

    pub fn find_by_id(&self, id: LemmaId) -> Option<&Verb> {
        self.lexicon.get_by_id(id)
    }

    /// Lemmas close to a misspelled `query`.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        self.lexicon.suggest(query)
    }

    /// The complete paradigm of `verb`.
    ///
    /// Regular generation comes first, then the hand-authored override for
    /// the lemma, then the archaic branches. A malformed override is logged
    /// and the generated paradigm kept.
    pub fn paradigm(&self, verb: &Verb) -> Paradigm {
        let mut paradigm = regular_paradigm(verb, &self.copula);
        if verb.is_copula() {
            paradigm.indicative_active = self.copula.indicative_active.clone();
            paradigm.subjunctive_active = self.copula.subjunctive_active.clone();
        }
        if let Some(overlay) = self.irregulars.get(verb.lemma()) {
            match apply_override(verb.lemma(), &paradigm, overlay) {
                Ok(merged) => paradigm = merged,
                Err(error) => warn!(lemma = verb.lemma(), %error, "keeping generated paradigm"),
            }
        }
        archaic::attach(&mut paradigm, verb);
        paradigm
    }

    /// The paradigm of a compound verb built from its base verb's paradigm.
    ///
    /// `None` for verbs without a `compound` tag. A base missing from the
    /// lexicon is logged and yields an empty paradigm.
    pub fn compound_paradigm(&self, verb: &Verb) -> Option<Paradigm> {
        let (prefix, base) = verb.compound()?;
        let Some(base_verb) = self.lexicon.get(base) else {
            warn!(lemma = verb.lemma(), base, "compound base not in lexicon");
            return Some(Paradigm::empty());
        };
        Some(prefix_paradigm(&self.paradigm(base_verb), prefix))
    }

    /// Iterative, inchoative and desiderative verbs derived from `verb`.
    ///
    /// A derived lemma already in the lexicon becomes a cross-reference.
    /// A derivation that fails to build is logged and left out.
    pub fn derived_verbs(&self, verb: &Verb) -> BTreeMap<Derivation, DerivedVerb> {
        let mut derived = BTreeMap::new();
        for (derivation, record) in derived_records(verb) {
            if self.lexicon.contains(&record.lemma) {
                derived.insert(derivation, DerivedVerb::see_also(record.lemma));
                continue;
            }
            match Verb::from_record(&record) {
                Ok(derived_verb) => {
                    let paradigm = self.paradigm(&derived_verb);
                    derived.insert(
                        derivation,
                        DerivedVerb::Generated {
                            description: derived_verb.to_string(),
                            paradigm: Box::new(paradigm),
                        },
                    );
                }
                Err(error) => {
                    warn!(lemma = verb.lemma(), %derivation, %error, "skipping derived verb");
                }
            }
        }
        derived
    }
}
