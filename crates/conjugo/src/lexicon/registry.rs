//! The loaded verb database and its indexes.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::lexicon::error::{LoadError, LoadWarning};
use crate::lexicon::record::VerbRecord;
use crate::lexicon::suggest::compute_suggestions;
use crate::lexicon::verb::Verb;
use crate::morphology::macron::demacronize;
use crate::types::LemmaId;

/// All verbs of a database, indexed by lemma, by macron-stripped lemma and
/// by [`LemmaId`].
///
/// Read-only once loaded.
#[derive(Debug, Default)]
pub struct Lexicon {
    verbs: BTreeMap<String, Verb>,
    /// Macron-stripped lemma to lemma.
    demacronized: HashMap<String, String>,
    /// Maps LemmaId hash to lemma for id-based lookup.
    ids: HashMap<LemmaId, String>,
    warnings: Vec<LoadWarning>,
}

impl Lexicon {
    /// Load a JSON array of verb records from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::load_internal(&content, path)
    }

    /// Load a JSON array of verb records from a string.
    ///
    /// ```
    /// use conjugo::Lexicon;
    ///
    /// let lexicon = Lexicon::load_str(r#"[
    ///     {"lemma": "amō", "principal_parts": ["amāre", "amāvī", "amātum"], "conjugation": 1}
    /// ]"#).unwrap();
    /// assert!(lexicon.contains("amō"));
    /// assert!(lexicon.find_demacronized("amo").is_some());
    /// ```
    pub fn load_str(content: &str) -> Result<Self, LoadError> {
        Self::load_internal(content, Path::new("<string>"))
    }

    fn load_internal(content: &str, path: &Path) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(content).map_err(|e| LoadError::Json {
            path: path.to_path_buf(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;
        let Value::Array(items) = value else {
            return Err(LoadError::Shape {
                path: path.to_path_buf(),
                message: "expected a JSON array of verb records".to_string(),
            });
        };

        let mut records = Vec::with_capacity(items.len());
        let mut warnings = Vec::new();
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<VerbRecord>(item) {
                Ok(record) => records.push((index, record)),
                Err(e) => warnings.push(LoadWarning::InvalidRecord {
                    index,
                    message: e.to_string(),
                }),
            }
        }
        let lexicon = Self::build(records, warnings);
        debug!(
            path = %path.display(),
            verbs = lexicon.len(),
            warnings = lexicon.warnings.len(),
            "loaded verb lexicon"
        );
        Ok(lexicon)
    }

    /// Build a lexicon from records already in memory.
    pub fn from_records(records: impl IntoIterator<Item = VerbRecord>) -> Self {
        Self::build(records.into_iter().enumerate(), Vec::new())
    }

    fn build(
        records: impl IntoIterator<Item = (usize, VerbRecord)>,
        mut warnings: Vec<LoadWarning>,
    ) -> Self {
        let mut verbs = BTreeMap::new();
        for (index, record) in records {
            match Verb::from_record_with_warnings(&record) {
                Ok((verb, tag_warnings)) => {
                    warnings.extend(tag_warnings);
                    let lemma = verb.lemma().to_string();
                    if verbs.insert(lemma.clone(), verb).is_some() {
                        warnings.push(LoadWarning::DuplicateLemma { lemma });
                    }
                }
                Err(e) => warnings.push(LoadWarning::InvalidRecord {
                    index,
                    message: e.to_string(),
                }),
            }
        }

        let demacronized = verbs
            .keys()
            .map(|lemma| (demacronize(lemma), lemma.clone()))
            .collect();
        let ids = verbs
            .keys()
            .map(|lemma| (LemmaId::from_lemma(lemma), lemma.clone()))
            .collect();
        Lexicon {
            verbs,
            demacronized,
            ids,
            warnings,
        }
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Problems found while loading, in file order.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// All lemmas, sorted.
    pub fn lemmas(&self) -> impl Iterator<Item = &str> {
        self.verbs.keys().map(String::as_str)
    }

    /// All verbs, sorted by lemma.
    pub fn verbs(&self) -> impl Iterator<Item = &Verb> {
        self.verbs.values()
    }

    /// Look up a verb by exact lemma.
    pub fn get(&self, lemma: &str) -> Option<&Verb> {
        self.verbs.get(lemma)
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.verbs.contains_key(lemma)
    }

    /// Look up a verb by a form typed with or without macrons.
    pub fn find_demacronized(&self, form: &str) -> Option<&Verb> {
        self.demacronized
            .get(&demacronize(form.trim()))
            .and_then(|lemma| self.verbs.get(lemma))
    }

    pub fn get_by_id(&self, id: LemmaId) -> Option<&Verb> {
        self.ids.get(&id).and_then(|lemma| self.verbs.get(lemma))
    }

    /// Lemmas close to `query`, compared without macrons.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        let query = demacronize(query.trim());
        let plain: Vec<(String, &str)> = self
            .lemmas()
            .map(|lemma| (demacronize(lemma), lemma))
            .collect();
        let by_plain: HashMap<&str, &str> = plain
            .iter()
            .map(|(plain, lemma)| (plain.as_str(), *lemma))
            .collect();
        compute_suggestions(&query, plain.iter().map(|(plain, _)| plain.as_str()))
            .into_iter()
            .filter_map(|plain| by_plain.get(plain.as_str()).map(|lemma| (*lemma).to_string()))
            .collect()
    }

    /// Every distinct tag in the lexicon, compound tags excepted.
    pub fn tags(&self) -> BTreeSet<String> {
        self.verbs
            .values()
            .flat_map(|verb| verb.tags().all())
            .filter(|tag| !tag.is_compound())
            .map(ToString::to_string)
            .collect()
    }

    /// Verbs carrying every one of `tags`, sorted by lemma.
    pub fn filter_by_tags(&self, tags: &[&str]) -> Vec<&Verb> {
        self.verbs
            .values()
            .filter(|verb| {
                let carried: BTreeSet<String> =
                    verb.tags().all().map(ToString::to_string).collect();
                tags.iter().all(|tag| carried.contains(*tag))
            })
            .collect()
    }
}
