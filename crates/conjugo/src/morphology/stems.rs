//! Conjugation resolution and stem derivation.

use conjugo_tables::{
    ALTERNATE_SEPARATOR, Conjugation, irregular_infinitive, irregular_infinitive_for_lemma,
};

use crate::lexicon::{DeclaredConjugation, PrincipalParts, RawConjugation, TagSet};

/// The three stems every generator works from.
///
/// An empty stem means the subsystem built on it is inapplicable; generators
/// emit placeholders instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stems {
    pub present: String,
    pub perfect: String,
    pub supine: String,
}

impl Stems {
    /// `amāt` gives `amātū`.
    pub fn supine_ablative(&self) -> Option<String> {
        (!self.supine.is_empty()).then(|| format!("{}ū", self.supine))
    }

    /// Stem of the future active participle: supine stem plus `ūr`, unless
    /// it already ends that way (`futūr`).
    pub fn future_active_participle(&self) -> Option<String> {
        if self.supine.is_empty() {
            None
        } else if self.supine.ends_with("ūr") {
            Some(self.supine.clone())
        } else {
            Some(format!("{}ūr", self.supine))
        }
    }
}

/// Resolve a verb's conjugation class.
///
/// A declared class is used as is; an undeclared or unreadable one is
/// derived from the infinitive. A third-conjugation verb whose lemma ends in
/// `-iō` (deponents: `-ior`) becomes 3-iō. A declared number outside the
/// known classes resolves to `None`.
pub fn resolve_conjugation(
    lemma: &str,
    declared: Option<&RawConjugation>,
    infinitive: &str,
    deponent: bool,
) -> Option<Conjugation> {
    let declared = declared.map_or(DeclaredConjugation::Unparseable, RawConjugation::classify);
    let conjugation = match declared {
        DeclaredConjugation::Resolved(conjugation) => conjugation,
        DeclaredConjugation::OutOfRange => return None,
        DeclaredConjugation::Unparseable => conjugation_from_infinitive(infinitive)?,
    };
    let io_lemma = lemma.ends_with("iō") || (deponent && lemma.ends_with("ior"));
    if conjugation == Conjugation::Third && io_lemma {
        Some(Conjugation::ThirdIo)
    } else {
        Some(conjugation)
    }
}

fn conjugation_from_infinitive(infinitive: &str) -> Option<Conjugation> {
    let ends_with_any = |endings: &[&str]| endings.iter().any(|e| infinitive.ends_with(e));
    if ends_with_any(&["āre", "ārī"]) {
        Some(Conjugation::First)
    } else if ends_with_any(&["ēre", "ērī"]) {
        Some(Conjugation::Second)
    } else if ends_with_any(&["īre", "īrī"]) {
        Some(Conjugation::Fourth)
    } else if ends_with_any(&["ere", "ī"]) {
        Some(Conjugation::Third)
    } else {
        None
    }
}

/// Derive present, perfect and supine stems.
pub fn derive_stems(
    parts: &PrincipalParts,
    conjugation: Option<Conjugation>,
    tags: &TagSet,
) -> Stems {
    let mut stems = Stems {
        present: present_stem(&parts.infinitive, conjugation, tags),
        perfect: perfect_stem(&parts.perfect, tags),
        supine: supine_stem(&parts.supine),
    };
    if let Some((present, perfect, supine)) = tags.suppletive() {
        for (stem, replacement) in [
            (&mut stems.present, present),
            (&mut stems.perfect, perfect),
            (&mut stems.supine, supine),
        ] {
            if !replacement.is_empty() {
                *stem = replacement.to_string();
            }
        }
    }
    stems
}

fn present_stem(infinitive: &str, conjugation: Option<Conjugation>, tags: &TagSet) -> String {
    if infinitive.is_empty() {
        return String::new();
    }
    // Compounds of an irregular verb keep their own prefix: afferre -> affer.
    if let Some((_, base)) = tags.compound()
        && let Some(entry) = irregular_infinitive_for_lemma(base)
        && let Some(prefix) = infinitive.strip_suffix(entry.infinitive)
    {
        return format!("{prefix}{}", entry.stem);
    }
    if let Some(entry) = irregular_infinitive(infinitive) {
        return entry.stem.to_string();
    }
    if tags.is_deponent() {
        let third = conjugation.is_some_and(Conjugation::is_third);
        if third && infinitive.ends_with('ī') {
            drop_last_chars(infinitive, 1).to_string()
        } else if infinitive.ends_with("rī") {
            drop_last_chars(infinitive, 3).to_string()
        } else if infinitive.ends_with('ī') {
            drop_last_chars(infinitive, 1).to_string()
        } else {
            String::new()
        }
    } else if infinitive.ends_with("re") {
        drop_last_chars(infinitive, 3).to_string()
    } else {
        String::new()
    }
}

fn perfect_stem(perfect: &str, tags: &TagSet) -> String {
    let perfect = first_alternate(perfect);
    if perfect.is_empty() {
        String::new()
    } else if tags.is_deponent() || tags.is_semi_deponent() {
        let participle = perfect.split_whitespace().next().unwrap_or_default();
        drop_last_chars(participle, 2).to_string()
    } else if let Some(stem) = perfect.strip_suffix('ī') {
        stem.to_string()
    } else {
        String::new()
    }
}

fn supine_stem(supine: &str) -> String {
    first_alternate(supine)
        .strip_suffix("um")
        .map(str::to_string)
        .unwrap_or_default()
}

/// The preferred alternate of a principal part.
pub(crate) fn first_alternate(part: &str) -> &str {
    part.split(ALTERNATE_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim()
}

/// `text` without its last `count` characters; empty if it is shorter.
pub(crate) fn drop_last_chars(text: &str, count: usize) -> &str {
    let total = text.chars().count();
    if count >= total {
        return "";
    }
    match text.char_indices().nth(total - count) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
