use const_fnv1a_hash::fnv1a_hash_str_64;
use serde::{Deserialize, Serialize};

/// A compact, stable identifier for a lemma.
///
/// Wraps the 64-bit FNV-1a hash of the lemma text, so ids agree across runs
/// and can be built at compile time:
///
/// ```
/// use conjugo::LemmaId;
///
/// const AMO: LemmaId = LemmaId::from_lemma("amō");
/// assert_eq!(AMO, LemmaId::from_lemma("amō"));
/// ```
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct LemmaId(u64);

impl LemmaId {
    pub const fn from_lemma(lemma: &str) -> Self {
        Self(fnv1a_hash_str_64(lemma))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for LemmaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LemmaId({:016x})", self.0)
    }
}
