//! Prefix assimilation for compound verbs.

use conjugo_tables::{CARRY_EXCEPTIONS, VOWEL_LINKED_PREFIXES, assimilated_prefix, is_vowel};

/// Join `prefix` to `word`, assimilating the prefix to the word's initial.
///
/// The stems of "to carry" are matched literally first, then the
/// assimilation table, then `re`/`prō` before a vowel. Anything else is
/// concatenated unchanged. An empty prefix, an empty word or a bare `-`
/// leaves the word as it is.
///
/// ```
/// use conjugo::morphology::assimilation::prefix_word;
///
/// assert_eq!(prefix_word("in", "portō"), "importō");
/// assert_eq!(prefix_word("ab", "ferō"), "auferō");
/// assert_eq!(prefix_word("re", "eō"), "redeō");
/// assert_eq!(prefix_word("per", "ficiō"), "perficiō");
/// ```
pub fn prefix_word(prefix: &str, word: &str) -> String {
    if prefix.is_empty() || word.is_empty() || word == "-" {
        return word.to_string();
    }
    if let Some((_, _, replacement)) = CARRY_EXCEPTIONS
        .iter()
        .find(|(p, start, _)| *p == prefix && word.starts_with(start))
    {
        return format!("{replacement}{word}");
    }
    let Some(initial) = word.chars().next() else {
        return word.to_string();
    };
    if let Some(assimilated) = assimilated_prefix(prefix, initial) {
        return format!("{assimilated}{word}");
    }
    if is_vowel(initial)
        && let Some((_, linked)) = VOWEL_LINKED_PREFIXES.iter().find(|(p, _)| *p == prefix)
    {
        return format!("{linked}{word}");
    }
    format!("{prefix}{word}")
}

/// Prefix the first whitespace-separated word of `phrase`.
///
/// Periphrastic forms keep their helper: `lātus sum` becomes `ablātus sum`.
pub fn prefix_phrase(prefix: &str, phrase: &str) -> String {
    match phrase.split_once(' ') {
        Some((first, rest)) => format!("{} {rest}", prefix_word(prefix, first)),
        None => prefix_word(prefix, phrase),
    }
}
