//! Vowel-length normalization.

use conjugo_tables::{is_vowel, shorten};
use unicode_segmentation::UnicodeSegmentation;

/// U+0304 COMBINING MACRON.
const COMBINING_MACRON: char = '\u{0304}';

/// Shorten long vowels in positions where Latin does not keep them.
///
/// A long vowel is shortened before another vowel, before a word-final `m`,
/// `r` or `t`, and before `nt` or `nd`:
///
/// ```
/// use conjugo::morphology::macron::macronize;
///
/// assert_eq!(macronize("amāt"), "amat");
/// assert_eq!(macronize("amānt"), "amant");
/// assert_eq!(macronize("moneām"), "moneam");
/// assert_eq!(macronize("amāmus"), "amāmus");
/// ```
pub fn macronize(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let chars = shorten_before_vowel(&chars);
    let chars = shorten_before_final_consonant(chars);
    shorten_before_nasal_cluster(chars).into_iter().collect()
}

/// Strip every macron, precomposed or combining.
///
/// ```
/// use conjugo::morphology::macron::demacronize;
///
/// assert_eq!(demacronize("amāvī"), "amavi");
/// assert_eq!(demacronize("ama\u{0304}re"), "amare");
/// ```
pub fn demacronize(word: &str) -> String {
    word.graphemes(true)
        .flat_map(|grapheme| grapheme.chars())
        .filter(|&c| c != COMBINING_MACRON)
        .map(|c| shorten(c).unwrap_or(c))
        .collect()
}

/// Left to right, non-overlapping: a shortened vowel's follower is not
/// itself examined.
fn shorten_before_vowel(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match (shorten(c), chars.get(i + 1)) {
            (Some(short), Some(&next)) if is_vowel(next) => {
                out.push(short);
                out.push(next);
                i += 2;
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

fn shorten_before_final_consonant(mut chars: Vec<char>) -> Vec<char> {
    if let [.., vowel, last] = chars.as_mut_slice()
        && matches!(*last, 'm' | 'r' | 't')
        && let Some(short) = shorten(*vowel)
    {
        *vowel = short;
    }
    chars
}

fn shorten_before_nasal_cluster(mut chars: Vec<char>) -> Vec<char> {
    for i in 0..chars.len().saturating_sub(2) {
        if chars[i + 1] == 'n'
            && matches!(chars[i + 2], 't' | 'd')
            && let Some(short) = shorten(chars[i])
        {
            chars[i] = short;
        }
    }
    chars
}
