//! Active perfect-system tenses on the perfect stem.

use conjugo_tables::{PERFECT_INFINITIVE_ENDING, PerfectTense};

use crate::types::{Form, Tense};

/// One active perfect-system tense. Perfect endings are appended as is;
/// the stem already carries its vowel lengths.
pub fn perfect_tense(stem: &str, tense: PerfectTense) -> Tense {
    if stem.is_empty() {
        return Tense::placeholder();
    }
    let endings = tense.endings();
    Tense::from_fn(|slot| {
        Form::from_alternates(endings[slot].iter().map(|ending| format!("{stem}{ending}")))
    })
}

/// The perfect active infinitive (`amāvisse`).
pub fn perfect_infinitive(stem: &str) -> Form {
    if stem.is_empty() {
        return Form::Placeholder;
    }
    Form::single(format!("{stem}{PERFECT_INFINITIVE_ENDING}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_plural_perfect_has_poetic_alternate() {
        let tense = perfect_tense("amāv", PerfectTense::PerfectIndicative);
        assert_eq!(tense[5].to_string(), "amāvērunt / amāvēre");
        assert_eq!(tense[0].to_string(), "amāvī");
    }

    #[test]
    fn empty_stem_gives_placeholders() {
        assert!(perfect_tense("", PerfectTense::PluperfectSubjunctive).is_placeholder());
        assert!(perfect_infinitive("").is_placeholder());
    }
}
