//! Adjectival declension of participles.

use conjugo_tables::{FIRST_SECOND_ENDINGS, PRESENT_PARTICIPLE_ENDINGS, PRESENT_PARTICIPLE_NEUTER_PLURAL};

use crate::types::{CaseTable, Declension, Form};

/// Decline `stem` as a first/second declension adjective.
///
/// The masculine nominative singular is always `nominative`, so the lemma
/// of an `-ūrus` participle is never re-derived from its stem.
pub fn first_second(stem: &str, nominative: &str) -> Declension {
    let [mut masculine, feminine, neuter] =
        FIRST_SECOND_ENDINGS.map(|endings| case_table(stem, &endings));
    masculine.nominative_singular = Form::single(nominative);
    Declension::ThreeGender {
        masculine,
        feminine,
        neuter,
    }
}

/// Decline a present active participle on the third declension.
///
/// `nominative` is the full nominative singular (`amāns`) and `oblique` the
/// stem of every other case (`amant`).
pub fn present_participle(nominative: &str, oblique: &str) -> Declension {
    let mut common = case_table(oblique, &PRESENT_PARTICIPLE_ENDINGS);
    common.nominative_singular = Form::single(nominative);

    let mut neuter = common.clone();
    neuter.accusative_singular = Form::single(nominative);
    let neuter_plural = Form::single(format!("{oblique}{PRESENT_PARTICIPLE_NEUTER_PLURAL}"));
    neuter.nominative_plural = neuter_plural.clone();
    neuter.accusative_plural = neuter_plural;

    Declension::TwoGender { common, neuter }
}

fn case_table(stem: &str, endings: &[&str; 10]) -> CaseTable {
    CaseTable::from_forms(endings.map(|ending| Form::single(format!("{stem}{ending}"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neuter_present_participle_differs_in_direct_cases() {
        let Declension::TwoGender { common, neuter } = present_participle("amāns", "amant") else {
            panic!("expected two genders");
        };
        assert_eq!(common.accusative_singular.to_string(), "amantem");
        assert_eq!(neuter.accusative_singular.to_string(), "amāns");
        assert_eq!(neuter.nominative_plural.to_string(), "amantia");
        assert_eq!(common.genitive_plural.to_string(), "amantium");
    }

    #[test]
    fn supplied_nominative_wins() {
        let declension = first_second("amātūr", "amātūrus");
        assert_eq!(declension.nominative().to_string(), "amātūrus");
    }
}
