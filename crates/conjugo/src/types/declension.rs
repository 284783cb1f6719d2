use conjugo_tables::CASE_LABELS;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::Form;

/// Ten case forms of one gender.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseTable {
    #[serde(rename = "Nom Sg")]
    pub nominative_singular: Form,
    #[serde(rename = "Gen Sg")]
    pub genitive_singular: Form,
    #[serde(rename = "Dat Sg")]
    pub dative_singular: Form,
    #[serde(rename = "Acc Sg")]
    pub accusative_singular: Form,
    #[serde(rename = "Abl Sg")]
    pub ablative_singular: Form,
    #[serde(rename = "Nom Pl")]
    pub nominative_plural: Form,
    #[serde(rename = "Gen Pl")]
    pub genitive_plural: Form,
    #[serde(rename = "Dat Pl")]
    pub dative_plural: Form,
    #[serde(rename = "Acc Pl")]
    pub accusative_plural: Form,
    #[serde(rename = "Abl Pl")]
    pub ablative_plural: Form,
}

impl CaseTable {
    /// Build a table from forms in [`CASE_LABELS`] order.
    pub fn from_forms(forms: [Form; 10]) -> Self {
        let [
            nominative_singular,
            genitive_singular,
            dative_singular,
            accusative_singular,
            ablative_singular,
            nominative_plural,
            genitive_plural,
            dative_plural,
            accusative_plural,
            ablative_plural,
        ] = forms;
        Self {
            nominative_singular,
            genitive_singular,
            dative_singular,
            accusative_singular,
            ablative_singular,
            nominative_plural,
            genitive_plural,
            dative_plural,
            accusative_plural,
            ablative_plural,
        }
    }

    /// Forms in [`CASE_LABELS`] order.
    pub fn forms(&self) -> [&Form; 10] {
        [
            &self.nominative_singular,
            &self.genitive_singular,
            &self.dative_singular,
            &self.accusative_singular,
            &self.ablative_singular,
            &self.nominative_plural,
            &self.genitive_plural,
            &self.dative_plural,
            &self.accusative_plural,
            &self.ablative_plural,
        ]
    }

    /// Case labels paired with their forms.
    pub fn cases(&self) -> [(&'static str, &Form); 10] {
        let forms = self.forms();
        std::array::from_fn(|index| (CASE_LABELS[index], forms[index]))
    }

    pub fn visit_forms_mut(&mut self, f: &mut dyn FnMut(&mut Form)) {
        for form in [
            &mut self.nominative_singular,
            &mut self.genitive_singular,
            &mut self.dative_singular,
            &mut self.accusative_singular,
            &mut self.ablative_singular,
            &mut self.nominative_plural,
            &mut self.genitive_plural,
            &mut self.dative_plural,
            &mut self.accusative_plural,
            &mut self.ablative_plural,
        ] {
            f(form);
        }
    }
}

/// A participle declined across genders.
///
/// Deserializes from a sparse gender map: a `"M/F"` key selects the
/// two-gender layout, anything else the three-gender one, and missing
/// genders or cases are placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Declension {
    /// First/second declension pattern.
    ThreeGender {
        #[serde(rename = "M")]
        masculine: CaseTable,
        #[serde(rename = "F")]
        feminine: CaseTable,
        #[serde(rename = "N")]
        neuter: CaseTable,
    },
    /// Third declension pattern with masculine and feminine merged.
    TwoGender {
        #[serde(rename = "M/F")]
        common: CaseTable,
        #[serde(rename = "N")]
        neuter: CaseTable,
    },
}

impl Declension {
    /// Gender labels paired with their tables, in display order.
    pub fn genders(&self) -> Vec<(&'static str, &CaseTable)> {
        match self {
            Declension::ThreeGender {
                masculine,
                feminine,
                neuter,
            } => vec![("M", masculine), ("F", feminine), ("N", neuter)],
            Declension::TwoGender { common, neuter } => vec![("M/F", common), ("N", neuter)],
        }
    }

    /// Masculine (or common) nominative singular, the participle's lemma.
    pub fn nominative(&self) -> &Form {
        match self {
            Declension::ThreeGender { masculine, .. } => &masculine.nominative_singular,
            Declension::TwoGender { common, .. } => &common.nominative_singular,
        }
    }

    pub fn visit_forms_mut(&mut self, f: &mut dyn FnMut(&mut Form)) {
        match self {
            Declension::ThreeGender {
                masculine,
                feminine,
                neuter,
            } => {
                masculine.visit_forms_mut(f);
                feminine.visit_forms_mut(f);
                neuter.visit_forms_mut(f);
            }
            Declension::TwoGender { common, neuter } => {
                common.visit_forms_mut(f);
                neuter.visit_forms_mut(f);
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GenderMap {
    #[serde(rename = "M")]
    masculine: Option<CaseTable>,
    #[serde(rename = "F")]
    feminine: Option<CaseTable>,
    #[serde(rename = "N")]
    neuter: Option<CaseTable>,
    #[serde(rename = "M/F")]
    common: Option<CaseTable>,
}

impl<'de> Deserialize<'de> for Declension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let GenderMap {
            masculine,
            feminine,
            neuter,
            common,
        } = GenderMap::deserialize(deserializer)?;
        let neuter = neuter.unwrap_or_default();
        match common {
            Some(_) if masculine.is_some() || feminine.is_some() => Err(D::Error::custom(
                "a declension cannot mix \"M/F\" with \"M\" or \"F\"",
            )),
            Some(common) => Ok(Declension::TwoGender { common, neuter }),
            None => Ok(Declension::ThreeGender {
                masculine: masculine.unwrap_or_default(),
                feminine: feminine.unwrap_or_default(),
                neuter,
            }),
        }
    }
}
