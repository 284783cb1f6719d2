//! The typed paradigm tree.
//!
//! Field names serialize to the branch and tense names used by irregular
//! override files, so a paradigm round-trips through the same JSON shape
//! that hand-authored corrections use.

use conjugo_tables::Voice;
use serde::{Deserialize, Serialize};

use crate::types::{Declension, Form, ImperativeRow, Tense};

/// A complete verb paradigm.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Paradigm {
    #[serde(rename = "INDICATIVE ACTIVE")]
    pub indicative_active: IndicativeForms,
    #[serde(rename = "SUBJUNCTIVE ACTIVE")]
    pub subjunctive_active: SubjunctiveForms,
    #[serde(rename = "INDICATIVE PASSIVE")]
    pub indicative_passive: IndicativeForms,
    #[serde(rename = "SUBJUNCTIVE PASSIVE")]
    pub subjunctive_passive: SubjunctiveForms,
    #[serde(rename = "IMPERATIVES")]
    pub imperatives: Imperatives,
    #[serde(rename = "NON-FINITE")]
    pub non_finite: NonFinite,
}

/// The six indicative tenses of one voice plus the archaic futures.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicativeForms {
    #[serde(rename = "Present")]
    pub present: Tense,
    #[serde(rename = "Imperfect")]
    pub imperfect: Tense,
    #[serde(rename = "Future")]
    pub future: Tense,
    #[serde(rename = "Perfect")]
    pub perfect: Tense,
    #[serde(rename = "Pluperfect")]
    pub pluperfect: Tense,
    #[serde(rename = "Future Perfect")]
    pub future_perfect: Tense,
    /// Archaic sigmatic future (`faxō`). `None` when not generated.
    #[serde(
        rename = "Future Perfect II (Archaic)",
        skip_serializing_if = "Option::is_none"
    )]
    pub sigmatic_future: Option<Tense>,
    /// Archaic `-bō` future of the third and fourth conjugations.
    #[serde(rename = "Future (Archaic -bō)", skip_serializing_if = "Option::is_none")]
    pub bo_future: Option<Tense>,
}

impl IndicativeForms {
    /// Tense names paired with their rows, archaic rows only when present.
    pub fn tenses(&self) -> Vec<(&'static str, &Tense)> {
        let mut tenses = vec![
            ("Present", &self.present),
            ("Imperfect", &self.imperfect),
            ("Future", &self.future),
            ("Perfect", &self.perfect),
            ("Pluperfect", &self.pluperfect),
            ("Future Perfect", &self.future_perfect),
        ];
        if let Some(tense) = &self.sigmatic_future {
            tenses.push(("Future Perfect II (Archaic)", tense));
        }
        if let Some(tense) = &self.bo_future {
            tenses.push(("Future (Archaic -bō)", tense));
        }
        tenses
    }

    pub fn visit_forms_mut(&mut self, f: &mut dyn FnMut(&mut Form)) {
        for tense in [
            &mut self.present,
            &mut self.imperfect,
            &mut self.future,
            &mut self.perfect,
            &mut self.pluperfect,
            &mut self.future_perfect,
        ] {
            tense.visit_forms_mut(f);
        }
        for tense in [&mut self.sigmatic_future, &mut self.bo_future]
            .into_iter()
            .flatten()
        {
            tense.visit_forms_mut(f);
        }
    }
}

/// The four subjunctive tenses of one voice plus the archaic moods.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjunctiveForms {
    #[serde(rename = "Present")]
    pub present: Tense,
    #[serde(rename = "Imperfect")]
    pub imperfect: Tense,
    #[serde(rename = "Perfect")]
    pub perfect: Tense,
    #[serde(rename = "Pluperfect")]
    pub pluperfect: Tense,
    #[serde(
        rename = "Aorist Subjunctive (Archaic)",
        skip_serializing_if = "Option::is_none"
    )]
    pub aorist: Option<Tense>,
    #[serde(
        rename = "Archaic Optative (Theoretical)",
        skip_serializing_if = "Option::is_none"
    )]
    pub optative: Option<Tense>,
}

impl SubjunctiveForms {
    /// Tense names paired with their rows, archaic rows only when present.
    pub fn tenses(&self) -> Vec<(&'static str, &Tense)> {
        let mut tenses = vec![
            ("Present", &self.present),
            ("Imperfect", &self.imperfect),
            ("Perfect", &self.perfect),
            ("Pluperfect", &self.pluperfect),
        ];
        if let Some(tense) = &self.aorist {
            tenses.push(("Aorist Subjunctive (Archaic)", tense));
        }
        if let Some(tense) = &self.optative {
            tenses.push(("Archaic Optative (Theoretical)", tense));
        }
        tenses
    }

    pub fn visit_forms_mut(&mut self, f: &mut dyn FnMut(&mut Form)) {
        for tense in [
            &mut self.present,
            &mut self.imperfect,
            &mut self.perfect,
            &mut self.pluperfect,
        ] {
            tense.visit_forms_mut(f);
        }
        for tense in [&mut self.aorist, &mut self.optative].into_iter().flatten() {
            tense.visit_forms_mut(f);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Imperatives {
    #[serde(rename = "Pres Act")]
    pub present_active: ImperativeRow,
    #[serde(rename = "Pres Pass")]
    pub present_passive: ImperativeRow,
    #[serde(rename = "Fut Act")]
    pub future_active: ImperativeRow,
    #[serde(rename = "Fut Pass")]
    pub future_passive: ImperativeRow,
}

impl Imperatives {
    pub fn rows(&self) -> [(&'static str, &ImperativeRow); 4] {
        [
            ("Pres Act", &self.present_active),
            ("Pres Pass", &self.present_passive),
            ("Fut Act", &self.future_active),
            ("Fut Pass", &self.future_passive),
        ]
    }

    pub fn visit_forms_mut(&mut self, f: &mut dyn FnMut(&mut Form)) {
        for row in [
            &mut self.present_active,
            &mut self.present_passive,
            &mut self.future_active,
            &mut self.future_passive,
        ] {
            row.visit_forms_mut(f);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NonFinite {
    #[serde(rename = "INFINITIVES")]
    pub infinitives: Infinitives,
    #[serde(rename = "GERUND")]
    pub gerund: Gerund,
    #[serde(rename = "GERUND (-undus form)")]
    pub gerund_undus: Gerund,
    #[serde(rename = "SUPINE")]
    pub supine: Supine,
    #[serde(rename = "PARTICIPLES")]
    pub participles: Participles,
}

impl NonFinite {
    pub fn visit_forms_mut(&mut self, f: &mut dyn FnMut(&mut Form)) {
        self.infinitives.visit_forms_mut(f);
        self.gerund.visit_forms_mut(f);
        self.gerund_undus.visit_forms_mut(f);
        for form in [&mut self.supine.accusative, &mut self.supine.ablative] {
            f(form);
        }
        self.participles.visit_forms_mut(f);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Infinitives {
    #[serde(rename = "Pres Act")]
    pub present_active: Form,
    #[serde(rename = "Perf Act")]
    pub perfect_active: Form,
    #[serde(rename = "Fut Act")]
    pub future_active: Form,
    #[serde(rename = "Pres Pass")]
    pub present_passive: Form,
    #[serde(rename = "Perf Pass")]
    pub perfect_passive: Form,
    #[serde(rename = "Fut Pass")]
    pub future_passive: Form,
}

impl Infinitives {
    /// Tense label with its active and passive infinitive.
    pub fn rows(&self) -> [(&'static str, &Form, &Form); 3] {
        [
            ("Present", &self.present_active, &self.present_passive),
            ("Perfect", &self.perfect_active, &self.perfect_passive),
            ("Future", &self.future_active, &self.future_passive),
        ]
    }

    fn visit_forms_mut(&mut self, f: &mut dyn FnMut(&mut Form)) {
        for form in [
            &mut self.present_active,
            &mut self.perfect_active,
            &mut self.future_active,
            &mut self.present_passive,
            &mut self.perfect_passive,
            &mut self.future_passive,
        ] {
            f(form);
        }
    }
}

/// The four oblique cases of a gerund.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Gerund {
    #[serde(rename = "Gen")]
    pub genitive: Form,
    #[serde(rename = "Dat")]
    pub dative: Form,
    #[serde(rename = "Acc")]
    pub accusative: Form,
    #[serde(rename = "Abl")]
    pub ablative: Form,
}

impl Gerund {
    pub fn cases(&self) -> [(&'static str, &Form); 4] {
        [
            ("Gen", &self.genitive),
            ("Dat", &self.dative),
            ("Acc", &self.accusative),
            ("Abl", &self.ablative),
        ]
    }

    pub fn is_placeholder(&self) -> bool {
        self.cases().iter().all(|(_, form)| form.is_placeholder())
    }

    fn visit_forms_mut(&mut self, f: &mut dyn FnMut(&mut Form)) {
        for form in [
            &mut self.genitive,
            &mut self.dative,
            &mut self.accusative,
            &mut self.ablative,
        ] {
            f(form);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Supine {
    #[serde(rename = "Acc")]
    pub accusative: Form,
    #[serde(rename = "Abl")]
    pub ablative: Form,
}

/// Declined participles; absent participles are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Participles {
    #[serde(rename = "PAP", skip_serializing_if = "Option::is_none")]
    pub present_active: Option<Declension>,
    #[serde(rename = "PPP", skip_serializing_if = "Option::is_none")]
    pub perfect_passive: Option<Declension>,
    #[serde(rename = "FAP", skip_serializing_if = "Option::is_none")]
    pub future_active: Option<Declension>,
    #[serde(rename = "FPP (Gerundive)", skip_serializing_if = "Option::is_none")]
    pub gerundive: Option<Declension>,
    #[serde(
        rename = "FPP (Gerundive -undus form)",
        skip_serializing_if = "Option::is_none"
    )]
    pub gerundive_undus: Option<Declension>,
}

impl Participles {
    /// Participle names paired with their tables, skipping absent ones.
    pub fn declined(&self) -> Vec<(&'static str, &Declension)> {
        [
            ("PAP", &self.present_active),
            ("PPP", &self.perfect_passive),
            ("FAP", &self.future_active),
            ("FPP (Gerundive)", &self.gerundive),
            ("FPP (Gerundive -undus form)", &self.gerundive_undus),
        ]
        .into_iter()
        .filter_map(|(name, declension)| declension.as_ref().map(|d| (name, d)))
        .collect()
    }

    fn visit_forms_mut(&mut self, f: &mut dyn FnMut(&mut Form)) {
        for declension in [
            &mut self.present_active,
            &mut self.perfect_passive,
            &mut self.future_active,
            &mut self.gerundive,
            &mut self.gerundive_undus,
        ]
        .into_iter()
        .flatten()
        {
            declension.visit_forms_mut(f);
        }
    }
}

/// One top-level branch of a paradigm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch<'a> {
    Indicative {
        voice: Voice,
        forms: &'a IndicativeForms,
    },
    Subjunctive {
        voice: Voice,
        forms: &'a SubjunctiveForms,
    },
    Imperatives(&'a Imperatives),
    NonFinite(&'a NonFinite),
}

impl Branch<'_> {
    /// Branch name as it appears in override files.
    pub fn title(&self) -> &'static str {
        match self {
            Branch::Indicative {
                voice: Voice::Active,
                ..
            } => "INDICATIVE ACTIVE",
            Branch::Indicative {
                voice: Voice::Passive,
                ..
            } => "INDICATIVE PASSIVE",
            Branch::Subjunctive {
                voice: Voice::Active,
                ..
            } => "SUBJUNCTIVE ACTIVE",
            Branch::Subjunctive {
                voice: Voice::Passive,
                ..
            } => "SUBJUNCTIVE PASSIVE",
            Branch::Imperatives(_) => "IMPERATIVES",
            Branch::NonFinite(_) => "NON-FINITE",
        }
    }
}

impl Paradigm {
    /// An all-placeholder paradigm.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The six branches in display order.
    pub fn branches(&self) -> [Branch<'_>; 6] {
        [
            Branch::Indicative {
                voice: Voice::Active,
                forms: &self.indicative_active,
            },
            Branch::Subjunctive {
                voice: Voice::Active,
                forms: &self.subjunctive_active,
            },
            Branch::Indicative {
                voice: Voice::Passive,
                forms: &self.indicative_passive,
            },
            Branch::Subjunctive {
                voice: Voice::Passive,
                forms: &self.subjunctive_passive,
            },
            Branch::Imperatives(&self.imperatives),
            Branch::NonFinite(&self.non_finite),
        ]
    }

    /// Apply `f` to every form in the tree.
    pub fn visit_forms_mut(&mut self, f: &mut dyn FnMut(&mut Form)) {
        self.indicative_active.visit_forms_mut(f);
        self.subjunctive_active.visit_forms_mut(f);
        self.indicative_passive.visit_forms_mut(f);
        self.subjunctive_passive.visit_forms_mut(f);
        self.imperatives.visit_forms_mut(f);
        self.non_finite.visit_forms_mut(f);
    }

    /// True when no form anywhere in the tree is attested.
    pub fn is_empty(&self) -> bool {
        let mut attested = false;
        self.clone().visit_forms_mut(&mut |form| {
            attested |= !form.is_placeholder();
        });
        !attested
    }
}
