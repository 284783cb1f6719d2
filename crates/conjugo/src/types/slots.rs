use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::Form;

/// A fixed-width row of forms.
///
/// Serializes as a JSON list. Shorter lists deserialize with trailing
/// placeholders so sparse overrides stay valid; longer lists are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slots<const N: usize>([Form; N]);

/// Six person slots: 1sg, 2sg, 3sg, 1pl, 2pl, 3pl.
pub type Tense = Slots<6>;

/// Four imperative slots: 2sg, 3sg, 2pl, 3pl.
pub type ImperativeRow = Slots<4>;

/// Person labels of a [`Tense`].
pub const PERSON_LABELS: [&str; 6] = ["1sg", "2sg", "3sg", "1pl", "2pl", "3pl"];

/// Person labels of an [`ImperativeRow`].
pub const IMPERATIVE_LABELS: [&str; 4] = ["2sg", "3sg", "2pl", "3pl"];

impl<const N: usize> Slots<N> {
    pub fn new(forms: [Form; N]) -> Self {
        Self(forms)
    }

    /// A row with every slot a placeholder.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Build a row by computing each slot from its index.
    pub fn from_fn(f: impl FnMut(usize) -> Form) -> Self {
        Self(std::array::from_fn(f))
    }

    pub fn get(&self, slot: usize) -> Option<&Form> {
        self.0.get(slot)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Form> {
        self.0.iter()
    }

    /// True when every slot is a placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.0.iter().all(Form::is_placeholder)
    }

    /// True when at least one slot is a placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.0.iter().any(Form::is_placeholder)
    }

    /// Apply `f` to every slot in place.
    pub fn visit_forms_mut(&mut self, f: &mut dyn FnMut(&mut Form)) {
        for form in &mut self.0 {
            f(form);
        }
    }
}

impl<const N: usize> Default for Slots<N> {
    fn default() -> Self {
        Self(std::array::from_fn(|_| Form::Placeholder))
    }
}

impl<const N: usize> std::ops::Index<usize> for Slots<N> {
    type Output = Form;

    fn index(&self, slot: usize) -> &Self::Output {
        &self.0[slot]
    }
}

impl<'a, const N: usize> IntoIterator for &'a Slots<N> {
    type Item = &'a Form;
    type IntoIter = std::slice::Iter<'a, Form>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<const N: usize> From<[Form; N]> for Slots<N> {
    fn from(forms: [Form; N]) -> Self {
        Self(forms)
    }
}

impl<const N: usize> Serialize for Slots<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de, const N: usize> Deserialize<'de> for Slots<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let forms = Vec::<Form>::deserialize(deserializer)?;
        if forms.len() > N {
            return Err(D::Error::invalid_length(
                forms.len(),
                &format!("at most {N} forms").as_str(),
            ));
        }
        let mut forms = forms.into_iter();
        Ok(Self::from_fn(|_| forms.next().unwrap_or_default()))
    }
}
