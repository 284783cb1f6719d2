use conjugo_tables::{ALTERNATE_SEPARATOR, PLACEHOLDER};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single paradigm slot.
///
/// A form is either a placeholder (unattested or inapplicable) or an ordered,
/// non-empty list of alternates where the first alternate is the preferred
/// one. Forms serialize as their display string: alternates joined by
/// `" / "`, or `"Ø"` for a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Form {
    #[default]
    Placeholder,
    Attested(Vec<String>),
}

impl Form {
    /// A form with one alternate. An empty string yields a placeholder.
    pub fn single(text: impl Into<String>) -> Self {
        Self::from_alternates([text.into()])
    }

    /// Build a form from alternates in preference order.
    ///
    /// Alternates are trimmed; empty strings, placeholder sentinels and exact
    /// duplicates are dropped. Nothing left means a placeholder.
    pub fn from_alternates<I, S>(alternates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut kept: Vec<String> = Vec::new();
        for alternate in alternates {
            let alternate: String = alternate.into();
            let trimmed = alternate.trim();
            if trimmed.is_empty() || trimmed == PLACEHOLDER {
                continue;
            }
            if !kept.iter().any(|existing| existing == trimmed) {
                kept.push(trimmed.to_string());
            }
        }
        if kept.is_empty() {
            Form::Placeholder
        } else {
            Form::Attested(kept)
        }
    }

    /// Parse a display string such as `"amāvērunt / amāvēre"`.
    pub fn parse(text: &str) -> Self {
        Self::from_alternates(text.split(ALTERNATE_SEPARATOR))
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Form::Placeholder)
    }

    /// All alternates; empty for a placeholder.
    pub fn alternates(&self) -> &[String] {
        match self {
            Form::Placeholder => &[],
            Form::Attested(alternates) => alternates,
        }
    }

    /// The preferred alternate.
    pub fn preferred(&self) -> Option<&str> {
        self.alternates().first().map(String::as_str)
    }

    /// This form followed by `more` alternates.
    ///
    /// A placeholder stays a placeholder: alternates are only ever added to
    /// an attested form.
    pub fn with_alternates<I, S>(&self, more: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self {
            Form::Placeholder => Form::Placeholder,
            Form::Attested(alternates) => Self::from_alternates(
                alternates
                    .iter()
                    .cloned()
                    .chain(more.into_iter().map(Into::into)),
            ),
        }
    }

    /// Rewrite every alternate.
    pub fn map_alternates(&self, mut f: impl FnMut(&str) -> String) -> Self {
        Self::from_alternates(self.alternates().iter().map(|alternate| f(alternate.as_str())))
    }
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Form::Placeholder => f.write_str(PLACEHOLDER),
            Form::Attested(alternates) => f.write_str(&alternates.join(ALTERNATE_SEPARATOR)),
        }
    }
}

impl From<&str> for Form {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for Form {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl Serialize for Form {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Form {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse(&text))
    }
}
