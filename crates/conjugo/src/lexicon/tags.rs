//! Typed irregularity tags.

use std::collections::BTreeMap;

/// Property categories of a verb record, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Derivation,
    Semantic,
    Present,
    Perfect,
    Supine,
    General,
    Archaic,
    Domain,
    /// A category the loader does not know; kept so nothing is lost.
    Other(String),
}

impl Category {
    /// Read a category name. Unknown names become [`Category::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "derivation" => Category::Derivation,
            "semantic" => Category::Semantic,
            "present" => Category::Present,
            "perfect" => Category::Perfect,
            "supine" => Category::Supine,
            "general" => Category::General,
            "archaic" => Category::Archaic,
            "domain" => Category::Domain,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Category::Derivation => "derivation",
            Category::Semantic => "semantic",
            Category::Present => "present",
            Category::Perfect => "perfect",
            Category::Supine => "supine",
            Category::General => "general",
            Category::Archaic => "archaic",
            Category::Domain => "domain",
            Category::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One decoded tag.
///
/// Tags are decoded once when a record is loaded. `Display` writes the tag
/// back in its source syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Irregularity {
    Deponent,
    SemiDeponent,
    DefectivePresent,
    HighlyIrregular,
    Inchoative,
    Desiderative,
    Iterative,
    /// The perfect stem ends in `v` and admits syncopated forms.
    VPerfect,
    /// The perfect drops the nasal infix of the present.
    NoInfixPerfect,
    /// `compound(prefix+base)`; the prefix is empty for `compound(base)`.
    Compound { prefix: String, base: String },
    /// `suppletive(present,perfect,supine)`; an empty entry keeps the
    /// derived stem.
    Suppletive {
        present: String,
        perfect: String,
        supine: String,
    },
    /// Any other tag, with its arguments if it had a parameter list.
    Other { name: String, args: Vec<String> },
}

impl Irregularity {
    /// Decode a bare tag name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "deponent" => Irregularity::Deponent,
            "semi_deponent" => Irregularity::SemiDeponent,
            "defective_present" => Irregularity::DefectivePresent,
            "highly_irregular" => Irregularity::HighlyIrregular,
            "inchoative" => Irregularity::Inchoative,
            "desiderative" => Irregularity::Desiderative,
            "iterative" => Irregularity::Iterative,
            "v_perfect" => Irregularity::VPerfect,
            "no_infix_perfect" => Irregularity::NoInfixPerfect,
            other => Irregularity::Other {
                name: other.to_string(),
                args: Vec::new(),
            },
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Irregularity::Compound { .. })
    }
}

impl std::fmt::Display for Irregularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Irregularity::Deponent => f.write_str("deponent"),
            Irregularity::SemiDeponent => f.write_str("semi_deponent"),
            Irregularity::DefectivePresent => f.write_str("defective_present"),
            Irregularity::HighlyIrregular => f.write_str("highly_irregular"),
            Irregularity::Inchoative => f.write_str("inchoative"),
            Irregularity::Desiderative => f.write_str("desiderative"),
            Irregularity::Iterative => f.write_str("iterative"),
            Irregularity::VPerfect => f.write_str("v_perfect"),
            Irregularity::NoInfixPerfect => f.write_str("no_infix_perfect"),
            Irregularity::Compound { prefix, base } if prefix.is_empty() => {
                write!(f, "compound({base})")
            }
            Irregularity::Compound { prefix, base } => write!(f, "compound({prefix}+{base})"),
            Irregularity::Suppletive {
                present,
                perfect,
                supine,
            } => write!(f, "suppletive({present},{perfect},{supine})"),
            Irregularity::Other { name, args } if args.is_empty() => f.write_str(name),
            Irregularity::Other { name, args } => write!(f, "{name}({})", args.join(",")),
        }
    }
}

/// Decoded tags grouped by category.
///
/// Absent categories mean "no irregularity of that kind". Queries such as
/// [`TagSet::is_deponent`] look across every category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet {
    categories: BTreeMap<Category, Vec<Irregularity>>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: Category, irregularity: Irregularity) {
        self.categories.entry(category).or_default().push(irregularity);
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }

    /// Categories with their tags, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&Category, &[Irregularity])> {
        self.categories
            .iter()
            .map(|(category, tags)| (category, tags.as_slice()))
    }

    /// Tags of one category; empty when the category is absent.
    pub fn category(&self, category: &Category) -> &[Irregularity] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every tag across all categories.
    pub fn all(&self) -> impl Iterator<Item = &Irregularity> {
        self.categories.values().flatten()
    }

    pub fn contains(&self, irregularity: &Irregularity) -> bool {
        self.all().any(|tag| tag == irregularity)
    }

    pub fn is_deponent(&self) -> bool {
        self.contains(&Irregularity::Deponent)
    }

    pub fn is_semi_deponent(&self) -> bool {
        self.contains(&Irregularity::SemiDeponent)
    }

    pub fn is_defective_present(&self) -> bool {
        self.contains(&Irregularity::DefectivePresent)
    }

    pub fn is_highly_irregular(&self) -> bool {
        self.contains(&Irregularity::HighlyIrregular)
    }

    pub fn is_inchoative(&self) -> bool {
        self.contains(&Irregularity::Inchoative)
    }

    pub fn is_desiderative(&self) -> bool {
        self.contains(&Irregularity::Desiderative)
    }

    pub fn is_iterative(&self) -> bool {
        self.contains(&Irregularity::Iterative)
    }

    pub fn has_v_perfect(&self) -> bool {
        self.contains(&Irregularity::VPerfect)
    }

    pub fn has_no_infix_perfect(&self) -> bool {
        self.contains(&Irregularity::NoInfixPerfect)
    }

    /// `(prefix, base)` of the first compound tag.
    pub fn compound(&self) -> Option<(&str, &str)> {
        self.all().find_map(|tag| match tag {
            Irregularity::Compound { prefix, base } => Some((prefix.as_str(), base.as_str())),
            _ => None,
        })
    }

    /// `(present, perfect, supine)` stems of the first suppletive tag.
    pub fn suppletive(&self) -> Option<(&str, &str, &str)> {
        self.all().find_map(|tag| match tag {
            Irregularity::Suppletive {
                present,
                perfect,
                supine,
            } => Some((present.as_str(), perfect.as_str(), supine.as_str())),
            _ => None,
        })
    }

    /// The tags as a record's `properties` map.
    pub fn to_properties(&self) -> BTreeMap<String, Vec<String>> {
        self.categories
            .iter()
            .map(|(category, tags)| {
                (
                    category.name().to_string(),
                    tags.iter().map(ToString::to_string).collect(),
                )
            })
            .collect()
    }
}

/// Writes `a, b | c`: tags joined within a category, categories joined by
/// bars.
impl std::fmt::Display for TagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let groups: Vec<String> = self
            .categories
            .values()
            .filter(|tags| !tags.is_empty())
            .map(|tags| {
                tags.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect();
        f.write_str(&groups.join(" | "))
    }
}
