//! Shared inflection tables for Latin verb synthesis.
//!
//! This crate holds every ending row, theme vowel and exception list used by
//! the `conjugo` engine. It is pure data plus total lookup functions, so the
//! engine and the CLI always agree on what a table contains.
//!
//! Bump [`TABLES_VERSION`] whenever a change here alters generated output.

/// Version of the tables. Generated paradigms are only comparable across
/// equal versions.
pub const TABLES_VERSION: u32 = 1;

/// Sentinel rendered for an unattested or inapplicable form.
pub const PLACEHOLDER: &str = "Ø";

/// Separator between alternate forms of one slot.
pub const ALTERNATE_SEPARATOR: &str = " / ";

/// Lemma of the copula whose paradigm supplies periphrastic helpers.
pub const COPULA_LEMMA: &str = "sum";

/// Six person slots (1sg, 2sg, 3sg, 1pl, 2pl, 3pl), each with one or more
/// alternate endings. The first alternate is the preferred one.
pub type EndingRow = [&'static [&'static str]; 6];

/// Conjugation classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Conjugation {
    First,
    Second,
    Third,
    /// Third conjugation with an `-iō` present (capiō, faciō).
    ThirdIo,
    Fourth,
}

impl Conjugation {
    pub const ALL: [Conjugation; 5] = [
        Conjugation::First,
        Conjugation::Second,
        Conjugation::Third,
        Conjugation::ThirdIo,
        Conjugation::Fourth,
    ];

    /// Parse a declared class label.
    ///
    /// Accepts the numeric labels used by verb databases (`"1"`, `"3.5"`)
    /// as well as the display label `"3-iō"`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "1" => Some(Conjugation::First),
            "2" => Some(Conjugation::Second),
            "3" => Some(Conjugation::Third),
            "3.5" | "3-iō" | "3-io" | "3io" => Some(Conjugation::ThirdIo),
            "4" => Some(Conjugation::Fourth),
            _ => None,
        }
    }

    /// Display label: `1`, `2`, `3`, `3-iō` or `4`.
    pub fn label(self) -> &'static str {
        match self {
            Conjugation::First => "1",
            Conjugation::Second => "2",
            Conjugation::Third => "3",
            Conjugation::ThirdIo => "3-iō",
            Conjugation::Fourth => "4",
        }
    }

    /// True for the third conjugation and its `-iō` variant.
    pub fn is_third(self) -> bool {
        matches!(self, Conjugation::Third | Conjugation::ThirdIo)
    }
}

impl std::fmt::Display for Conjugation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Grammatical voice of a generated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    Active,
    Passive,
}

// =========================================================================
// Person endings
// =========================================================================

const ACTIVE_ENDINGS: EndingRow = [&["m"], &["s"], &["t"], &["mus"], &["tis"], &["nt"]];
const PASSIVE_ENDINGS: EndingRow = [
    &["r"],
    &["ris", "re"],
    &["tur"],
    &["mur"],
    &["minī"],
    &["ntur"],
];

/// Primary person endings of the present system.
pub fn person_endings(voice: Voice) -> &'static EndingRow {
    match voice {
        Voice::Active => &ACTIVE_ENDINGS,
        Voice::Passive => &PASSIVE_ENDINGS,
    }
}

const BO_FUTURE_ACTIVE: EndingRow = [
    &["bō"],
    &["bis"],
    &["bit"],
    &["bimus"],
    &["bitis"],
    &["bunt"],
];
const BO_FUTURE_PASSIVE: EndingRow = [
    &["bor"],
    &["beris", "bere"],
    &["bitur"],
    &["bimur"],
    &["biminī"],
    &["buntur"],
];

/// The `b`-future endings, appended to stem plus theme vowel.
///
/// Regular for the first and second conjugations and reused by the archaic
/// `-bō` future of the third and fourth.
pub fn bo_future_endings(voice: Voice) -> &'static EndingRow {
    match voice {
        Voice::Active => &BO_FUTURE_ACTIVE,
        Voice::Passive => &BO_FUTURE_PASSIVE,
    }
}

// =========================================================================
// Theme vowels
// =========================================================================

/// Theme vowel of the present infinitive (`amāre`, `regere`, `audīre`).
pub fn infinitive_theme(conjugation: Conjugation) -> &'static str {
    match conjugation {
        Conjugation::First => "ā",
        Conjugation::Second => "ē",
        Conjugation::Third | Conjugation::ThirdIo => "e",
        Conjugation::Fourth => "ī",
    }
}

/// Long theme of the imperfect indicative and the present active participle.
pub fn long_theme(conjugation: Conjugation) -> &'static str {
    match conjugation {
        Conjugation::First => "ā",
        Conjugation::Second | Conjugation::Third => "ē",
        Conjugation::ThirdIo | Conjugation::Fourth => "iē",
    }
}

/// Mood vowel of the present subjunctive.
pub fn present_subjunctive_theme(conjugation: Conjugation) -> &'static str {
    match conjugation {
        Conjugation::First => "ē",
        Conjugation::Second => "eā",
        Conjugation::Third => "ā",
        Conjugation::ThirdIo | Conjugation::Fourth => "iā",
    }
}

/// Theme of the gerund and gerundive, before `nd`.
pub fn gerundive_theme(conjugation: Conjugation) -> &'static str {
    match conjugation {
        Conjugation::First => "a",
        Conjugation::Second | Conjugation::Third => "e",
        Conjugation::ThirdIo | Conjugation::Fourth => "ie",
    }
}

/// Connecting vowel before consonantal endings in imperatives and the
/// `-minī` forms (`amāte`, `regite`, `audīte`).
pub fn imperative_theme(conjugation: Conjugation) -> &'static str {
    match conjugation {
        Conjugation::First => "ā",
        Conjugation::Second => "ē",
        Conjugation::Third | Conjugation::ThirdIo => "i",
        Conjugation::Fourth => "ī",
    }
}

/// Connecting vowel before the `-nt-` of third plural imperatives.
pub fn imperative_plural_theme(conjugation: Conjugation) -> &'static str {
    match conjugation {
        Conjugation::First => "ā",
        Conjugation::Second => "ē",
        Conjugation::Third => "u",
        Conjugation::ThirdIo | Conjugation::Fourth => "iu",
    }
}

/// Theme of the archaic `-bō` future, which only the third and fourth
/// conjugations form.
pub fn bo_future_theme(conjugation: Conjugation) -> Option<&'static str> {
    match conjugation {
        Conjugation::Third => Some("ē"),
        Conjugation::ThirdIo => Some("iē"),
        Conjugation::Fourth => Some("ī"),
        Conjugation::First | Conjugation::Second => None,
    }
}

/// Connecting vowel of the present indicative for person slots 1 through 5.
///
/// Slot 0 (first singular) is taken from the lemma itself and has no
/// connecting vowel. The third conjugation distinguishes second singular
/// passive (`regeris`) from every other person (`regis`, `regitur`).
pub fn present_connecting_vowel(conjugation: Conjugation, voice: Voice, slot: usize) -> &'static str {
    if slot == 0 {
        return "";
    }
    match conjugation {
        Conjugation::First => "ā",
        Conjugation::Second => "ē",
        Conjugation::Fourth => {
            if slot == 5 {
                "iu"
            } else {
                "ī"
            }
        }
        Conjugation::Third => match (voice, slot) {
            (Voice::Passive, 1) => "e",
            (_, 5) => "u",
            _ => "i",
        },
        Conjugation::ThirdIo => match (voice, slot) {
            (Voice::Passive, 1) => "e",
            (_, 5) => "iu",
            _ => "i",
        },
    }
}

// =========================================================================
// Perfect system
// =========================================================================

/// The five tenses of the perfect system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerfectTense {
    PerfectIndicative,
    PluperfectIndicative,
    FuturePerfectIndicative,
    PerfectSubjunctive,
    PluperfectSubjunctive,
}

impl PerfectTense {
    pub const ALL: [PerfectTense; 5] = [
        PerfectTense::PerfectIndicative,
        PerfectTense::PluperfectIndicative,
        PerfectTense::FuturePerfectIndicative,
        PerfectTense::PerfectSubjunctive,
        PerfectTense::PluperfectSubjunctive,
    ];

    /// Endings appended to the full perfect stem.
    pub fn endings(self) -> &'static EndingRow {
        match self {
            PerfectTense::PerfectIndicative => &PERFECT_INDICATIVE,
            PerfectTense::PluperfectIndicative => &PLUPERFECT_INDICATIVE,
            PerfectTense::FuturePerfectIndicative => &FUTURE_PERFECT_INDICATIVE,
            PerfectTense::PerfectSubjunctive => &PERFECT_SUBJUNCTIVE,
            PerfectTense::PluperfectSubjunctive => &PLUPERFECT_SUBJUNCTIVE,
        }
    }

    /// Endings appended to the syncopated stem (perfect stem minus `v`).
    pub fn syncopated_endings(self) -> &'static EndingRow {
        match self {
            PerfectTense::PerfectIndicative => &SYNCOPATED_PERFECT_INDICATIVE,
            PerfectTense::PluperfectIndicative => &SYNCOPATED_PLUPERFECT_INDICATIVE,
            PerfectTense::FuturePerfectIndicative => &SYNCOPATED_FUTURE_PERFECT_INDICATIVE,
            PerfectTense::PerfectSubjunctive => &SYNCOPATED_PERFECT_SUBJUNCTIVE,
            PerfectTense::PluperfectSubjunctive => &SYNCOPATED_PLUPERFECT_SUBJUNCTIVE,
        }
    }

    /// Copula helpers of the periphrastic passive in order of preference.
    ///
    /// Classical helpers come first, then archaic and poetic ones.
    pub fn helper_preference(self) -> &'static [&'static str] {
        match self {
            PerfectTense::PerfectIndicative => &[
                "sum", "fuī", "es", "fuistī", "est", "fuit", "sumus", "fuimus", "estis",
                "fuistis", "sunt", "fuērunt", "fuēre",
            ],
            PerfectTense::PluperfectIndicative => &[
                "eram", "fueram", "erās", "fuerās", "erat", "fuerat", "erāmus", "fuerāmus",
                "erātis", "fuerātis", "erant", "fuerant",
            ],
            PerfectTense::FuturePerfectIndicative => &[
                "erō", "fuerō", "eris", "fueris", "erit", "fuerit", "erimus", "fuerimus",
                "eritis", "fueritis", "erunt", "fuerint",
            ],
            PerfectTense::PerfectSubjunctive => &[
                "sim", "siem", "fuam", "fuerim", "sīs", "siēs", "fuās", "fuerīs", "sit", "siet",
                "fuat", "fuerit", "sīmus", "siēmus", "fuāmus", "fuerīmus", "sītis", "siētis",
                "fuātis", "fuerītis", "sint", "sient", "fuant", "fuerint",
            ],
            PerfectTense::PluperfectSubjunctive => &[
                "essem", "fuissem", "forem", "essēs", "fuissēs", "forēs", "esset", "fuisset",
                "foret", "essēmus", "fuissēmus", "forēmus", "essētis", "fuissētis", "forētis",
                "essent", "fuissent", "forent",
            ],
        }
    }
}

const PERFECT_INDICATIVE: EndingRow = [
    &["ī"],
    &["istī"],
    &["it"],
    &["imus"],
    &["istis"],
    &["ērunt", "ēre"],
];
const PLUPERFECT_INDICATIVE: EndingRow = [
    &["eram"],
    &["erās"],
    &["erat"],
    &["erāmus"],
    &["erātis"],
    &["erant"],
];
const FUTURE_PERFECT_INDICATIVE: EndingRow = [
    &["erō"],
    &["eris"],
    &["erit"],
    &["erimus"],
    &["eritis"],
    &["erint"],
];
const PERFECT_SUBJUNCTIVE: EndingRow = [
    &["erim"],
    &["erīs"],
    &["erit"],
    &["erīmus"],
    &["erītis"],
    &["erint"],
];
const PLUPERFECT_SUBJUNCTIVE: EndingRow = [
    &["issem"],
    &["issēs"],
    &["isset"],
    &["issēmus"],
    &["issētis"],
    &["issent"],
];

const SYNCOPATED_PERFECT_INDICATIVE: EndingRow = [
    &["ī"],
    &["stī"],
    &["t"],
    &["mus"],
    &["stis"],
    &["runt", "re"],
];
const SYNCOPATED_PLUPERFECT_INDICATIVE: EndingRow = [
    &["ram"],
    &["rās"],
    &["rat"],
    &["rāmus"],
    &["rātis"],
    &["rant"],
];
const SYNCOPATED_FUTURE_PERFECT_INDICATIVE: EndingRow = [
    &["rō"],
    &["ris"],
    &["rit"],
    &["rimus"],
    &["ritis"],
    &["rint"],
];
const SYNCOPATED_PERFECT_SUBJUNCTIVE: EndingRow = [
    &["rim"],
    &["rīs"],
    &["rit"],
    &["rīmus"],
    &["rītis"],
    &["rint"],
];
const SYNCOPATED_PLUPERFECT_SUBJUNCTIVE: EndingRow = [
    &["ssem"],
    &["ssēs"],
    &["sset"],
    &["ssēmus"],
    &["ssētis"],
    &["ssent"],
];

/// Ending of the perfect active infinitive.
pub const PERFECT_INFINITIVE_ENDING: &str = "isse";

/// Ending of the syncopated perfect active infinitive (`amāsse`).
pub const SYNCOPATED_INFINITIVE_ENDING: &str = "sse";

// =========================================================================
// Archaic formations
// =========================================================================

/// Endings of the archaic sigmatic future (`faxō`, `faxim`).
pub const SIGMATIC_FUTURE_ENDINGS: EndingRow = [
    &["ō", "im"],
    &["is"],
    &["it"],
    &["imus"],
    &["itis"],
    &["int"],
];

/// Endings of the archaic aorist subjunctive.
pub const AORIST_SUBJUNCTIVE_ENDINGS: EndingRow = [
    &["sim"],
    &["sīs"],
    &["sit"],
    &["sīmus"],
    &["sītis"],
    &["sint"],
];

/// Consonants before which the aorist `s` is lost ahead of `i`/`ī`.
pub const AORIST_S_LOSS_CONSONANTS: &[char] = &['r', 'u', 'm', 'n', 'q'];

/// Verbs with idiosyncratic sigmatic roots. Compounds prepend their prefix.
pub const SIGMATIC_EXCEPTIONS: &[(&str, &str)] =
    &[("faciō", "fax"), ("dīcō", "dīx"), ("dūcō", "dūx")];

/// The one verb whose sigmatic stem shows apophony in compounds.
pub const APOPHONIC_SIGMATIC_LEMMA: &str = "quaerō";

/// Sigmatic stem of the simple apophonic verb.
pub const APOPHONIC_SIGMATIC_STEM: &str = "quaess";

/// Theoretical optative stems for verbs outside the regular pattern.
pub const OPTATIVE_STEMS: &[(&str, &str)] = &[
    ("sum", "sī"),
    ("possum", "possī"),
    ("volō", "velī"),
    ("nōlō", "nōlī"),
    ("mālō", "mālī"),
    ("dō", "duī"),
    ("edō", "edī"),
    ("for", "ferē"),
    ("eō", "eī"),
];

/// Lemma of "to go", excluded from the archaic futures.
pub const GO_LEMMA: &str = "eō";

// =========================================================================
// Irregular lexemes
// =========================================================================

/// An irregular verb whose infinitive maps directly to its present stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrregularInfinitive {
    pub lemma: &'static str,
    pub infinitive: &'static str,
    pub stem: &'static str,
}

pub const IRREGULAR_INFINITIVES: &[IrregularInfinitive] = &[
    IrregularInfinitive { lemma: "ferō", infinitive: "ferre", stem: "fer" },
    IrregularInfinitive { lemma: "sum", infinitive: "esse", stem: "es" },
    IrregularInfinitive { lemma: "possum", infinitive: "posse", stem: "pos" },
    IrregularInfinitive { lemma: "volō", infinitive: "velle", stem: "vel" },
    IrregularInfinitive { lemma: "nōlō", infinitive: "nōlle", stem: "nōl" },
    IrregularInfinitive { lemma: "mālō", infinitive: "mālle", stem: "māl" },
    IrregularInfinitive { lemma: "eō", infinitive: "īre", stem: "ī" },
    IrregularInfinitive { lemma: "fīō", infinitive: "fierī", stem: "fī" },
];

/// Look up an irregular infinitive by its exact form.
pub fn irregular_infinitive(infinitive: &str) -> Option<&'static IrregularInfinitive> {
    IRREGULAR_INFINITIVES
        .iter()
        .find(|entry| entry.infinitive == infinitive)
}

/// Look up an irregular infinitive by the lemma it belongs to.
pub fn irregular_infinitive_for_lemma(lemma: &str) -> Option<&'static IrregularInfinitive> {
    IRREGULAR_INFINITIVES.iter().find(|entry| entry.lemma == lemma)
}

/// Short present imperatives: (lemma, singular, plural).
pub const IRREGULAR_IMPERATIVES: &[(&str, &str, &str)] = &[
    ("dīcō", "dīc", "dīcite"),
    ("dūcō", "dūc", "dūcite"),
    ("faciō", "fac", "facite"),
    ("ferō", "fer", "ferte"),
];

/// Lemma whose passive is supplied by `fīō`.
pub const FACIO_LEMMA: &str = "faciō";

/// Present passive imperative of `faciō` (2sg, 3sg, 2pl, 3pl).
pub const FACIO_PRESENT_PASSIVE_IMPERATIVE: [&str; 4] = ["fī", PLACEHOLDER, "fīte", PLACEHOLDER];

/// Future passive imperative of `faciō` (2sg, 3sg, 2pl, 3pl).
pub const FACIO_FUTURE_PASSIVE_IMPERATIVE: [&str; 4] = ["fītō", "fītō", PLACEHOLDER, "fīuntō"];

// =========================================================================
// Copula
// =========================================================================

/// Classical indicative of the copula, in the order present, imperfect,
/// future, perfect, pluperfect, future perfect.
pub const COPULA_INDICATIVE: [EndingRow; 6] = [
    [&["sum"], &["es"], &["est"], &["sumus"], &["estis"], &["sunt"]],
    [&["eram"], &["erās"], &["erat"], &["erāmus"], &["erātis"], &["erant"]],
    [&["erō"], &["eris"], &["erit"], &["erimus"], &["eritis"], &["erunt"]],
    [
        &["fuī"],
        &["fuistī"],
        &["fuit"],
        &["fuimus"],
        &["fuistis"],
        &["fuērunt", "fuēre"],
    ],
    [
        &["fueram"],
        &["fuerās"],
        &["fuerat"],
        &["fuerāmus"],
        &["fuerātis"],
        &["fuerant"],
    ],
    [
        &["fuerō"],
        &["fueris"],
        &["fuerit"],
        &["fuerimus"],
        &["fueritis"],
        &["fuerint"],
    ],
];

/// Subjunctive of the copula with its archaic alternates, in the order
/// present, imperfect, perfect, pluperfect.
pub const COPULA_SUBJUNCTIVE: [EndingRow; 4] = [
    [
        &["sim", "siem", "fuam"],
        &["sīs", "siēs", "fuās"],
        &["sit", "siet", "fuat"],
        &["sīmus", "siēmus", "fuāmus"],
        &["sītis", "siētis", "fuātis"],
        &["sint", "sient", "fuant"],
    ],
    [
        &["essem", "forem"],
        &["essēs", "forēs"],
        &["esset", "foret"],
        &["essēmus", "forēmus"],
        &["essētis", "forētis"],
        &["essent", "forent"],
    ],
    [
        &["fuerim"],
        &["fuerīs"],
        &["fuerit"],
        &["fuerīmus"],
        &["fuerītis"],
        &["fuerint"],
    ],
    [
        &["fuissem"],
        &["fuissēs"],
        &["fuisset"],
        &["fuissēmus"],
        &["fuissētis"],
        &["fuissent"],
    ],
];

// =========================================================================
// Compound prefixes
// =========================================================================

/// Prefix assimilation: (prefix, root initials, assimilated prefix).
pub const ASSIMILATIONS: &[(&str, &str, &str)] = &[
    ("ad", "cqv", "ac"),
    ("ad", "f", "af"),
    ("ad", "g", "ag"),
    ("ad", "l", "al"),
    ("ad", "n", "an"),
    ("ad", "p", "ap"),
    ("ad", "r", "ar"),
    ("ad", "s", "as"),
    ("ad", "t", "at"),
    ("sub", "c", "suc"),
    ("sub", "f", "suf"),
    ("sub", "g", "sug"),
    ("sub", "p", "sup"),
    ("sub", "m", "sum"),
    ("in", "l", "il"),
    ("in", "r", "ir"),
    ("in", "bmp", "im"),
    ("ob", "c", "oc"),
    ("ob", "f", "of"),
    ("ob", "p", "op"),
    ("con", "l", "col"),
    ("con", "r", "cor"),
    ("con", "bmp", "com"),
    ("dis", "f", "dif"),
    ("ex", "f", "ef"),
];

/// Prefixes that insert `d` before a vowel-initial root.
pub const VOWEL_LINKED_PREFIXES: &[(&str, &str)] = &[("re", "red"), ("prō", "prōd")];

/// Literal exceptions for the stems of "to carry", checked before
/// [`ASSIMILATIONS`]: (prefix, root start, replacement prefix).
pub const CARRY_EXCEPTIONS: &[(&str, &str, &str)] = &[
    ("ab", "fer", "au"),
    ("ab", "tul", "abs"),
    ("sub", "tul", "sus"),
];

/// Assimilated form of `prefix` before a root starting with `initial`.
pub fn assimilated_prefix(prefix: &str, initial: char) -> Option<&'static str> {
    ASSIMILATIONS
        .iter()
        .find(|(p, initials, _)| *p == prefix && initials.contains(initial))
        .map(|(_, _, assimilated)| *assimilated)
}

// =========================================================================
// Participle declension
// =========================================================================

/// Case labels in table order.
pub const CASE_LABELS: [&str; 10] = [
    "Nom Sg", "Gen Sg", "Dat Sg", "Acc Sg", "Abl Sg", "Nom Pl", "Gen Pl", "Dat Pl", "Acc Pl",
    "Abl Pl",
];

/// First/second declension adjective endings: masculine, feminine, neuter.
pub const FIRST_SECOND_ENDINGS: [[&str; 10]; 3] = [
    ["us", "ī", "ō", "um", "ō", "ī", "ōrum", "īs", "ōs", "īs"],
    ["a", "ae", "ae", "am", "ā", "ae", "ārum", "īs", "ās", "īs"],
    ["um", "ī", "ō", "um", "ō", "a", "ōrum", "īs", "a", "īs"],
];

/// Third declension endings of the present active participle (masculine
/// and feminine). The neuter differs in the nominative/accusative.
pub const PRESENT_PARTICIPLE_ENDINGS: [&str; 10] = [
    "ns", "is", "ī", "em", "e", "ēs", "ium", "ibus", "ēs", "ibus",
];

/// Neuter nominative/accusative plural ending of the present participle.
pub const PRESENT_PARTICIPLE_NEUTER_PLURAL: &str = "ia";

// =========================================================================
// Vowel length
// =========================================================================

const VOWEL_LENGTH: &[(char, char)] = &[
    ('a', 'ā'),
    ('e', 'ē'),
    ('i', 'ī'),
    ('o', 'ō'),
    ('u', 'ū'),
    ('y', 'ȳ'),
    ('A', 'Ā'),
    ('E', 'Ē'),
    ('I', 'Ī'),
    ('O', 'Ō'),
    ('U', 'Ū'),
    ('Y', 'Ȳ'),
];

/// Short counterpart of a macron vowel, if `c` is one.
pub fn shorten(c: char) -> Option<char> {
    VOWEL_LENGTH
        .iter()
        .find(|(_, long)| *long == c)
        .map(|(short, _)| *short)
}

/// Macron counterpart of a plain vowel, if `c` is one.
pub fn lengthen(c: char) -> Option<char> {
    VOWEL_LENGTH
        .iter()
        .find(|(short, _)| *short == c)
        .map(|(_, long)| *long)
}

/// True for any vowel, long or short.
pub fn is_vowel(c: char) -> bool {
    VOWEL_LENGTH
        .iter()
        .any(|(short, long)| *short == c || *long == c)
}
