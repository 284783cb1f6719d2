//! Verb records, tags and the loaded lexicon.

pub mod error;
mod irregulars;
mod record;
mod registry;
mod suggest;
mod tag_parser;
mod tags;
mod verb;

pub use error::{LoadError, LoadWarning, RecordError, TagParseError};
pub use irregulars::IrregularTable;
pub use record::{DeclaredConjugation, RawConjugation, VerbRecord};
pub use registry::Lexicon;
pub use suggest::compute_suggestions;
pub use tag_parser::{decode_properties, parse_tag};
pub use tags::{Category, Irregularity, TagSet};
pub use verb::{PrincipalParts, Verb, VoiceClass};
