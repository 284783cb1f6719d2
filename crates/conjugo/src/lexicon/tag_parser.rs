//! Parser for the tag grammar: `name` or `name(arg, ...)`.

use std::collections::BTreeMap;

use winnow::combinator::{delimited, opt};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::lexicon::error::{LoadWarning, TagParseError};
use crate::lexicon::tags::{Category, Irregularity, TagSet};

/// A tag split into name and raw argument text.
struct RawTag<'i> {
    name: &'i str,
    args: Option<&'i str>,
}

/// Parse and decode one tag.
///
/// `compound(ad+ferō)` gives a prefix and base, `compound(sum)` an empty
/// prefix. A suppletive tag with fewer than three stems decodes as
/// [`Irregularity::Other`].
pub fn parse_tag(text: &str) -> Result<Irregularity, TagParseError> {
    let trimmed = text.trim();
    let mut remaining = trimmed;
    match raw_tag(&mut remaining) {
        Ok(raw) if remaining.is_empty() => Ok(decode(&raw)),
        Ok(_) => Err(syntax_error(
            trimmed,
            remaining,
            format!(
                "unexpected character: '{}'",
                remaining.chars().next().unwrap_or('?')
            ),
        )),
        Err(e) => Err(syntax_error(trimmed, remaining, format!("parse error: {e}"))),
    }
}

/// Decode a record's `properties` map.
///
/// Unknown categories and malformed tags are kept (as
/// [`Category::Other`] and [`Irregularity::Other`]) and reported as
/// warnings.
pub fn decode_properties(
    lemma: &str,
    properties: &BTreeMap<String, Vec<String>>,
) -> (TagSet, Vec<LoadWarning>) {
    let mut tags = TagSet::new();
    let mut warnings = Vec::new();
    for (name, values) in properties {
        let category = Category::from_name(name);
        if !category.is_known() {
            warnings.push(LoadWarning::UnknownCategory {
                lemma: lemma.to_string(),
                category: name.clone(),
            });
        }
        for value in values {
            let irregularity = match parse_tag(value) {
                Ok(irregularity) => irregularity,
                Err(e) => {
                    warnings.push(LoadWarning::MalformedTag {
                        lemma: lemma.to_string(),
                        tag: value.clone(),
                        message: e.to_string(),
                    });
                    Irregularity::Other {
                        name: value.trim().to_string(),
                        args: Vec::new(),
                    }
                }
            };
            tags.insert(category.clone(), irregularity);
        }
    }
    (tags, warnings)
}

fn raw_tag<'i>(input: &mut &'i str) -> ModalResult<RawTag<'i>> {
    let name = take_while(1.., |c: char| c.is_alphanumeric() || c == '_').parse_next(input)?;
    let args = opt(delimited(
        '(',
        take_while(0.., |c: char| c != '(' && c != ')'),
        ')',
    ))
    .parse_next(input)?;
    Ok(RawTag { name, args })
}

fn decode(raw: &RawTag<'_>) -> Irregularity {
    let Some(content) = raw.args else {
        return Irregularity::from_name(raw.name);
    };
    match raw.name {
        "compound" => match content.split_once('+') {
            Some((prefix, base)) => Irregularity::Compound {
                prefix: prefix.trim().to_string(),
                base: base.trim().to_string(),
            },
            None => Irregularity::Compound {
                prefix: String::new(),
                base: content.trim().to_string(),
            },
        },
        "suppletive" => match split_args(content).as_slice() {
            [present, perfect, supine, ..] => Irregularity::Suppletive {
                present: present.clone(),
                perfect: perfect.clone(),
                supine: supine.clone(),
            },
            _ => Irregularity::Other {
                name: raw.name.to_string(),
                args: split_args(content),
            },
        },
        name => Irregularity::Other {
            name: name.to_string(),
            args: split_args(content),
        },
    }
}

fn split_args(content: &str) -> Vec<String> {
    if content.trim().is_empty() {
        return Vec::new();
    }
    content.split(',').map(|arg| arg.trim().to_string()).collect()
}

fn syntax_error(original: &str, remaining: &str, message: String) -> TagParseError {
    let consumed = original.len() - remaining.len();
    TagParseError::Syntax {
        column: original[..consumed].chars().count() + 1,
        message,
    }
}
