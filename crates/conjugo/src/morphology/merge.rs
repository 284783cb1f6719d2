//! Merging hand-authored overrides into generated paradigms.
//!
//! The merge runs on the serialized JSON tree so an override can touch any
//! branch, tense or slot without knowing the rest of the layout.

use conjugo_tables::{ALTERNATE_SEPARATOR, PLACEHOLDER};
use serde_json::Value;

use crate::morphology::error::MergeError;
use crate::types::Paradigm;

/// Merge `overlay` into `base` in place.
///
/// Objects merge key by key. Arrays merge slot by slot: two strings become
/// the union of their alternates (see [`merge_alternates`]), and the longer
/// array decides the length. Everything else is replaced by `overlay`.
pub fn merge_values(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (Value::Array(base), Value::Array(overlay)) => {
            for (index, value) in overlay.iter().enumerate() {
                match base.get_mut(index) {
                    Some(existing) => merge_slot(existing, value),
                    None => base.push(merge_missing(value)),
                }
            }
            for existing in base.iter_mut().skip(overlay.len()) {
                if let Value::String(text) = existing {
                    *text = merge_alternates("", text);
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}

fn merge_slot(existing: &mut Value, value: &Value) {
    match (existing.as_str(), value.as_str()) {
        (Some(generated), Some(text)) => {
            *existing = Value::String(merge_alternates(text, generated));
        }
        _ => merge_values(existing, value),
    }
}

fn merge_missing(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(merge_alternates(text, "")),
        other => other.clone(),
    }
}

/// Union of two alternate lists in display form.
///
/// Override alternates come first and win case-insensitive ties. The first
/// surviving alternate stays preferred; the rest are sorted. Nothing left
/// gives `"Ø"`.
///
/// ```
/// use conjugo::morphology::merge::merge_alternates;
///
/// assert_eq!(merge_alternates("tulī", "ferī / tetulī"), "tulī / ferī / tetulī");
/// assert_eq!(merge_alternates("Ø", "Ø"), "Ø");
/// ```
pub fn merge_alternates(overlay: &str, generated: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for alternate in overlay
        .split(ALTERNATE_SEPARATOR)
        .chain(generated.split(ALTERNATE_SEPARATOR))
        .map(str::trim)
    {
        if alternate.is_empty() || alternate == PLACEHOLDER {
            continue;
        }
        let lower = alternate.to_lowercase();
        if !kept.iter().any(|existing| existing.to_lowercase() == lower) {
            kept.push(alternate);
        }
    }
    let Some((preferred, rest)) = kept.split_first_mut() else {
        return PLACEHOLDER.to_string();
    };
    rest.sort_unstable();
    let mut alternates = vec![*preferred];
    alternates.extend(rest.iter());
    alternates.join(ALTERNATE_SEPARATOR)
}

/// Merge an override tree into `paradigm` and decode the result.
pub fn apply_override(
    lemma: &str,
    paradigm: &Paradigm,
    overlay: &Value,
) -> Result<Paradigm, MergeError> {
    let mut tree = serde_json::to_value(paradigm).map_err(|source| MergeError::Encode {
        lemma: lemma.to_string(),
        source,
    })?;
    merge_values(&mut tree, overlay);
    serde_json::from_value(tree).map_err(|source| MergeError::Decode {
        lemma: lemma.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn override_alternates_come_first() {
        assert_eq!(merge_alternates("Fuit", "est / fuit"), "Fuit / est");
    }

    #[test]
    fn arrays_take_the_longer_length() {
        let mut base = json!(["a", "b"]);
        merge_values(&mut base, &json!(["c", "Ø", "d"]));
        assert_eq!(base, json!(["c / a", "b", "d"]));
    }

    #[test]
    fn objects_merge_by_key() {
        let mut base = json!({"Present": ["sum"], "Future": ["erō"]});
        merge_values(&mut base, &json!({"Present": ["sum / siem"], "Extra": 1}));
        assert_eq!(
            base,
            json!({"Present": ["sum / siem"], "Future": ["erō"], "Extra": 1})
        );
    }

    #[test]
    fn mismatched_shapes_take_the_overlay() {
        let mut base = json!({"Present": ["sum"]});
        merge_values(&mut base, &json!({"Present": "sum"}));
        assert_eq!(base, json!({"Present": "sum"}));
    }
}
