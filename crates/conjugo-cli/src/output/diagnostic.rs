//! Miette diagnostic wrapper for malformed JSON input.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A JSON syntax error pointing into the offending file.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid JSON: {message}")]
#[diagnostic(code(conjugo::json))]
pub struct ConjugoDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl ConjugoDiagnostic {
    /// Build a diagnostic from a 1-based line and column.
    pub fn from_json_error(
        path: &Path,
        content: &str,
        line: usize,
        column: usize,
        message: String,
    ) -> Self {
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Macrons are multi-byte; the span must start on a character.
        let mut offset = offset.min(content.len());
        while !content.is_char_boundary(offset) {
            offset -= 1;
        }

        let help = (line == 1 && column == 0)
            .then(|| "the file is empty or not JSON at all".to_string());

        ConjugoDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_lands_on_a_character_boundary() {
        let content = "[\n  {\"lemma\": \"amō\" }\n]";
        let diagnostic =
            ConjugoDiagnostic::from_json_error(Path::new("verbs.json"), content, 2, 17, "x".into());
        assert!(content.is_char_boundary(diagnostic.span.offset()));
    }

    #[test]
    fn offset_is_clamped_to_content() {
        let diagnostic =
            ConjugoDiagnostic::from_json_error(Path::new("verbs.json"), "[", 9, 9, "x".into());
        assert_eq!(diagnostic.span.offset(), 1);
    }
}
