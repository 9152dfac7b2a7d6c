//! Diagnostics for the guarded explorer path entry points.
//!
//! Encoding and decoding are total and never fail. Errors only arise when a
//! caller asks for validation before encoding (`ExplorerPath::validate`,
//! `ExplorerPath::try_encode`), or when the CLI is handed unusable input.
//! Every error carries a `miette` source and span so the offending character
//! can be pointed at.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

pub type SourceArc = Arc<NamedSource<String>>;

/// The fields of an explorer path that are written without escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathField {
    PipelineName,
    SnapshotId,
}

impl PathField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathField::PipelineName => "pipeline name",
            PathField::SnapshotId => "snapshot id",
        }
    }
}

impl fmt::Display for PathField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte range of the offending text inside the error source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Source, span and help attached to an error.
#[derive(Debug, Default)]
pub struct ErrorContext {
    pub source: Option<SourceArc>,
    pub span: Option<Span>,
    pub help: Option<String>,
}

impl ErrorContext {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_all(source: SourceArc, span: Span, help: String) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            help: Some(help),
        }
    }
}

#[derive(Debug, Error)]
pub enum PathError {
    #[error("{field} contains reserved character '{character}'")]
    ReservedCharacter {
        field: PathField,
        character: char,
        ctx: ErrorContext,
    },
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
}

impl PathError {
    /// Builds a `ReservedCharacter` error pointing at `offset` inside `value`.
    pub fn reserved_character(field: PathField, value: &str, offset: usize, character: char) -> Self {
        let span = Span {
            start: offset,
            end: offset + character.len_utf8(),
        };
        let help = match field {
            PathField::PipelineName => "pipeline names may not contain '@', '~' or '/'",
            PathField::SnapshotId => "snapshot ids may not contain '~' or '/'",
        };
        PathError::ReservedCharacter {
            field,
            character,
            ctx: ErrorContext::with_all(to_error_source(field.as_str(), value), span, help.to_string()),
        }
    }

    pub fn internal(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PathError::Internal {
            message: message.into(),
            ctx: ErrorContext::none(),
            source: Some(Box::new(source)),
        }
    }

    fn get_ctx(&self) -> &ErrorContext {
        match self {
            PathError::ReservedCharacter { ctx, .. } => ctx,
            PathError::Internal { ctx, .. } => ctx,
        }
    }
}

impl Diagnostic for PathError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            PathError::ReservedCharacter { .. } => "explorer_path::reserved_character",
            PathError::Internal { .. } => "explorer_path::internal",
        };
        Some(Box::new(code) as Box<dyn fmt::Display + 'a>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.get_ctx()
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.get_ctx()
            .source
            .as_ref()
            .map(|s| s.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.get_ctx().span?;
        let text = match self {
            PathError::ReservedCharacter { character, .. } => format!("'{character}' is reserved"),
            PathError::Internal { message, .. } => message.clone(),
        };
        let len = if span.end > span.start {
            span.end - span.start
        } else {
            1
        };
        Some(Box::new(std::iter::once(LabeledSpan::new(
            Some(text),
            span.start,
            len,
        ))))
    }
}

/// Wraps `value` as a named `miette` source.
pub fn to_error_source<S: AsRef<str>>(name: &str, value: S) -> SourceArc {
    Arc::new(NamedSource::new(name, value.as_ref().to_string()))
}

#[cfg(test)]
mod diagnostics_tests {
    use super::*;

    #[test]
    fn reserved_character_points_at_offending_byte() {
        let err = PathError::reserved_character(PathField::PipelineName, "my@job", 2, '@');
        let labels: Vec<_> = err.labels().expect("labels").collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 2);
        assert_eq!(labels[0].len(), 1);
        assert_eq!(
            err.to_string(),
            "pipeline name contains reserved character '@'"
        );
    }

    #[test]
    fn reserved_character_has_code_and_help() {
        let err = PathError::reserved_character(PathField::SnapshotId, "a/b", 1, '/');
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("explorer_path::reserved_character")
        );
        assert!(err.help().unwrap().to_string().contains("snapshot ids"));
        assert!(err.source_code().is_some());
    }
}
