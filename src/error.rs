use std::fmt;

use serde::Serialize;

use crate::ast::Position;

/// Severity of a non-fatal finding surfaced alongside a successful minify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Warning,
}

/// A non-fatal finding, e.g. an identifier the rewriter couldn't resolve to
/// any declaration in scope. Minification still completes; the reference is
/// emitted unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub position: Position,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (file, line, col) = &self.position;
        write!(f, "{file}:{line}:{col}: {}", self.message)
    }
}

/// Fatal failure of a minify run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinifyError {
    /// The source failed to parse. Carries the upstream parser's own
    /// message since pest's error already pinpoints the offending span.
    Parse(String),
    /// The source parsed but contains a construct this crate does not
    /// rewrite (e.g. `goto`, a label, a union).
    Unsupported { description: String, position: Position },
}

impl fmt::Display for MinifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinifyError::Parse(message) => write!(f, "parse error: {message}"),
            MinifyError::Unsupported {
                description,
                position: (file, line, col),
            } => write!(f, "{file}:{line}:{col}: unsupported construct: {description}"),
        }
    }
}

impl std::error::Error for MinifyError {}
