use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-fatal finding reported while building a tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
    /// 1-based source line, when the finding comes from outline text
    pub line: Option<usize>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Info,
    Warning,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            DiagnosticSeverity::Info => "info",
            DiagnosticSeverity::Warning => "warning",
        };
        match self.line {
            Some(line) => write!(f, "{severity} (line {line}): {}", self.message),
            None => write!(f, "{severity}: {}", self.message),
        }
    }
}
