//! Human-readable record of a consensus run

use serde::{Deserialize, Serialize};

/// Severity of a trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl TraceLevel {
    /// Single-character marker shown before the message
    pub fn marker(&self) -> &'static str {
        match self {
            TraceLevel::Info => "-",
            TraceLevel::Success => "v",
            TraceLevel::Warning => "!",
            TraceLevel::Error => "x",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub level: TraceLevel,
    pub message: String,
}

impl std::fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.level.marker(), self.message)
    }
}

/// Ordered log of every transition in a run
///
/// Observability only; control flow never reads it. A disabled trace drops
/// every line, which is what non-verbose runs use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusTrace {
    entries: Vec<TraceEntry>,
    #[serde(skip, default = "enabled_by_default")]
    enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl ConsensusTrace {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            entries: Vec::new(),
            enabled: false,
        }
    }

    pub fn push(&mut self, level: TraceLevel, message: impl Into<String>) {
        if self.enabled {
            self.entries.push(TraceEntry {
                level,
                message: message.into(),
            });
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(TraceLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(TraceLevel::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(TraceLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(TraceLevel::Error, message);
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for ConsensusTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConsensusTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_order() {
        let mut trace = ConsensusTrace::new();
        trace.info("Attempt 1/3");
        trace.error("Validation 1/2 failed");
        trace.success("done");

        assert_eq!(trace.len(), 3);
        assert_eq!(
            trace.to_string(),
            "- Attempt 1/3\nx Validation 1/2 failed\nv done"
        );
    }

    #[test]
    fn test_disabled_trace_records_nothing() {
        let mut trace = ConsensusTrace::disabled();
        trace.info("Attempt 1/3");
        trace.warning("Retrying");
        assert!(trace.is_empty());
        assert_eq!(trace.to_string(), "");
    }

    #[test]
    fn test_serializes_entries_only() {
        let mut trace = ConsensusTrace::new();
        trace.warning("Retrying with new sequence...");
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "entries": [{"level": "warning", "message": "Retrying with new sequence..."}]
            })
        );
    }
}
