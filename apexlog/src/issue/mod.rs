//! Structured diagnostics surfaced on the log root.


use serde::{Deserialize, Serialize};

/// How many characters of a payload's first line make it into a summary.
const SUMMARY_LIMIT: usize = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Error,
  Warning,
  Info,
}

/// One diagnostic entry: a short summary for lists, an optional full
/// message for detail views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogIssue {
  pub timestamp: u64,
  pub summary: String,
  pub message: Option<String>,
  pub severity: Severity,
}

impl LogIssue {
  /// An issue whose summary is the payload's first line, truncated at
  /// `SUMMARY_LIMIT` characters with an ellipsis. The full payload becomes
  /// the message when anything was cut.
  pub fn from_payload(timestamp: u64, payload: &str, severity: Severity) -> Self {
    let (summary, truncated) = summarize(payload);
    Self {
      timestamp,
      summary,
      message: truncated.then(|| payload.to_string()),
      severity,
    }
  }
}

/// First line of `payload`, cut at `SUMMARY_LIMIT` characters. Returns the
/// summary and whether anything was dropped.
pub fn summarize(payload: &str) -> (String, bool) {
  let first_line = payload.lines().next().unwrap_or("");
  let mut summary: String = first_line.chars().take(SUMMARY_LIMIT).collect();
  let truncated = summary.len() < payload.len();
  if summary.chars().count() == SUMMARY_LIMIT && first_line.chars().count() > SUMMARY_LIMIT {
    summary.push('…');
  }
  (summary, truncated)
}
