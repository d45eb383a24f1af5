//! # Log Events
//!
//! The universal node type for the parsed call tree, plus the closed event
//! taxonomy behind it.
//!
//! ## Design
//!
//! The Apex log format has on the order of 150 distinct event types, each
//! with its own field layout and a handful of behavioural attributes: does
//! it open a frame, does it close one, does it own multi-line text, is it
//! closed by the next line's timestamp. Instead of a type per event, one
//! [`LogEvent`] struct carries the data and [`EventKind`] carries the
//! behaviour through static tables (see `kind.rs`). Per-kind field
//! composition lives in `build.rs`.
//!
//! ## Ownership
//!
//! Events live in the [`crate::log::ApexLog`] arena. `parent` and
//! `children` are stable [`EventId`] handles into it, so the tree has no
//! cyclic ownership and destruction never follows back-references.

mod __test__;
pub(crate) mod build;
mod kind;

pub use kind::EventKind;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::log::EventId;
use crate::plan::QueryPlanRow;

/// A self/total pair, in nanoseconds for durations and plain counts for
/// everything else. `own` is this node's contribution; `total` folds in the
/// subtree and is filled by the aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rollup {
  pub own: u64,
  pub total: u64,
}

impl Rollup {
  pub fn of(own: u64) -> Self {
    Self { own, total: own }
  }
}

/// The `[n]` source-line token carried by most Apex code events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineRef {
  /// The event carries no line token.
  #[default]
  None,
  /// `[EXTERNAL]` - emitted by code units entered from outside Apex.
  External,
  /// `[n]` - a 1-based line number in the executing source.
  Line(u32),
}

impl LineRef {
  /// Parse a `[n]` or `[EXTERNAL]` token. Anything else is `None` so that
  /// constructors can distinguish "line token" fields from payload fields.
  pub fn parse(token: &str) -> Option<LineRef> {
    let inner = token.strip_prefix('[')?.strip_suffix(']')?;
    if inner == "EXTERNAL" {
      return Some(LineRef::External);
    }
    inner.parse().ok().map(LineRef::Line)
  }
}

/// Coarse grouping used by timeline-style consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
  CodeUnit,
  Method,
  SystemMethod,
  Dml,
  Soql,
  Sosl,
  Flow,
  Workflow,
  Validation,
  Visualforce,
  Callout,
  PlatformEvent,
  Cache,
  Debug,
  Error,
  Limits,
  Other,
}

/// The Salesforce debug-log category an event is emitted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebugCategory {
  ApexCode,
  ApexProfiling,
  Callout,
  Db,
  Workflow,
  Validation,
  Visualforce,
  System,
  Nba,
  Other,
}

/// How wall time under this event is attributed by profiling consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpuKind {
  Method,
  Custom,
  System,
  Free,
  Loading,
  PkgMethod,
}

/// One node of the parsed call tree.
///
/// Behavioural attributes (`is_parent`, `is_exit`, `accepts_text`,
/// `next_line_is_exit`, `exit_types`) are functions of the kind and are
/// reached through the delegating methods below; per-node state that the
/// parse mutates (stamps, text, counts, truncation) lives in fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
  pub kind: EventKind,
  /// Nanosecond stamp from the line header.
  pub timestamp: u64,
  /// Set by a matching exit event, a pseudo-exit hook, or truncation
  /// recovery. Stays `None` only on leaves.
  pub exit_stamp: Option<u64>,
  pub line_ref: LineRef,
  /// The raw line, kept for diagnostic display.
  pub log_line: String,
  /// Display text composed per event type; grows by continuation lines.
  pub text: String,
  /// Managed-package namespace, `"default"` for unmanaged code.
  pub namespace: String,
  /// Short qualifier appended by UIs.
  pub suffix: Option<String>,
  pub category: Category,
  pub debug_category: DebugCategory,
  pub cpu_kind: CpuKind,
  /// Whether symbol resolvers can expect `text` to name real Apex symbols.
  pub has_valid_symbols: bool,
  /// True for events that unwind the call stack (exceptions, fatals).
  pub discontinuity: bool,
  /// Frame closed by end-of-log or an outer exit rather than its own.
  pub is_truncated: bool,
  pub duration: Rollup,
  pub dml_count: Rollup,
  pub soql_count: Rollup,
  pub sosl_count: Rollup,
  pub dml_rows: Rollup,
  pub soql_rows: Rollup,
  pub sosl_rows: Rollup,
  /// Exceptions thrown in this subtree (self contribution plus children,
  /// after aggregation).
  pub total_thrown: u64,
  /// `Rows:n` payload on end events, transferred to the owning begin frame
  /// when the pair is matched.
  pub row_count: Option<u64>,
  /// Parsed query plan, only on `SOQL_EXECUTE_EXPLAIN`.
  pub query_plan: Option<QueryPlanRow>,
  pub parent: Option<EventId>,
  pub children: Vec<EventId>,
}

impl LogEvent {
  /// A bare event of `kind` at `timestamp`. Constructors in `build.rs`
  /// fill in the per-type fields.
  pub(crate) fn new(kind: EventKind, timestamp: u64, log_line: &str) -> Self {
    Self {
      kind,
      timestamp,
      exit_stamp: None,
      line_ref: LineRef::None,
      log_line: log_line.to_string(),
      text: String::new(),
      namespace: "default".to_string(),
      suffix: None,
      category: kind.category(),
      debug_category: kind.debug_category(),
      cpu_kind: kind.cpu_kind(),
      has_valid_symbols: false,
      discontinuity: kind.discontinuity(),
      is_truncated: false,
      duration: Rollup::default(),
      dml_count: Rollup::default(),
      soql_count: Rollup::default(),
      sosl_count: Rollup::default(),
      dml_rows: Rollup::default(),
      soql_rows: Rollup::default(),
      sosl_rows: Rollup::default(),
      total_thrown: 0,
      row_count: None,
      query_plan: None,
      parent: None,
      children: Vec::new(),
    }
  }

  /// The synthetic log root. It is the only event with the `Root` kind.
  pub(crate) fn root() -> Self {
    Self::new(EventKind::Root, 0, "")
  }

  /// Whether this event opens a frame.
  pub fn is_parent(&self) -> bool {
    self.kind.is_parent()
  }

  /// Whether this event closes a frame.
  pub fn is_exit(&self) -> bool {
    self.kind.is_exit()
  }

  /// Whether non-event lines attach to this event's text.
  pub fn accepts_text(&self) -> bool {
    self.kind.accepts_text()
  }

  /// Whether the frame is closed by the next event's timestamp.
  pub fn next_line_is_exit(&self) -> bool {
    self.kind.next_line_is_exit()
  }

  /// Event kinds that legitimately close this frame.
  pub fn exit_types(&self) -> &'static [EventKind] {
    self.kind.exit_types()
  }
}

/// Display formatting for trace dumps: kind, stamp, and composed text.
impl fmt::Display for LogEvent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({}) {}", self.kind, self.timestamp, self.text)
  }
}
