//! # Parsed Log
//!
//! [`ApexLog`] owns the whole call tree in one arena: every event lives in
//! a single `Vec`, identified by a stable [`EventId`]. Index 0 is the
//! synthetic root. Parent links are plain ids, so the tree is cycle-free by
//! construction and drops without traversal.
//!
//! Alongside the tree, the root carries the session state accumulated over
//! the parse: observed namespaces, preamble debug levels, parsing errors,
//! structured issues, and governor-limit snapshots.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::event::LogEvent;
use crate::issue::LogIssue;
use crate::limits::GovernorLimits;

/// Stable handle to an event in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(u32);

impl EventId {
  /// The synthetic root.
  pub const ROOT: EventId = EventId(0);

  pub fn index(self) -> usize {
    self.0 as usize
  }
}

/// One `CATEGORY,LEVEL` pair from the log preamble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugLevel {
  pub category: String,
  pub level: String,
}

/// The parsed log: the event arena plus root-level session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApexLog {
  events: Vec<LogEvent>,
  /// Byte size of the input buffer.
  pub size_bytes: u64,
  /// Debug-level declarations from the preamble line.
  pub debug_levels: Vec<DebugLevel>,
  /// Distinct namespaces observed, in arrival order.
  pub namespaces: Vec<String>,
  /// Free-form diagnostics for lines the parser had to drop.
  pub parsing_errors: Vec<String>,
  /// Structured diagnostics (exceptions, fatals, log-system markers).
  pub issues: Vec<LogIssue>,
  pub governor_limits: GovernorLimits,
  /// Wall-clock of the first event, in milliseconds since midnight.
  pub start_time: Option<u32>,
  /// Nanosecond stamp where meaningful execution ended.
  pub execution_end_time: u64,
}

impl ApexLog {
  pub(crate) fn new(size_bytes: u64) -> Self {
    Self {
      events: vec![LogEvent::root()],
      size_bytes,
      debug_levels: Vec::new(),
      namespaces: Vec::new(),
      parsing_errors: Vec::new(),
      issues: Vec::new(),
      governor_limits: GovernorLimits::default(),
      start_time: None,
      execution_end_time: 0,
    }
  }

  /// The synthetic root event.
  pub fn root(&self) -> &LogEvent {
    &self.events[0]
  }

  pub fn event(&self, id: EventId) -> &LogEvent {
    &self.events[id.index()]
  }

  pub(crate) fn event_mut(&mut self, id: EventId) -> &mut LogEvent {
    &mut self.events[id.index()]
  }

  /// Every event including the root, in arrival order.
  pub fn events(&self) -> &[LogEvent] {
    &self.events
  }

  /// The children of `id`, in arrival order.
  pub fn children(&self, id: EventId) -> impl Iterator<Item = &LogEvent> + '_ {
    self.events[id.index()]
      .children
      .iter()
      .map(move |&child| &self.events[child.index()])
  }

  /// Append `event` under `parent` and return its id.
  pub(crate) fn push_child(&mut self, parent: EventId, mut event: LogEvent) -> EventId {
    let id = EventId(self.events.len() as u32);
    event.parent = Some(parent);
    self.events.push(event);
    self.events[parent.index()].children.push(id);
    id
  }

  /// Record a namespace if it has not been seen yet.
  pub(crate) fn note_namespace(&mut self, namespace: &str) {
    if !self.namespaces.iter().any(|ns| ns == namespace) {
      self.namespaces.push(namespace.to_string());
    }
  }
}

impl Index<EventId> for ApexLog {
  type Output = LogEvent;

  fn index(&self, id: EventId) -> &LogEvent {
    self.event(id)
  }
}
