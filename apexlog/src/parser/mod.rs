//! # Log Parser
//!
//! The tree-building pipeline over a raw Apex debug log. One synchronous
//! pass over the input lines produces the complete [`ApexLog`].
//!
//! ## Architecture
//!
//! Each line flows through the same stages:
//! - **Classify**: the tokenizer splits the line and decides whether it is
//!   an event, blank, continuation text, or malformed (`crate::line`).
//! - **Dispatch**: the type token resolves to an [`EventKind`] through the
//!   static table; unknown tokens are dropped with a parsing error.
//! - **Construct**: the per-kind constructor composes text, counts, and
//!   namespaces (`crate::event::build`).
//! - **Place**: the event lands under the current top of the open-frame
//!   stack. Parents with an explicit end token push a frame; exit events
//!   close the nearest matching frame, unwinding anything the log never
//!   ended (truncation recovery); unmatched exits stay as leaves.
//! - **Hooks**: when the next event arrives (or input ends), the previous
//!   event's after-hook runs: pseudo-exits and `ENTERING_MANAGED_PKG`
//!   borrow the next timestamp as their exit, `LIMIT_USAGE_FOR_NS` parses
//!   its accumulated payload, exceptions and fatals raise issues.
//!
//! At end-of-input every still-open frame is marked truncated, then the
//! aggregation pass computes durations and rolls counts up the tree.
//!
//! The parser never fails: every irregularity lands in
//! `parsing_errors` or `issues` on the root and the parse carries on.

mod __test__;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::aggregate;
use crate::event::build::{build_event, BuildCtx};
use crate::event::{EventKind, Rollup};
use crate::issue::{summarize, LogIssue, Severity};
use crate::limits;
use crate::line::{self, EventLine, Line};
use crate::log::{ApexLog, DebugLevel, EventId};

/// Parse a complete log. Never fails; inspect `parsing_errors` and
/// `issues` on the returned root for anything the parser had to drop.
pub fn parse(input: &str) -> ApexLog {
  let mut builder = TreeBuilder::new(input.len() as u64);
  for raw in input.split('\n') {
    builder.take_line(raw);
  }
  builder.finish()
}

/// Parse a byte buffer interpreted as UTF-8 (lossily).
pub fn parse_bytes(bytes: &[u8]) -> ApexLog {
  parse(&String::from_utf8_lossy(bytes))
}

// Preamble header, e.g. `64.0 APEX_CODE,FINE;APEX_PROFILING,INFO;...`
static PREAMBLE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^\d+\.\d+\s+(?P<levels>(?:[A-Z_]+,[A-Z_]+;?)+)$").unwrap());

struct TreeBuilder {
  log: ApexLog,
  /// Currently open frames; index 0 is always the root.
  stack: Vec<EventId>,
  /// Most recent event, the continuation-attachment and after-hook target.
  last_event: Option<EventId>,
  last_timestamp: u64,
  seen_event: bool,
}

impl TreeBuilder {
  fn new(size_bytes: u64) -> Self {
    Self {
      log: ApexLog::new(size_bytes),
      stack: vec![EventId::ROOT],
      last_event: None,
      last_timestamp: 0,
      seen_event: false,
    }
  }

  fn take_line(&mut self, raw: &str) {
    let stripped = raw.strip_suffix('\r').unwrap_or(raw);
    match line::classify(stripped) {
      Line::Blank => {},
      Line::Event(event_line) => self.insert_event(&event_line, stripped),
      Line::Continuation => self.attach_text(stripped),
      Line::Malformed => {
        self.log.parsing_errors.push(format!("Unable to parse line: {stripped}"));
        warn!(line = stripped, "line has a type token but no (N) timestamp");
      },
    }
  }

  /// A line that is not an event: a log-system marker, the preamble, or
  /// continuation text for the previous event.
  fn attach_text(&mut self, text: &str) {
    let trimmed = text.trim();
    if trimmed.starts_with("*** Skipped") {
      self.log.issues.push(LogIssue {
        timestamp: self.last_timestamp,
        summary: trimmed.to_string(),
        message: None,
        severity: Severity::Info,
      });
      return;
    }
    if trimmed.contains("MAXIMUM DEBUG LOG SIZE REACHED") {
      self.log.issues.push(LogIssue {
        timestamp: self.last_timestamp,
        summary: "Maximum debug log size reached".to_string(),
        message: None,
        severity: Severity::Warning,
      });
      return;
    }
    if !self.seen_event {
      if let Some(caps) = PREAMBLE.captures(trimmed) {
        for pair in caps["levels"].split(';').filter(|pair| !pair.is_empty()) {
          if let Some((category, level)) = pair.split_once(',') {
            self.log.debug_levels.push(DebugLevel {
              category: category.to_string(),
              level: level.to_string(),
            });
          }
        }
        return;
      }
    }

    match self.last_event {
      Some(id) if self.log.event(id).accepts_text() => {
        let separator = self.log.event(id).kind.text_separator();
        let event = self.log.event_mut(id);
        event.text.push_str(separator);
        event.text.push_str(text);
      },
      _ => {
        self.log.parsing_errors.push(format!("Invalid line: {text}"));
        warn!(line = text, "continuation text with no owning event");
      },
    }
  }

  fn insert_event(&mut self, event_line: &EventLine<'_>, raw: &str) {
    let Some(kind) = EventKind::from_token(event_line.token) else {
      self
        .log
        .parsing_errors
        .push(format!("Unknown log line: {}", event_line.token));
      warn!(token = event_line.token, "unknown event type token");
      return;
    };

    // The previous event learns about its successor before the new event
    // is placed: pseudo-exits adopt this timestamp, payload owners parse
    // their accumulated text.
    self.run_after_hooks(Some(event_line.timestamp));

    if !self.seen_event {
      self.seen_event = true;
      self.log.start_time = line::wall_clock_millis(event_line.wall_clock);
    }

    let event = {
      let ctx = BuildCtx {
        namespaces: &self.log.namespaces,
      };
      build_event(kind, event_line, raw, &ctx)
    };
    // LIMIT_USAGE_FOR_NS namespaces resolve in the after-hook once the
    // payload is complete.
    if kind != EventKind::LimitUsageForNs {
      let namespace = event.namespace.clone();
      self.log.note_namespace(&namespace);
    }

    let parent = self.stack.last().copied().unwrap_or(EventId::ROOT);
    let id = self.log.push_child(parent, event);
    self.last_timestamp = event_line.timestamp;
    self.last_event = Some(id);

    if kind.is_exit() {
      self.close_frame(id, kind, event_line.timestamp);
    }
    if kind.opens_frame() {
      self.stack.push(id);
    }
  }

  /// Close the nearest open frame that `kind` legitimately ends. Frames
  /// stacked above it never saw their own end marker: they are unwound as
  /// truncated with this exit's timestamp so their durations stay valid.
  fn close_frame(&mut self, exit_id: EventId, kind: EventKind, timestamp: u64) {
    let mut matched = None;
    for depth in (1..self.stack.len()).rev() {
      let frame = self.stack[depth];
      if self.log.event(frame).kind.exit_types().contains(&kind) {
        matched = Some(depth);
        break;
      }
    }
    let Some(depth) = matched else {
      debug!(?kind, "exit event with no open frame, kept as a leaf");
      return;
    };

    while self.stack.len() > depth + 1 {
      if let Some(orphan) = self.stack.pop() {
        let event = self.log.event_mut(orphan);
        event.is_truncated = true;
        event.exit_stamp = Some(timestamp);
        debug!(kind = ?event.kind, "unwound frame without its own end marker");
      }
    }

    if let Some(frame) = self.stack.pop() {
      self.log.event_mut(frame).exit_stamp = Some(timestamp);
      self.on_end(frame, exit_id);
    }
  }

  /// Frame-close hook: end events can carry state that belongs on the
  /// frame they close.
  fn on_end(&mut self, frame: EventId, exit_id: EventId) {
    let row_count = self.log.event(exit_id).row_count;
    match self.log.event(frame).kind {
      EventKind::SoqlExecuteBegin => {
        if let Some(rows) = row_count {
          self.log.event_mut(frame).soql_rows = Rollup::of(rows);
        }
      },
      EventKind::SoslExecuteBegin => {
        if let Some(rows) = row_count {
          self.log.event_mut(frame).sosl_rows = Rollup::of(rows);
        }
      },
      _ => {},
    }
  }

  /// After-hook of the most recent event, invoked when its successor is
  /// about to be inserted, or with `None` at end-of-input.
  fn run_after_hooks(&mut self, next_timestamp: Option<u64>) {
    let Some(id) = self.last_event else { return };
    let (kind, timestamp, has_exit) = {
      let event = self.log.event(id);
      (event.kind, event.timestamp, event.exit_stamp.is_some())
    };

    // A pseudo-exit's frame spans to the next event; with no next event it
    // collapses to zero duration.
    if kind.next_line_is_exit() && !has_exit {
      self.log.event_mut(id).exit_stamp = Some(next_timestamp.unwrap_or(timestamp));
    }

    match kind {
      EventKind::EnteringManagedPkg => {
        if !has_exit {
          self.log.event_mut(id).exit_stamp = Some(next_timestamp.unwrap_or(timestamp));
        }
      },
      EventKind::LimitUsageForNs => {
        let text = self.log.event(id).text.clone();
        let (namespace, parsed) = limits::parse_payload(&text);
        self.log.event_mut(id).namespace = namespace.clone();
        self.log.note_namespace(&namespace);
        self.log.governor_limits.record(timestamp, &namespace, parsed);
      },
      EventKind::ExceptionThrown => {
        let text = &self.log.event(id).text;
        if text.contains("System.LimitException") {
          let issue = LogIssue::from_payload(timestamp, text, Severity::Error);
          self.log.issues.push(issue);
        }
      },
      EventKind::FatalError => {
        let text = self.log.event(id).text.clone();
        let (summary, _) = summarize(&text);
        let message = text
          .split_once('\n')
          .map(|(_, remainder)| remainder.to_string());
        self.log.issues.push(LogIssue {
          timestamp,
          summary,
          message,
          severity: Severity::Error,
        });
      },
      _ => {},
    }
  }

  fn finish(mut self) -> ApexLog {
    self.run_after_hooks(None);

    // Frames still open at end-of-input never got an end marker.
    while self.stack.len() > 1 {
      if let Some(open) = self.stack.pop() {
        let event = self.log.event_mut(open);
        event.is_truncated = true;
        event.exit_stamp = Some(self.last_timestamp);
        debug!(kind = ?event.kind, "frame still open at end of log");
      }
    }

    aggregate::finalize(&mut self.log, self.last_timestamp);
    self.log
  }
}
