//! # Line Tokenizer
//!
//! Splits a single log line into its pipe-delimited fields and classifies it.
//! A well-formed event line looks like:
//!
//! ```text
//! HH:MM:SS.f (NANOSECONDS)|EVENT_TYPE|field2|field3|...
//! ```
//!
//! Everything else is one of three diagnostic shapes: a blank line, a
//! continuation of the previous event's text, or a malformed line (a valid
//! type token but no parsable `(N)` timestamp). There is no escape syntax;
//! splitting on `|` preserves empty fields and the caller relies on expected
//! field counts per event type.


use chrono::Timelike;
use smallvec::SmallVec;

/// Field buffer for one line. Most event lines carry fewer than 8 fields.
pub type Fields<'a> = SmallVec<[&'a str; 8]>;

/// Classification of a single raw line.
#[derive(Debug)]
pub enum Line<'a> {
  /// A recognisable event line with its parsed header.
  Event(EventLine<'a>),
  /// Empty or whitespace-only.
  Blank,
  /// The second field is not a `[A-Z_]+` token; the line belongs to the
  /// previous event's text.
  Continuation,
  /// A valid type token but no `(N)` nanosecond stamp in the first field.
  Malformed,
}

/// The structured header of an event line.
#[derive(Debug)]
pub struct EventLine<'a> {
  /// Nanosecond stamp from the parenthesised portion of the first field.
  pub timestamp: u64,
  /// The `HH:MM:SS.f` wall-clock prefix, verbatim.
  pub wall_clock: &'a str,
  /// The event-type token (field index 1).
  pub token: &'a str,
  /// All fields of the line, including the timestamp and type fields, so
  /// that per-type constructors can index fields by their documented
  /// positions.
  pub fields: Fields<'a>,
}

impl<'a> EventLine<'a> {
  /// Field at `idx`, or `""` when the line is shorter than expected.
  pub fn part(&self, idx: usize) -> &'a str {
    self.fields.get(idx).copied().unwrap_or("")
  }

  /// Fields from `from` onwards re-joined with `|`. Payloads that contain a
  /// literal `|` were split like everything else; joining restores them.
  pub fn rest(&self, from: usize) -> String {
    if from < self.fields.len() {
      self.fields[from..].join("|")
    } else {
      String::new()
    }
  }
}

/// Classify one raw line. Single pass, no allocation beyond the field split.
pub fn classify(raw: &str) -> Line<'_> {
  let line = raw.strip_suffix('\r').unwrap_or(raw);
  if line.trim().is_empty() {
    return Line::Blank;
  }

  let fields: Fields = line.split('|').collect();
  let token = fields.get(1).copied().unwrap_or("");
  if !is_type_token(token) {
    return Line::Continuation;
  }

  let head = fields[0];
  let Some(timestamp) = nanos_of(head) else {
    return Line::Malformed;
  };
  let wall_clock = match head.find('(') {
    Some(open) => head[..open].trim(),
    None => "",
  };

  Line::Event(EventLine {
    timestamp,
    wall_clock,
    token,
    fields,
  })
}

/// An event-type token is non-empty and matches `[A-Z_]+` exactly.
pub fn is_type_token(token: &str) -> bool {
  !token.is_empty() && token.bytes().all(|b| b == b'_' || b.is_ascii_uppercase())
}

/// Extract the `(N)` nanosecond stamp out of the first field.
fn nanos_of(head: &str) -> Option<u64> {
  let open = head.find('(')?;
  let close = head[open..].find(')')? + open;
  head[open + 1..close].trim().parse().ok()
}

/// Milliseconds since midnight for a `HH:MM:SS.f` wall-clock prefix.
pub fn wall_clock_millis(wall_clock: &str) -> Option<u32> {
  let time = chrono::NaiveTime::parse_from_str(wall_clock.trim(), "%H:%M:%S%.f").ok()?;
  Some(time.num_seconds_from_midnight() * 1000 + time.nanosecond() / 1_000_000)
}
