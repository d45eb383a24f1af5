//! # Governor Limits
//!
//! The `LIMIT_USAGE_FOR_NS` event owns a multi-line payload of the form:
//!
//! ```text
//! (myns)
//!   Number of SOQL queries: 3 out of 100
//!   Maximum CPU time: 250 out of 10000
//! ```
//!
//! Once continuation lines have been attached, the payload is parsed into a
//! fixed [`Limits`] record and recorded twice: as the latest usage for that
//! namespace and as an ordered snapshot. Lines that do not match the
//! `<key>: <used>/<limit>` pattern are skipped; the rest of the payload
//! still counts.


use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// A single counter: how much was used against the namespace's quota.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedLimit {
  pub used: u64,
  pub limit: u64,
}

/// The fixed governor-limit record tracked per namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
  pub soql_queries: UsedLimit,
  pub sosl_queries: UsedLimit,
  pub query_rows: UsedLimit,
  pub dml_statements: UsedLimit,
  pub publish_immediate_dml: UsedLimit,
  pub dml_rows: UsedLimit,
  pub cpu_time: UsedLimit,
  pub heap_size: UsedLimit,
  pub callouts: UsedLimit,
  pub email_invocations: UsedLimit,
  pub future_calls: UsedLimit,
  pub queueable_jobs_added_to_queue: UsedLimit,
  pub mobile_apex_push_calls: UsedLimit,
}

impl Limits {
  /// The counter a payload key refers to, or `None` for keys outside the
  /// fixed table.
  fn slot_mut(&mut self, key: &str) -> Option<&mut UsedLimit> {
    let slot = match key {
      "Number of SOQL queries" => &mut self.soql_queries,
      "Number of SOSL queries" => &mut self.sosl_queries,
      "Number of query rows" => &mut self.query_rows,
      "Number of DML statements" => &mut self.dml_statements,
      "Number of Publish Immediate DML" => &mut self.publish_immediate_dml,
      "Number of DML rows" => &mut self.dml_rows,
      "Maximum CPU time" => &mut self.cpu_time,
      "Maximum heap size" => &mut self.heap_size,
      "Number of callouts" => &mut self.callouts,
      "Number of Email Invocations" => &mut self.email_invocations,
      "Number of future calls" => &mut self.future_calls,
      "Number of queueable jobs added to the queue" => &mut self.queueable_jobs_added_to_queue,
      "Number of Mobile Apex push calls" => &mut self.mobile_apex_push_calls,
      _ => return None,
    };
    Some(slot)
  }
}

/// One parsed `LIMIT_USAGE_FOR_NS` payload, in log order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsSnapshot {
  pub timestamp: u64,
  pub namespace: String,
  pub limits: Limits,
}

/// Governor-limit state on the log root: the latest record per namespace
/// plus every snapshot in arrival order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GovernorLimits {
  pub by_namespace: HashMap<String, Limits>,
  pub snapshots: Vec<LimitsSnapshot>,
}

impl GovernorLimits {
  pub(crate) fn record(&mut self, timestamp: u64, namespace: &str, limits: Limits) {
    self.by_namespace.insert(namespace.to_string(), limits);
    self.snapshots.push(LimitsSnapshot {
      timestamp,
      namespace: namespace.to_string(),
      limits,
    });
  }
}

#[derive(Debug, Error)]
pub enum LimitsError {
  #[error("limit line does not match `<key>: <used>/<limit>`: {0}")]
  Line(String),
}

static NAMESPACE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\((?P<ns>[^)]*)\)").unwrap());
static LIMIT_LINE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^(?P<key>.+?):\s*(?P<used>\d+)\s*/\s*(?P<limit>\d+)$").unwrap());

/// Parse an accumulated payload into its namespace and limits record.
pub fn parse_payload(text: &str) -> (String, Limits) {
  let mut lines = text.lines();

  let namespace = lines
    .next()
    .and_then(|first| NAMESPACE_LINE.captures(first.trim()))
    .map(|caps| caps["ns"].to_string())
    .filter(|ns| !ns.is_empty())
    .unwrap_or_else(|| "default".to_string());

  let mut limits = Limits::default();
  for line in lines {
    match parse_line(line) {
      Ok((key, value)) => match limits.slot_mut(&key) {
        Some(slot) => *slot = value,
        None => debug!(key, "limit key outside the fixed table, skipped"),
      },
      Err(err) => debug!(%err, "skipped limit line"),
    }
  }

  (namespace, limits)
}

/// Parse one payload line into its key and counter. `out of` is normalised
/// to `/` and the `******* CLOSE TO LIMIT` marker is stripped first.
fn parse_line(line: &str) -> Result<(String, UsedLimit), LimitsError> {
  let normalised = line
    .replace("out of", "/")
    .replace("******* CLOSE TO LIMIT", "");
  let normalised = normalised.trim();

  let caps = LIMIT_LINE
    .captures(normalised)
    .ok_or_else(|| LimitsError::Line(line.trim().to_string()))?;

  let parse = |name: &str| caps[name].parse::<u64>();
  let used = parse("used").map_err(|_| LimitsError::Line(line.trim().to_string()))?;
  let limit = parse("limit").map_err(|_| LimitsError::Line(line.trim().to_string()))?;

  Ok((caps["key"].trim().to_string(), UsedLimit { used, limit }))
}
