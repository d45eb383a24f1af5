//! Query-plan payloads attached to `SOQL_EXECUTE_EXPLAIN` events.

mod __test__;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of the query optimizer's explain output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryPlanRow {
  pub cardinality: Option<u64>,
  pub fields: Vec<String>,
  pub leading_operation_type: Option<String>,
  pub relative_cost: Option<f64>,
  pub s_object_cardinality: Option<u64>,
  pub s_object_type: Option<String>,
}

#[derive(Debug, Error)]
pub enum PlanError {
  #[error("explain payload does not match the plan grammar: {0}")]
  Grammar(String),
}

// <LeadingOp> on <SObject> : [<f1>, <f2>], cardinality: <n>,
// sobjectCardinality: <n>, relativeCost <n>
static PLAN_LINE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(
    r"(?x)
    ^(?P<op>\w+)\s+on\s+(?P<sobject>\S+)\s*:\s*
    \[(?P<fields>[^\]]*)\]
    (?:,\s*cardinality:\s*(?P<cardinality>\d+))?
    (?:,\s*sobjectCardinality:\s*(?P<sobject_cardinality>\d+))?
    (?:,\s*relativeCost\s+(?P<cost>[0-9.]+))?",
  )
  .unwrap()
});

/// Parse the field-3 payload of a `SOQL_EXECUTE_EXPLAIN` line.
pub fn parse_explain(payload: &str) -> Result<QueryPlanRow, PlanError> {
  let caps = PLAN_LINE
    .captures(payload.trim())
    .ok_or_else(|| PlanError::Grammar(payload.to_string()))?;

  let fields = caps["fields"]
    .split(',')
    .map(str::trim)
    .filter(|f| !f.is_empty())
    .map(str::to_string)
    .collect();

  Ok(QueryPlanRow {
    cardinality: caps
      .name("cardinality")
      .and_then(|m| m.as_str().parse().ok()),
    fields,
    leading_operation_type: Some(caps["op"].to_string()),
    relative_cost: caps.name("cost").and_then(|m| m.as_str().parse().ok()),
    s_object_cardinality: caps
      .name("sobject_cardinality")
      .and_then(|m| m.as_str().parse().ok()),
    s_object_type: Some(caps["sobject"].to_string()),
  })
}
