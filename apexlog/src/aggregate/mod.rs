//! # Aggregation
//!
//! The post-parse pass over the finished tree: one bottom-up traversal
//! computes wall-time totals and self times, rolls DML/SOQL/SOSL counts and
//! row counts up to every ancestor, and finalises the synthetic root's
//! stamps. Call trees nest arbitrarily deep, so the traversal is iterative.


use crate::log::{ApexLog, EventId};

/// Aggregate the whole tree and finalise the root. `last_timestamp` is the
/// stamp of the last event observed during the parse.
pub fn finalize(log: &mut ApexLog, last_timestamp: u64) {
  // Reverse pre-order visits every child before its parent.
  let mut order = Vec::with_capacity(log.events().len());
  let mut stack = vec![EventId::ROOT];
  while let Some(id) = stack.pop() {
    order.push(id);
    stack.extend(log.event(id).children.iter().copied());
  }

  for &id in order.iter().rev() {
    if id == EventId::ROOT {
      finalize_root(log, last_timestamp);
    }
    aggregate_node(log, id);
  }
}

#[derive(Default)]
struct Subtotals {
  duration: u64,
  dml: u64,
  soql: u64,
  sosl: u64,
  dml_rows: u64,
  soql_rows: u64,
  sosl_rows: u64,
  thrown: u64,
}

/// Fold the (already aggregated) children into one node.
fn aggregate_node(log: &mut ApexLog, id: EventId) {
  let mut children = Subtotals::default();
  for index in 0..log.event(id).children.len() {
    let child = log.event(id).children[index];
    let event = log.event(child);
    children.duration += event.duration.total;
    children.dml += event.dml_count.total;
    children.soql += event.soql_count.total;
    children.sosl += event.sosl_count.total;
    children.dml_rows += event.dml_rows.total;
    children.soql_rows += event.soql_rows.total;
    children.sosl_rows += event.sosl_rows.total;
    children.thrown += event.total_thrown;
  }

  let event = log.event_mut(id);
  let total = match event.exit_stamp {
    Some(exit) => exit.saturating_sub(event.timestamp),
    None => 0,
  };
  event.duration.total = total;
  // Children may overshoot the window when pseudo-exits are involved;
  // clamp instead of erroring.
  event.duration.own = total.saturating_sub(children.duration);
  event.dml_count.total = event.dml_count.own + children.dml;
  event.soql_count.total = event.soql_count.own + children.soql;
  event.sosl_count.total = event.sosl_count.own + children.sosl;
  event.dml_rows.total = event.dml_rows.own + children.dml_rows;
  event.soql_rows.total = event.soql_rows.own + children.soql_rows;
  event.sosl_rows.total = event.sosl_rows.own + children.sosl_rows;
  event.total_thrown += children.thrown;
}

/// Establish the root's stamps from its children: the first child's
/// timestamp opens the session, and a reverse scan that skips trailing
/// zero-duration bookkeeping events (the cumulative-usage block) closes it.
fn finalize_root(log: &mut ApexLog, last_timestamp: u64) {
  let (first_timestamp, end_stamp, has_children) = {
    let children = &log.event(EventId::ROOT).children;
    let first = children
      .first()
      .map(|&child| log.event(child).timestamp)
      .unwrap_or(0);
    let mut end = None;
    for &child in children.iter().rev() {
      let event = log.event(child);
      if event.exit_stamp.is_some() && event.duration.total > 0 {
        end = event.exit_stamp;
        break;
      }
    }
    (first, end, !children.is_empty())
  };

  log.execution_end_time = end_stamp.unwrap_or(last_timestamp);
  let root = log.event_mut(EventId::ROOT);
  root.timestamp = first_timestamp;
  root.exit_stamp = end_stamp.or_else(|| has_children.then_some(last_timestamp));
}
