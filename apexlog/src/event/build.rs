//! Per-kind event construction: field composition into display text, line
//! references, per-event counts, and namespace inference.

use tracing::debug;

use crate::line::EventLine;
use crate::plan;

use super::{CpuKind, EventKind, LineRef, LogEvent, Rollup};

/// Context the constructors read while the parse is in flight.
pub(crate) struct BuildCtx<'a> {
  /// Namespaces observed so far, in arrival order. The method-name
  /// heuristic treats a leading token as a namespace when it is already in
  /// this set.
  pub namespaces: &'a [String],
}

/// Build a typed event from a tokenized line.
pub(crate) fn build_event(
  kind: EventKind,
  line: &EventLine<'_>,
  raw: &str,
  ctx: &BuildCtx<'_>,
) -> LogEvent {
  use EventKind::*;

  let mut ev = LogEvent::new(kind, line.timestamp, raw);
  match kind {
    MethodEntry | MethodExit => {
      ev.line_ref = LineRef::parse(line.part(2)).unwrap_or_default();
      ev.has_valid_symbols = true;
      let sig = non_empty(line.part(4)).unwrap_or_else(|| line.part(3));
      ev.text = sig.to_string();
      if kind == MethodEntry {
        if let Some(ns) = namespace_of_qualified(sig, ctx) {
          ev.namespace = ns;
        }
        // Type.forName loads a class; attribute the window to class loading.
        if sig.contains("System.Type.forName") {
          ev.cpu_kind = CpuKind::Loading;
        }
      }
    },
    ConstructorEntry | ConstructorExit => {
      ev.line_ref = LineRef::parse(line.part(2)).unwrap_or_default();
      ev.has_valid_symbols = true;
      ev.text = format!("{}{}", line.part(5), line.part(4));
      if kind == ConstructorEntry {
        if let Some(ns) = namespace_of_qualified(line.part(5), ctx) {
          ev.namespace = ns;
        }
      }
    },
    SystemMethodEntry | SystemMethodExit => {
      ev.line_ref = LineRef::parse(line.part(2)).unwrap_or_default();
      ev.text = line.part(3).to_string();
    },
    SystemConstructorEntry | SystemConstructorExit => {
      ev.line_ref = LineRef::parse(line.part(2)).unwrap_or_default();
      ev.text = line.part(3).to_string();
      if kind == SystemConstructorEntry {
        ev.suffix = Some(" (system constructor)".to_string());
      }
    },
    CodeUnitStarted => {
      ev.line_ref = LineRef::parse(line.part(2)).unwrap_or_default();
      ev.suffix = Some(" (entrypoint)".to_string());
      build_code_unit(&mut ev, line, ctx);
    },
    DmlBegin => {
      ev.line_ref = LineRef::parse(line.part(2)).unwrap_or_default();
      ev.text = format!("DML {} {}", line.part(3), line.part(4));
      ev.suffix = Some(" (DML)".to_string());
      ev.dml_count = Rollup::of(1);
      let rows = trailing_count(line.part(5)).unwrap_or(0);
      ev.dml_rows = Rollup::of(rows);
      ev.row_count = Some(rows);
    },
    SoqlExecuteBegin => {
      ev.line_ref = LineRef::parse(line.part(2)).unwrap_or_default();
      ev.text = line.part(4).to_string();
      ev.suffix = Some(" (SOQL)".to_string());
      ev.soql_count = Rollup::of(1);
    },
    SoqlExecuteEnd | SoslExecuteEnd => {
      ev.line_ref = LineRef::parse(line.part(2)).unwrap_or_default();
      ev.row_count = trailing_count(line.part(3));
    },
    SoqlExecuteExplain => {
      ev.line_ref = LineRef::parse(line.part(2)).unwrap_or_default();
      ev.text = line.part(3).to_string();
      ev.query_plan = match plan::parse_explain(line.part(3)) {
        Ok(row) => Some(row),
        Err(err) => {
          debug!(%err, "query plan payload did not parse");
          None
        },
      };
    },
    SoslExecuteBegin => {
      ev.line_ref = LineRef::parse(line.part(2)).unwrap_or_default();
      ev.text = line.part(3).to_string();
      ev.suffix = Some(" (SOSL)".to_string());
      ev.sosl_count = Rollup::of(1);
    },
    EnteringManagedPkg => {
      ev.text = line.part(2).to_string();
      let ns = line.part(2).rsplit('.').next().unwrap_or("");
      if !ns.is_empty() {
        ev.namespace = ns.to_string();
      }
    },
    FlowStartInterviewsBegin => {
      ev.text = format!("FLOW_START_INTERVIEWS : {}", line.part(2));
    },
    FlowElementBegin => {
      ev.text = format!("{} {}", line.part(3), line.part(4));
    },
    FlowBulkElementBegin => {
      ev.text = format!("{} {}", line.part(2), line.part(3));
    },
    WfCriteriaBegin => {
      ev.text = format!("{} : {}", line.part(5), line.part(3));
    },
    WfRuleEvalBegin | WfRuleInvocation => {
      ev.text = line.part(2).to_string();
    },
    VfApexCallStart => {
      ev.line_ref = LineRef::parse(line.part(2)).unwrap_or_default();
      ev.text = line.rest(3);
    },
    UserDebug => {
      ev.line_ref = LineRef::parse(line.part(2)).unwrap_or_default();
      ev.text = line.rest(4);
    },
    ExceptionThrown => {
      ev.line_ref = LineRef::parse(line.part(2)).unwrap_or_default();
      ev.text = line.rest(3);
      ev.total_thrown = 1;
    },
    FatalError => {
      ev.text = line.rest(2);
    },
    LimitUsageForNs => {
      // Payload namespace resolves in the after-hook once continuation
      // lines have been attached.
      ev.text = line.part(2).to_string();
    },
    LimitUsage => {
      ev.line_ref = LineRef::parse(line.part(2)).unwrap_or_default();
      ev.text = format!("{} {} out of {}", line.part(3), line.part(4), line.part(5));
    },
    StatementExecute => {
      ev.line_ref = LineRef::parse(line.part(2)).unwrap_or_default();
    },
    Root => unreachable!("the root is synthesised, never built from a line"),
    _ => {
      // Generic shape: an optional [n] token followed by the payload.
      match LineRef::parse(line.part(2)) {
        Some(line_ref) => {
          ev.line_ref = line_ref;
          ev.text = line.rest(3);
        },
        None => {
          ev.text = line.rest(2);
        },
      }
    },
  }
  ev
}

/// `CODE_UNIT_STARTED` dispatch by the sub-kind declared before `:` or `/`
/// in field 3.
fn build_code_unit(ev: &mut LogEvent, line: &EventLine<'_>, ctx: &BuildCtx<'_>) {
  let declared = line.part(3);
  let sub_kind = declared
    .split(|c| c == ':' || c == '/')
    .next()
    .unwrap_or_default();

  match sub_kind {
    "EventService" => {
      ev.text = declared.to_string();
      // Channel names look like `EventService:ns__Event__e` for packaged
      // events.
      let channel = declared.split_once(':').map_or(declared, |(_, c)| c);
      let channel = channel.rsplit('/').next().unwrap_or("");
      let segments: Vec<&str> = channel.split("__").collect();
      if segments.len() == 3 {
        ev.namespace = segments[0].to_string();
      }
    },
    "Validation" | "Workflow" | "Flow" | "VF" => {
      ev.text = declared.to_string();
    },
    "apex" => {
      // `apex://Class/ACTION$method` - a packaged class is dot-qualified.
      ev.text = declared.to_string();
      let class = declared
        .trim_start_matches("apex://")
        .split('/')
        .next()
        .unwrap_or("");
      if let Some(ns) = namespace_of_qualified(class, ctx) {
        ev.namespace = ns;
      }
    },
    "__sfdc_trigger" => {
      ev.text = non_empty(line.part(4)).unwrap_or(declared).to_string();
      let segments: Vec<&str> = declared.split('/').collect();
      if segments.len() == 3 {
        ev.namespace = segments[1].to_string();
      }
    },
    _ => {
      let name = non_empty(line.part(4)).unwrap_or(declared);
      ev.text = name.to_string();
      if let Some(ns) = namespace_of_qualified(name, ctx) {
        ev.namespace = ns;
      }
    },
  }
}

/// Namespace heuristic for dot-qualified Apex names such as
/// `ns.Outer.Inner.method(args)`.
///
/// The leading token is a namespace only when it is already a known
/// namespace or the name has exactly 3 segments before the `(`; a 2-segment
/// name is unmanaged (`"default"`), a bare identifier leaves the namespace
/// unset.
fn namespace_of_qualified(name: &str, ctx: &BuildCtx<'_>) -> Option<String> {
  let qualified = name.split('(').next().unwrap_or("");
  let segments: Vec<&str> = qualified.split('.').collect();
  match segments.as_slice() {
    [] | [_] => None,
    [first, ..] if ctx.namespaces.iter().any(|ns| ns == first) => Some((*first).to_string()),
    [first, _, _] => Some((*first).to_string()),
    _ => Some("default".to_string()),
  }
}

fn non_empty(part: &str) -> Option<&str> {
  if part.is_empty() {
    None
  } else {
    Some(part)
  }
}

/// Parse the count out of `Rows:12`-style tokens.
fn trailing_count(token: &str) -> Option<u64> {
  token.rsplit(':').next()?.trim().parse().ok()
}
