#[cfg(test)]
mod __test__ {

  use crate::event::build::{build_event, BuildCtx};
  use crate::event::{CpuKind, EventKind, LineRef, Rollup};
  use crate::line::{classify, EventLine, Line};

  fn tokenized(raw: &str) -> EventLine<'_> {
    match classify(raw) {
      Line::Event(event) => event,
      other => panic!("expected an event line, got {other:?}"),
    }
  }

  fn build(raw: &str, namespaces: &[String]) -> crate::event::LogEvent {
    let line = tokenized(raw);
    let kind = EventKind::from_token(line.token).expect("known token");
    build_event(kind, &line, raw, &BuildCtx { namespaces })
  }

  #[test]
  fn test_dispatch_table() {
    assert_eq!(
      EventKind::from_token("METHOD_ENTRY"),
      Some(EventKind::MethodEntry)
    );
    assert_eq!(
      EventKind::from_token("WF_RULE_INVOCATION"),
      Some(EventKind::WfRuleInvocation)
    );
    assert_eq!(EventKind::from_token("NOT_A_REAL_EVENT"), None);
    assert_eq!(EventKind::from_token(""), None);
  }

  #[test]
  fn test_token_round_trip() {
    let tokens = [
      "EXECUTION_STARTED",
      "CODE_UNIT_STARTED",
      "METHOD_ENTRY",
      "CONSTRUCTOR_EXIT",
      "SYSTEM_CONSTRUCTOR_ENTRY",
      "ENTERING_MANAGED_PKG",
      "DML_BEGIN",
      "SOQL_EXECUTE_EXPLAIN",
      "QUERY_MORE_ITERATIONS",
      "LIMIT_USAGE_FOR_NS",
      "WF_CRITERIA_BEGIN",
      "WF_RULE_NOT_EVALUATED",
      "FLOW_BULK_ELEMENT_LIMIT_USAGE",
      "VF_APEX_CALL_END",
      "EVENT_SERVICE_SUB_DETAIL",
      "SESSION_CACHE_REMOVE_END",
      "DUPLICATE_DETECTION_MATCH_INVOCATION_SUMMARY",
      "NBA_STRATEGY_ERROR",
      "PUSH_NOTIFICATION_SENT",
      "SLA_PROCESS_CASE",
    ];

    for token in tokens {
      let kind =
        EventKind::from_token(token).unwrap_or_else(|| panic!("{token} should be recognised"));
      assert_eq!(kind.token(), token);
      assert_eq!(kind.to_string(), token);
    }

    assert_eq!(EventKind::Root.token(), "");
  }

  #[test]
  fn test_parent_and_exit_flags() {
    assert!(EventKind::MethodEntry.is_parent());
    assert!(!EventKind::MethodEntry.is_exit());
    assert_eq!(
      EventKind::MethodEntry.exit_types(),
      &[EventKind::MethodExit]
    );

    assert!(EventKind::MethodExit.is_exit());
    assert!(!EventKind::MethodExit.is_parent());

    assert!(EventKind::WfCriteriaBegin
      .exit_types()
      .contains(&EventKind::WfRuleNotEvaluated));

    // Pseudo-exits are both parent and exit and never nest children.
    assert!(EventKind::WfFieldUpdate.is_parent());
    assert!(EventKind::WfFieldUpdate.is_exit());
    assert!(EventKind::WfFieldUpdate.next_line_is_exit());

    // A parent with no exit token; closed through the after-hook.
    assert!(EventKind::EnteringManagedPkg.is_parent());
    assert!(EventKind::EnteringManagedPkg.exit_types().is_empty());
  }

  #[test]
  fn test_accepts_text_flags() {
    assert!(EventKind::LimitUsageForNs.accepts_text());
    assert!(EventKind::UserDebug.accepts_text());
    assert!(EventKind::ExceptionThrown.accepts_text());
    assert!(!EventKind::MethodEntry.accepts_text());
    assert!(!EventKind::SoqlExecuteBegin.accepts_text());
  }

  #[test]
  fn test_discontinuity_flags() {
    assert!(EventKind::ExceptionThrown.discontinuity());
    assert!(EventKind::FatalError.discontinuity());
    assert!(!EventKind::MethodExit.discontinuity());
  }

  #[test]
  fn test_line_ref_parse() {
    assert_eq!(LineRef::parse("[12]"), Some(LineRef::Line(12)));
    assert_eq!(LineRef::parse("[EXTERNAL]"), Some(LineRef::External));
    assert_eq!(LineRef::parse("[Account:a]"), None);
    assert_eq!(LineRef::parse("foo"), None);
  }

  #[test]
  fn test_method_entry_construction() {
    let event = build(
      "12:00:00.0 (10)|METHOD_ENTRY|[5]|01p000|ns.Outer.method(String)",
      &[],
    );
    assert_eq!(event.kind, EventKind::MethodEntry);
    assert_eq!(event.line_ref, LineRef::Line(5));
    assert_eq!(event.text, "ns.Outer.method(String)");
    assert!(event.has_valid_symbols);
    // Three dotted segments before the parenthesis: the first is a namespace.
    assert_eq!(event.namespace, "ns");
  }

  #[test]
  fn test_method_namespace_heuristic() {
    // Two segments: unmanaged code.
    let event = build("12:00:00.0 (10)|METHOD_ENTRY|[5]|01p|Outer.method()", &[]);
    assert_eq!(event.namespace, "default");

    // A bare identifier leaves the default in place.
    let event = build("12:00:00.0 (10)|METHOD_ENTRY|[5]|01p|doIt()", &[]);
    assert_eq!(event.namespace, "default");

    // Four segments resolve through the known-namespace set.
    let known = vec!["myns".to_string()];
    let event = build(
      "12:00:00.0 (10)|METHOD_ENTRY|[5]|01p|myns.A.B.method()",
      &known,
    );
    assert_eq!(event.namespace, "myns");

    let event = build(
      "12:00:00.0 (10)|METHOD_ENTRY|[5]|01p|other.A.B.method()",
      &known,
    );
    assert_eq!(event.namespace, "default");
  }

  #[test]
  fn test_type_forname_is_class_loading() {
    let event = build(
      "12:00:00.0 (10)|METHOD_ENTRY|[5]|01p|System.Type.forName(String, String)",
      &[],
    );
    assert_eq!(event.cpu_kind, CpuKind::Loading);
  }

  #[test]
  fn test_constructor_entry_construction() {
    let event = build(
      "12:00:00.0 (10)|CONSTRUCTOR_ENTRY|[5]|01p000|(String)|ns.Outer.Klass",
      &[],
    );
    assert_eq!(event.text, "ns.Outer.Klass(String)");
    assert_eq!(event.namespace, "ns");
    assert!(event.has_valid_symbols);
  }

  #[test]
  fn test_dml_begin_construction() {
    let event = build(
      "12:00:00.0 (10)|DML_BEGIN|[11]|Op:Insert|Type:Account|Rows:5",
      &[],
    );
    assert_eq!(event.text, "DML Op:Insert Type:Account");
    assert_eq!(event.dml_count, Rollup::of(1));
    assert_eq!(event.dml_rows, Rollup::of(5));
  }

  #[test]
  fn test_soql_begin_and_end_construction() {
    let begin = build(
      "12:00:00.0 (10)|SOQL_EXECUTE_BEGIN|[12]|Aggregations:0|SELECT Id FROM Account",
      &[],
    );
    assert_eq!(begin.text, "SELECT Id FROM Account");
    assert_eq!(begin.soql_count, Rollup::of(1));

    let end = build("12:00:00.0 (20)|SOQL_EXECUTE_END|[12]|Rows:12", &[]);
    assert_eq!(end.row_count, Some(12));
  }

  #[test]
  fn test_code_unit_trigger_namespace() {
    let event = build(
      "12:00:00.0 (10)|CODE_UNIT_STARTED|[EXTERNAL]|__sfdc_trigger/myns/MyTrigger|MyTrigger on Account trigger event BeforeInsert",
      &[],
    );
    assert_eq!(event.line_ref, LineRef::External);
    assert_eq!(event.namespace, "myns");
    assert_eq!(event.text, "MyTrigger on Account trigger event BeforeInsert");
  }

  #[test]
  fn test_code_unit_default_shape() {
    let event = build(
      "12:00:00.0 (10)|CODE_UNIT_STARTED|[EXTERNAL]|01p000|MyClass.myMethod()",
      &[],
    );
    assert_eq!(event.text, "MyClass.myMethod()");
    assert_eq!(event.namespace, "default");
  }

  #[test]
  fn test_code_unit_event_service_namespace() {
    let event = build(
      "12:00:00.0 (10)|CODE_UNIT_STARTED|[EXTERNAL]|EventService:myns__Order__e",
      &[],
    );
    assert_eq!(event.namespace, "myns");
    assert_eq!(event.text, "EventService:myns__Order__e");
  }

  #[test]
  fn test_entering_managed_pkg_namespace() {
    let event = build("12:00:00.0 (10)|ENTERING_MANAGED_PKG|appirio.core", &[]);
    assert_eq!(event.namespace, "core");
    assert_eq!(event.cpu_kind, CpuKind::PkgMethod);

    let event = build("12:00:00.0 (10)|ENTERING_MANAGED_PKG|myns", &[]);
    assert_eq!(event.namespace, "myns");
  }

  #[test]
  fn test_generic_event_shapes() {
    // With a leading [n] token the payload starts at field 3.
    let event = build("12:00:00.0 (10)|HEAP_ALLOCATE|[72]|Bytes:3", &[]);
    assert_eq!(event.line_ref, LineRef::Line(72));
    assert_eq!(event.text, "Bytes:3");

    // Without one the payload starts at field 2.
    let event = build("12:00:00.0 (10)|WF_FIELD_UPDATE|[Account: a1]|Field:Name", &[]);
    assert_eq!(event.line_ref, LineRef::None);
    assert_eq!(event.text, "[Account: a1]|Field:Name");
  }

  #[test]
  fn test_exception_thrown_construction() {
    let event = build(
      "12:00:00.0 (10)|EXCEPTION_THROWN|[20]|System.LimitException: Too many SOQL queries: 101",
      &[],
    );
    assert_eq!(event.total_thrown, 1);
    assert!(event.discontinuity);
    assert_eq!(event.text, "System.LimitException: Too many SOQL queries: 101");
  }
}
