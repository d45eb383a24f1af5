#[cfg(test)]
mod __test__ {

  use crate::event::{EventKind, LineRef};
  use crate::issue::Severity;
  use crate::limits::UsedLimit;
  use crate::log::EventId;
  use crate::parser::parse;

  /// Surface the parser's recovery logging when a test needs a look at it.
  fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
  }

  #[test]
  fn test_simple_method_pair() {
    init_tracing();
    let log = parse(
      "12:00:00.0 (1000)|METHOD_ENTRY|[10]|cls|foo()\n\
       12:00:00.0 (3000)|METHOD_EXIT|[10]|foo",
    );

    let root = log.root();
    assert_eq!(root.children.len(), 1);

    let entry = &log[root.children[0]];
    assert_eq!(entry.kind, EventKind::MethodEntry);
    assert_eq!(entry.timestamp, 1000);
    assert_eq!(entry.exit_stamp, Some(3000));
    assert_eq!(entry.duration.total, 2000);
    assert_eq!(entry.duration.own, 2000);
    assert_eq!(entry.line_ref, LineRef::Line(10));
    assert!(!entry.is_truncated);

    // The exit event itself is a child of the frame it closed.
    assert_eq!(entry.children.len(), 1);
    assert_eq!(log[entry.children[0]].kind, EventKind::MethodExit);

    assert!(log.parsing_errors.is_empty());
    assert_eq!(log.start_time, Some(43_200_000));
  }

  #[test]
  fn test_nested_with_orphan_exit() {
    let log = parse(
      "12:00:00.0 (1000)|METHOD_ENTRY|[10]|A|a()\n\
       12:00:00.0 (1500)|DML_BEGIN|[11]|Insert|Account|Rows:5\n\
       12:00:00.0 (2500)|DML_END|[11]\n\
       12:00:00.0 (3000)|METHOD_EXIT|[10]|a\n\
       12:00:00.0 (3500)|METHOD_EXIT|[99]|stray",
    );

    let root = log.root();
    assert_eq!(root.children.len(), 2);

    let method = &log[root.children[0]];
    assert_eq!(method.kind, EventKind::MethodEntry);
    assert_eq!(method.duration.total, 2000);
    assert_eq!(method.duration.own, 1000);
    assert_eq!(method.dml_count.total, 1);
    assert_eq!(method.dml_rows.total, 5);
    // DML_BEGIN (owning DML_END) and the METHOD_EXIT.
    assert_eq!(method.children.len(), 2);

    let dml = &log[method.children[0]];
    assert_eq!(dml.kind, EventKind::DmlBegin);
    assert_eq!(dml.exit_stamp, Some(2500));
    assert_eq!(dml.duration.total, 1000);

    // The stray exit stays as a leaf on the root and nothing errors.
    let stray = &log[root.children[1]];
    assert_eq!(stray.kind, EventKind::MethodExit);
    assert!(stray.children.is_empty());
    assert!(log.parsing_errors.is_empty());
  }

  #[test]
  fn test_truncated_log() {
    init_tracing();
    let log = parse(
      "12:00:00.0 (1000)|METHOD_ENTRY|[10]|A|a()\n\
       12:00:00.0 (1500)|METHOD_ENTRY|[11]|B|b()\n\
       12:00:00.0 (2000)|SOQL_EXECUTE_BEGIN|[12]||SELECT Id FROM Account",
    );

    let outer = &log[log.root().children[0]];
    let inner = &log[outer.children[0]];
    let soql = &log[inner.children[0]];

    for event in [outer, inner, soql] {
      assert!(event.is_truncated, "{:?} should be truncated", event.kind);
      assert_eq!(event.exit_stamp, Some(2000));
    }
    assert_eq!(log.root().soql_count.total, 1);
  }

  #[test]
  fn test_limit_usage_payload_attachment() {
    let log = parse(
      "12:00:00.0 (1000)|LIMIT_USAGE_FOR_NS|(myns)\n  \
       Number of SOQL queries: 3 out of 100\n  \
       Maximum CPU time: 250 out of 10000\n\
       12:00:00.0 (1100)|METHOD_ENTRY|[10]|A|a()",
    );

    let limits = &log.governor_limits.by_namespace["myns"];
    assert_eq!(limits.soql_queries, UsedLimit { used: 3, limit: 100 });
    assert_eq!(limits.cpu_time, UsedLimit { used: 250, limit: 10000 });

    assert_eq!(log.governor_limits.snapshots.len(), 1);
    let snapshot = &log.governor_limits.snapshots[0];
    assert_eq!(snapshot.timestamp, 1000);
    assert_eq!(snapshot.namespace, "myns");
    assert_eq!(snapshot.limits.soql_queries.used, 3);

    let event = &log[log.root().children[0]];
    assert_eq!(event.kind, EventKind::LimitUsageForNs);
    assert_eq!(event.namespace, "myns");
    assert!(event.text.contains("Number of SOQL queries"));
    assert!(log.namespaces.iter().any(|ns| ns == "myns"));
  }

  #[test]
  fn test_pseudo_exit_spans_to_next_event() {
    let log = parse(
      "12:00:00.0 (1000)|WF_RULE_INVOCATION|rule-42\n\
       12:00:00.0 (1500)|WF_ACTION|act",
    );

    let root = log.root();
    assert_eq!(root.children.len(), 2);

    let rule = &log[root.children[0]];
    assert_eq!(rule.kind, EventKind::WfRuleInvocation);
    assert_eq!(rule.exit_stamp, Some(1500));
    assert_eq!(rule.duration.total, 500);
    assert!(rule.children.is_empty());

    // The next event is a sibling, not a child.
    let kinds: Vec<EventKind> = log.children(EventId::ROOT).map(|event| event.kind).collect();
    assert_eq!(kinds, vec![EventKind::WfRuleInvocation, EventKind::WfAction]);
  }

  #[test]
  fn test_pseudo_exit_cascade() {
    let log = parse(
      "12:00:00.0 (1000)|WF_RULE_INVOCATION|first\n\
       12:00:00.0 (1200)|WF_RULE_INVOCATION|second",
    );

    let root = log.root();
    let first = &log[root.children[0]];
    let second = &log[root.children[1]];

    // The second's timestamp closes the first; end-of-log collapses the
    // second to a zero-duration frame.
    assert_eq!(first.exit_stamp, Some(1200));
    assert_eq!(first.duration.total, 200);
    assert_eq!(second.exit_stamp, Some(1200));
    assert_eq!(second.duration.total, 0);
  }

  #[test]
  fn test_limit_exception_issue() {
    let log = parse(
      "12:00:00.0 (1000)|EXCEPTION_THROWN|[10]|System.LimitException: Too many SOQL queries: 101",
    );

    assert_eq!(log.issues.len(), 1);
    let issue = &log.issues[0];
    assert_eq!(issue.severity, Severity::Error);
    assert_eq!(issue.timestamp, 1000);
    assert!(issue
      .summary
      .starts_with("System.LimitException: Too many SOQL queries: 101"));
    assert_eq!(log.root().total_thrown, 1);
  }

  #[test]
  fn test_fatal_error_issue() {
    let log = parse(
      "12:00:00.0 (1000)|FATAL_ERROR|System.LimitException: Apex CPU time limit exceeded\n\
       Class.Foo.bar: line 10, column 1",
    );

    assert_eq!(log.issues.len(), 1);
    let issue = &log.issues[0];
    assert_eq!(issue.severity, Severity::Error);
    assert_eq!(
      issue.summary,
      "System.LimitException: Apex CPU time limit exceeded"
    );
    assert_eq!(
      issue.message.as_deref(),
      Some("Class.Foo.bar: line 10, column 1")
    );
  }

  #[test]
  fn test_empty_input() {
    let log = parse("");
    assert!(log.root().children.is_empty());
    assert!(log.parsing_errors.is_empty());
    assert!(log.issues.is_empty());
    assert_eq!(log.execution_end_time, 0);
  }

  #[test]
  fn test_malformed_line_is_dropped_with_error() {
    let log = parse("12:00:00.0|METHOD_ENTRY|[10]|cls|foo()");
    assert!(log.root().children.is_empty());
    assert_eq!(log.parsing_errors.len(), 1);
    assert!(log.parsing_errors[0].starts_with("Unable to parse line:"));
  }

  #[test]
  fn test_unknown_event_type_is_dropped_with_error() {
    let log = parse("12:00:00.0 (1000)|NOT_A_REAL_EVENT|payload");
    assert!(log.root().children.is_empty());
    assert_eq!(
      log.parsing_errors,
      vec!["Unknown log line: NOT_A_REAL_EVENT".to_string()]
    );
  }

  #[test]
  fn test_stray_continuation_is_an_error() {
    let log = parse(
      "12:00:00.0 (1000)|METHOD_ENTRY|[10]|cls|foo()\n\
       this text belongs to nothing",
    );
    assert_eq!(log.parsing_errors.len(), 1);
    assert!(log.parsing_errors[0].starts_with("Invalid line:"));
  }

  #[test]
  fn test_continuation_attaches_to_accepting_event() {
    let log = parse(
      "12:00:00.0 (1000)|USER_DEBUG|[1]|DEBUG|first line\n\
       second line\n\
       third line",
    );
    let debug = &log[log.root().children[0]];
    assert_eq!(debug.text, "first line\nsecond line\nthird line");
    assert!(log.parsing_errors.is_empty());
  }

  #[test]
  fn test_preamble_debug_levels() {
    let log = parse(
      "64.0 APEX_CODE,FINE;APEX_PROFILING,INFO;CALLOUT,NONE\n\
       12:00:00.0 (1000)|EXECUTION_STARTED",
    );

    assert_eq!(log.debug_levels.len(), 3);
    assert_eq!(log.debug_levels[0].category, "APEX_CODE");
    assert_eq!(log.debug_levels[0].level, "FINE");
    assert_eq!(log.debug_levels[2].category, "CALLOUT");
    assert!(log.parsing_errors.is_empty());
  }

  #[test]
  fn test_skip_markers_become_issues() {
    let log = parse(
      "12:00:00.0 (1000)|METHOD_ENTRY|[10]|cls|foo()\n\
       *** Skipped 4561 bytes of detailed log\n\
       *** MAXIMUM DEBUG LOG SIZE REACHED ***\n\
       12:00:00.0 (2000)|METHOD_EXIT|[10]|foo",
    );

    assert_eq!(log.issues.len(), 2);
    assert_eq!(log.issues[0].severity, Severity::Info);
    assert!(log.issues[0].summary.starts_with("*** Skipped"));
    assert_eq!(log.issues[1].severity, Severity::Warning);
    // Markers never disturb the tree.
    assert_eq!(log.root().children.len(), 1);
  }

  #[test]
  fn test_entering_managed_pkg_window() {
    let log = parse(
      "12:00:00.0 (1000)|ENTERING_MANAGED_PKG|myns\n\
       12:00:00.0 (4000)|USER_DEBUG|[1]|DEBUG|done",
    );

    let pkg = &log[log.root().children[0]];
    assert_eq!(pkg.kind, EventKind::EnteringManagedPkg);
    assert_eq!(pkg.exit_stamp, Some(4000));
    assert_eq!(pkg.duration.total, 3000);
    assert!(pkg.children.is_empty());
    assert!(log.namespaces.iter().any(|ns| ns == "myns"));
  }

  #[test]
  fn test_namespace_set_feeds_method_inference() {
    let log = parse(
      "12:00:00.0 (1000)|ENTERING_MANAGED_PKG|myns\n\
       12:00:00.0 (2000)|METHOD_ENTRY|[10]|01p|myns.A.B.method()",
    );

    let method = &log[log.root().children[1]];
    assert_eq!(method.namespace, "myns");
  }

  #[test]
  fn test_exit_unwinds_frames_without_end_markers() {
    let log = parse(
      "12:00:00.0 (1000)|CODE_UNIT_STARTED|[EXTERNAL]|01p|MyClass.run()\n\
       12:00:00.0 (1500)|METHOD_ENTRY|[10]|01p|MyClass.run()\n\
       12:00:00.0 (4000)|CODE_UNIT_FINISHED|MyClass.run()",
    );

    let unit = &log[log.root().children[0]];
    assert_eq!(unit.kind, EventKind::CodeUnitStarted);
    assert_eq!(unit.exit_stamp, Some(4000));
    assert!(!unit.is_truncated);

    // The method never saw METHOD_EXIT; the outer finish unwound it.
    let method = &log[unit.children[0]];
    assert!(method.is_truncated);
    assert_eq!(method.exit_stamp, Some(4000));
  }

  #[test]
  fn test_soql_rows_transfer_to_begin_frame() {
    let log = parse(
      "12:00:00.0 (1000)|SOQL_EXECUTE_BEGIN|[12]|Aggregations:0|SELECT Id FROM Account\n\
       12:00:00.0 (2000)|SOQL_EXECUTE_END|[12]|Rows:12",
    );

    let soql = &log[log.root().children[0]];
    assert_eq!(soql.soql_rows.total, 12);
    assert_eq!(log.root().soql_rows.total, 12);
  }

  #[test]
  fn test_double_parse_doubles_root_counts() {
    let single = "12:00:00.0 (1000)|METHOD_ENTRY|[10]|A|a()\n\
                  12:00:00.0 (1500)|DML_BEGIN|[11]|Insert|Account|Rows:5\n\
                  12:00:00.0 (2500)|DML_END|[11]\n\
                  12:00:00.0 (3000)|METHOD_EXIT|[10]|a\n";
    let once = parse(single);
    let twice = parse(&format!("{single}{single}"));

    assert_eq!(
      twice.root().dml_count.total,
      2 * once.root().dml_count.total
    );
    assert_eq!(twice.root().dml_rows.total, 2 * once.root().dml_rows.total);
    assert_eq!(twice.root().children.len(), 2 * once.root().children.len());
    assert_eq!(twice.start_time, once.start_time);
  }

  #[test]
  fn test_parsed_log_serializes_to_json() {
    let log = parse(
      "12:00:00.0 (1000)|METHOD_ENTRY|[10]|cls|foo()\n\
       12:00:00.0 (3000)|METHOD_EXIT|[10]|foo",
    );

    let value = serde_json::to_value(&log).expect("log should serialize");
    assert_eq!(value["namespaces"][0], "default");
    assert_eq!(value["start_time"], 43_200_000);
    assert_eq!(value["execution_end_time"], 3000);
    // Arena order: root first, then arrival order.
    assert_eq!(value["events"][1]["kind"], "MethodEntry");
    assert_eq!(value["events"][1]["duration"]["total"], 2000);
  }

  #[test]
  fn test_truncation_only_touches_open_frames() {
    let full = "12:00:00.0 (1000)|METHOD_ENTRY|[10]|A|a()\n\
                12:00:00.0 (2000)|METHOD_EXIT|[10]|a\n\
                12:00:00.0 (3000)|METHOD_ENTRY|[11]|B|b()";
    let log = parse(full);

    let closed = &log[log.root().children[0]];
    assert!(!closed.is_truncated);
    assert_eq!(closed.exit_stamp, Some(2000));
    assert_eq!(closed.duration.total, 1000);

    let open = &log[log.root().children[1]];
    assert!(open.is_truncated);
    assert_eq!(open.exit_stamp, Some(3000));
  }
}
