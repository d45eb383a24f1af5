#[cfg(test)]
mod __test__ {

  use crate::plan::parse_explain;

  #[test]
  fn test_full_explain_line() {
    let row = parse_explain(
      "TableScan on Account : [Id, Name], cardinality: 10, sobjectCardinality: 1000, relativeCost 1.5",
    )
    .expect("plan should parse");

    assert_eq!(row.leading_operation_type.as_deref(), Some("TableScan"));
    assert_eq!(row.s_object_type.as_deref(), Some("Account"));
    assert_eq!(row.fields, vec!["Id".to_string(), "Name".to_string()]);
    assert_eq!(row.cardinality, Some(10));
    assert_eq!(row.s_object_cardinality, Some(1000));
    assert_eq!(row.relative_cost, Some(1.5));
  }

  #[test]
  fn test_partial_explain_line() {
    let row = parse_explain("Index on Opportunity : []").expect("plan should parse");
    assert_eq!(row.leading_operation_type.as_deref(), Some("Index"));
    assert!(row.fields.is_empty());
    assert_eq!(row.cardinality, None);
    assert_eq!(row.relative_cost, None);
  }

  #[test]
  fn test_garbage_is_rejected() {
    assert!(parse_explain("not a query plan at all").is_err());
    assert!(parse_explain("").is_err());
  }
}
