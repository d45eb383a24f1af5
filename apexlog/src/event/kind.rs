//! The closed event taxonomy and its behaviour tables.
//!
//! Every recognised `EVENT_TYPE` token maps to one variant here. Behaviour
//! that the original log viewer spread over a class hierarchy is expressed
//! as static match tables on the kind: which events open frames, which
//! close them (and whose), which own multi-line text, and which borrow the
//! next event's timestamp as their exit.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Category, CpuKind, DebugCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
  /// Sentinel for the synthetic log root; never produced by a token.
  Root,

  // Execution scaffolding
  ExecutionStarted,
  ExecutionFinished,
  CodeUnitStarted,
  CodeUnitFinished,

  // Apex methods and constructors
  MethodEntry,
  MethodExit,
  ConstructorEntry,
  ConstructorExit,
  SystemMethodEntry,
  SystemMethodExit,
  SystemConstructorEntry,
  SystemConstructorExit,
  SystemModeEnter,
  SystemModeExit,
  EnteringManagedPkg,

  // Apex code instrumentation
  StatementExecute,
  ExceptionThrown,
  FatalError,
  UserDebug,
  UserInfo,
  VariableAssignment,
  VariableScopeBegin,
  VariableScopeEnd,
  HeapAllocate,
  HeapDeallocate,
  BulkHeapAllocate,
  StaticVariableList,
  StackFrameVariableList,
  TotalEmailRecipientsQueued,
  TestingLimits,
  EmailQueue,
  BulkDmlRetry,
  TemplateProcessingError,
  PushTraceFlags,
  PopTraceFlags,

  // Database
  DmlBegin,
  DmlEnd,
  SoqlExecuteBegin,
  SoqlExecuteEnd,
  SoqlExecuteExplain,
  SoslExecuteBegin,
  SoslExecuteEnd,
  QueryMoreBegin,
  QueryMoreEnd,
  QueryMoreIterations,
  SavepointSet,
  SavepointRollback,
  IdeasQueryExecute,

  // Callouts
  CalloutRequest,
  CalloutResponse,
  NamedCredentialRequest,
  NamedCredentialResponse,
  NamedCredentialResponseDetail,

  // Limits and profiling
  CumulativeLimitUsage,
  CumulativeLimitUsageEnd,
  CumulativeProfiling,
  CumulativeProfilingBegin,
  CumulativeProfilingEnd,
  LimitUsage,
  LimitUsageForNs,

  // Validation rules
  ValidationRule,
  ValidationError,
  ValidationFail,
  ValidationFormula,
  ValidationPass,

  // Workflow
  WfFlowActionBegin,
  WfFlowActionEnd,
  WfFlowActionDetail,
  WfFlowActionError,
  WfFlowActionErrorDetail,
  WfFieldUpdate,
  WfRuleEvalBegin,
  WfRuleEvalEnd,
  WfRuleEvalValue,
  WfRuleFilter,
  WfRuleNotEvaluated,
  WfCriteriaBegin,
  WfCriteriaEnd,
  WfFormula,
  WfAction,
  WfActionsEnd,
  WfActionTask,
  WfApproval,
  WfApprovalRemove,
  WfApprovalSubmit,
  WfApprovalSubmitter,
  WfAssign,
  WfEmailAlert,
  WfEmailSent,
  WfEnqueueActions,
  WfEscalationAction,
  WfEscalationRule,
  WfEvalEntryCriteria,
  WfHardReject,
  WfNextApprover,
  WfNoProcessFound,
  WfOutboundMsg,
  WfProcessFound,
  WfProcessNode,
  WfReassignRecord,
  WfResponseNotify,
  WfRuleEntryOrder,
  WfRuleInvocation,
  WfSoftReject,
  WfSpoolActionBegin,
  WfTimeTrigger,
  WfTimeTriggersBegin,

  // Flow
  FlowStartInterviewsBegin,
  FlowStartInterviewsEnd,
  FlowStartInterviewsError,
  FlowStartInterviewBegin,
  FlowStartInterviewEnd,
  FlowStartInterviewLimitUsage,
  FlowStartScheduledRecords,
  FlowCreateInterviewBegin,
  FlowCreateInterviewEnd,
  FlowCreateInterviewError,
  FlowElementBegin,
  FlowElementEnd,
  FlowElementDeferred,
  FlowElementError,
  FlowElementFault,
  FlowElementLimitUsage,
  FlowInterviewFinished,
  FlowInterviewFinishedLimitUsage,
  FlowInterviewPaused,
  FlowInterviewResumed,
  FlowSubflowDetail,
  FlowValueAssignment,
  FlowLoopDetail,
  FlowRuleDetail,
  FlowActioncallDetail,
  FlowAssignmentDetail,
  FlowWaitEventResumingDetail,
  FlowWaitEventWaitingDetail,
  FlowWaitResumingDetail,
  FlowWaitWaitingDetail,
  FlowBulkElementBegin,
  FlowBulkElementEnd,
  FlowBulkElementDetail,
  FlowBulkElementLimitUsage,
  FlowBulkElementNotSupported,

  // Visualforce
  VfApexCallStart,
  VfApexCallEnd,
  VfDeserializeViewstateBegin,
  VfDeserializeViewstateEnd,
  VfSerializeViewstateBegin,
  VfSerializeViewstateEnd,
  VfEvaluateFormulaBegin,
  VfEvaluateFormulaEnd,
  VfPageMessage,

  // Platform events
  EventServicePubBegin,
  EventServicePubEnd,
  EventServicePubDetail,
  EventServiceSubBegin,
  EventServiceSubEnd,
  EventServiceSubDetail,

  // Platform cache
  OrgCacheGetBegin,
  OrgCacheGetEnd,
  OrgCachePutBegin,
  OrgCachePutEnd,
  OrgCacheRemoveBegin,
  OrgCacheRemoveEnd,
  SessionCacheGetBegin,
  SessionCacheGetEnd,
  SessionCachePutBegin,
  SessionCachePutEnd,
  SessionCacheRemoveBegin,
  SessionCacheRemoveEnd,

  // Duplicate detection
  DuplicateDetectionBegin,
  DuplicateDetectionEnd,
  DuplicateDetectionRuleInvocation,
  DuplicateDetectionMatchInvocationDetails,
  DuplicateDetectionMatchInvocationSummary,
  DuplicateRuleFilter,
  DuplicateRuleFilterResult,
  DuplicateRuleFilterValue,
  MatchEngineBegin,
  MatchEngineEnd,
  XdsDetail,
  XdsResponse,
  XdsResponseDetail,
  XdsResponseError,

  // Next Best Action
  NbaNodeBegin,
  NbaNodeEnd,
  NbaNodeDetail,
  NbaNodeError,
  NbaOfferInvalid,
  NbaStrategyBegin,
  NbaStrategyEnd,
  NbaStrategyError,

  // Push notifications
  PushNotificationInvalidApp,
  PushNotificationInvalidCertificate,
  PushNotificationInvalidNotification,
  PushNotificationNotEnabled,
  PushNotificationSent,

  // SLA / entitlements
  SlaEnd,
  SlaEvalMilestone,
  SlaNullStartDate,
  SlaProcessCase,
}

impl EventKind {
  /// The static dispatch table: type token to event kind. Unknown tokens
  /// return `None` and the caller records a parsing error.
  pub fn from_token(token: &str) -> Option<EventKind> {
    use EventKind::*;
    let kind = match token {
      "EXECUTION_STARTED" => ExecutionStarted,
      "EXECUTION_FINISHED" => ExecutionFinished,
      "CODE_UNIT_STARTED" => CodeUnitStarted,
      "CODE_UNIT_FINISHED" => CodeUnitFinished,
      "METHOD_ENTRY" => MethodEntry,
      "METHOD_EXIT" => MethodExit,
      "CONSTRUCTOR_ENTRY" => ConstructorEntry,
      "CONSTRUCTOR_EXIT" => ConstructorExit,
      "SYSTEM_METHOD_ENTRY" => SystemMethodEntry,
      "SYSTEM_METHOD_EXIT" => SystemMethodExit,
      "SYSTEM_CONSTRUCTOR_ENTRY" => SystemConstructorEntry,
      "SYSTEM_CONSTRUCTOR_EXIT" => SystemConstructorExit,
      "SYSTEM_MODE_ENTER" => SystemModeEnter,
      "SYSTEM_MODE_EXIT" => SystemModeExit,
      "ENTERING_MANAGED_PKG" => EnteringManagedPkg,
      "STATEMENT_EXECUTE" => StatementExecute,
      "EXCEPTION_THROWN" => ExceptionThrown,
      "FATAL_ERROR" => FatalError,
      "USER_DEBUG" => UserDebug,
      "USER_INFO" => UserInfo,
      "VARIABLE_ASSIGNMENT" => VariableAssignment,
      "VARIABLE_SCOPE_BEGIN" => VariableScopeBegin,
      "VARIABLE_SCOPE_END" => VariableScopeEnd,
      "HEAP_ALLOCATE" => HeapAllocate,
      "HEAP_DEALLOCATE" => HeapDeallocate,
      "BULK_HEAP_ALLOCATE" => BulkHeapAllocate,
      "STATIC_VARIABLE_LIST" => StaticVariableList,
      "STACK_FRAME_VARIABLE_LIST" => StackFrameVariableList,
      "TOTAL_EMAIL_RECIPIENTS_QUEUED" => TotalEmailRecipientsQueued,
      "TESTING_LIMITS" => TestingLimits,
      "EMAIL_QUEUE" => EmailQueue,
      "BULK_DML_RETRY" => BulkDmlRetry,
      "TEMPLATE_PROCESSING_ERROR" => TemplateProcessingError,
      "PUSH_TRACE_FLAGS" => PushTraceFlags,
      "POP_TRACE_FLAGS" => PopTraceFlags,
      "DML_BEGIN" => DmlBegin,
      "DML_END" => DmlEnd,
      "SOQL_EXECUTE_BEGIN" => SoqlExecuteBegin,
      "SOQL_EXECUTE_END" => SoqlExecuteEnd,
      "SOQL_EXECUTE_EXPLAIN" => SoqlExecuteExplain,
      "SOSL_EXECUTE_BEGIN" => SoslExecuteBegin,
      "SOSL_EXECUTE_END" => SoslExecuteEnd,
      "QUERY_MORE_BEGIN" => QueryMoreBegin,
      "QUERY_MORE_END" => QueryMoreEnd,
      "QUERY_MORE_ITERATIONS" => QueryMoreIterations,
      "SAVEPOINT_SET" => SavepointSet,
      "SAVEPOINT_ROLLBACK" => SavepointRollback,
      "IDEAS_QUERY_EXECUTE" => IdeasQueryExecute,
      "CALLOUT_REQUEST" => CalloutRequest,
      "CALLOUT_RESPONSE" => CalloutResponse,
      "NAMED_CREDENTIAL_REQUEST" => NamedCredentialRequest,
      "NAMED_CREDENTIAL_RESPONSE" => NamedCredentialResponse,
      "NAMED_CREDENTIAL_RESPONSE_DETAIL" => NamedCredentialResponseDetail,
      "CUMULATIVE_LIMIT_USAGE" => CumulativeLimitUsage,
      "CUMULATIVE_LIMIT_USAGE_END" => CumulativeLimitUsageEnd,
      "CUMULATIVE_PROFILING" => CumulativeProfiling,
      "CUMULATIVE_PROFILING_BEGIN" => CumulativeProfilingBegin,
      "CUMULATIVE_PROFILING_END" => CumulativeProfilingEnd,
      "LIMIT_USAGE" => LimitUsage,
      "LIMIT_USAGE_FOR_NS" => LimitUsageForNs,
      "VALIDATION_RULE" => ValidationRule,
      "VALIDATION_ERROR" => ValidationError,
      "VALIDATION_FAIL" => ValidationFail,
      "VALIDATION_FORMULA" => ValidationFormula,
      "VALIDATION_PASS" => ValidationPass,
      "WF_FLOW_ACTION_BEGIN" => WfFlowActionBegin,
      "WF_FLOW_ACTION_END" => WfFlowActionEnd,
      "WF_FLOW_ACTION_DETAIL" => WfFlowActionDetail,
      "WF_FLOW_ACTION_ERROR" => WfFlowActionError,
      "WF_FLOW_ACTION_ERROR_DETAIL" => WfFlowActionErrorDetail,
      "WF_FIELD_UPDATE" => WfFieldUpdate,
      "WF_RULE_EVAL_BEGIN" => WfRuleEvalBegin,
      "WF_RULE_EVAL_END" => WfRuleEvalEnd,
      "WF_RULE_EVAL_VALUE" => WfRuleEvalValue,
      "WF_RULE_FILTER" => WfRuleFilter,
      "WF_RULE_NOT_EVALUATED" => WfRuleNotEvaluated,
      "WF_CRITERIA_BEGIN" => WfCriteriaBegin,
      "WF_CRITERIA_END" => WfCriteriaEnd,
      "WF_FORMULA" => WfFormula,
      "WF_ACTION" => WfAction,
      "WF_ACTIONS_END" => WfActionsEnd,
      "WF_ACTION_TASK" => WfActionTask,
      "WF_APPROVAL" => WfApproval,
      "WF_APPROVAL_REMOVE" => WfApprovalRemove,
      "WF_APPROVAL_SUBMIT" => WfApprovalSubmit,
      "WF_APPROVAL_SUBMITTER" => WfApprovalSubmitter,
      "WF_ASSIGN" => WfAssign,
      "WF_EMAIL_ALERT" => WfEmailAlert,
      "WF_EMAIL_SENT" => WfEmailSent,
      "WF_ENQUEUE_ACTIONS" => WfEnqueueActions,
      "WF_ESCALATION_ACTION" => WfEscalationAction,
      "WF_ESCALATION_RULE" => WfEscalationRule,
      "WF_EVAL_ENTRY_CRITERIA" => WfEvalEntryCriteria,
      "WF_HARD_REJECT" => WfHardReject,
      "WF_NEXT_APPROVER" => WfNextApprover,
      "WF_NO_PROCESS_FOUND" => WfNoProcessFound,
      "WF_OUTBOUND_MSG" => WfOutboundMsg,
      "WF_PROCESS_FOUND" => WfProcessFound,
      "WF_PROCESS_NODE" => WfProcessNode,
      "WF_REASSIGN_RECORD" => WfReassignRecord,
      "WF_RESPONSE_NOTIFY" => WfResponseNotify,
      "WF_RULE_ENTRY_ORDER" => WfRuleEntryOrder,
      "WF_RULE_INVOCATION" => WfRuleInvocation,
      "WF_SOFT_REJECT" => WfSoftReject,
      "WF_SPOOL_ACTION_BEGIN" => WfSpoolActionBegin,
      "WF_TIME_TRIGGER" => WfTimeTrigger,
      "WF_TIME_TRIGGERS_BEGIN" => WfTimeTriggersBegin,
      "FLOW_START_INTERVIEWS_BEGIN" => FlowStartInterviewsBegin,
      "FLOW_START_INTERVIEWS_END" => FlowStartInterviewsEnd,
      "FLOW_START_INTERVIEWS_ERROR" => FlowStartInterviewsError,
      "FLOW_START_INTERVIEW_BEGIN" => FlowStartInterviewBegin,
      "FLOW_START_INTERVIEW_END" => FlowStartInterviewEnd,
      "FLOW_START_INTERVIEW_LIMIT_USAGE" => FlowStartInterviewLimitUsage,
      "FLOW_START_SCHEDULED_RECORDS" => FlowStartScheduledRecords,
      "FLOW_CREATE_INTERVIEW_BEGIN" => FlowCreateInterviewBegin,
      "FLOW_CREATE_INTERVIEW_END" => FlowCreateInterviewEnd,
      "FLOW_CREATE_INTERVIEW_ERROR" => FlowCreateInterviewError,
      "FLOW_ELEMENT_BEGIN" => FlowElementBegin,
      "FLOW_ELEMENT_END" => FlowElementEnd,
      "FLOW_ELEMENT_DEFERRED" => FlowElementDeferred,
      "FLOW_ELEMENT_ERROR" => FlowElementError,
      "FLOW_ELEMENT_FAULT" => FlowElementFault,
      "FLOW_ELEMENT_LIMIT_USAGE" => FlowElementLimitUsage,
      "FLOW_INTERVIEW_FINISHED" => FlowInterviewFinished,
      "FLOW_INTERVIEW_FINISHED_LIMIT_USAGE" => FlowInterviewFinishedLimitUsage,
      "FLOW_INTERVIEW_PAUSED" => FlowInterviewPaused,
      "FLOW_INTERVIEW_RESUMED" => FlowInterviewResumed,
      "FLOW_SUBFLOW_DETAIL" => FlowSubflowDetail,
      "FLOW_VALUE_ASSIGNMENT" => FlowValueAssignment,
      "FLOW_LOOP_DETAIL" => FlowLoopDetail,
      "FLOW_RULE_DETAIL" => FlowRuleDetail,
      "FLOW_ACTIONCALL_DETAIL" => FlowActioncallDetail,
      "FLOW_ASSIGNMENT_DETAIL" => FlowAssignmentDetail,
      "FLOW_WAIT_EVENT_RESUMING_DETAIL" => FlowWaitEventResumingDetail,
      "FLOW_WAIT_EVENT_WAITING_DETAIL" => FlowWaitEventWaitingDetail,
      "FLOW_WAIT_RESUMING_DETAIL" => FlowWaitResumingDetail,
      "FLOW_WAIT_WAITING_DETAIL" => FlowWaitWaitingDetail,
      "FLOW_BULK_ELEMENT_BEGIN" => FlowBulkElementBegin,
      "FLOW_BULK_ELEMENT_END" => FlowBulkElementEnd,
      "FLOW_BULK_ELEMENT_DETAIL" => FlowBulkElementDetail,
      "FLOW_BULK_ELEMENT_LIMIT_USAGE" => FlowBulkElementLimitUsage,
      "FLOW_BULK_ELEMENT_NOT_SUPPORTED" => FlowBulkElementNotSupported,
      "VF_APEX_CALL_START" => VfApexCallStart,
      "VF_APEX_CALL_END" => VfApexCallEnd,
      "VF_DESERIALIZE_VIEWSTATE_BEGIN" => VfDeserializeViewstateBegin,
      "VF_DESERIALIZE_VIEWSTATE_END" => VfDeserializeViewstateEnd,
      "VF_SERIALIZE_VIEWSTATE_BEGIN" => VfSerializeViewstateBegin,
      "VF_SERIALIZE_VIEWSTATE_END" => VfSerializeViewstateEnd,
      "VF_EVALUATE_FORMULA_BEGIN" => VfEvaluateFormulaBegin,
      "VF_EVALUATE_FORMULA_END" => VfEvaluateFormulaEnd,
      "VF_PAGE_MESSAGE" => VfPageMessage,
      "EVENT_SERVICE_PUB_BEGIN" => EventServicePubBegin,
      "EVENT_SERVICE_PUB_END" => EventServicePubEnd,
      "EVENT_SERVICE_PUB_DETAIL" => EventServicePubDetail,
      "EVENT_SERVICE_SUB_BEGIN" => EventServiceSubBegin,
      "EVENT_SERVICE_SUB_END" => EventServiceSubEnd,
      "EVENT_SERVICE_SUB_DETAIL" => EventServiceSubDetail,
      "ORG_CACHE_GET_BEGIN" => OrgCacheGetBegin,
      "ORG_CACHE_GET_END" => OrgCacheGetEnd,
      "ORG_CACHE_PUT_BEGIN" => OrgCachePutBegin,
      "ORG_CACHE_PUT_END" => OrgCachePutEnd,
      "ORG_CACHE_REMOVE_BEGIN" => OrgCacheRemoveBegin,
      "ORG_CACHE_REMOVE_END" => OrgCacheRemoveEnd,
      "SESSION_CACHE_GET_BEGIN" => SessionCacheGetBegin,
      "SESSION_CACHE_GET_END" => SessionCacheGetEnd,
      "SESSION_CACHE_PUT_BEGIN" => SessionCachePutBegin,
      "SESSION_CACHE_PUT_END" => SessionCachePutEnd,
      "SESSION_CACHE_REMOVE_BEGIN" => SessionCacheRemoveBegin,
      "SESSION_CACHE_REMOVE_END" => SessionCacheRemoveEnd,
      "DUPLICATE_DETECTION_BEGIN" => DuplicateDetectionBegin,
      "DUPLICATE_DETECTION_END" => DuplicateDetectionEnd,
      "DUPLICATE_DETECTION_RULE_INVOCATION" => DuplicateDetectionRuleInvocation,
      "DUPLICATE_DETECTION_MATCH_INVOCATION_DETAILS" => DuplicateDetectionMatchInvocationDetails,
      "DUPLICATE_DETECTION_MATCH_INVOCATION_SUMMARY" => DuplicateDetectionMatchInvocationSummary,
      "DUPLICATE_RULE_FILTER" => DuplicateRuleFilter,
      "DUPLICATE_RULE_FILTER_RESULT" => DuplicateRuleFilterResult,
      "DUPLICATE_RULE_FILTER_VALUE" => DuplicateRuleFilterValue,
      "MATCH_ENGINE_BEGIN" => MatchEngineBegin,
      "MATCH_ENGINE_END" => MatchEngineEnd,
      "XDS_DETAIL" => XdsDetail,
      "XDS_RESPONSE" => XdsResponse,
      "XDS_RESPONSE_DETAIL" => XdsResponseDetail,
      "XDS_RESPONSE_ERROR" => XdsResponseError,
      "NBA_NODE_BEGIN" => NbaNodeBegin,
      "NBA_NODE_END" => NbaNodeEnd,
      "NBA_NODE_DETAIL" => NbaNodeDetail,
      "NBA_NODE_ERROR" => NbaNodeError,
      "NBA_OFFER_INVALID" => NbaOfferInvalid,
      "NBA_STRATEGY_BEGIN" => NbaStrategyBegin,
      "NBA_STRATEGY_END" => NbaStrategyEnd,
      "NBA_STRATEGY_ERROR" => NbaStrategyError,
      "PUSH_NOTIFICATION_INVALID_APP" => PushNotificationInvalidApp,
      "PUSH_NOTIFICATION_INVALID_CERTIFICATE" => PushNotificationInvalidCertificate,
      "PUSH_NOTIFICATION_INVALID_NOTIFICATION" => PushNotificationInvalidNotification,
      "PUSH_NOTIFICATION_NOT_ENABLED" => PushNotificationNotEnabled,
      "PUSH_NOTIFICATION_SENT" => PushNotificationSent,
      "SLA_END" => SlaEnd,
      "SLA_EVAL_MILESTONE" => SlaEvalMilestone,
      "SLA_NULL_START_DATE" => SlaNullStartDate,
      "SLA_PROCESS_CASE" => SlaProcessCase,
      _ => return None,
    };
    Some(kind)
  }

  /// The wire token for this kind, the inverse of [`EventKind::from_token`].
  /// The root sentinel has no token and renders as an empty string.
  pub fn token(self) -> &'static str {
    use EventKind::*;
    match self {
      Root => "",
      ExecutionStarted => "EXECUTION_STARTED",
      ExecutionFinished => "EXECUTION_FINISHED",
      CodeUnitStarted => "CODE_UNIT_STARTED",
      CodeUnitFinished => "CODE_UNIT_FINISHED",
      MethodEntry => "METHOD_ENTRY",
      MethodExit => "METHOD_EXIT",
      ConstructorEntry => "CONSTRUCTOR_ENTRY",
      ConstructorExit => "CONSTRUCTOR_EXIT",
      SystemMethodEntry => "SYSTEM_METHOD_ENTRY",
      SystemMethodExit => "SYSTEM_METHOD_EXIT",
      SystemConstructorEntry => "SYSTEM_CONSTRUCTOR_ENTRY",
      SystemConstructorExit => "SYSTEM_CONSTRUCTOR_EXIT",
      SystemModeEnter => "SYSTEM_MODE_ENTER",
      SystemModeExit => "SYSTEM_MODE_EXIT",
      EnteringManagedPkg => "ENTERING_MANAGED_PKG",
      StatementExecute => "STATEMENT_EXECUTE",
      ExceptionThrown => "EXCEPTION_THROWN",
      FatalError => "FATAL_ERROR",
      UserDebug => "USER_DEBUG",
      UserInfo => "USER_INFO",
      VariableAssignment => "VARIABLE_ASSIGNMENT",
      VariableScopeBegin => "VARIABLE_SCOPE_BEGIN",
      VariableScopeEnd => "VARIABLE_SCOPE_END",
      HeapAllocate => "HEAP_ALLOCATE",
      HeapDeallocate => "HEAP_DEALLOCATE",
      BulkHeapAllocate => "BULK_HEAP_ALLOCATE",
      StaticVariableList => "STATIC_VARIABLE_LIST",
      StackFrameVariableList => "STACK_FRAME_VARIABLE_LIST",
      TotalEmailRecipientsQueued => "TOTAL_EMAIL_RECIPIENTS_QUEUED",
      TestingLimits => "TESTING_LIMITS",
      EmailQueue => "EMAIL_QUEUE",
      BulkDmlRetry => "BULK_DML_RETRY",
      TemplateProcessingError => "TEMPLATE_PROCESSING_ERROR",
      PushTraceFlags => "PUSH_TRACE_FLAGS",
      PopTraceFlags => "POP_TRACE_FLAGS",
      DmlBegin => "DML_BEGIN",
      DmlEnd => "DML_END",
      SoqlExecuteBegin => "SOQL_EXECUTE_BEGIN",
      SoqlExecuteEnd => "SOQL_EXECUTE_END",
      SoqlExecuteExplain => "SOQL_EXECUTE_EXPLAIN",
      SoslExecuteBegin => "SOSL_EXECUTE_BEGIN",
      SoslExecuteEnd => "SOSL_EXECUTE_END",
      QueryMoreBegin => "QUERY_MORE_BEGIN",
      QueryMoreEnd => "QUERY_MORE_END",
      QueryMoreIterations => "QUERY_MORE_ITERATIONS",
      SavepointSet => "SAVEPOINT_SET",
      SavepointRollback => "SAVEPOINT_ROLLBACK",
      IdeasQueryExecute => "IDEAS_QUERY_EXECUTE",
      CalloutRequest => "CALLOUT_REQUEST",
      CalloutResponse => "CALLOUT_RESPONSE",
      NamedCredentialRequest => "NAMED_CREDENTIAL_REQUEST",
      NamedCredentialResponse => "NAMED_CREDENTIAL_RESPONSE",
      NamedCredentialResponseDetail => "NAMED_CREDENTIAL_RESPONSE_DETAIL",
      CumulativeLimitUsage => "CUMULATIVE_LIMIT_USAGE",
      CumulativeLimitUsageEnd => "CUMULATIVE_LIMIT_USAGE_END",
      CumulativeProfiling => "CUMULATIVE_PROFILING",
      CumulativeProfilingBegin => "CUMULATIVE_PROFILING_BEGIN",
      CumulativeProfilingEnd => "CUMULATIVE_PROFILING_END",
      LimitUsage => "LIMIT_USAGE",
      LimitUsageForNs => "LIMIT_USAGE_FOR_NS",
      ValidationRule => "VALIDATION_RULE",
      ValidationError => "VALIDATION_ERROR",
      ValidationFail => "VALIDATION_FAIL",
      ValidationFormula => "VALIDATION_FORMULA",
      ValidationPass => "VALIDATION_PASS",
      WfFlowActionBegin => "WF_FLOW_ACTION_BEGIN",
      WfFlowActionEnd => "WF_FLOW_ACTION_END",
      WfFlowActionDetail => "WF_FLOW_ACTION_DETAIL",
      WfFlowActionError => "WF_FLOW_ACTION_ERROR",
      WfFlowActionErrorDetail => "WF_FLOW_ACTION_ERROR_DETAIL",
      WfFieldUpdate => "WF_FIELD_UPDATE",
      WfRuleEvalBegin => "WF_RULE_EVAL_BEGIN",
      WfRuleEvalEnd => "WF_RULE_EVAL_END",
      WfRuleEvalValue => "WF_RULE_EVAL_VALUE",
      WfRuleFilter => "WF_RULE_FILTER",
      WfRuleNotEvaluated => "WF_RULE_NOT_EVALUATED",
      WfCriteriaBegin => "WF_CRITERIA_BEGIN",
      WfCriteriaEnd => "WF_CRITERIA_END",
      WfFormula => "WF_FORMULA",
      WfAction => "WF_ACTION",
      WfActionsEnd => "WF_ACTIONS_END",
      WfActionTask => "WF_ACTION_TASK",
      WfApproval => "WF_APPROVAL",
      WfApprovalRemove => "WF_APPROVAL_REMOVE",
      WfApprovalSubmit => "WF_APPROVAL_SUBMIT",
      WfApprovalSubmitter => "WF_APPROVAL_SUBMITTER",
      WfAssign => "WF_ASSIGN",
      WfEmailAlert => "WF_EMAIL_ALERT",
      WfEmailSent => "WF_EMAIL_SENT",
      WfEnqueueActions => "WF_ENQUEUE_ACTIONS",
      WfEscalationAction => "WF_ESCALATION_ACTION",
      WfEscalationRule => "WF_ESCALATION_RULE",
      WfEvalEntryCriteria => "WF_EVAL_ENTRY_CRITERIA",
      WfHardReject => "WF_HARD_REJECT",
      WfNextApprover => "WF_NEXT_APPROVER",
      WfNoProcessFound => "WF_NO_PROCESS_FOUND",
      WfOutboundMsg => "WF_OUTBOUND_MSG",
      WfProcessFound => "WF_PROCESS_FOUND",
      WfProcessNode => "WF_PROCESS_NODE",
      WfReassignRecord => "WF_REASSIGN_RECORD",
      WfResponseNotify => "WF_RESPONSE_NOTIFY",
      WfRuleEntryOrder => "WF_RULE_ENTRY_ORDER",
      WfRuleInvocation => "WF_RULE_INVOCATION",
      WfSoftReject => "WF_SOFT_REJECT",
      WfSpoolActionBegin => "WF_SPOOL_ACTION_BEGIN",
      WfTimeTrigger => "WF_TIME_TRIGGER",
      WfTimeTriggersBegin => "WF_TIME_TRIGGERS_BEGIN",
      FlowStartInterviewsBegin => "FLOW_START_INTERVIEWS_BEGIN",
      FlowStartInterviewsEnd => "FLOW_START_INTERVIEWS_END",
      FlowStartInterviewsError => "FLOW_START_INTERVIEWS_ERROR",
      FlowStartInterviewBegin => "FLOW_START_INTERVIEW_BEGIN",
      FlowStartInterviewEnd => "FLOW_START_INTERVIEW_END",
      FlowStartInterviewLimitUsage => "FLOW_START_INTERVIEW_LIMIT_USAGE",
      FlowStartScheduledRecords => "FLOW_START_SCHEDULED_RECORDS",
      FlowCreateInterviewBegin => "FLOW_CREATE_INTERVIEW_BEGIN",
      FlowCreateInterviewEnd => "FLOW_CREATE_INTERVIEW_END",
      FlowCreateInterviewError => "FLOW_CREATE_INTERVIEW_ERROR",
      FlowElementBegin => "FLOW_ELEMENT_BEGIN",
      FlowElementEnd => "FLOW_ELEMENT_END",
      FlowElementDeferred => "FLOW_ELEMENT_DEFERRED",
      FlowElementError => "FLOW_ELEMENT_ERROR",
      FlowElementFault => "FLOW_ELEMENT_FAULT",
      FlowElementLimitUsage => "FLOW_ELEMENT_LIMIT_USAGE",
      FlowInterviewFinished => "FLOW_INTERVIEW_FINISHED",
      FlowInterviewFinishedLimitUsage => "FLOW_INTERVIEW_FINISHED_LIMIT_USAGE",
      FlowInterviewPaused => "FLOW_INTERVIEW_PAUSED",
      FlowInterviewResumed => "FLOW_INTERVIEW_RESUMED",
      FlowSubflowDetail => "FLOW_SUBFLOW_DETAIL",
      FlowValueAssignment => "FLOW_VALUE_ASSIGNMENT",
      FlowLoopDetail => "FLOW_LOOP_DETAIL",
      FlowRuleDetail => "FLOW_RULE_DETAIL",
      FlowActioncallDetail => "FLOW_ACTIONCALL_DETAIL",
      FlowAssignmentDetail => "FLOW_ASSIGNMENT_DETAIL",
      FlowWaitEventResumingDetail => "FLOW_WAIT_EVENT_RESUMING_DETAIL",
      FlowWaitEventWaitingDetail => "FLOW_WAIT_EVENT_WAITING_DETAIL",
      FlowWaitResumingDetail => "FLOW_WAIT_RESUMING_DETAIL",
      FlowWaitWaitingDetail => "FLOW_WAIT_WAITING_DETAIL",
      FlowBulkElementBegin => "FLOW_BULK_ELEMENT_BEGIN",
      FlowBulkElementEnd => "FLOW_BULK_ELEMENT_END",
      FlowBulkElementDetail => "FLOW_BULK_ELEMENT_DETAIL",
      FlowBulkElementLimitUsage => "FLOW_BULK_ELEMENT_LIMIT_USAGE",
      FlowBulkElementNotSupported => "FLOW_BULK_ELEMENT_NOT_SUPPORTED",
      VfApexCallStart => "VF_APEX_CALL_START",
      VfApexCallEnd => "VF_APEX_CALL_END",
      VfDeserializeViewstateBegin => "VF_DESERIALIZE_VIEWSTATE_BEGIN",
      VfDeserializeViewstateEnd => "VF_DESERIALIZE_VIEWSTATE_END",
      VfSerializeViewstateBegin => "VF_SERIALIZE_VIEWSTATE_BEGIN",
      VfSerializeViewstateEnd => "VF_SERIALIZE_VIEWSTATE_END",
      VfEvaluateFormulaBegin => "VF_EVALUATE_FORMULA_BEGIN",
      VfEvaluateFormulaEnd => "VF_EVALUATE_FORMULA_END",
      VfPageMessage => "VF_PAGE_MESSAGE",
      EventServicePubBegin => "EVENT_SERVICE_PUB_BEGIN",
      EventServicePubEnd => "EVENT_SERVICE_PUB_END",
      EventServicePubDetail => "EVENT_SERVICE_PUB_DETAIL",
      EventServiceSubBegin => "EVENT_SERVICE_SUB_BEGIN",
      EventServiceSubEnd => "EVENT_SERVICE_SUB_END",
      EventServiceSubDetail => "EVENT_SERVICE_SUB_DETAIL",
      OrgCacheGetBegin => "ORG_CACHE_GET_BEGIN",
      OrgCacheGetEnd => "ORG_CACHE_GET_END",
      OrgCachePutBegin => "ORG_CACHE_PUT_BEGIN",
      OrgCachePutEnd => "ORG_CACHE_PUT_END",
      OrgCacheRemoveBegin => "ORG_CACHE_REMOVE_BEGIN",
      OrgCacheRemoveEnd => "ORG_CACHE_REMOVE_END",
      SessionCacheGetBegin => "SESSION_CACHE_GET_BEGIN",
      SessionCacheGetEnd => "SESSION_CACHE_GET_END",
      SessionCachePutBegin => "SESSION_CACHE_PUT_BEGIN",
      SessionCachePutEnd => "SESSION_CACHE_PUT_END",
      SessionCacheRemoveBegin => "SESSION_CACHE_REMOVE_BEGIN",
      SessionCacheRemoveEnd => "SESSION_CACHE_REMOVE_END",
      DuplicateDetectionBegin => "DUPLICATE_DETECTION_BEGIN",
      DuplicateDetectionEnd => "DUPLICATE_DETECTION_END",
      DuplicateDetectionRuleInvocation => "DUPLICATE_DETECTION_RULE_INVOCATION",
      DuplicateDetectionMatchInvocationDetails => "DUPLICATE_DETECTION_MATCH_INVOCATION_DETAILS",
      DuplicateDetectionMatchInvocationSummary => "DUPLICATE_DETECTION_MATCH_INVOCATION_SUMMARY",
      DuplicateRuleFilter => "DUPLICATE_RULE_FILTER",
      DuplicateRuleFilterResult => "DUPLICATE_RULE_FILTER_RESULT",
      DuplicateRuleFilterValue => "DUPLICATE_RULE_FILTER_VALUE",
      MatchEngineBegin => "MATCH_ENGINE_BEGIN",
      MatchEngineEnd => "MATCH_ENGINE_END",
      XdsDetail => "XDS_DETAIL",
      XdsResponse => "XDS_RESPONSE",
      XdsResponseDetail => "XDS_RESPONSE_DETAIL",
      XdsResponseError => "XDS_RESPONSE_ERROR",
      NbaNodeBegin => "NBA_NODE_BEGIN",
      NbaNodeEnd => "NBA_NODE_END",
      NbaNodeDetail => "NBA_NODE_DETAIL",
      NbaNodeError => "NBA_NODE_ERROR",
      NbaOfferInvalid => "NBA_OFFER_INVALID",
      NbaStrategyBegin => "NBA_STRATEGY_BEGIN",
      NbaStrategyEnd => "NBA_STRATEGY_END",
      NbaStrategyError => "NBA_STRATEGY_ERROR",
      PushNotificationInvalidApp => "PUSH_NOTIFICATION_INVALID_APP",
      PushNotificationInvalidCertificate => "PUSH_NOTIFICATION_INVALID_CERTIFICATE",
      PushNotificationInvalidNotification => "PUSH_NOTIFICATION_INVALID_NOTIFICATION",
      PushNotificationNotEnabled => "PUSH_NOTIFICATION_NOT_ENABLED",
      PushNotificationSent => "PUSH_NOTIFICATION_SENT",
      SlaEnd => "SLA_END",
      SlaEvalMilestone => "SLA_EVAL_MILESTONE",
      SlaNullStartDate => "SLA_NULL_START_DATE",
      SlaProcessCase => "SLA_PROCESS_CASE",
    }
  }

  /// Event kinds that legitimately close a frame opened by `self`.
  pub fn exit_types(self) -> &'static [EventKind] {
    use EventKind::*;
    match self {
      ExecutionStarted => &[ExecutionFinished],
      CodeUnitStarted => &[CodeUnitFinished],
      MethodEntry => &[MethodExit],
      ConstructorEntry => &[ConstructorExit],
      SystemMethodEntry => &[SystemMethodExit],
      SystemConstructorEntry => &[SystemConstructorExit],
      DmlBegin => &[DmlEnd],
      SoqlExecuteBegin => &[SoqlExecuteEnd],
      SoslExecuteBegin => &[SoslExecuteEnd],
      QueryMoreBegin => &[QueryMoreEnd],
      CalloutRequest => &[CalloutResponse],
      CumulativeLimitUsage => &[CumulativeLimitUsageEnd],
      CumulativeProfilingBegin => &[CumulativeProfilingEnd],
      WfCriteriaBegin => &[WfCriteriaEnd, WfRuleNotEvaluated],
      WfRuleEvalBegin => &[WfRuleEvalEnd],
      WfFlowActionBegin => &[WfFlowActionEnd],
      FlowStartInterviewsBegin => &[FlowStartInterviewsEnd],
      FlowStartInterviewBegin => &[FlowStartInterviewEnd],
      FlowCreateInterviewBegin => &[FlowCreateInterviewEnd],
      FlowElementBegin => &[FlowElementEnd],
      FlowBulkElementBegin => &[FlowBulkElementEnd],
      VfApexCallStart => &[VfApexCallEnd],
      VfDeserializeViewstateBegin => &[VfDeserializeViewstateEnd],
      VfSerializeViewstateBegin => &[VfSerializeViewstateEnd],
      VfEvaluateFormulaBegin => &[VfEvaluateFormulaEnd],
      EventServicePubBegin => &[EventServicePubEnd],
      EventServiceSubBegin => &[EventServiceSubEnd],
      OrgCacheGetBegin => &[OrgCacheGetEnd],
      OrgCachePutBegin => &[OrgCachePutEnd],
      OrgCacheRemoveBegin => &[OrgCacheRemoveEnd],
      SessionCacheGetBegin => &[SessionCacheGetEnd],
      SessionCachePutBegin => &[SessionCachePutEnd],
      SessionCacheRemoveBegin => &[SessionCacheRemoveEnd],
      DuplicateDetectionBegin => &[DuplicateDetectionEnd],
      MatchEngineBegin => &[MatchEngineEnd],
      NbaNodeBegin => &[NbaNodeEnd],
      NbaStrategyBegin => &[NbaStrategyEnd],
      _ => &[],
    }
  }

  /// Whether this event closes a frame. Pseudo-exits count: they are both
  /// parent and exit.
  pub fn is_exit(self) -> bool {
    use EventKind::*;
    self.next_line_is_exit()
      || matches!(
        self,
        ExecutionFinished
          | CodeUnitFinished
          | MethodExit
          | ConstructorExit
          | SystemMethodExit
          | SystemConstructorExit
          | DmlEnd
          | SoqlExecuteEnd
          | SoslExecuteEnd
          | QueryMoreEnd
          | CalloutResponse
          | CumulativeLimitUsageEnd
          | CumulativeProfilingEnd
          | WfCriteriaEnd
          | WfRuleNotEvaluated
          | WfRuleEvalEnd
          | WfFlowActionEnd
          | FlowStartInterviewsEnd
          | FlowStartInterviewEnd
          | FlowCreateInterviewEnd
          | FlowElementEnd
          | FlowBulkElementEnd
          | VfApexCallEnd
          | VfDeserializeViewstateEnd
          | VfSerializeViewstateEnd
          | VfEvaluateFormulaEnd
          | EventServicePubEnd
          | EventServiceSubEnd
          | OrgCacheGetEnd
          | OrgCachePutEnd
          | OrgCacheRemoveEnd
          | SessionCacheGetEnd
          | SessionCachePutEnd
          | SessionCacheRemoveEnd
          | DuplicateDetectionEnd
          | MatchEngineEnd
          | NbaNodeEnd
          | NbaStrategyEnd
      )
  }

  /// Whether this event opens a frame. `ENTERING_MANAGED_PKG` is a parent
  /// with no exit token; its frame is closed by the next event's timestamp
  /// through an after-hook.
  pub fn is_parent(self) -> bool {
    self.next_line_is_exit()
      || !self.exit_types().is_empty()
      || matches!(self, EventKind::EnteringManagedPkg)
  }

  /// Whether the tree builder pushes a frame for this event. Only parents
  /// with an explicit exit token nest children; pseudo-exits and
  /// `ENTERING_MANAGED_PKG` span to the next event without nesting it.
  pub(crate) fn opens_frame(self) -> bool {
    !self.is_exit() && !self.exit_types().is_empty()
  }

  /// One-shot workflow events that never emit an end marker; the frame is
  /// closed by the next event's timestamp.
  pub fn next_line_is_exit(self) -> bool {
    use EventKind::*;
    matches!(
      self,
      WfFieldUpdate
        | WfEmailSent
        | WfEmailAlert
        | WfApproval
        | WfApprovalSubmit
        | WfEvalEntryCriteria
        | WfNextApprover
        | WfProcessFound
        | WfProcessNode
        | WfRuleInvocation
        | WfFormula
    )
  }

  /// Events that legitimately own multi-line payloads; subsequent
  /// non-event lines attach to their text.
  pub fn accepts_text(self) -> bool {
    use EventKind::*;
    matches!(
      self,
      LimitUsageForNs
        | UserDebug
        | VariableAssignment
        | ExceptionThrown
        | FatalError
        | ValidationFormula
        | WfFormula
        | WfRuleFilter
        | FlowElementError
        | FlowStartInterviewsError
        | BulkHeapAllocate
        | CumulativeProfiling
        | EmailQueue
        | StaticVariableList
        | StackFrameVariableList
        | WfFlowActionError
        | WfFlowActionErrorDetail
        | TestingLimits
        | ValidationError
        | VfPageMessage
    )
  }

  /// Separator used when a continuation line is appended to this event's
  /// text. All current multi-line payloads are newline-joined.
  pub fn text_separator(self) -> &'static str {
    "\n"
  }

  /// Events that signal the call stack will unwind unexpectedly.
  pub fn discontinuity(self) -> bool {
    matches!(self, EventKind::ExceptionThrown | EventKind::FatalError)
  }

  pub fn category(self) -> Category {
    use EventKind::*;
    match self {
      ExecutionStarted | ExecutionFinished | CodeUnitStarted | CodeUnitFinished => {
        Category::CodeUnit
      },
      MethodEntry | MethodExit | ConstructorEntry | ConstructorExit | EnteringManagedPkg => {
        Category::Method
      },
      SystemMethodEntry | SystemMethodExit | SystemConstructorEntry | SystemConstructorExit
      | SystemModeEnter | SystemModeExit => Category::SystemMethod,
      DmlBegin | DmlEnd | SavepointSet | SavepointRollback | BulkDmlRetry => Category::Dml,
      SoqlExecuteBegin | SoqlExecuteEnd | SoqlExecuteExplain | QueryMoreBegin | QueryMoreEnd
      | QueryMoreIterations | IdeasQueryExecute => Category::Soql,
      SoslExecuteBegin | SoslExecuteEnd => Category::Sosl,
      CalloutRequest | CalloutResponse | NamedCredentialRequest | NamedCredentialResponse
      | NamedCredentialResponseDetail => Category::Callout,
      CumulativeLimitUsage | CumulativeLimitUsageEnd | CumulativeProfiling
      | CumulativeProfilingBegin | CumulativeProfilingEnd | LimitUsage | LimitUsageForNs
      | TestingLimits => Category::Limits,
      ValidationRule | ValidationError | ValidationFail | ValidationFormula | ValidationPass => {
        Category::Validation
      },
      ExceptionThrown | FatalError | TemplateProcessingError => Category::Error,
      UserDebug | UserInfo | VariableAssignment | VariableScopeBegin | VariableScopeEnd
      | HeapAllocate | HeapDeallocate | BulkHeapAllocate | StaticVariableList
      | StackFrameVariableList | StatementExecute => Category::Debug,
      VfApexCallStart | VfApexCallEnd | VfDeserializeViewstateBegin | VfDeserializeViewstateEnd
      | VfSerializeViewstateBegin | VfSerializeViewstateEnd | VfEvaluateFormulaBegin
      | VfEvaluateFormulaEnd | VfPageMessage => Category::Visualforce,
      EventServicePubBegin | EventServicePubEnd | EventServicePubDetail | EventServiceSubBegin
      | EventServiceSubEnd | EventServiceSubDetail => Category::PlatformEvent,
      OrgCacheGetBegin | OrgCacheGetEnd | OrgCachePutBegin | OrgCachePutEnd
      | OrgCacheRemoveBegin | OrgCacheRemoveEnd | SessionCacheGetBegin | SessionCacheGetEnd
      | SessionCachePutBegin | SessionCachePutEnd | SessionCacheRemoveBegin
      | SessionCacheRemoveEnd => Category::Cache,
      k if k.is_flow() => Category::Flow,
      k if k.is_workflow() => Category::Workflow,
      _ => Category::Other,
    }
  }

  pub fn debug_category(self) -> DebugCategory {
    use EventKind::*;
    match self.category() {
      Category::CodeUnit | Category::Method | Category::Debug | Category::Error
      | Category::PlatformEvent => DebugCategory::ApexCode,
      Category::SystemMethod | Category::Cache => DebugCategory::System,
      Category::Dml | Category::Soql | Category::Sosl => DebugCategory::Db,
      Category::Callout => DebugCategory::Callout,
      Category::Limits => DebugCategory::ApexProfiling,
      Category::Validation => DebugCategory::Validation,
      Category::Visualforce => DebugCategory::Visualforce,
      Category::Flow | Category::Workflow => DebugCategory::Workflow,
      Category::Other => match self {
        NbaNodeBegin | NbaNodeEnd | NbaNodeDetail | NbaNodeError | NbaOfferInvalid
        | NbaStrategyBegin | NbaStrategyEnd | NbaStrategyError => DebugCategory::Nba,
        DuplicateDetectionBegin | DuplicateDetectionEnd | DuplicateDetectionRuleInvocation
        | DuplicateDetectionMatchInvocationDetails | DuplicateDetectionMatchInvocationSummary
        | DuplicateRuleFilter | DuplicateRuleFilterResult | DuplicateRuleFilterValue
        | MatchEngineBegin | MatchEngineEnd | XdsDetail | XdsResponse | XdsResponseDetail
        | XdsResponseError => DebugCategory::Db,
        _ => DebugCategory::Other,
      },
    }
  }

  pub fn cpu_kind(self) -> CpuKind {
    use EventKind::*;
    match self {
      MethodEntry | MethodExit | ConstructorEntry | ConstructorExit => CpuKind::Method,
      SystemMethodEntry | SystemMethodExit | SystemConstructorEntry | SystemConstructorExit
      | SystemModeEnter | SystemModeExit => CpuKind::System,
      EnteringManagedPkg => CpuKind::PkgMethod,
      k if k.is_flow() || k.is_workflow() => CpuKind::Custom,
      ExecutionStarted | CodeUnitStarted => CpuKind::Custom,
      _ => CpuKind::Free,
    }
  }

  fn is_flow(self) -> bool {
    use EventKind::*;
    matches!(
      self,
      FlowStartInterviewsBegin
        | FlowStartInterviewsEnd
        | FlowStartInterviewsError
        | FlowStartInterviewBegin
        | FlowStartInterviewEnd
        | FlowStartInterviewLimitUsage
        | FlowStartScheduledRecords
        | FlowCreateInterviewBegin
        | FlowCreateInterviewEnd
        | FlowCreateInterviewError
        | FlowElementBegin
        | FlowElementEnd
        | FlowElementDeferred
        | FlowElementError
        | FlowElementFault
        | FlowElementLimitUsage
        | FlowInterviewFinished
        | FlowInterviewFinishedLimitUsage
        | FlowInterviewPaused
        | FlowInterviewResumed
        | FlowSubflowDetail
        | FlowValueAssignment
        | FlowLoopDetail
        | FlowRuleDetail
        | FlowActioncallDetail
        | FlowAssignmentDetail
        | FlowWaitEventResumingDetail
        | FlowWaitEventWaitingDetail
        | FlowWaitResumingDetail
        | FlowWaitWaitingDetail
        | FlowBulkElementBegin
        | FlowBulkElementEnd
        | FlowBulkElementDetail
        | FlowBulkElementLimitUsage
        | FlowBulkElementNotSupported
    )
  }

  fn is_workflow(self) -> bool {
    use EventKind::*;
    matches!(
      self,
      WfFlowActionBegin
        | WfFlowActionEnd
        | WfFlowActionDetail
        | WfFlowActionError
        | WfFlowActionErrorDetail
        | WfFieldUpdate
        | WfRuleEvalBegin
        | WfRuleEvalEnd
        | WfRuleEvalValue
        | WfRuleFilter
        | WfRuleNotEvaluated
        | WfCriteriaBegin
        | WfCriteriaEnd
        | WfFormula
        | WfAction
        | WfActionsEnd
        | WfActionTask
        | WfApproval
        | WfApprovalRemove
        | WfApprovalSubmit
        | WfApprovalSubmitter
        | WfAssign
        | WfEmailAlert
        | WfEmailSent
        | WfEnqueueActions
        | WfEscalationAction
        | WfEscalationRule
        | WfEvalEntryCriteria
        | WfHardReject
        | WfNextApprover
        | WfNoProcessFound
        | WfOutboundMsg
        | WfProcessFound
        | WfProcessNode
        | WfReassignRecord
        | WfResponseNotify
        | WfRuleEntryOrder
        | WfRuleInvocation
        | WfSoftReject
        | WfSpoolActionBegin
        | WfTimeTrigger
        | WfTimeTriggersBegin
    )
  }
}

/// Renders as the wire token, e.g. `METHOD_ENTRY`.
impl fmt::Display for EventKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.token())
  }
}
