use serde_json::{Map, Value};

use crate::{access::Operation, query::PERSONAL_ID_FIELD};

/// Record of one caller being shown one person's identifier. Written at
/// most once per request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditEvent {
	pub subject: String,
	pub actor: String,
	pub operation: Operation,
}

/// Injected audit capability. Recording is infallible: a sink that can fail
/// must choose internally between blocking the response and dropping the
/// record, and the production sink chooses to log and continue.
pub trait AuditSink
where
	Self: Send + Sync,
{
	fn record(&self, event: AuditEvent);
}

/// Production sink: a structured event on the dedicated `audit` target.
pub struct TracingAuditSink;
impl AuditSink for TracingAuditSink {
	fn record(&self, event: AuditEvent) {
		tracing::info!(
			target: "audit",
			operation = event.operation.as_str(),
			actor = %event.actor,
			subject = %event.subject,
			"Personal identifier returned to caller."
		);
	}
}

/// Result-driven trigger: an event is emitted only when the first shaped
/// hit actually carries a personal identifier. An authorized request with
/// no match, or a projection that excludes the identifier, records nothing.
pub(crate) fn trigger(
	hits: &[Map<String, Value>],
	actor: &str,
	operation: Operation,
	sink: &dyn AuditSink,
) {
	let Some(subject) = hits.first().and_then(|hit| hit.get(PERSONAL_ID_FIELD)).and_then(Value::as_str)
	else {
		return;
	};

	sink.record(AuditEvent {
		subject: subject.to_string(),
		actor: actor.to_string(),
		operation,
	});
}
