use std::future::Future;
use sentry::protocol::SpanStatus;
use sentry::{Transaction, TransactionContext};

/// Opens a Sentry transaction, only when trace logging is enabled.
pub fn start_trace_transaction(name: &str, operation: &str) -> Option<Transaction> {
    if log::max_level() >= log::LevelFilter::Trace {
        let ctx = TransactionContext::new(name, operation);
        Some(sentry::start_transaction(ctx))
    } else {
        None
    }
}

pub fn finish_trace_transaction(transaction: Option<Transaction>, succeeded: bool) {
    if let Some(transaction) = transaction {
        transaction.set_status(if succeeded { SpanStatus::Ok } else { SpanStatus::InternalError });
        transaction.finish();
    }
}

/// Awaits `future` inside a trace transaction named `name`.
pub async fn trace_async<T, E, F>(name: &str, operation: &str, future: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let transaction = start_trace_transaction(name, operation);
    let result = future.await;
    finish_trace_transaction(transaction, result.is_ok());
    result
}
