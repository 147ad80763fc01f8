//! Reporting hook for responses the caller does not get back as values.
//!
//! Mutating calls and raw fetches hand their status (and, for mutations, the
//! body) to an `Observer`. The default forwards to `tracing`.

use std::sync::{Mutex, PoisonError};

/// Receives the status and body of a completed call.
pub trait Observer {
    fn report(&self, operation: &str, status: u16, body: &str);
}

impl<O: Observer + ?Sized> Observer for &O {
    fn report(&self, operation: &str, status: u16, body: &str) {
        (**self).report(operation, status, body)
    }
}

/// Emits one `info` event per report.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn report(&self, operation: &str, status: u16, body: &str) {
        tracing::info!(operation, status, body, "response");
    }
}

/// A single captured report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub operation: String,
    pub status: u16,
    pub body: String,
}

/// Keeps every report in memory, in call order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    reports: Mutex<Vec<Report>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Observer for RecordingObserver {
    fn report(&self, operation: &str, status: u16, body: &str) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Report {
                operation: operation.to_string(),
                status,
                body: body.to_string(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_observer_keeps_order() {
        let observer = RecordingObserver::new();
        observer.report("create_user", 201, r#"{"id":11}"#);
        (&observer).report("delete_user", 200, "{}");

        let reports = observer.reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].operation, "create_user");
        assert_eq!(reports[0].status, 201);
        assert_eq!(reports[1].body, "{}");
    }

    #[test]
    fn recording_observer_survives_a_poisoned_lock() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let observer = RecordingObserver::new();
        observer.report("create_user", 201, "{}");
        let _ = catch_unwind(AssertUnwindSafe(|| {
            let _guard = observer.reports.lock().unwrap();
            panic!("reporter panicked while holding the lock");
        }));
        assert!(observer.reports.is_poisoned());

        observer.report("delete_user", 200, "{}");

        let operations: Vec<String> = observer.reports().into_iter().map(|r| r.operation).collect();
        assert_eq!(operations, vec!["create_user", "delete_user"]);
    }
}
