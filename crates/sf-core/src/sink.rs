//! The Error Reporting Sink.
//!
//! Every failed evaluation is announced exactly once through
//! [`ErrorSink::report`]. Reporting is a side channel: it never changes the
//! value an operation returns, it never panics across the call boundary, and
//! it may be invoked concurrently from any number of threads.
//!
//! Where a report goes is decided per thread:
//!
//! 1. the innermost sink installed with [`with_sink`] (or [`capture`]);
//! 2. otherwise the process default, [`Settings::default_sink`], which is a
//!    [`LogSink`] unless replaced.
//!
//! Independently of the destination, a report whose configured
//! [`ErrorAction`] is `Raise` is remembered while a [`checked`] call is
//! running, so that it can turn into an [`Error::Raised`]. Outside any
//! `checked` scope nothing is remembered.

use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError};

use crate::errors::{Error, Result};
use crate::kind::ErrorKind;
use crate::settings::{current_policy, ErrorAction, Settings};

/// A single delivered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Operation that reported, e.g. `"betainc"`.
    pub function: String,
    /// What went wrong.
    pub kind: ErrorKind,
    /// Free-form detail, if the reporter supplied any.
    pub detail: Option<String>,
}

impl Report {
    /// Build an owned report.
    pub fn new(function: &str, kind: ErrorKind, detail: Option<&str>) -> Self {
        Self {
            function: function.to_owned(),
            kind,
            detail: detail.map(str::to_owned),
        }
    }
}

impl From<Report> for Error {
    fn from(r: Report) -> Self {
        Error::Raised {
            function: r.function,
            kind: r.kind,
            detail: r.detail,
        }
    }
}

/// Destination for error reports.
pub trait ErrorSink: Send + Sync {
    /// Record that `function` finished with `kind`.
    fn report(&self, function: &str, kind: ErrorKind, detail: Option<&str>);
}

// ── Sinks ─────────────────────────────────────────────────────────────────────

/// Emits one `tracing` event per report, filtered by the current policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn report(&self, function: &str, kind: ErrorKind, detail: Option<&str>) {
        match current_policy().action(kind) {
            ErrorAction::Ignore => {}
            ErrorAction::Warn => {
                tracing::warn!(function, kind = kind.name(), detail, "{kind} in {function}");
            }
            ErrorAction::Raise => {
                tracing::error!(function, kind = kind.name(), detail, "{kind} in {function}");
            }
        }
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ErrorSink for NullSink {
    fn report(&self, _function: &str, _kind: ErrorKind, _detail: Option<&str>) {}
}

/// Keeps every report in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<Report>>,
}

impl RecordingSink {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the reports received so far.
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Remove and return the reports received so far.
    pub fn take(&self) -> Vec<Report> {
        std::mem::take(&mut *self.reports.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of reports received.
    pub fn len(&self) -> usize {
        self.reports.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// `true` if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of reports of the given kind.
    pub fn count(&self, kind: ErrorKind) -> usize {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.kind == kind)
            .count()
    }
}

impl ErrorSink for RecordingSink {
    fn report(&self, function: &str, kind: ErrorKind, detail: Option<&str>) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Report::new(function, kind, detail));
    }
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F> ErrorSink for FnSink<F>
where
    F: Fn(&str, ErrorKind, Option<&str>) + Send + Sync,
{
    fn report(&self, function: &str, kind: ErrorKind, detail: Option<&str>) {
        (self.0)(function, kind, detail)
    }
}

// ── Ambient routing ───────────────────────────────────────────────────────────

thread_local! {
    static SCOPED_SINKS: RefCell<Vec<Arc<dyn ErrorSink>>> = const { RefCell::new(Vec::new()) };
    static RAISED: RefCell<Option<Report>> = const { RefCell::new(None) };
    static CHECKED_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Hand a report to `sink`, swallowing any panic it raises.
pub fn deliver(sink: &dyn ErrorSink, function: &str, kind: ErrorKind, detail: Option<&str>) {
    let _ = panic::catch_unwind(AssertUnwindSafe(|| sink.report(function, kind, detail)));
}

/// Report through the sink in effect on this thread.
pub fn report(function: &str, kind: ErrorKind, detail: Option<&str>) {
    let watched = CHECKED_DEPTH.with(Cell::get) > 0;
    if watched && current_policy().action(kind) == ErrorAction::Raise {
        RAISED.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot.is_none() {
                *slot = Some(Report::new(function, kind, detail));
            }
        });
    }
    let sink = SCOPED_SINKS
        .with(|stack| stack.borrow().last().cloned())
        .unwrap_or_else(|| Settings::instance().default_sink());
    deliver(sink.as_ref(), function, kind, detail);
}

struct ScopedSink;

impl ScopedSink {
    fn push(sink: Arc<dyn ErrorSink>) -> Self {
        SCOPED_SINKS.with(|stack| stack.borrow_mut().push(sink));
        ScopedSink
    }
}

impl Drop for ScopedSink {
    fn drop(&mut self) {
        SCOPED_SINKS.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Run `f` with `sink` receiving every report made on this thread.
pub fn with_sink<R>(sink: Arc<dyn ErrorSink>, f: impl FnOnce() -> R) -> R {
    let _scope = ScopedSink::push(sink);
    f()
}

/// Run `f` and collect the reports it makes on this thread.
///
/// ```
/// use sf_core::{capture, report, ErrorKind};
/// let ((), reports) = capture(|| report("betainc", ErrorKind::Domain, None));
/// assert_eq!(reports.len(), 1);
/// assert_eq!(reports[0].kind, ErrorKind::Domain);
/// ```
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<Report>) {
    let recorder = Arc::new(RecordingSink::new());
    let value = with_sink(recorder.clone(), f);
    (value, recorder.take())
}

/// Run `f`; fail if a report with action `Raise` was made on this thread
/// meanwhile. The closure's value is discarded in that case.
pub fn checked<R>(f: impl FnOnce() -> R) -> Result<R> {
    struct Restore(Option<Report>);
    impl Drop for Restore {
        fn drop(&mut self) {
            CHECKED_DEPTH.with(|depth| depth.set(depth.get() - 1));
            let outer = self.0.take();
            RAISED.with(|slot| {
                let mut slot = slot.borrow_mut();
                if slot.is_none() {
                    *slot = outer;
                }
            });
        }
    }

    CHECKED_DEPTH.with(|depth| depth.set(depth.get() + 1));
    let _restore = Restore(RAISED.with(|slot| slot.borrow_mut().take()));
    let value = f();
    match RAISED.with(|slot| slot.borrow_mut().take()) {
        Some(report) => Err(report.into()),
        None => Ok(value),
    }
}
