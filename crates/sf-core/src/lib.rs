//! # sf-core
//!
//! The error-policy dispatch layer shared by every specfun operation.
//!
//! This crate knows nothing about any particular special function. It
//! provides the error taxonomy ([`ErrorKind`]), where reports go
//! ([`ErrorSink`] and the thread-scoped routing in [`sink`]), what happens
//! to them ([`Settings`], [`ErrorPolicy`]), and the [`Operation`] descriptor
//! whose `evaluate` runs NaN propagation, domain validation, the
//! limiting-case table, the backend call and failure translation in a fixed
//! order.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// The error taxonomy.
pub mod kind;

/// Operation descriptors, domain validation, limiting cases, and the
/// backend invocation adapter.
pub mod operation;

/// Global error policy and default sink.
pub mod settings;

/// Error reporting sinks and per-thread routing.
pub mod sink;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use kind::ErrorKind;
pub use operation::{Operation, Signal};
pub use settings::{current_policy, ErrorAction, ErrorPolicy, ScopedErrorPolicy, Settings};
pub use sink::{
    capture, checked, report, with_sink, ErrorSink, FnSink, LogSink, NullSink, RecordingSink, Report,
};
