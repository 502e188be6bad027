//! Operation descriptors and the evaluation gateway.
//!
//! An [`Operation`] is an immutable, `const`-constructible description of one
//! named function: its parameters and their domains, an ordered table of
//! limiting cases, and how backend failures translate into reported kinds
//! and sentinel values. Evaluating a request runs a fixed pipeline:
//!
//! 1. any NaN parameter → NaN, nothing reported;
//! 2. domain validation → report [`ErrorKind::Domain`], return the domain
//!    sentinel (NaN unless overridden);
//! 3. limiting-case table → first matching row decides, the backend is not
//!    called;
//! 4. backend call, with [`Signal`]s translated to kinds and sentinels;
//! 5. range post-check for probability-valued operations → out-of-range
//!    values are discarded as [`ErrorKind::NoResult`].
//!
//! ```
//! use sf_core::operation::{Operation, Param, Resolution, SpecialCase, Signal};
//! use sf_core::{capture, ErrorKind};
//!
//! const RECIPROCAL_CASES: &[SpecialCase<1>] = &[SpecialCase::new("x == 0", |p| p[0] == 0.0, |_| {
//!     Resolution::Error(ErrorKind::Domain, f64::INFINITY)
//! })];
//! static RECIPROCAL: Operation<1> =
//!     Operation::new("reciprocal", [Param::any("x")]).with_cases(RECIPROCAL_CASES);
//!
//! let (y, reports) = capture(|| RECIPROCAL.evaluate([4.0], |&[x]| Ok(1.0 / x)));
//! assert_eq!(y, 0.25);
//! assert!(reports.is_empty());
//!
//! let (y, reports) = capture(|| RECIPROCAL.evaluate([0.0], |_| Err(Signal::Overflow)));
//! assert_eq!(y, f64::INFINITY);
//! assert_eq!(reports[0].kind, ErrorKind::Domain);
//! ```

mod cases;
mod domain;
mod signal;

pub use cases::{is_integer, is_negative_integer, is_nonpositive_integer, Resolution, SpecialCase};
pub use domain::{Constraint, Interval, Param};
pub use signal::{check_finite, Backend, BackendResult, Signal};

use crate::errors::{Error, Result};
use crate::kind::ErrorKind;
use crate::sink::{self, ErrorSink};
use crate::Real;

/// Decides which kind an uncategorized backend failure is reported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Special functions: failures are [`ErrorKind::Other`].
    Special,
    /// CDF/SF-style operations: failures are [`ErrorKind::NoResult`].
    Probability,
    /// Quantile searches: failures are [`ErrorKind::NoResult`].
    Quantile,
}

impl Category {
    /// Kind reported for [`Signal::Evaluation`].
    pub const fn failure_kind(self) -> ErrorKind {
        match self {
            Category::Special => ErrorKind::Other,
            Category::Probability | Category::Quantile => ErrorKind::NoResult,
        }
    }
}

/// Values a successful backend call may legitimately return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
    /// No post-check.
    Unchecked,
    /// `[0, 1]`.
    UnitInterval,
    /// `[0, +Inf]`.
    NonNegative,
}

impl Range {
    /// Whether `value` passes the post-check.
    pub fn admits(self, value: Real) -> bool {
        match self {
            Range::Unchecked => true,
            Range::UnitInterval => (0.0..=1.0).contains(&value),
            Range::NonNegative => value >= 0.0,
        }
    }
}

/// Values returned when the backend signals a failure.
#[derive(Debug, Clone, Copy)]
pub struct Sentinels<const N: usize> {
    /// For [`Signal::Domain`].
    pub domain: Real,
    /// For [`Signal::Overflow`], computed from the parameters so the sign can
    /// follow the mathematical limit.
    pub overflow: fn(&[Real; N]) -> Real,
    /// For [`Signal::Underflow`].
    pub underflow: Real,
}

fn positive_infinity<const N: usize>(_: &[Real; N]) -> Real {
    Real::INFINITY
}

impl<const N: usize> Sentinels<N> {
    /// NaN on domain failure, `+Inf` on overflow, `0` on underflow.
    pub const STANDARD: Self = Self {
        domain: Real::NAN,
        overflow: positive_infinity,
        underflow: 0.0,
    };
}

/// The result of one evaluation together with the kind that was reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// Computed value or sentinel.
    pub value: Real,
    /// Reported kind, `None` on the silent paths.
    pub error: Option<ErrorKind>,
}

impl Outcome {
    fn silent(value: Real) -> Self {
        Self { value, error: None }
    }

    fn failed(kind: ErrorKind, value: Real) -> Self {
        Self {
            value,
            error: Some(kind),
        }
    }

    /// The tagged form: `Err((kind, sentinel))` if something was reported.
    pub fn into_result(self) -> std::result::Result<Real, (ErrorKind, Real)> {
        match self.error {
            None => Ok(self.value),
            Some(kind) => Err((kind, self.value)),
        }
    }
}

enum Reporter<'a> {
    Ambient,
    Explicit(&'a dyn ErrorSink),
}

impl Reporter<'_> {
    fn report(&self, function: &str, kind: ErrorKind, detail: &str) {
        match self {
            Reporter::Ambient => sink::report(function, kind, Some(detail)),
            Reporter::Explicit(s) => sink::deliver(*s, function, kind, Some(detail)),
        }
    }
}

/// Descriptor of one named operation of arity `N`.
#[derive(Debug, Clone, Copy)]
pub struct Operation<const N: usize> {
    /// Name passed to the sink.
    pub name: &'static str,
    /// Parameters in call order.
    pub params: [Param; N],
    /// Cross-parameter rule checked after the intervals.
    pub constraint: Option<Constraint<N>>,
    /// Returned when validation fails.
    pub domain_value: Real,
    /// Limiting-case table, consulted in order.
    pub cases: &'static [SpecialCase<N>],
    /// Failure classification.
    pub category: Category,
    /// Post-check on backend values.
    pub range: Range,
    /// Values for backend signals.
    pub sentinels: Sentinels<N>,
    /// Kinds that [`try_evaluate`](Self::try_evaluate) turns into errors.
    pub escalate: &'static [ErrorKind],
}

impl<const N: usize> Operation<N> {
    /// A special function with no limiting cases and standard sentinels.
    pub const fn new(name: &'static str, params: [Param; N]) -> Self {
        Self {
            name,
            params,
            constraint: None,
            domain_value: Real::NAN,
            cases: &[],
            category: Category::Special,
            range: Range::Unchecked,
            sentinels: Sentinels::STANDARD,
            escalate: &[],
        }
    }

    /// Mark as a CDF/SF-style operation with values in `[0, 1]`.
    pub const fn probability(mut self) -> Self {
        self.category = Category::Probability;
        self.range = Range::UnitInterval;
        self
    }

    /// Mark as a quantile search.
    pub const fn quantile(mut self) -> Self {
        self.category = Category::Quantile;
        self
    }

    /// Set the limiting-case table.
    pub const fn with_cases(mut self, cases: &'static [SpecialCase<N>]) -> Self {
        self.cases = cases;
        self
    }

    /// Add a cross-parameter rule.
    pub const fn with_constraint(mut self, description: &'static str, holds: fn(&[Real; N]) -> bool) -> Self {
        self.constraint = Some(Constraint { description, holds });
        self
    }

    /// Set the post-check.
    pub const fn with_range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// Set the value returned on validation failure.
    pub const fn with_domain_value(mut self, value: Real) -> Self {
        self.domain_value = value;
        self
    }

    /// Set the value returned when the backend signals a domain failure.
    pub const fn with_backend_domain_value(mut self, value: Real) -> Self {
        self.sentinels.domain = value;
        self
    }

    /// Set how the overflow sentinel is derived.
    pub const fn with_overflow(mut self, overflow: fn(&[Real; N]) -> Real) -> Self {
        self.sentinels.overflow = overflow;
        self
    }

    /// Kinds escalated by [`try_evaluate`](Self::try_evaluate).
    pub const fn escalating(mut self, kinds: &'static [ErrorKind]) -> Self {
        self.escalate = kinds;
        self
    }

    // ── Domain Validator ──────────────────────────────────────────────────────

    /// `true` if every parameter lies in its interval and the cross rule, if
    /// any, holds. NaN never validates; the gateway handles NaN before this.
    pub fn validate(&self, params: &[Real; N]) -> bool {
        self.violation(params).is_none()
    }

    fn violation(&self, params: &[Real; N]) -> Option<String> {
        for (param, &value) in self.params.iter().zip(params) {
            if !param.domain.contains(value) {
                return Some(format!("{} = {value} outside {}", param.name, param.domain));
            }
        }
        match &self.constraint {
            Some(c) if !(c.holds)(params) => Some(c.description.to_owned()),
            _ => None,
        }
    }

    // ── Limiting-Case Resolver ────────────────────────────────────────────────

    /// The first table row that applies to `params`.
    pub fn matching_case(&self, params: &[Real; N]) -> Option<&'static SpecialCase<N>> {
        self.cases.iter().find(|case| case.applies(params))
    }

    /// The resolution of the first applicable row.
    pub fn try_resolve(&self, params: &[Real; N]) -> Option<Resolution<N>> {
        self.matching_case(params).map(|case| (case.resolve)(params))
    }

    // ── Backend Invocation Adapter ────────────────────────────────────────────

    /// Evaluate, reporting through the sink in effect on this thread.
    pub fn evaluate<B>(&self, params: [Real; N], backend: B) -> Real
    where
        B: FnOnce(&[Real; N]) -> BackendResult,
    {
        self.run(&Reporter::Ambient, params, backend).value
    }

    /// Evaluate, reporting to `sink`.
    pub fn evaluate_with<B>(&self, sink: &dyn ErrorSink, params: [Real; N], backend: B) -> Real
    where
        B: FnOnce(&[Real; N]) -> BackendResult,
    {
        self.run(&Reporter::Explicit(sink), params, backend).value
    }

    /// Evaluate, reporting to `sink`, and also return the reported kind.
    pub fn outcome_with<B>(&self, sink: &dyn ErrorSink, params: [Real; N], backend: B) -> Outcome
    where
        B: FnOnce(&[Real; N]) -> BackendResult,
    {
        self.run(&Reporter::Explicit(sink), params, backend)
    }

    /// Like [`evaluate`](Self::evaluate), but kinds listed in
    /// [`escalate`](Self::escalate) become `Err(Error::Raised { .. })`.
    /// The report is still delivered first.
    pub fn try_evaluate<B>(&self, params: [Real; N], backend: B) -> Result<Real>
    where
        B: FnOnce(&[Real; N]) -> BackendResult,
    {
        let outcome = self.run(&Reporter::Ambient, params, backend);
        match outcome.error {
            Some(kind) if self.escalate.contains(&kind) => Err(Error::Raised {
                function: self.name.to_owned(),
                kind,
                detail: None,
            }),
            _ => Ok(outcome.value),
        }
    }

    fn run<B>(&self, reporter: &Reporter<'_>, params: [Real; N], backend: B) -> Outcome
    where
        B: FnOnce(&[Real; N]) -> BackendResult,
    {
        if params.iter().any(|p| p.is_nan()) {
            return Outcome::silent(Real::NAN);
        }
        if let Some(detail) = self.violation(&params) {
            reporter.report(self.name, ErrorKind::Domain, &detail);
            return Outcome::failed(ErrorKind::Domain, self.domain_value);
        }
        if let Some(case) = self.matching_case(&params) {
            tracing::trace!(function = self.name, case = case.label, "limiting case");
            return match (case.resolve)(&params) {
                Resolution::Value(v) => Outcome::silent(v),
                Resolution::Error(kind, v) => {
                    reporter.report(self.name, kind, case.label);
                    Outcome::failed(kind, v)
                }
                Resolution::Reroute(alternative) => self.translate(reporter, &params, alternative(&params)),
            };
        }
        let result = backend(&params);
        self.translate(reporter, &params, result)
    }

    fn translate(&self, reporter: &Reporter<'_>, params: &[Real; N], result: BackendResult) -> Outcome {
        match result {
            Ok(value) if self.range.admits(value) => Outcome::silent(value),
            Ok(value) => {
                tracing::debug!(function = self.name, value, "discarding out-of-range result");
                reporter.report(self.name, ErrorKind::NoResult, "result outside the admissible range");
                Outcome::failed(ErrorKind::NoResult, Real::NAN)
            }
            Err(signal) => {
                let (kind, value) = match signal {
                    Signal::Domain => (ErrorKind::Domain, self.sentinels.domain),
                    Signal::Overflow => (ErrorKind::Overflow, (self.sentinels.overflow)(params)),
                    Signal::Underflow => (ErrorKind::Underflow, self.sentinels.underflow),
                    Signal::Evaluation(_) => (self.category.failure_kind(), Real::NAN),
                };
                tracing::trace!(function = self.name, %signal, "backend signal");
                reporter.report(self.name, kind, &signal.to_string());
                Outcome::failed(kind, value)
            }
        }
    }
}
