//! Global error policy and default sink.
//!
//! [`Settings`] is a process-wide singleton accessed via a
//! `std::sync::OnceLock`. It holds the default [`ErrorPolicy`], which says
//! what should happen to each [`ErrorKind`] when it is reported, and the
//! default [`ErrorSink`] that receives reports when no scoped sink is
//! installed on the calling thread.
//!
//! A thread may override the policy temporarily with [`ScopedErrorPolicy`];
//! the override is invisible to other threads.

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::errors::Error;
use crate::kind::ErrorKind;
use crate::sink::{ErrorSink, LogSink};

/// What to do with a reported error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorAction {
    /// Drop the report.
    Ignore,
    /// Log a warning and return the sentinel.
    Warn,
    /// Log an error and make [`checked`](crate::sink::checked) fail.
    Raise,
}

impl fmt::Display for ErrorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorAction::Ignore => "ignore",
            ErrorAction::Warn => "warn",
            ErrorAction::Raise => "raise",
        })
    }
}

impl FromStr for ErrorAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(ErrorAction::Ignore),
            "warn" => Ok(ErrorAction::Warn),
            "raise" => Ok(ErrorAction::Raise),
            other => Err(Error::InvalidArgument(format!("unknown error action '{other}'"))),
        }
    }
}

/// One [`ErrorAction`] per [`ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorPolicy {
    actions: [ErrorAction; 5],
}

impl ErrorPolicy {
    /// The same action for every kind.
    pub const fn uniform(action: ErrorAction) -> Self {
        Self {
            actions: [action; 5],
        }
    }

    /// The action configured for `kind`.
    #[inline]
    pub const fn action(&self, kind: ErrorKind) -> ErrorAction {
        self.actions[kind.index()]
    }

    /// Set the action for `kind`.
    pub fn set(&mut self, kind: ErrorKind, action: ErrorAction) {
        self.actions[kind.index()] = action;
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, kind: ErrorKind, action: ErrorAction) -> Self {
        self.set(kind, action);
        self
    }
}

impl Default for ErrorPolicy {
    /// `Warn` for everything except underflow, which is ignored.
    fn default() -> Self {
        Self::uniform(ErrorAction::Warn).with(ErrorKind::Underflow, ErrorAction::Ignore)
    }
}

/// Parses a comma-separated list of `kind=action` pairs, applied on top of
/// the default policy. The pseudo-kind `all` sets every kind.
///
/// ```
/// use sf_core::{ErrorAction, ErrorKind, ErrorPolicy};
/// let p: ErrorPolicy = "all=ignore, domain=raise".parse().unwrap();
/// assert_eq!(p.action(ErrorKind::Domain), ErrorAction::Raise);
/// assert_eq!(p.action(ErrorKind::Overflow), ErrorAction::Ignore);
/// ```
impl FromStr for ErrorPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut policy = ErrorPolicy::default();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (kind, action) = entry
                .split_once('=')
                .ok_or_else(|| Error::InvalidArgument(format!("expected kind=action, got '{entry}'")))?;
            let action: ErrorAction = action.trim().parse()?;
            match kind.trim() {
                "all" => policy = ErrorPolicy::uniform(action),
                kind => policy.set(kind.parse()?, action),
            }
        }
        Ok(policy)
    }
}

// ── Settings singleton ────────────────────────────────────────────────────────

/// Process-wide settings used by specfun.
pub struct Settings {
    policy: RwLock<ErrorPolicy>,
    sink: RwLock<Arc<dyn ErrorSink>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            policy: RwLock::new(ErrorPolicy::default()),
            sink: RwLock::new(Arc::new(LogSink)),
        })
    }

    /// The process-wide policy (ignores any thread override).
    pub fn policy(&self) -> ErrorPolicy {
        *self.policy.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the process-wide policy, returning the previous one.
    pub fn set_policy(&self, policy: ErrorPolicy) -> ErrorPolicy {
        let mut guard = self.policy.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, policy)
    }

    /// Change the process-wide action for one kind, returning the previous one.
    pub fn set_action(&self, kind: ErrorKind, action: ErrorAction) -> ErrorAction {
        let mut guard = self.policy.write().unwrap_or_else(PoisonError::into_inner);
        let previous = guard.action(kind);
        guard.set(kind, action);
        previous
    }

    /// The sink used when no scoped sink is installed.
    pub fn default_sink(&self) -> Arc<dyn ErrorSink> {
        Arc::clone(&self.sink.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replace the default sink, returning the previous one.
    pub fn set_default_sink(&self, sink: Arc<dyn ErrorSink>) -> Arc<dyn ErrorSink> {
        let mut guard = self.sink.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, sink)
    }
}

// ── Thread-local override ─────────────────────────────────────────────────────

thread_local! {
    static POLICY_OVERRIDE: Cell<Option<ErrorPolicy>> = const { Cell::new(None) };
}

/// The policy in effect on the calling thread.
pub fn current_policy() -> ErrorPolicy {
    POLICY_OVERRIDE
        .with(Cell::get)
        .unwrap_or_else(|| Settings::instance().policy())
}

/// RAII guard that overrides the error policy for the current thread.
///
/// The previous thread state is restored when the guard is dropped, so
/// guards nest.
///
/// # Example
/// ```
/// use sf_core::{current_policy, ErrorAction, ErrorKind, ScopedErrorPolicy};
/// {
///     let _guard = ScopedErrorPolicy::with(ErrorKind::Domain, ErrorAction::Raise);
///     assert_eq!(current_policy().action(ErrorKind::Domain), ErrorAction::Raise);
/// }
/// ```
pub struct ScopedErrorPolicy {
    previous: Option<ErrorPolicy>,
    // Restoring must happen on the thread that installed the override.
    _not_send: PhantomData<*const ()>,
}

impl ScopedErrorPolicy {
    /// Install `policy` for the current thread.
    pub fn new(policy: ErrorPolicy) -> Self {
        let previous = POLICY_OVERRIDE.with(|cell| cell.replace(Some(policy)));
        Self {
            previous,
            _not_send: PhantomData,
        }
    }

    /// Use `action` for every kind.
    pub fn all(action: ErrorAction) -> Self {
        Self::new(ErrorPolicy::uniform(action))
    }

    /// Change a single kind relative to the policy currently in effect.
    pub fn with(kind: ErrorKind, action: ErrorAction) -> Self {
        Self::new(current_policy().with(kind, action))
    }
}

impl Drop for ScopedErrorPolicy {
    fn drop(&mut self) {
        let previous = self.previous;
        POLICY_OVERRIDE.with(|cell| cell.set(previous));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_ignores_underflow_only() {
        let p = ErrorPolicy::default();
        assert_eq!(p.action(ErrorKind::Underflow), ErrorAction::Ignore);
        for kind in [ErrorKind::Domain, ErrorKind::Overflow, ErrorKind::NoResult, ErrorKind::Other] {
            assert_eq!(p.action(kind), ErrorAction::Warn);
        }
    }

    #[test]
    fn scoped_policy_nests_and_restores() {
        let outer_before = current_policy();
        {
            let _a = ScopedErrorPolicy::all(ErrorAction::Ignore);
            assert_eq!(current_policy(), ErrorPolicy::uniform(ErrorAction::Ignore));
            {
                let _b = ScopedErrorPolicy::with(ErrorKind::Overflow, ErrorAction::Raise);
                assert_eq!(current_policy().action(ErrorKind::Overflow), ErrorAction::Raise);
                assert_eq!(current_policy().action(ErrorKind::Domain), ErrorAction::Ignore);
            }
            assert_eq!(current_policy(), ErrorPolicy::uniform(ErrorAction::Ignore));
        }
        assert_eq!(current_policy(), outer_before);
    }

    #[test]
    fn scoped_policy_is_thread_local() {
        let _guard = ScopedErrorPolicy::all(ErrorAction::Raise);
        let seen = std::thread::spawn(current_policy).join().unwrap();
        assert_eq!(seen, Settings::instance().policy());
    }

    #[test]
    fn parse_policy_strings() {
        let p: ErrorPolicy = "overflow=raise,no_result=ignore".parse().unwrap();
        assert_eq!(p.action(ErrorKind::Overflow), ErrorAction::Raise);
        assert_eq!(p.action(ErrorKind::NoResult), ErrorAction::Ignore);
        assert_eq!(p.action(ErrorKind::Domain), ErrorAction::Warn);

        assert!("overflow".parse::<ErrorPolicy>().is_err());
        assert!("overflow=loud".parse::<ErrorPolicy>().is_err());
        assert!("bogus=warn".parse::<ErrorPolicy>().is_err());
        assert_eq!("".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::default());
    }
}
