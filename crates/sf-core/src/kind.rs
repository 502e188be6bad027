//! The error taxonomy shared by every operation.

use std::fmt;

/// Why an evaluation did not produce a trustworthy finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    /// Input outside the mathematically valid domain.
    Domain,
    /// True result exceeds the representable range.
    Overflow,
    /// True result rounds to zero with loss of information.
    Underflow,
    /// Valid domain, but the backend could not converge or trust its answer.
    NoResult,
    /// Uncategorized backend failure.
    Other,
}

impl ErrorKind {
    /// All kinds, in policy-table order.
    pub const ALL: [ErrorKind; 5] = [
        ErrorKind::Domain,
        ErrorKind::Overflow,
        ErrorKind::Underflow,
        ErrorKind::NoResult,
        ErrorKind::Other,
    ];

    /// Position of this kind in [`ErrorKind::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            ErrorKind::Domain => 0,
            ErrorKind::Overflow => 1,
            ErrorKind::Underflow => 2,
            ErrorKind::NoResult => 3,
            ErrorKind::Other => 4,
        }
    }

    /// Short lowercase identifier, as used in policy strings.
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::Domain => "domain",
            ErrorKind::Overflow => "overflow",
            ErrorKind::Underflow => "underflow",
            ErrorKind::NoResult => "no_result",
            ErrorKind::Other => "other",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Domain => "domain error",
            ErrorKind::Overflow => "overflow",
            ErrorKind::Underflow => "underflow",
            ErrorKind::NoResult => "no result obtained",
            ErrorKind::Other => "other error",
        })
    }
}

impl std::str::FromStr for ErrorKind {
    type Err = crate::errors::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| crate::errors::Error::InvalidArgument(format!("unknown error kind '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_table_order() {
        for (i, k) in ErrorKind::ALL.iter().enumerate() {
            assert_eq!(k.index(), i);
        }
    }

    #[test]
    fn names_parse_back() {
        for k in ErrorKind::ALL {
            assert_eq!(k.name().parse::<ErrorKind>().unwrap(), k);
        }
        assert!("singular".parse::<ErrorKind>().is_err());
    }
}
