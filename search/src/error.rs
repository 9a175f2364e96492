//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures and broken internal
//! invariants only. Ordinary terminations (rejected input, exhaustion,
//! budget) are expressed via [`crate::report::NotFoundReason`] and always
//! produce a `SearchReport`.

/// Typed failure for search validation and frontier invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The policy failed [`crate::policy::SearchPolicy::validate`].
    InvalidPolicy { detail: String },
    /// A frontier that reported itself non-empty yielded no state.
    FrontierInvariant { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::FrontierInvariant { detail } => {
                write!(f, "frontier invariant violated: {detail}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
