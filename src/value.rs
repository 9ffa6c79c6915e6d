use std::fmt;

/// Result of one calculator operation.
///
/// Out-of-domain inputs come back as values, not errors, so the dispatcher
/// can always render them as text. `DomainError` and `InvalidArgument` stay
/// distinct kinds: square root and logarithm report `NaN`, while factorial
/// of a negative reports `-1`.
#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Real(f64),
    Integer(i64),
    DomainError,
    InvalidArgument,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // {:?} keeps the trailing `.0` on whole-valued reals
            Outcome::Real(value) => write!(f, "{value:?}"),
            Outcome::Integer(value) => write!(f, "{value}"),
            Outcome::DomainError => write!(f, "NaN"),
            Outcome::InvalidArgument => write!(f, "-1"),
        }
    }
}
