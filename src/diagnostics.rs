use thiserror::Error;

/// Unified error type for the scicalc toolchain.
///
/// Domain failures of the operations themselves are not errors; they are
/// [`crate::value::Outcome`] variants. Everything here is fatal: malformed
/// numeric input is deliberately not re-prompted.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("malformed numeric input `{token}`: expected {expected}")]
    MalformedInput {
        token: String,
        expected: &'static str,
    },
    #[error("`{name}` expects {expected} operand(s) but received {received}")]
    Arity {
        name: &'static str,
        expected: usize,
        received: usize,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("console error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

pub type Result<T> = std::result::Result<T, CalcError>;
