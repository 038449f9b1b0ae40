use std::fmt;

use crate::interpreter::value::Value;

/// Everything a statement/expression evaluation can unwind through instead of
/// returning a plain `Value`. `반환`/`중단`/`계속` are non-local exits, never
/// caught by `시도`; `던지기`/`RuntimeError` are the two catchable kinds
/// (`spec.md` §7, §9's "three-case result" recommendation specialized into
/// one `Result<Value, Unwind>`).
#[derive(Debug, Clone)]
pub enum Unwind {
    Return(Value),
    Break,
    Continue,
    Throw(Value),
    RuntimeError(RuntimeError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub message: String,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RuntimeError {}

impl From<RuntimeError> for Unwind {
    fn from(err: RuntimeError) -> Self {
        Unwind::RuntimeError(err)
    }
}

pub type EvalResult<T> = Result<T, Unwind>;

/// Build a catchable runtime-error `Unwind` from a message, the shape almost
/// every evaluator function needs when a value doesn't fit an operation.
pub fn rt_err(message: impl Into<String>) -> Unwind {
    Unwind::RuntimeError(RuntimeError {
        message: message.into(),
    })
}
