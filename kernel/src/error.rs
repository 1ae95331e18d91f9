use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    /// Caller-supplied data broke an invariant before any store call was made.
    Validation(String),
    Timeout,
    Persistence,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation(message) => write!(f, "{message}"),
            KernelError::Timeout => write!(f, "store operation timed out"),
            KernelError::Persistence => write!(f, "store operation failed"),
        }
    }
}

impl Context for KernelError {}
