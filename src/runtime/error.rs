use std::{error::Error, fmt, rc::Rc};

/// Errors that travel through callable invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Raised for a missing block or, by the calling-convention layer, for a
    /// strict argument-count mismatch.
    Argument(String),
    /// A failure raised inside a native function body. Propagated untouched.
    Raised { class: Rc<str>, message: String },
}

impl RuntimeError {
    pub fn no_block_given() -> Self {
        RuntimeError::Argument("no block given".to_string())
    }

    pub fn wrong_argument_count(given: usize, expected: &str) -> Self {
        RuntimeError::Argument(format!(
            "wrong number of arguments (given {}, expected {})",
            given, expected
        ))
    }

    pub fn raised(class: &str, message: impl Into<String>) -> Self {
        RuntimeError::Raised {
            class: class.into(),
            message: message.into(),
        }
    }

    /// Class name of the exception as the host runtime would report it.
    pub fn class_name(&self) -> &str {
        match self {
            RuntimeError::Argument(_) => "ArgumentError",
            RuntimeError::Raised { class, .. } => class,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RuntimeError::Argument(message) => message,
            RuntimeError::Raised { message, .. } => message,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.class_name(), self.message())
    }
}

impl Error for RuntimeError {}
