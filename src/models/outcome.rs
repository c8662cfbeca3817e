use crate::error::TaskError;

/// Result of attempting to obtain a value from a task source.
///
/// Unlike `Result`, an `Outcome` is a value that flows through observation
/// streams: an error snapshot is a normal emission, not a terminal failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The value was obtained
    Success(T),
    /// The value could not be obtained
    Error(TaskError),
}

impl<T> Outcome<T> {
    /// Check if this is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Borrow the success value, if any
    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Error(_) => None,
        }
    }

    /// Borrow the error cause, if any
    pub fn error(&self) -> Option<&TaskError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Error(err) => Some(err),
        }
    }

    /// Transform the success value, keeping errors untouched
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Error(err) => Outcome::Error(err),
        }
    }

    /// Convert into a standard `Result`
    pub fn into_result(self) -> Result<T, TaskError> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Error(err) => Err(err),
        }
    }
}

impl<T> From<Result<T, TaskError>> for Outcome<T> {
    fn from(result: Result<T, TaskError>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Error(err),
        }
    }
}
