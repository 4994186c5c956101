use std::{
    fmt,
    fmt::{
        Debug,
        Display,
    },
    panic::Location,
};

/// Context attached on top of another error.
///
/// Records the source location where the context was added, which shows up in the debug output.
pub struct ContextError {
    message: String,
    location: &'static Location<'static>,
}

impl ContextError {
    #[track_caller]
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
            location: Location::caller(),
        }
    }
}

impl Debug for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (at {}:{})",
            self.message,
            self.location.file(),
            self.location.line()
        )
    }
}

impl Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
