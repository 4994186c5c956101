use std::fmt::Display;

use thiserror::Error;

/// An error resulting from validating a save document.
///
/// Collects every problem found instead of stopping at the first one.
#[derive(Debug, Default, Error)]
pub struct ValidationError {
    problems: Vec<String>,
}

impl ValidationError {
    /// All problems.
    pub fn problems(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|s| s.as_str())
    }

    /// Records a new problem.
    pub fn add<M>(&mut self, problem: M)
    where
        M: Display,
    {
        self.problems.push(problem.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Fails with `self` if any problem was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: {}", self.problems.join("; "))
    }
}

impl<S> FromIterator<S> for ValidationError
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            problems: iter.into_iter().map(|s| s.into()).collect(),
        }
    }
}
