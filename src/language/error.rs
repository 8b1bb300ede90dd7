use std::{fmt, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
    /// Line and column (both counting from 1) where decoding stopped, if
    /// the problem was with the content rather than reading the file.
    pub position: Option<(usize, usize)>,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some((line, column)) => write!(
                f,
                "{}:{}:{} {}: {}",
                self.filename
                    .display(),
                line,
                column,
                self.problem,
                self.details
            ),
            None => write!(f, "{}: {}", self.problem, self.details),
        }
    }
}

impl std::error::Error for LoadingError<'_> {}
