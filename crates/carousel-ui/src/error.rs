use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// No content container was configured; the carousel stays inert.
    MissingContentContainer,
    /// `complete_initialization` got a token from an earlier `initialize`.
    StaleInitialization { expected: u64, found: u64 },
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::MissingContentContainer => write!(
                f,
                "content container is empty; attach the viewport or content view"
            ),
            CarouselError::StaleInitialization { expected, found } => write!(
                f,
                "initialization token {found} is stale (current is {expected})"
            ),
        }
    }
}

impl std::error::Error for CarouselError {}
