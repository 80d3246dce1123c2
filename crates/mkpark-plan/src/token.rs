//! Token substitution for toggling makefile names
//!
//! A [`TokenPair`] rewrites the first occurrence of a fixed filename token
//! inside a path string. Substitution is total: a path without the source
//! token comes back unchanged, never as an error.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Filename token the build system picks up
pub const ACTIVE_MAKEFILE: &str = "Android.mk";

/// Filename token the build system ignores
pub const PARKED_MAKEFILE: &str = "Prasdroid.mk";

/// Which way a toggle pass runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Rename active makefiles out of the build
    Park,
    /// Rename parked makefiles back into the build
    Restore,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Park => write!(f, "park"),
            Direction::Restore => write!(f, "restore"),
        }
    }
}

/// Source and destination filename tokens for one rename pass
///
/// The source token is the substring being replaced; the destination token
/// takes its place. Only the first occurrence in a path is rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    source: String,
    destination: String,
}

impl TokenPair {
    /// Create a pair from arbitrary tokens
    ///
    /// # Errors
    /// Returns [`TokenError::EmptySource`] if `source` is empty: an empty
    /// pattern would insert the destination at the start of every path
    /// instead of replacing anything.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<Self, TokenError> {
        let source = source.into();
        if source.is_empty() {
            return Err(TokenError::EmptySource);
        }
        Ok(Self {
            source,
            destination: destination.into(),
        })
    }

    /// Built-in pair that parks active makefiles
    #[inline]
    #[must_use]
    pub fn park() -> Self {
        Self {
            source: ACTIVE_MAKEFILE.to_string(),
            destination: PARKED_MAKEFILE.to_string(),
        }
    }

    /// Built-in pair that restores parked makefiles
    #[inline]
    #[must_use]
    pub fn restore() -> Self {
        Self::park().reversed()
    }

    /// Built-in pair for the given direction
    #[inline]
    #[must_use]
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Park => Self::park(),
            Direction::Restore => Self::restore(),
        }
    }

    /// Same tokens, swapped roles
    #[inline]
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }

    /// Token being replaced
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Token taking its place
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Replace the first occurrence of the source token in `input`
    ///
    /// Total over any input string: when the token is absent the input comes
    /// back unchanged, and when it occurs more than once only the first
    /// occurrence changes.
    #[inline]
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        input.replacen(&self.source, &self.destination, 1)
    }

    /// Whether `input` contains the source token
    #[inline]
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        input.contains(&self.source)
    }
}

impl Display for TokenPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Errors from token pair construction
///
/// Substitution itself never fails; only building a pair can.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Source token was empty
    #[error("source token must not be empty")]
    EmptySource,
}
