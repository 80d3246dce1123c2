//! Pure rename planning
//!
//! [`RenamePlan::build`] walks a manifest once and derives one
//! source-to-destination step per entry. Planning never touches the
//! filesystem and never fails.

use serde::{Deserialize, Serialize};

use crate::entry::PathEntry;
use crate::manifest::Manifest;
use crate::token::TokenPair;

/// One planned move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameStep {
    source: PathEntry,
    destination: PathEntry,
}

impl RenameStep {
    /// Create a step from explicit endpoints
    #[inline]
    #[must_use]
    pub fn new(source: PathEntry, destination: PathEntry) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Derive the step for one entry under a token pair
    #[inline]
    #[must_use]
    pub fn derive(entry: &PathEntry, tokens: &TokenPair) -> Self {
        Self {
            source: entry.clone(),
            destination: PathEntry::new(tokens.apply(entry.as_str())),
        }
    }

    /// Path being moved
    #[inline]
    #[must_use]
    pub fn source(&self) -> &PathEntry {
        &self.source
    }

    /// Path it moves to
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &PathEntry {
        &self.destination
    }

    /// Whether the step leaves the path unchanged
    ///
    /// True when the entry never contained the source token. No-op steps
    /// stay in the plan and are rendered like any other step.
    #[inline]
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.source == self.destination
    }
}

/// Ordered sequence of planned moves
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenamePlan {
    steps: Vec<RenameStep>,
}

impl RenamePlan {
    /// Derive the plan for a manifest under a token pair
    ///
    /// One step per entry, in manifest order, duplicates preserved. Total:
    /// entries without the source token become no-op steps, never errors.
    #[must_use]
    pub fn build(manifest: &Manifest, tokens: &TokenPair) -> Self {
        let steps: Vec<RenameStep> = manifest
            .iter()
            .map(|entry| RenameStep::derive(entry, tokens))
            .collect();
        tracing::debug!("Planned {} renames ({})", steps.len(), tokens);
        Self { steps }
    }

    /// Steps in plan order
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[RenameStep] {
        &self.steps
    }

    /// Number of steps; always equals the manifest length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan holds no steps
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterator over steps in order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, RenameStep> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a RenamePlan {
    type Item = &'a RenameStep;
    type IntoIter = std::slice::Iter<'a, RenameStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
