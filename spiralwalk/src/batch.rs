//! Parallel walking of independent matrices
//!
//! A [`SpiralWalker`] keeps no per-walk state, so a single configured walker
//! is shared by every rayon worker. Each matrix is still walked by one thread.

use rayon::prelude::*;

use crate::{RaggedMatrix, SpiralWalker, Walk};

/// Totals over a batch of walks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of matrices walked
    pub matrices: usize,
    /// Matrices that produced no output
    pub empty: usize,
    /// Cells emitted across the batch
    pub elements_walked: usize,
    /// Placeholder cells emitted across the batch
    pub placeholders: usize,
}

impl BatchSummary {
    /// Summarise finished walks
    pub fn of(walks: &[Walk]) -> Self {
        walks.iter().fold(Self::default(), |summary, walk| Self {
            matrices: summary.matrices + 1,
            empty: summary.empty + usize::from(walk.is_empty()),
            elements_walked: summary.elements_walked + walk.elements_walked(),
            placeholders: summary.placeholders + walk.placeholders(),
        })
    }
}

/// Walk every matrix in parallel, keeping input order
pub fn walk_batch<M>(walker: &SpiralWalker, matrices: &[M]) -> Vec<Walk>
where
    M: RaggedMatrix + Sync,
{
    par_walk(matrices, |matrix| walker.walk(matrix))
}

/// Walk matrices of runtime-chosen element types in parallel, keeping input order
#[cfg(feature = "serde")]
pub fn walk_dynamic_batch(walker: &SpiralWalker, matrices: &[crate::DynamicMatrix]) -> Vec<Walk> {
    par_walk(matrices, |matrix| matrix.walk(walker))
}

fn par_walk<T, F>(items: &[T], walk: F) -> Vec<Walk>
where
    T: Sync,
    F: Fn(&T) -> Walk + Sync + Send,
{
    let walks: Vec<Walk> = items.par_iter().map(walk).collect();

    tracing::debug!(
        matrices = walks.len(),
        threads = rayon::current_num_threads(),
        "walked batch"
    );

    walks
}
