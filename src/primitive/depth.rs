//! Depth sorter: back-to-front ordering for the painter's algorithm.
//!
//! Farther primitives (smaller keys) come first so nearer ones paint over
//! them. The sort is stable, so primitives with equal keys keep the order
//! they were built in and repeated sorts of identical input agree.

use super::{DepthKey, Primitive};

/// Sort ascending by depth key, preserving input order on ties.
pub fn sort_by_depth(primitives: &mut [Primitive]) {
    primitives.sort_by_key(Primitive::depth);
}

/// Whether every adjacent pair is in non-decreasing depth order.
#[must_use]
pub fn is_depth_ordered(primitives: &[Primitive]) -> bool {
    primitives
        .windows(2)
        .all(|pair| pair[0].depth() <= pair[1].depth())
}

/// Smallest and largest depth key, or `None` for an empty list.
#[must_use]
pub fn depth_range(primitives: &[Primitive]) -> Option<(DepthKey, DepthKey)> {
    let first = primitives.first()?.depth();
    Some(primitives.iter().map(Primitive::depth).fold(
        (first, first),
        |(lo, hi), d| (lo.min(d), hi.max(d)),
    ))
}
