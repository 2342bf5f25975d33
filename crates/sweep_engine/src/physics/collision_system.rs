//! Group sweep: earliest contact across many targets
//!
//! Every target is swept independently with [`single_sweep`]; the result
//! with the smallest contact time wins. Targets that are not hit never
//! replace a result, so with no contacts the mover completes its full
//! displacement.
//!
//! Ties on contact time go to the target encountered first, which falls out
//! of comparing with a strict `<`. The parallel variant reproduces the same
//! choice by comparing target indices on equal times.

use crate::foundation::math::Vec2;
use crate::physics::collision::{single_sweep, Rect, Sweep};

/// Sweep `mover` by `delta` against every target and keep the earliest hit
pub fn group_sweep<'a, I>(mover: &Rect, delta: Vec2, targets: I) -> Sweep
where
    I: IntoIterator<Item = &'a Rect>,
{
    targets
        .into_iter()
        .enumerate()
        .fold(Sweep::unobstructed(mover, delta), |nearest, (index, target)| {
            let sweep = single_sweep(mover, target, delta);
            if sweep.is_hit() && sweep.time < nearest.time {
                log::trace!("target {} is the new nearest hit at t={:.4}", index, sweep.time);
                sweep
            } else {
                nearest
            }
        })
}

/// [`group_sweep`] with the per-target tests spread over the rayon pool
///
/// Produces exactly the same result as the sequential version, including the
/// first-encountered tie-break.
#[cfg(feature = "parallel")]
pub fn group_sweep_par(mover: &Rect, delta: Vec2, targets: &[Rect]) -> Sweep {
    use rayon::prelude::*;

    targets
        .par_iter()
        .enumerate()
        .map(|(index, target)| (index, single_sweep(mover, target, delta)))
        .filter(|(_, sweep)| sweep.is_hit() && sweep.time < 1.0)
        .reduce_with(|a, b| if precedes(&b, &a) { b } else { a })
        .map_or_else(|| Sweep::unobstructed(mover, delta), |(_, sweep)| sweep)
}

#[cfg(feature = "parallel")]
fn precedes(a: &(usize, Sweep), b: &(usize, Sweep)) -> bool {
    a.1.time < b.1.time || (a.1.time == b.1.time && a.0 < b.0)
}

/// An ordered set of stationary targets swept against as one group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepGroup {
    targets: Vec<Rect>,
}

impl SweepGroup {
    /// Create an empty group
    pub const fn new() -> Self {
        Self { targets: Vec::new() }
    }

    /// Append a target; insertion order decides ties
    pub fn push(&mut self, target: Rect) {
        self.targets.push(target);
    }

    /// Number of targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the group has no targets
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Targets in insertion order
    pub fn targets(&self) -> &[Rect] {
        &self.targets
    }

    /// Whether any target overlaps `rect`
    pub fn any_overlap(&self, rect: &Rect) -> bool {
        self.targets.iter().any(|target| target.overlaps(rect))
    }

    /// Sweep `mover` by `delta` against the whole group
    pub fn sweep(&self, mover: &Rect, delta: Vec2) -> Sweep {
        #[cfg(feature = "parallel")]
        {
            group_sweep_par(mover, delta, &self.targets)
        }
        #[cfg(not(feature = "parallel"))]
        {
            group_sweep(mover, delta, &self.targets)
        }
    }
}

impl From<Vec<Rect>> for SweepGroup {
    fn from(targets: Vec<Rect>) -> Self {
        Self { targets }
    }
}

impl FromIterator<Rect> for SweepGroup {
    fn from_iter<T: IntoIterator<Item = Rect>>(iter: T) -> Self {
        Self { targets: iter.into_iter().collect() }
    }
}
