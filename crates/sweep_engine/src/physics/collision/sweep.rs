//! Swept (continuous) AABB collision tests
//!
//! A discrete overlap test samples positions at the start and end of a step,
//! so a fast body can pass straight through a thin target. The tests here
//! follow the whole displacement instead and report the first contact.
//!
//! Two layers live in this file:
//! - [`ray_sweep`] intersects a moving point with a (padded) rectangle using
//!   the slab method.
//! - [`single_sweep`] pads the target by the mover's half-extents so that a
//!   rectangle-vs-rectangle sweep becomes a point-vs-rectangle sweep
//!   (Minkowski sum), then projects the contact back onto the real target.
//!
//! Selecting the earliest hit across many targets is in
//! [`crate::physics::collision_system`].

use crate::foundation::math::utils::{ceil, clamp, sign};
use crate::foundation::math::Vec2;

use super::primitives::Rect;

/// A genuine contact between a swept body and a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Contact point
    pub pos: Vec2,
    /// Displacement left unconsumed at contact, pointing back along the motion
    pub delta: Vec2,
    /// Face that was struck; always one of `(±1, 0)` or `(0, ±1)`
    pub normal: Vec2,
    /// Fraction of the displacement at which contact happens, in `[0, 1]`
    pub time: f32,
}

/// Outcome of sweeping a mover along one displacement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// First contact, if any happened within the step
    pub hit: Option<Hit>,
    /// Safe center position for the mover at the end of the step
    pub pos: Vec2,
    /// Fraction of the displacement completed; equals `hit.time` on contact
    pub time: f32,
}

impl Sweep {
    /// The full, unobstructed move of `mover` by `delta`
    pub fn unobstructed(mover: &Rect, delta: Vec2) -> Self {
        Self {
            hit: None,
            pos: mover.center + delta,
            time: 1.0,
        }
    }

    /// Whether the sweep ended on a contact
    pub const fn is_hit(&self) -> bool {
        self.hit.is_some()
    }
}

/// Sweep the point `pos` by `delta` into `target` grown by `padding` on each side
///
/// Returns the earliest entry into the padded rectangle, or `None` when the
/// point misses it, reaches it only after this step (`time >= 1`), or had
/// already left it before the step began.
///
/// An axis with zero displacement uses a scale of `1` instead of an infinite
/// one. Its near/far "times" are then plain distances, so a point parallel
/// to a face but within one unit of the padded slab still registers a hit.
/// Results depend on this, keep it.
///
/// When both axes enter at the same time (a corner), the normal is taken
/// from the y face.
pub fn ray_sweep(pos: Vec2, delta: Vec2, target: &Rect, padding: Vec2) -> Option<Hit> {
    let scale = Vec2::new(axis_scale(delta.x), axis_scale(delta.y));
    let sign_x = sign(scale.x);
    let sign_y = sign(scale.y);
    let reach = target.half_extents() + padding;

    let near_x = (target.center.x - sign_x * reach.x - pos.x) * scale.x;
    let near_y = (target.center.y - sign_y * reach.y - pos.y) * scale.y;
    let far_x = (target.center.x + sign_x * reach.x - pos.x) * scale.x;
    let far_y = (target.center.y + sign_y * reach.y - pos.y) * scale.y;

    // Axis intervals never overlap in time
    if near_x > far_y || near_y > far_x {
        return None;
    }

    let near_time = if near_x > near_y { near_x } else { near_y };
    let far_time = if far_x < far_y { far_x } else { far_y };

    if near_time >= 1.0 || far_time <= 0.0 {
        return None;
    }

    let time = clamp(near_time, 0.0, 1.0);
    let normal = if near_x > near_y {
        Vec2::new(-sign_x, 0.0)
    } else {
        Vec2::new(0.0, -sign_y)
    };

    Some(Hit {
        pos: pos + delta * time,
        delta: -delta * (1.0 - time),
        normal,
        time,
    })
}

fn axis_scale(d: f32) -> f32 {
    if d == 0.0 { 1.0 } else { 1.0 / d }
}

/// Sweep `mover` by `delta` against a single `target`
///
/// With a zero-length `delta` this is a static overlap test: an overlapping
/// pair yields a zero-time hit at the mover's center (already colliding, do
/// not move), otherwise the mover simply stays put.
///
/// On contact the safe position is rounded up on both axes, and the contact
/// point is moved from the padded slab back onto the target's own boundary.
pub fn single_sweep(mover: &Rect, target: &Rect, delta: Vec2) -> Sweep {
    if delta.norm() == 0.0 {
        return static_overlap(mover, target);
    }

    let half = mover.half_extents();
    let Some(mut hit) = ray_sweep(mover.center, delta, target, half) else {
        return Sweep::unobstructed(mover, delta);
    };

    let time = clamp(hit.time, 0.0, 1.0);
    let pos = ceil(mover.center + delta * time);

    let direction = delta.normalize();
    let min = target.min();
    let max = target.max();
    hit.pos = Vec2::new(
        clamp(hit.pos.x + direction.x * half.x, min.x, max.x),
        clamp(hit.pos.y + direction.y * half.y, min.y, max.y),
    );

    Sweep {
        hit: Some(hit),
        pos,
        time,
    }
}

fn static_overlap(mover: &Rect, target: &Rect) -> Sweep {
    if !mover.overlaps(target) {
        return Sweep::unobstructed(mover, Vec2::zeros());
    }

    log::trace!(
        "static overlap: mover at ({:.2}, {:.2}) already inside target at ({:.2}, {:.2})",
        mover.center.x, mover.center.y, target.center.x, target.center.y
    );

    let hit = Hit {
        pos: mover.center,
        delta: Vec2::zeros(),
        normal: separation_normal(mover, target),
        time: 0.0,
    };
    Sweep {
        hit: Some(hit),
        pos: mover.center,
        time: 0.0,
    }
}

/// Face of least penetration, pointing from `target` toward `mover`
///
/// Equal penetration on both axes picks the y face.
fn separation_normal(mover: &Rect, target: &Rect) -> Vec2 {
    let offset = mover.center - target.center;
    let reach = mover.half_extents() + target.half_extents();
    let pen_x = reach.x - offset.x.abs();
    let pen_y = reach.y - offset.y.abs();

    if pen_x < pen_y {
        Vec2::new(sign(offset.x), 0.0)
    } else {
        Vec2::new(0.0, sign(offset.y))
    }
}
