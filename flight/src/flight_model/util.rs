use crate::{Quatf, Vec3f};

// Basis: standard RHS with +Z forward, +Y up, +X right
pub(super) const BODY_RIGHT: Vec3f = Vec3f::X;
pub(super) const BODY_UP: Vec3f = Vec3f::Y;
pub(super) const BODY_FWD: Vec3f = Vec3f::Z;

/// Body axes in world space as (right, up, forward).
#[inline]
pub(super) fn body_axes(q: Quatf) -> (Vec3f, Vec3f, Vec3f) {
    (q * BODY_RIGHT, q * BODY_UP, q * BODY_FWD)
}
