//! # Vector Math
//!
//! Free functions over [`DVec3`] used by the patch builders.

use glam::DVec3;

/// Componentwise difference `u - v`.
#[inline]
pub fn subtract(u: DVec3, v: DVec3) -> DVec3 {
    u - v
}

/// Right-handed cross product `u × v`.
#[inline]
pub fn cross(u: DVec3, v: DVec3) -> DVec3 {
    u.cross(v)
}

/// Returns the unit vector in the direction of `v`.
///
/// A zero-length input yields [`DVec3::ZERO`] instead of NaN, so collapsed
/// geometry (for example both radii and the height at zero) still produces
/// finite normals.
///
/// # Example
///
/// ```rust
/// use building_mesh::vector::normalize;
/// use glam::DVec3;
///
/// assert_eq!(normalize(DVec3::new(0.0, 3.0, 0.0)), DVec3::Y);
/// assert_eq!(normalize(DVec3::ZERO), DVec3::ZERO);
/// ```
#[inline]
pub fn normalize(v: DVec3) -> DVec3 {
    let len = v.length();
    if len > 0.0 {
        v / len
    } else {
        DVec3::ZERO
    }
}
