//! # Building Assembly
//!
//! Builds the closed tapered prism from three independent patches:
//!
//! ```text
//!         top cap   (y = height, radius = top_radius, normal +Y)
//!        /-------\
//!       /lateral  \ (2 vertices and 2 triangles per side)
//!      /-----------\
//!       bottom cap  (y = 0, radius = base_radius, normal -Y)
//! ```
//!
//! Patches do not share vertices. Seam vertices are duplicated with the
//! patch's own normal, which gives flat-faceted shading.

mod cap;
mod lateral;

#[cfg(test)]
mod tests;

pub use cap::{build_bottom_cap, build_top_cap};
pub use lateral::build_lateral_band;

use crate::mesh::{Mesh, MeshBuilder};
use crate::params::ShapeParams;
use glam::DVec3;
use std::f64::consts::TAU;
use tracing::debug;

/// Builds the complete building mesh.
///
/// Patches are appended in a fixed order (lateral band, top cap, bottom
/// cap), which determines index numbering. The result has `4 * sides + 2`
/// vertices and `4 * sides` triangles.
///
/// # Example
///
/// ```rust
/// use building_mesh::{build_building, ShapeParams};
///
/// let params = ShapeParams { sides: 4, height: 2.0, base_radius: 1.0, top_radius: 1.0 };
/// let mesh = build_building(&params);
/// assert_eq!(mesh.vertex_count(), 18);
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
pub fn build_building(params: &ShapeParams) -> Mesh {
    let sides = params.sides as usize;
    let mut builder = MeshBuilder::with_capacity(4 * sides + 2, 4 * sides);

    build_lateral_band(&mut builder, params);
    build_top_cap(&mut builder, params);
    build_bottom_cap(&mut builder, params);

    let mesh = builder.finish();
    debug!(
        sides = params.sides,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "assembled building mesh"
    );
    mesh
}

/// Angle of rim step `i` out of `sides` equal steps.
#[inline]
fn step_angle(i: u32, sides: u32) -> f64 {
    f64::from(i) * (TAU / f64::from(sides))
}

/// Point on a horizontal circle of `radius` at height `y`.
///
/// Every patch derives rim positions through this function so that seam
/// coordinates match exactly.
#[inline]
fn rim_point(radius: f64, y: f64, theta: f64) -> DVec3 {
    DVec3::new(radius * theta.cos(), y, radius * theta.sin())
}
