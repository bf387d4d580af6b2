//! # Caps
//!
//! Flat fan-triangulated disks closing the top and bottom of the building.

use super::{rim_point, step_angle};
use crate::mesh::MeshBuilder;
use crate::params::ShapeParams;
use glam::DVec3;
use tracing::debug;

/// Fan winding, chosen so the geometric normal matches the cap normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Winding {
    /// `[center, next, current]`: faces +Y
    Upward,
    /// `[center, current, next]`: faces -Y
    Downward,
}

/// Appends the top cap at `y = height` with radius `top_radius`.
///
/// Adds a center vertex, `sides` rim vertices and `sides` triangles, all
/// with normal (0, 1, 0).
pub fn build_top_cap(builder: &mut MeshBuilder, params: &ShapeParams) {
    build_fan(
        builder,
        params.sides,
        params.height,
        params.top_radius,
        DVec3::Y,
        Winding::Upward,
    );
    debug!(sides = params.sides, "built top cap");
}

/// Appends the bottom cap at `y = 0` with radius `base_radius`.
///
/// Same layout as [`build_top_cap`] with normal (0, -1, 0) and reversed
/// winding.
pub fn build_bottom_cap(builder: &mut MeshBuilder, params: &ShapeParams) {
    build_fan(
        builder,
        params.sides,
        0.0,
        params.base_radius,
        DVec3::NEG_Y,
        Winding::Downward,
    );
    debug!(sides = params.sides, "built bottom cap");
}

fn build_fan(
    builder: &mut MeshBuilder,
    sides: u32,
    y: f64,
    radius: f64,
    normal: DVec3,
    winding: Winding,
) {
    let center = builder.add_vertex(DVec3::new(0.0, y, 0.0), normal);
    let rim: Vec<u32> = (0..sides)
        .map(|i| builder.add_vertex(rim_point(radius, y, step_angle(i, sides)), normal))
        .collect();

    let count = rim.len();
    for i in 0..count {
        let current = rim[i];
        let next = rim[(i + 1) % count];
        match winding {
            Winding::Upward => builder.add_triangle(center, next, current),
            Winding::Downward => builder.add_triangle(center, current, next),
        }
    }
}
