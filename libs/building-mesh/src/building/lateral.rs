//! # Lateral Band
//!
//! The tapered side wall between the bottom and top rims.

use super::{rim_point, step_angle};
use crate::mesh::MeshBuilder;
use crate::params::ShapeParams;
use crate::vector::{cross, normalize, subtract};
use glam::DVec3;
use tracing::debug;

/// Appends the side wall: `2 * sides` vertices and `2 * sides` triangles.
///
/// For each angular step a top and a bottom rim vertex are added (in that
/// order) sharing one side normal, `normalize(up × tangent)`, where `up` runs
/// from the bottom to the top rim point and `tangent` is the direction of
/// increasing angle. Each segment is split into two triangles wound
/// counter-clockwise when seen from outside.
pub fn build_lateral_band(builder: &mut MeshBuilder, params: &ShapeParams) {
    let sides = params.sides as usize;
    let mut top = Vec::with_capacity(sides);
    let mut bottom = Vec::with_capacity(sides);

    for i in 0..params.sides {
        let theta = step_angle(i, params.sides);
        let bottom_point = rim_point(params.base_radius, 0.0, theta);
        let top_point = rim_point(params.top_radius, params.height, theta);

        let up = subtract(top_point, bottom_point);
        let tangent = DVec3::new(-theta.sin(), 0.0, theta.cos());
        let normal = normalize(cross(up, tangent));

        top.push(builder.add_vertex(top_point, normal));
        bottom.push(builder.add_vertex(bottom_point, normal));
    }

    for i in 0..sides {
        let next = (i + 1) % sides;

        builder.add_triangle(bottom[i], top[i], bottom[next]);
        builder.add_triangle(bottom[next], top[i], top[next]);
    }

    debug!(sides, vertices = 2 * sides, triangles = 2 * sides, "built lateral band");
}
