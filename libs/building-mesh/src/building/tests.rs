//! # Building Assembly Tests
//!
//! Tests for the lateral band, both caps and the assembled mesh.

use super::*;
use crate::mesh::MeshBuilder;
use approx::assert_relative_eq;
use glam::DVec3;

fn params(sides: u32, height: f64, base_radius: f64, top_radius: f64) -> ShapeParams {
    ShapeParams {
        sides,
        height,
        base_radius,
        top_radius,
    }
}

fn face_normal(mesh: &Mesh, tri: [u32; 3]) -> DVec3 {
    let v = mesh.vertices();
    let a = v[tri[0] as usize];
    let b = v[tri[1] as usize];
    let c = v[tri[2] as usize];
    (b - a).cross(c - a)
}

// =============================================================================
// LATERAL BAND
// =============================================================================

#[test]
fn test_lateral_counts() {
    let mut builder = MeshBuilder::new();
    build_lateral_band(&mut builder, &params(6, 3.0, 1.0, 0.5));
    assert_eq!(builder.vertex_count(), 12);
    assert_eq!(builder.triangle_count(), 12);
}

#[test]
fn test_lateral_vertex_order_top_then_bottom() {
    let mut builder = MeshBuilder::new();
    build_lateral_band(&mut builder, &params(4, 2.0, 1.0, 0.5));
    let mesh = builder.finish();

    // Step 0 at theta = 0
    assert_relative_eq!(mesh.vertices()[0].x, 0.5);
    assert_eq!(mesh.vertices()[0].y, 2.0);
    assert_relative_eq!(mesh.vertices()[1].x, 1.0);
    assert_eq!(mesh.vertices()[1].y, 0.0);
}

#[test]
fn test_lateral_pair_shares_normal() {
    let mut builder = MeshBuilder::new();
    build_lateral_band(&mut builder, &params(5, 4.0, 2.0, 1.0));
    let mesh = builder.finish();

    for pair in mesh.normals().chunks(2) {
        assert_eq!(pair[0], pair[1]);
    }
}

#[test]
fn test_lateral_normal_tilts_with_taper() {
    // Narrowing toward the top tilts the side normal upward
    let mut builder = MeshBuilder::new();
    build_lateral_band(&mut builder, &params(8, 1.0, 2.0, 1.0));
    let n = builder.finish().normals()[0];

    assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(n.x, 1.0 / 2f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(n.y, 1.0 / 2f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(n.z, 0.0, epsilon = 1e-12);
}

#[test]
fn test_lateral_straight_wall_normal_is_radial() {
    let mut builder = MeshBuilder::new();
    build_lateral_band(&mut builder, &params(4, 2.0, 1.0, 1.0));
    let mesh = builder.finish();

    // Step 1 sits at 90 degrees: +Z
    let n = mesh.normals()[2];
    assert_relative_eq!(n.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(n.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(n.z, 1.0, epsilon = 1e-12);
}

#[test]
fn test_lateral_winding_matches_normals() {
    let mut builder = MeshBuilder::new();
    build_lateral_band(&mut builder, &params(7, 3.0, 1.5, 0.5));
    let mesh = builder.finish();

    for &tri in mesh.faces() {
        let geometric = face_normal(&mesh, tri);
        for &i in &tri {
            assert!(geometric.dot(mesh.normals()[i as usize]) > 0.0);
        }
    }
}

#[test]
fn test_lateral_wraps_to_first_step() {
    let mut builder = MeshBuilder::new();
    build_lateral_band(&mut builder, &params(3, 1.0, 1.0, 1.0));
    let mesh = builder.finish();

    // Last segment joins step 2 (vertices 4, 5) back to step 0 (vertices 0, 1)
    assert_eq!(mesh.faces()[4], [5, 4, 1]);
    assert_eq!(mesh.faces()[5], [1, 4, 0]);
}

#[test]
fn test_lateral_degenerate_is_finite() {
    let mut builder = MeshBuilder::new();
    build_lateral_band(&mut builder, &params(8, 0.0, 0.0, 0.0));
    let mesh = builder.finish();

    for n in mesh.normals() {
        assert_eq!(*n, DVec3::ZERO);
    }
}

// =============================================================================
// CAPS
// =============================================================================

#[test]
fn test_top_cap_layout() {
    let mut builder = MeshBuilder::new();
    build_top_cap(&mut builder, &params(5, 3.0, 1.0, 0.5));
    let mesh = builder.finish();

    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.triangle_count(), 5);
    assert_eq!(mesh.vertices()[0], DVec3::new(0.0, 3.0, 0.0));
    for (v, n) in mesh.vertices().iter().zip(mesh.normals()) {
        assert_eq!(v.y, 3.0);
        assert_eq!(*n, DVec3::Y);
    }
    for v in &mesh.vertices()[1..] {
        assert_relative_eq!(v.length(), (0.25f64 + 9.0).sqrt(), epsilon = 1e-12);
    }
}

#[test]
fn test_bottom_cap_layout() {
    let mut builder = MeshBuilder::new();
    build_bottom_cap(&mut builder, &params(5, 3.0, 2.0, 0.5));
    let mesh = builder.finish();

    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.triangle_count(), 5);
    for (v, n) in mesh.vertices().iter().zip(mesh.normals()) {
        assert_eq!(v.y, 0.0);
        assert_eq!(*n, DVec3::NEG_Y);
    }
    assert_relative_eq!(mesh.vertices()[1].x, 2.0);
}

#[test]
fn test_cap_windings_face_outward() {
    let mut builder = MeshBuilder::new();
    build_top_cap(&mut builder, &params(9, 2.0, 1.0, 1.0));
    let top = builder.finish();
    for &tri in top.faces() {
        assert!(face_normal(&top, tri).y > 0.0);
    }

    let mut builder = MeshBuilder::new();
    build_bottom_cap(&mut builder, &params(9, 2.0, 1.0, 1.0));
    let bottom = builder.finish();
    for &tri in bottom.faces() {
        assert!(face_normal(&bottom, tri).y < 0.0);
    }
}

#[test]
fn test_cap_fan_from_center() {
    let mut builder = MeshBuilder::new();
    build_top_cap(&mut builder, &params(4, 1.0, 1.0, 1.0));
    let mesh = builder.finish();

    assert_eq!(mesh.faces()[0], [0, 2, 1]);
    assert_eq!(mesh.faces()[3], [0, 1, 4]);
}

// =============================================================================
// ASSEMBLY
// =============================================================================

#[test]
fn test_assembly_order_and_counts() {
    let mesh = build_building(&params(4, 2.0, 1.0, 1.0));
    assert_eq!(mesh.vertex_count(), 18);
    assert_eq!(mesh.triangle_count(), 16);

    // Lateral band first, then top cap center, then bottom cap center
    assert_eq!(mesh.vertices()[8], DVec3::new(0.0, 2.0, 0.0));
    assert_eq!(mesh.normals()[8], DVec3::Y);
    assert_eq!(mesh.vertices()[13], DVec3::ZERO);
    assert_eq!(mesh.normals()[13], DVec3::NEG_Y);
}

#[test]
fn test_assembly_is_closed() {
    for sides in [3, 4, 8, 17, 36] {
        let mesh = build_building(&params(sides, 6.0, 1.0, 0.8));
        assert_eq!(mesh.boundary_edges(), 0, "sides = {sides}");
        assert!(mesh.validate().is_ok());
    }
}

#[test]
fn test_assembly_bounding_box() {
    let mesh = build_building(&params(4, 2.0, 1.0, 0.5));
    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(min.x, -1.0, epsilon = 1e-12);
    assert_relative_eq!(max.x, 1.0, epsilon = 1e-12);
    assert_eq!(min.y, 0.0);
    assert_eq!(max.y, 2.0);
}

#[test]
fn test_assembly_runs_are_independent() {
    let a = build_building(&params(6, 2.0, 1.0, 0.5));
    let b = build_building(&params(6, 2.0, 1.0, 0.5));
    assert_eq!(a, b);
}
