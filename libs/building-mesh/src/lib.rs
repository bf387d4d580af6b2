//! # Building Mesh
//!
//! Procedural mesh generation for a closed, tapered N-sided prism
//! ("building") with OBJ text output.
//!
//! ## Architecture
//!
//! ```text
//! RawShapeParams → ShapeParams → MeshBuilder (lateral, top, bottom) → Mesh → OBJ text
//! ```
//!
//! - **params**: Defaults and side-count clamping, never fails
//! - **building**: Lateral band and cap builders appending to one context
//! - **mesh**: Append-only builder and the immutable result
//! - **obj**: Deterministic fixed-precision serializer
//!
//! ## Usage
//!
//! ```rust
//! use building_mesh::{generate, obj::to_obj_string, RawShapeParams};
//!
//! let (params, mesh) = generate(&RawShapeParams::new(4.0, 2.0, 1.0, 1.0));
//! assert_eq!(mesh.vertex_count(), 18);
//! assert_eq!(mesh.triangle_count(), 16);
//!
//! let text = to_obj_string(&mesh, &params);
//! assert!(text.starts_with("# Building: Sides=4"));
//! ```

pub mod building;
pub mod error;
pub mod mesh;
pub mod obj;
pub mod params;
pub mod vector;

pub use building::build_building;
pub use error::MeshError;
pub use mesh::{Mesh, MeshBuilder};
pub use params::{RawShapeParams, ShapeParams};

/// Normalizes raw input and builds the mesh.
///
/// Returns the normalized parameters alongside the mesh so callers can
/// pass both to the serializer.
pub fn generate(raw: &RawShapeParams) -> (ShapeParams, Mesh) {
    let params = ShapeParams::from_raw(raw);
    let mesh = build_building(&params);
    (params, mesh)
}

/// Normalizes raw input, builds the mesh and renders it as OBJ text.
///
/// # Example
///
/// ```rust
/// use building_mesh::{generate_obj, RawShapeParams};
///
/// let text = generate_obj(&RawShapeParams::default());
/// assert!(text.contains("o Building_8_6_1_0.8\n"));
/// ```
pub fn generate_obj(raw: &RawShapeParams) -> String {
    let (params, mesh) = generate(raw);
    obj::to_obj_string(&mesh, &params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_defaults() {
        let (params, mesh) = generate(&RawShapeParams::default());
        assert_eq!(params, ShapeParams::default());
        assert_eq!(mesh.vertex_count(), 4 * 8 + 2);
        assert_eq!(mesh.triangle_count(), 4 * 8);
    }

    #[test]
    fn test_generate_obj_is_deterministic() {
        let raw = RawShapeParams::new(7.0, 3.5, 1.2, 0.4);
        assert_eq!(generate_obj(&raw), generate_obj(&raw));
    }
}
