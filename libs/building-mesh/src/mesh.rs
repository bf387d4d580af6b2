//! # Mesh Data Structure
//!
//! An append-only build context ([`MeshBuilder`]) and the immutable mesh it
//! finishes into ([`Mesh`]). Vertices and normals are stored as parallel
//! lists; faces index both with the same 0-based index.

use crate::error::MeshError;
use glam::DVec3;
use std::cmp::Ordering;
use std::collections::HashMap;

/// A finished triangle mesh with per-vertex normals.
///
/// Fields are private: once built, a mesh is read-only.
///
/// # Example
///
/// ```rust
/// use building_mesh::mesh::MeshBuilder;
/// use glam::DVec3;
///
/// let mut builder = MeshBuilder::new();
/// let a = builder.add_vertex(DVec3::ZERO, DVec3::Y);
/// let b = builder.add_vertex(DVec3::Z, DVec3::Y);
/// let c = builder.add_vertex(DVec3::X, DVec3::Y);
/// builder.add_triangle(a, b, c);
/// let mesh = builder.finish();
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    normals: Vec<DVec3>,
    faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Per-vertex normals, parallel to [`Mesh::vertices`].
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Triangles as 0-based vertex indices.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Checks structural consistency.
    ///
    /// Checks:
    /// - Normals are parallel to vertices
    /// - All triangle indices are valid
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.normals.len() != self.vertices.len() {
            return Err(MeshError::NormalCountMismatch {
                vertices: self.vertices.len(),
                normals: self.normals.len(),
            });
        }

        let count = self.vertices.len();
        for (face, tri) in self.faces.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= count) {
                return Err(MeshError::index_out_of_range(face, index, count));
            }
        }

        Ok(())
    }

    /// Counts directed edges that have no oppositely wound partner.
    ///
    /// Edges are matched by exact vertex position rather than by index, so
    /// patches that duplicate seam vertices still pair up. A closed,
    /// consistently wound surface returns 0.
    pub fn boundary_edges(&self) -> usize {
        let mut directed: HashMap<(PositionKey, PositionKey), isize> = HashMap::new();

        for tri in &self.faces {
            for k in 0..3 {
                let a = PositionKey::new(self.vertices[tri[k] as usize]);
                let b = PositionKey::new(self.vertices[tri[(k + 1) % 3] as usize]);
                match a.cmp(&b) {
                    Ordering::Less => *directed.entry((a, b)).or_default() += 1,
                    Ordering::Greater => *directed.entry((b, a)).or_default() -= 1,
                    // Collapsed edge (zero radius), no direction
                    Ordering::Equal => {}
                }
            }
        }

        directed.values().map(|balance| balance.unsigned_abs()).sum()
    }
}

/// Exact bitwise identity of a position, with `-0.0` folded into `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct PositionKey([u64; 3]);

impl PositionKey {
    fn new(p: DVec3) -> Self {
        Self([
            (p.x + 0.0).to_bits(),
            (p.y + 0.0).to_bits(),
            (p.z + 0.0).to_bits(),
        ])
    }
}

/// Append-only mesh-building context.
///
/// Each generation run owns one builder; patch builders receive it by
/// `&mut` and only ever push. [`MeshBuilder::finish`] consumes it.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<DVec3>,
    normals: Vec<DVec3>,
    faces: Vec<[u32; 3]>,
}

impl MeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(triangle_count),
        }
    }

    /// Adds a vertex together with its normal and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.push([v0, v1, v2]);
    }

    /// Number of vertices added so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles added so far.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Freezes the builder into an immutable mesh.
    pub fn finish(self) -> Mesh {
        Mesh {
            vertices: self.vertices,
            normals: self.normals,
            faces: self.faces,
        }
    }
}
