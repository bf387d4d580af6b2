//! # Mesh Errors
//!
//! Error types for mesh output and diagnostics. Generation itself never
//! fails: invalid shape input is normalized, not rejected.

use thiserror::Error;

/// Errors that can occur while writing or validating a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Writing serialized output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A face references a vertex that does not exist
    #[error("Face {face} references vertex {index} (vertex count: {count})")]
    IndexOutOfRange { face: usize, index: u32, count: usize },

    /// Normal list is not parallel to the vertex list
    #[error("Normal count {normals} does not match vertex count {vertices}")]
    NormalCountMismatch { vertices: usize, normals: usize },
}

impl MeshError {
    /// Creates an index out of range error.
    pub fn index_out_of_range(face: usize, index: u32, count: usize) -> Self {
        Self::IndexOutOfRange { face, index, count }
    }
}
