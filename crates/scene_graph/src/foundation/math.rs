//! Math utilities and types
//!
//! Provides the math types carried by scene graph payloads.

pub use nalgebra::{Matrix4, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Convert a row-major nested array (as written in scene descriptions) into a matrix
pub fn mat4_from_rows(rows: &[[f32; 4]; 4]) -> Mat4 {
    Mat4::from_fn(|row, col| rows[row][col])
}

/// Convert a matrix back into a row-major nested array
pub fn mat4_to_rows(matrix: &Mat4) -> [[f32; 4]; 4] {
    let mut rows = [[0.0; 4]; 4];
    for (row, values) in rows.iter_mut().enumerate() {
        for (col, value) in values.iter_mut().enumerate() {
            *value = matrix[(row, col)];
        }
    }
    rows
}
