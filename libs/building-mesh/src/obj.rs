//! # OBJ Serialization
//!
//! Writes a [`Mesh`] as Wavefront OBJ text with shared position/normal
//! indices:
//!
//! ```text
//! # Building: Sides=4, Height=2, R_Base=1, R_Top=1
//! o Building_4_2_1_1
//! v 1.0000 2.0000 0.0000
//! ...
//!
//! vn 1.0000 0.0000 0.0000
//! ...
//!
//! f 2//2 1//1 4//4
//! ...
//! ```
//!
//! Output is deterministic: the same mesh always yields the same bytes.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::ShapeParams;
use config::constants::{OBJECT_NAME_PREFIX, OBJ_DECIMALS};
use glam::DVec3;
use std::fmt::{self, Write as _};
use std::io;

/// Renders the mesh as an OBJ string.
///
/// # Example
///
/// ```rust
/// use building_mesh::{build_building, obj::to_obj_string, ShapeParams};
///
/// let params = ShapeParams::default();
/// let text = to_obj_string(&build_building(&params), &params);
/// assert!(text.starts_with("# Building: Sides=8, Height=6, R_Base=1, R_Top=0.8\n"));
/// ```
pub fn to_obj_string(mesh: &Mesh, params: &ShapeParams) -> String {
    // Roughly 30 bytes per line
    let lines = mesh.vertex_count() * 2 + mesh.triangle_count() + 4;
    let mut out = String::with_capacity(lines * 30);
    // Writing into a String cannot fail
    let _ = render(&mut out, mesh, params);
    out
}

/// Writes the mesh as OBJ text to any writer.
///
/// Produces exactly the bytes of [`to_obj_string`].
pub fn write_obj<W: io::Write>(
    writer: &mut W,
    mesh: &Mesh,
    params: &ShapeParams,
) -> Result<(), MeshError> {
    writer.write_all(to_obj_string(mesh, params).as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn render(out: &mut String, mesh: &Mesh, params: &ShapeParams) -> fmt::Result {
    let ShapeParams {
        sides,
        height,
        base_radius,
        top_radius,
    } = *params;
    let [height, base_radius, top_radius] = [height, base_radius, top_radius].map(positive_zero);

    writeln!(
        out,
        "# Building: Sides={sides}, Height={height}, R_Base={base_radius}, R_Top={top_radius}"
    )?;
    writeln!(
        out,
        "o {OBJECT_NAME_PREFIX}_{sides}_{height}_{base_radius}_{top_radius}"
    )?;

    for v in mesh.vertices() {
        write_vec3(out, "v", *v)?;
    }
    out.push('\n');

    for n in mesh.normals() {
        write_vec3(out, "vn", *n)?;
    }
    out.push('\n');

    for tri in mesh.faces() {
        let [a, b, c] = tri.map(|i| i + 1);
        writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }

    Ok(())
}

fn write_vec3(out: &mut String, tag: &str, v: DVec3) -> fmt::Result {
    writeln!(out, "{tag} {} {} {}", Fixed(v.x), Fixed(v.y), Fixed(v.z))
}

/// A coordinate printed with [`OBJ_DECIMALS`] digits.
///
/// Values exactly halfway between two outputs round away from zero
/// (`0.03125` prints `0.0313`), and an exact `-0.0` prints unsigned.
struct Fixed(f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = positive_zero(self.0);
        let Some(halves) = odd_halves(value) else {
            return write!(f, "{:.*}", OBJ_DECIMALS, value);
        };

        // value = halves / 2^(d+1), so value * 10^d = halves * 5^d / 2
        let units = (u128::from(halves) * 5u128.pow(OBJ_DECIMALS as u32) + 1) / 2;
        let scale = 10u128.pow(OBJ_DECIMALS as u32);
        let sign = if value < 0.0 { "-" } else { "" };
        write!(
            f,
            "{sign}{}.{:0width$}",
            units / scale,
            units % scale,
            width = OBJ_DECIMALS
        )
    }
}

/// Returns `|value| * 2^(d+1)` when it is an odd integer, which is exactly
/// when `value` lies halfway between two `d`-digit decimals.
fn odd_halves(value: f64) -> Option<u64> {
    // Above 2^53 every f64 is an even integer
    const EXACT_LIMIT: f64 = 9_007_199_254_740_992.0;

    let scaled = value.abs() * 2f64.powi(OBJ_DECIMALS as i32 + 1);
    if scaled.fract() != 0.0 || scaled >= EXACT_LIMIT {
        return None;
    }
    let halves = scaled as u64;
    (halves % 2 == 1).then_some(halves)
}

/// Folds `-0.0` into `0.0` so an exact zero never prints with a sign.
#[inline]
fn positive_zero(value: f64) -> f64 {
    value + 0.0
}
