//! Cofactor-based inversion and camera/projection matrix builders.
//!
//! Matrices are glam types (column-major storage, column-vector convention).
//! `row`/`col` arguments below always refer to the mathematical layout, so
//! `entry(row, col) == m.col(col)[row]`.

use glam::{Mat2, Mat3, Mat4, Vec3};

use crate::{MathError, MathResult, VectorExt};

/// Determinants with a smaller magnitude are treated as singular.
pub const SINGULAR_EPSILON: f32 = 1e-12;

/// Minor/cofactor/adjugate chain for square matrices.
pub trait Cofactor: Sized {
    /// Determinant of the sub-matrix left after striking `row` and `col`.
    fn minor_determinant(&self, row: usize, col: usize) -> f32;

    /// Signed minor: `(-1)^(row + col) * minor_determinant(row, col)`.
    fn cofactor(&self, row: usize, col: usize) -> f32 {
        let minor = self.minor_determinant(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Matrix of all cofactors.
    fn cofactor_matrix(&self) -> Self;

    /// Transpose of the cofactor matrix (the classical adjoint).
    fn adjugate(&self) -> Self;

    /// Inverse as `adjugate / determinant`.
    ///
    /// Returns [`MathError::Singular`] when the determinant is zero (within
    /// [`SINGULAR_EPSILON`]) or not finite.
    fn try_inverse(&self) -> MathResult<Self>;
}

/// Copy `source` into an `M x M` column array, skipping `row` and `col`.
fn strike<const M: usize>(
    source: impl Fn(usize, usize) -> f32,
    row: usize,
    col: usize,
) -> [[f32; M]; M] {
    let mut cols = [[0.0; M]; M];
    for (dst_c, src_c) in (0..=M).filter(|&c| c != col).enumerate() {
        for (dst_r, src_r) in (0..=M).filter(|&r| r != row).enumerate() {
            cols[dst_c][dst_r] = source(src_r, src_c);
        }
    }
    cols
}

fn mat2_minor(m: &Mat2, row: usize, col: usize) -> f32 {
    m.col(1 - col)[1 - row]
}

fn mat3_minor(m: &Mat3, row: usize, col: usize) -> f32 {
    Mat2::from_cols_array_2d(&strike::<2>(|r, c| m.col(c)[r], row, col)).determinant()
}

fn mat4_minor(m: &Mat4, row: usize, col: usize) -> f32 {
    Mat3::from_cols_array_2d(&strike::<3>(|r, c| m.col(c)[r], row, col)).determinant()
}

macro_rules! impl_cofactor {
    ($mat:ty, $n:expr, $minor:ident) => {
        impl Cofactor for $mat {
            fn minor_determinant(&self, row: usize, col: usize) -> f32 {
                $minor(self, row, col)
            }

            fn cofactor_matrix(&self) -> Self {
                let mut cols = [[0.0; $n]; $n];
                for (c, column) in cols.iter_mut().enumerate() {
                    for (r, value) in column.iter_mut().enumerate() {
                        *value = self.cofactor(r, c);
                    }
                }
                <$mat>::from_cols_array_2d(&cols)
            }

            fn adjugate(&self) -> Self {
                self.cofactor_matrix().transpose()
            }

            fn try_inverse(&self) -> MathResult<Self> {
                let determinant = self.determinant();
                if !determinant.is_finite() || determinant.abs() < SINGULAR_EPSILON {
                    return Err(MathError::Singular { determinant });
                }
                Ok(self.adjugate() * (1.0 / determinant))
            }
        }
    };
}

impl_cofactor!(Mat2, 2, mat2_minor);
impl_cofactor!(Mat3, 3, mat3_minor);
impl_cofactor!(Mat4, 4, mat4_minor);

/// Build a Mat4 from rows written in mathematical order.
fn mat4_from_rows(rows: [[f32; 4]; 4]) -> Mat4 {
    Mat4::from_cols_array_2d(&rows).transpose()
}

/// World-to-camera (view) matrix for a camera at `eye` looking at `target`.
///
/// The camera looks down its local -Z axis with +Y up.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> MathResult<Mat4> {
    let forward = (target - eye).normalize_checked()?;
    let right = forward
        .cross(up)
        .normalize_checked()
        .map_err(|_| MathError::ParallelUp)?;
    let true_up = right.cross(forward);
    let back = -forward;

    Ok(mat4_from_rows([
        [right.x, right.y, right.z, -right.dot(eye)],
        [true_up.x, true_up.y, true_up.z, -true_up.dot(eye)],
        [back.x, back.y, back.z, -back.dot(eye)],
        [0.0, 0.0, 0.0, 1.0],
    ]))
}

/// OpenGL-style perspective projection (clip depth in [-1, 1]).
///
/// `fov_y` is the vertical field of view in degrees.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> MathResult<Mat4> {
    let reason = if !(fov_y > 0.0 && fov_y < 180.0) {
        Some("field of view must be within (0, 180) degrees")
    } else if aspect == 0.0 || !aspect.is_finite() {
        Some("aspect ratio is zero")
    } else if near == far {
        Some("near and far are equal")
    } else {
        None
    };
    if let Some(reason) = reason {
        log::warn!("perspective(): {reason}");
        return Err(MathError::DegenerateFrustum(reason));
    }

    let f = 1.0 / (fov_y.to_radians() / 2.0).tan();
    let d = far - near;

    Ok(mat4_from_rows([
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, -(near + far) / d, -2.0 * near * far / d],
        [0.0, 0.0, -1.0, 0.0],
    ]))
}

/// Orthographic projection mapping the box to [-1, 1] on every axis.
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> MathResult<Mat4> {
    let reason = if left == right {
        Some("left and right are equal")
    } else if bottom == top {
        Some("bottom and top are equal")
    } else if near == far {
        Some("near and far are equal")
    } else {
        None
    };
    if let Some(reason) = reason {
        log::warn!("ortho(): {reason}");
        return Err(MathError::DegenerateFrustum(reason));
    }

    let w = right - left;
    let h = top - bottom;
    let d = far - near;

    Ok(mat4_from_rows([
        [2.0 / w, 0.0, 0.0, -(left + right) / w],
        [0.0, 2.0 / h, 0.0, -(top + bottom) / h],
        [0.0, 0.0, -2.0 / d, -(near + far) / d],
        [0.0, 0.0, 0.0, 1.0],
    ]))
}
