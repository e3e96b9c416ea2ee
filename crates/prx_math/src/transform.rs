// Point and direction transforms for Mat4
//
// glam matrices use the column-vector convention: translation lives in the
// last column and points are transformed as `M * p`.

use glam::{Mat4, Vec3, Vec4};

/// Extension trait for Mat4 to transform points and directions.
pub trait Mat4Ext {
    /// Transform a point (implicit w=1), including translation.
    ///
    /// The result is divided by the homogeneous `w` when `w` is neither 0
    /// nor 1, so projection matrices produce normalized coordinates.
    fn mult_vec_matrix(&self, point: Vec3) -> Vec3;

    /// Transform a direction (implicit w=0): rotation and scale only.
    fn mult_dir_matrix(&self, direction: Vec3) -> Vec3;
}

impl Mat4Ext for Mat4 {
    fn mult_vec_matrix(&self, point: Vec3) -> Vec3 {
        let transformed = *self * point.extend(1.0);
        let w = transformed.w;
        if w != 0.0 && w != 1.0 {
            transformed.truncate() / w
        } else {
            transformed.truncate()
        }
    }

    fn mult_dir_matrix(&self, direction: Vec3) -> Vec3 {
        let v4 = Vec4::new(direction.x, direction.y, direction.z, 0.0);
        (*self * v4).truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_mult_vec_matrix_translation() {
        let mat = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0));
        let point = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(mat.mult_vec_matrix(point), Vec3::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn test_mult_dir_matrix_ignores_translation() {
        let mat = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0));
        let direction = Vec3::new(1.0, 0.0, 0.0);

        assert_eq!(mat.mult_dir_matrix(direction), direction);
    }

    #[test]
    fn test_mult_dir_matrix_rotation() {
        // 90 degree rotation around Z axis
        let mat = Mat4::from_rotation_z(PI / 2.0);
        let transformed = mat.mult_dir_matrix(Vec3::X);

        assert!((transformed - Vec3::Y).length() < 0.001);
    }

    #[test]
    fn test_mult_vec_matrix_divides_by_w() {
        // Bottom row (0, 0, 0, 2) gives w = 2 for every point
        let mut mat = Mat4::IDENTITY;
        mat.w_axis.w = 2.0;
        let result = mat.mult_vec_matrix(Vec3::new(2.0, 4.0, 6.0));

        assert_eq!(result, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mult_vec_matrix_skips_zero_w() {
        let mut mat = Mat4::IDENTITY;
        mat.w_axis.w = 0.0;
        let result = mat.mult_vec_matrix(Vec3::new(2.0, 4.0, 6.0));

        assert!(result.is_finite());
        assert_eq!(result, Vec3::new(2.0, 4.0, 6.0));
    }
}
