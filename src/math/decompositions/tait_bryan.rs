use crate::math::basic::atan2_origin_zero;
use nalgebra::{Matrix3, RealField};

/// ZYX Euler angles of a rotation block, `R = Rz(z) * Ry(y) * Rx(x)`.
///
/// Gimbal lock is not detected: as `|y|` approaches a right angle `x` and `z`
/// become coupled and whatever `atan2` yields is returned as is. Only `x` has
/// its `atan2(0, 0)` pinned to `+0`; `y` and `z` keep the signed-zero
/// conventions of `atan2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaitBryanDecomposition<T: RealField + Copy> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: RealField + Copy> TaitBryanDecomposition<T> {
    pub fn decompose(matrix: &Matrix3<T>) -> Self {
        Self {
            x: atan2_origin_zero(matrix[(2, 1)], matrix[(2, 2)]),
            y: (-matrix[(2, 0)])
                .atan2((matrix[(2, 1)] * matrix[(2, 1)] + matrix[(2, 2)] * matrix[(2, 2)]).sqrt()),
            z: matrix[(1, 0)].atan2(matrix[(0, 0)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{abs_diff_eq, assert_abs_diff_eq};
    use nalgebra::{Rotation3, Vector3};
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    fn rotation_zyx(x: f64, y: f64, z: f64) -> Matrix3<f64> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), x);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), y);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), z);
        (rz * ry * rx).into_inner()
    }

    prop_compose! {
        fn angles_away_from_gimbal_lock()(
            x in -3.1..3.1,
            y in (-FRAC_PI_2 + 0.05)..(FRAC_PI_2 - 0.05),
            z in -3.1..3.1,
        ) -> (f64, f64, f64) {
            (x, y, z)
        }
    }

    #[test]
    fn identity_has_zero_angles() {
        let decomposition = TaitBryanDecomposition::decompose(&Matrix3::<f64>::identity());
        assert_eq!(decomposition.x, 0.0);
        assert_eq!(decomposition.y, 0.0);
        assert_eq!(decomposition.z, 0.0);
    }

    #[test]
    fn single_axis_rotations_are_recovered() {
        let decomposition = TaitBryanDecomposition::decompose(&rotation_zyx(0.4, 0.0, 0.0));
        assert_abs_diff_eq!(decomposition.x, 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(decomposition.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(decomposition.z, 0.0, epsilon = 1e-12);

        let decomposition = TaitBryanDecomposition::decompose(&rotation_zyx(0.0, -0.7, 0.0));
        assert_abs_diff_eq!(decomposition.y, -0.7, epsilon = 1e-12);

        let decomposition = TaitBryanDecomposition::decompose(&rotation_zyx(0.0, 0.0, 2.5));
        assert_abs_diff_eq!(decomposition.z, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn gimbal_lock_collapses_x_to_zero() {
        // Pitch of +90°: r31 = -1, r32 = r33 = 0
        let matrix = Matrix3::<f64>::new(0.0, 0.3, 0.9, 0.0, 0.9, -0.3, -1.0, 0.0, -0.0);
        let decomposition = TaitBryanDecomposition::decompose(&matrix);
        assert_eq!(decomposition.x.to_bits(), 0.0_f64.to_bits());
        assert_abs_diff_eq!(decomposition.y, FRAC_PI_2);
    }

    #[test]
    fn z_keeps_signed_zero_atan2() {
        let matrix = Matrix3::<f64>::new(-0.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0);
        let decomposition = TaitBryanDecomposition::decompose(&matrix);
        assert_eq!(decomposition.z, std::f64::consts::PI);

        let matrix = Matrix3::<f64>::new(-0.0, 0.0, 1.0, -0.0, 1.0, 0.0, -1.0, 0.0, 0.0);
        let decomposition = TaitBryanDecomposition::decompose(&matrix);
        assert_eq!(decomposition.z, -std::f64::consts::PI);
    }

    #[test]
    fn non_orthogonal_input_still_decomposes() {
        let matrix = Matrix3::<f64>::new(2.0, 5.0, 1.0, -3.0, 0.5, 7.0, 4.0, -1.0, 0.0);
        let decomposition = TaitBryanDecomposition::decompose(&matrix);
        assert!(decomposition.x.is_finite());
        assert!(decomposition.y.is_finite());
        assert!(decomposition.z.is_finite());
    }

    proptest! {
        #[test]
        fn angles_rebuild_the_rotation((x, y, z) in angles_away_from_gimbal_lock()) {
            let matrix = rotation_zyx(x, y, z);
            let decomposition = TaitBryanDecomposition::decompose(&matrix);
            let rebuilt = rotation_zyx(decomposition.x, decomposition.y, decomposition.z);
            prop_assert!(abs_diff_eq!(rebuilt, matrix, epsilon = 1e-9));
        }
    }
}
