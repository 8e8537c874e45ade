use nalgebra::RealField;

/// `atan2` with the origin pinned to `+0`, whatever the signs of the zeros.
pub fn atan2_origin_zero<T: RealField + Copy>(y: T, x: T) -> T {
    if y == T::zero() && x == T::zero() {
        T::zero()
    } else {
        y.atan2(x)
    }
}

pub fn radians_to_degrees<T: RealField + Copy>(radians: T) -> T {
    radians * nalgebra::convert::<f64, T>(180.0) / T::pi()
}
