use crate::{
    math::decompositions::tait_bryan::TaitBryanDecomposition,
    primitives::{euler::EulerAngles, matrix::RotationTranslationMatrix, translation::Translation},
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecompositionResult {
    pub matrix: RotationTranslationMatrix,
    pub euler_radians: EulerAngles,
    pub euler_degrees: EulerAngles,
    pub translation: Translation,
}

/// Splits a transform into ZYX Euler angles and its translation.
///
/// Works for any finite matrix, orthonormal or not. Degrees are always
/// derived from the radian values.
pub fn decompose(matrix: &RotationTranslationMatrix) -> DecompositionResult {
    let euler_radians: EulerAngles = TaitBryanDecomposition::decompose(&matrix.rotation()).into();

    DecompositionResult {
        matrix: *matrix,
        euler_radians,
        euler_degrees: euler_radians.to_degrees(),
        translation: matrix.translation().into(),
    }
}
