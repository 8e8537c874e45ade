use crate::constants::MATRIX_ENTRY_COUNT;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Row-major 3×4 rigid transform: a rotation block followed by a translation
/// column.
///
/// The rotation block is expected to be orthonormal with determinant +1, but
/// nothing here checks it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationTranslationMatrix {
    pub r11: f64,
    pub r12: f64,
    pub r13: f64,
    pub tx: f64,
    pub r21: f64,
    pub r22: f64,
    pub r23: f64,
    pub ty: f64,
    pub r31: f64,
    pub r32: f64,
    pub r33: f64,
    pub tz: f64,
}

impl RotationTranslationMatrix {
    pub fn from_row_major(entries: [f64; MATRIX_ENTRY_COUNT]) -> Self {
        let [r11, r12, r13, tx, r21, r22, r23, ty, r31, r32, r33, tz] = entries;
        Self {
            r11,
            r12,
            r13,
            tx,
            r21,
            r22,
            r23,
            ty,
            r31,
            r32,
            r33,
            tz,
        }
    }

    pub fn identity() -> Self {
        Self::from_row_major([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0,
        ])
    }

    pub fn to_row_major(&self) -> [f64; MATRIX_ENTRY_COUNT] {
        [
            self.r11, self.r12, self.r13, self.tx, //
            self.r21, self.r22, self.r23, self.ty, //
            self.r31, self.r32, self.r33, self.tz,
        ]
    }

    pub fn rotation(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.r11, self.r12, self.r13, //
            self.r21, self.r22, self.r23, //
            self.r31, self.r32, self.r33,
        )
    }

    pub fn translation(&self) -> Vector3<f64> {
        Vector3::new(self.tx, self.ty, self.tz)
    }
}

impl std::fmt::Display for RotationTranslationMatrix {
    /// Space separated, shortest representation that parses back to the same
    /// bits.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, entry) in self.to_row_major().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{entry:?}")?;
        }
        Ok(())
    }
}
