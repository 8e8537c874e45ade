use crate::math::{basic::radians_to_degrees, decompositions::tait_bryan::TaitBryanDecomposition};
use serde::{Deserialize, Serialize};

/// Roll, pitch and yaw in a single unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl EulerAngles {
    pub fn to_degrees(self) -> Self {
        Self {
            roll: radians_to_degrees(self.roll),
            pitch: radians_to_degrees(self.pitch),
            yaw: radians_to_degrees(self.yaw),
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.roll, self.pitch, self.yaw]
    }
}

impl From<TaitBryanDecomposition<f64>> for EulerAngles {
    fn from(decomposition: TaitBryanDecomposition<f64>) -> Self {
        Self {
            roll: decomposition.x,
            pitch: decomposition.y,
            yaw: decomposition.z,
        }
    }
}
