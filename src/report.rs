use crate::{decomposer::DecompositionResult, format::Precision};
use itertools::Itertools;

/// Human readable rendering of a decomposition at a fixed precision.
pub struct Report<'a> {
    result: &'a DecompositionResult,
    precision: Precision,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a DecompositionResult, precision: Precision) -> Self {
        Self { result, precision }
    }

    fn row(&self, values: &[f64]) -> String {
        values
            .iter()
            .map(|&value| self.precision.format(value))
            .join("  ")
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let degrees = self.result.euler_degrees;
        let radians = self.result.euler_radians;
        let translation = self.result.translation;
        let m = &self.result.matrix;

        writeln!(f, "Euler angles (ZYX, degrees)")?;
        writeln!(f, "  roll   {}°", self.precision.format(degrees.roll))?;
        writeln!(f, "  pitch  {}°", self.precision.format(degrees.pitch))?;
        writeln!(f, "  yaw    {}°", self.precision.format(degrees.yaw))?;

        writeln!(f, "Euler angles (ZYX, radians)")?;
        writeln!(f, "  roll   {}", self.precision.format(radians.roll))?;
        writeln!(f, "  pitch  {}", self.precision.format(radians.pitch))?;
        writeln!(f, "  yaw    {}", self.precision.format(radians.yaw))?;

        writeln!(f, "Translation")?;
        writeln!(f, "  x  {}", self.precision.format(translation.x))?;
        writeln!(f, "  y  {}", self.precision.format(translation.y))?;
        writeln!(f, "  z  {}", self.precision.format(translation.z))?;

        writeln!(f, "Rotation")?;
        writeln!(f, "  {}", self.row(&[m.r11, m.r12, m.r13]))?;
        writeln!(f, "  {}", self.row(&[m.r21, m.r22, m.r23]))?;
        write!(f, "  {}", self.row(&[m.r31, m.r32, m.r33]))
    }
}

pub fn to_json(result: &DecompositionResult) -> serde_json::Value {
    serde_json::json!({
        "matrix": result.matrix,
        "eulerRadians": result.euler_radians,
        "eulerDegrees": result.euler_degrees,
        "translation": result.translation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decomposer::decompose, parser::parse_matrix};

    fn sample_result() -> DecompositionResult {
        decompose(&parse_matrix(crate::constants::SAMPLE_MATRIX).unwrap())
    }

    #[test]
    fn report_lists_every_section() {
        let result = sample_result();
        let text = Report::new(&result, Precision::Six).to_string();

        assert!(text.contains("  roll   1.267402°"));
        assert!(text.contains("  pitch  0.000000°"));
        assert!(text.contains("  roll   0.022120\n"));
        assert!(text.contains("  y  35.790526"));
        assert!(text.contains("  z  302.070358"));
        assert!(text.contains("  0.000000  0.999755  -0.022119"));
        assert_eq!(text.lines().count(), 16);
    }

    #[test]
    fn report_follows_precision() {
        let result = sample_result();
        let text = Report::new(&result, Precision::Fourteen).to_string();
        assert!(text.contains("  z  302.07035775999998"));
    }

    #[test]
    fn json_matches_serde_shape() {
        let result = sample_result();
        assert_eq!(to_json(&result), serde_json::to_value(result).unwrap());
    }
}
