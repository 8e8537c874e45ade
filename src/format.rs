use crate::constants::DEFAULT_PRECISION;
use thiserror::Error;

/// Fixed-point rendering with exactly `decimal_places` digits after the point.
///
/// Rounding is done on the exact binary value, and exact ties go to the even
/// digit (`0.0078125` at 6 places is `0.007812`, `2.5` at 0 places is `2`).
/// Negative values that round to zero keep their sign; a negative zero does
/// not.
pub fn format_fixed(value: f64, decimal_places: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimal_places$}")
}

/// Shortest round-trip rendering, switching to exponent notation below
/// `1e-6` and from `1e21` on (`1e-7`, `1.5e+21`). Zero of either sign is `0`.
pub fn format_shortest(value: f64) -> String {
    if value == 0.0 {
        return String::from("0");
    }
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrecisionError {
    #[error("unsupported precision {0}, expected one of 6, 8, 10, 12 or 14")]
    Unsupported(usize),
    #[error("precision is not an integer")]
    NotAnInteger,
}

/// Decimal place counts offered for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    Six,
    Eight,
    Ten,
    Twelve,
    Fourteen,
}

impl Precision {
    pub const ALL: [Precision; 5] = [
        Precision::Six,
        Precision::Eight,
        Precision::Ten,
        Precision::Twelve,
        Precision::Fourteen,
    ];

    pub fn decimal_places(self) -> usize {
        match self {
            Precision::Six => 6,
            Precision::Eight => 8,
            Precision::Ten => 10,
            Precision::Twelve => 12,
            Precision::Fourteen => 14,
        }
    }

    pub fn format(self, value: f64) -> String {
        format_fixed(value, self.decimal_places())
    }
}

impl Default for Precision {
    fn default() -> Self {
        DEFAULT_PRECISION
    }
}

impl TryFrom<usize> for Precision {
    type Error = PrecisionError;
    fn try_from(decimal_places: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|precision| precision.decimal_places() == decimal_places)
            .ok_or(PrecisionError::Unsupported(decimal_places))
    }
}

impl std::str::FromStr for Precision {
    type Err = PrecisionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal_places = s
            .trim()
            .parse::<usize>()
            .map_err(|_| PrecisionError::NotAnInteger)?;
        Self::try_from(decimal_places)
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.decimal_places())
    }
}
