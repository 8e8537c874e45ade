use crate::format::Precision;

pub const MATRIX_PREFIX: &str = "9:";
pub const MATRIX_ENTRY_COUNT: usize = 12;
pub const DEFAULT_PRECISION: Precision = Precision::Ten;
pub const FALLBACK_ANALYSIS: &str = "Could not perform AI analysis at this time.";
pub const INVALID_MATRIX_MESSAGE: &str =
    "Invalid matrix format. Expected 12 space-separated numbers.";
pub const SAMPLE_MATRIX: &str = "9: 1.00000000 0.00000000 0.00000000 0.00000000 \
    0.00000000 0.99975536 -0.02211853 35.79052608 \
    0.00000000 0.02211853 0.99975536 302.07035776";
