//! Parse a stored line and square it.

use crate::error::AppError;
use serde_json::Number;

/// Parse stored text as a JSON number. Anything else means the file was
/// written by something other than this service.
pub fn parse_stored(raw: &str) -> Result<Number, AppError> {
    serde_json::from_str::<Number>(raw.trim()).map_err(|_| AppError::CorruptValue(raw.to_string()))
}

/// Integers square exactly while the result fits in `u64`; floats (and
/// overflowing integers) square as `f64`.
pub fn square(n: &Number) -> Result<Number, AppError> {
    let magnitude = n.as_u64().or_else(|| n.as_i64().map(i64::unsigned_abs));
    if let Some(m) = magnitude {
        if let Some(sq) = m.checked_mul(m) {
            return Ok(Number::from(sq));
        }
    }
    let f = n
        .as_f64()
        .ok_or_else(|| AppError::OutOfRange(n.to_string()))?;
    Number::from_f64(f * f).ok_or_else(|| AppError::OutOfRange(n.to_string()))
}
