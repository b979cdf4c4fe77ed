use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidInput(format!("{field_name} cannot be represented as f64"))
    })
}

/// Finest coordinate precision paths are serialized with.
pub const MAX_COORDINATE_DECIMALS: u32 = 9;

/// Rounds a coordinate to `decimals` places for path serialization.
///
/// `decimals` is capped at [`MAX_COORDINATE_DECIMALS`]. Negative zero is
/// folded into `0` so serialized paths stay stable.
#[must_use]
pub fn round_coordinate(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_COORDINATE_DECIMALS) as i32);
    (value * factor).round() / factor + 0.0
}

/// Folds an angle into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle_deg: f64) -> f64 {
    let wrapped = angle_deg.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
