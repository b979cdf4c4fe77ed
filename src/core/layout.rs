use serde::{Deserialize, Serialize};

use crate::core::geometry::FULL_CIRCLE_DEG;
use crate::core::types::DataPoint;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_STAGGER_MS: f64 = 100.0;

/// Angular span assigned to one input data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub source_index: usize,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    pub reveal_delay_ms: f64,
}

impl Segment {
    #[must_use]
    pub fn sweep_deg(self) -> f64 {
        self.end_angle_deg - self.start_angle_deg
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.sweep_deg() <= 0.0
    }
}

/// Sum of all values after validation.
pub fn layout_total(points: &[DataPoint]) -> ChartResult<f64> {
    let mut total = 0.0;
    for point in points {
        point.validate()?;
        total += point.value;
    }
    if !total.is_finite() {
        return Err(ChartError::InvalidInput(
            "sum of data point values overflows".to_owned(),
        ));
    }
    Ok(total)
}

/// Splits the full circle between `points` proportionally to their values.
///
/// Segments keep input order. Angles accumulate without wrapping. When the
/// total is zero every segment collapses to `[0, 0]`.
pub fn layout(points: &[DataPoint], stagger_ms: f64) -> ChartResult<Vec<Segment>> {
    if !stagger_ms.is_finite() || stagger_ms < 0.0 {
        return Err(ChartError::InvalidInput(
            "reveal stagger must be finite and >= 0".to_owned(),
        ));
    }

    let total = layout_total(points)?;
    let mut cumulative = 0.0;
    let segments = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let span = if total > 0.0 {
                point.value / total * FULL_CIRCLE_DEG
            } else {
                0.0
            };
            let start_angle_deg = cumulative;
            cumulative += span;
            Segment {
                source_index: index,
                start_angle_deg,
                end_angle_deg: cumulative,
                reveal_delay_ms: index as f64 * stagger_ms,
            }
        })
        .collect();

    Ok(segments)
}
