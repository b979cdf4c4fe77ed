use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Pixel-space point. `y` grows downwards, matching 2D canvas conventions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One weighted input value of the chart.
///
/// `color` is an opaque token handed back to the renderer untouched.
/// `key` is an optional stable identity used to keep animation state across
/// in-place dataset updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub value: f64,
    pub color: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl DataPoint {
    #[must_use]
    pub fn new(value: f64, color: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value,
            color: color.into(),
            label: label.into(),
            key: None,
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn from_decimal(
        value: Decimal,
        color: impl Into<String>,
        label: impl Into<String>,
    ) -> ChartResult<Self> {
        Ok(Self::new(decimal_to_f64(value, "value")?, color, label))
    }

    /// Builds data points from parallel value/color/label columns.
    ///
    /// All columns must have the same length.
    pub fn zip_columns<C, L>(values: &[f64], colors: &[C], labels: &[L]) -> ChartResult<Vec<Self>>
    where
        C: AsRef<str>,
        L: AsRef<str>,
    {
        if colors.len() != values.len() || labels.len() != values.len() {
            return Err(ChartError::InvalidInput(format!(
                "column length mismatch: values={}, colors={}, labels={}",
                values.len(),
                colors.len(),
                labels.len()
            )));
        }

        Ok(values
            .iter()
            .zip(colors)
            .zip(labels)
            .map(|((value, color), label)| Self::new(*value, color.as_ref(), label.as_ref()))
            .collect())
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.value.is_finite() {
            return Err(ChartError::InvalidInput(format!(
                "value for `{}` must be finite",
                self.label
            )));
        }
        if self.value < 0.0 {
            return Err(ChartError::InvalidInput(format!(
                "value for `{}` must be >= 0, got {}",
                self.label, self.value
            )));
        }
        Ok(())
    }
}
