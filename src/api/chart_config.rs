use serde::{Deserialize, Serialize};

use crate::animation::{DEFAULT_REVEAL_DURATION_MS, Easing};
use crate::core::geometry::DEFAULT_COORDINATE_DECIMALS;
use crate::core::primitives::MAX_COORDINATE_DECIMALS;
use crate::core::layout::DEFAULT_STAGGER_MS;
use crate::core::{ArcGeometry, Point};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_MARGIN_PX: f64 = 10.0;

/// Public chart bootstrap configuration.
///
/// Serializable so hosts can persist/load chart setup without inventing
/// their own format. Missing fields fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutChartConfig {
    /// Width and height of the square drawing area, in pixels.
    pub size: f64,
    /// `0` draws a full pie, anything larger a donut.
    #[serde(default)]
    pub inner_radius_px: f64,
    #[serde(default = "default_margin_px")]
    pub margin_px: f64,
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: f64,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default = "default_coordinate_decimals")]
    pub coordinate_decimals: u32,
}

impl DonutChartConfig {
    /// Creates a full-pie config with default margin and reveal timing.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self {
            size,
            inner_radius_px: 0.0,
            margin_px: default_margin_px(),
            stagger_ms: default_stagger_ms(),
            duration_ms: default_duration_ms(),
            easing: Easing::default(),
            coordinate_decimals: default_coordinate_decimals(),
        }
    }

    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius_px: f64) -> Self {
        self.inner_radius_px = inner_radius_px;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin_px: f64) -> Self {
        self.margin_px = margin_px;
        self
    }

    /// Sets the delay added per segment index before its reveal starts.
    #[must_use]
    pub fn with_stagger_ms(mut self, stagger_ms: f64) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets decimal places used when serializing path coordinates.
    #[must_use]
    pub fn with_coordinate_decimals(mut self, decimals: u32) -> Self {
        self.coordinate_decimals = decimals;
        self
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    #[must_use]
    pub fn outer_radius(self) -> f64 {
        self.size / 2.0 - self.margin_px
    }

    /// Validates the config and derives the shared circle geometry.
    pub fn arc_geometry(self) -> ChartResult<ArcGeometry> {
        self.validate()?;
        ArcGeometry::new(self.center(), self.outer_radius(), self.inner_radius_px)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ChartError::InvalidSize { size: self.size });
        }
        if !self.margin_px.is_finite() || self.margin_px < 0.0 {
            return Err(ChartError::InvalidData(
                "margin must be finite and >= 0".to_owned(),
            ));
        }
        let outer_radius = self.outer_radius();
        if outer_radius <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "margin {} leaves no room for a radius in a {} px chart",
                self.margin_px, self.size
            )));
        }
        if !self.inner_radius_px.is_finite()
            || self.inner_radius_px < 0.0
            || self.inner_radius_px >= outer_radius
        {
            return Err(ChartError::InvalidData(format!(
                "inner radius must be finite and in [0, {outer_radius})"
            )));
        }
        if !self.stagger_ms.is_finite() || self.stagger_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "stagger must be finite and >= 0".to_owned(),
            ));
        }
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "duration must be finite and >= 0".to_owned(),
            ));
        }
        if self.coordinate_decimals > MAX_COORDINATE_DECIMALS {
            return Err(ChartError::InvalidData(format!(
                "coordinate decimals must be <= {MAX_COORDINATE_DECIMALS}"
            )));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_margin_px() -> f64 {
    DEFAULT_MARGIN_PX
}

fn default_stagger_ms() -> f64 {
    DEFAULT_STAGGER_MS
}

fn default_duration_ms() -> f64 {
    DEFAULT_REVEAL_DURATION_MS
}

fn default_coordinate_decimals() -> u32 {
    DEFAULT_COORDINATE_DECIMALS
}
