use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Draw command for one chart segment.
///
/// `path_data` uses SVG path syntax; `fill` is the caller's color token,
/// passed through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentPrimitive {
    pub index: usize,
    pub path_data: String,
    pub fill: String,
    /// `false` when the visible geometry has no area (pending or zero-value).
    pub visible: bool,
}

impl SegmentPrimitive {
    #[must_use]
    pub fn new(
        index: usize,
        path_data: impl Into<String>,
        fill: impl Into<String>,
        visible: bool,
    ) -> Self {
        Self {
            index,
            path_data: path_data.into(),
            fill: fill.into(),
            visible,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.path_data.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "segment {} has empty path data",
                self.index
            )));
        }
        if !self.path_data.starts_with('M') {
            return Err(ChartError::InvalidData(format!(
                "segment {} path must start with a move command",
                self.index
            )));
        }
        Ok(())
    }
}
