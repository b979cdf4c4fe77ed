use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};
use crate::render::SegmentPrimitive;

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub size: f64,
    pub segments: Vec<SegmentPrimitive>,
    /// Segments whose geometry changed since the previous frame.
    pub dirty_segments: SmallVec<[usize; 8]>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self {
            size,
            segments: Vec::new(),
            dirty_segments: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_segment(mut self, segment: SegmentPrimitive) -> Self {
        self.segments.push(segment);
        self
    }

    #[must_use]
    pub fn with_dirty_segments(mut self, dirty: impl IntoIterator<Item = usize>) -> Self {
        self.dirty_segments.extend(dirty);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ChartError::InvalidSize { size: self.size });
        }

        for segment in &self.segments {
            segment.validate()?;
        }
        for index in &self.dirty_segments {
            if *index >= self.segments.len() {
                return Err(ChartError::InvalidData(format!(
                    "dirty segment index {index} out of range for {} segments",
                    self.segments.len()
                )));
            }
        }

        Ok(())
    }

    /// Primitives that enclose visible area.
    pub fn visible_segments(&self) -> impl Iterator<Item = &SegmentPrimitive> {
        self.segments.iter().filter(|segment| segment.visible)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible_segments().next().is_none()
    }
}
