use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_segment_count: usize,
    pub last_visible_count: usize,
    pub last_dirty_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_segment_count = frame.segments.len();
        self.last_visible_count = frame.visible_segments().count();
        self.last_dirty_count = frame.dirty_segments.len();
        Ok(())
    }
}
