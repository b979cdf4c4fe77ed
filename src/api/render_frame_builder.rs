use tracing::trace;

use crate::core::ArcPath;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, SegmentPrimitive};

use super::{DonutChart, PluginEvent};

impl<R: Renderer> DonutChart<R> {
    /// Current visible path of segment `index`.
    pub fn segment_path(&self, index: usize) -> ChartResult<ArcPath> {
        let segment = self.segments.get(index).ok_or_else(|| {
            ChartError::InvalidInput(format!(
                "segment index {index} out of range for {} segments",
                self.segments.len()
            ))
        })?;
        let end_angle_deg = self
            .visible_end_angle(index)
            .unwrap_or(segment.start_angle_deg);
        self.geometry.path(segment.start_angle_deg, end_angle_deg)
    }

    /// Current draw command of segment `index`.
    pub fn segment_primitive(&self, index: usize) -> ChartResult<SegmentPrimitive> {
        let path = self.segment_path(index)?;
        let fill = self
            .points
            .get(index)
            .map(|point| point.color.clone())
            .unwrap_or_default();
        Ok(SegmentPrimitive::new(
            index,
            path.to_svg_path_data(self.config.coordinate_decimals),
            fill,
            !path.is_degenerate(),
        ))
    }

    /// Builds the next frame, recomputing geometry only for segments that
    /// changed since the previous frame.
    ///
    /// On error nothing is committed and every dirty segment stays dirty.
    pub fn build_render_frame(&mut self) -> ChartResult<RenderFrame> {
        let updated = self
            .dirty
            .iter()
            .map(|index| self.segment_primitive(*index))
            .collect::<ChartResult<Vec<_>>>()?;

        let dirty = std::mem::take(&mut self.dirty);
        for primitive in updated {
            if let Some(slot) = self.primitives.get_mut(primitive.index) {
                *slot = primitive;
            }
        }
        trace!(dirty = dirty.len(), "built render frame");

        let mut frame = RenderFrame::new(self.config.size).with_dirty_segments(dirty);
        frame.segments.clone_from(&self.primitives);
        Ok(frame)
    }

    /// Builds a frame and hands it to the renderer. When the renderer fails,
    /// the frame's dirty segments are queued again for the next attempt.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        if let Err(err) = self.renderer.render(&frame) {
            for index in frame.dirty_segments.iter().copied() {
                self.mark_dirty(index);
            }
            return Err(err);
        }
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{DonutChart, DonutChartConfig};
    use crate::core::DataPoint;
    use crate::render::NullRenderer;

    #[test]
    fn failed_frame_build_keeps_every_segment_dirty() {
        let config = DonutChartConfig::new(200.0);
        let mut chart = DonutChart::new(NullRenderer::default(), config).expect("chart init");
        chart
            .set_data(vec![
                DataPoint::new(1.0, "#000", "a"),
                DataPoint::new(1.0, "#fff", "b"),
            ])
            .expect("set data");
        chart.tick(0.0).expect("tick");
        chart.tick(5_000.0).expect("tick");

        let end_angle_deg = chart.segments[1].end_angle_deg;
        chart.segments[1].end_angle_deg = f64::NAN;
        assert!(chart.render().is_err());
        assert_eq!(chart.pending_redraws(), &[0, 1]);
        assert!(chart.primitives.iter().all(|p| p.path_data.is_empty()));

        chart.segments[1].end_angle_deg = end_angle_deg;
        chart.render().expect("render after recovery");
        assert!(chart.pending_redraws().is_empty());
        assert_eq!(chart.renderer().last_dirty_count, 2);
        assert_eq!(chart.renderer().last_visible_count, 2);
    }
}
