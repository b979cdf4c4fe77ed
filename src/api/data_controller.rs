use tracing::debug;

use crate::core::{DataPoint, Segment, layout, layout_total};
use crate::error::ChartResult;
use crate::render::{Renderer, SegmentPrimitive};

use super::segment_state::{SegmentAnimations, validate_unique_keys};
use super::{DonutChart, PluginEvent};

impl<R: Renderer> DonutChart<R> {
    /// Replaces the dataset.
    ///
    /// Every segment restarts from `Pending` with fresh delays and in-flight
    /// reveals of the previous dataset are abandoned. Passing data equal to
    /// the current dataset is a no-op.
    pub fn set_data(&mut self, points: Vec<DataPoint>) -> ChartResult<()> {
        if self.generation > 0 && points == self.points {
            debug!(
                segments_len = points.len(),
                "dataset unchanged, keeping reveal state"
            );
            return Ok(());
        }

        validate_unique_keys(&points)?;
        let total = layout_total(&points)?;
        let segments = layout(&points, self.config.stagger_ms)?;
        let animations = SegmentAnimations::fresh(
            &points,
            &segments,
            self.config.duration_ms,
            self.config.easing,
        )?;

        self.generation += 1;
        self.install_dataset(points, segments, total, animations);
        self.reveal_reported = false;
        debug!(
            segments_len = self.segments.len(),
            total,
            generation = self.generation,
            "set chart data"
        );
        self.emit_plugin_event(PluginEvent::DataUpdated {
            segments_len: self.segments.len(),
        });
        Ok(())
    }

    /// Updates values of the current dataset in place.
    ///
    /// Animation state is matched by point key (or index for unkeyed points):
    /// surviving segments keep their progress and move straight to their new
    /// angles, new segments start `Pending`, removed ones are dropped.
    pub fn update_data(&mut self, points: Vec<DataPoint>) -> ChartResult<()> {
        if self.generation == 0 {
            return self.set_data(points);
        }

        validate_unique_keys(&points)?;
        let total = layout_total(&points)?;
        let segments = layout(&points, self.config.stagger_ms)?;
        let mut animations = self.animations.clone();
        let created = animations.reconcile(
            &points,
            &segments,
            self.config.duration_ms,
            self.config.easing,
        )?;

        self.install_dataset(points, segments, total, animations);
        if created > 0 {
            self.reveal_reported = false;
        }
        debug!(
            segments_len = self.segments.len(),
            created,
            total,
            generation = self.generation,
            "update chart data"
        );
        self.emit_plugin_event(PluginEvent::DataUpdated {
            segments_len: self.segments.len(),
        });
        Ok(())
    }

    /// Unmounts the current dataset.
    pub fn clear_data(&mut self) -> ChartResult<()> {
        self.set_data(Vec::new())
    }

    fn install_dataset(
        &mut self,
        points: Vec<DataPoint>,
        segments: Vec<Segment>,
        total: f64,
        animations: SegmentAnimations,
    ) {
        self.primitives = points
            .iter()
            .enumerate()
            .map(|(index, point)| SegmentPrimitive::new(index, "", point.color.clone(), false))
            .collect();
        self.points = points;
        self.segments = segments;
        self.total = total;
        self.animations = animations;
        self.interaction.reset_segments();
        self.mark_all_dirty();
    }
}
