use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::animation::{RevealPhase, SegmentAnimation};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{DonutChart, PluginEvent};

/// Outcome of one [`DonutChart::tick`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Segments whose progress moved during this tick.
    pub updated: SmallVec<[usize; 8]>,
    /// `true` once every segment of the current dataset is settled.
    pub settled: bool,
    /// `true` only on the tick where the chart became fully settled.
    pub reveal_completed: bool,
}

impl<R: Renderer> DonutChart<R> {
    /// Advances every segment's reveal to `now_ms` (host clock, milliseconds).
    ///
    /// The first tick after a dataset is mounted starts its timeline. Only
    /// segments whose progress changed are marked for redraw.
    pub fn tick(&mut self, now_ms: f64) -> ChartResult<TickReport> {
        if !now_ms.is_finite() {
            return Err(ChartError::InvalidInput(
                "frame timestamp must be finite".to_owned(),
            ));
        }

        let mut report = TickReport::default();
        for (index, animation) in self.animations.iter_mut().enumerate() {
            let outcome = animation.advance(now_ms);
            if outcome.progress_changed {
                report.updated.push(index);
            }
            if outcome.phase_changed() {
                trace!(index, phase = ?outcome.phase, "segment phase changed");
            }
        }
        for index in report.updated.iter().copied() {
            self.mark_dirty(index);
        }

        report.settled = self.is_settled();
        if report.settled && !self.reveal_reported && !self.segments.is_empty() {
            self.reveal_reported = true;
            report.reveal_completed = true;
            debug!(
                generation = self.generation,
                segments_len = self.segments.len(),
                "chart reveal completed"
            );
            self.emit_plugin_event(PluginEvent::RevealCompleted {
                generation: self.generation,
            });
        }

        Ok(report)
    }

    /// Aggregate "all segments settled" signal.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.animations.all_settled()
    }

    #[must_use]
    pub fn segment_animation(&self, index: usize) -> Option<&SegmentAnimation> {
        self.animations.get(index)
    }

    #[must_use]
    pub fn segment_progress(&self, index: usize) -> Option<f64> {
        self.animations.get(index).map(SegmentAnimation::progress)
    }

    #[must_use]
    pub fn segment_phase(&self, index: usize) -> Option<RevealPhase> {
        self.animations.get(index).map(SegmentAnimation::phase)
    }

    /// Visible end angle of segment `index` at its current progress.
    #[must_use]
    pub fn visible_end_angle(&self, index: usize) -> Option<f64> {
        let segment = self.segments.get(index)?;
        let animation = self.animations.get(index)?;
        Some(animation.visible_end_angle(*segment))
    }
}
