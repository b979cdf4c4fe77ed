use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::animation::Easing;
use crate::core::Segment;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_REVEAL_DURATION_MS: f64 = 800.0;

/// Lifecycle of one segment reveal. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RevealPhase {
    Pending,
    Animating,
    Settled,
}

/// Delay, duration and curve of one segment reveal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealTiming {
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl RevealTiming {
    pub fn new(delay_ms: f64, duration_ms: f64, easing: Easing) -> ChartResult<Self> {
        if !delay_ms.is_finite() || delay_ms < 0.0 {
            return Err(ChartError::InvalidInput(
                "reveal delay must be finite and >= 0".to_owned(),
            ));
        }
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return Err(ChartError::InvalidInput(
                "reveal duration must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self {
            delay_ms,
            duration_ms,
            easing,
        })
    }

    /// Phase and eased progress after `elapsed_ms` since the reveal started.
    #[must_use]
    pub fn sample(self, elapsed_ms: f64) -> (RevealPhase, f64) {
        if elapsed_ms < self.delay_ms {
            return (RevealPhase::Pending, 0.0);
        }
        let active_ms = elapsed_ms - self.delay_ms;
        if self.duration_ms <= 0.0 || active_ms >= self.duration_ms {
            return (RevealPhase::Settled, 1.0);
        }
        (
            RevealPhase::Animating,
            self.easing.apply(active_ms / self.duration_ms),
        )
    }
}

/// Result of one [`SegmentAnimation::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceOutcome {
    pub progress_changed: bool,
    pub previous_phase: RevealPhase,
    pub phase: RevealPhase,
}

impl AdvanceOutcome {
    #[must_use]
    pub fn phase_changed(self) -> bool {
        self.previous_phase != self.phase
    }
}

/// Time-driven reveal state of one segment.
///
/// The timeline starts at the first `advance` call. Progress is derived from
/// elapsed wall-clock time, so skipped frames never desynchronize it, and it
/// never decreases even if the host clock steps backwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentAnimation {
    timing: RevealTiming,
    started_at_ms: Option<f64>,
    progress: f64,
    phase: RevealPhase,
}

impl SegmentAnimation {
    #[must_use]
    pub fn new(timing: RevealTiming) -> Self {
        Self {
            timing,
            started_at_ms: None,
            progress: 0.0,
            phase: RevealPhase::Pending,
        }
    }

    /// Animation for `segment` using its layout delay.
    pub fn for_segment(segment: Segment, duration_ms: f64, easing: Easing) -> ChartResult<Self> {
        Ok(Self::new(RevealTiming::new(
            segment.reveal_delay_ms,
            duration_ms,
            easing,
        )?))
    }

    #[must_use]
    pub fn timing(&self) -> RevealTiming {
        self.timing
    }

    #[must_use]
    pub fn started_at_ms(&self) -> Option<f64> {
        self.started_at_ms
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.phase == RevealPhase::Settled
    }

    /// Moves the timeline to `now_ms`.
    ///
    /// Settled animations and non-finite timestamps are left untouched.
    pub fn advance(&mut self, now_ms: f64) -> AdvanceOutcome {
        let previous_phase = self.phase;
        if self.is_settled() || !now_ms.is_finite() {
            return AdvanceOutcome {
                progress_changed: false,
                previous_phase,
                phase: previous_phase,
            };
        }

        let started_at_ms = *self.started_at_ms.get_or_insert(now_ms);
        let elapsed_ms = (now_ms - started_at_ms).max(0.0);
        let (sampled_phase, sampled_progress) = self.timing.sample(elapsed_ms);

        let progress = sampled_progress.max(self.progress);
        let phase = if progress >= 1.0 {
            RevealPhase::Settled
        } else {
            sampled_phase.max(self.phase)
        };

        let progress_changed = progress != self.progress;
        self.progress = progress;
        self.phase = phase;

        if phase != previous_phase {
            trace!(
                from = ?previous_phase,
                to = ?phase,
                elapsed_ms,
                "segment reveal phase transition"
            );
        }

        AdvanceOutcome {
            progress_changed,
            previous_phase,
            phase,
        }
    }

    /// Visible end angle of `segment` at the current progress.
    #[must_use]
    pub fn visible_end_angle(&self, segment: Segment) -> f64 {
        visible_end_angle(segment, self.progress)
    }
}

#[must_use]
pub fn visible_end_angle(segment: Segment, progress: f64) -> f64 {
    segment.start_angle_deg + segment.sweep_deg() * progress.clamp(0.0, 1.0)
}
