//! Time-driven per-segment reveal animation.

mod controller;
mod easing;

pub use controller::{
    AdvanceOutcome, DEFAULT_REVEAL_DURATION_MS, RevealPhase, RevealTiming, SegmentAnimation,
    visible_end_angle,
};
pub use easing::{Easing, ease_in_out_cubic, ease_in_out_quad, ease_out_cubic};
