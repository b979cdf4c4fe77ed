//! donut-rs: donut/pie chart geometry and reveal-animation engine.
//!
//! Values are laid out as cumulative angular spans, each span is revealed by
//! a time-driven eased animation, and every frame turns the visible spans
//! into SVG path data ready for any 2D path renderer.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DonutChart, DonutChartConfig};
pub use error::{ChartError, ChartResult};
