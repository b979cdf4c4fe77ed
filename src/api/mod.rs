mod animation_driver;
mod chart;
mod chart_config;
mod chart_snapshot;
mod data_controller;
mod interaction_controller;
mod json_contract;
mod plugin_registry;
mod render_frame_builder;
mod segment_state;

pub use animation_driver::TickReport;
pub use chart::DonutChart;
pub use chart_config::{DEFAULT_MARGIN_PX, DonutChartConfig};
pub use chart_snapshot::{ChartSnapshot, SegmentSnapshot};
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
pub use segment_state::SegmentKey;

pub use crate::extensions::PluginEvent;
