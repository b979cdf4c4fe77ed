use serde::{Deserialize, Serialize};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub size: f64,
    pub segments_len: usize,
    pub dataset_generation: u64,
    pub settled: bool,
    pub hovered: Option<usize>,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DataUpdated { segments_len: usize },
    SegmentHovered { index: usize },
    HoverCleared,
    SegmentSelected { index: usize },
    /// Every segment of the current dataset reached its final geometry.
    RevealCompleted { generation: u64 },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read chart context without mutating chart
/// state directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
