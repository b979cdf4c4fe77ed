//! Extension points observing the chart without owning its state.

mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
