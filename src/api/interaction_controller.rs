use tracing::debug;

use crate::core::Point;
use crate::interaction::HoverChange;
use crate::render::Renderer;

use super::{DonutChart, PluginEvent};

impl<R: Renderer> DonutChart<R> {
    /// Installs the callback invoked with the segment index on press.
    pub fn set_segment_select_handler(&mut self, handler: impl FnMut(usize) + 'static) {
        self.select_handler = Some(Box::new(handler));
    }

    pub fn clear_segment_select_handler(&mut self) {
        self.select_handler = None;
    }

    /// Index of the segment drawn under `(x, y)`, if any.
    ///
    /// Only the currently visible part of each segment is hittable, so a
    /// pending segment cannot be hit.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        let point = Point::new(x, y);
        self.segments.iter().enumerate().find_map(|(index, segment)| {
            let end_angle_deg = self.visible_end_angle(index)?;
            self.geometry
                .contains(point, segment.start_angle_deg, end_angle_deg)
                .then_some(index)
        })
    }

    /// Tracks hover state. Returns the hovered segment after the move.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<usize> {
        let hit = self.hit_test(x, y);
        match self.interaction.on_pointer_move(Point::new(x, y), hit) {
            HoverChange::Entered(index) => {
                self.emit_plugin_event(PluginEvent::SegmentHovered { index });
            }
            HoverChange::Cleared => self.emit_plugin_event(PluginEvent::HoverCleared),
            HoverChange::Unchanged => {}
        }
        hit
    }

    pub fn pointer_leave(&mut self) {
        if self.interaction.on_pointer_leave() == HoverChange::Cleared {
            self.emit_plugin_event(PluginEvent::HoverCleared);
        }
    }

    /// Handles a press at `(x, y)`. When it lands on a segment the select
    /// handler is invoked with that segment's index, which is also returned.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> Option<usize> {
        let index = self.hit_test(x, y)?;
        debug!(index, "segment selected");
        self.interaction.on_select(index);
        if let Some(handler) = self.select_handler.as_mut() {
            handler(index);
        }
        self.emit_plugin_event(PluginEvent::SegmentSelected { index });
        Some(index)
    }
}
