use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Pointer state tracked by the chart composer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    cursor: Option<Point>,
    hovered: Option<usize>,
    last_selected: Option<usize>,
}

/// What changed after a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange {
    Unchanged,
    Entered(usize),
    Cleared,
}

impl InteractionState {
    #[must_use]
    pub fn cursor(self) -> Option<Point> {
        self.cursor
    }

    #[must_use]
    pub fn hovered(self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn last_selected(self) -> Option<usize> {
        self.last_selected
    }

    pub fn on_pointer_move(&mut self, point: Point, hit: Option<usize>) -> HoverChange {
        self.cursor = Some(point);
        self.set_hovered(hit)
    }

    pub fn on_pointer_leave(&mut self) -> HoverChange {
        self.cursor = None;
        self.set_hovered(None)
    }

    pub fn on_select(&mut self, index: usize) {
        self.last_selected = Some(index);
    }

    /// Forgets segment indices; used when the dataset is replaced.
    pub fn reset_segments(&mut self) {
        self.hovered = None;
        self.last_selected = None;
    }

    fn set_hovered(&mut self, hit: Option<usize>) -> HoverChange {
        if self.hovered == hit {
            return HoverChange::Unchanged;
        }
        self.hovered = hit;
        match hit {
            Some(index) => HoverChange::Entered(index),
            None => HoverChange::Cleared,
        }
    }
}
