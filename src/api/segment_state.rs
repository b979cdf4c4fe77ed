use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::animation::{Easing, SegmentAnimation};
use crate::core::{DataPoint, Segment};
use crate::error::{ChartError, ChartResult};

/// Stable identity of a segment's animation state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKey {
    Key(String),
    Index(usize),
}

impl SegmentKey {
    #[must_use]
    pub fn for_point(index: usize, point: &DataPoint) -> Self {
        match &point.key {
            Some(key) => Self::Key(key.clone()),
            None => Self::Index(index),
        }
    }
}

/// Rejects datasets where two points share an explicit key.
pub(crate) fn validate_unique_keys(points: &[DataPoint]) -> ChartResult<()> {
    let mut seen = HashSet::new();
    for key in points.iter().filter_map(|point| point.key.as_deref()) {
        if !seen.insert(key) {
            return Err(ChartError::InvalidInput(format!(
                "duplicate data point key `{key}`"
            )));
        }
    }
    Ok(())
}

/// Ordered arena of per-segment animation states.
///
/// Entry `i` always belongs to segment `i` of the current layout.
#[derive(Debug, Clone, Default)]
pub(crate) struct SegmentAnimations {
    entries: IndexMap<SegmentKey, SegmentAnimation>,
}

impl SegmentAnimations {
    /// Fresh `Pending` states for every segment.
    pub(crate) fn fresh(
        points: &[DataPoint],
        segments: &[Segment],
        duration_ms: f64,
        easing: Easing,
    ) -> ChartResult<Self> {
        let mut entries = IndexMap::with_capacity(segments.len());
        for (point, segment) in points.iter().zip(segments) {
            entries.insert(
                SegmentKey::for_point(segment.source_index, point),
                SegmentAnimation::for_segment(*segment, duration_ms, easing)?,
            );
        }
        Ok(Self { entries })
    }

    /// Rebuilds the arena for a new layout, keeping states whose key
    /// survives. Returns the number of newly created states.
    pub(crate) fn reconcile(
        &mut self,
        points: &[DataPoint],
        segments: &[Segment],
        duration_ms: f64,
        easing: Easing,
    ) -> ChartResult<usize> {
        let mut previous = std::mem::take(&mut self.entries);
        let mut created = 0;
        for (point, segment) in points.iter().zip(segments) {
            let key = SegmentKey::for_point(segment.source_index, point);
            let animation = match previous.swap_remove(&key) {
                Some(animation) => animation,
                None => {
                    created += 1;
                    SegmentAnimation::for_segment(*segment, duration_ms, easing)?
                }
            };
            self.entries.insert(key, animation);
        }
        Ok(created)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&SegmentAnimation> {
        self.entries.get_index(index).map(|(_, animation)| animation)
    }

    pub(crate) fn key(&self, index: usize) -> Option<&SegmentKey> {
        self.entries.get_index(index).map(|(key, _)| key)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut SegmentAnimation> {
        self.entries.values_mut()
    }

    pub(crate) fn all_settled(&self) -> bool {
        self.entries.values().all(SegmentAnimation::is_settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout;

    fn keyed(value: f64, key: &str) -> DataPoint {
        DataPoint::new(value, "#111", key).with_key(key)
    }

    #[test]
    fn reconcile_keeps_state_for_surviving_keys() {
        let points = vec![keyed(1.0, "a"), keyed(1.0, "b")];
        let segments = layout(&points, 0.0).expect("layout");
        let mut arena = SegmentAnimations::fresh(&points, &segments, 100.0, Easing::Linear)
            .expect("fresh arena");
        for animation in arena.iter_mut() {
            animation.advance(0.0);
            animation.advance(1_000.0);
        }
        assert!(arena.all_settled());

        let updated = vec![keyed(2.0, "b"), keyed(1.0, "c")];
        let segments = layout(&updated, 0.0).expect("layout");
        let created = arena
            .reconcile(&updated, &segments, 100.0, Easing::Linear)
            .expect("reconcile");

        assert_eq!(created, 1);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.key(0), Some(&SegmentKey::Key("b".to_owned())));
        assert!(arena.get(0).expect("b").is_settled());
        assert!(!arena.get(1).expect("c").is_settled());
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let points = vec![keyed(1.0, "a"), keyed(2.0, "a")];
        assert!(validate_unique_keys(&points).is_err());
    }
}
