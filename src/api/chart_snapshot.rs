use serde::{Deserialize, Serialize};

use crate::animation::RevealPhase;
use crate::core::Point;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{DonutChart, SegmentKey};

/// Serializable per-segment state used by regression tests and tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSnapshot {
    pub index: usize,
    pub key: SegmentKey,
    pub label: String,
    pub color: String,
    pub value: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    pub visible_end_angle_deg: f64,
    pub reveal_delay_ms: f64,
    pub progress: f64,
    pub phase: RevealPhase,
    pub path_data: String,
}

/// Serializable deterministic chart state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub size: f64,
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub total: f64,
    pub dataset_generation: u64,
    pub settled: bool,
    pub hovered: Option<usize>,
    pub segments: Vec<SegmentSnapshot>,
}

impl<R: Renderer> DonutChart<R> {
    pub fn snapshot(&self) -> ChartResult<ChartSnapshot> {
        let segments = self
            .segments
            .iter()
            .enumerate()
            .map(|(index, segment)| self.segment_snapshot(index, *segment))
            .collect::<ChartResult<Vec<_>>>()?;

        Ok(ChartSnapshot {
            size: self.config.size,
            center: self.geometry.center,
            outer_radius: self.geometry.outer_radius,
            inner_radius: self.geometry.inner_radius,
            total: self.total,
            dataset_generation: self.generation,
            settled: self.is_settled(),
            hovered: self.interaction.hovered(),
            segments,
        })
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot()?)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    fn segment_snapshot(
        &self,
        index: usize,
        segment: crate::core::Segment,
    ) -> ChartResult<SegmentSnapshot> {
        let missing =
            || ChartError::InvalidData(format!("segment {index} has no matching chart state"));
        let point = self.points.get(index).ok_or_else(missing)?;
        let animation = self.animations.get(index).ok_or_else(missing)?;
        let key = self.animations.key(index).ok_or_else(missing)?.clone();
        let path = self.segment_path(index)?;

        Ok(SegmentSnapshot {
            index,
            key,
            label: point.label.clone(),
            color: point.color.clone(),
            value: point.value,
            start_angle_deg: segment.start_angle_deg,
            end_angle_deg: segment.end_angle_deg,
            visible_end_angle_deg: animation.visible_end_angle(segment),
            reveal_delay_ms: animation.timing().delay_ms,
            progress: animation.progress(),
            phase: animation.phase(),
            path_data: path.to_svg_path_data(self.config.coordinate_decimals),
        })
    }
}
