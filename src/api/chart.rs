use smallvec::SmallVec;

use crate::core::{ArcGeometry, DataPoint, Segment};
use crate::error::ChartResult;
use crate::extensions::ChartPlugin;
use crate::interaction::InteractionState;
use crate::render::{Renderer, SegmentPrimitive};

use super::DonutChartConfig;
use super::segment_state::SegmentAnimations;

pub(super) type SegmentSelectHandler = Box<dyn FnMut(usize)>;

/// Main orchestration facade consumed by host applications.
///
/// `DonutChart` owns one dataset at a time: its layout, the per-segment
/// reveal animations and pointer state. The host drives it by calling
/// [`DonutChart::tick`] from its frame callback and [`DonutChart::render`]
/// when it wants a frame.
pub struct DonutChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: DonutChartConfig,
    pub(super) geometry: ArcGeometry,
    pub(super) points: Vec<DataPoint>,
    pub(super) segments: Vec<Segment>,
    pub(super) total: f64,
    pub(super) animations: SegmentAnimations,
    pub(super) primitives: Vec<SegmentPrimitive>,
    pub(super) dirty: SmallVec<[usize; 8]>,
    pub(super) generation: u64,
    pub(super) reveal_reported: bool,
    pub(super) interaction: InteractionState,
    pub(super) select_handler: Option<SegmentSelectHandler>,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<R: Renderer> DonutChart<R> {
    /// Creates an empty chart. Call [`DonutChart::set_data`] to mount a dataset.
    pub fn new(renderer: R, config: DonutChartConfig) -> ChartResult<Self> {
        let geometry = config.arc_geometry()?;
        Ok(Self {
            renderer,
            config,
            geometry,
            points: Vec::new(),
            segments: Vec::new(),
            total: 0.0,
            animations: SegmentAnimations::default(),
            primitives: Vec::new(),
            dirty: SmallVec::new(),
            generation: 0,
            reveal_reported: false,
            interaction: InteractionState::default(),
            select_handler: None,
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> DonutChartConfig {
        self.config
    }

    #[must_use]
    pub fn geometry(&self) -> ArcGeometry {
        self.geometry
    }

    /// Changes the drawing size. Animation state is kept; every segment is
    /// redrawn on the next frame.
    pub fn set_size(&mut self, size: f64) -> ChartResult<()> {
        let config = DonutChartConfig { size, ..self.config };
        self.geometry = config.arc_geometry()?;
        self.config = config;
        self.mark_all_dirty();
        Ok(())
    }

    /// Changes the inner radius (`0` turns the donut into a pie).
    pub fn set_inner_radius(&mut self, inner_radius_px: f64) -> ChartResult<()> {
        let config = self.config.with_inner_radius(inner_radius_px);
        self.geometry = config.arc_geometry()?;
        self.config = config;
        self.mark_all_dirty();
        Ok(())
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Sum of the current dataset's values.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Increments every time the dataset is replaced.
    #[must_use]
    pub fn dataset_generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.interaction
    }

    /// Segments queued for redraw on the next frame.
    #[must_use]
    pub fn pending_redraws(&self) -> &[usize] {
        &self.dirty
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn mark_all_dirty(&mut self) {
        self.dirty.clear();
        self.dirty.extend(0..self.segments.len());
    }

    pub(super) fn mark_dirty(&mut self, index: usize) {
        if !self.dirty.contains(&index) {
            self.dirty.push(index);
        }
    }
}
