use std::cell::RefCell;
use std::rc::Rc;

use donut_rs::ChartError;
use donut_rs::api::{DonutChart, DonutChartConfig};
use donut_rs::core::DataPoint;
use donut_rs::extensions::{ChartPlugin, PluginContext, PluginEvent};
use donut_rs::render::NullRenderer;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PluginEvent, context: PluginContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &PluginEvent) -> &'static str {
    match event {
        PluginEvent::DataUpdated { .. } => "data",
        PluginEvent::SegmentHovered { .. } => "hover",
        PluginEvent::HoverCleared => "hover_cleared",
        PluginEvent::SegmentSelected { .. } => "select",
        PluginEvent::RevealCompleted { .. } => "reveal_completed",
        PluginEvent::Rendered => "rendered",
    }
}

fn chart_with_recorder() -> (
    DonutChart<NullRenderer>,
    Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>,
) {
    let config = DonutChartConfig::new(200.0);
    let mut chart = DonutChart::new(NullRenderer::default(), config).expect("chart init");
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");
    (chart, events)
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let (mut chart, events) = chart_with_recorder();

    chart
        .set_data(vec![
            DataPoint::new(1.0, "#000", "a"),
            DataPoint::new(1.0, "#fff", "b"),
        ])
        .expect("set data");
    chart.tick(0.0).expect("tick");
    chart.tick(10_000.0).expect("tick");
    chart.pointer_move(150.0, 100.0);
    chart.pointer_down(150.0, 100.0);
    chart.pointer_leave();
    chart.render().expect("render");

    let kinds: Vec<&str> = events
        .borrow()
        .iter()
        .map(|(event, _)| event_kind(event))
        .collect();
    assert_eq!(
        kinds,
        vec![
            "data",
            "reveal_completed",
            "hover",
            "select",
            "hover_cleared",
            "rendered"
        ]
    );

    let recorded = events.borrow();
    let (_, reveal_context) = &recorded[1];
    assert!(reveal_context.settled);
    assert_eq!(reveal_context.segments_len, 2);
    assert_eq!(reveal_context.dataset_generation, 1);
    let (_, select_context) = &recorded[3];
    assert_eq!(select_context.hovered, Some(0));
}

#[test]
fn abandoned_dataset_never_reports_completion() {
    let (mut chart, events) = chart_with_recorder();

    chart
        .set_data(vec![DataPoint::new(1.0, "#000", "first")])
        .expect("set data");
    chart.tick(0.0).expect("tick");
    chart.tick(100.0).expect("tick");
    chart
        .set_data(vec![DataPoint::new(2.0, "#000", "second")])
        .expect("replace data");
    chart.tick(200.0).expect("tick");
    chart.tick(5_000.0).expect("tick");

    let completions: Vec<PluginEvent> = events
        .borrow()
        .iter()
        .map(|(event, _)| *event)
        .filter(|event| matches!(event, PluginEvent::RevealCompleted { .. }))
        .collect();
    assert_eq!(completions, vec![PluginEvent::RevealCompleted { generation: 2 }]);
}

#[test]
fn plugin_ids_must_be_unique_and_non_empty() {
    let (mut chart, events) = chart_with_recorder();

    let duplicate = chart.register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())));
    assert!(matches!(duplicate, Err(ChartError::InvalidData(_))));

    let empty = chart.register_plugin(Box::new(RecordingPlugin::new("", events.clone())));
    assert!(matches!(empty, Err(ChartError::InvalidData(_))));

    assert_eq!(chart.plugin_count(), 1);
    assert!(chart.has_plugin("recorder"));
    assert!(chart.unregister_plugin("recorder"));
    assert!(!chart.unregister_plugin("recorder"));
    assert_eq!(chart.plugin_count(), 0);
}
