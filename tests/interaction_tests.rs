use std::cell::RefCell;
use std::rc::Rc;

use donut_rs::api::{DonutChart, DonutChartConfig};
use donut_rs::core::DataPoint;
use donut_rs::render::NullRenderer;

fn settled_chart(inner_radius: f64) -> DonutChart<NullRenderer> {
    let config = DonutChartConfig::new(200.0).with_inner_radius(inner_radius);
    let mut chart = DonutChart::new(NullRenderer::default(), config).expect("chart init");
    chart
        .set_data(vec![
            DataPoint::new(50.0, "#e63946", "housing"),
            DataPoint::new(30.0, "#457b9d", "food"),
            DataPoint::new(20.0, "#2a9d8f", "travel"),
        ])
        .expect("set data");
    chart.tick(0.0).expect("tick");
    chart.tick(10_000.0).expect("tick");
    chart
}

#[test]
fn hit_test_maps_points_to_segments() {
    let chart = settled_chart(0.0);
    assert_eq!(chart.hit_test(150.0, 100.0), Some(0));
    assert_eq!(chart.hit_test(50.0, 100.0), Some(1));
    assert_eq!(chart.hit_test(90.0, 40.0), Some(2));
    assert_eq!(chart.hit_test(100.0, 5.0), None);
}

#[test]
fn donut_hole_is_not_hittable() {
    let chart = settled_chart(40.0);
    assert_eq!(chart.hit_test(100.0, 100.0), None);
    assert_eq!(chart.hit_test(110.0, 100.0), None);
    assert_eq!(chart.hit_test(160.0, 100.0), Some(0));
}

#[test]
fn unrevealed_segments_cannot_be_hit() {
    let config = DonutChartConfig::new(200.0);
    let mut chart = DonutChart::new(NullRenderer::default(), config).expect("chart init");
    chart
        .set_data(vec![
            DataPoint::new(1.0, "#000", "a"),
            DataPoint::new(1.0, "#fff", "b"),
        ])
        .expect("set data");
    chart.tick(0.0).expect("tick");
    assert_eq!(chart.hit_test(150.0, 100.0), None);

    chart.tick(10_000.0).expect("tick");
    assert_eq!(chart.hit_test(150.0, 100.0), Some(0));
}

#[test]
fn press_forwards_segment_index_to_handler() {
    let mut chart = settled_chart(40.0);
    let selected = Rc::new(RefCell::new(Vec::new()));
    let sink = selected.clone();
    chart.set_segment_select_handler(move |index| sink.borrow_mut().push(index));

    assert_eq!(chart.pointer_down(50.0, 100.0), Some(1));
    assert_eq!(chart.pointer_down(100.0, 100.0), None);
    assert_eq!(chart.pointer_down(160.0, 100.0), Some(0));

    assert_eq!(*selected.borrow(), vec![1, 0]);
    assert_eq!(chart.interaction_state().last_selected(), Some(0));

    chart.clear_segment_select_handler();
    assert_eq!(chart.pointer_down(50.0, 100.0), Some(1));
    assert_eq!(selected.borrow().len(), 2);
}

#[test]
fn hover_tracks_pointer_and_resets_on_new_dataset() {
    let mut chart = settled_chart(0.0);
    assert_eq!(chart.pointer_move(150.0, 100.0), Some(0));
    assert_eq!(chart.interaction_state().hovered(), Some(0));

    chart.pointer_leave();
    assert_eq!(chart.interaction_state().hovered(), None);

    chart.pointer_move(50.0, 100.0);
    assert_eq!(chart.interaction_state().hovered(), Some(1));
    chart
        .set_data(vec![DataPoint::new(1.0, "#000", "solo")])
        .expect("replace data");
    assert_eq!(chart.interaction_state().hovered(), None);
}
