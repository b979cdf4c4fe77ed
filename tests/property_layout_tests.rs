use donut_rs::core::{DataPoint, layout};
use proptest::prelude::*;

fn to_points(values: &[f64]) -> Vec<DataPoint> {
    values
        .iter()
        .map(|value| DataPoint::new(*value, "#000", "slice"))
        .collect()
}

proptest! {
    #[test]
    fn spans_partition_the_full_circle(
        values in prop::collection::vec(0.0f64..10_000.0, 1..64),
        bump in 0.001f64..100.0
    ) {
        let mut values = values;
        values[0] += bump;
        let segments = layout(&to_points(&values), 100.0).expect("layout");

        let total_span: f64 = segments.iter().map(|s| s.sweep_deg()).sum();
        prop_assert!((total_span - 360.0).abs() <= 1e-6);
        let last = segments.last().expect("non-empty");
        prop_assert!((last.end_angle_deg - 360.0).abs() <= 1e-6);
        prop_assert_eq!(segments[0].start_angle_deg, 0.0);
    }

    #[test]
    fn consecutive_segments_share_boundaries(
        values in prop::collection::vec(0.0f64..1_000.0, 2..48)
    ) {
        let segments = layout(&to_points(&values), 50.0).expect("layout");
        for pair in segments.windows(2) {
            prop_assert_eq!(pair[1].start_angle_deg, pair[0].end_angle_deg);
            prop_assert!(pair[1].sweep_deg() >= 0.0);
            prop_assert!(pair[1].reveal_delay_ms > pair[0].reveal_delay_ms);
        }
    }

    #[test]
    fn spans_are_proportional_to_values(
        values in prop::collection::vec(0.1f64..1_000.0, 1..32)
    ) {
        let total: f64 = values.iter().sum();
        let segments = layout(&to_points(&values), 0.0).expect("layout");
        for (segment, value) in segments.iter().zip(&values) {
            prop_assert!((segment.sweep_deg() - 360.0 * value / total).abs() <= 1e-6);
        }
    }
}
