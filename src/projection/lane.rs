// Lane projection
//
// Min-max normalization of the gap onto a 0-100 track with hard clamping, so
// outliers saturate at the track ends instead of escaping it.

/// Bounds of the gap scale shown on every lane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneLayout {
    pub min_gap: f64,
    pub max_gap: f64,
}

impl Default for LaneLayout {
    fn default() -> Self {
        Self {
            min_gap: -50.0,
            max_gap: 50.0,
        }
    }
}

/// Position of a gap on the track, in percent of the track length
///
/// A degenerate layout (`max_gap <= min_gap`) puts every marker at the center.
pub fn lane_position(gap: f64, layout: &LaneLayout) -> f64 {
    let range = layout.max_gap - layout.min_gap;
    if range <= 0.0 {
        return 50.0;
    }
    let clamped = gap.clamp(layout.min_gap, layout.max_gap);
    ((clamped - layout.min_gap) / range) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_balanced_gap_is_centered() {
        assert_eq!(lane_position(0.0, &LaneLayout::default()), 50.0);
    }

    #[test]
    fn test_nigeria_example() {
        let pos = lane_position(-19.6, &LaneLayout::default());
        assert!((pos - 30.4).abs() < 1e-9);
    }

    #[test]
    fn test_clamps_outside_bounds() {
        let layout = LaneLayout::default();
        assert_eq!(lane_position(-50.0, &layout), 0.0);
        assert_eq!(lane_position(-80.0, &layout), 0.0);
        assert_eq!(lane_position(50.0, &layout), 100.0);
        assert_eq!(lane_position(120.0, &layout), 100.0);
    }

    #[test]
    fn test_custom_bounds() {
        let layout = LaneLayout {
            min_gap: -20.0,
            max_gap: 20.0,
        };
        assert_eq!(lane_position(10.0, &layout), 75.0);
        assert_eq!(lane_position(-25.0, &layout), 0.0);
    }

    #[test]
    fn test_degenerate_bounds_center_everything() {
        let layout = LaneLayout {
            min_gap: 5.0,
            max_gap: 5.0,
        };
        assert_eq!(lane_position(-3.0, &layout), 50.0);
        assert_eq!(lane_position(30.0, &layout), 50.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Larger gaps never map further left
        #[test]
        fn prop_monotonic(a in -200.0f64..=200.0, b in -200.0f64..=200.0) {
            let layout = LaneLayout::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(lane_position(lo, &layout) <= lane_position(hi, &layout));
        }

        /// Output never leaves the track
        #[test]
        fn prop_within_track(gap in -1000.0f64..=1000.0) {
            let pos = lane_position(gap, &LaneLayout::default());
            prop_assert!((0.0..=100.0).contains(&pos));
        }
    }
}
