// Lanes chart
//
// One horizontal track per region. Each country is a marker placed by its
// gap: left of center when connectivity leads, right when energy leads.
// Every region gets a track even when it has no members.

use super::{centered_x, element_state, section_title};
use crate::app::config::LANE_PICK_TOLERANCE;
use crate::app::{AppState, ChartViewport, Selection};
use crate::data::{in_region, CountryRecord, Region, REGION_COUNT};
use crate::projection::{lane_position, LaneLayout};
use crate::theme::{
    element_style, fade, polarity_rgb, ElementState, ElementStyle, DIM_GRAY, EMERALD, MUTED_GRAY,
    SIGNAL_BLUE, SLATE, SNOW, WHITE,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Line as CanvasLine, Points},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Horizontal extent of every track
const TRACK_WIDTH: f64 = 100.0;

const MARKER_GLYPH: &str = "●";
const SELECTED_GLYPH: &str = "◆";

// ============================================================================
// Scene
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LaneMarker {
    pub record: CountryRecord,
    /// 0-100 along the track
    pub position: f64,
    pub state: ElementState,
    pub style: ElementStyle,
}

impl LaneMarker {
    /// Polarity color of an unselected marker, faded by its state
    pub fn color(&self) -> Color {
        fade(polarity_rgb(self.record.energy_leads()), 0.9 * self.style.brightness)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub region: Region,
    pub markers: Vec<LaneMarker>,
}

/// Vertical center of lane `index` in canvas units (lane 0 at the top)
pub fn lane_center(index: usize) -> f64 {
    REGION_COUNT as f64 - index as f64 - 0.5
}

/// One lane per region in display order, markers in table order
pub fn build_scene(records: &[CountryRecord], layout: &LaneLayout, selection: &Selection) -> Vec<Lane> {
    Region::ALL
        .iter()
        .map(|&region| Lane {
            region,
            markers: in_region(records, region)
                .map(|record| {
                    let state = element_state(record, selection, None);
                    LaneMarker {
                        record: *record,
                        position: lane_position(record.gap, layout),
                        state,
                        style: element_style(state),
                    }
                })
                .collect(),
        })
        .collect()
}

/// Record nearest to a canvas point on the lane under it
///
/// Only markers within `LANE_PICK_TOLERANCE` of the point count.
pub fn pick_marker<'a>(
    records: &'a [CountryRecord],
    layout: &LaneLayout,
    point: (f64, f64),
) -> Option<&'a CountryRecord> {
    let (x, y) = point;
    let from_top = REGION_COUNT as f64 - y;
    if !(0.0..REGION_COUNT as f64).contains(&from_top) {
        return None;
    }
    let region = Region::ALL[from_top as usize];

    in_region(records, region)
        .map(|record| (record, (lane_position(record.gap, layout) - x).abs()))
        .filter(|(_, distance)| *distance <= LANE_PICK_TOLERANCE)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(record, _)| record)
}

// ============================================================================
// Painter
// ============================================================================

/// Render the lanes into `area` and return where the canvas landed
pub fn render_lanes(f: &mut Frame, area: Rect, app: &AppState, title: &str) -> ChartViewport {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let lanes = build_scene(&app.records, &app.layouts.lane, app.selection());
    let accent = app.settings.accent;
    let show_labels = app.settings.show_labels;
    let show_grid = app.settings.show_grid;

    let legend = if show_labels {
        vec![
            Span::styled(" ◀ Connectivity Leads (Negative Gap)", Style::default().fg(SIGNAL_BLUE)),
            Span::styled("  |  0 (Balanced)  |  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("Energy Leads (Positive Gap) ▶", Style::default().fg(EMERALD)),
        ]
    } else {
        vec![Span::styled(
            format!(
                " Range: {:+.0} .. {:+.0}",
                app.layouts.lane.min_gap, app.layouts.lane.max_gap
            ),
            Style::default().fg(SNOW),
        )]
    };
    let summary = Paragraph::new(Line::from(legend)).block(
        Block::default()
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SLATE))
            .title(section_title(title, accent.highlight())),
    );
    f.render_widget(summary, chunks[0]);

    let block = Block::default()
        .borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(SLATE));
    let inner = block.inner(chunks[1]);

    let height = REGION_COUNT as f64;
    let cell_width = TRACK_WIDTH / f64::from(inner.width.max(1));
    let cell_height = height / f64::from(inner.height.max(1));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, TRACK_WIDTH])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            // Balanced line
            let center: Vec<(f64, f64)> = (0..=28)
                .filter(|i| i % 2 == 0)
                .map(|i| (TRACK_WIDTH / 2.0, f64::from(i) * height / 28.0))
                .collect();
            ctx.draw(&Points { coords: &center, color: DIM_GRAY });

            for (index, lane) in lanes.iter().enumerate() {
                let track_y = lane_center(index) - cell_height / 2.0;

                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: track_y,
                    x2: TRACK_WIDTH,
                    y2: track_y,
                    color: SLATE,
                });

                if show_grid {
                    let ticks: Vec<(f64, f64)> = (1..10)
                        .map(|i| (f64::from(i) * TRACK_WIDTH / 10.0, track_y + cell_height / 4.0))
                        .collect();
                    ctx.draw(&Points { coords: &ticks, color: DIM_GRAY });
                }

                let caption = if lane.markers.is_empty() {
                    format!("{} (no data)", lane.region.label().to_uppercase())
                } else {
                    lane.region.label().to_uppercase()
                };
                ctx.print(
                    0.5,
                    track_y + cell_height,
                    Span::styled(caption, Style::default().fg(MUTED_GRAY)),
                );
            }

            ctx.layer();

            for (index, lane) in lanes.iter().enumerate() {
                let track_y = lane_center(index) - cell_height / 2.0;

                for marker in &lane.markers {
                    let x = centered_x(marker.position, MARKER_GLYPH, cell_width);
                    if marker.style.outline {
                        ctx.print(
                            x,
                            track_y,
                            Span::styled(
                                SELECTED_GLYPH,
                                Style::default().fg(WHITE).add_modifier(Modifier::BOLD),
                            ),
                        );
                        let id = marker.record.id;
                        ctx.print(
                            centered_x(marker.position, id, cell_width),
                            track_y + cell_height,
                            Span::styled(id, Style::default().fg(WHITE).add_modifier(Modifier::BOLD)),
                        );
                    } else {
                        let color = marker.color();
                        ctx.print(x, track_y, Span::styled(MARKER_GLYPH, Style::default().fg(color)));
                    }
                }
            }
        });

    f.render_widget(canvas, chunks[1]);

    ChartViewport {
        area: inner,
        x_bounds: [0.0, TRACK_WIDTH],
        y_bounds: [0.0, height],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::COUNTRIES;
    use crate::theme::{EMERALD_RGB, SIGNAL_BLUE_RGB};
    use proptest::prelude::*;

    fn find(id: &str) -> CountryRecord {
        *COUNTRIES.iter().find(|r| r.id == id).unwrap()
    }

    #[test]
    fn test_every_region_has_a_lane() {
        let lanes = build_scene(&[], &LaneLayout::default(), &Selection::default());
        assert_eq!(lanes.len(), REGION_COUNT);
        assert!(lanes.iter().all(|l| l.markers.is_empty()));
        let regions: Vec<_> = lanes.iter().map(|l| l.region).collect();
        assert_eq!(regions, Region::ALL.to_vec());
    }

    #[test]
    fn test_markers_grouped_by_region() {
        let lanes = build_scene(COUNTRIES, &LaneLayout::default(), &Selection::default());
        let total: usize = lanes.iter().map(|l| l.markers.len()).sum();
        assert_eq!(total, COUNTRIES.len());
        for lane in &lanes {
            assert!(lane.markers.iter().all(|m| m.record.region == lane.region));
        }
    }

    #[test]
    fn test_nigeria_position() {
        let lanes = build_scene(COUNTRIES, &LaneLayout::default(), &Selection::default());
        let nga = lanes
            .iter()
            .flat_map(|l| &l.markers)
            .find(|m| m.record.id == "NGA")
            .unwrap();
        assert!((nga.position - 30.4).abs() < 1e-9);
    }

    #[test]
    fn test_balanced_marker_uses_energy_color() {
        let lanes = build_scene(COUNTRIES, &LaneLayout::default(), &Selection::default());
        let marker = |id: &str| {
            lanes
                .iter()
                .flat_map(|l| &l.markers)
                .find(|m| m.record.id == id)
                .cloned()
                .unwrap()
        };

        let uae = marker("UAE");
        assert_eq!(uae.position, 50.0);
        assert_eq!(uae.color(), fade(EMERALD_RGB, 0.9 * uae.style.brightness));

        let nga = marker("NGA");
        assert_eq!(nga.color(), fade(SIGNAL_BLUE_RGB, 0.9 * nga.style.brightness));
    }

    #[test]
    fn test_lane_centers_top_to_bottom() {
        assert_eq!(lane_center(0), REGION_COUNT as f64 - 0.5);
        assert_eq!(lane_center(REGION_COUNT - 1), 0.5);
    }

    #[test]
    fn test_pick_marker_on_its_lane() {
        let layout = LaneLayout::default();
        let nga = find("NGA");
        let index = Region::SubSaharanAfrica.index();
        let point = (lane_position(nga.gap, &layout) + 1.0, lane_center(index));
        assert_eq!(pick_marker(COUNTRIES, &layout, point).map(|r| r.id), Some("NGA"));
    }

    #[test]
    fn test_pick_marker_wrong_lane_misses() {
        let layout = LaneLayout::default();
        let nga = find("NGA");
        // North America has no marker near NGA's position
        let point = (lane_position(nga.gap, &layout), lane_center(Region::NorthAmerica.index()));
        assert!(pick_marker(COUNTRIES, &layout, point).is_none());
    }

    #[test]
    fn test_pick_outside_lanes_is_none() {
        let layout = LaneLayout::default();
        assert!(pick_marker(COUNTRIES, &layout, (50.0, REGION_COUNT as f64 + 0.5)).is_none());
        assert!(pick_marker(COUNTRIES, &layout, (50.0, -0.5)).is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Picking exactly at a marker returns a record from that lane at the
        /// same position
        #[test]
        fn prop_pick_at_marker(idx in 0usize..25) {
            let layout = LaneLayout::default();
            let record = COUNTRIES[idx];
            let position = lane_position(record.gap, &layout);
            let point = (position, lane_center(record.region.index()));
            let picked = pick_marker(COUNTRIES, &layout, point);
            prop_assert!(picked.is_some());
            let picked = picked.unwrap();
            prop_assert_eq!(picked.region, record.region);
            prop_assert!((lane_position(picked.gap, &layout) - position).abs() < 1e-9);
        }
    }
}
