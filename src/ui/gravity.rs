// Gravity chart
//
// A see-saw: every country is a building standing on a beam balanced on a
// pivot. Connectivity-led countries stand left, energy-led right, farther
// out for larger gaps and taller for larger populations. The beam tilt is
// decoration driven by drags; geometry is computed untilted and rotated
// rigidly about the pivot.

use super::{centered_x, element_state, flip_y, section_title, text_span};
use crate::app::config::BAR_PICK_SLACK;
use crate::app::{AppState, ChartViewport, Selection};
use crate::data::CountryRecord;
use crate::projection::{net_torque, project_seesaw, seesaw_bar, SeesawBar, SeesawLayout};
use crate::theme::{
    element_style, fade, polarity_rgb, ElementState, ElementStyle, DIM_GRAY,
    EMERALD, EMERALD_LIGHT, MUTED_GRAY, SIGNAL_BLUE, SIGNAL_BLUE_LIGHT, SLATE, SNOW, WHITE,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Leader line length above a selected building's roof
const LEADER_LENGTH: f64 = 20.0;

/// Half-width of the pivot stand at the floor
const STAND_HALF_WIDTH: f64 = 30.0;

/// Rotate `point` about `pivot` by `angle_deg`, clockwise on screen
///
/// Works in layout coordinates (y grows downward), so a positive angle
/// lowers whatever lies right of the pivot.
pub fn rotate_about(point: (f64, f64), pivot: (f64, f64), angle_deg: f64) -> (f64, f64) {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let (dx, dy) = (point.0 - pivot.0, point.1 - pivot.1);
    (pivot.0 + dx * cos - dy * sin, pivot.1 + dx * sin + dy * cos)
}

// ============================================================================
// Scene
// ============================================================================

/// One country as drawn on the beam
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub record: CountryRecord,
    pub bar: SeesawBar,
    pub state: ElementState,
    pub style: ElementStyle,
    /// Rotated corners: base-left, base-right, roof-right, roof-left
    pub corners: [(f64, f64); 4],
    /// Rotated leader line from the roof center upward
    pub leader: [(f64, f64); 2],
}

impl Building {
    /// Point on the building at `across` (0 = left wall, 1 = right wall)
    /// and `up` (0 = base, 1 = roof)
    pub fn point_at(&self, across: f64, up: f64) -> (f64, f64) {
        let [bl, br, tr, tl] = self.corners;
        let base = (bl.0 + (br.0 - bl.0) * across, bl.1 + (br.1 - bl.1) * across);
        let roof = (tl.0 + (tr.0 - tl.0) * across, tl.1 + (tr.1 - tl.1) * across);
        (base.0 + (roof.0 - base.0) * up, base.1 + (roof.1 - base.1) * up)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GravityScene {
    pub buildings: Vec<Building>,
    pub pivot: (f64, f64),
    pub tilt_deg: f64,
    /// Rotated beam corners: top-left, top-right, bottom-right, bottom-left
    pub beam: [(f64, f64); 4],
    /// Rotated beam centerline endpoints
    pub beam_axis: [(f64, f64); 2],
    pub net_torque: f64,
}

/// Resolve bar geometry and styles for the current tilt
pub fn build_scene(
    records: &[CountryRecord],
    layout: &SeesawLayout,
    selection: &Selection,
    tilt_deg: f64,
) -> GravityScene {
    let bars = project_seesaw(records, layout);
    let torque = net_torque(records, &bars);
    let pivot = layout.pivot();
    let (px, py) = pivot;
    let half_beam = layout.beam_length / 2.0;
    let half_thick = layout.beam_thickness / 2.0;
    let rotate = |p: (f64, f64)| rotate_about(p, pivot, tilt_deg);

    let buildings = records
        .iter()
        .zip(bars)
        .map(|(record, bar)| {
            let state = element_state(record, selection, None);
            let [x0, x1] = bar_span(&bar, layout);
            let base = py - half_thick;
            let roof = base - bar.bar_height;
            let center = px + bar.beam_pos;
            Building {
                record: *record,
                corners: [
                    rotate((x0, base)),
                    rotate((x1, base)),
                    rotate((x1, roof)),
                    rotate((x0, roof)),
                ],
                leader: [rotate((center, roof)), rotate((center, roof - LEADER_LENGTH))],
                bar,
                state,
                style: element_style(state),
            }
        })
        .collect();

    GravityScene {
        buildings,
        pivot,
        tilt_deg,
        beam: [
            rotate((px - half_beam, py - half_thick)),
            rotate((px + half_beam, py - half_thick)),
            rotate((px + half_beam, py + half_thick)),
            rotate((px - half_beam, py + half_thick)),
        ],
        beam_axis: [rotate((px - half_beam, py)), rotate((px + half_beam, py))],
        net_torque: torque,
    }
}

/// Horizontal extent of an untilted bar
fn bar_span(bar: &SeesawBar, layout: &SeesawLayout) -> [f64; 2] {
    let center = layout.pivot().0 + bar.beam_pos;
    [center - layout.bar_width / 2.0, center + layout.bar_width / 2.0]
}

/// Record whose building contains a canvas point at the given tilt
///
/// The point is rotated back into the untilted frame and tested against the
/// bar rectangles; later records win where bars overlap, matching paint order.
pub fn pick_building<'a>(
    records: &'a [CountryRecord],
    layout: &SeesawLayout,
    tilt_deg: f64,
    point: (f64, f64),
) -> Option<&'a CountryRecord> {
    let pivot = layout.pivot();
    let (x, y) = rotate_about((point.0, flip_y(point.1, layout.height)), pivot, -tilt_deg);
    let base = pivot.1 - layout.beam_thickness / 2.0;

    records.iter().rev().find(|record| {
        let bar = seesaw_bar(record, layout);
        let [x0, x1] = bar_span(&bar, layout);
        let roof = base - bar.bar_height;
        (x0 - BAR_PICK_SLACK..=x1 + BAR_PICK_SLACK).contains(&x)
            && (roof - BAR_PICK_SLACK..=base + BAR_PICK_SLACK).contains(&y)
    })
}

// ============================================================================
// Painter
// ============================================================================

fn draw_segment(ctx: &mut Context<'_>, from: (f64, f64), to: (f64, f64), height: f64, color: Color) {
    ctx.draw(&CanvasLine {
        x1: from.0,
        y1: flip_y(from.1, height),
        x2: to.0,
        y2: flip_y(to.1, height),
        color,
    });
}

/// Render the gravity chart into `area` and return where its canvas landed
pub fn render_gravity(f: &mut Frame, area: Rect, app: &AppState, title: &str) -> ChartViewport {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let layout = app.layouts.seesaw;
    let scene = build_scene(&app.records, &layout, app.selection(), app.tilt.angle());
    let accent = app.settings.accent;

    let heavier = if scene.net_torque >= 0.0 {
        Span::styled("energy side heavier", Style::default().fg(EMERALD))
    } else {
        Span::styled("connectivity side heavier", Style::default().fg(SIGNAL_BLUE))
    };
    let drag_hint = if app.tilt.is_dragging() { " [dragging]" } else { "" };
    let summary = Paragraph::new(Line::from(vec![
        Span::styled(" ⚖ ", Style::default().fg(accent.highlight())),
        Span::styled(
            format!(
                "Tilt: {:+.1}°{} | Net torque: {:+.0} ",
                scene.tilt_deg, drag_hint, scene.net_torque
            ),
            Style::default().fg(SNOW),
        ),
        heavier,
    ]))
    .block(
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

    let (width, height) = (layout.width, layout.height);
    let cell_width = width / f64::from(inner.width.max(1));
    let show_grid = app.settings.show_grid;
    let show_labels = app.settings.show_labels;
    let pulse_phase = app.pulse_phase;
    let half_beam = layout.beam_length / 2.0;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            let (px, py) = scene.pivot;

            if show_grid {
                let level: Vec<(f64, f64)> = (0..=40)
                    .map(|i| (f64::from(i) * width / 40.0, flip_y(py, height)))
                    .collect();
                ctx.draw(&Points { coords: &level, color: DIM_GRAY });
            }

            // Pivot stand
            draw_segment(ctx, (px, py), (px - STAND_HALF_WIDTH, height), height, SLATE);
            draw_segment(ctx, (px, py), (px + STAND_HALF_WIDTH, height), height, SLATE);
            draw_segment(
                ctx,
                (px - STAND_HALF_WIDTH, height),
                (px + STAND_HALF_WIDTH, height),
                height,
                SLATE,
            );

            if scene.buildings.is_empty() {
                let text = "NO RECORDS LOADED";
                ctx.print(
                    centered_x(width / 2.0, text, cell_width),
                    height / 2.0,
                    Span::styled(text, Style::default().fg(MUTED_GRAY)),
                );
            }

            // Beam
            for i in 0..4 {
                draw_segment(ctx, scene.beam[i], scene.beam[(i + 1) % 4], height, SLATE);
            }
            let [axis_start, axis_end] = scene.beam_axis;
            let dashes: Vec<(f64, f64)> = (0..=64)
                .filter(|i| i % 3 != 2)
                .map(|i| {
                    let t = f64::from(i) / 64.0;
                    (
                        axis_start.0 + (axis_end.0 - axis_start.0) * t,
                        flip_y(axis_start.1 + (axis_end.1 - axis_start.1) * t, height),
                    )
                })
                .collect();
            ctx.draw(&Points { coords: &dashes, color: DIM_GRAY });

            if show_labels {
                let left = rotate_about((px - half_beam + 10.0, py + 25.0), (px, py), scene.tilt_deg);
                let right = rotate_about((px + half_beam - 10.0, py + 25.0), (px, py), scene.tilt_deg);
                let right_text = "ENERGY DOMINANT";
                ctx.print(
                    left.0,
                    flip_y(left.1, height),
                    Span::styled("CONNECTIVITY DOMINANT", Style::default().fg(SIGNAL_BLUE)),
                );
                ctx.print(
                    right.0 - text_span(right_text, cell_width),
                    flip_y(right.1, height),
                    Span::styled(right_text, Style::default().fg(EMERALD)),
                );
            }

            ctx.layer();

            for building in &scene.buildings {
                let energy = building.record.energy_leads();
                let body = fade(polarity_rgb(energy), 0.9 * building.style.brightness);

                // Hatching fills the body between the walls
                for step in 1..6 {
                    let across = f64::from(step) / 6.0;
                    let bottom = building.point_at(across, 0.0);
                    let top = building.point_at(across, 1.0);
                    draw_segment(ctx, bottom, top, height, body);
                }

                let outline = if building.style.outline { WHITE } else { body };
                let [bl, br, tr, tl] = building.corners;
                draw_segment(ctx, bl, br, height, outline);
                draw_segment(ctx, br, tr, height, outline);
                draw_segment(ctx, tl, bl, height, outline);

                let roof_light = if energy { EMERALD_LIGHT } else { SIGNAL_BLUE_LIGHT };
                draw_segment(ctx, tl, tr, height, roof_light);

                if building.style.outline {
                    let [from, to] = building.leader;
                    draw_segment(ctx, from, to, height, WHITE);
                    let id = building.record.id;
                    ctx.print(
                        centered_x(to.0, id, cell_width),
                        flip_y(to.1 - 5.0, height),
                        Span::styled(id, Style::default().fg(WHITE).add_modifier(Modifier::BOLD)),
                    );
                }
            }

            ctx.draw(&Circle {
                x: px,
                y: flip_y(py, height),
                radius: 6.0,
                color: accent.pulse(pulse_phase),
            });
        });

    f.render_widget(canvas, chunks[1]);

    ChartViewport {
        area: inner,
        x_bounds: [0.0, width],
        y_bounds: [0.0, height],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::COUNTRIES;
    use proptest::prelude::*;

    fn find(id: &str) -> CountryRecord {
        *COUNTRIES.iter().find(|r| r.id == id).unwrap()
    }

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-6 && (a.1 - b.1).abs() < 1e-6
    }

    #[test]
    fn test_rotate_positive_lowers_right_side() {
        let (x, y) = rotate_about((110.0, 100.0), (100.0, 100.0), 90.0);
        assert!(close((x, y), (100.0, 110.0)));
    }

    #[test]
    fn test_zero_tilt_keeps_bars_upright() {
        let layout = SeesawLayout::default();
        let scene = build_scene(COUNTRIES, &layout, &Selection::default(), 0.0);
        for building in &scene.buildings {
            let [bl, br, tr, tl] = building.corners;
            assert!((bl.1 - br.1).abs() < 1e-9);
            assert!((bl.0 - tl.0).abs() < 1e-9);
            assert!((br.0 - tr.0).abs() < 1e-9);
            assert!((bl.1 - tl.1 - building.bar.bar_height).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tilt_rotates_rigidly() {
        let layout = SeesawLayout::default();
        let flat = build_scene(COUNTRIES, &layout, &Selection::default(), 0.0);
        let tilted = build_scene(COUNTRIES, &layout, &Selection::default(), 17.5);
        for (a, b) in flat.buildings.iter().zip(&tilted.buildings) {
            assert_eq!(a.bar, b.bar);
            for (ca, cb) in a.corners.iter().zip(&b.corners) {
                assert!(close(rotate_about(*ca, flat.pivot, 17.5), *cb));
            }
        }
        assert_eq!(flat.net_torque, tilted.net_torque);
    }

    #[test]
    fn test_energy_side_heavier_for_builtin_table() {
        let scene = build_scene(COUNTRIES, &SeesawLayout::default(), &Selection::default(), 10.0);
        assert!(scene.net_torque > 0.0);
    }

    #[test]
    fn test_only_selected_building_outlined() {
        let mut selection = Selection::default();
        selection.select(find("NGA"));
        let scene = build_scene(COUNTRIES, &SeesawLayout::default(), &selection, 10.0);
        let outlined: Vec<_> = scene
            .buildings
            .iter()
            .filter(|b| b.style.outline)
            .map(|b| b.record.id)
            .collect();
        assert_eq!(outlined, vec!["NGA"]);
    }

    #[test]
    fn test_pick_miss_on_empty_sky() {
        let layout = SeesawLayout::default();
        assert!(pick_building(COUNTRIES, &layout, 10.0, (5.0, 495.0)).is_none());
        assert!(pick_building(&[], &layout, 10.0, (400.0, 200.0)).is_none());
    }

    #[test]
    fn test_pick_prefers_later_overlapping_bar() {
        // CAN and GBR share a gap of 1.0 and stand on the same spot
        let layout = SeesawLayout::default();
        let records = vec![find("CAN"), find("GBR")];
        let bar = seesaw_bar(&records[0], &layout);
        let (px, py) = layout.pivot();
        let inside = (px + bar.beam_pos, py - layout.beam_thickness / 2.0 - 5.0);
        let picked = pick_building(&records, &layout, 0.0, (inside.0, layout.height - inside.1));
        assert_eq!(picked.map(|r| r.id), Some("GBR"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// A point inside any building picks a record whose bar contains it,
        /// at any tilt
        #[test]
        fn prop_pick_round_trip(idx in 0usize..25, tilt in -25.0f64..25.0, up in 0.05f64..0.95) {
            let layout = SeesawLayout::default();
            let scene = build_scene(COUNTRIES, &layout, &Selection::default(), tilt);
            let target = &scene.buildings[idx];
            let (x, y) = target.point_at(0.5, up);
            let picked = pick_building(COUNTRIES, &layout, tilt, (x, layout.height - y));
            prop_assert!(picked.is_some());

            // The picked bar overlaps the target's spot in the untilted frame
            let picked_bar = seesaw_bar(picked.unwrap(), &layout);
            prop_assert!((picked_bar.beam_pos - target.bar.beam_pos).abs()
                <= layout.bar_width + 2.0 * BAR_PICK_SLACK);
        }
    }
}
