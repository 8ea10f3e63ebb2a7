// Constellation chart
//
// Scatter of energy access (x) against 4G coverage (y). Each country is a
// star sized by population and brightened by GDP; members of a region are
// tied to the region centroid. Hovering a region dims every other region.

use super::{centered_x, element_state, flip_y, section_title};
use crate::app::config::NODE_PICK_SLACK;
use crate::app::{AppState, ChartViewport, Selection};
use crate::data::{CountryRecord, Region};
use crate::projection::{
    project_scatter, region_centroids, scatter_node, ProjectedNode, RegionCentroid, ScatterLayout,
};
use crate::theme::{
    element_style, fade, polarity_rgb, ElementState, ElementStyle, LinkEmphasis, DIM_GRAY, GHOST,
    MUTED_GRAY, SLATE, SNOW, WHITE,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::f64::consts::TAU;

/// Populations (millions) above this get a pulsing aura
pub const AURA_POPULATION: f64 = 100.0;

/// Aura radius relative to the node radius
const AURA_SCALE: f64 = 1.5;

/// Selection ring distance outside the node radius
const RING_GAP: f64 = 12.0;

/// Dashes around the selection ring
const RING_DASHES: usize = 12;

// ============================================================================
// Scene
// ============================================================================

/// One country as drawn in the constellation
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub record: CountryRecord,
    pub node: ProjectedNode,
    pub state: ElementState,
    pub style: ElementStyle,
}

impl Star {
    pub fn has_aura(&self) -> bool {
        self.record.population > AURA_POPULATION && !self.state.dimmed
    }
}

/// Everything the painter needs, resolved for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationScene {
    pub stars: Vec<Star>,
    pub centroids: Vec<RegionCentroid>,
    pub hovered_region: Option<Region>,
}

impl ConstellationScene {
    pub fn centroid(&self, region: Region) -> Option<&RegionCentroid> {
        self.centroids.iter().find(|c| c.region == region)
    }

    /// Centroid whose label is shown: only the hovered region's
    pub fn labelled_centroid(&self) -> Option<&RegionCentroid> {
        self.hovered_region.and_then(|region| self.centroid(region))
    }
}

/// Resolve positions and styles for every record
pub fn build_scene(
    records: &[CountryRecord],
    layout: &ScatterLayout,
    selection: &Selection,
    hovered_region: Option<Region>,
) -> ConstellationScene {
    let nodes = project_scatter(records, layout);
    let centroids = region_centroids(records.iter().map(|r| r.region).zip(nodes.iter()));

    let stars = records
        .iter()
        .zip(nodes)
        .map(|(record, node)| {
            let state = element_state(record, selection, hovered_region);
            Star {
                record: *record,
                node,
                state,
                style: element_style(state),
            }
        })
        .collect();

    ConstellationScene {
        stars,
        centroids,
        hovered_region,
    }
}

/// Record whose star is nearest to a canvas point, within its pick radius
///
/// `point` is in canvas coordinates (y grows upward).
pub fn pick_star<'a>(
    records: &'a [CountryRecord],
    layout: &ScatterLayout,
    point: (f64, f64),
) -> Option<&'a CountryRecord> {
    let (x, y) = (point.0, flip_y(point.1, layout.height));

    records
        .iter()
        .filter_map(|record| {
            let node = scatter_node(record, layout);
            let distance = (node.x - x).hypot(node.y - y);
            (distance <= node.radius + NODE_PICK_SLACK).then_some((record, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(record, _)| record)
}

// ============================================================================
// Painter
// ============================================================================

/// Render the constellation into `area` and return where its canvas landed
pub fn render_constellation(f: &mut Frame, area: Rect, app: &AppState, title: &str) -> ChartViewport {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let scene = build_scene(&app.records, &app.layouts.scatter, app.selection(), app.hovered_region);
    let accent = app.settings.accent;

    let hover_text = app
        .hovered_region
        .map_or("-".to_string(), |r| r.label().to_string());
    let summary = Paragraph::new(Line::from(vec![
        Span::styled(" ✦ ", Style::default().fg(accent.highlight())),
        Span::styled(
            format!(
                "Countries: {} | Regions: {} | Hover: {}",
                scene.stars.len(),
                scene.centroids.len(),
                hover_text
            ),
            Style::default().fg(SNOW),
        ),
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

    let layout = app.layouts.scatter;
    let (width, height) = (layout.width, layout.height);
    let cell_width = width / f64::from(inner.width.max(1));
    let show_grid = app.settings.show_grid;
    let show_labels = app.settings.show_labels;
    let pulse_phase = app.pulse_phase;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            if scene.stars.is_empty() {
                let text = "NO RECORDS LOADED";
                ctx.print(
                    centered_x(width / 2.0, text, cell_width),
                    height / 2.0,
                    Span::styled(text, Style::default().fg(MUTED_GRAY)),
                );
                return;
            }

            if show_grid {
                let horizontal: Vec<(f64, f64)> =
                    (0..=50).map(|i| (f64::from(i) * width / 50.0, height / 2.0)).collect();
                let vertical: Vec<(f64, f64)> =
                    (0..=30).map(|i| (width / 2.0, f64::from(i) * height / 30.0)).collect();
                ctx.draw(&Points { coords: &horizontal, color: DIM_GRAY });
                ctx.draw(&Points { coords: &vertical, color: DIM_GRAY });

                let pad = layout.padding / 2.0;
                let quadrants = [
                    ("LEAPFROG", pad, height - pad / 2.0, false),
                    ("SYNERGIZED", width - pad, height - pad / 2.0, true),
                    ("EMERGING", pad, pad, false),
                    ("LEGACY GRID", width - pad, pad, true),
                ];
                for (text, x, y, right_aligned) in quadrants {
                    let x = if right_aligned {
                        x - super::text_span(text, cell_width)
                    } else {
                        x
                    };
                    ctx.print(x, y, Span::styled(text, Style::default().fg(DIM_GRAY)));
                }
            }

            if show_labels {
                let caption = "Y: DIGITAL (4G) • X: ENERGY (GRID)";
                ctx.print(
                    centered_x(width / 2.0, caption, cell_width),
                    0.0,
                    Span::styled(caption, Style::default().fg(MUTED_GRAY)),
                );
            }

            ctx.layer();

            // Centroid-to-member links
            for star in &scene.stars {
                let Some(centroid) = scene.centroid(star.record.region) else {
                    continue;
                };
                let color = match star.style.link {
                    LinkEmphasis::Strong => accent.highlight(),
                    LinkEmphasis::Faint => accent.base(),
                    LinkEmphasis::Ghost => GHOST,
                };
                ctx.draw(&CanvasLine {
                    x1: centroid.x,
                    y1: flip_y(centroid.y, height),
                    x2: star.node.x,
                    y2: flip_y(star.node.y, height),
                    color,
                });
            }

            if let Some(centroid) = scene.labelled_centroid() {
                let text = centroid.region.label().to_uppercase();
                ctx.print(
                    centered_x(centroid.x, &text, cell_width),
                    flip_y(centroid.y, height),
                    Span::styled(
                        text,
                        Style::default().fg(accent.highlight()).add_modifier(Modifier::BOLD),
                    ),
                );
            }

            ctx.layer();

            for star in &scene.stars {
                let (x, y) = (star.node.x, flip_y(star.node.y, height));
                let radius = star.node.radius;

                if star.has_aura() {
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: radius * AURA_SCALE,
                        color: accent.pulse(pulse_phase),
                    });
                }

                // Concentric rings approximate a filled disc
                let color = fade(
                    polarity_rgb(star.record.energy_leads()),
                    star.node.color_weight * star.style.brightness,
                );
                let mut r = radius;
                while r > 0.0 {
                    ctx.draw(&Circle { x, y, radius: r, color });
                    r -= 4.0;
                }
                ctx.draw(&Points { coords: &[(x, y)], color });

                if star.style.outline {
                    let ring = dashed_ring(x, y, radius + RING_GAP, pulse_phase);
                    ctx.draw(&Points { coords: &ring, color: WHITE });
                }

                if star.style.show_label {
                    let label_y = flip_y(star.node.y - radius - RING_GAP - 8.0, height);
                    ctx.print(
                        centered_x(x, star.record.id, cell_width),
                        label_y.min(height),
                        Span::styled(
                            star.record.id,
                            Style::default().fg(SNOW).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            }
        });

    f.render_widget(canvas, chunks[1]);

    ChartViewport {
        area: inner,
        x_bounds: [0.0, width],
        y_bounds: [0.0, height],
    }
}

/// Points of a dashed circle, rotated by the pulse phase
fn dashed_ring(x: f64, y: f64, radius: f64, phase: f32) -> Vec<(f64, f64)> {
    let offset = f64::from(phase) * TAU;
    let dash = TAU / (RING_DASHES * 2) as f64;

    (0..RING_DASHES)
        .flat_map(|i| {
            let start = offset + 2.0 * dash * i as f64;
            (0..4).map(move |s| {
                let a = start + dash * f64::from(s) / 3.0;
                (x + radius * a.cos(), y + radius * a.sin())
            })
        })
        .collect()
}
