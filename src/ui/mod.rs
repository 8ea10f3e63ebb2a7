// UI rendering module
//
// This module contains all UI rendering components for the atlas.
// The main draw() function orchestrates rendering of all UI panels and
// records where each chart landed so mouse input can be resolved later.

mod banner;
pub mod constellation;
pub mod gravity;
mod inspector;
pub mod lanes;
mod report;
mod status_bar;

use crate::app::{AppState, ChartKind, Selection, ViewMode};
use crate::data::{CountryRecord, Region};
use crate::theme::ElementState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use banner::render_banner;
use constellation::render_constellation;
use gravity::render_gravity;
use inspector::render_inspector;
use lanes::render_lanes;
use report::render_report;
use status_bar::render_status_bar;

/// Width of the inspector column
const INSPECTOR_WIDTH: u16 = 38;

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let size = f.area();
    app.hit_map.clear();

    // Main layout: banner, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Banner
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    render_banner(f, chunks[0], app);

    // Body: charts + inspector
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(INSPECTOR_WIDTH)])
        .split(chunks[1]);

    let viewports = match app.view_mode {
        ViewMode::Report => render_report(f, body_chunks[0], app),
        ViewMode::Constellation => vec![(
            ChartKind::Constellation,
            render_constellation(f, body_chunks[0], app, "Infrastructure Constellations"),
        )],
        ViewMode::Gravity => vec![(
            ChartKind::Gravity,
            render_gravity(f, body_chunks[0], app, "Infrastructure Gravity"),
        )],
        ViewMode::Lanes => vec![(
            ChartKind::Lanes,
            render_lanes(f, body_chunks[0], app, "Regional Lanes"),
        )],
    };
    for (kind, viewport) in viewports {
        app.hit_map.record(kind, viewport);
    }

    render_inspector(f, body_chunks[1], app);
    render_status_bar(f, chunks[2], app);
}

// ============================================================================
// Shared chart helpers
// ============================================================================

/// Interaction state of a record for this frame
pub(crate) fn element_state(
    record: &CountryRecord,
    selection: &Selection,
    hovered_region: Option<Region>,
) -> ElementState {
    ElementState {
        selected: selection.is_selected(record.id),
        hovered: hovered_region == Some(record.region),
        dimmed: hovered_region.is_some_and(|region| region != record.region),
    }
}

/// Convert between layout y (0 at the top) and canvas y (0 at the bottom)
pub(crate) fn flip_y(y: f64, height: f64) -> f64 {
    height - y
}

/// Width of `text` in chart units, given the chart width of one cell
pub(crate) fn text_span(text: &str, cell_width: f64) -> f64 {
    text.width() as f64 * cell_width
}

/// Left edge that centers `text` on `x`
pub(crate) fn centered_x(x: f64, text: &str, cell_width: f64) -> f64 {
    x - text_span(text, cell_width) / 2.0
}

/// Block title for a chart section
pub(crate) fn section_title(title: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!("━ {title} ━"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::COUNTRIES;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &mut AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_every_view() {
        for mode in ViewMode::ALL {
            let mut app = AppState::new();
            app.set_view_mode(mode);
            let screen = render(&mut app, 160, 60);
            assert!(screen.contains("DIGITAL DIVIDE ATLAS"));
            assert!(screen.contains("SELECT A NODE"));
        }
    }

    #[test]
    fn test_draw_records_viewports_for_mounted_charts() {
        let mut app = AppState::new();
        render(&mut app, 160, 80);
        for kind in [ChartKind::Constellation, ChartKind::Gravity, ChartKind::Lanes] {
            assert!(app.hit_map.viewport(kind).is_some());
        }

        app.set_view_mode(ViewMode::Lanes);
        render(&mut app, 160, 80);
        assert!(app.hit_map.viewport(ChartKind::Lanes).is_some());
        assert!(app.hit_map.viewport(ChartKind::Gravity).is_none());
    }

    #[test]
    fn test_draw_with_selection_fills_inspector() {
        let mut app = AppState::new();
        let kenya = *COUNTRIES.iter().find(|r| r.id == "KEN").unwrap();
        app.select(kenya);
        let screen = render(&mut app, 160, 60);
        assert!(screen.contains("Kenya"));
        assert!(!screen.contains("SELECT A NODE"));
    }

    #[test]
    fn test_draw_empty_dataset() {
        let mut app = AppState::with_records(Vec::new());
        let screen = render(&mut app, 160, 80);
        assert!(screen.contains("NO RECORDS LOADED"));
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let mut app = AppState::new();
        render(&mut app, 20, 8);
    }

    #[test]
    fn test_element_state_dims_other_regions() {
        let selection = Selection::default();
        let usa = COUNTRIES[0];
        let state = element_state(&usa, &selection, Some(Region::SouthAsia));
        assert!(state.dimmed && !state.hovered && !state.selected);
        let state = element_state(&usa, &selection, Some(usa.region));
        assert!(state.hovered && !state.dimmed);
        let state = element_state(&usa, &selection, None);
        assert_eq!(state, ElementState::default());
    }
}
