// Report page
//
// Mounts all three charts on one page under a short introduction. The
// charts share the application's single selection, so a pick in any of
// them is reflected in the other two on the next frame.

use super::constellation::render_constellation;
use super::gravity::render_gravity;
use super::lanes::render_lanes;
use crate::app::{AppState, ChartKind, ChartViewport};
use crate::theme::{MUTED_GRAY, SNOW};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the report and return the viewport of every chart it mounted
pub fn render_report(f: &mut Frame, area: Rect, app: &AppState) -> Vec<(ChartKind, ChartViewport)> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),       // Introduction
            Constraint::Percentage(40),  // Constellation
            Constraint::Percentage(32),  // Gravity
            Constraint::Min(0),          // Lanes
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            " THE DIGITAL DIVIDE",
            Style::default().fg(SNOW).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Physical energy infrastructure against digital connectivity, in three projections.",
            Style::default().fg(MUTED_GRAY),
        )),
    ]);
    f.render_widget(intro, chunks[0]);

    vec![
        (
            ChartKind::Constellation,
            render_constellation(f, chunks[1], app, "01. Constellation Map"),
        ),
        (
            ChartKind::Gravity,
            render_gravity(f, chunks[2], app, "02. Infrastructure Gravity"),
        ),
        (
            ChartKind::Lanes,
            render_lanes(f, chunks[3], app, "03. Regional Lanes"),
        ),
    ]
}
