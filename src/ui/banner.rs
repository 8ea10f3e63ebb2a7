// Banner rendering module
//
// Renders the top banner: title, subtitle, view tabs and accent swatches.

use crate::app::{AppState, ViewMode};
use crate::theme::{Accent, MUTED_GRAY, SLATE, SNOW};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Tab strip spans; the active view is bracketed and highlighted
pub fn build_tab_spans(active: ViewMode, accent: Accent) -> Vec<Span<'static>> {
    let mut spans = vec![Span::raw("  ")];
    for (idx, mode) in ViewMode::ALL.iter().enumerate() {
        let text = format!("{}:{}", idx + 1, mode.title());
        if *mode == active {
            spans.push(Span::styled(
                format!("[{text}]"),
                Style::default().fg(accent.highlight()).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(format!(" {text} "), Style::default().fg(MUTED_GRAY)));
        }
        spans.push(Span::raw(" "));
    }
    spans
}

/// Accent swatches; the active one is drawn filled
pub fn build_swatch_spans(active: Accent) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled("  accent ", Style::default().fg(SLATE))];
    for accent in Accent::ALL {
        let glyph = if accent == active { "● " } else { "○ " };
        spans.push(Span::styled(glyph, Style::default().fg(accent.highlight())));
    }
    spans
}

pub fn render_banner(f: &mut Frame, area: Rect, app: &AppState) {
    let accent = app.settings.accent;

    let mut tab_line = build_tab_spans(app.view_mode, accent);
    tab_line.extend(build_swatch_spans(accent));

    let banner_text = vec![
        Line::from(vec![
            Span::styled(
                "  DIGITAL DIVIDE ATLAS",
                Style::default().fg(SNOW).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "   MULTIDIMENSIONAL INFRASTRUCTURE VISUALIZER",
                Style::default().fg(accent.highlight()),
            ),
        ]),
        Line::from(tab_line),
    ];

    let banner = Paragraph::new(banner_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(accent.base())),
        )
        .alignment(Alignment::Left);

    f.render_widget(banner, area);
}
