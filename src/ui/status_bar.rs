// Status Bar rendering module
//
// Renders the bottom status bar with keyboard shortcuts and toggle indicators.

use crate::app::{AppState, ViewMode};
use crate::theme::{EMERALD, MUTED_GRAY, SIGNAL_BLUE, SLATE, SNOW};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

struct Hint {
    priority: u8,
    key: &'static str,
    desc: &'static str,
}

/// Key hints that fit in `available_width` columns, highest priority first
///
/// Hints keep their declared order; lower-priority ones are dropped first.
pub fn build_hint_spans(view: ViewMode, accent: Color, available_width: usize) -> Vec<Span<'static>> {
    let tilt_hint = if view.shows_gravity() { "Tilt | " } else { "" };

    let hints = [
        Hint { priority: 1, key: "Q:", desc: "Quit | " },
        Hint { priority: 1, key: "↑↓:", desc: "Select | " },
        Hint { priority: 1, key: "1-4:", desc: "View | " },
        Hint { priority: 2, key: "Esc:", desc: "Close | " },
        Hint { priority: 2, key: "R:", desc: "Region | " },
        Hint { priority: 2, key: "[]:", desc: tilt_hint },
        Hint { priority: 3, key: "L:", desc: "Labels | " },
        Hint { priority: 3, key: "G:", desc: "Grid | " },
        Hint { priority: 3, key: "A:", desc: "Accent | " },
    ];

    let mut spans = Vec::new();
    let mut used = 0;
    let mut included = [false; 9];

    // Decide by priority, then emit in declared order
    for priority in 1..=3 {
        for (idx, hint) in hints.iter().enumerate() {
            if hint.priority != priority || hint.desc.is_empty() {
                continue;
            }
            let hint_width = hint.key.width() + hint.desc.width();
            if used + hint_width <= available_width {
                included[idx] = true;
                used += hint_width;
            }
        }
    }

    for (hint, _) in hints.iter().zip(included).filter(|(_, keep)| *keep) {
        spans.push(Span::styled(
            hint.key,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(hint.desc, Style::default().fg(MUTED_GRAY)));
    }
    spans
}

/// Build toggle status indicator spans for the status bar
/// Shows [L:ON/OFF] [G:ON/OFF] [A:accent]
pub fn build_toggle_indicators(app: &AppState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (key, enabled) in [("L", app.settings.show_labels), ("G", app.settings.show_grid)] {
        let (state, color) = if enabled { ("ON", EMERALD) } else { ("OFF", SNOW) };
        spans.push(Span::styled(format!("[{key}:"), Style::default().fg(SNOW)));
        spans.push(Span::styled(state, Style::default().fg(color).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled("] ", Style::default().fg(SNOW)));
    }

    let accent = app.settings.accent;
    spans.push(Span::styled("[A:", Style::default().fg(SNOW)));
    spans.push(Span::styled(
        accent.label(),
        Style::default().fg(accent.highlight()).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("]", Style::default().fg(SNOW)));

    if let Some(record) = app.selected() {
        let color = if record.energy_leads() { EMERALD } else { SIGNAL_BLUE };
        spans.push(Span::styled(" ◆ ", Style::default().fg(color)));
        spans.push(Span::styled(record.id, Style::default().fg(SNOW).add_modifier(Modifier::BOLD)));
    }

    spans
}

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let toggles = build_toggle_indicators(app);
    let toggles_width: usize = toggles.iter().map(|s| s.content.width()).sum();

    // Borders, icon and the gap before the indicators
    let available_width = usize::from(area.width).saturating_sub(6 + toggles_width);

    let accent = app.settings.accent.highlight();
    let mut spans = vec![Span::styled(" ◈ ", Style::default().fg(accent))];
    spans.extend(build_hint_spans(app.view_mode, accent, available_width));
    spans.push(Span::raw(" "));
    spans.extend(toggles);

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(SLATE)),
        )
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}
