// Inspector rendering module
//
// Renders the detail panel for the selected country: identity, signed gap
// with its narrative, demographics, access meters and an insight line.
//
// The panel only reads the shared selection; closing it goes through the
// same setter as every chart.

use crate::app::AppState;
use crate::data::CountryRecord;
use crate::theme::{polarity_color, EMERALD, INDIGO, MUTED_GRAY, SIGNAL_BLUE, SLATE, SNOW};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Gap below which a country is described as leapfrogging
pub const LEAPFROG_THRESHOLD: f64 = -5.0;

const ENERGY_NOTE: &str = "Energy infrastructure is more prevalent than high-speed internet.";
const CONNECTIVITY_NOTE: &str = "Digital connectivity has outpaced physical power grid reliability.";
const LEAPFROG_INSIGHT: &str =
    "This region exhibits \"leapfrog\" behavior, adopting mobile tech faster than traditional utilities.";
const BALANCED_INSIGHT: &str = "Balanced growth suggests synchronized infrastructure policy.";

// ============================================================================
// Inspector View Model
// ============================================================================

/// View model for the inspector panel
///
/// Contains all text and colors needed to render the panel, extracted from
/// the selected record. This separates data extraction from rendering logic.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorView {
    pub name: String,
    pub region: String,
    /// Signed gap, e.g. "+15.0%" or "-19.6%"
    pub gap_text: String,
    pub gap_color: Color,
    pub gap_note: &'static str,
    /// e.g. "331M"
    pub population_text: String,
    /// e.g. "$63k"
    pub gdp_text: String,
    /// Energy access, 0-100
    pub electricity: f64,
    /// 4G coverage, 0-100
    pub connectivity: f64,
    pub insight: &'static str,
}

/// Signed gap text; only strictly positive gaps get a plus sign
pub fn format_gap(gap: f64) -> String {
    if gap > 0.0 {
        format!("+{gap:.1}%")
    } else {
        format!("{gap:.1}%")
    }
}

/// Build the view model for a selection; `None` when nothing is selected
pub fn build_inspector_view(selected: Option<&CountryRecord>) -> Option<InspectorView> {
    let record = selected?;
    let energy_leads = record.energy_leads();

    Some(InspectorView {
        name: record.name.to_string(),
        region: record.region.label().to_uppercase(),
        gap_text: format_gap(record.gap),
        gap_color: polarity_color(energy_leads),
        gap_note: if energy_leads { ENERGY_NOTE } else { CONNECTIVITY_NOTE },
        population_text: format!("{}M", record.population),
        gdp_text: format!("${}k", record.gdp_per_capita),
        electricity: record.electricity_access,
        connectivity: record.connectivity_access,
        insight: if record.gap < LEAPFROG_THRESHOLD {
            LEAPFROG_INSIGHT
        } else {
            BALANCED_INSIGHT
        },
    })
}

pub fn render_inspector(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(SLATE))
        .title(Span::styled(
            "━ Inspector ━",
            Style::default().fg(app.settings.accent.highlight()).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(view) = build_inspector_view(app.selected()) else {
        render_placeholder(f, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Identity, gap, demographics
            Constraint::Length(2), // Energy meter
            Constraint::Length(2), // 4G meter
            Constraint::Min(0),    // Insight
        ])
        .split(inner);

    let label = Style::default().fg(MUTED_GRAY);
    let info = vec![
        Line::from(Span::styled(
            view.name.clone(),
            Style::default().fg(SNOW).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            view.region.clone(),
            Style::default().fg(app.settings.accent.highlight()),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("INFRASTRUCTURE GAP  ", label),
            Span::styled(
                view.gap_text.clone(),
                Style::default().fg(view.gap_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(view.gap_note, Style::default().fg(MUTED_GRAY))),
        Line::from(""),
        Line::from(vec![
            Span::styled("POPULATION ", label),
            Span::styled(view.population_text.clone(), Style::default().fg(SNOW)),
            Span::styled("  GDP / CAP ", label),
            Span::styled(view.gdp_text.clone(), Style::default().fg(SNOW)),
        ]),
    ];
    f.render_widget(Paragraph::new(info).wrap(Wrap { trim: true }), chunks[0]);

    render_meter(f, chunks[1], "Energy Access", view.electricity, EMERALD);
    render_meter(f, chunks[2], "4G Coverage", view.connectivity, SIGNAL_BLUE);

    let insight = Paragraph::new(vec![
        Line::from(Span::styled("INSIGHT", Style::default().fg(INDIGO))),
        Line::from(Span::styled(
            format!("\"{}\"", view.insight),
            Style::default().fg(SNOW).add_modifier(Modifier::ITALIC),
        )),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(insight, chunks[3]);
}

fn render_meter(f: &mut Frame, area: Rect, label: &str, percent: f64, color: Color) {
    let gauge = Gauge::default()
        .block(Block::default().title(Span::styled(
            format!("{label}: {percent}%"),
            Style::default().fg(SNOW),
        )))
        .gauge_style(Style::default().fg(color).bg(SLATE))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label("");
    f.render_widget(gauge, area);
}

fn render_placeholder(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("( ? )", Style::default().fg(MUTED_GRAY))),
        Line::from(""),
        Line::from(Span::styled("SELECT A NODE", Style::default().fg(MUTED_GRAY))),
        Line::from(Span::styled("TO DECODE DATA", Style::default().fg(MUTED_GRAY))),
        Line::from(""),
        Line::from(Span::styled("click a chart or use ↑↓", Style::default().fg(SLATE))),
    ];
    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}
