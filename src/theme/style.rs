// Element styling
//
// Per-frame emphasis of chart elements is looked up from a table keyed by
// (selected, hovered, dimmed) instead of being decided inline by each
// renderer.

use ratatui::style::Color;

use super::{EMERALD_RGB, NAVY_DARK_RGB, SIGNAL_BLUE_RGB};

/// Interaction state of one chart element for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementState {
    /// The element's record is the current selection
    pub selected: bool,
    /// The element belongs to the hovered region
    pub hovered: bool,
    /// Another region is hovered
    pub dimmed: bool,
}

impl ElementState {
    fn table_index(&self) -> usize {
        (usize::from(self.selected) << 2) | (usize::from(self.hovered) << 1) | usize::from(self.dimmed)
    }
}

/// How strongly a centroid-to-member link is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEmphasis {
    /// Barely visible, region is dimmed
    Ghost,
    /// Resting state
    Faint,
    /// Region is hovered
    Strong,
}

/// Resolved visual treatment of a chart element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStyle {
    /// Multiplier applied to the element's own color weight
    pub brightness: f64,
    /// Draw the selection ring/outline
    pub outline: bool,
    /// Show the id label next to the element
    pub show_label: bool,
    pub link: LinkEmphasis,
}

const fn style(brightness: f64, outline: bool, show_label: bool, link: LinkEmphasis) -> ElementStyle {
    ElementStyle {
        brightness,
        outline,
        show_label,
        link,
    }
}

/// Brightness of elements outside the hovered region
pub const DIMMED_BRIGHTNESS: f64 = 0.15;

// Indexed by selected << 2 | hovered << 1 | dimmed.
// hovered and dimmed never co-occur; those rows resolve as hovered.
const STYLE_TABLE: [ElementStyle; 8] = [
    style(1.0, false, false, LinkEmphasis::Faint),
    style(DIMMED_BRIGHTNESS, false, false, LinkEmphasis::Ghost),
    style(1.0, false, true, LinkEmphasis::Strong),
    style(1.0, false, true, LinkEmphasis::Strong),
    style(1.0, true, true, LinkEmphasis::Faint),
    style(DIMMED_BRIGHTNESS, true, true, LinkEmphasis::Ghost),
    style(1.0, true, true, LinkEmphasis::Strong),
    style(1.0, true, true, LinkEmphasis::Strong),
];

/// Look up the treatment for an element state
pub fn element_style(state: ElementState) -> ElementStyle {
    STYLE_TABLE[state.table_index()]
}

/// Interpolate between two RGB colors based on a ratio (0.0 ~ 1.0)
///
/// # Arguments
/// * `color1` - Starting color as (r, g, b) tuple
/// * `color2` - Ending color as (r, g, b) tuple
/// * `ratio` - Interpolation ratio (0.0 = color1, 1.0 = color2)
pub fn interpolate_color(color1: (u8, u8, u8), color2: (u8, u8, u8), ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let r = (color1.0 as f32 + (color2.0 as f32 - color1.0 as f32) * ratio) as u8;
    let g = (color1.1 as f32 + (color2.1 as f32 - color1.1 as f32) * ratio) as u8;
    let b = (color1.2 as f32 + (color2.2 as f32 - color1.2 as f32) * ratio) as u8;
    Color::Rgb(r, g, b)
}

/// Blend `color` toward the backdrop; weight 1.0 keeps it unchanged
pub fn fade(color: (u8, u8, u8), weight: f64) -> Color {
    interpolate_color(NAVY_DARK_RGB, color, weight as f32)
}

/// Gap polarity color as RGB
pub fn polarity_rgb(energy_leads: bool) -> (u8, u8, u8) {
    if energy_leads {
        EMERALD_RGB
    } else {
        SIGNAL_BLUE_RGB
    }
}

/// Gap polarity color
pub fn polarity_color(energy_leads: bool) -> Color {
    let (r, g, b) = polarity_rgb(energy_leads);
    Color::Rgb(r, g, b)
}
