// Theme module - Color constants and theme re-exports
//
// Palette for the atlas: a dark navy backdrop, emerald for energy-leading
// records, signal blue for connectivity-leading ones, and a user-selected
// neon accent for highlights.

pub mod accent;
pub mod style;

use ratatui::style::Color;

/// Backdrop; faded elements blend toward it
/// RGB: (10, 14, 39)
pub const NAVY_DARK_RGB: (u8, u8, u8) = (10, 14, 39);
pub const NAVY_DARK: Color = Color::Rgb(10, 14, 39);

/// Energy leads (gap >= 0)
/// RGB: (16, 185, 129)
pub const EMERALD_RGB: (u8, u8, u8) = (16, 185, 129);
pub const EMERALD: Color = Color::Rgb(16, 185, 129);

/// Connectivity leads (gap < 0)
/// RGB: (59, 130, 246)
pub const SIGNAL_BLUE_RGB: (u8, u8, u8) = (59, 130, 246);
pub const SIGNAL_BLUE: Color = Color::Rgb(59, 130, 246);

/// Bar roof light on the energy side
pub const EMERALD_LIGHT: Color = Color::Rgb(110, 231, 183);

/// Bar roof light on the connectivity side
pub const SIGNAL_BLUE_LIGHT: Color = Color::Rgb(147, 197, 253);

/// Borders, axes, beam
/// RGB: (71, 85, 105)
pub const SLATE: Color = Color::Rgb(71, 85, 105);

/// Secondary text
/// RGB: (156, 163, 175)
pub const MUTED_GRAY: Color = Color::Rgb(156, 163, 175);

/// Tertiary text, grid lines
pub const DIM_GRAY: Color = Color::Rgb(75, 85, 99);

/// Primary text
/// RGB: (226, 232, 240)
pub const SNOW: Color = Color::Rgb(226, 232, 240);

/// Selection outlines and labels
pub const WHITE: Color = Color::Rgb(255, 255, 255);

/// Links of dimmed regions, barely above the backdrop
pub const GHOST: Color = Color::Rgb(28, 34, 62);

/// Insight callout
pub const INDIGO: Color = Color::Rgb(165, 180, 252);

pub use accent::Accent;
pub use style::{
    element_style, fade, interpolate_color, polarity_color, polarity_rgb, ElementState,
    ElementStyle, LinkEmphasis,
};
