// Accent colors
//
// The accent is an external display choice. It picks the highlight color of
// constellation links/auras and the gravity pivot; it never changes geometry.

use clap::ValueEnum;
use ratatui::style::Color;

use super::interpolate_color;

/// User-selectable highlight theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Accent {
    #[default]
    Cyan,
    Magenta,
    Blue,
}

impl Accent {
    /// Bright variant: links, auras, pivot light
    pub fn highlight(&self) -> Color {
        let (r, g, b) = self.highlight_rgb();
        Color::Rgb(r, g, b)
    }

    /// Deep variant: resting links, swatch borders
    pub fn base(&self) -> Color {
        let (r, g, b) = self.base_rgb();
        Color::Rgb(r, g, b)
    }

    pub fn highlight_rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Cyan => (0, 243, 255),
            Self::Magenta => (255, 0, 255),
            Self::Blue => (0, 102, 255),
        }
    }

    pub fn base_rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Cyan => (15, 118, 110),
            Self::Magenta => (107, 33, 168),
            Self::Blue => (30, 58, 138),
        }
    }

    /// Color between base and highlight for a pulse phase (0.0 ~ 1.0)
    ///
    /// Rises to the highlight at mid-phase and falls back to the base.
    pub fn pulse(&self, phase: f32) -> Color {
        let ratio = 1.0 - (2.0 * phase.clamp(0.0, 1.0) - 1.0).abs();
        interpolate_color(self.base_rgb(), self.highlight_rgb(), ratio)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::Blue => "blue",
        }
    }

    /// Next accent in swatch order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Cyan => Self::Magenta,
            Self::Magenta => Self::Blue,
            Self::Blue => Self::Cyan,
        }
    }

    pub const ALL: [Accent; 3] = [Accent::Cyan, Accent::Magenta, Accent::Blue];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_accent() {
        let mut accent = Accent::default();
        let mut seen = vec![accent];
        for _ in 0..2 {
            accent = accent.next();
            seen.push(accent);
        }
        assert_eq!(seen, Accent::ALL.to_vec());
        assert_eq!(accent.next(), Accent::Cyan);
    }

    #[test]
    fn test_pulse_peaks_mid_phase() {
        let accent = Accent::Magenta;
        assert_eq!(accent.pulse(0.0), accent.base());
        assert_eq!(accent.pulse(0.5), accent.highlight());
        assert_eq!(accent.pulse(1.0), accent.base());
    }

    #[test]
    fn test_highlight_differs_from_base() {
        for accent in Accent::ALL {
            assert_ne!(accent.highlight(), accent.base());
        }
    }
}
