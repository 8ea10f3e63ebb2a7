// Application configuration types
//
// This module contains configuration structs and enums for:
// - View modes
// - Visualization settings (labels, grid, accent)
// - Chart layout constants
// - Tilt and pointer tuning

use crate::projection::{LaneLayout, ScatterLayout, SeesawLayout};
use crate::theme::Accent;
use clap::ValueEnum;
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// UI refresh interval; also the input poll timeout
pub const UI_INTERVAL_MS: u64 = 100;

/// Pulse phase advance per tick (full cycle every 20 ticks)
pub const PULSE_STEP: f32 = 0.05;

/// Beam tilt at startup, in degrees
pub const INITIAL_TILT_DEG: f64 = 10.0;

/// Tilt limit in either direction, in degrees
pub const MAX_TILT_DEG: f64 = 25.0;

/// Tilt change per terminal row of vertical drag
pub const TILT_PER_ROW_DEG: f64 = 2.5;

/// Tilt change per `[` / `]` key press
pub const TILT_KEY_STEP_DEG: f64 = 2.5;

/// Extra pick radius around constellation nodes, in layout units
pub const NODE_PICK_SLACK: f64 = 12.0;

/// Extra pick margin around gravity bars, in layout units
pub const BAR_PICK_SLACK: f64 = 4.0;

/// Pick tolerance around lane markers, in percent of the track
pub const LANE_PICK_TOLERANCE: f64 = 3.0;

// ============================================================================
// Enums
// ============================================================================

/// Which chart(s) fill the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewMode {
    /// All three charts on one page
    #[default]
    Report,
    Constellation,
    Gravity,
    Lanes,
}

impl ViewMode {
    pub const ALL: [ViewMode; 4] = [
        ViewMode::Report,
        ViewMode::Constellation,
        ViewMode::Gravity,
        ViewMode::Lanes,
    ];

    /// Tab caption
    pub fn title(&self) -> &'static str {
        match self {
            Self::Report => "FULL REPORT",
            Self::Constellation => "CONSTELLATION",
            Self::Gravity => "GRAVITY",
            Self::Lanes => "LINEAR",
        }
    }

    /// Next tab, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Report => Self::Constellation,
            Self::Constellation => Self::Gravity,
            Self::Gravity => Self::Lanes,
            Self::Lanes => Self::Report,
        }
    }

    /// Whether the gravity chart is on screen in this mode
    pub fn shows_gravity(&self) -> bool {
        matches!(self, Self::Report | Self::Gravity)
    }

    /// Whether the constellation chart is on screen in this mode
    pub fn shows_constellation(&self) -> bool {
        matches!(self, Self::Report | Self::Constellation)
    }
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Display toggles shared by every chart
#[derive(Debug, Clone, PartialEq)]
pub struct VisualSettings {
    /// Show axis captions and id labels (toggle with 'l' key)
    pub show_labels: bool,
    /// Show quadrant annotations and crosshair (toggle with 'g' key)
    pub show_grid: bool,
    /// Highlight color (cycle with 'a' key)
    pub accent: Accent,
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            show_labels: true,
            show_grid: true,
            accent: Accent::default(),
        }
    }
}

/// Layout constants for every chart
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartLayouts {
    pub scatter: ScatterLayout,
    pub seesaw: SeesawLayout,
    pub lane: LaneLayout,
}

/// UI refresh interval as Duration
pub fn ui_interval() -> Duration {
    Duration::from_millis(UI_INTERVAL_MS)
}
