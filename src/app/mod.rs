// Application state management
//
// This module contains the main AppState struct and re-exports
// configuration types from the config submodule.

pub mod config;
pub mod event;
pub mod hitmap;
pub mod selection;
pub mod tilt;

pub use config::{ChartLayouts, ViewMode, VisualSettings};
pub use hitmap::{ChartKind, ChartViewport, HitMap};
pub use selection::Selection;
pub use tilt::BeamTilt;

use crate::data::{CountryRecord, Region, COUNTRIES};
use config::{PULSE_STEP, UI_INTERVAL_MS};
use std::time::Instant;

/// Main application state
pub struct AppState {
    /// Whether the application is running
    pub running: bool,

    /// Loaded dataset, in table order
    pub records: Vec<CountryRecord>,

    /// Which chart(s) are on screen
    pub view_mode: ViewMode,

    /// Shared selection; written only through `select` / `clear_selection`
    selection: Selection,

    /// Region under the pointer (or cycled with 'r'), dims the rest
    pub hovered_region: Option<Region>,

    /// Gravity beam tilt and drag session
    pub tilt: BeamTilt,

    /// Labels, grid, accent
    pub settings: VisualSettings,

    /// Chart layout constants
    pub layouts: ChartLayouts,

    /// Canvas placements from the last draw
    pub hit_map: HitMap,

    /// Pulse phase for aura animation (0.0 ~ 1.0)
    pub pulse_phase: f32,

    /// Last tick time for pulse animation
    pub last_tick: Instant,
}

impl AppState {
    /// Create a new AppState over the built-in country table
    pub fn new() -> Self {
        Self::with_records(COUNTRIES.to_vec())
    }

    /// Create a new AppState over an arbitrary record set
    pub fn with_records(records: Vec<CountryRecord>) -> Self {
        Self {
            running: true,
            records,
            view_mode: ViewMode::default(),
            selection: Selection::default(),
            hovered_region: None,
            tilt: BeamTilt::default(),
            settings: VisualSettings::default(),
            layouts: ChartLayouts::default(),
            hit_map: HitMap::default(),
            pulse_phase: 0.0,
            last_tick: Instant::now(),
        }
    }

    /// Update state on each tick (called every ~100ms)
    pub fn on_tick(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_tick).as_millis() >= u128::from(UI_INTERVAL_MS) {
            self.last_tick = now;
            self.pulse_phase += PULSE_STEP;
            if self.pulse_phase >= 1.0 {
                self.pulse_phase = 0.0;
            }
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Currently selected record, if any
    pub fn selected(&self) -> Option<&CountryRecord> {
        self.selection.current()
    }

    /// Make `record` the selection; every view and the inspector follow
    pub fn select(&mut self, record: CountryRecord) {
        tracing::debug!(id = record.id, "Selected country");
        self.selection.select(record);
    }

    pub fn clear_selection(&mut self) {
        if self.selection.current().is_some() {
            tracing::debug!("Selection cleared");
        }
        self.selection.clear();
    }

    fn selected_index(&self) -> Option<usize> {
        let current = self.selection.current()?;
        self.records.iter().position(|r| r.id == current.id)
    }

    /// Move the selection down the table, starting at the first record
    pub fn select_next_record(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let next = match self.selected_index() {
            None => 0,
            Some(idx) => (idx + 1).min(self.records.len() - 1),
        };
        self.select(self.records[next]);
    }

    /// Move the selection up the table, starting at the last record
    pub fn select_previous_record(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let prev = match self.selected_index() {
            None => self.records.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };
        self.select(self.records[prev]);
    }

    // ========================================================================
    // View and display toggles
    // ========================================================================

    /// Switch the main area; an in-flight beam drag is released when the
    /// gravity chart leaves the screen, and region hover when the
    /// constellation does
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if !mode.shows_gravity() {
            self.tilt.end_drag();
        }
        if !mode.shows_constellation() {
            self.hovered_region = None;
        }
        if mode != self.view_mode {
            tracing::info!(view = mode.title(), "View changed");
        }
        self.view_mode = mode;
    }

    pub fn cycle_view_mode(&mut self) {
        self.set_view_mode(self.view_mode.next());
    }

    /// Step the hovered region through display order, then back to none
    pub fn cycle_hovered_region(&mut self) {
        self.hovered_region = match self.hovered_region {
            None => Region::ALL.first().copied(),
            Some(region) => region.next(),
        };
    }

    pub fn toggle_labels(&mut self) {
        self.settings.show_labels = !self.settings.show_labels;
    }

    pub fn toggle_grid(&mut self) {
        self.settings.show_grid = !self.settings.show_grid;
    }

    pub fn cycle_accent(&mut self) {
        self.settings.accent = self.settings.accent.next();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
