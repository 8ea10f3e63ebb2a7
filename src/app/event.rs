// Keyboard and mouse event handling
//
// This module contains the input handlers that process user input and
// update the application state accordingly. Charts never mutate state
// themselves; every selection change goes through AppState::select.

use super::config::TILT_KEY_STEP_DEG;
use super::hitmap::ChartKind;
use super::{AppState, ViewMode};
use crate::ui::{constellation, gravity, lanes};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

/// Handle keyboard events and update application state
///
/// Returns `true` if the application should continue running,
/// `false` if it should exit.
///
/// # Key Bindings
/// - `q`, `Q` - Quit the application
/// - `1`-`4` - Report / Constellation / Gravity / Lanes view
/// - `Tab` - Cycle views
/// - `Up`/`k`, `Down`/`j` - Select previous / next country
/// - `Esc`, `x` - Clear the selection
/// - `r` - Cycle the hovered region
/// - `[`, `]` - Tilt the gravity beam
/// - `l` - Toggle labels
/// - `g` - Toggle grid
/// - `a` - Cycle accent color
pub fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.running = false;
            false
        }
        KeyCode::Char(c @ '1'..='4') => {
            let idx = (c as usize) - ('1' as usize);
            app.set_view_mode(ViewMode::ALL[idx]);
            true
        }
        KeyCode::Tab => {
            app.cycle_view_mode();
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_record();
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_record();
            true
        }
        KeyCode::Esc | KeyCode::Char('x') => {
            app.clear_selection();
            true
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.cycle_hovered_region();
            true
        }
        KeyCode::Char('[') => {
            app.tilt.nudge(-TILT_KEY_STEP_DEG);
            true
        }
        KeyCode::Char(']') => {
            app.tilt.nudge(TILT_KEY_STEP_DEG);
            true
        }
        KeyCode::Char('l') | KeyCode::Char('L') => {
            app.toggle_labels();
            true
        }
        KeyCode::Char('g') | KeyCode::Char('G') => {
            app.toggle_grid();
            true
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.cycle_accent();
            true
        }
        _ => true,
    }
}

/// Handle mouse events against the charts drawn in the last frame
///
/// - Left press: select the element under the pointer; inside the gravity
///   chart it also starts a beam drag
/// - Left drag: tilt the beam while a drag session is active
/// - Left release: end the drag session
/// - Move: hover a constellation region
pub fn handle_mouse_event(app: &mut AppState, event: MouseEvent) {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => on_press(app, event.column, event.row),
        MouseEventKind::Drag(MouseButton::Left) => {
            app.tilt.drag_to(event.row);
        }
        MouseEventKind::Up(MouseButton::Left) => app.tilt.end_drag(),
        MouseEventKind::Moved => on_move(app, event.column, event.row),
        _ => {}
    }
}

fn on_press(app: &mut AppState, column: u16, row: u16) {
    let Some((kind, point)) = app.hit_map.locate(column, row) else {
        return;
    };

    let picked = match kind {
        ChartKind::Constellation => {
            constellation::pick_star(&app.records, &app.layouts.scatter, point).copied()
        }
        ChartKind::Gravity => {
            app.tilt.begin_drag(row);
            gravity::pick_building(&app.records, &app.layouts.seesaw, app.tilt.angle(), point)
                .copied()
        }
        ChartKind::Lanes => lanes::pick_marker(&app.records, &app.layouts.lane, point).copied(),
    };

    if let Some(record) = picked {
        app.select(record);
    }
}

/// Hover follows the pointer over the constellation and ends when it leaves
fn on_move(app: &mut AppState, column: u16, row: u16) {
    let point = app
        .hit_map
        .viewport(ChartKind::Constellation)
        .and_then(|viewport| viewport.to_canvas(column, row));

    app.hovered_region = point.and_then(|point| {
        constellation::pick_star(&app.records, &app.layouts.scatter, point).map(|r| r.region)
    });
}
