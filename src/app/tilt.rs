// Beam tilt and drag sessions
//
// The gravity beam's tilt is purely cosmetic: it is driven by vertical mouse
// drags and never feeds back into projection or selection. A drag session is
// acquired on button-down and released on button-up or when the gravity
// chart leaves the screen; without a session, pointer motion is ignored.

use super::config::{INITIAL_TILT_DEG, MAX_TILT_DEG, TILT_PER_ROW_DEG};

/// Pointer state held while a drag is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Terminal row of the last pointer event seen in this session
    pub last_row: u16,
}

/// Tilt angle of the gravity beam plus the active drag session, if any
#[derive(Debug, Clone, PartialEq)]
pub struct BeamTilt {
    angle_deg: f64,
    session: Option<DragSession>,
}

impl Default for BeamTilt {
    fn default() -> Self {
        Self {
            angle_deg: INITIAL_TILT_DEG,
            session: None,
        }
    }
}

impl BeamTilt {
    /// Current tilt in degrees; positive lowers the energy (right) side
    pub fn angle(&self) -> f64 {
        self.angle_deg
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Acquire a drag session at `row`, replacing any stale one
    pub fn begin_drag(&mut self, row: u16) {
        self.session = Some(DragSession { last_row: row });
        tracing::debug!(row, "Beam drag started");
    }

    /// Apply pointer movement to the tilt
    ///
    /// Returns `false` (and changes nothing) when no session is active.
    pub fn drag_to(&mut self, row: u16) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let delta_rows = f64::from(row) - f64::from(session.last_row);
        session.last_row = row;
        self.angle_deg = clamp_tilt(self.angle_deg + delta_rows * TILT_PER_ROW_DEG);
        true
    }

    /// Release the drag session; no-op when none is active
    pub fn end_drag(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!(angle = self.angle_deg, "Beam drag released");
        }
    }

    /// Adjust the tilt directly (keyboard control)
    pub fn nudge(&mut self, delta_deg: f64) {
        self.angle_deg = clamp_tilt(self.angle_deg + delta_deg);
    }
}

fn clamp_tilt(angle_deg: f64) -> f64 {
    angle_deg.clamp(-MAX_TILT_DEG, MAX_TILT_DEG)
}
