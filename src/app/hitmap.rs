// Chart hit map
//
// Each frame the renderers record where their canvases landed on screen.
// Mouse events are resolved against those rectangles and converted from
// terminal cells back into chart coordinates, so picking works on the same
// numbers the painters used.

use ratatui::layout::Rect;

/// Which chart a viewport belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Constellation,
    Gravity,
    Lanes,
}

/// Screen placement of a canvas and the coordinate range it shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartViewport {
    /// Inner canvas area in terminal cells
    pub area: Rect,
    /// [left, right] in chart units
    pub x_bounds: [f64; 2],
    /// [bottom, top] in chart units (y grows upward)
    pub y_bounds: [f64; 2],
}

impl ChartViewport {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height
    }

    /// Chart coordinates at the center of a terminal cell
    ///
    /// Returns `None` for cells outside the viewport.
    pub fn to_canvas(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        if !self.contains(column, row) {
            return None;
        }
        let fx = (f64::from(column - self.area.x) + 0.5) / f64::from(self.area.width);
        let fy = (f64::from(row - self.area.y) + 0.5) / f64::from(self.area.height);
        let [left, right] = self.x_bounds;
        let [bottom, top] = self.y_bounds;
        Some((left + fx * (right - left), top - fy * (top - bottom)))
    }
}

/// Viewports recorded during the last draw
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitMap {
    constellation: Option<ChartViewport>,
    gravity: Option<ChartViewport>,
    lanes: Option<ChartViewport>,
}

impl HitMap {
    /// Forget every viewport; called at the start of each draw
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn record(&mut self, kind: ChartKind, viewport: ChartViewport) {
        let slot = match kind {
            ChartKind::Constellation => &mut self.constellation,
            ChartKind::Gravity => &mut self.gravity,
            ChartKind::Lanes => &mut self.lanes,
        };
        *slot = Some(viewport);
    }

    pub fn viewport(&self, kind: ChartKind) -> Option<&ChartViewport> {
        match kind {
            ChartKind::Constellation => self.constellation.as_ref(),
            ChartKind::Gravity => self.gravity.as_ref(),
            ChartKind::Lanes => self.lanes.as_ref(),
        }
    }

    /// Find the chart under a terminal cell and the chart coordinates there
    pub fn locate(&self, column: u16, row: u16) -> Option<(ChartKind, (f64, f64))> {
        [ChartKind::Constellation, ChartKind::Gravity, ChartKind::Lanes]
            .into_iter()
            .find_map(|kind| {
                self.viewport(kind)
                    .and_then(|vp| vp.to_canvas(column, row))
                    .map(|point| (kind, point))
            })
    }
}
