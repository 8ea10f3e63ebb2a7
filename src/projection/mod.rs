// Projection engine
//
// Pure transforms from a country's metrics to visual-space values, one
// submodule per chart variant. Nothing here holds state or touches the
// terminal; the same record and layout always produce the same output.

pub mod lane;
pub mod scatter;
pub mod seesaw;

pub use lane::{lane_position, LaneLayout};
pub use scatter::{project_scatter, region_centroids, scatter_node, RegionCentroid, ScatterLayout};
pub use seesaw::{net_torque, project_seesaw, seesaw_bar, BeamSide, SeesawBar, SeesawLayout};

/// A record projected into a chart's visual space
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedNode {
    /// Id of the record this node was computed from
    pub source_id: &'static str,
    /// Horizontal position in layout units
    pub x: f64,
    /// Vertical position in layout units (0 at the top)
    pub y: f64,
    /// Marker radius in layout units
    pub radius: f64,
    /// Opacity/brightness weight
    pub color_weight: f64,
}
