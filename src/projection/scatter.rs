// Scatter ("constellation") projection
//
// X = electricity access, Y = connectivity access (inverted so higher
// connectivity plots higher), radius = log population, brightness = GDP.

use super::ProjectedNode;
use crate::data::{CountryRecord, Region, REGION_COUNT};

/// Population log multiplier for node radius
pub const RADIUS_LOG_FACTOR: f64 = 3.0;

/// Smallest node radius, keeps tiny populations visible
pub const MIN_RADIUS: f64 = 4.0;

/// Largest node radius, keeps giant populations from swallowing neighbours
pub const MAX_RADIUS: f64 = 30.0;

/// GDP per capita ceiling (k USD) applied before normalizing brightness
pub const GDP_CEILING: f64 = 60.0;

/// Opacity of a node with the lowest GDP
pub const BASE_OPACITY: f64 = 0.6;

/// Opacity added across the 0-100 normalized GDP range
pub const OPACITY_SPAN: f64 = 0.4;

/// Logical canvas for the scatter view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterLayout {
    pub width: f64,
    pub height: f64,
    /// Inset from every edge; reserves room for axes
    pub padding: f64,
}

impl Default for ScatterLayout {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            padding: 80.0,
        }
    }
}

/// Mean projected position of one region's members
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionCentroid {
    pub region: Region,
    pub x: f64,
    pub y: f64,
    /// Number of members averaged (always >= 1)
    pub count: usize,
}

/// Node radius for a population in millions
pub fn node_radius(population: f64) -> f64 {
    (population.ln() * RADIUS_LOG_FACTOR).clamp(MIN_RADIUS, MAX_RADIUS)
}

/// Opacity weight for a GDP per capita in k USD
///
/// Result lies in `[BASE_OPACITY, BASE_OPACITY + OPACITY_SPAN * GDP_CEILING / 100]`.
pub fn color_weight(gdp_per_capita: f64) -> f64 {
    BASE_OPACITY + (gdp_per_capita.clamp(0.0, GDP_CEILING) / 100.0) * OPACITY_SPAN
}

/// Project a single record onto the scatter canvas
pub fn scatter_node(record: &CountryRecord, layout: &ScatterLayout) -> ProjectedNode {
    let plot_width = layout.width - 2.0 * layout.padding;
    let plot_height = layout.height - 2.0 * layout.padding;

    let x = layout.padding + (record.electricity_access / 100.0) * plot_width;
    let y = layout.height - (layout.padding + (record.connectivity_access / 100.0) * plot_height);

    ProjectedNode {
        source_id: record.id,
        x,
        y,
        radius: node_radius(record.population),
        color_weight: color_weight(record.gdp_per_capita),
    }
}

/// Project every record, preserving table order
pub fn project_scatter(records: &[CountryRecord], layout: &ScatterLayout) -> Vec<ProjectedNode> {
    records.iter().map(|r| scatter_node(r, layout)).collect()
}

/// Average node positions per region
///
/// Regions without members produce no entry. Output follows region display
/// order regardless of input order.
pub fn region_centroids<'a, I>(members: I) -> Vec<RegionCentroid>
where
    I: IntoIterator<Item = (Region, &'a ProjectedNode)>,
{
    let mut sums = [(0.0_f64, 0.0_f64, 0_usize); REGION_COUNT];

    for (region, node) in members {
        let slot = &mut sums[region.index()];
        slot.0 += node.x;
        slot.1 += node.y;
        slot.2 += 1;
    }

    Region::ALL
        .iter()
        .zip(sums)
        .filter(|(_, (_, _, count))| *count > 0)
        .map(|(region, (sum_x, sum_y, count))| RegionCentroid {
            region: *region,
            x: sum_x / count as f64,
            y: sum_y / count as f64,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::COUNTRIES;
    use proptest::prelude::*;

    fn record(electricity: f64, connectivity: f64, population: f64, gdp: f64) -> CountryRecord {
        CountryRecord {
            id: "TST",
            name: "Testland",
            region: Region::SouthAsia,
            electricity_access: electricity,
            connectivity_access: connectivity,
            gap: electricity - connectivity,
            population,
            gdp_per_capita: gdp,
        }
    }

    #[test]
    fn test_corners_map_to_padding() {
        let layout = ScatterLayout::default();

        let low = scatter_node(&record(0.0, 0.0, 10.0, 1.0), &layout);
        assert_eq!(low.x, 80.0);
        assert_eq!(low.y, 520.0);

        let high = scatter_node(&record(100.0, 100.0, 10.0, 1.0), &layout);
        assert_eq!(high.x, 920.0);
        assert_eq!(high.y, 80.0);
    }

    #[test]
    fn test_higher_connectivity_plots_higher() {
        let layout = ScatterLayout::default();
        let a = scatter_node(&record(50.0, 20.0, 10.0, 1.0), &layout);
        let b = scatter_node(&record(50.0, 80.0, 10.0, 1.0), &layout);
        assert!(b.y < a.y);
    }

    #[test]
    fn test_radius_for_china_population() {
        let r = node_radius(1400.0);
        assert!((r - 1400.0_f64.ln() * 3.0).abs() < 1e-9);
        assert!((r - 21.73).abs() < 0.01);
    }

    #[test]
    fn test_radius_clamps_at_both_ends() {
        assert_eq!(node_radius(1.0), MIN_RADIUS);
        assert_eq!(node_radius(0.5), MIN_RADIUS);
        assert_eq!(node_radius(1e9), MAX_RADIUS);
        let r = node_radius(10_000.0);
        assert!((MIN_RADIUS..=MAX_RADIUS).contains(&r));
    }

    #[test]
    fn test_color_weight_ceiling() {
        assert!((color_weight(0.0) - 0.6).abs() < 1e-9);
        assert!((color_weight(60.0) - 0.84).abs() < 1e-9);
        assert_eq!(color_weight(67.0), color_weight(60.0));
        assert_eq!(color_weight(6000.0), color_weight(60.0));
    }

    #[test]
    fn test_centroid_is_mean_of_members() {
        let layout = ScatterLayout::default();
        let nodes = project_scatter(COUNTRIES, &layout);
        let centroids = region_centroids(COUNTRIES.iter().map(|r| r.region).zip(nodes.iter()));

        assert_eq!(centroids.len(), Region::ALL.len());

        for centroid in &centroids {
            let members: Vec<&ProjectedNode> = COUNTRIES
                .iter()
                .zip(nodes.iter())
                .filter(|(r, _)| r.region == centroid.region)
                .map(|(_, n)| n)
                .collect();
            let mean_x = members.iter().map(|n| n.x).sum::<f64>() / members.len() as f64;
            let mean_y = members.iter().map(|n| n.y).sum::<f64>() / members.len() as f64;

            assert_eq!(centroid.count, members.len());
            assert!((centroid.x - mean_x).abs() < 1e-9);
            assert!((centroid.y - mean_y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_region_has_no_centroid() {
        let layout = ScatterLayout::default();
        let only_south_asia = [record(90.0, 80.0, 100.0, 2.0)];
        let nodes = project_scatter(&only_south_asia, &layout);
        let centroids =
            region_centroids(only_south_asia.iter().map(|r| r.region).zip(nodes.iter()));

        assert_eq!(centroids.len(), 1);
        assert_eq!(centroids[0].region, Region::SouthAsia);
        assert!(centroids[0].x.is_finite() && centroids[0].y.is_finite());
    }

    #[test]
    fn test_no_records_no_centroids() {
        let centroids = region_centroids(std::iter::empty::<(Region, &ProjectedNode)>());
        assert!(centroids.is_empty());
    }

    #[test]
    fn test_centroids_follow_region_order() {
        let layout = ScatterLayout::default();
        let reversed: Vec<CountryRecord> = COUNTRIES.iter().rev().copied().collect();
        let nodes = project_scatter(&reversed, &layout);
        let centroids = region_centroids(reversed.iter().map(|r| r.region).zip(nodes.iter()));
        let order: Vec<Region> = centroids.iter().map(|c| c.region).collect();
        assert_eq!(order, Region::ALL.to_vec());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Every node stays inside the padded plot area
        #[test]
        fn prop_position_within_padding(
            electricity in 0.0f64..=100.0,
            connectivity in 0.0f64..=100.0,
            population in 1.0f64..=10_000.0,
            gdp in 0.1f64..=200.0,
        ) {
            let layout = ScatterLayout::default();
            let node = scatter_node(&record(electricity, connectivity, population, gdp), &layout);

            prop_assert!(node.x >= layout.padding - 1e-9);
            prop_assert!(node.x <= layout.width - layout.padding + 1e-9);
            prop_assert!(node.y >= layout.padding - 1e-9);
            prop_assert!(node.y <= layout.height - layout.padding + 1e-9);
        }

        /// Radius stays within bounds for any population
        #[test]
        fn prop_radius_bounded(population in 1.0f64..=10_000.0) {
            let r = node_radius(population);
            prop_assert!((MIN_RADIUS..=MAX_RADIUS).contains(&r));
        }

        /// Projecting twice yields identical nodes
        #[test]
        fn prop_projection_is_deterministic(
            electricity in 0.0f64..=100.0,
            connectivity in 0.0f64..=100.0,
            population in 1.0f64..=10_000.0,
        ) {
            let layout = ScatterLayout::default();
            let r = record(electricity, connectivity, population, 10.0);
            prop_assert_eq!(scatter_node(&r, &layout), scatter_node(&r, &layout));
        }
    }
}
