// See-saw ("gravity") projection
//
// Each record becomes a building standing on a beam balanced on a pivot.
// Which side of the pivot it stands on follows the sign of its gap, how far
// out follows the gap magnitude, and how tall it is follows log population.

use crate::data::CountryRecord;

/// Geometry of the gravity view in layout units (0 at the top)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeesawLayout {
    pub width: f64,
    pub height: f64,
    /// Full beam length; buildings stay within half of it on each side
    pub beam_length: f64,
    pub beam_thickness: f64,
    /// Beam distance per percentage point of gap
    pub scale_factor: f64,
    /// Free space kept at each end of the beam
    pub margin: f64,
    /// Distance from the pivot every building keeps, so opposite sides never
    /// touch at a zero gap
    pub min_offset: f64,
    pub min_height: f64,
    /// Bar height per unit of ln(population)
    pub height_factor: f64,
    pub bar_width: f64,
}

impl Default for SeesawLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            beam_length: 640.0,
            beam_thickness: 12.0,
            scale_factor: 15.0,
            margin: 20.0,
            min_offset: 20.0,
            min_height: 10.0,
            height_factor: 25.0,
            bar_width: 14.0,
        }
    }
}

impl SeesawLayout {
    /// Pivot point the beam rotates around
    pub fn pivot(&self) -> (f64, f64) {
        (self.width / 2.0, self.height * 0.75)
    }

    /// Largest distance from the pivot a building's offset may reach
    pub fn max_reach(&self) -> f64 {
        self.min_offset + (self.beam_length / 2.0 - self.margin)
    }
}

/// Side of the pivot a building stands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeamSide {
    /// Negative gap: connectivity leads
    Connectivity,
    /// Zero or positive gap: energy leads
    Energy,
}

impl BeamSide {
    /// Side for a gap value; zero goes to the energy side
    pub fn of(gap: f64) -> Self {
        if gap >= 0.0 {
            Self::Energy
        } else {
            Self::Connectivity
        }
    }

    /// Direction multiplier along the beam
    pub fn sign(&self) -> f64 {
        match self {
            Self::Energy => 1.0,
            Self::Connectivity => -1.0,
        }
    }
}

/// A record projected onto the beam
#[derive(Debug, Clone, PartialEq)]
pub struct SeesawBar {
    pub source_id: &'static str,
    pub side: BeamSide,
    /// Signed offset from the pivot along the (untilted) beam
    pub beam_pos: f64,
    pub bar_height: f64,
}

/// Project one record onto the beam
pub fn seesaw_bar(record: &CountryRecord, layout: &SeesawLayout) -> SeesawBar {
    let side = BeamSide::of(record.gap);
    let reach = (layout.min_offset + record.gap.abs() * layout.scale_factor).min(layout.max_reach());

    SeesawBar {
        source_id: record.id,
        side,
        beam_pos: side.sign() * reach,
        bar_height: (record.population.ln() * layout.height_factor).max(layout.min_height),
    }
}

/// Project every record, preserving table order
pub fn project_seesaw(records: &[CountryRecord], layout: &SeesawLayout) -> Vec<SeesawBar> {
    records.iter().map(|r| seesaw_bar(r, layout)).collect()
}

/// Population-weighted lever sum around the pivot
///
/// Positive when the energy side carries more weight.
pub fn net_torque(records: &[CountryRecord], bars: &[SeesawBar]) -> f64 {
    records
        .iter()
        .zip(bars)
        .map(|(record, bar)| bar.beam_pos * record.population)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Region, COUNTRIES};
    use proptest::prelude::*;

    fn record(gap: f64, population: f64) -> CountryRecord {
        CountryRecord {
            id: "TST",
            name: "Testland",
            region: Region::EastAsiaPacific,
            electricity_access: 50.0 + gap / 2.0,
            connectivity_access: 50.0 - gap / 2.0,
            gap,
            population,
            gdp_per_capita: 3.0,
        }
    }

    #[test]
    fn test_zero_gap_goes_to_energy_side() {
        let bar = seesaw_bar(&record(0.0, 9.0), &SeesawLayout::default());
        assert_eq!(bar.side, BeamSide::Energy);
        assert_eq!(bar.beam_pos, 20.0);
    }

    #[test]
    fn test_side_sign_matches_gap_sign() {
        let layout = SeesawLayout::default();
        assert!(seesaw_bar(&record(4.4, 97.0), &layout).beam_pos > 0.0);
        assert!(seesaw_bar(&record(-19.6, 206.0), &layout).beam_pos < 0.0);
    }

    #[test]
    fn test_magnitude_scaled_then_offset() {
        let layout = SeesawLayout::default();
        let bar = seesaw_bar(&record(-10.0, 164.0), &layout);
        assert!((bar.beam_pos - -(20.0 + 150.0)).abs() < 1e-9);
    }

    #[test]
    fn test_magnitude_capped_by_beam_margin() {
        let layout = SeesawLayout::default();
        // 40 * 15 = 600 > 640 / 2 - 20 = 300
        let bar = seesaw_bar(&record(40.0, 10.0), &layout);
        assert_eq!(bar.beam_pos, 320.0);
        assert_eq!(bar.beam_pos, layout.max_reach());
    }

    #[test]
    fn test_bar_height_has_floor() {
        let layout = SeesawLayout::default();
        assert_eq!(seesaw_bar(&record(1.0, 1.0), &layout).bar_height, 10.0);
        let tall = seesaw_bar(&record(1.0, 1400.0), &layout);
        assert!((tall.bar_height - 1400.0_f64.ln() * 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_pivot_position() {
        assert_eq!(SeesawLayout::default().pivot(), (400.0, 375.0));
    }

    #[test]
    fn test_net_torque_of_builtin_table_favours_energy() {
        let layout = SeesawLayout::default();
        let bars = project_seesaw(COUNTRIES, &layout);
        assert!(net_torque(COUNTRIES, &bars) > 0.0);
    }

    #[test]
    fn test_net_torque_empty() {
        assert_eq!(net_torque(&[], &[]), 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// The beam side always agrees with the gap sign
        #[test]
        fn prop_side_matches_sign(gap in -100.0f64..=100.0, population in 1.0f64..=2000.0) {
            let bar = seesaw_bar(&record(gap, population), &SeesawLayout::default());
            if gap >= 0.0 {
                prop_assert!(bar.beam_pos > 0.0);
            } else {
                prop_assert!(bar.beam_pos < 0.0);
            }
        }

        /// Buildings never leave the beam and never sit on the pivot
        #[test]
        fn prop_offset_bounded(gap in -100.0f64..=100.0) {
            let layout = SeesawLayout::default();
            let bar = seesaw_bar(&record(gap, 10.0), &layout);
            prop_assert!(bar.beam_pos.abs() >= layout.min_offset);
            prop_assert!(bar.beam_pos.abs() <= layout.max_reach());
        }
    }
}
