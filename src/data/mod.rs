// Country dataset
//
// The fixed table of per-country infrastructure metrics shown by every chart,
// the region enumeration used to group it, and the loader-side integrity check.

use std::collections::HashSet;
use thiserror::Error;

/// Largest accepted difference between the stored gap and
/// `electricity_access - connectivity_access`
pub const GAP_TOLERANCE: f64 = 0.05;

/// Number of regions
pub const REGION_COUNT: usize = 7;

/// Geopolitical grouping used to cluster and aggregate records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    NorthAmerica,
    EuropeCentralAsia,
    EastAsiaPacific,
    LatinAmericaCaribbean,
    MiddleEastNorthAfrica,
    SouthAsia,
    SubSaharanAfrica,
}

impl Region {
    /// All regions in display order
    pub const ALL: [Region; REGION_COUNT] = [
        Region::NorthAmerica,
        Region::EuropeCentralAsia,
        Region::EastAsiaPacific,
        Region::LatinAmericaCaribbean,
        Region::MiddleEastNorthAfrica,
        Region::SouthAsia,
        Region::SubSaharanAfrica,
    ];

    /// Full display name
    pub fn label(&self) -> &'static str {
        match self {
            Self::NorthAmerica => "North America",
            Self::EuropeCentralAsia => "Europe & Central Asia",
            Self::EastAsiaPacific => "East Asia & Pacific",
            Self::LatinAmericaCaribbean => "Latin America & Caribbean",
            Self::MiddleEastNorthAfrica => "Middle East & North Africa",
            Self::SouthAsia => "South Asia",
            Self::SubSaharanAfrica => "Sub-Saharan Africa",
        }
    }

    /// Position of this region in display order
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Region following this one in display order, `None` after the last
    pub fn next(&self) -> Option<Region> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

/// One country's infrastructure metrics
///
/// Records are loaded once and never mutated. `gap` is stored, not derived:
/// renderers trust it as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryRecord {
    /// Short unique code (primary key)
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    pub region: Region,
    /// Share of population with electricity, 0-100
    pub electricity_access: f64,
    /// Share of population with 4G coverage, 0-100
    pub connectivity_access: f64,
    /// electricity_access - connectivity_access
    pub gap: f64,
    /// Millions
    pub population: f64,
    /// Thousands of USD
    pub gdp_per_capita: f64,
}

impl CountryRecord {
    /// Whether energy infrastructure leads (or ties) digital connectivity
    ///
    /// A zero gap counts as energy-leading in every view, lane markers
    /// included: a balanced country such as UAE is painted emerald on its
    /// lane, not blue as a strict `gap > 0` lane coloring would show it.
    pub fn energy_leads(&self) -> bool {
        self.gap >= 0.0
    }
}

/// Integrity violations in a record table
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("duplicate country id `{0}`")]
    DuplicateId(String),

    #[error("{id}: {field} = {value} is outside 0-100")]
    PercentOutOfRange {
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("{id}: {field} = {value} must be positive")]
    NonPositive {
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("{id}: stored gap {stored} does not match electricity - connectivity = {expected}")]
    GapMismatch { id: String, stored: f64, expected: f64 },
}

/// Check the table invariants the projection layer relies on
///
/// Returns the first violation found, scanning records in table order.
pub fn validate(records: &[CountryRecord]) -> Result<(), DataError> {
    let mut seen = HashSet::new();

    for record in records {
        if !seen.insert(record.id) {
            return Err(DataError::DuplicateId(record.id.to_string()));
        }

        for (field, value) in [
            ("electricity_access", record.electricity_access),
            ("connectivity_access", record.connectivity_access),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(DataError::PercentOutOfRange {
                    id: record.id.to_string(),
                    field,
                    value,
                });
            }
        }

        for (field, value) in [
            ("population", record.population),
            ("gdp_per_capita", record.gdp_per_capita),
        ] {
            if value <= 0.0 {
                return Err(DataError::NonPositive {
                    id: record.id.to_string(),
                    field,
                    value,
                });
            }
        }

        let expected = record.electricity_access - record.connectivity_access;
        if (record.gap - expected).abs() > GAP_TOLERANCE {
            return Err(DataError::GapMismatch {
                id: record.id.to_string(),
                stored: record.gap,
                expected,
            });
        }
    }

    Ok(())
}

/// Records belonging to `region`, in table order
pub fn in_region(records: &[CountryRecord], region: Region) -> impl Iterator<Item = &CountryRecord> {
    records.iter().filter(move |r| r.region == region)
}

const fn country(
    id: &'static str,
    name: &'static str,
    region: Region,
    electricity_access: f64,
    connectivity_access: f64,
    gap: f64,
    population: f64,
    gdp_per_capita: f64,
) -> CountryRecord {
    CountryRecord {
        id,
        name,
        region,
        electricity_access,
        connectivity_access,
        gap,
        population,
        gdp_per_capita,
    }
}

use Region::*;

/// The built-in dataset
pub static COUNTRIES: &[CountryRecord] = &[
    country("USA", "United States", NorthAmerica, 100.0, 99.8, 0.2, 331.0, 63.0),
    country("CAN", "Canada", NorthAmerica, 100.0, 99.0, 1.0, 38.0, 43.0),
    country("DEU", "Germany", EuropeCentralAsia, 100.0, 99.5, 0.5, 83.0, 46.0),
    country("NOR", "Norway", EuropeCentralAsia, 100.0, 99.9, 0.1, 5.0, 67.0),
    country("UKR", "Ukraine", EuropeCentralAsia, 100.0, 85.0, 15.0, 44.0, 3.7),
    country("GBR", "United Kingdom", EuropeCentralAsia, 100.0, 99.0, 1.0, 67.0, 40.0),
    country("CHN", "China", EastAsiaPacific, 100.0, 98.0, 2.0, 1400.0, 10.0),
    country("JPN", "Japan", EastAsiaPacific, 100.0, 99.9, 0.1, 125.0, 40.0),
    country("VNM", "Vietnam", EastAsiaPacific, 99.4, 95.0, 4.4, 97.0, 2.7),
    country("IDN", "Indonesia", EastAsiaPacific, 98.5, 92.0, 6.5, 273.0, 3.8),
    country("BRA", "Brazil", LatinAmericaCaribbean, 99.8, 88.0, 11.8, 212.0, 6.7),
    country("MEX", "Mexico", LatinAmericaCaribbean, 99.0, 85.0, 14.0, 128.0, 8.3),
    country("HTI", "Haiti", LatinAmericaCaribbean, 45.0, 40.0, 5.0, 11.0, 1.1),
    country("EGY", "Egypt", MiddleEastNorthAfrica, 100.0, 90.0, 10.0, 102.0, 3.5),
    country("SAU", "Saudi Arabia", MiddleEastNorthAfrica, 100.0, 98.0, 2.0, 34.0, 20.0),
    country("UAE", "UAE", MiddleEastNorthAfrica, 100.0, 100.0, 0.0, 9.0, 36.0),
    country("IND", "India", SouthAsia, 97.0, 98.0, -1.0, 1380.0, 1.9),
    country("PAK", "Pakistan", SouthAsia, 75.0, 70.0, 5.0, 220.0, 1.1),
    country("BGD", "Bangladesh", SouthAsia, 85.0, 95.0, -10.0, 164.0, 1.9),
    country("ZAF", "South Africa", SubSaharanAfrica, 84.4, 95.0, -10.6, 59.0, 5.0),
    country("KEN", "Kenya", SubSaharanAfrica, 70.0, 85.0, -15.0, 53.0, 1.8),
    country("NGA", "Nigeria", SubSaharanAfrica, 55.4, 75.0, -19.6, 206.0, 2.0),
    country("ETH", "Ethiopia", SubSaharanAfrica, 48.0, 40.0, 8.0, 114.0, 0.9),
    country("COD", "DR Congo", SubSaharanAfrica, 19.0, 35.0, -16.0, 89.0, 0.5),
    country("SSD", "South Sudan", SubSaharanAfrica, 7.0, 15.0, -8.0, 11.0, 0.3),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CountryRecord {
        country("TST", "Testland", SouthAsia, 80.0, 60.0, 20.0, 10.0, 5.0)
    }

    #[test]
    fn test_builtin_table_is_valid() {
        assert_eq!(validate(COUNTRIES), Ok(()));
        assert_eq!(COUNTRIES.len(), 25);
    }

    #[test]
    fn test_every_region_has_members() {
        for region in Region::ALL {
            assert!(
                in_region(COUNTRIES, region).count() > 0,
                "{} has no records",
                region.label()
            );
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_id() {
        let records = [sample(), sample()];
        assert_eq!(
            validate(&records),
            Err(DataError::DuplicateId("TST".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_access() {
        let mut record = sample();
        record.electricity_access = 120.0;
        record.gap = 60.0;
        assert!(matches!(
            validate(&[record]),
            Err(DataError::PercentOutOfRange { field: "electricity_access", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_positive_population() {
        let mut record = sample();
        record.population = 0.0;
        assert!(matches!(
            validate(&[record]),
            Err(DataError::NonPositive { field: "population", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_gap_mismatch() {
        let mut record = sample();
        record.gap = 5.0;
        assert!(matches!(validate(&[record]), Err(DataError::GapMismatch { .. })));
    }

    #[test]
    fn test_validate_accepts_rounding_noise() {
        let mut record = sample();
        record.gap = 20.04;
        assert_eq!(validate(&[record]), Ok(()));
    }

    #[test]
    fn test_empty_table_is_valid() {
        assert_eq!(validate(&[]), Ok(()));
    }

    #[test]
    fn test_energy_leads_tie_break() {
        let mut record = sample();
        record.gap = 0.0;
        assert!(record.energy_leads());
        record.gap = -0.1;
        assert!(!record.energy_leads());
    }

    #[test]
    fn test_region_order_and_next() {
        assert_eq!(Region::NorthAmerica.index(), 0);
        assert_eq!(Region::SubSaharanAfrica.index(), 6);
        assert_eq!(Region::NorthAmerica.next(), Some(Region::EuropeCentralAsia));
        assert_eq!(Region::SubSaharanAfrica.next(), None);
    }
}
