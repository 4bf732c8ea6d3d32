pub mod aggregate;
pub mod filter;
pub mod lookup;
pub mod options;

pub use aggregate::{monthly_series, sector_totals, SectorTotals, SeriesPoint};
pub use filter::{filter_by_state, filter_crop_state, filter_state_month, household_sample};
pub use lookup::{crop_footprint, median, CropFootprint, CROP_LOOKUP_YEAR};
pub use options::{crop_options, crop_state_options, state_options, year_options};
