// src/dashboard.rs

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::config::Selection;
use crate::estimate::{self, FootprintEstimate};
use crate::query::{
    crop_footprint, crop_options, crop_state_options, filter_state_month, household_sample,
    monthly_series, sector_totals, state_options, year_options, CropFootprint, SectorTotals,
    SeriesPoint, CROP_LOOKUP_YEAR,
};
use crate::tables::{HouseholdSurvey, TableSource, TableStore};

/// Survey rows shown in the household snapshot.
pub const HOUSEHOLD_SAMPLE_LIMIT: usize = 50;

/// Everything the page renders for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub source: TableSource,
    pub state: Option<String>,
    pub year: Option<i32>,
    pub month: u32,
    /// `None` renders as "no data for selection".
    pub sectors: Option<SectorTotals>,
    /// Only filled when the selection itself has data.
    pub series: Vec<SeriesPoint>,
    pub crop: Option<CropLookup>,
    pub households: Vec<HouseholdSurvey>,
    pub estimate: Option<FootprintEstimate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropLookup {
    pub crop: String,
    pub state: String,
    pub year: i32,
    /// `None` when the crop has no rows at all.
    pub footprint: Option<CropFootprint>,
}

impl Dashboard {
    /// Fill unset selection fields with widget defaults and run every query.
    pub fn build(store: &TableStore, selection: &Selection) -> Result<Self> {
        let states = store.state_monthly();

        let state = selection
            .state
            .clone()
            .or_else(|| state_options(states).into_iter().next());
        let year = selection
            .year
            .or_else(|| year_options(states).into_iter().next());
        let month = selection.month.unwrap_or(1);

        let (sectors, series) = match (&state, year) {
            (Some(state), Some(year)) => {
                let rows = filter_state_month(states, state, year, month);
                if rows.is_empty() {
                    debug!(%state, year, month, "no rows for selection");
                    (None, Vec::new())
                } else {
                    (Some(sector_totals(rows)), monthly_series(states, state)?)
                }
            }
            _ => (None, Vec::new()),
        };

        let crops = store.crop_footprints();
        let crop = selection
            .crop
            .clone()
            .or_else(|| crop_options(crops).into_iter().next());
        let crop_state = selection
            .crop_state
            .clone()
            .or_else(|| crop_state_options(crops).into_iter().next());
        let crop = match (crop, crop_state) {
            (Some(crop), Some(crop_state)) => Some(CropLookup {
                footprint: crop_footprint(crops, &crop, &crop_state),
                crop,
                state: crop_state,
                year: CROP_LOOKUP_YEAR,
            }),
            _ => None,
        };

        let households = match &state {
            Some(state) => household_sample(store.households(), state, HOUSEHOLD_SAMPLE_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        Ok(Self {
            source: store.source(),
            state,
            year,
            month,
            sectors,
            series,
            crop,
            households,
            estimate: selection.household.as_ref().map(estimate::estimate),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::{DietProfile, HouseholdProfile};
    use crate::tables::{CropWaterFootprint, StateMonthlyWater};

    fn store() -> TableStore {
        let s = |state: &str, year: i32, month: u32, total: f64| StateMonthlyWater {
            state: String::from(state),
            year,
            month,
            total_consumption_ml: total,
            domestic_ml: total / 4.0,
            agriculture_ml: total / 2.0,
            industrial_ml: total / 4.0,
            population_est: None,
        };
        let c = |state: &str, crop: &str, v: f64| CropWaterFootprint {
            state: state.into(),
            crop: crop.into(),
            year: 2020,
            water_m3_per_ton: Some(v),
        };
        TableStore::new(
            vec![
                s("Kerala", 2024, 1, 40.0),
                s("Kerala", 2025, 1, 80.0),
                s("Assam", 2025, 2, 20.0),
            ],
            vec![
                c("Punjab", "Rice", 2000.0),
                c("Bihar", "Rice", 3000.0),
                c("Punjab", "Wheat", 1500.0),
            ],
            Vec::new(),
            TableSource::Primary,
        )
    }

    #[test]
    fn test_defaults_follow_widget_order() -> Result<()> {
        let dash = Dashboard::build(&store(), &Selection::default())?;
        // first sorted state, newest year, month 1
        assert_eq!(dash.state.as_deref(), Some("Assam"));
        assert_eq!(dash.year, Some(2025));
        assert_eq!(dash.month, 1);
        // Assam has no January rows
        assert_eq!(dash.sectors, None);
        assert!(dash.series.is_empty());

        let crop = dash.crop.unwrap();
        assert_eq!((crop.crop.as_str(), crop.state.as_str()), ("Rice", "Punjab"));
        assert_eq!(crop.footprint.unwrap().water_m3_per_ton, 2000.0);
        assert!(dash.estimate.is_none());
        Ok(())
    }

    #[test]
    fn test_selection_with_data() -> Result<()> {
        let selection = Selection {
            state: Some("Kerala".into()),
            year: Some(2025),
            month: Some(1),
            crop: Some("Wheat".into()),
            crop_state: Some("Bihar".into()),
            household: Some(HouseholdProfile {
                persons: 4,
                daily_liters_per_person: 150.0,
                diet: DietProfile::Mixed,
                laundry_per_week: 2,
                showers_per_week: 7,
            }),
        };
        let dash = Dashboard::build(&store(), &selection)?;

        let sectors = dash.sectors.unwrap();
        assert_eq!(sectors.domestic, 20.0);
        assert_eq!(sectors.agriculture, 40.0);
        assert_eq!(dash.series.len(), 2);
        assert_eq!(dash.series[0].year, 2024);

        let crop = dash.crop.unwrap().footprint.unwrap();
        assert!(!crop.is_exact);
        assert_eq!(crop.water_m3_per_ton, 1500.0);

        assert!((dash.estimate.unwrap().total_ml - 0.218).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_empty_store() -> Result<()> {
        let empty = TableStore::new(Vec::new(), Vec::new(), Vec::new(), TableSource::Secondary);
        let dash = Dashboard::build(&empty, &Selection::default())?;
        assert_eq!(dash.state, None);
        assert_eq!(dash.sectors, None);
        assert_eq!(dash.crop, None);

        let json = serde_json::to_value(&dash)?;
        assert_eq!(json["source"], "secondary");
        Ok(())
    }
}
