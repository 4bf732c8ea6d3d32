// src/tables/types.rs

use serde::{Deserialize, Serialize};

/// One row of `state_monthly_water.csv`: a state's consumption for one month.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct StateMonthlyWater {
    pub state: String,
    pub year: i32,
    pub month: u32,
    #[serde(rename = "total_consumption_ML")]
    pub total_consumption_ml: f64,
    #[serde(rename = "domestic_ML")]
    pub domestic_ml: f64,
    #[serde(rename = "agriculture_ML")]
    pub agriculture_ml: f64,
    #[serde(rename = "industrial_ML")]
    pub industrial_ml: f64,
    /// Empty cells load as `None`.
    pub population_est: Option<u64>,
}

/// One row of `crop_water_footprint.csv`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CropWaterFootprint {
    pub state: String,
    pub crop: String,
    pub year: i32,
    /// Blank cells load as `None` and are skipped by the lookup.
    pub water_m3_per_ton: Option<f64>,
}

/// One row of `household_survey.csv`.
///
/// Only the key columns are required; the survey answers may be blank.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct HouseholdSurvey {
    pub household_id: String,
    pub state: String,
    pub year: i32,
    pub diet_profile: Option<String>,
    pub daily_water_liters_per_person: Option<f64>,
    pub laundry_per_week: Option<f64>,
    pub showers_per_week: Option<f64>,
    pub bottled_water_per_week: Option<f64>,
}

/// Rows that carry a `state` column, so a single filter serves every table.
pub trait StateKeyed {
    fn state(&self) -> &str;
}

impl StateKeyed for StateMonthlyWater {
    fn state(&self) -> &str {
        &self.state
    }
}

impl StateKeyed for CropWaterFootprint {
    fn state(&self) -> &str {
        &self.state
    }
}

impl StateKeyed for HouseholdSurvey {
    fn state(&self) -> &str {
        &self.state
    }
}
