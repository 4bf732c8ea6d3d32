//! Personal water-footprint estimate from a handful of household inputs.
//!
//! The food term is a fixed placeholder proxy: a 200 m³/month baseline scaled
//! by diet. It is not derived from the crop footprint table.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

const DAYS_PER_MONTH: f64 = 30.0;
const LITERS_PER_ML: f64 = 1_000_000.0;
const M3_PER_ML: f64 = 1_000.0;

/// Food water baseline for a Mixed diet, m³ per month.
pub const FOOD_BASELINE_M3_PER_MONTH: f64 = 200.0;

/// Liters attributed to each laundry load and each shower.
///
/// Both are zero: the frequencies are collected but do not contribute to the
/// estimate yet. Giving either a value is the whole change needed to weight them in.
pub const LITERS_PER_LAUNDRY_LOAD: f64 = 0.0;
pub const LITERS_PER_SHOWER: f64 = 0.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietProfile {
    Vegetarian,
    Mixed,
    #[serde(rename = "High Meat")]
    HighMeat,
    #[serde(rename = "High Dairy")]
    HighDairy,
}

impl DietProfile {
    pub const ALL: [DietProfile; 4] = [
        DietProfile::Vegetarian,
        DietProfile::Mixed,
        DietProfile::HighMeat,
        DietProfile::HighDairy,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            DietProfile::Vegetarian => "Vegetarian",
            DietProfile::Mixed => "Mixed",
            DietProfile::HighMeat => "High Meat",
            DietProfile::HighDairy => "High Dairy",
        }
    }

    /// Multiplier applied to the food baseline.
    pub fn factor(&self) -> f64 {
        match self {
            DietProfile::Vegetarian => 0.9,
            DietProfile::Mixed => 1.0,
            DietProfile::HighMeat => 1.4,
            DietProfile::HighDairy => 1.2,
        }
    }
}

impl FromStr for DietProfile {
    type Err = ConfigError;

    /// Exact label match; there is no default for unknown categories.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietProfile::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownDiet(s.to_string()))
    }
}

impl fmt::Display for DietProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimator inputs as collected by the calculator widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    pub persons: u32,
    pub daily_liters_per_person: f64,
    pub diet: DietProfile,
    pub laundry_per_week: u32,
    pub showers_per_week: u32,
}

/// Monthly footprint in megaliters, with its components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FootprintEstimate {
    pub domestic_ml: f64,
    pub food_ml: f64,
    pub total_ml: f64,
}

pub fn estimate(profile: &HouseholdProfile) -> FootprintEstimate {
    let persons = f64::from(profile.persons);
    let domestic_ml = profile.daily_liters_per_person * persons * DAYS_PER_MONTH / LITERS_PER_ML;
    let food_ml = profile.diet.factor() * FOOD_BASELINE_M3_PER_MONTH / M3_PER_ML;

    let weeks = DAYS_PER_MONTH / 7.0;
    let usage_liters = f64::from(profile.laundry_per_week) * LITERS_PER_LAUNDRY_LOAD
        + f64::from(profile.showers_per_week) * persons * LITERS_PER_SHOWER;
    let usage_ml = usage_liters * weeks / LITERS_PER_ML;

    FootprintEstimate {
        domestic_ml,
        food_ml,
        total_ml: domestic_ml + food_ml + usage_ml,
    }
}

/// Same as [`estimate`], taking the diet as its display label.
pub fn estimate_monthly_ml(
    persons: u32,
    daily_liters_per_person: f64,
    diet: &str,
    laundry_per_week: u32,
    showers_per_week: u32,
) -> Result<f64, ConfigError> {
    let profile = HouseholdProfile {
        persons,
        daily_liters_per_person,
        diet: diet.parse()?,
        laundry_per_week,
        showers_per_week,
    };
    Ok(estimate(&profile).total_ml)
}
