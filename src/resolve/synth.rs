// src/resolve/synth.rs

use crate::tables::{CropWaterFootprint, HouseholdSurvey, StateMonthlyWater};

/// Placeholder rows used when no source tables can be found.
pub fn placeholder_state_monthly() -> Vec<StateMonthlyWater> {
    vec![
        StateMonthlyWater {
            state: "Karnataka".into(),
            year: 2025,
            month: 1,
            total_consumption_ml: 1_200.0,
            domestic_ml: 180.0,
            agriculture_ml: 900.0,
            industrial_ml: 120.0,
            population_est: Some(67_000_000),
        },
        StateMonthlyWater {
            state: "Karnataka".into(),
            year: 2025,
            month: 2,
            total_consumption_ml: 1_150.0,
            domestic_ml: 175.0,
            agriculture_ml: 860.0,
            industrial_ml: 115.0,
            population_est: Some(67_000_000),
        },
    ]
}

pub fn placeholder_crop_footprints() -> Vec<CropWaterFootprint> {
    vec![
        CropWaterFootprint {
            state: "Karnataka".into(),
            crop: "Rice".into(),
            year: 2020,
            water_m3_per_ton: Some(2_500.0),
        },
        CropWaterFootprint {
            state: "Karnataka".into(),
            crop: "Wheat".into(),
            year: 2020,
            water_m3_per_ton: Some(1_800.0),
        },
    ]
}

pub fn placeholder_households() -> Vec<HouseholdSurvey> {
    vec![HouseholdSurvey {
        household_id: "H0001".into(),
        state: "Karnataka".into(),
        year: 2025,
        diet_profile: Some("Mixed".into()),
        daily_water_liters_per_person: Some(150.0),
        laundry_per_week: Some(2.0),
        showers_per_week: Some(7.0),
        bottled_water_per_week: Some(0.0),
    }]
}
