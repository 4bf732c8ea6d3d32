//! Choices offered by the selection widgets.

use std::collections::{BTreeSet, HashSet};

use crate::tables::{CropWaterFootprint, StateMonthlyWater};

/// Distinct states, ascending.
pub fn state_options(table: &[StateMonthlyWater]) -> Vec<String> {
    table
        .iter()
        .map(|r| r.state.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct years, most recent first.
pub fn year_options(table: &[StateMonthlyWater]) -> Vec<i32> {
    table
        .iter()
        .map(|r| r.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect()
}

/// Distinct crops in the order they first appear.
pub fn crop_options(table: &[CropWaterFootprint]) -> Vec<String> {
    first_seen(table.iter().map(|r| r.crop.as_str()))
}

/// Distinct crop-table states in the order they first appear.
pub fn crop_state_options(table: &[CropWaterFootprint]) -> Vec<String> {
    first_seen(table.iter().map(|r| r.state.as_str()))
}

fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_row(state: &str, year: i32) -> StateMonthlyWater {
        StateMonthlyWater {
            state: state.into(),
            year,
            month: 1,
            total_consumption_ml: 0.0,
            domestic_ml: 0.0,
            agriculture_ml: 0.0,
            industrial_ml: 0.0,
            population_est: None,
        }
    }

    fn crop_row(state: &str, crop: &str) -> CropWaterFootprint {
        CropWaterFootprint {
            state: state.into(),
            crop: crop.into(),
            year: 2020,
            water_m3_per_ton: Some(1.0),
        }
    }

    #[test]
    fn test_state_and_year_options() {
        let table = vec![
            state_row("Kerala", 2023),
            state_row("Assam", 2025),
            state_row("Kerala", 2024),
            state_row("Bihar", 2023),
        ];
        assert_eq!(state_options(&table), vec!["Assam", "Bihar", "Kerala"]);
        assert_eq!(year_options(&table), vec![2025, 2024, 2023]);
    }

    #[test]
    fn test_crop_options_keep_table_order() {
        let table = vec![
            crop_row("Punjab", "Wheat"),
            crop_row("Bihar", "Rice"),
            crop_row("Punjab", "Rice"),
            crop_row("Assam", "Wheat"),
        ];
        assert_eq!(crop_options(&table), vec!["Wheat", "Rice"]);
        assert_eq!(crop_state_options(&table), vec!["Punjab", "Bihar", "Assam"]);
    }
}
