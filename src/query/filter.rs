use crate::tables::{CropWaterFootprint, HouseholdSurvey, StateKeyed, StateMonthlyWater};

/// Rows matching `(state, year, month)` exactly, in table order.
///
/// An empty result is the "no data for selection" case, not an error.
pub fn filter_state_month<'a>(
    table: &'a [StateMonthlyWater],
    state: &str,
    year: i32,
    month: u32,
) -> Vec<&'a StateMonthlyWater> {
    table
        .iter()
        .filter(|r| r.state == state && r.year == year && r.month == month)
        .collect()
}

pub fn filter_crop_state<'a>(
    table: &'a [CropWaterFootprint],
    crop: &str,
    state: &str,
    year: i32,
) -> Vec<&'a CropWaterFootprint> {
    table
        .iter()
        .filter(|r| r.crop == crop && r.state == state && r.year == year)
        .collect()
}

pub fn filter_by_state<'a, T: StateKeyed>(table: &'a [T], state: &str) -> Vec<&'a T> {
    table.iter().filter(|r| r.state() == state).collect()
}

/// First `limit` survey rows for `state`.
pub fn household_sample<'a>(
    table: &'a [HouseholdSurvey],
    state: &str,
    limit: usize,
) -> Vec<&'a HouseholdSurvey> {
    filter_by_state(table, state)
        .into_iter()
        .take(limit)
        .collect()
}
