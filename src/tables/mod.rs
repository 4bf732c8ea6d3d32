pub mod store;
pub mod types;

pub use store::{TableSource, TableStore};
pub use types::{CropWaterFootprint, HouseholdSurvey, StateKeyed, StateMonthlyWater};
