pub mod config;
pub mod dashboard;
pub mod estimate;
pub mod query;
pub mod resolve;
pub mod session;
pub mod tables;

pub use config::{ConfigError, ResolverConfig, Selection};
pub use dashboard::Dashboard;
pub use session::Session;
pub use tables::{CropWaterFootprint, HouseholdSurvey, StateMonthlyWater, TableSource, TableStore};
