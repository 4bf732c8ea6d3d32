use serde::Serialize;
use std::fmt;

use super::types::{CropWaterFootprint, HouseholdSurvey, StateMonthlyWater};

/// Which resolution tier produced a `TableStore`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableSource {
    /// All three files were found under `<root>/data`.
    Primary,
    /// All three files were found directly under `<root>`.
    Secondary,
    /// Neither directory had the full set; placeholders were written to `<root>/data`.
    Synthesized,
}

impl TableSource {
    pub fn as_str(&self) -> &str {
        match self {
            TableSource::Primary => "primary",
            TableSource::Secondary => "secondary",
            TableSource::Synthesized => "synthesized",
        }
    }

    /// True when the caller should show the "placeholder data" notice.
    pub fn is_fallback(&self) -> bool {
        matches!(self, TableSource::Synthesized)
    }
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only snapshot of the three loaded tables.
///
/// Built once by the resolver and never mutated afterwards; every query
/// borrows slices out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStore {
    states: Vec<StateMonthlyWater>,
    crops: Vec<CropWaterFootprint>,
    households: Vec<HouseholdSurvey>,
    source: TableSource,
}

impl TableStore {
    pub fn new(
        states: Vec<StateMonthlyWater>,
        crops: Vec<CropWaterFootprint>,
        households: Vec<HouseholdSurvey>,
        source: TableSource,
    ) -> Self {
        Self {
            states,
            crops,
            households,
            source,
        }
    }

    pub fn state_monthly(&self) -> &[StateMonthlyWater] {
        &self.states
    }

    pub fn crop_footprints(&self) -> &[CropWaterFootprint] {
        &self.crops
    }

    pub fn households(&self) -> &[HouseholdSurvey] {
        &self.households
    }

    pub fn source(&self) -> TableSource {
        self.source
    }

    /// Compare table contents only, ignoring which tier they came from.
    pub fn same_contents(&self, other: &TableStore) -> bool {
        self.states == other.states
            && self.crops == other.crops
            && self.households == other.households
    }
}
