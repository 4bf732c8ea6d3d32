// src/resolve/mod.rs

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, instrument, warn};

use crate::config::ResolverConfig;
use crate::tables::{TableSource, TableStore};

pub mod load;
pub mod synth;

pub use load::{read_table, write_table};

pub const STATE_MONTHLY_FILE: &str = "state_monthly_water.csv";
pub const CROP_FOOTPRINT_FILE: &str = "crop_water_footprint.csv";
pub const HOUSEHOLD_SURVEY_FILE: &str = "household_survey.csv";

/// The three files that make up a complete dataset.
pub const TABLE_FILES: [&str; 3] = [STATE_MONTHLY_FILE, CROP_FOOTPRINT_FILE, HOUSEHOLD_SURVEY_FILE];

/// True only when every one of the three files exists under `dir`.
pub fn has_full_set(dir: &Path) -> bool {
    TABLE_FILES.iter().all(|name| dir.join(name).is_file())
}

/// Locate (or synthesize) the three tables and load them.
///
/// Tiers, each tried only if the previous one lacks the full set:
///  1. `<root>/data`
///  2. `<root>`
///  3. write placeholder tables to `<root>/data`, then load those
///
/// A partial set never counts as a hit. Files that exist but do not parse
/// are a hard error.
#[instrument(level = "info", skip(cfg), fields(root = %cfg.secondary_dir().display()))]
pub fn resolve(cfg: &ResolverConfig) -> Result<TableStore> {
    let primary = cfg.primary_dir();
    if has_full_set(&primary) {
        info!(dir = %primary.display(), "using primary data directory");
        return load_dir(&primary, TableSource::Primary);
    }

    let secondary = cfg.secondary_dir();
    if has_full_set(secondary) {
        info!(dir = %secondary.display(), "using secondary data directory");
        return load_dir(secondary, TableSource::Secondary);
    }

    let written = synthesize_and_persist(&primary)?;
    warn!(
        files = ?written,
        "source tables not found in {} or {}; using synthesized placeholder data",
        primary.display(),
        secondary.display()
    );
    load_dir(&primary, TableSource::Synthesized)
}

/// Load the full set from `dir`, tagging the store with `source`.
pub fn load_dir(dir: &Path, source: TableSource) -> Result<TableStore> {
    let states = read_table(&dir.join(STATE_MONTHLY_FILE))
        .with_context(|| format!("loading {} from {}", STATE_MONTHLY_FILE, dir.display()))?;
    let crops = read_table(&dir.join(CROP_FOOTPRINT_FILE))
        .with_context(|| format!("loading {} from {}", CROP_FOOTPRINT_FILE, dir.display()))?;
    let households = read_table(&dir.join(HOUSEHOLD_SURVEY_FILE))
        .with_context(|| format!("loading {} from {}", HOUSEHOLD_SURVEY_FILE, dir.display()))?;

    Ok(TableStore::new(states, crops, households, source))
}

/// Write all three placeholder tables into `dir`, creating it if needed.
///
/// All three are rewritten even if some already exist, so the directory
/// always ends up holding one consistent set. Returns the written paths.
pub fn synthesize_and_persist(dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let states_path = dir.join(STATE_MONTHLY_FILE);
    write_table(&states_path, &synth::placeholder_state_monthly())?;

    let crops_path = dir.join(CROP_FOOTPRINT_FILE);
    write_table(&crops_path, &synth::placeholder_crop_footprints())?;

    let households_path = dir.join(HOUSEHOLD_SURVEY_FILE);
    write_table(&households_path, &synth::placeholder_households())?;

    Ok(vec![states_path, crops_path, households_path])
}
