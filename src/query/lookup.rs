use serde::Serialize;

use crate::query::filter::filter_crop_state;
use crate::tables::CropWaterFootprint;

/// Year used for the exact-match branch of the crop lookup.
///
/// Fixed rather than following the state-data year selector.
pub const CROP_LOOKUP_YEAR: i32 = 2020;

/// A crop footprint value in m³/ton and which branch produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropFootprint {
    pub water_m3_per_ton: f64,
    /// `true` for a (crop, state, year) row, `false` for the cross-state median.
    pub is_exact: bool,
}

/// Footprint of `crop` in `state` for [`CROP_LOOKUP_YEAR`].
///
/// Falls back to the median over every row for `crop` (any state, any year)
/// when there is no exact row with a value. Blank cells are skipped in both
/// branches. `None` means the crop has no values at all.
pub fn crop_footprint(table: &[CropWaterFootprint], crop: &str, state: &str) -> Option<CropFootprint> {
    let exact = filter_crop_state(table, crop, state, CROP_LOOKUP_YEAR)
        .into_iter()
        .find_map(|r| r.water_m3_per_ton);
    if let Some(value) = exact {
        return Some(CropFootprint {
            water_m3_per_ton: value,
            is_exact: true,
        });
    }

    let values: Vec<f64> = table
        .iter()
        .filter(|r| r.crop == crop)
        .filter_map(|r| r.water_m3_per_ton)
        .collect();
    median(&values).map(|m| CropFootprint {
        water_m3_per_ton: m,
        is_exact: false,
    })
}

/// Statistical median, ignoring NaNs. Even counts average the two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}
