use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::query::filter::filter_by_state;
use crate::tables::StateMonthlyWater;

/// Per-sector consumption for a selection, in ML.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SectorTotals {
    pub domestic: f64,
    pub agriculture: f64,
    pub industrial: f64,
}

/// Sum each sector over `rows`. Duplicate rows for one month are added, not averaged.
pub fn sector_totals<'a, I>(rows: I) -> SectorTotals
where
    I: IntoIterator<Item = &'a StateMonthlyWater>,
{
    rows.into_iter().fold(SectorTotals::default(), |acc, r| SectorTotals {
        domestic: acc.domestic + r.domestic_ml,
        agriculture: acc.agriculture + r.agriculture_ml,
        industrial: acc.industrial + r.industrial_ml,
    })
}

/// One point of a state's monthly consumption series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// First day of the month; the chart's x-axis key.
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub total_consumption_ml: f64,
}

/// Total consumption per (year, month) for `state`, ascending by date.
///
/// Rows sharing a month are summed. A month outside 1..=12 cannot be turned
/// into a date and fails the whole series.
pub fn monthly_series(table: &[StateMonthlyWater], state: &str) -> Result<Vec<SeriesPoint>> {
    let mut by_month: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for r in filter_by_state(table, state) {
        *by_month.entry((r.year, r.month)).or_insert(0.0) += r.total_consumption_ml;
    }

    by_month
        .into_iter()
        .map(|((year, month), total)| {
            let date = NaiveDate::from_ymd_opt(year, month, 1)
                .ok_or_else(|| anyhow!("invalid year/month {}-{} for `{}`", year, month, state))?;
            Ok(SeriesPoint {
                date,
                year,
                month,
                total_consumption_ml: total,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter::filter_state_month;

    fn row(state: &str, year: i32, month: u32, total: f64, domestic: f64) -> StateMonthlyWater {
        StateMonthlyWater {
            state: state.into(),
            year,
            month,
            total_consumption_ml: total,
            domestic_ml: domestic,
            agriculture_ml: 1.5,
            industrial_ml: 0.5,
            population_est: Some(1),
        }
    }

    #[test]
    fn test_duplicate_selection_rows_are_summed() {
        let table = vec![
            row("Karnataka", 2025, 1, 100.0, 10.0),
            row("Karnataka", 2025, 1, 100.0, 20.0),
            row("Karnataka", 2025, 2, 100.0, 40.0),
        ];
        let totals = sector_totals(filter_state_month(&table, "Karnataka", 2025, 1));
        assert_eq!(totals.domestic, 30.0);
        assert_eq!(totals.agriculture, 3.0);
        assert_eq!(totals.industrial, 1.0);
    }

    #[test]
    fn test_empty_rows_total_zero() {
        assert_eq!(sector_totals(Vec::<&StateMonthlyWater>::new()), SectorTotals::default());
    }

    #[test]
    fn test_series_is_sorted_and_grouped() -> Result<()> {
        let table = vec![
            row("Goa", 2025, 3, 30.0, 0.0),
            row("Goa", 2024, 12, 12.0, 0.0),
            row("Assam", 2020, 1, 999.0, 0.0),
            row("Goa", 2025, 1, 10.0, 0.0),
            row("Goa", 2024, 12, 8.0, 0.0),
            row("Goa", 2025, 10, 5.0, 0.0),
        ];
        let series = monthly_series(&table, "Goa")?;

        let keys: Vec<(i32, u32)> = series.iter().map(|p| (p.year, p.month)).collect();
        assert_eq!(keys, vec![(2024, 12), (2025, 1), (2025, 3), (2025, 10)]);
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));

        assert_eq!(series[0].total_consumption_ml, 20.0);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        Ok(())
    }

    #[test]
    fn test_series_matches_state_filter() -> Result<()> {
        let table = vec![
            row("Goa", 2025, 1, 10.0, 0.0),
            row("Goa ", 2025, 1, 99.0, 0.0),
            row("Assam", 2025, 1, 7.0, 0.0),
        ];
        let series = monthly_series(&table, "Goa")?;
        let from_filter: f64 = filter_by_state(&table, "Goa")
            .iter()
            .map(|r| r.total_consumption_ml)
            .sum();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].total_consumption_ml, from_filter);
        Ok(())
    }

    #[test]
    fn test_series_for_unknown_state_is_empty() -> Result<()> {
        let table = vec![row("Goa", 2025, 1, 1.0, 0.0)];
        assert!(monthly_series(&table, "Sikkim")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_series_rejects_bad_month() {
        let table = vec![row("Goa", 2025, 13, 1.0, 0.0)];
        assert!(monthly_series(&table, "Goa").is_err());
    }
}
