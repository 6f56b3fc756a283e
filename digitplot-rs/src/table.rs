//! Tabular view of parsed benchmark results
//!
//! Results are parsed into [`BenchRecord`]s and stored column-wise in a polars
//! `DataFrame`. Filtering by type and splitting into the exact-count and
//! `1..N` views are lazy queries over that frame.

use crate::error::Result;
use crate::loader::BenchResult;
use crate::name::BenchName;
use itertools::{Itertools, izip};
use polars::prelude::*;
use tracing::debug;

pub const GROUP: &str = "group";
pub const SUBTYPE: &str = "subtype";
pub const MIN_COUNT: &str = "min_count";
pub const MAX_COUNT: &str = "max_count";
pub const MEAN_TIME_NS: &str = "mean_time_ns";

/// One benchmark: which crate parsed which type over which digit counts, and how fast
#[derive(Debug, Clone, PartialEq)]
pub struct BenchRecord {
    pub group: String,
    pub subtype: String,
    pub min_count: u32,
    pub max_count: u32,
    /// Time per parsed input in nanoseconds
    pub mean_time_ns: f64,
}

impl BenchRecord {
    /// Parse the result's name and attach its timing
    ///
    /// # Errors
    /// Propagates name parsing errors from [`BenchName::parse`].
    pub fn from_result(result: &BenchResult) -> Result<Self> {
        let BenchName {
            group,
            subtype,
            min_count,
            max_count,
        } = BenchName::parse(&result.name)?;

        Ok(Self {
            group,
            subtype,
            min_count,
            max_count,
            mean_time_ns: result.time_ns,
        })
    }
}

/// One line on a chart: a crate's timings ordered by digit count
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSeries {
    pub label: String,
    /// `(max_count, mean_time_ns)` pairs, ascending by count
    pub points: Vec<(u32, f64)>,
}

/// Benchmark records backed by a `DataFrame`
#[derive(Debug, Clone)]
pub struct BenchTable {
    data_frame: DataFrame,
}

impl BenchTable {
    /// Parse every result name and build the table
    ///
    /// # Errors
    /// Fails on the first malformed benchmark name.
    pub fn from_results(results: &[BenchResult]) -> Result<Self> {
        let records = results
            .iter()
            .map(BenchRecord::from_result)
            .collect::<Result<Vec<_>>>()?;
        Self::from_records(&records)
    }

    pub fn from_records(records: &[BenchRecord]) -> Result<Self> {
        let columns = vec![
            Column::new(
                GROUP.into(),
                records.iter().map(|r| r.group.as_str()).collect::<Vec<&str>>(),
            ),
            Column::new(
                SUBTYPE.into(),
                records.iter().map(|r| r.subtype.as_str()).collect::<Vec<&str>>(),
            ),
            Column::new(
                MIN_COUNT.into(),
                records.iter().map(|r| r.min_count).collect::<Vec<u32>>(),
            ),
            Column::new(
                MAX_COUNT.into(),
                records.iter().map(|r| r.max_count).collect::<Vec<u32>>(),
            ),
            Column::new(
                MEAN_TIME_NS.into(),
                records.iter().map(|r| r.mean_time_ns).collect::<Vec<f64>>(),
            ),
        ];

        Ok(Self {
            data_frame: DataFrame::new(columns)?,
        })
    }

    pub fn data_frame(&self) -> &DataFrame {
        &self.data_frame
    }

    pub fn len(&self) -> usize {
        self.data_frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep only rows whose parsed type equals `subtype`
    pub fn filter_subtype(&self, subtype: &str) -> Result<Self> {
        self.query(col(SUBTYPE).eq(lit(subtype)))
    }

    /// Rows benchmarked on inputs of exactly N digits, ordered by crate then N
    pub fn exact_counts(&self) -> Result<Self> {
        self.query(col(MIN_COUNT).eq(col(MAX_COUNT)))
    }

    /// Rows benchmarked on `1..=N` digit inputs, ordered by crate then N
    pub fn ranges_from_one(&self) -> Result<Self> {
        self.query(col(MIN_COUNT).eq(lit(1u32)))
    }

    fn query(&self, predicate: Expr) -> Result<Self> {
        let data_frame = self
            .data_frame
            .clone()
            .lazy()
            .filter(predicate)
            .sort([GROUP, MAX_COUNT], SortMultipleOptions::default())
            .collect()?;
        Ok(Self { data_frame })
    }

    /// Materialize the rows in table order
    pub fn records(&self) -> Result<Vec<BenchRecord>> {
        let groups = self.data_frame.column(GROUP)?.str()?;
        let subtypes = self.data_frame.column(SUBTYPE)?.str()?;
        let min_counts = self.data_frame.column(MIN_COUNT)?.u32()?;
        let max_counts = self.data_frame.column(MAX_COUNT)?.u32()?;
        let times = self.data_frame.column(MEAN_TIME_NS)?.f64()?;

        let records = izip!(
            groups.into_iter(),
            subtypes.into_iter(),
            min_counts.into_iter(),
            max_counts.into_iter(),
            times.into_iter()
        )
        .filter_map(|(group, subtype, min_count, max_count, time)| {
            Some(BenchRecord {
                group: group?.to_string(),
                subtype: subtype?.to_string(),
                min_count: min_count?,
                max_count: max_count?,
                mean_time_ns: time?,
            })
        })
        .collect();

        Ok(records)
    }

    /// One series per crate, x = `max_count`, y = `mean_time_ns`
    ///
    /// Consecutive rows of the same crate form one series, so call this on a
    /// table produced by one of the view queries (sorted by crate then count).
    pub fn series(&self) -> Result<Vec<GroupSeries>> {
        let records = self.records()?;
        let chunked = records.iter().chunk_by(|record| record.group.clone());
        let series: Vec<GroupSeries> = chunked
            .into_iter()
            .map(|(group, rows)| GroupSeries {
                label: group,
                points: rows.map(|r| (r.max_count, r.mean_time_ns)).collect(),
            })
            .collect();
        Ok(series)
    }
}

/// The two chart inputs for one numeric type
#[derive(Debug, Clone)]
pub struct DigitViews {
    pub subtype: String,
    /// `min_count == max_count`
    pub exact: BenchTable,
    /// `min_count == 1`
    pub range: BenchTable,
}

/// Parse, filter to `subtype`, and split into the exact-count and `1..N` views
///
/// # Errors
/// Fails on a malformed benchmark name or a polars query error. An empty
/// input yields empty views.
pub fn build_views(results: &[BenchResult], subtype: &str) -> Result<DigitViews> {
    let table = BenchTable::from_results(results)?.filter_subtype(subtype)?;
    let exact = table.exact_counts()?;
    let range = table.ranges_from_one()?;

    debug!(
        "{} '{}' rows: {} exact-count, {} from-one range",
        table.len(),
        subtype,
        exact.len(),
        range.len()
    );

    Ok(DigitViews {
        subtype: subtype.to_string(),
        exact,
        range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, time_ns: f64) -> BenchResult {
        BenchResult::new(name, time_ns)
    }

    #[test]
    fn test_record_from_result() {
        let record = BenchRecord::from_result(&result("alpha-u64-digits-3", 900.0)).unwrap();
        assert_eq!(
            record,
            BenchRecord {
                group: "alpha".to_string(),
                subtype: "u64".to_string(),
                min_count: 3,
                max_count: 3,
                mean_time_ns: 900.0,
            }
        );
    }

    #[test]
    fn test_filter_subtype() {
        let table = BenchTable::from_results(&[
            result("alpha-u64-digits-1-to-2", 1.0),
            result("alpha-u32-digits-1-to-2", 2.0),
            result("beta-u64-digits-3", 3.0),
        ])
        .unwrap();

        let records = table.filter_subtype("u64").unwrap().records().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.subtype == "u64"));
    }

    #[test]
    fn test_views_partition() {
        let views = build_views(
            &[
                result("alpha-u64-digits-1-to-1", 1.0),
                result("alpha-u64-digits-1-to-3", 2.0),
                result("alpha-u64-digits-3-to-3", 3.0),
                result("alpha-u64-digits-2-to-3", 4.0),
            ],
            "u64",
        )
        .unwrap();

        let exact = views.exact.records().unwrap();
        assert!(exact.iter().all(|r| r.min_count == r.max_count));
        assert_eq!(
            exact.iter().map(|r| r.max_count).collect::<Vec<_>>(),
            vec![1, 3]
        );

        let range = views.range.records().unwrap();
        assert!(range.iter().all(|r| r.min_count == 1));
        assert_eq!(
            range.iter().map(|r| r.max_count).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_series_sorted_by_count_within_group() {
        let views = build_views(
            &[
                result("beta-u64-digits-5-to-5", 50.0),
                result("alpha-u64-digits-5-to-5", 10.0),
                result("beta-u64-digits-2-to-2", 20.0),
                result("alpha-u64-digits-2-to-2", 4.0),
            ],
            "u64",
        )
        .unwrap();

        let series = views.exact.series().unwrap();
        assert_eq!(
            series,
            vec![
                GroupSeries {
                    label: "alpha".to_string(),
                    points: vec![(2, 4.0), (5, 10.0)],
                },
                GroupSeries {
                    label: "beta".to_string(),
                    points: vec![(2, 20.0), (5, 50.0)],
                },
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let views = build_views(&[], "u64").unwrap();
        assert!(views.exact.is_empty());
        assert!(views.range.is_empty());
        assert!(views.exact.series().unwrap().is_empty());
        assert!(views.range.series().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_name_aborts() {
        let err = build_views(&[result("alpha-u64-five", 1.0)], "u64").unwrap_err();
        assert!(err.to_string().contains("alpha-u64-five"));
    }
}
