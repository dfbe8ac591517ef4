//! Tabular export of a `PathSet` (`fr, X, Y, XL, YL, XR, YR`).

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use trajectory::path::{Lane, PathSet};

fn coords(path: &PathSet, lane: Lane) -> (Vec<f64>, Vec<f64>) {
    path.lane(lane).iter().map(|p| (p.x, p.y)).unzip()
}

/// One row per sample; frame numbers are 1-based.
pub fn path_frame(path: &PathSet) -> PolarsResult<DataFrame> {
    let (x, y) = coords(path, Lane::Center);
    let (xl, yl) = coords(path, Lane::Left);
    let (xr, yr) = coords(path, Lane::Right);
    df!(
        "fr" => path.frame_numbers(),
        "X" => x,
        "Y" => y,
        "XL" => xl,
        "YL" => yl,
        "XR" => xr,
        "YR" => yr
    )
}

/// Write the path table as CSV or Parquet depending on the extension of `out`.
/// Returns the number of rows written.
pub fn write_table(path: &PathSet, out: &Path) -> Result<usize> {
    let mut df = path_frame(path).context("building path table")?;
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match ext.as_deref() {
        Some("csv") => {
            CsvWriter::new(file)
                .include_header(true)
                .finish(&mut df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        Some("parquet") => {
            ParquetWriter::new(file)
                .finish(&mut df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        _ => bail!("unsupported table format for {} (use .csv or .parquet)", out.display()),
    }
    Ok(df.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use trajectory::TrajectoryCfg;

    fn small_path() -> PathSet {
        let cfg = TrajectoryCfg {
            samples: 50,
            ..Default::default()
        };
        PathSet::from_cfg(&cfg).unwrap()
    }

    #[test]
    fn table_has_one_row_per_sample() {
        let df = path_frame(&small_path()).unwrap();
        assert_eq!(df.shape(), (50, 7));
        for lane in Lane::ALL {
            let (cx, cy) = lane.columns();
            assert!(df.column(cx).is_ok() && df.column(cy).is_ok());
        }
    }

    #[test]
    fn csv_round_trips_through_lazy_reader() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("path.csv");
        let rows = write_table(&small_path(), &out).unwrap();
        assert_eq!(rows, 50);
        let df = LazyCsvReader::new(&out)
            .with_infer_schema_length(Some(100))
            .finish()
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(df.shape(), (50, 7));
        let x = df.column("X").unwrap().f64().unwrap().get(0).unwrap();
        assert!((x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        assert!(write_table(&small_path(), &dir.path().join("path.txt")).is_err());
    }
}
