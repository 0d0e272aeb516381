//! CSV boundary: locus tables in, envelope and point tables out.
//!
//! Locus table layout (no header): row 0 holds range labels, two per locus;
//! every following row holds `(R, X)` pairs side by side. Blank cells are
//! allowed where loci have fewer vertices.

use anyhow::{anyhow, Context, Result};
use loci::envelope::{column_headers, EnvelopeTable, Unit};
use loci::{LocusSet, Point};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// Read a locus table; every cell is parsed as a float, unparsable cells become blanks.
pub fn read_locus_table(path: &Path) -> Result<(LocusSet, usize)> {
    let df = LazyCsvReader::new(path)
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    if df.height() == 0 {
        return Err(anyhow!("{} is empty", path.display()));
    }
    let mut labels = Vec::with_capacity(df.width());
    let mut columns = Vec::with_capacity(df.width());
    for i in 0..df.width() {
        let s = df
            .select_at_idx(i)
            .ok_or_else(|| anyhow!("missing column {i}"))?
            .cast(&DataType::Float64)?;
        let mut cells: Vec<Option<f64>> = s.f64()?.into_iter().collect();
        labels.push(cells.remove(0));
        columns.push(cells);
    }
    let rows = df.height() - 1;
    let set = LocusSet::from_columns(&labels, &columns)
        .with_context(|| format!("parsing locus table {}", path.display()))?;
    Ok((set, rows))
}

/// Write one envelope table: sentinel row first, then rows that hit the locus.
///
/// Returns the number of no-crossing rows left out.
pub fn write_envelope(path: &Path, table: &EnvelopeTable, unit: Unit, decimals: i32) -> Result<usize> {
    let records: Vec<[f64; 3]> = table
        .rounded(decimals)
        .into_iter()
        .filter(|rec| rec.iter().all(|v| v.is_finite()))
        .collect();
    let skipped = table.len() + 1 - records.len();
    let [h0, h1, h2] = column_headers(unit);
    let col = |k: usize| records.iter().map(|rec| rec[k]).collect::<Vec<f64>>();
    let mut df = DataFrame::new(vec![
        Series::new(h0.as_str().into(), col(0)),
        Series::new(h1.as_str().into(), col(1)),
        Series::new(h2.as_str().into(), col(2)),
    ])?;
    write_csv(path, &mut df, true)?;
    Ok(skipped)
}

/// Write a locus table back in the input layout (labels row, then vertex rows).
pub fn write_locus_table(path: &Path, set: &LocusSet, rows: usize) -> Result<()> {
    let (labels, columns) = set.to_columns(rows);
    let series: Vec<Series> = labels
        .iter()
        .zip(columns)
        .enumerate()
        .map(|(i, (label, cells))| {
            let mut values = Vec::with_capacity(cells.len() + 1);
            values.push(Some(*label));
            values.extend(cells);
            Series::new(format!("column_{}", i + 1).as_str().into(), values)
        })
        .collect();
    let mut df = DataFrame::new(series)?;
    write_csv(path, &mut df, false)
}

/// One generated point, tagged with its source range and generator.
pub struct PointRecord {
    pub range_start: f64,
    pub range_end: f64,
    pub kind: &'static str,
    pub point: Point,
}

/// Write generated points as `range_start,range_end,kind,r,x`.
pub fn write_points(path: &Path, points: &[PointRecord], decimals: i32) -> Result<()> {
    let round = |v: f64| loci::geom2::round_to(v, decimals);
    let mut df = DataFrame::new(vec![
        Series::new(
            "range_start".into(),
            points.iter().map(|p| p.range_start).collect::<Vec<f64>>(),
        ),
        Series::new(
            "range_end".into(),
            points.iter().map(|p| p.range_end).collect::<Vec<f64>>(),
        ),
        Series::new(
            "kind".into(),
            points.iter().map(|p| p.kind).collect::<Vec<&str>>(),
        ),
        Series::new(
            "r".into(),
            points.iter().map(|p| round(p.point.x)).collect::<Vec<f64>>(),
        ),
        Series::new(
            "x".into(),
            points.iter().map(|p| round(p.point.y)).collect::<Vec<f64>>(),
        ),
    ])?;
    write_csv(path, &mut df, true)
}

fn write_csv(path: &Path, df: &mut DataFrame, header: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(header)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loci::envelope::{extract_envelope, EnvelopeCfg, RangeTag};
    use loci::pt;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
16.5,20.5,20.5,24.5
0.63,6.99,0.63,7.5
0.63,8.06,0.63,8.06
0.74,8.81,0.85,9.53
1.0,8.81,1.04,9.53
1.0,6.99,,
0.63,6.99,,
";

    #[test]
    fn reads_ragged_locus_table() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("loci.csv");
        fs::write(&input, SAMPLE).unwrap();
        let (set, rows) = read_locus_table(&input).unwrap();
        assert_eq!(rows, 6);
        assert_eq!(set.ranges, vec![RangeTag::new(16.5, 20.5), RangeTag::new(20.5, 24.5)]);
        assert_eq!(set.loci[0].len(), 6);
        assert_eq!(set.loci[1].len(), 4);
        assert_eq!(set.loci[1].verts[3], pt(1.04, 9.53));
    }

    #[test]
    fn envelope_csv_has_sentinel_and_headers() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("env.csv");
        let square = [pt(0.0, 0.0), pt(0.0, 10.0), pt(10.0, 10.0), pt(10.0, 0.0)];
        let table = extract_envelope(&square, RangeTag::new(1.0, 2.0), &EnvelopeCfg::default());
        let skipped = write_envelope(&out, &table, Unit::Ohm, 5).unwrap();
        assert_eq!(skipped, 0);
        let text = fs::read_to_string(&out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("X(ohm),R_min(ohm),R_max(ohm)"));
        let sentinel: Vec<f64> = lines
            .next()
            .unwrap()
            .split(',')
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(sentinel, vec![-9999.0, 1.0, 2.0]);
        assert_eq!(text.lines().count(), 2 + table.len());
    }

    #[test]
    fn locus_table_round_trips() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("loci.csv");
        fs::write(&input, SAMPLE).unwrap();
        let (set, rows) = read_locus_table(&input).unwrap();
        let out = dir.path().join("cw.csv");
        let cw = set.to_clockwise();
        write_locus_table(&out, &cw, rows + 1).unwrap();
        let (back, back_rows) = read_locus_table(&out).unwrap();
        assert_eq!(back_rows, rows + 1);
        assert_eq!(back.ranges, set.ranges);
        assert_eq!(back.loci[1], cw.loci[1]);
    }
}
