//! Tabular outputs: the feasible profile and the tree's edges.
//!
//! Format follows the file extension: `.parquet` via polars' parquet writer,
//! anything else as CSV with a header row.

use anyhow::{Context, Result};
use phaserrt::api::{PhasePoint, Tree};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// Profile points from a root to the goal, one row per point.
pub fn profile_frame(path: &[PhasePoint]) -> PolarsResult<DataFrame> {
    let s: Vec<f64> = path.iter().map(|p| p.s).collect();
    let sd: Vec<f64> = path.iter().map(|p| p.sd).collect();
    df!("s" => s, "sd" => sd)
}

/// One row per tree edge (`parent → child`), for external plotting.
pub fn tree_frame(tree: &Tree) -> PolarsResult<DataFrame> {
    let (mut ps, mut psd, mut s, mut sd) = (Vec::new(), Vec::new(), Vec::new(), Vec::new());
    for (parent, child) in tree.edges() {
        ps.push(parent.s);
        psd.push(parent.sd);
        s.push(child.s);
        sd.push(child.sd);
    }
    df!("parent_s" => ps, "parent_sd" => psd, "s" => s, "sd" => sd)
}

pub fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let is_parquet = out.extension().is_some_and(|e| e == "parquet");
    if is_parquet {
        ParquetWriter::new(file)
            .finish(df)
            .with_context(|| format!("writing {}", out.display()))?;
    } else {
        let mut file = file;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)
            .with_context(|| format!("writing {}", out.display()))?;
    }
    tracing::info!(rows = df.height(), out = %out.display(), "wrote table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phaserrt::api::{extend, ConstantBounds, RrtCfg};
    use rand::{rngs::StdRng, SeedableRng};
    use tempfile::tempdir;

    #[test]
    fn profile_round_trips_through_csv() {
        let path = vec![
            PhasePoint::new(0.0, 1.0),
            PhasePoint::new(0.5, 1.25),
            PhasePoint::new(1.0, 0.75),
        ];
        let dir = tempdir().unwrap();
        let out = dir.path().join("runs").join("profile.csv");
        let mut df = profile_frame(&path).unwrap();
        write_frame(&mut df, &out).unwrap();
        let back = LazyCsvReader::new(&out).finish().unwrap().collect().unwrap();
        assert_eq!(back.shape(), (3, 2));
        let sd = back.column("sd").unwrap().f64().unwrap();
        assert_eq!(sd.get(1), Some(1.25));
    }

    #[test]
    fn tree_frame_has_one_row_per_edge() {
        let o = ConstantBounds::new(1.0, -10.0, 10.0);
        let cfg = RrtCfg {
            step: 1e-2,
            ..RrtCfg::default()
        };
        let mut tree = Tree::initialize(1.0, 2.0, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        extend(&mut tree, PhasePoint::new(0.5, 1.5), &o, &cfg, &mut rng).unwrap();
        let df = tree_frame(&tree).unwrap();
        assert_eq!(df.height(), tree.len() - 3);
        assert_eq!(df.width(), 4);
    }

    #[test]
    fn parquet_extension_selects_parquet_writer() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("profile.parquet");
        let mut df = profile_frame(&[PhasePoint::new(0.0, 1.0)]).unwrap();
        write_frame(&mut df, &out).unwrap();
        let bytes = fs::read(&out).unwrap();
        assert_eq!(&bytes[..4], b"PAR1");
    }
}
