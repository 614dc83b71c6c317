//! Output tables: the expanded dual as rows, written as CSV, Parquet or JSON.

use anyhow::{bail, Context, Result};
use planar_dual::dual::{DualEdgeKind, ExpandedDual};
use planar_dual::PipelineOutput;
use polars::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// One dual edge with both endpoints spelled as `(from, to, key)` tokens.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DualRow {
    pub a_from: u64,
    pub a_to: u64,
    pub a_key: u32,
    pub b_from: u64,
    pub b_to: u64,
    pub b_key: u32,
    pub weight: f64,
    pub kind: &'static str,
    /// Original edge id for crossings, corner node for wedges.
    pub source: u64,
}

#[derive(Serialize)]
struct OrientedRow {
    from: u64,
    to: u64,
    key: u32,
    head: u64,
}

#[derive(Serialize)]
struct RunDoc<'a> {
    labels: &'a [String],
    chords: Vec<u64>,
    orientation: Vec<OrientedRow>,
    dual: Vec<DualRow>,
}

pub fn dual_rows(dual: &ExpandedDual) -> Vec<DualRow> {
    dual.edges()
        .iter()
        .map(|d| {
            let (a, b) = (dual.token(d.a), dual.token(d.b));
            let (kind, source) = match d.kind {
                DualEdgeKind::Crossing(e) => ("crossing", e.0 as u64),
                DualEdgeKind::Wedge { around } => ("wedge", around.0 as u64),
            };
            DualRow {
                a_from: a.from.0 as u64,
                a_to: a.to.0 as u64,
                a_key: a.key,
                b_from: b.from.0 as u64,
                b_to: b.to.0 as u64,
                b_key: b.key,
                weight: d.weight,
                kind,
                source,
            }
        })
        .collect()
}

pub fn dual_frame(rows: &[DualRow]) -> PolarsResult<DataFrame> {
    let col_u64 = |f: fn(&DualRow) -> u64| rows.iter().map(f).collect::<Vec<u64>>();
    let col_u32 = |f: fn(&DualRow) -> u32| rows.iter().map(f).collect::<Vec<u32>>();
    df!(
        "a_from" => col_u64(|r| r.a_from),
        "a_to" => col_u64(|r| r.a_to),
        "a_key" => col_u32(|r| r.a_key),
        "b_from" => col_u64(|r| r.b_from),
        "b_to" => col_u64(|r| r.b_to),
        "b_key" => col_u32(|r| r.b_key),
        "weight" => rows.iter().map(|r| r.weight).collect::<Vec<f64>>(),
        "kind" => rows.iter().map(|r| r.kind).collect::<Vec<&str>>(),
        "source" => col_u64(|r| r.source)
    )
}

/// Write the run to `out`; the extension picks the format.
pub fn write_run(out: &Path, run: &PipelineOutput, labels: &[String]) -> Result<usize> {
    let rows = dual_rows(&run.dual);
    let n = rows.len();
    let ext = out.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "csv" | "parquet" => {
            let mut df = dual_frame(&rows)?;
            let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
            if ext == "csv" {
                CsvWriter::new(file).finish(&mut df)?;
            } else {
                ParquetWriter::new(file).finish(&mut df)?;
            }
        }
        "json" => {
            let g = run.embedding.graph();
            let orientation = g
                .edge_ids()
                .map(|e| {
                    let t = g.token(e.forward());
                    OrientedRow {
                        from: t.from.0 as u64,
                        to: t.to.0 as u64,
                        key: t.key,
                        head: run.orientation.head(e).0 as u64,
                    }
                })
                .collect();
            let doc = RunDoc {
                labels,
                chords: run.triangulation.chords.iter().map(|e| e.0 as u64).collect(),
                orientation,
                dual: rows,
            };
            std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        other => bail!("unsupported output extension {other:?} (use csv, parquet or json)"),
    }
    Ok(n)
}
