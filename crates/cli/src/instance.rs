//! Input graphs: JSON documents with labelled nodes, or CSV edge lists.
//!
//! JSON layout:
//! ```json
//! { "nodes": [{"id": "a", "x": 0.0, "y": 0.0}, ...],
//!   "edges": [{"u": "a", "v": "b", "weight": 0.5}, ...] }
//! ```
//! CSV edge lists have columns `u,v[,weight]` with integer node ids; positions come
//! from a second CSV with columns `node,x,y`.

use anyhow::{anyhow, bail, Context, Result};
use nalgebra::Vector2;
use planar_dual::graph::{MultiGraph, NodeId};
use planar_dual::rand::PlanarInstance;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub u: String,
    pub v: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphDoc {
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
}

/// A loaded graph plus the external label of each dense node id.
pub struct Loaded {
    pub instance: PlanarInstance,
    pub labels: Vec<String>,
}

impl GraphDoc {
    pub fn from_instance(inst: &PlanarInstance) -> Self {
        let g = &inst.graph;
        let nodes = inst
            .positions
            .iter()
            .enumerate()
            .map(|(i, p)| NodeSpec {
                id: i.to_string(),
                x: p.x,
                y: p.y,
            })
            .collect();
        let edges = g
            .edge_ids()
            .map(|e| {
                let rec = g.record(e);
                EdgeSpec {
                    u: rec.ends[0].to_string(),
                    v: rec.ends[1].to_string(),
                    weight: rec.weight,
                }
            })
            .collect();
        Self { nodes, edges }
    }

    pub fn into_loaded(self) -> Result<Loaded> {
        let mut index: HashMap<&str, NodeId> = HashMap::new();
        for (i, n) in self.nodes.iter().enumerate() {
            if index.insert(n.id.as_str(), NodeId(i)).is_some() {
                bail!("duplicate node id {:?}", n.id);
            }
        }
        let mut graph = MultiGraph::with_nodes(self.nodes.len());
        for (i, e) in self.edges.iter().enumerate() {
            let lookup = |label: &str| {
                index
                    .get(label)
                    .copied()
                    .ok_or_else(|| anyhow!("edge {i} names unknown node {label:?}"))
            };
            let (u, v) = (lookup(&e.u)?, lookup(&e.v)?);
            let id = graph.add_edge(u, v).with_context(|| format!("edge {i}"))?;
            if let Some(w) = e.weight {
                graph.set_weight(id, w)?;
            }
        }
        let positions = self.nodes.iter().map(|n| Vector2::new(n.x, n.y)).collect();
        let labels = self.nodes.into_iter().map(|n| n.id).collect();
        Ok(Loaded {
            instance: PlanarInstance { graph, positions },
            labels,
        })
    }
}

pub fn read_json(path: &Path) -> Result<Loaded> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: GraphDoc =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    doc.into_loaded()
}

pub fn write_json(path: &Path, doc: &GraphDoc) -> Result<()> {
    std::fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), path = %path.display(), "csv");
    Ok(df)
}

fn int_column(df: &DataFrame, name: &str) -> Result<Vec<usize>> {
    let s = df.column(name)?.cast(&DataType::Int64)?;
    s.i64()?
        .into_iter()
        .enumerate()
        .map(|(row, x)| match x {
            Some(x) if x >= 0 => Ok(x as usize),
            _ => Err(anyhow!("column {name}, row {row}: expected a node id")),
        })
        .collect()
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let s = df.column(name)?.cast(&DataType::Float64)?;
    Ok(s.f64()?.into_iter().collect())
}

/// Edge list from `edges` plus node coordinates from `positions`.
pub fn read_csv_pair(edges: &Path, positions: &Path) -> Result<Loaded> {
    let edf = read_csv(edges)?;
    let us = int_column(&edf, "u")?;
    let vs = int_column(&edf, "v")?;
    let weights = if edf.column("weight").is_ok() {
        float_column(&edf, "weight")?
    } else {
        vec![None; us.len()]
    };

    let pdf = read_csv(positions)?;
    let ids = int_column(&pdf, "node")?;
    let xs = float_column(&pdf, "x")?;
    let ys = float_column(&pdf, "y")?;
    let n = ids
        .iter()
        .chain(us.iter())
        .chain(vs.iter())
        .map(|&i| i + 1)
        .max()
        .unwrap_or(0);
    // NaN marks nodes without a row; the embedder rejects them
    let mut positions = vec![Vector2::new(f64::NAN, f64::NAN); n];
    for ((&id, x), y) in ids.iter().zip(xs).zip(ys) {
        positions[id] = Vector2::new(x.unwrap_or(f64::NAN), y.unwrap_or(f64::NAN));
    }

    let mut graph = MultiGraph::with_nodes(n);
    for (row, ((&u, &v), w)) in us.iter().zip(&vs).zip(weights).enumerate() {
        let id = graph
            .add_edge(NodeId(u), NodeId(v))
            .with_context(|| format!("edge row {row}"))?;
        if let Some(w) = w {
            graph.set_weight(id, w)?;
        }
    }
    Ok(Loaded {
        instance: PlanarInstance { graph, positions },
        labels: (0..n).map(|i| i.to_string()).collect(),
    })
}
