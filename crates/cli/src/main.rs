mod instance;
mod output;
mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use planar_dual::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use instance::{GraphDoc, Loaded};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Triangulate, orient and dualize planar graphs")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run the full pipeline and write the expanded dual (csv, parquet or json)
    Run {
        /// Graph as JSON, or an edge-list CSV (needs --positions)
        #[arg(long)]
        input: PathBuf,
        /// Node coordinates CSV with columns node,x,y
        #[arg(long)]
        positions: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Scope::All)]
        scope: Scope,
        /// Crossing weight for edges without one
        #[arg(long, default_value_t = 0.0)]
        default_weight: f64,
        /// Re-check face parity before building the dual
        #[arg(long)]
        validate: bool,
    },
    /// Draw a random jittered grid graph as JSON
    Generate {
        #[arg(long, default_value_t = 4)]
        width: usize,
        #[arg(long, default_value_t = 4)]
        height: usize,
        #[arg(long, default_value_t = 0.5)]
        diagonal_prob: f64,
        #[arg(long, default_value_t = 0.2)]
        jitter: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scope {
    All,
    Bounded,
}

impl From<Scope> for FaceScope {
    fn from(s: Scope) -> Self {
        match s {
            Scope::All => FaceScope::All,
            Scope::Bounded => FaceScope::Bounded,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            positions,
            out,
            scope,
            default_weight,
            validate,
        } => {
            let cfg = PipelineCfg {
                triangulate: TriangulateCfg {
                    scope: scope.into(),
                },
                dual: DualCfg { default_weight },
                validate,
            };
            run(&input, positions.as_deref(), &out, cfg, cmd.tag)
        }
        Action::Generate {
            width,
            height,
            diagonal_prob,
            jitter,
            seed,
            index,
            out,
        } => {
            let cfg = GridCfg {
                width,
                height,
                diagonal_prob,
                jitter,
                ..GridCfg::default()
            };
            generate(cfg, ReplayToken { seed, index }, &out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn load(input: &Path, positions: Option<&Path>) -> Result<Loaded> {
    let is_csv = input.extension().is_some_and(|e| e == "csv");
    match (is_csv, positions) {
        (true, Some(pos)) => instance::read_csv_pair(input, pos),
        (true, None) => anyhow::bail!("CSV edge lists need --positions"),
        (false, _) => instance::read_json(input),
    }
}

fn run(
    input: &Path,
    positions: Option<&Path>,
    out: &Path,
    cfg: PipelineCfg,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        scope = ?cfg.triangulate.scope,
        default_weight = cfg.dual.default_weight,
        tag = ?tag,
        "run"
    );
    let Loaded {
        instance: inst,
        labels,
    } = load(input, positions)?;
    let (nodes, edges) = (inst.graph.num_nodes(), inst.graph.num_edges());
    let result = run_pipeline_with_positions(inst.graph, &inst.positions, cfg)
        .with_context(|| format!("pipeline on {}", input.display()))?;

    ensure_parent(out)?;
    let rows = output::write_run(out, &result, &labels)?;
    tracing::info!(
        chords = result.triangulation.chords.len(),
        dual_edges = rows,
        "wrote dual"
    );

    let payload = Payload::new(serde_json::json!({
        "input": input.to_string_lossy(),
        "positions": positions.map(|p| p.to_string_lossy().into_owned()),
        "scope": format!("{:?}", cfg.triangulate.scope),
        "default_weight": cfg.dual.default_weight,
        "validate": cfg.validate,
        "nodes": nodes,
        "edges": edges,
        "chords": result.triangulation.chords.len(),
        "dual_edges": rows,
    }))
    .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn generate(cfg: GridCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(?cfg, seed = tok.seed, index = tok.index, tag = ?tag, "generate");
    let inst = draw_grid_instance(cfg, tok)?;
    ensure_parent(out)?;
    instance::write_json(out, &GraphDoc::from_instance(&inst))?;
    let payload = Payload::new(serde_json::json!({
        "width": cfg.width,
        "height": cfg.height,
        "diagonal_prob": cfg.diagonal_prob,
        "jitter": cfg.jitter,
        "seed": tok.seed,
        "index": tok.index,
        "edges": inst.graph.num_edges(),
    }))
    .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::block(&Payload::new(serde_json::json!({})).with_tag(tag));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
