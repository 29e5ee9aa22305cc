use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use lrhull::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "lrhull")]
#[command(about = "Incremental convex hulls under naive and robust orientation predicates")]
struct Cmd {
    /// Increase log verbosity (-v debug, -vv trace); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build one hull and print it as JSON
    Hull {
        #[command(flatten)]
        source: Source,
        #[arg(long, default_value_t = PredicateKind::Robust)]
        predicate: PredicateKind,
        #[arg(long, default_value_t = TiePolicy::Prune)]
        tie: TiePolicy,
        /// Also write the JSON here, plus a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Build the hull under both predicates and audit each with the robust one
    Compare {
        #[command(flatten)]
        source: Source,
        #[arg(long, default_value_t = TiePolicy::Prune)]
        tie: TiePolicy,
    },
    /// Classify an ulp-spaced grid next to the line y = x under both predicates
    Signmap {
        #[arg(long, default_value_t = 64)]
        nx: usize,
        #[arg(long, default_value_t = 64)]
        ny: usize,
    },
    /// Print version and code revision
    Report,
}

/// Where the points come from. Without `--input` or `--random`, the fragile
/// six-point demo is used.
#[derive(Args, Clone, Debug)]
struct Source {
    /// CSV/Parquet with x,y columns, or JSON [[x, y], ...]
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,
    /// Draw this many random points instead
    #[arg(long)]
    random: Option<usize>,
    /// Cloud shape for --random: box, lattice or band
    #[arg(long, default_value = "box")]
    cloud: String,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl Source {
    fn label(&self) -> String {
        match (&self.input, self.random) {
            (Some(p), _) => p.display().to_string(),
            (None, Some(n)) => format!("random:{}:{n}:{}", self.cloud, self.seed),
            (None, None) => "fragile-demo".to_string(),
        }
    }

    fn load(&self) -> Result<Vec<Point>> {
        if let Some(path) = &self.input {
            return input::load_points(path);
        }
        let Some(count) = self.random else {
            return Ok(fragile_demo_points().to_vec());
        };
        let kind = match self.cloud.as_str() {
            "box" => CloudKind::UniformBox { half_width: 1.0 },
            "lattice" => CloudKind::Lattice { side: 16 },
            "band" => CloudKind::NearCollinearBand { eps: 1e-6 },
            other => bail!("unknown cloud `{other}` (expected box, lattice or band)"),
        };
        Ok(draw_cloud(CloudCfg { count, kind }, ReplayToken::new(self.seed, 0)))
    }
}

/// One hull plus its audit under the robust predicate.
#[derive(Serialize, Debug)]
struct HullReport {
    predicate: String,
    tie_policy: String,
    points: usize,
    hull: Vec<[f64; 2]>,
    signed_area2: f64,
    convex_under_robust: bool,
    outside_pairs: usize,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Hull {
            source,
            predicate,
            tie,
            out,
        } => hull(&source, predicate, tie, out.as_deref()),
        Action::Compare { source, tie } => compare(&source, tie),
        Action::Signmap { nx, ny } => signmap(nx, ny),
        Action::Report => report(),
    }
}

fn build_report(pred: PredicateKind, tie: TiePolicy, points: &[Point]) -> Result<HullReport> {
    let h = IncrementalHull::from_points(pred, HullCfg::with_tie_policy(tie), points)
        .with_context(|| format!("building hull with the {pred} predicate"))?;
    let verts = h.vertices();
    Ok(HullReport {
        predicate: pred.to_string(),
        tie_policy: tie.to_string(),
        points: points.len(),
        hull: verts.iter().map(|v| [v.x, v.y]).collect(),
        signed_area2: signed_area2(verts, &Robust),
        convex_under_robust: is_convex(verts, &Robust),
        outside_pairs: violations(verts, points, &Robust).len(),
    })
}

fn hull(source: &Source, pred: PredicateKind, tie: TiePolicy, out: Option<&Path>) -> Result<()> {
    let points = source.load()?;
    tracing::info!(source = %source.label(), %pred, %tie, n = points.len(), "hull");
    let rep = build_report(pred, tie, &points)?;
    if rep.outside_pairs > 0 {
        tracing::warn!(outside_pairs = rep.outside_pairs, "hull leaves points outside");
    }
    let doc = serde_json::to_vec_pretty(&rep)?;
    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(out, &doc).with_context(|| format!("writing {}", out.display()))?;
        let label = source.label();
        provenance::write_sidecar(
            out,
            &provenance::HullRun {
                source: &label,
                predicate: pred.as_str(),
                tie_policy: tie.as_str(),
                points: rep.points,
                hull_vertices: rep.hull.len(),
            },
        )?;
    }
    println!("{}", String::from_utf8(doc)?);
    Ok(())
}

fn compare_reports(points: &[Point], tie: TiePolicy) -> Result<serde_json::Value> {
    let mut reports = Vec::new();
    for pred in PredicateKind::ALL {
        match build_report(pred, tie, points) {
            Ok(rep) => reports.push(json!(rep)),
            Err(e) => {
                tracing::warn!(%pred, error = %e, "build_failed");
                reports.push(json!({ "predicate": pred.as_str(), "error": format!("{e:#}") }));
            }
        }
    }
    let agree = reports[0].get("hull").is_some() && reports[0].get("hull") == reports[1].get("hull");
    Ok(json!({
        "points": points.len(),
        "agree": agree,
        "reports": reports,
    }))
}

fn compare(source: &Source, tie: TiePolicy) -> Result<()> {
    let points = source.load()?;
    tracing::info!(source = %source.label(), %tie, n = points.len(), "compare");
    let doc = compare_reports(&points, tie)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn signmap_doc(nx: usize, ny: usize) -> Result<serde_json::Value> {
    let cfg = SignGridCfg {
        nx,
        ny,
        ..SignGridCfg::default()
    };
    let robust = SignGrid::sample(&Robust, &cfg).context("sampling robust sign grid")?;
    let naive = SignGrid::sample(&Naive, &cfg).context("sampling naive sign grid")?;
    let counts = |g: &SignGrid| {
        let c = g.counts();
        json!({ "left": c.left, "right": c.right, "collinear": c.collinear })
    };
    Ok(json!({
        "nx": nx,
        "ny": ny,
        "origin": [cfg.origin.x, cfg.origin.y],
        "step": cfg.step,
        "line": [[cfg.q.x, cfg.q.y], [cfg.p.x, cfg.p.y]],
        "naive": counts(&naive),
        "robust": counts(&robust),
        "mismatches": naive.mismatches(&robust),
    }))
}

fn signmap(nx: usize, ny: usize) -> Result<()> {
    tracing::info!(nx, ny, "signmap");
    println!("{}", serde_json::to_string_pretty(&signmap_doc(nx, ny)?)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "lrhull_version": lrhull::VERSION,
        "code_rev": provenance::current_git_rev(),
        "predicates": PredicateKind::ALL.map(|p| p.as_str()),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
