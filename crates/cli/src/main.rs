use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hull::api::{checked_hull, same_cyclic_sequence};
use hull::rand::{draw_points, PointsCfg, ReplayToken};
use hull::{Algorithm, Point};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod figure;
mod handler;
mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls of integer point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgoArg {
    Graham,
    Jarvis,
    Quickhull,
    Monotone,
}

impl From<AlgoArg> for Algorithm {
    fn from(a: AlgoArg) -> Self {
        match a {
            AlgoArg::Graham => Algorithm::GrahamScan,
            AlgoArg::Jarvis => Algorithm::JarvisMarch,
            AlgoArg::Quickhull => Algorithm::QuickHull,
            AlgoArg::Monotone => Algorithm::MonotoneChain,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point list (.json, .csv, or - for stdin)
    Hull {
        #[arg(long, value_enum, default_value_t = AlgoArg::Graham)]
        algo: AlgoArg,
        #[arg(long, default_value = "-")]
        input: String,
        /// Output path; stdout if omitted. Writes a provenance sidecar next to it.
        #[arg(long)]
        out: Option<String>,
    },
    /// Emit a random point list as JSON
    Random {
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 100)]
        max_coord: i32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: Option<String>,
    },
    /// Run all strategies, check each result, and report agreement
    Compare {
        #[arg(long, default_value = "-")]
        input: String,
    },
    /// Render points and hull to SVG
    Figure {
        #[arg(long)]
        input: String,
        #[arg(long, value_enum, default_value_t = AlgoArg::Graham)]
        algo: AlgoArg,
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { algo, input, out } => run_hull(algo.into(), input, out),
        Action::Random {
            count,
            max_coord,
            seed,
            out,
        } => random(count, max_coord, seed, out),
        Action::Compare { input } => compare(input),
        Action::Figure { input, algo, out } => figure(input, algo.into(), out),
    }
}

fn run_hull(algo: Algorithm, input: String, out: Option<String>) -> Result<()> {
    let body = input::read_body(&input)?;
    let response = handler::handle_points(algo, &body)?;
    match out {
        Some(out) => {
            write_file(&out, &response)?;
            let payload = provenance::Payload::new(serde_json::json!({ "input": input }))
                .with_algorithm(algo);
            provenance::write_sidecar(&out, payload)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&response)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn random(count: usize, max_coord: i32, seed: u64, out: Option<String>) -> Result<()> {
    tracing::info!(count, max_coord, seed, "random");
    let points = draw_points(
        PointsCfg { count, max_coord },
        ReplayToken { seed, index: 0 },
    );
    let json = serde_json::to_vec_pretty(&points)?;
    match out {
        Some(out) => write_file(&out, &json)?,
        None => println!("{}", String::from_utf8_lossy(&json)),
    }
    Ok(())
}

/// `compare` output: one hull per strategy slug, plus whether they agree up to rotation.
#[derive(Serialize)]
struct CompareReport {
    #[serde(flatten)]
    hulls: BTreeMap<&'static str, Vec<Point>>,
    agree: bool,
}

fn compare(input: String) -> Result<()> {
    let points = input::read_points(&input)?;
    tracing::info!(input, points = points.len(), "compare");
    let mut hulls = BTreeMap::new();
    let mut failed = Vec::new();
    for algo in Algorithm::ALL {
        let checked = checked_hull(algo, &points);
        tracing::info!(
            algorithm = algo.name(),
            vertices = checked.hull.len(),
            verified = checked.verified,
            "hull"
        );
        if !checked.verified {
            failed.push(algo.name());
        }
        hulls.insert(algo.slug(), checked.hull);
    }
    let first = hulls.values().next().cloned().unwrap_or_default();
    let agree = hulls.values().all(|h| same_cyclic_sequence(&first, h));
    tracing::info!(agree, "compare done");
    let report = CompareReport { hulls, agree };
    println!("{}", serde_json::to_string_pretty(&report)?);
    if !failed.is_empty() {
        bail!("hull check failed for: {}", failed.join(", "));
    }
    Ok(())
}

fn figure(input: String, algo: Algorithm, out: String) -> Result<()> {
    let points = input::read_points(&input)?;
    tracing::info!(input, algorithm = algo.name(), "figure");
    let hull = algo.hull(&points);
    figure::write_svg(&out, &points, &hull)?;
    let payload =
        provenance::Payload::new(serde_json::json!({ "from": input })).with_algorithm(algo);
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn write_file(out: &str, bytes: &[u8]) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(out_path, bytes)?;
    Ok(())
}
