use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clockring::ring::{close_ring, is_clockwise, Point2};
use clockring::UtmZone;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::load_points;
use provenance::{write_sidecar, InputRecord, RingSummary};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Order UTM point sets into clockwise polygon rings")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sort a point table clockwise and write the ring as JSON
    Sort {
        /// Point table: .csv or .parquet (named columns) or .json ([[x, y], ...])
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// UTM zone of the coordinates, e.g. 17S; recorded as EPSG metadata
        #[arg(long, default_value = "17S")]
        zone: UtmZone,
        /// Repeat the first vertex at the end of the ring
        #[arg(long)]
        close: bool,
        #[arg(long, default_value = "x")]
        x_col: String,
        #[arg(long, default_value = "y")]
        y_col: String,
    },
    /// Print a small provenance JSON block
    Report,
}

/// JSON document written by `sort`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct RingDoc {
    zone: String,
    epsg: u32,
    closed: bool,
    clockwise: bool,
    points: usize,
    ring: Vec<[f64; 2]>,
}

struct SortArgs<'a> {
    input: &'a Path,
    zone: UtmZone,
    close: bool,
    x_col: &'a str,
    y_col: &'a str,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sort {
            input,
            out,
            zone,
            close,
            x_col,
            y_col,
        } => {
            let args = SortArgs {
                input: &input,
                zone,
                close,
                x_col: &x_col,
                y_col: &y_col,
            };
            sort(&args, &out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn sort(args: &SortArgs<'_>, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(
        input = %args.input.display(),
        out = %out.display(),
        zone = %args.zone,
        close = args.close,
        tag = ?tag,
        "sort"
    );
    let doc = build_ring(args)?;
    tracing::info!(
        points = doc.points,
        clockwise = doc.clockwise,
        epsg = doc.epsg,
        "ring_built"
    );
    if doc.points >= 3 && !doc.clockwise {
        tracing::warn!(points = doc.points, "ring is degenerate or not clockwise");
    }

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let summary = RingSummary::from_ring(args.zone, &doc.ring, doc.closed);
    let input = InputRecord::new(args.input, args.x_col, args.y_col);
    let prov = write_sidecar(out, input, summary, tag)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn build_ring(args: &SortArgs<'_>) -> Result<RingDoc> {
    let table = load_points(args.input, args.x_col, args.y_col)?;
    if table.is_empty() {
        tracing::warn!(input = %args.input.display(), "input has no points");
    }
    let points = table.len();
    let mut ring: Vec<Point2> = table
        .sort_clockwise()?
        .into_iter()
        .map(|(x, y)| Point2::new(x, y))
        .collect();
    let clockwise = is_clockwise(&ring);
    if args.close {
        close_ring(&mut ring);
    }
    Ok(RingDoc {
        zone: args.zone.to_string(),
        epsg: args.zone.epsg(),
        closed: args.close && !ring.is_empty(),
        clockwise,
        points,
        ring: ring.iter().map(|p| [p.x, p.y]).collect(),
    })
}

fn report(tag: Option<String>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report_doc(tag))?);
    Ok(())
}

fn report_doc(tag: Option<String>) -> serde_json::Value {
    serde_json::json!({
        "code_rev": provenance::code_rev(),
        "clockring_version": clockring::VERSION,
        "tag": tag,
        "default_zone": UtmZone::default().to_string(),
        "default_epsg": UtmZone::default().epsg(),
    })
}
