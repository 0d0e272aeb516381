mod config;
mod provenance;
mod table_io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{Settings, SpacingArg, UnitArg};
use loci::envelope::{envelope_of_ring, fill_locus, EnvelopeCfg};
use loci::geom2::resample_perimeter;
use loci::Point;
use provenance::{write_sidecar, Payload};
use serde_json::json;
use std::path::{Path, PathBuf};
use table_io::PointRecord;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "loci")]
#[command(about = "Impedance-locus envelopes from vertex tables")]
struct Cmd {
    /// Log debug events from the geometry core
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Write one `<start>-<end>_data_points.csv` envelope per range
    Envelope {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
        /// JSON settings file (levels, decimals, unit, reorder)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Sort vertices clockwise first (convex loci only)
        #[arg(long)]
        reorder: bool,
        /// Fixed base level count instead of the vertex-count ladder
        #[arg(long)]
        levels: Option<usize>,
        #[arg(long)]
        decimals: Option<i32>,
        #[arg(long, value_enum)]
        unit: Option<UnitArg>,
    },
    /// Rewrite a locus table with every locus sorted clockwise and closed
    Clockwise {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Interior fill points (and optional perimeter samples) per range
    Fill {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Target spacing between fill points along each level
        #[arg(long)]
        delta: f64,
        #[arg(long, value_enum, default_value_t = SpacingArg::AtMost)]
        spacing: SpacingArg,
        /// Also emit this many equally spaced boundary points per locus
        #[arg(long)]
        perimeter: Option<usize>,
        #[arg(long)]
        reorder: bool,
        #[arg(long)]
        decimals: Option<i32>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Envelope {
            input,
            out_dir,
            config,
            reorder,
            levels,
            decimals,
            unit,
        } => {
            let flags = Settings {
                levels,
                decimals,
                unit,
                reorder: reorder.then_some(true),
            };
            let settings = match config {
                Some(path) => Settings::load(&path)?.merged(flags),
                None => flags,
            };
            envelope(&input, &out_dir, &settings).map(|_| ())
        }
        Action::Clockwise { input, out } => clockwise(&input, &out),
        Action::Fill {
            input,
            out,
            delta,
            spacing,
            perimeter,
            reorder,
            decimals,
        } => {
            let settings = Settings {
                decimals,
                reorder: reorder.then_some(true),
                ..Settings::default()
            };
            fill(&input, &out, delta, spacing, perimeter, &settings).map(|_| ())
        }
        Action::Report => report(),
    }
}

fn envelope(input: &Path, out_dir: &Path, settings: &Settings) -> Result<Vec<PathBuf>> {
    tracing::info!(input = %input.display(), out_dir = %out_dir.display(), "envelope");
    let cfg = settings.envelope_cfg();
    let (set, _) = table_io::read_locus_table(input)?;
    let mut written = Vec::with_capacity(set.len());
    for (range, locus) in set.iter() {
        let ring = cfg.ring(&locus.verts);
        let table = envelope_of_ring(&ring, *range, &cfg);
        let out = out_dir.join(format!("{}.csv", table.file_stem()));
        let skipped = table_io::write_envelope(&out, &table, cfg.unit, cfg.decimals)?;
        if skipped > 0 {
            tracing::warn!(range = %range, skipped, "levels without a boundary crossing left out");
        }
        tracing::info!(
            range = %range,
            levels = table.len(),
            added = table.len() - table.base_levels,
            area = ring.area(),
            "{} levels created with mins and maxes",
            table.len()
        );
        write_sidecar(
            &out,
            Payload::new(
                "envelope",
                json!({
                    "input": input.to_string_lossy(),
                    "range": [range.start, range.end],
                    "settings": settings,
                    "vertices": ring.len(),
                    "levels": table.len(),
                    "skipped": skipped
                }),
            ),
        )?;
        written.push(out);
    }
    Ok(written)
}

fn clockwise(input: &Path, out: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "clockwise");
    let (set, rows) = table_io::read_locus_table(input)?;
    let cw = set.to_clockwise();
    for (range, locus) in cw.iter() {
        tracing::debug!(range = %range, vertices = locus.len(), "sorted clockwise");
    }
    // One extra row for the closing vertex.
    table_io::write_locus_table(out, &cw, rows + 1)?;
    write_sidecar(
        out,
        Payload::new("clockwise", json!({ "input": input.to_string_lossy() })),
    )?;
    Ok(())
}

fn fill(
    input: &Path,
    out: &Path,
    delta: f64,
    spacing: SpacingArg,
    perimeter: Option<usize>,
    settings: &Settings,
) -> Result<usize> {
    tracing::info!(input = %input.display(), out = %out.display(), delta, "fill");
    let cfg: EnvelopeCfg = settings.envelope_cfg();
    let (set, _) = table_io::read_locus_table(input)?;
    let mut records = Vec::new();
    for (range, locus) in set.iter() {
        let ring = cfg.ring(&locus.verts);
        let table = envelope_of_ring(&ring, *range, &cfg);
        let tag = |kind: &'static str| move |point: Point| PointRecord {
            range_start: range.start,
            range_end: range.end,
            kind,
            point,
        };
        let inner = fill_locus(&ring.verts, &table, delta, spacing.into(), &cfg.geom)
            .with_context(|| format!("filling range {range}"))?;
        let n_inner = inner.len();
        records.extend(inner.into_iter().map(tag("interior")));
        if let Some(n) = perimeter {
            let boundary = resample_perimeter(&ring.verts, n)
                .with_context(|| format!("resampling range {range}"))?;
            records.extend(boundary.into_iter().map(tag("perimeter")));
        }
        tracing::info!(range = %range, interior = n_inner, "fill points generated");
    }
    table_io::write_points(out, &records, cfg.decimals)?;
    write_sidecar(
        out,
        Payload::new(
            "fill",
            json!({
                "input": input.to_string_lossy(),
                "delta": delta,
                "spacing": spacing,
                "perimeter": perimeter,
                "points": records.len()
            }),
        ),
    )?;
    Ok(records.len())
}

fn report() -> Result<()> {
    let rec = provenance::Record::bare();
    println!("{}", serde_json::to_string_pretty(&rec)?);
    Ok(())
}
