use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use eve_bench::device::{JWire, JWireParams};
use eve_bench::intervention::{AorticArchRandom, ArchSchedule, ArchVarietyImageV2};
use polars::prelude::*;
use serde_json::json;
use std::fs::File;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{write_sidecar, Payload, Provenance};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Aortic-arch benchmark device and environment tooling")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Derive the J-wire descriptor (defaults, or overrides from a JSON file)
    Describe {
        #[arg(long)]
        params: Option<String>,
        #[arg(long)]
        out: Option<String>,
    },
    /// Emit the ArchVarietyImageV2 environment configuration
    Env {
        #[arg(long, default_value_t = 1)]
        episodes_between_arch_change: u32,
        #[arg(long)]
        no_stop_at_tree_end: bool,
        #[arg(long)]
        normalize_action: bool,
        /// Use a J-wire built from this JSON parameter file as the instrument
        #[arg(long)]
        jwire: Option<String>,
        #[arg(long)]
        out: Option<String>,
    },
    /// Tabulate derived counts over a range of one discretization density
    Sweep {
        #[arg(long, value_enum)]
        param: Density,
        #[arg(long)]
        from: f64,
        #[arg(long)]
        to: f64,
        #[arg(long, default_value_t = 10)]
        steps: usize,
        #[arg(long)]
        params: Option<String>,
        /// `.parquet` writes Parquet, anything else CSV
        #[arg(long)]
        out: String,
    },
    /// Print the per-episode arch draws as JSON lines
    Schedule {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        episodes: u64,
        #[arg(long, default_value_t = 1)]
        episodes_between_change: u32,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Density {
    VisuEdges,
    CollisEdgesTip,
    CollisEdgesStraight,
    BeamsTip,
    BeamsStraight,
}

impl Density {
    fn field(self) -> &'static str {
        match self {
            Density::VisuEdges => "visu_edges_per_mm",
            Density::CollisEdgesTip => "collis_edges_per_mm_tip",
            Density::CollisEdgesStraight => "collis_edges_per_mm_straight",
            Density::BeamsTip => "beams_per_mm_tip",
            Density::BeamsStraight => "beams_per_mm_straight",
        }
    }

    fn apply(self, params: &mut JWireParams, value: f64) {
        let slot = match self {
            Density::VisuEdges => &mut params.visu_edges_per_mm,
            Density::CollisEdgesTip => &mut params.collis_edges_per_mm_tip,
            Density::CollisEdgesStraight => &mut params.collis_edges_per_mm_straight,
            Density::BeamsTip => &mut params.beams_per_mm_tip,
            Density::BeamsStraight => &mut params.beams_per_mm_straight,
        };
        *slot = value;
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Describe { params, out } => describe(params, out, cmd.tag),
        Action::Env {
            episodes_between_arch_change,
            no_stop_at_tree_end,
            normalize_action,
            jwire,
            out,
        } => env(
            episodes_between_arch_change,
            !no_stop_at_tree_end,
            normalize_action,
            jwire,
            out,
            cmd.tag,
        ),
        Action::Sweep {
            param,
            from,
            to,
            steps,
            params,
            out,
        } => sweep(param, from, to, steps, params, out, cmd.tag),
        Action::Schedule {
            seed,
            episodes,
            episodes_between_change,
        } => schedule(seed, episodes, episodes_between_change),
        Action::Report => report(cmd.tag),
    }
}

fn load_params(path: Option<&str>) -> Result<JWireParams> {
    match path {
        None => Ok(JWireParams::default()),
        Some(path) => {
            let bytes = std::fs::read(path).with_context(|| format!("reading {path}"))?;
            serde_json::from_slice(&bytes).with_context(|| format!("parsing {path}"))
        }
    }
}

fn ensure_parent(out: &str) -> Result<()> {
    if let Some(parent) = Path::new(out).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Print to stdout, or write `out` plus its provenance sidecar.
fn emit_json(doc: &serde_json::Value, out: Option<String>, payload: Payload) -> Result<()> {
    let text = serde_json::to_string_pretty(doc)?;
    match out {
        None => println!("{text}"),
        Some(out) => {
            ensure_parent(&out)?;
            std::fs::write(&out, text).with_context(|| format!("writing {out}"))?;
            write_sidecar(&out, payload)?;
        }
    }
    Ok(())
}

fn describe(params: Option<String>, out: Option<String>, tag: Option<String>) -> Result<()> {
    tracing::info!(params = ?params, out = ?out, "describe");
    let wire = JWire::new(load_params(params.as_deref())?)?;
    tracing::info!(
        num_edges = wire.num_edges(),
        num_edges_collis = ?wire.num_edges_collis(),
        density_of_beams = ?wire.density_of_beams(),
        "derived"
    );
    let doc = serde_json::to_value(&wire)?;
    let payload = Payload::new(json!({ "command": "describe", "params": params }), tag);
    emit_json(&doc, out, payload)
}

fn env(
    episodes_between_arch_change: u32,
    stop_instrument_at_tree_end: bool,
    normalize_action: bool,
    jwire: Option<String>,
    out: Option<String>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(
        episodes_between_arch_change,
        stop_instrument_at_tree_end,
        normalize_action,
        jwire = ?jwire,
        "env"
    );
    let mut intervention = ArchVarietyImageV2::new(
        episodes_between_arch_change,
        stop_instrument_at_tree_end,
        normalize_action,
    )?;
    if jwire.is_some() {
        let wire = JWire::new(load_params(jwire.as_deref())?)?;
        intervention = intervention.with_instrument(wire)?;
    }
    let doc = serde_json::to_value(&intervention)?;
    let payload = Payload::new(
        json!({
            "command": "env",
            "episodes_between_arch_change": episodes_between_arch_change,
            "stop_instrument_at_tree_end": stop_instrument_at_tree_end,
            "normalize_action": normalize_action,
            "jwire": jwire,
        }),
        tag,
    );
    emit_json(&doc, out, payload)
}

/// Evenly spaced values over `[from, to]`, inclusive.
fn sweep_values(from: f64, to: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![from],
        n => (0..n)
            .map(|i| from + (to - from) * i as f64 / (n - 1) as f64)
            .collect(),
    }
}

fn sweep_frame(base: &JWireParams, param: Density, values: &[f64]) -> Result<DataFrame> {
    let mut value_col = Vec::with_capacity(values.len());
    let mut num_edges = Vec::with_capacity(values.len());
    let mut collis_straight = Vec::with_capacity(values.len());
    let mut collis_tip = Vec::with_capacity(values.len());
    let mut beams_straight = Vec::with_capacity(values.len());
    let mut beams_tip = Vec::with_capacity(values.len());
    for &value in values {
        let mut params = base.clone();
        param.apply(&mut params, value);
        match JWire::new(params) {
            Ok(wire) => {
                value_col.push(value);
                num_edges.push(wire.num_edges());
                let [cs, ct] = wire.num_edges_collis();
                collis_straight.push(cs);
                collis_tip.push(ct);
                let [bs, bt] = wire.density_of_beams();
                beams_straight.push(bs);
                beams_tip.push(bt);
            }
            Err(err) => tracing::warn!(value, %err, "skipping invalid sweep value"),
        }
    }
    let df = df!(
        param.field() => value_col,
        "num_edges" => num_edges,
        "num_edges_collis_straight" => collis_straight,
        "num_edges_collis_tip" => collis_tip,
        "beams_straight" => beams_straight,
        "beams_tip" => beams_tip,
    )?;
    Ok(df)
}

#[allow(clippy::too_many_arguments)]
fn sweep(
    param: Density,
    from: f64,
    to: f64,
    steps: usize,
    params: Option<String>,
    out: String,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(param = param.field(), from, to, steps, out, "sweep");
    if steps == 0 {
        bail!("--steps must be >= 1");
    }
    let base = load_params(params.as_deref())?;
    let mut df = sweep_frame(&base, param, &sweep_values(from, to, steps))?;
    tracing::info!(rows = df.height(), cols = df.width(), "sweep_table");

    ensure_parent(&out)?;
    let mut file = File::create(&out).with_context(|| format!("creating {out}"))?;
    if out.ends_with(".parquet") {
        ParquetWriter::new(&mut file).finish(&mut df)?;
    } else {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;
    }
    let payload = Payload::new(
        json!({
            "command": "sweep",
            "param": param.field(),
            "from": from,
            "to": to,
            "steps": steps,
            "params": params,
            "rows": df.height(),
        }),
        tag,
    );
    write_sidecar(&out, payload)?;
    Ok(())
}

fn schedule(seed: u64, episodes: u64, episodes_between_change: u32) -> Result<()> {
    tracing::info!(seed, episodes, episodes_between_change, "schedule");
    let tree = AorticArchRandom {
        episodes_between_change,
        seed: Some(seed),
        ..AorticArchRandom::default()
    };
    let sched = ArchSchedule::from_tree(&tree)?;
    for episode in 0..episodes {
        let draw = sched.draw(episode);
        println!(
            "{}",
            serde_json::to_string(&json!({ "episode": episode, "draw": draw }))?
        );
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&Provenance::report(tag))?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_values_are_inclusive() {
        assert_eq!(sweep_values(0.5, 1.5, 3), vec![0.5, 1.0, 1.5]);
        assert_eq!(sweep_values(2.0, 9.0, 1), vec![2.0]);
        assert!(sweep_values(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn sweep_frame_skips_invalid_rows() {
        let df = sweep_frame(
            &JWireParams::default(),
            Density::BeamsTip,
            &[-1.0, 0.0, 1.4, 2.8],
        )
        .unwrap();
        assert_eq!(df.height(), 2);
        let beams_tip = df.column("beams_tip").unwrap().u32().unwrap();
        assert_eq!(beams_tip.get(0), Some(22));
        assert!(beams_tip.get(1).unwrap() >= 22);
        // The swept density leaves the other counts untouched.
        let collis_tip = df.column("num_edges_collis_tip").unwrap().u32().unwrap();
        assert_eq!(collis_tip.get(0), Some(31));
        assert_eq!(collis_tip.get(1), Some(31));
    }

    #[test]
    fn params_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wire.json");
        std::fs::write(&path, r#"{"tip_length": 450.0}"#).unwrap();
        let params = load_params(path.to_str()).unwrap();
        assert_eq!(params.tip_length, 450.0);
        assert_eq!(params.length, 450.0);
        let wire = JWire::new(params).unwrap();
        assert_eq!(wire.density_of_beams()[0], 0);
    }

    #[test]
    fn density_apply_targets_named_field() {
        let mut params = JWireParams::default();
        Density::CollisEdgesStraight.apply(&mut params, 0.7);
        assert_eq!(params.collis_edges_per_mm_straight, 0.7);
        assert_eq!(Density::CollisEdgesStraight.field(), "collis_edges_per_mm_straight");
    }
}
