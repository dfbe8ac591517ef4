use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use trajectory::frame::compute_frame;
use trajectory::path::PathSet;
use trajectory::view::heading_up_view;
use trajectory::{ContainmentAnchor, TangentMode, TrajectoryCfg};

mod provenance;
mod record;
mod table;

use provenance::{write_sidecar, Payload};
use record::FrameRecord;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Frame driver for the trajectory kernel")]
struct Cmd {
    /// JSON configuration file; missing fields keep their defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the number of samples per lane
    #[arg(long, global = true)]
    samples: Option<usize>,

    /// Override the tangent policy at the last sample
    #[arg(long, global = true, value_enum)]
    mode: Option<ModeArg>,

    /// Classify every frame against the body of this frame
    #[arg(long, global = true)]
    anchor_frame: Option<usize>,

    /// Log per-frame headings
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Clamp,
    Wrap,
}

impl From<ModeArg> for TangentMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Clamp => TangentMode::Clamp,
            ModeArg::Wrap => TangentMode::Wrap,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Write the sampled lanes as a table (.csv or .parquet)
    Path {
        #[arg(long)]
        out: PathBuf,
    },
    /// Drive the frame computation and write one JSON object per frame
    Frames {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Exclusive; defaults to the number of samples
        #[arg(long)]
        end: Option<usize>,
        /// Include the heading-up projection of each frame
        #[arg(long)]
        heading_up: bool,
    },
    /// Print a single frame as pretty JSON
    Frame {
        #[arg(long)]
        index: usize,
        #[arg(long)]
        heading_up: bool,
    },
    /// Print the effective configuration and code revision
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
    let cfg = load_cfg(&cmd)?;
    match cmd.action {
        Action::Path { ref out } => write_path(&cfg, out),
        Action::Frames {
            ref out,
            start,
            end,
            heading_up,
        } => write_frames(&cfg, out, start, end, heading_up),
        Action::Frame { index, heading_up } => print_frame(&cfg, index, heading_up),
        Action::Report => report(&cfg),
    }
}

fn load_cfg(cmd: &Cmd) -> Result<TrajectoryCfg> {
    let mut cfg = match &cmd.config {
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("reading config {}", p.display()))?;
            serde_json::from_str::<TrajectoryCfg>(&text)
                .with_context(|| format!("parsing config {}", p.display()))?
        }
        None => TrajectoryCfg::default(),
    };
    if let Some(n) = cmd.samples {
        cfg.samples = n;
    }
    if let Some(m) = cmd.mode {
        cfg.tangent_mode = m.into();
    }
    if let Some(k) = cmd.anchor_frame {
        cfg.anchor = ContainmentAnchor::Fixed(k);
    }
    cfg.validate().context("invalid configuration")?;
    Ok(cfg)
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn write_path(cfg: &TrajectoryCfg, out: &Path) -> Result<()> {
    tracing::info!(out = %out.display(), samples = cfg.samples, "path");
    let path = PathSet::from_cfg(cfg)?;
    ensure_parent(out)?;
    let rows = table::write_table(&path, out)?;
    tracing::info!(rows, "path_table_written");
    write_sidecar(out, Payload::new("path", cfg, json!({ "rows": rows })))?;
    Ok(())
}

fn write_frames(
    cfg: &TrajectoryCfg,
    out: &Path,
    start: usize,
    end: Option<usize>,
    heading_up: bool,
) -> Result<()> {
    let path = PathSet::from_cfg(cfg)?;
    let end = end.unwrap_or(path.len()).min(path.len());
    if start > end {
        bail!("empty frame range {start}..{end}");
    }
    tracing::info!(out = %out.display(), start, end, heading_up, "frames");
    ensure_parent(out)?;
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let mut w = BufWriter::new(file);
    let mut written = 0usize;
    let mut skipped = 0usize;
    for i in start..end {
        let Some(st) = compute_frame(&path, cfg, i) else {
            tracing::warn!(frame = i, "frame undefined; skipped");
            skipped += 1;
            continue;
        };
        tracing::debug!(
            frame = i,
            angle_deg = st.body.heading_degrees(),
            fallback = st.heading_fallback,
            "angle"
        );
        let view = heading_up.then(|| heading_up_view(&st, &path));
        serde_json::to_writer(&mut w, &FrameRecord::new(&st, view.as_ref()))?;
        w.write_all(b"\n")?;
        written += 1;
    }
    w.flush()?;
    tracing::info!(written, skipped, "frames_written");
    write_sidecar(
        out,
        Payload::new(
            "frames",
            cfg,
            json!({ "start": start, "end": end, "heading_up": heading_up, "written": written }),
        ),
    )?;
    Ok(())
}

fn print_frame(cfg: &TrajectoryCfg, index: usize, heading_up: bool) -> Result<()> {
    let path = PathSet::from_cfg(cfg)?;
    let Some(st) = compute_frame(&path, cfg, index) else {
        bail!(
            "frame {index} is undefined (samples={}, mode={:?})",
            path.len(),
            cfg.tangent_mode
        );
    };
    let view = heading_up.then(|| heading_up_view(&st, &path));
    let rec = FrameRecord::new(&st, view.as_ref());
    println!("{}", serde_json::to_string_pretty(&rec)?);
    Ok(())
}

fn report(cfg: &TrajectoryCfg) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": trajectory::VERSION,
        "cfg": cfg,
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn overrides_apply_on_top_of_config_file() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("cfg.json");
        std::fs::write(&cfg_path, r#"{"samples": 120, "width": 2.0}"#).unwrap();
        let cmd = Cmd::try_parse_from([
            "cli",
            "--config",
            cfg_path.to_str().unwrap(),
            "--mode",
            "clamp",
            "--anchor-frame",
            "7",
            "report",
        ])
        .unwrap();
        let cfg = load_cfg(&cmd).unwrap();
        assert_eq!(cfg.samples, 120);
        assert_eq!(cfg.width, 2.0);
        assert_eq!(cfg.tangent_mode, TangentMode::Clamp);
        assert_eq!(cfg.anchor, ContainmentAnchor::Fixed(7));
    }

    #[test]
    fn single_sample_aborts_at_startup() {
        let cmd = Cmd::try_parse_from(["cli", "--samples", "1", "report"]).unwrap();
        let err = load_cfg(&cmd).unwrap_err();
        assert!(format!("{err:#}").contains("at least 2 samples"));
    }

    #[test]
    fn frames_command_writes_jsonl_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("run").join("frames.jsonl");
        let cfg = TrajectoryCfg {
            samples: 40,
            tangent_mode: TangentMode::Clamp,
            ..Default::default()
        };
        write_frames(&cfg, &out, 30, None, true).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        // Frames 30..=38; the last sample is undefined under clamp.
        assert_eq!(text.lines().count(), 9);
        let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert_eq!(first["frame"], 30);
        assert!(first["heading_up"]["outline"].is_array());
        assert!(dir.path().join("run").join("frames.provenance.json").exists());
        assert!(write_frames(&cfg, &out, 41, Some(40), false).is_err());
    }
}
