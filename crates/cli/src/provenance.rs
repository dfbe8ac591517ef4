use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;
use trajectory::TrajectoryCfg;

/// What produced an artifact: the command, the effective configuration, and any
/// command-specific parameters.
pub struct Payload {
    pub command: &'static str,
    pub cfg: Value,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, cfg: &TrajectoryCfg, params: Value) -> Self {
        Self {
            command,
            cfg: serde_json::to_value(cfg).unwrap_or(Value::Null),
            params,
        }
    }
}

/// Write `<artifact>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": trajectory::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "cfg": payload.cfg,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::debug!(path = %provenance_path.display(), "provenance_written");
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Build-time `GIT_COMMIT`, then the runtime variable, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/frames.jsonl");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/output/frames.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_cfg_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("path.csv");
        fs::write(&artifact, "fr\n").unwrap();
        let cfg = TrajectoryCfg {
            samples: 32,
            ..Default::default()
        };
        let payload = Payload::new("path", &cfg, json!({"rows": 32}));
        let prov = write_sidecar(&artifact, payload).unwrap();
        assert!(prov.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["command"], "path");
        assert_eq!(parsed["cfg"]["samples"], 32);
        assert_eq!(parsed["cfg"]["tangent_mode"], "wrap");
        assert_eq!(parsed["params"]["rows"], 32);
    }
}
