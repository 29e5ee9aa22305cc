//! `<artifact>.provenance.json` next to every hull written with `--out`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced a hull artifact.
#[derive(Serialize, Debug)]
pub struct HullRun<'a> {
    pub source: &'a str,
    pub predicate: &'a str,
    pub tie_policy: &'a str,
    pub points: usize,
    pub hull_vertices: usize,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    lrhull_version: &'static str,
    code_rev: String,
    callsite: String,
    run: &'a HullRun<'a>,
    artifact: String,
}

#[track_caller]
pub fn write_sidecar(artifact: &Path, run: &HullRun<'_>) -> Result<PathBuf> {
    let caller = Location::caller();
    let sidecar = Sidecar {
        lrhull_version: lrhull::VERSION,
        code_rev: current_git_rev(),
        callsite: format!("{}:{}", caller.file(), caller.line()),
        run,
        artifact: artifact.display().to_string(),
    };
    let path = sidecar_path(artifact);
    std::fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance_written");
    Ok(path)
}

/// `dir/hull.json` → `dir/hull.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build or run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    match Command::new("git").args(["rev-parse", "HEAD"]).output() {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout).trim().to_string(),
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/hull.json")),
            Path::new("/tmp/output/hull.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_the_run() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hull.json");
        std::fs::write(&artifact, "{}").unwrap();
        let run = HullRun {
            source: "fragile-demo",
            predicate: "robust",
            tie_policy: "prune",
            points: 6,
            hull_vertices: 3,
        };
        let path = write_sidecar(&artifact, &run).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["artifact"], artifact.display().to_string());
        assert_eq!(parsed["run"]["predicate"], "robust");
        assert_eq!(parsed["run"]["hull_vertices"], 3);
        assert_eq!(parsed["lrhull_version"], lrhull::VERSION);
        assert!(parsed["callsite"].as_str().unwrap().contains("provenance.rs"));
    }
}
