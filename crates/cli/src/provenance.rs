//! `<stem>.provenance.json` sidecars: which code, strategy, and inputs produced an output file.

use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// Caller-supplied part of a sidecar.
pub struct Payload {
    pub algorithm: Option<&'static str>,
    pub params: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            algorithm: None,
            params,
        }
    }

    pub fn with_algorithm(mut self, algo: hull::Algorithm) -> Self {
        self.algorithm = Some(algo.slug());
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    hull_version: &'static str,
    callsite: Callsite,
    algorithm: Option<&'static str>,
    params: &'a Value,
    outputs: [String; 1],
}

/// Write the sidecar for `artifact` and return its path. The callsite is the caller's.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let caller = Location::caller();
    let sidecar = Sidecar {
        code_rev: code_rev(),
        hull_version: hull::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        algorithm: payload.algorithm,
        params: &payload.params,
        outputs: [artifact.to_string_lossy().into_owned()],
    };

    let path = provenance_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), algorithm = ?sidecar.algorithm, "provenance");
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` if set, else `git rev-parse HEAD`, else `"unknown"`.
fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status.success().then_some(())?;
            String::from_utf8(out.stdout).ok().map(|s| s.trim().to_owned())
        })
        .unwrap_or_else(|| "unknown".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        assert_eq!(
            provenance_path(Path::new("/tmp/output/hull.json")),
            Path::new("/tmp/output/hull.provenance.json")
        );
        assert_eq!(
            provenance_path(Path::new("out/fig")),
            Path::new("out/fig.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_algorithm() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("h.json");
        fs::write(&artifact, "[]").unwrap();
        let payload = Payload::new(json!({"input": "pts.json"}))
            .with_algorithm(hull::Algorithm::MonotoneChain);
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["algorithm"], "monotone");
        assert_eq!(parsed["params"]["input"], "pts.json");
        assert_eq!(parsed["hull_version"], hull::VERSION);
        assert!(parsed["callsite"]["file"]
            .as_str()
            .unwrap()
            .ends_with("provenance.rs"));
    }

    #[test]
    fn sidecar_without_algorithm_is_null() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("pts.json");
        let prov_path = write_sidecar(&artifact, Payload::new(json!({}))).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert!(parsed["algorithm"].is_null());
        assert!(!parsed["code_rev"].as_str().unwrap().is_empty());
    }
}
