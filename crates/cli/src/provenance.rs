use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a search run records next to its outputs.
pub struct Payload {
    pub params: Value,
    pub outcome: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            outcome: Value::Null,
        }
    }

    pub fn with_outcome(mut self, outcome: Value) -> Self {
        self.outcome = outcome;
        self
    }
}

/// Write `<artifact>.provenance.json` with the git commit, callsite, search
/// params, run outcome, and the list of files the run produced.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(
    artifact: P,
    outputs: &[PathBuf],
    payload: Payload,
) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let outputs: Vec<String> = outputs
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    let doc = json!({
        "code_rev": current_git_rev(),
        "crate_version": phaserrt::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "outcome": payload.outcome,
        "outputs": outputs
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("profile"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return from_env.to_string();
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/profile.csv");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/output/profile.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_params_outcome_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("nested").join("profile.csv");
        let tree = dir.path().join("nested").join("tree.csv");
        let payload = Payload::new(json!({"seed": 7, "max_nodes": 500}))
            .with_outcome(json!({"status": "Solved"}));
        let prov_path = write_sidecar(&artifact, &[artifact.clone(), tree.clone()], payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["params"]["seed"], 7);
        assert_eq!(parsed["outcome"]["status"], "Solved");
        assert_eq!(parsed["outputs"][1], tree.to_string_lossy().as_ref());
        assert_eq!(parsed["crate_version"], phaserrt::VERSION);
    }
}
