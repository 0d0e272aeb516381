//! Provenance sidecars: every CSV the CLI writes gets a
//! `<stem>.provenance.json` next to it naming the code revision, the command
//! and its parameters.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Command name plus the parameters worth recording for one artifact.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Serialized sidecar body. `report` prints the same shape without outputs.
#[derive(Serialize)]
pub struct Record {
    code_rev: String,
    loci_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    callsite: Option<Callsite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'static str>,
    params: Value,
    outputs: Vec<String>,
}

impl Record {
    /// Revision and version only.
    pub fn bare() -> Self {
        Record {
            code_rev: current_git_rev(),
            loci_version: loci::VERSION,
            callsite: None,
            command: None,
            params: Value::Object(Default::default()),
            outputs: Vec::new(),
        }
    }
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let caller = Location::caller();
    let artifact = artifact.as_ref();
    let record = Record {
        callsite: Some(Callsite {
            file: caller.file(),
            line: caller.line(),
        }),
        command: Some(payload.command),
        params: payload.params,
        outputs: vec![artifact.to_string_lossy().into_owned()],
        ..Record::bare()
    };
    let path = provenance_path(artifact);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(&path, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "artifact".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
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
