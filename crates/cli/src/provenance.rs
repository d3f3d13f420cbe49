//! Provenance sidecars for `inversive batch`.
//!
//! Each results file `<stem>.json` gets a `<stem>.provenance.json` next to it
//! recording which kernel build, with which tolerances, evaluated which ops.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to a batch result.
pub struct Payload {
    pub params: Value,
    pub ops: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            ops: Vec::new(),
        }
    }

    pub fn with_ops<I: IntoIterator<Item = S>, S: Into<String>>(mut self, ops: I) -> Self {
        self.ops = ops.into_iter().map(Into::into).collect();
        self
    }
}

/// Tolerances and version of the kernel that produced a result.
pub fn kernel_info() -> Value {
    json!({
        "version": inversive::VERSION,
        "epsilon": inversive::cfg::EPSILON,
        "epsilon2": inversive::cfg::EPSILON2,
        "tangential_touch_epsilon": inversive::cfg::TANGENTIAL_TOUCH_EPSILON,
        "tangential_touch_epsilon_f32": inversive::cfg::TANGENTIAL_TOUCH_EPSILON_F32,
        "far_point_d2": inversive::KernelCfg::default().far_point_d2,
        "rotor_saturation_norm": inversive::cfg::ROTOR_SATURATION_NORM,
    })
}

/// Write the sidecar of `results`: code revision, callsite, kernel
/// tolerances, op names, params and the results path itself.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(results: P, payload: Payload) -> Result<PathBuf> {
    let results = results.as_ref();
    let provenance_path = sidecar_path(results);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": code_rev(),
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "kernel": kernel_info(),
        "ops": payload.ops,
        "params": payload.params,
        "outputs": [results.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// `out/results.json` -> `out/results.provenance.json`; a bare directory
/// name gets `batch.provenance.json`.
fn sidecar_path(results: &Path) -> PathBuf {
    let mut name = results
        .file_stem()
        .map_or_else(|| OsString::from("batch"), OsString::from);
    name.push(".provenance.json");
    results.with_file_name(name)
}

/// Revision of the kernel build: `GIT_COMMIT` baked in at compile time, then
/// `GIT_COMMIT` at run time, then `git rev-parse HEAD`, else `"unknown"`.
pub fn code_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(|| {
            let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            if !output.status.success() {
                return None;
            }
            String::from_utf8(output.stdout)
                .ok()
                .map(|s| s.trim().to_string())
                .and_then(non_empty)
        })
        .unwrap_or_else(|| "unknown".to_string())
}
