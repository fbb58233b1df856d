use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata used to generate a provenance sidecar.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value, tag: Option<String>) -> Self {
        Self { params, tag }
    }
}

#[derive(Serialize)]
struct Callsite<'a> {
    file: &'a str,
    line: u32,
}

/// Document shape shared by sidecars and `cli report`.
#[derive(Serialize)]
pub struct Provenance<'a> {
    code_rev: String,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    callsite: Option<Callsite<'a>>,
    tag: Option<String>,
    params: Value,
    outputs: Vec<String>,
}

impl<'a> Provenance<'a> {
    pub fn report(tag: Option<String>) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: eve_bench::VERSION,
            callsite: None,
            tag,
            params: Value::Object(Default::default()),
            outputs: Vec::new(),
        }
    }
}

/// Write `<artifact>.provenance.json` containing the git commit, callsite, params, and outputs.
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
    let doc = Provenance {
        code_rev: current_git_rev(),
        version: eve_bench::VERSION,
        callsite: Some(Callsite {
            file: callsite.file(),
            line: callsite.line(),
        }),
        tag: payload.tag,
        params: payload.params,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
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
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/sweep.csv");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/sweep.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_params_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("jwire.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new(json!({"command": "describe"}), Some("smoke".into()));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["command"], "describe");
        assert_eq!(parsed["tag"], "smoke");
        assert_eq!(parsed["version"], eve_bench::VERSION);
        assert!(parsed["callsite"]["line"].as_u64().is_some());
    }

    #[test]
    fn report_has_no_callsite() {
        let doc = serde_json::to_value(Provenance::report(None)).unwrap();
        assert!(doc.get("callsite").is_none());
        assert_eq!(doc["outputs"], json!([]));
    }
}
