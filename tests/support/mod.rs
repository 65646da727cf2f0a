#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn shipped_catalog() -> PathBuf {
    repo_root().join(faq_catalog::DEFAULT_CATALOG_PATH)
}

pub fn helper_binary(name: &str) -> PathBuf {
    let path = match name {
        "faq-search" => env!("CARGO_BIN_EXE_faq-search"),
        "faq-schema" => env!("CARGO_BIN_EXE_faq-schema"),
        "faq-lint" => env!("CARGO_BIN_EXE_faq-lint"),
        other => panic!("unknown helper {other}"),
    };
    PathBuf::from(path)
}

/// Command for a helper with catalog-selection env vars cleared, so the
/// developer's shell cannot change which catalog a test reads.
pub fn helper_command(name: &str) -> Command {
    let mut cmd = Command::new(helper_binary(name));
    cmd.env_remove("FAQ_CATALOG")
        .env_remove("FAQ_ROOT")
        .env_remove("FAQ_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Lay out a content root (`content/faq.json` + `schema/`) under `dir`.
pub fn write_content_root(dir: &Path, catalog: &Value) -> Result<PathBuf> {
    let content = dir.join("content");
    let schema = dir.join("schema");
    fs::create_dir_all(&content)?;
    fs::create_dir_all(&schema)?;
    fs::copy(
        repo_root().join(faq_catalog::CATALOG_SCHEMA_PATH),
        dir.join(faq_catalog::CATALOG_SCHEMA_PATH),
    )?;
    let catalog_path = dir.join(faq_catalog::DEFAULT_CATALOG_PATH);
    fs::write(&catalog_path, serde_json::to_vec_pretty(catalog)?)?;
    Ok(catalog_path)
}
