//! Check a FAQ catalog against its schema and id rules.
//!
//! Prints every issue found (not just the first) and exits non-zero when the
//! catalog is not publishable.

use anyhow::{Result, anyhow, bail};
use faq_catalog::{
    load_catalog_from_path, logging, resolve_catalog_path, resolve_catalog_schema_path,
    validate_catalog_file,
};
use std::env;
use std::path::PathBuf;
use tracing::info;

fn main() {
    logging::init();
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool> {
    let catalog = parse_args()?;
    let path = resolve_catalog_path(catalog.as_deref())?;
    let schema_path = resolve_catalog_schema_path(&path);
    info!(catalog = %path.display(), schema = %schema_path.display(), "linting faq catalog");

    let issues = validate_catalog_file(&path, &schema_path)?;
    if issues.is_empty() {
        let catalog = load_catalog_from_path(&path)?;
        println!(
            "{}: ok ({} categories, {} questions)",
            path.display(),
            catalog.categories.len(),
            catalog.total_questions()
        );
        return Ok(true);
    }

    for issue in &issues {
        println!("{}: {issue}", path.display());
    }
    println!("{} issue(s) found", issues.len());
    Ok(false)
}

fn parse_args() -> Result<Option<PathBuf>> {
    let mut args = env::args_os().skip(1);
    let mut catalog: Option<PathBuf> = None;

    while let Some(arg_os) = args.next() {
        let arg = arg_os
            .into_string()
            .map_err(|_| anyhow!("argument is not valid UTF-8"))?;
        match arg.as_str() {
            "--catalog" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --catalog"))?;
                catalog = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                print!("Usage: faq-lint [--catalog PATH]\nValidates the catalog schema, id uniqueness, and required text.\n");
                std::process::exit(0);
            }
            other => bail!("unknown flag: {other}"),
        }
    }
    Ok(catalog)
}
