//! Emit the schema.org `FAQPage` object for the whole catalog.
//!
//! Every question is included regardless of any search, in catalog order,
//! with answers collapsed to single-line text.

use anyhow::{Context, Result, anyhow, bail};
use faq_catalog::{FaqIndex, flatten_catalog, generate_faq_schema, logging, resolve_catalog_path};
use std::env;
use std::path::PathBuf;

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;
    let path = resolve_catalog_path(args.catalog.as_deref())?;
    let index = FaqIndex::load(&path)?;

    let records = flatten_catalog(index.catalog());
    let page = generate_faq_schema(&records);
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&page)
    } else {
        serde_json::to_string(&page)
    }
    .context("serializing FAQPage")?;
    println!("{rendered}");
    Ok(())
}

struct CliArgs {
    catalog: Option<PathBuf>,
    pretty: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut catalog: Option<PathBuf> = None;
        let mut pretty = false;

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
                "--pretty" => pretty = true,
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}\n{}", usage()),
            }
        }

        Ok(CliArgs { catalog, pretty })
    }
}

fn usage() -> &'static str {
    "Usage: faq-schema [--catalog PATH] [--pretty]\n\
Prints the schema.org FAQPage JSON-LD object for every question in the catalog.\n"
}
