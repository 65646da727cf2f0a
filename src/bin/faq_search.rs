//! Search the FAQ catalog from the command line.
//!
//! Loads and validates the catalog, optionally narrows it to one category,
//! applies the same substring filter as the FAQ page's search box, and prints
//! either a readable listing or the filtered view as JSON.

use anyhow::{Context, Result, anyhow, bail};
use faq_catalog::{
    CategoryId, FaqIndex, FilteredCatalog, filter_categories, logging, resolve_catalog_path,
    restrict_to_category,
};
use std::env;
use std::fmt::Write as _;
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
    let catalog = index.catalog();

    let categories = match &args.category {
        Some(id) => restrict_to_category(catalog, id)
            .ok_or_else(|| anyhow!("unknown category '{id}' in {}", path.display()))?,
        None => catalog.categories.as_slice(),
    };
    let result = filter_categories(categories, &args.query);

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&result)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&result).context("serializing search results")?
        ),
    }
    Ok(())
}

fn render_text(result: &FilteredCatalog<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", result.summary());
    if result.is_empty() {
        if let Some(query) = &result.query {
            let _ = writeln!(out, "No questions match '{query}'.");
        }
        return out;
    }

    for category in &result.categories {
        let _ = writeln!(out, "\n## {}", category.name);
        for question in &category.questions {
            let _ = writeln!(out, "- {}", question.question);
            for paragraph in question.paragraphs() {
                let _ = writeln!(out, "    {paragraph}");
            }
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown format '{other}' (expected text|json)"),
        }
    }
}

struct CliArgs {
    catalog: Option<PathBuf>,
    query: String,
    category: Option<CategoryId>,
    format: OutputFormat,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut catalog: Option<PathBuf> = None;
        let mut query: Option<String> = None;
        let mut category: Option<CategoryId> = None;
        let mut format = OutputFormat::Text;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--catalog" => {
                    catalog = Some(PathBuf::from(next_value(&mut args, "--catalog")?));
                }
                "--query" | "-q" => {
                    if query.is_some() {
                        bail!("--query may only be provided once");
                    }
                    query = Some(next_value(&mut args, "--query")?);
                }
                "--category" => {
                    category = Some(CategoryId(next_value(&mut args, "--category")?));
                }
                "--format" => {
                    format = OutputFormat::from_str(&next_value(&mut args, "--format")?)?;
                }
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}\n{}", usage()),
            }
        }

        Ok(CliArgs {
            catalog,
            query: query.unwrap_or_default(),
            category,
            format,
        })
    }
}

fn next_value(args: &mut impl Iterator<Item = std::ffi::OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: faq-search [--catalog PATH] [--query TEXT] [--category ID] [--format text|json]\n\
Filters the FAQ catalog by a case-insensitive substring of question or answer text and prints the matches.\n\
An empty query lists every question. FAQ_CATALOG and FAQ_ROOT select the catalog when --catalog is absent.\n"
}
