use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use comm_profile_core::{
    format_json, parse_communication_file, parse_document_file, parse_environment_file,
    profile_diff, ProfileDocument,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use transform_analyzer::catalog::{Catalog, CatalogKind};
use transform_analyzer::report::{
    render_communication, render_diff, render_diff_summary, render_environment,
};
use transform_analyzer::score_tables::{default_score_tables, load_score_tables, ScoreTables};

mod analyze_cmd;
mod cli;

use cli::{Cli, Command, DiffArgs, DocumentKind, InspectArgs, ListArgs, ListKind, OutputFormat};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze(args) => analyze_cmd::run_analyze(args),
        Command::Candidates(args) => analyze_cmd::run_candidates(args),
        Command::Diff(args) => run_diff(args),
        Command::Inspect(args) => run_inspect(args),
        Command::List(args) => run_list(args),
    }
}

fn run_diff(args: DiffArgs) -> Result<()> {
    let old = parse_communication_file(&args.old)
        .with_context(|| format!("failed to parse {}", args.old.display()))?;
    let new = parse_communication_file(&args.new)
        .with_context(|| format!("failed to parse {}", args.new.display()))?;

    let diffs = profile_diff(&old, &new);

    if args.summary {
        println!("{}", render_diff_summary(&diffs));
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => {
            println!("old={} new={}", old.name, new.name);
            println!("{}", render_diff(&diffs));
        }
        OutputFormat::Json => println!("{}", format_json(&diffs)),
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let document = match args.kind {
        Some(DocumentKind::Communication) => parse_communication_file(&args.file)
            .map(ProfileDocument::Communication),
        Some(DocumentKind::Environment) => {
            parse_environment_file(&args.file).map(ProfileDocument::Environment)
        }
        None => parse_document_file(&args.file),
    }
    .with_context(|| format!("failed to parse {}", args.file.display()))?;

    match args.format {
        OutputFormat::Text => match &document {
            ProfileDocument::Communication(profile) => {
                println!("{}", render_communication(profile))
            }
            ProfileDocument::Environment(env) => println!("{}", render_environment(env)),
        },
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&document)?),
    }
    Ok(())
}

fn run_list(args: ListArgs) -> Result<()> {
    let catalog = Catalog::open(&args.data_dir)
        .with_context(|| format!("failed to open data directory {}", args.data_dir.display()))?;
    let kind = match args.kind {
        ListKind::Communications => CatalogKind::Communications,
        ListKind::Environments => CatalogKind::Environments,
    };
    for name in catalog
        .list(kind)
        .with_context(|| format!("failed to list {kind}"))?
    {
        println!("{name}");
    }
    Ok(())
}

/// Score tables from `path`, or the built-in ones when absent or unreadable.
pub(crate) fn resolve_tables(path: Option<&Path>) -> ScoreTables {
    let Some(path) = path else {
        return default_score_tables();
    };

    match load_score_tables(path) {
        Ok(tables) => tables,
        Err(err) => {
            warn!(
                "failed to load score tables from {} ({err}); using embedded defaults",
                path.display()
            );
            default_score_tables()
        }
    }
}
