use anyhow::{bail, Context, Result};
use transform_analyzer::catalog::Catalog;
use transform_analyzer::engine::{analyze_with_candidates, score_candidates, AnalysisRequest};
use transform_analyzer::rank::{by_points, select_best};
use transform_analyzer::report::{render_candidates, render_outcome};
use transform_analyzer::scoring::ScoredCandidate;

use crate::cli::{AnalyzeArgs, CandidatesArgs, OutputFormat};
use crate::resolve_tables;

pub fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let catalog = open_catalog(&args.data_dir)?;
    let tables = resolve_tables(args.tables.as_deref());

    let old_environment = catalog
        .environment(&args.from)
        .with_context(|| format!("failed to load environment '{}'", args.from))?;
    let new_environment = catalog
        .environment(&args.to)
        .with_context(|| format!("failed to load environment '{}'", args.to))?;
    let old_communication = catalog
        .communication(&args.comm)
        .with_context(|| format!("failed to load communication '{}'", args.comm))?;
    let candidates = catalog
        .supported_communications(&new_environment)
        .with_context(|| format!("failed to resolve communications of '{}'", args.to))?;

    let request = AnalysisRequest {
        old_environment: &old_environment,
        new_environment: &new_environment,
        old_communication: &old_communication,
        candidates: &candidates,
    };
    let analysis = analyze_with_candidates(&request, &tables)
        .with_context(|| format!("failed to analyze '{}'", args.comm))?;

    match args.format {
        OutputFormat::Text => {
            if args.verbose {
                println!("Using data directory: {}", catalog.root().display());
                println!("Using score tables: {}", tables.source());
            }
            println!("{}", render_outcome(&analysis.outcome));
            if args.verbose && !analysis.candidates.is_empty() {
                println!();
                println!(
                    "{}",
                    render_candidates(
                        &analysis.candidates,
                        analysis.outcome.suggested.as_deref(),
                        true
                    )
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis.outcome)?),
    }

    if args.strict && analysis.outcome.is_not_possible() {
        bail!(
            "analysis failed in strict mode: transforming '{}' to '{}' is not possible",
            args.comm,
            args.to
        );
    }
    Ok(())
}

pub fn run_candidates(args: CandidatesArgs) -> Result<()> {
    let catalog = open_catalog(&args.data_dir)?;
    let tables = resolve_tables(args.tables.as_deref());

    let environment = catalog
        .environment(&args.to)
        .with_context(|| format!("failed to load environment '{}'", args.to))?;
    let old = catalog
        .communication(&args.comm)
        .with_context(|| format!("failed to load communication '{}'", args.comm))?;
    let candidates = catalog
        .supported_communications(&environment)
        .with_context(|| format!("failed to resolve communications of '{}'", args.to))?;

    let scored = score_candidates(&old, &candidates, &tables)
        .with_context(|| format!("failed to score candidates for '{}'", args.comm))?;
    let suggested = select_best(&scored).map(|best| best.name.clone());
    let ordered: Vec<ScoredCandidate> = by_points(&scored).into_iter().cloned().collect();

    match args.format {
        OutputFormat::Text => println!(
            "{}",
            render_candidates(&ordered, suggested.as_deref(), args.verbose)
        ),
        OutputFormat::Json => {
            let report = CandidatesReport {
                communication: &old.name,
                environment: &environment.name,
                suggested: suggested.as_deref(),
                candidates: &ordered,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn open_catalog(path: &std::path::Path) -> Result<Catalog> {
    Catalog::open(path)
        .with_context(|| format!("failed to open data directory {}", path.display()))
}

#[derive(Debug, serde::Serialize)]
struct CandidatesReport<'a> {
    communication: &'a str,
    environment: &'a str,
    suggested: Option<&'a str>,
    candidates: &'a [ScoredCandidate],
}
