use anyhow::{Context, Result};
use std::path::Path;
use templated_pipeline::cli::commands::{
    DocumentsCommand, ProcessCommand, RunCommand, ValidateCommand,
};
use templated_pipeline::cli::output::*;
use templated_pipeline::cli::{Cli, Command};
use templated_pipeline::core::config::RunPlan;
use templated_pipeline::core::{MemorySink, OutputSink, RunSummary, WriterSink};
use templated_pipeline::document::DocumentKind;
use templated_pipeline::execution::ExecutionEngine;
use templated_pipeline::processing::{FileFormat, ProcessedFile};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let engine = build_engine(&cli);

    // Execute command
    match &cli.command {
        Command::Documents(cmd) => create_documents(cmd, &engine, cli.verbose)?,
        Command::Process(cmd) => process_file(cmd, &engine, cli.verbose)?,
        Command::Run(cmd) => run_plan(cmd, &engine, cli.verbose)?,
        Command::Validate(cmd) => validate_plan(cmd)?,
    }

    Ok(())
}

fn build_engine(cli: &Cli) -> ExecutionEngine {
    let mut engine = ExecutionEngine::new();
    if cli.events {
        // Events go to stderr so stdout stays parseable with --json
        engine.add_event_handler(|event| {
            eprintln!("{}", format_execution_event(event));
        });
    }
    engine
}

/// Status lines and summary of one document run
#[derive(Debug, serde::Serialize)]
struct DocumentReport {
    kind: DocumentKind,
    lines: Vec<String>,
    summary: RunSummary,
}

/// Result and summary of one file run
#[derive(Debug, serde::Serialize)]
struct FileReport {
    path: String,
    format: FileFormat,
    result: ProcessedFile,
    summary: RunSummary,
}

fn create_documents(cmd: &DocumentsCommand, engine: &ExecutionEngine, verbose: bool) -> Result<()> {
    let kinds = cmd.kinds();

    if cmd.json {
        let reports = kinds
            .iter()
            .map(|&kind| create_captured(kind, engine))
            .collect::<Result<Vec<_>>>()?;
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let mut sink = WriterSink::stdout();
    for (i, kind) in kinds.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let summary = create_printed(*kind, engine, &mut sink)?;
        if verbose {
            print_run_details(&summary);
        }
    }

    Ok(())
}

fn create_printed(
    kind: DocumentKind,
    engine: &ExecutionEngine,
    sink: &mut dyn OutputSink,
) -> Result<RunSummary> {
    println!("Creating {}:", kind);
    let document = kind.document();
    engine
        .create_document(document.as_ref(), sink)
        .with_context(|| format!("Failed to create {}", kind))
}

fn create_captured(kind: DocumentKind, engine: &ExecutionEngine) -> Result<DocumentReport> {
    let mut sink = MemorySink::new();
    let document = kind.document();
    let summary = engine
        .create_document(document.as_ref(), &mut sink)
        .with_context(|| format!("Failed to create {}", kind))?;
    Ok(DocumentReport {
        kind,
        lines: sink.into_lines(),
        summary,
    })
}

fn run_file(path: &str, format: FileFormat, engine: &ExecutionEngine) -> Result<FileReport> {
    let outcome = format
        .run(engine, Path::new(path))
        .with_context(|| format!("Failed to process {}", path))?;
    Ok(FileReport {
        path: path.to_string(),
        format,
        result: outcome.output,
        summary: outcome.summary,
    })
}

fn process_file(cmd: &ProcessCommand, engine: &ExecutionEngine, verbose: bool) -> Result<()> {
    let report = run_file(&cmd.file, cmd.format.into(), engine)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report.result)?);
    } else {
        for line in report.result.display_lines() {
            println!("{}", line);
        }
        if verbose {
            print_run_details(&report.summary);
        }
    }

    Ok(())
}

fn run_plan(cmd: &RunCommand, engine: &ExecutionEngine, verbose: bool) -> Result<()> {
    let plan = RunPlan::from_file(&cmd.config).context("Failed to load run plan")?;
    info!("Loaded run plan {} with {} runs", plan.name, plan.run_count());

    if cmd.json {
        let documents = plan
            .documents
            .iter()
            .map(|&kind| create_captured(kind, engine))
            .collect::<Result<Vec<_>>>()?;
        let files = plan
            .files
            .iter()
            .map(|job| run_file(&job.path, job.format, engine))
            .collect::<Result<Vec<_>>>()?;
        let data = serde_json::json!({
            "plan": plan.name,
            "documents": documents,
            "files": files,
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!("{} Loaded run plan: {}", INFO, style(&plan.name).bold());

    let mut sink = WriterSink::stdout();
    let mut summaries = Vec::with_capacity(plan.run_count());

    for &kind in &plan.documents {
        println!();
        summaries.push(create_printed(kind, engine, &mut sink)?);
    }

    for job in &plan.files {
        println!();
        println!("Processing {} ({}):", style(&job.path).bold(), job.format);
        let report = run_file(&job.path, job.format, engine)?;
        if report.result.is_empty() {
            println!("{}", style("(no content)").dim());
        } else {
            println!("{}", format_output(&report.result.display_lines(), 20));
        }
        summaries.push(report.summary);
    }

    println!();
    for summary in &summaries {
        println!("  {}", format_run_summary(summary));
        if verbose {
            print_run_details(summary);
        }
    }
    println!(
        "\n{} {} completed {}",
        CHECK,
        style(&plan.name).bold(),
        style("successfully").green()
    );

    Ok(())
}

fn validate_plan(cmd: &ValidateCommand) -> Result<()> {
    println!("{} Validating run plan...", INFO);

    match RunPlan::from_file(&cmd.config) {
        Ok(plan) => {
            println!("{} Run plan is valid!", CHECK);
            println!("  Name: {}", style(&plan.name).bold());
            println!("  Documents: {}", style(plan.documents.len()).cyan());
            println!("  Files: {}", style(plan.files.len()).cyan());

            if cmd.json {
                let json = serde_json::to_string_pretty(&plan)?;
                println!("\n{}", json);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(&e).red());
            std::process::exit(1);
        }
    }
}

fn print_run_details(summary: &RunSummary) {
    println!("    Run: {}", style(summary.run_id).cyan());
    for step in &summary.steps {
        println!("    {:<8} {}", step.name, format_step_state(&step.state));
    }
    if let (Some(started), Some(completed)) = (summary.started_at, summary.completed_at) {
        let elapsed = completed.signed_duration_since(started);
        println!(
            "    Duration: {}",
            style(format!("{}µs", elapsed.num_microseconds().unwrap_or(0))).dim()
        );
    }
}
