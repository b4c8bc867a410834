//! Bootstrap command - materialize the project skeleton, then clean up.

use anyhow::{Context, Result};
use colored::*;
use serde_json::json;
use std::env;
use std::path::PathBuf;

use fullstack_bootstrap::{emit, EmitReport, Scaffolder, OUTPUT_FILES};

pub fn execute(
    root: Option<PathBuf>,
    artifact: Option<PathBuf>,
    keep: bool,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let root = match root {
        Some(root) => root,
        None => env::current_dir().context("Failed to resolve current directory")?,
    };

    if dry_run {
        if json {
            output_json_dry_run()?;
        } else {
            display_dry_run();
        }
        return Ok(());
    }

    if !json {
        println!("{}", "🚀 Bootstrapping full-stack skeleton".bold().blue());
        println!("{}", format!("   Target: {}\n", root.display()).dimmed());
    }

    let scaffolder = Scaffolder::new(&root);
    let mut report = scaffolder.emit_all()?;

    // Cleanup is best-effort: a missing artifact or revoked permissions
    // never turn a successful run into a failure.
    if !keep {
        let target = artifact.or_else(|| env::current_exe().ok());
        if let Some(target) = target {
            report.cleaned = emit::remove_artifact(&target);
        }
    }

    if json {
        output_json(&report)?;
    } else {
        display_success(&report);
    }

    Ok(())
}

fn display_dry_run() {
    println!("{}", "DRY RUN - No changes will be made".yellow().bold());
    for file in OUTPUT_FILES {
        println!("  {}", file.path);
    }
}

fn display_success(report: &EmitReport) {
    for path in &report.written {
        println!("  {} Created {}", "✓".green().bold(), path);
    }

    println!(
        "\n{}",
        format!("✨ {} files written", report.written.len())
            .green()
            .bold()
    );

    println!("\n{}", "🎯 Next Steps".bold().green());
    println!("   1. Create backend/.env (see TODO.md for the variable list)");
    println!("   2. cd backend && pip install -r requirements.txt && python run.py");
    println!("   3. cd frontend && npm install && npm run dev");
}

fn output_json(report: &EmitReport) -> Result<()> {
    let result = json!({
        "status": "success",
        "report": report,
    });

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn output_json_dry_run() -> Result<()> {
    let paths: Vec<&str> = OUTPUT_FILES.iter().map(|f| f.path).collect();
    let result = json!({
        "status": "dry-run",
        "would_write": paths,
    });

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
