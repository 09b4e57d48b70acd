use std::io::IsTerminal;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use promptgen::cli::{Cli, Command};
use promptgen::config::Config;
use promptgen::{DirTemplateSource, GenerateReport, Generator, Layout, PublishReport, Publisher};

fn setup_logging(verbose: bool) -> Result<()> {
    // Diagnostics go to stderr; stdout carries the summary only
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_overrides(cli.tool_root, cli.work_root, cli.destination);

    let layout = config.layout();

    info!(
        "promptgen loaded config: tool_root={}, work_root={}",
        layout.tool_root().display(),
        layout.work_root().display()
    );

    match cli.command {
        Command::Generate => {
            let report = cmd_generate(&layout)?;
            print_generate(&report);
        }
        Command::Publish => {
            let report = cmd_publish(&layout)?;
            print_publish(&report, &layout);
        }
        Command::Run => {
            let generated = cmd_generate(&layout)?;
            print_generate(&generated);
            let published = cmd_publish(&layout)?;
            print_publish(&published, &layout);
        }
        Command::Config => {
            print!("{}", serde_yaml::to_string(&config)?);
        }
    }

    Ok(())
}

fn cmd_generate(layout: &Layout) -> Result<GenerateReport> {
    let source = DirTemplateSource::new(layout);
    Generator::new(layout, &source).run()
}

fn cmd_publish(layout: &Layout) -> Result<PublishReport> {
    Publisher::new(layout).run()
}

fn print_generate(report: &GenerateReport) {
    println!(
        "{} Generated {} files from {} prompts",
        "✓".green(),
        report.files.len(),
        report.documents
    );
    println!("  {} placeholders expanded", report.resolved_count());
    for file in &report.files {
        println!("  {} {} ({})", file.variant, file.path.display(), file.document.dimmed());
    }
    let unresolved = report.unresolved_count();
    if unresolved > 0 {
        println!("  {} unresolved placeholders left in place", unresolved.to_string().yellow());
    }
    for document in &report.unmatched_blocks {
        println!("  {} unclosed <architecture> in {}", "!".yellow(), document);
    }
}

fn print_publish(report: &PublishReport, layout: &Layout) {
    println!(
        "{} Published {} files to {}",
        "✓".green(),
        report.files.len(),
        layout.destination().display().to_string().cyan()
    );
    for collision in &report.collisions {
        println!(
            "  {} {} overwritten by {} ({})",
            "!".yellow(),
            collision.overwritten,
            collision.winner,
            collision.published
        );
    }
}
