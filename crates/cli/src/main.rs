use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::warn;
use trailhead_registry::WidgetRegistry;
use trailhead_types::MODULES;
use trailhead_util::{completion_percent, expand_tilde, ProgressStore};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let matches = build_cli().get_matches();
    let registry =
        WidgetRegistry::from_embedded_catalog().context("load the embedded content catalog")?;

    match matches.subcommand() {
        // No subcommand => TUI
        None => run_tui(registry).await,
        Some(("modules", _)) => {
            print_modules();
            Ok(())
        }
        Some(("progress", sub)) => print_progress(&registry, sub),
        Some((other, _)) => anyhow::bail!("unknown subcommand: {other}"),
    }
}

fn build_cli() -> Command {
    Command::new("trailhead")
        .about("Terminal navigator for the software engineering roadmap")
        .subcommand(Command::new("modules").about("List the roadmap modules"))
        .subcommand(
            Command::new("progress")
                .about("Show checklist completion per module")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit progress as JSON"),
                ),
        )
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    // Inside the TUI the terminal is not ours to print to; TRAILHEAD_LOG
    // redirects output to a file instead of stderr.
    let log_file = std::env::var("TRAILHEAD_LOG")
        .ok()
        .filter(|path| !path.trim().is_empty())
        .and_then(|path| std::fs::File::create(expand_tilde(path.trim())).ok());
    match log_file {
        Some(file) => {
            let _ = builder.with_writer(Arc::new(file)).with_ansi(false).try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
}

async fn run_tui(registry: WidgetRegistry) -> Result<()> {
    let progress = match ProgressStore::new() {
        Ok(store) => store,
        Err(error) => {
            warn!(%error, "progress file unavailable; progress will not persist");
            ProgressStore::ephemeral()
        }
    };
    trailhead_tui::run(registry, Arc::new(progress)).await
}

fn print_modules() {
    println!("{:<4} {:<20} {}", "NUM", "MODULE", "PHASE");
    for desc in &MODULES {
        println!("{:<4} {:<20} {}", desc.num, desc.label, desc.phase);
    }
}

fn print_progress(registry: &WidgetRegistry, matches: &ArgMatches) -> Result<()> {
    let progress = match ProgressStore::new() {
        Ok(store) => store,
        Err(error) => {
            warn!(%error, "progress file unavailable; showing empty progress");
            ProgressStore::ephemeral()
        }
    };

    if matches.get_flag("json") {
        let mut out = serde_json::Map::new();
        for (spec, list) in registry.checklists() {
            let checked = progress.checked(&list.storage_key);
            out.insert(
                list.storage_key.clone(),
                serde_json::json!({
                    "module": spec.module.to_string(),
                    "checked": checked.len(),
                    "total": list.items.len(),
                    "percent": completion_percent(checked.len(), list.items.len()),
                }),
            );
        }
        println!("{}", serde_json::to_string_pretty(&serde_json::Value::Object(out))?);
        return Ok(());
    }

    println!("{:<8} {:<26} {:>9} {:>6}", "MODULE", "CHECKLIST", "DONE", "PCT");
    for (spec, list) in registry.checklists() {
        let checked = progress.checked(&list.storage_key);
        println!(
            "{:<8} {:<26} {:>5}/{:<3} {:>5}%",
            spec.module.to_string(),
            list.storage_key,
            checked.len(),
            list.items.len(),
            completion_percent(checked.len(), list.items.len()),
        );
    }
    Ok(())
}
