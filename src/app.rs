//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - sets up logging
//! - parses CLI arguments
//! - loads catalogs and overrides
//! - runs reconciliation / single matches
//! - prints reports and writes optional exports

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, MatchArgs, NormalizeArgs, OverridesArgs, ReconcileArgs};
use crate::domain::ReconcileConfig;
use crate::error::AppError;
use crate::matching::Matcher;
use crate::reconcile::stale_overrides;

pub mod pipeline;

/// Entry point for the `xref` binary.
pub fn run() -> Result<(), AppError> {
    init_tracing();

    // `xref --well-known` should behave like `xref reconcile --well-known`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Reconcile(args) => handle_reconcile(args),
        Command::Match(args) => handle_match(args),
        Command::Normalize(args) => handle_normalize(args),
        Command::Overrides(args) => handle_overrides(args),
    }
}

/// Logs go to stderr so stdout stays clean for reports; level via `RUST_LOG`.
fn init_tracing() {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_reconcile(args: ReconcileArgs) -> Result<(), AppError> {
    let config = reconcile_config_from_args(&args);
    let run = pipeline::run_reconcile(&config)?;

    println!("{}", crate::report::format_run_summary(&run.result, &config));

    let unmatched = crate::report::format_unmatched(&run.result, config.show_unmatched);
    if !unmatched.is_empty() {
        println!("{unmatched}");
    }

    if let Some(path) = &config.previous {
        let previous = crate::io::read_mapping_json(path)?;
        let diff = crate::report::diff_mappings(&previous.mappings, &run.result.mapping());
        println!("{}", crate::report::format_diff(&diff));
    }

    // Optional export.
    if let Some(path) = &config.export {
        crate::io::write_mapping(path, &run.result, config.export_format)?;
    }

    Ok(())
}

fn handle_match(args: MatchArgs) -> Result<(), AppError> {
    let overrides =
        pipeline::load_override_table(args.overrides.overrides.as_deref(), !args.overrides.no_builtin_overrides)?;
    let targets = pipeline::load_targets(&args.targets.source())?;

    let outcome = Matcher::new(&overrides).find(&args.slug, &args.creator, &targets);
    println!(
        "{}",
        crate::report::format_match(&args.slug, &args.creator, outcome.as_ref())
    );
    Ok(())
}

fn handle_normalize(args: NormalizeArgs) -> Result<(), AppError> {
    for id in &args.ids {
        println!("{}", crate::report::format_normalized(id));
    }
    Ok(())
}

fn handle_overrides(args: OverridesArgs) -> Result<(), AppError> {
    let table =
        pipeline::load_override_table(args.overrides.overrides.as_deref(), !args.overrides.no_builtin_overrides)?;
    let entries = table.entries();

    if !args.check {
        println!("{}", crate::report::format_overrides(&entries, None));
        return Ok(());
    }

    let universe = pipeline::load_targets(&args.targets.source())?;
    let stale = stale_overrides(&table, &universe);
    println!("{}", crate::report::format_overrides(&entries, Some(stale.as_slice())));

    if stale.is_empty() {
        Ok(())
    } else {
        Err(AppError::new(
            1,
            format!("{} override target(s) missing from the target catalog.", stale.len()),
        ))
    }
}

pub fn reconcile_config_from_args(args: &ReconcileArgs) -> ReconcileConfig {
    ReconcileConfig {
        source_file: args.source_file.clone(),
        targets: args.targets.source(),
        overrides_file: args.overrides.overrides.clone(),
        builtin_overrides: !args.overrides.no_builtin_overrides,
        parallel: !args.sequential,
        show_unmatched: args.show_unmatched,
        export: args.export.clone(),
        export_format: args.format,
        previous: args.previous.clone(),
    }
}

/// Rewrite argv so `xref` defaults to `xref reconcile`.
///
/// Rules:
/// - `xref`                      -> `xref reconcile`
/// - `xref --well-known ...`     -> `xref reconcile --well-known ...`
/// - `xref --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("reconcile".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "reconcile" | "match" | "normalize" | "overrides");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "reconcile flags".
    if arg1.starts_with('-') {
        argv.insert(1, "reconcile".to_string());
        return argv;
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_reconciles() {
        assert_eq!(rewrite_args(argv(&["xref"])), argv(&["xref", "reconcile"]));
    }

    #[test]
    fn leading_flag_goes_to_reconcile() {
        assert_eq!(
            rewrite_args(argv(&["xref", "--well-known", "-s", "m.json"])),
            argv(&["xref", "reconcile", "--well-known", "-s", "m.json"])
        );
    }

    #[test]
    fn help_and_subcommands_untouched() {
        assert_eq!(rewrite_args(argv(&["xref", "--help"])), argv(&["xref", "--help"]));
        assert_eq!(
            rewrite_args(argv(&["xref", "match", "x", "-c", "y"])),
            argv(&["xref", "match", "x", "-c", "y"])
        );
    }

    #[test]
    fn config_inverts_negative_flags() {
        let cli = crate::cli::Cli::parse_from(["xref", "reconcile", "--sequential", "--no-builtin-overrides"]);
        let Command::Reconcile(args) = cli.command else {
            panic!("expected reconcile");
        };
        let config = reconcile_config_from_args(&args);
        assert!(!config.parallel);
        assert!(!config.builtin_overrides);
    }
}
