use std::sync::Arc;

use anyhow::Result;
use sasskit::application::{CompileOptions, CompileReport, CompileUseCase};
use sasskit::domain::value_objects::BuildMode;
use sasskit::infrastructure::{ProcessInvoker, ProcessTracker};

use crate::cli::ProjectArgs;

pub fn cmd_compile(args: &ProjectArgs, json: bool) -> Result<()> {
    let (root, loaded) = super::load_project(args)?;
    let command = super::locate_binary(args.binary.as_deref())?;

    let mode = args
        .configuration
        .as_deref()
        .map(BuildMode::from_configuration)
        .unwrap_or(BuildMode::Release);

    // Ctrl+C mid-compile must not leave the compiler behind
    let tracker = Arc::new(ProcessTracker::new());
    let reaper = tracker.clone();
    ctrlc::set_handler(move || {
        reaper.reap();
        std::process::exit(130);
    })?;

    let use_case = CompileUseCase::new(loaded.options, command)
        .with_invoker(ProcessInvoker::new().with_registrar(tracker));
    let report = use_case
        .compile_project(&CompileOptions::new(&root).with_build_mode(Some(mode)))
        .inspect_err(|e| {
            if let Some(stderr) = e.error_output() {
                eprint!("{}", stderr);
            }
        })?;

    print_report(&report, json)
}

fn print_report(report: &CompileReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for file in &report.generated {
        println!("{}", file.display());
    }
    Ok(())
}
