use std::sync::mpsc::channel;
use std::sync::Arc;

use anyhow::Result;
use sasskit::application::WatchSupervisor;
use sasskit::domain::value_objects::BuildMode;
use sasskit::infrastructure::ProcessTracker;

use crate::cli::ProjectArgs;

pub fn cmd_watch(args: &ProjectArgs) -> Result<()> {
    let (root, loaded) = super::load_project(args)?;
    let command = super::locate_binary(args.binary.as_deref())?;

    let mode = args
        .configuration
        .as_deref()
        .map(BuildMode::from_configuration)
        .unwrap_or(BuildMode::Debug);

    let tracker = Arc::new(ProcessTracker::new());
    let mut supervisor = WatchSupervisor::new(loaded.options, command)
        .with_project_root(&root)
        .with_build_mode(Some(mode))
        .with_registrar(tracker.clone());

    let (stop_tx, stop_rx) = channel();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })?;

    supervisor.start()?;
    eprintln!(
        "Watching {} ({} mode). Press Ctrl+C to stop.",
        root.display(),
        mode
    );

    // Blocks until Ctrl+C; a closed channel means the handler is gone
    let _ = stop_rx.recv();

    supervisor.stop();
    let reaped = tracker.reap();
    if reaped > 0 {
        tracing::debug!(reaped, "reaped leftover sass processes");
    }
    Ok(())
}
