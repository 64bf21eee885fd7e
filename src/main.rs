//! Replays a scripted workspace session and prints the resulting state.
//!
//! Script format: `{ "files": [FileEntry...], "actions": [WorkspaceAction...] }`,
//! actions tagged by name, e.g. `{ "type": "OPEN_FILE", "file": {...}, "pane": "left" }`.

use serde::Deserialize;
use std::path::Path;
use std::process::ExitCode;
use std::{env, fs, io};

use studydesk::kernel::services::adapters::load_settings;
use studydesk::kernel::services::ports::{FileEntry, Settings};
use studydesk::kernel::{Action, AppState, Store, WorkspaceAction};

mod logging;

#[derive(Debug, Deserialize)]
struct SessionScript {
    #[serde(default)]
    files: Vec<FileEntry>,
    actions: Vec<WorkspaceAction>,
}

#[derive(Debug, thiserror::Error)]
enum ReplayError {
    #[error("cannot read script: {0}")]
    Io(#[from] io::Error),
    #[error("invalid script: {0}")]
    Json(#[from] serde_json::Error),
}

fn replay(path: &Path) -> Result<String, ReplayError> {
    let script: SessionScript = serde_json::from_str(&fs::read_to_string(path)?)?;
    tracing::info!(
        script = %path.display(),
        files = script.files.len(),
        actions = script.actions.len(),
        "replaying session"
    );

    let mut store = Store::new(AppState::new(script.files));
    for (step, action) in script.actions.into_iter().enumerate() {
        let result = store.dispatch(Action::Workspace(action));
        tracing::debug!(
            step,
            changed = result.state_changed,
            effects = result.effects.len(),
            "applied"
        );
        if let Err(violation) = store.workspace().check_invariants() {
            tracing::warn!(step, %violation, "invariant violated after step");
        }
    }

    Ok(serde_json::to_string_pretty(store.workspace())?)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let Some(script) = args.get(1) else {
        eprintln!("usage: studydesk <session.json>");
        return ExitCode::from(2);
    };

    let settings = load_settings().unwrap_or_else(|e| {
        eprintln!("{e}; using default settings");
        Settings::default()
    });
    let log_guard = logging::init(settings.log_filter.as_deref());
    if let Some(guard) = &log_guard {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging to file");
    }

    match replay(Path::new(script)) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "replay failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
