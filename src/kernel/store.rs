use crate::kernel::services::ports::FileId;
use crate::kernel::workspace::{TabId, WorkspaceAction, WorkspaceState};

use super::{Action, AppState, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn workspace(&self) -> &WorkspaceState {
        &self.state.workspace
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Workspace(action) => self.dispatch_workspace(action),
            Action::FilesLoaded(files) => {
                let state_changed = self.state.files != files;
                self.state.files = files;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed,
                }
            }
            Action::FileDeleted(file_id) => self.file_deleted(file_id),
        }
    }

    fn dispatch_workspace(&mut self, action: WorkspaceAction) -> DispatchResult {
        let action = match action {
            WorkspaceAction::OpenFile {
                file,
                pane,
                new_tab_id,
            } => WorkspaceAction::OpenFile {
                file,
                pane,
                new_tab_id: Some(new_tab_id.unwrap_or_else(TabId::generate)),
            },
            other => other,
        };

        let mut effects = Vec::new();
        match &action {
            WorkspaceAction::OpenFile {
                file,
                new_tab_id: Some(tab_id),
                ..
            } => effects.push(Effect::LoadContent {
                tab_id: *tab_id,
                file_id: file.id.clone(),
            }),
            WorkspaceAction::CloseTab { tab_id, pane } => {
                let closing = self
                    .state
                    .workspace
                    .pane(*pane)
                    .tabs
                    .iter()
                    .find(|t| t.id == *tab_id)
                    .map(|t| t.file.id.clone());
                if let Some(file_id) = closing {
                    let still_open = self
                        .state
                        .workspace
                        .tabs_for_file(&file_id)
                        .any(|(_, t)| t.id != *tab_id);
                    if !still_open {
                        effects.push(Effect::FlushPendingSave { file_id });
                    }
                }
            }
            _ => {}
        }

        let next = self.state.workspace.reduce(action);
        let state_changed = next != self.state.workspace;
        self.state.workspace = next;
        if !state_changed {
            return DispatchResult::unchanged();
        }

        #[cfg(debug_assertions)]
        if let Err(violation) = self.state.workspace.check_invariants() {
            tracing::error!(%violation, "workspace invariant violated");
        }

        DispatchResult {
            effects,
            state_changed,
        }
    }

    fn file_deleted(&mut self, file_id: FileId) -> DispatchResult {
        let doomed: Vec<_> = self
            .state
            .workspace
            .tabs_for_file(&file_id)
            .map(|(pane, t)| (pane, t.id))
            .collect();

        let mut state_changed = false;
        for (pane, tab_id) in doomed {
            // The file is gone remotely; there is nothing left to flush.
            let result = self.dispatch_workspace(WorkspaceAction::CloseTab { tab_id, pane });
            state_changed |= result.state_changed;
        }

        let before = self.state.files.len();
        self.state.files.retain(|f| f.id != file_id);
        state_changed |= self.state.files.len() != before;

        tracing::info!(file = %file_id, "file removed from workspace");
        DispatchResult {
            effects: Vec::new(),
            state_changed,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
