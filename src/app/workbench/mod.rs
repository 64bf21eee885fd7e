//! Workbench: owns the kernel store and the collaborators around it.
//!
//! UI events arrive here as drag/drop intents, sidebar toggles and content
//! edits; they become kernel actions, and kernel effects are routed to the
//! file registry and the autosave service.

mod bridge;
pub mod dnd_rules;
pub mod link_flow;

use crate::kernel::services::adapters::{AutosaveService, SaveStatus};
use crate::kernel::services::ports::{
    FileEntry, FileId, FileRegistry, FileUpload, RegistryError, RegistryResult, WorkspaceConfig,
};
use crate::kernel::{Action, AppState, Store, TabId, WorkspaceState};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;

pub use dnd_rules::{drop_intent, DragPayload, DropIntent, DropTarget};
pub use link_flow::toggle_link;

pub struct Workbench {
    store: Store,
    registry: Arc<dyn FileRegistry>,
    autosave: AutosaveService,
    config: WorkspaceConfig,
    content_requests: Vec<(TabId, FileId)>,
}

impl Workbench {
    pub fn new(registry: Arc<dyn FileRegistry>, config: WorkspaceConfig, handle: Handle) -> Self {
        let autosave = AutosaveService::new(Arc::clone(&registry), &config, handle);
        Self {
            store: Store::new(AppState::default()),
            registry,
            autosave,
            config,
            content_requests: Vec::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn workspace(&self) -> &WorkspaceState {
        self.store.workspace()
    }

    pub fn save_status(&self) -> watch::Receiver<SaveStatus> {
        self.autosave.status()
    }

    pub fn dispatch(&mut self, action: impl Into<Action>) -> bool {
        self.dispatch_kernel(action.into())
    }

    /// Tabs opened since the last call whose content the viewer still has to fetch.
    pub fn take_content_requests(&mut self) -> Vec<(TabId, FileId)> {
        std::mem::take(&mut self.content_requests)
    }

    pub fn handle_drop(&mut self, payload: &DragPayload, target: DropTarget) -> bool {
        let Some(intent) = drop_intent(payload, target) else {
            return false;
        };
        let Some(action) = intent.into_action(self.workspace()) else {
            tracing::debug!(?target, "drop target no longer matches workspace");
            return false;
        };
        self.dispatch(action)
    }

    pub fn toggle_link(&mut self, note_id: &FileId) -> bool {
        let actions = toggle_link(self.workspace(), &self.state().files, note_id, &self.config);
        let mut changed = false;
        for action in actions {
            changed |= self.dispatch(action);
        }
        changed
    }

    pub fn edit_content(&self, file_id: FileId, text: String) {
        self.autosave.edit(file_id, text);
    }

    pub async fn refresh_files(&mut self) -> RegistryResult<()> {
        let files = self.registry.list_files().await?;
        tracing::info!(count = files.len(), "file listing refreshed");
        self.dispatch(Action::FilesLoaded(files));
        Ok(())
    }

    pub async fn load_content(&self, tab_id: TabId) -> RegistryResult<Vec<u8>> {
        let file_id = self
            .workspace()
            .tab(tab_id)
            .map(|t| t.file.id.clone())
            .ok_or_else(|| RegistryError::Rejected(format!("tab {tab_id} is not open")))?;
        self.registry.view_file(file_id).await
    }

    pub async fn upload_file(&mut self, upload: FileUpload) -> RegistryResult<FileEntry> {
        let entry = self.registry.upload_file(upload).await?;
        self.refresh_files().await?;
        Ok(entry)
    }

    pub async fn delete_file(&mut self, file_id: FileId) -> RegistryResult<()> {
        self.registry.delete_file(file_id.clone()).await?;
        self.autosave.discard(&file_id);
        self.dispatch(Action::FileDeleted(file_id));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
