use crate::kernel::services::ports::{FileEntry, FileId};
use crate::kernel::workspace::WorkspaceState;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub workspace: WorkspaceState,
    /// Last listing received from the file registry.
    pub files: Vec<FileEntry>,
}

impl AppState {
    pub fn new(files: Vec<FileEntry>) -> Self {
        Self {
            workspace: WorkspaceState::new(),
            files,
        }
    }

    pub fn file(&self, id: &FileId) -> Option<&FileEntry> {
        self.files.iter().find(|f| &f.id == id)
    }

    pub fn derived_files<'a>(&'a self, parent: &'a FileId) -> impl Iterator<Item = &'a FileEntry> {
        self.files
            .iter()
            .filter(move |f| f.parent_id.as_ref() == Some(parent))
    }
}
