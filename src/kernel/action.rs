use crate::kernel::services::ports::{FileEntry, FileId};
use crate::kernel::workspace::WorkspaceAction;

#[derive(Debug, Clone)]
pub enum Action {
    Workspace(WorkspaceAction),
    FilesLoaded(Vec<FileEntry>),
    FileDeleted(FileId),
}

impl From<WorkspaceAction> for Action {
    fn from(action: WorkspaceAction) -> Self {
        Action::Workspace(action)
    }
}
