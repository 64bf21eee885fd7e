use crate::kernel::services::ports::FileId;
use crate::kernel::workspace::TabId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A tab was opened and needs its document content.
    LoadContent { tab_id: TabId, file_id: FileId },
    /// The last tab showing `file_id` closed; any debounced save must run now.
    FlushPendingSave { file_id: FileId },
}
