//! Sidebar "link" toggle for a note derived from a source document.

use crate::kernel::services::ports::{FileEntry, FileId, WorkspaceConfig};
use crate::kernel::{PaneId, TabId, WorkspaceAction, WorkspaceState};

/// Actions that link `note_id` with its source document, or unlink them when
/// they are already linked. Tabs opened here get their ids up front so the
/// final `LinkFiles` can name them before the reducer has run.
pub fn toggle_link(
    state: &WorkspaceState,
    catalog: &[FileEntry],
    note_id: &FileId,
    config: &WorkspaceConfig,
) -> Vec<WorkspaceAction> {
    let Some(note) = catalog.iter().find(|f| &f.id == note_id) else {
        return Vec::new();
    };
    let Some(source) = note
        .parent_id
        .as_ref()
        .and_then(|parent| catalog.iter().find(|f| &f.id == parent))
    else {
        tracing::debug!(note = %note_id, "toggle_link: note has no known source");
        return Vec::new();
    };

    // Any open copy of the note may be the linked one.
    let linked_note_tab = state.tabs_for_file(&note.id).find_map(|(_, tab)| {
        state
            .linked_tabs(tab.id)
            .into_iter()
            .any(|other| state.tab(other).is_some_and(|t| t.file.id == source.id))
            .then_some(tab.id)
    });
    if let Some(note_tab) = linked_note_tab {
        return vec![WorkspaceAction::UnlinkFile { file_id: note_tab }];
    }

    let note_tab = state.find_tab_id(&note.id);
    let source_tab = state.find_tab_id(&source.id);

    let mut actions = Vec::new();
    let source_tab = source_tab.unwrap_or_else(|| {
        let id = TabId::generate();
        actions.push(WorkspaceAction::OpenFile {
            file: source.clone(),
            pane: Some(PaneId::Left),
            new_tab_id: Some(id),
        });
        id
    });

    let note_tab = note_tab.unwrap_or_else(|| {
        let pane = if config.split_on_link {
            if !state.is_split() {
                actions.push(WorkspaceAction::SplitScreen);
            }
            PaneId::Right
        } else {
            PaneId::Left
        };
        let id = TabId::generate();
        actions.push(WorkspaceAction::OpenFile {
            file: note.clone(),
            pane: Some(pane),
            new_tab_id: Some(id),
        });
        id
    });

    actions.push(WorkspaceAction::LinkFiles {
        file_id1: source_tab,
        file_id2: note_tab,
    });
    actions
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench/link_flow.rs"]
mod tests;
