use crate::kernel::services::ports::FileEntry;
use crate::kernel::{PaneId, TabId, WorkspaceAction, WorkspaceState};

/// What is being dragged: a sidebar file that is not open yet, or an open tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragPayload {
    File { file: FileEntry },
    Tab { tab_id: TabId, from_pane: PaneId },
}

/// Where it was released. `index` is the tab-bar slot, `None` for the pane body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropTarget {
    pub pane: PaneId,
    pub index: Option<usize>,
}

impl DropTarget {
    pub fn pane(pane: PaneId) -> Self {
        Self { pane, index: None }
    }

    pub fn tab_slot(pane: PaneId, index: usize) -> Self {
        Self {
            pane,
            index: Some(index),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropIntent {
    OpenFile {
        file: FileEntry,
        pane: PaneId,
    },
    MoveTab {
        tab_id: TabId,
        from_pane: PaneId,
        to_pane: PaneId,
        index: Option<usize>,
    },
    ReorderTabs {
        tab_id: TabId,
        pane: PaneId,
        to_index: usize,
    },
}

pub fn drop_intent(payload: &DragPayload, target: DropTarget) -> Option<DropIntent> {
    match payload {
        DragPayload::File { file } => Some(DropIntent::OpenFile {
            file: file.clone(),
            pane: target.pane,
        }),
        DragPayload::Tab { tab_id, from_pane } if *from_pane != target.pane => {
            Some(DropIntent::MoveTab {
                tab_id: *tab_id,
                from_pane: *from_pane,
                to_pane: target.pane,
                index: target.index,
            })
        }
        // Same pane: only a drop on a tab-bar slot means anything.
        DragPayload::Tab { tab_id, from_pane } => target.index.map(|to_index| {
            DropIntent::ReorderTabs {
                tab_id: *tab_id,
                pane: *from_pane,
                to_index,
            }
        }),
    }
}

impl DropIntent {
    /// Resolves the intent against the current state. `None` when the dragged
    /// tab no longer exists where the drag started.
    pub fn into_action(self, state: &WorkspaceState) -> Option<WorkspaceAction> {
        match self {
            DropIntent::OpenFile { file, pane } => Some(WorkspaceAction::OpenFile {
                file,
                pane: Some(pane),
                new_tab_id: None,
            }),
            DropIntent::MoveTab {
                tab_id,
                from_pane,
                to_pane,
                index,
            } => state
                .pane(from_pane)
                .contains(tab_id)
                .then_some(WorkspaceAction::MoveTab {
                    tab_id,
                    source_pane: from_pane,
                    target_pane: to_pane,
                    index,
                }),
            DropIntent::ReorderTabs {
                tab_id,
                pane,
                to_index,
            } => {
                let start_index = state.pane(pane).position(tab_id)?;
                if start_index == to_index {
                    return None;
                }
                Some(WorkspaceAction::ReorderTabs {
                    pane,
                    start_index,
                    end_index: to_index,
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench/dnd_rules.rs"]
mod tests;
