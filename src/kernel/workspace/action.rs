use crate::kernel::services::ports::FileEntry;
use serde::{Deserialize, Serialize};

use super::{PaneId, TabId};

/// Every transition the workspace accepts. The `file_id*` fields of the link
/// actions carry tab ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum WorkspaceAction {
    OpenFile {
        file: FileEntry,
        #[serde(default)]
        pane: Option<PaneId>,
        #[serde(default)]
        new_tab_id: Option<TabId>,
    },
    CloseTab {
        tab_id: TabId,
        pane: PaneId,
    },
    SetActiveTab {
        tab_id: TabId,
        pane: PaneId,
    },
    SetActivePane {
        pane: PaneId,
    },
    SplitScreen,
    CloseSplit,
    MoveTab {
        tab_id: TabId,
        source_pane: PaneId,
        target_pane: PaneId,
        #[serde(default)]
        index: Option<usize>,
    },
    ReorderTabs {
        pane: PaneId,
        start_index: usize,
        end_index: usize,
    },
    SetPdfPage {
        tab_id: TabId,
        page: u32,
    },
    LinkFiles {
        file_id1: TabId,
        file_id2: TabId,
    },
    UnlinkFile {
        file_id: TabId,
    },
    SyncLinkedPage {
        file_id: TabId,
        page: u32,
    },
}
