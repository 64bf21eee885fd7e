use crate::kernel::services::ports::FileEntry;

use super::action::WorkspaceAction;
use super::state::{Layout, PaneId, TabId, TabState, WorkspaceState};

impl WorkspaceState {
    /// Copy-on-write transition: `self` is left untouched.
    pub fn reduce(&self, action: WorkspaceAction) -> WorkspaceState {
        let mut next = self.clone();
        next.apply(action);
        next
    }

    /// Applies `action` in place and reports whether anything changed. Stale or
    /// unknown ids degrade to no-ops.
    pub fn apply(&mut self, action: WorkspaceAction) -> bool {
        match action {
            WorkspaceAction::OpenFile {
                file,
                pane,
                new_tab_id,
            } => self.open_file(file, pane, new_tab_id),
            WorkspaceAction::CloseTab { tab_id, pane } => self.close_tab(tab_id, pane),
            WorkspaceAction::SetActiveTab { tab_id, pane } => self.set_active_tab(tab_id, pane),
            WorkspaceAction::SetActivePane { pane } => self.set_active_pane(pane),
            WorkspaceAction::SplitScreen => self.split_screen(),
            WorkspaceAction::CloseSplit => self.close_split(),
            WorkspaceAction::MoveTab {
                tab_id,
                source_pane,
                target_pane,
                index,
            } => self.move_tab(tab_id, source_pane, target_pane, index),
            WorkspaceAction::ReorderTabs {
                pane,
                start_index,
                end_index,
            } => self.reorder_tabs(pane, start_index, end_index),
            WorkspaceAction::SetPdfPage { tab_id, page } => self.set_pdf_page(tab_id, page),
            WorkspaceAction::LinkFiles { file_id1, file_id2 } => self.link_tabs(file_id1, file_id2),
            WorkspaceAction::UnlinkFile { file_id } => self.unlink_tab(file_id),
            WorkspaceAction::SyncLinkedPage { file_id, page } => {
                self.sync_linked_page(file_id, page)
            }
        }
    }

    fn open_file(&mut self, file: FileEntry, pane: Option<PaneId>, new_tab_id: Option<TabId>) -> bool {
        let pane = pane.unwrap_or(self.active_pane);
        let id = new_tab_id.unwrap_or_else(TabId::generate);
        if self.locate_tab(id).is_some() {
            tracing::debug!(tab = %id, "open_file: tab id already in use");
            return false;
        }

        let pane_state = self.panes.get_mut(pane);
        pane_state.tabs.push(TabState::new(id, file));
        pane_state.active = Some(id);
        self.active_pane = pane;
        true
    }

    fn close_tab(&mut self, tab_id: TabId, pane: PaneId) -> bool {
        let pane_state = self.panes.get_mut(pane);
        let Some(index) = pane_state.position(tab_id) else {
            tracing::debug!(tab = %tab_id, ?pane, "close_tab: tab not in pane");
            return false;
        };

        pane_state.tabs.remove(index);
        if pane_state.active == Some(tab_id) {
            pane_state.active = pane_state.last_tab_id();
        }
        self.detach_from_group(tab_id);
        true
    }

    fn set_active_tab(&mut self, tab_id: TabId, pane: PaneId) -> bool {
        let pane_state = self.panes.get_mut(pane);
        if !pane_state.contains(tab_id) {
            tracing::debug!(tab = %tab_id, ?pane, "set_active_tab: tab not in pane");
            return false;
        }

        let changed = pane_state.active != Some(tab_id) || self.active_pane != pane;
        pane_state.active = Some(tab_id);
        self.active_pane = pane;
        changed
    }

    fn set_active_pane(&mut self, pane: PaneId) -> bool {
        let changed = self.active_pane != pane;
        self.active_pane = pane;
        changed
    }

    fn split_screen(&mut self) -> bool {
        if self.layout == Layout::Split {
            return false;
        }
        self.layout = Layout::Split;
        self.active_pane = PaneId::Right;
        true
    }

    fn close_split(&mut self) -> bool {
        let changed = self.layout != Layout::Single
            || !self.panes.right.is_empty()
            || self.active_pane != PaneId::Left;

        let right = std::mem::take(&mut self.panes.right);
        self.panes.left.tabs.extend(right.tabs);
        self.layout = Layout::Single;
        self.active_pane = PaneId::Left;
        changed
    }

    fn move_tab(
        &mut self,
        tab_id: TabId,
        source_pane: PaneId,
        target_pane: PaneId,
        index: Option<usize>,
    ) -> bool {
        let source = self.panes.get_mut(source_pane);
        let Some(from) = source.position(tab_id) else {
            tracing::debug!(tab = %tab_id, ?source_pane, "move_tab: tab not in source pane");
            return false;
        };

        let tab = source.tabs.remove(from);
        if source.active == Some(tab_id) {
            source.active = source.last_tab_id();
        }

        let target = self.panes.get_mut(target_pane);
        let to = index.unwrap_or(target.tabs.len()).min(target.tabs.len());
        target.tabs.insert(to, tab);
        target.active = Some(tab_id);
        self.active_pane = target_pane;
        true
    }

    fn reorder_tabs(&mut self, pane: PaneId, start_index: usize, end_index: usize) -> bool {
        let tabs = &mut self.panes.get_mut(pane).tabs;
        if start_index >= tabs.len() {
            return false;
        }

        let tab = tabs.remove(start_index);
        let end_index = end_index.min(tabs.len());
        tabs.insert(end_index, tab);
        start_index != end_index
    }

    fn set_pdf_page(&mut self, tab_id: TabId, page: u32) -> bool {
        let page = page.max(1);
        let Some(tab) = self.panes.tabs_mut().find(|t| t.id == tab_id) else {
            return false;
        };
        let changed = tab.pdf_page != Some(page);
        tab.pdf_page = Some(page);
        changed
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/workspace/reducer.rs"]
mod tests;
