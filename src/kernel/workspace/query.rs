//! Read-only projections, recomputed from the state on every call.

use crate::kernel::services::ports::FileId;

use super::state::{LinkedGroup, PaneId, TabId, TabState, WorkspaceState};

impl WorkspaceState {
    /// First tab (left pane first) displaying `file_id`.
    pub fn find_tab_id(&self, file_id: &FileId) -> Option<TabId> {
        self.panes
            .iter()
            .flat_map(|(_, pane)| pane.tabs.iter())
            .find(|t| &t.file.id == file_id)
            .map(|t| t.id)
    }

    pub fn linked_group(&self, tab_id: TabId) -> Option<&LinkedGroup> {
        self.linked_groups.iter().find(|g| g.contains(tab_id))
    }

    /// The other members of `tab_id`'s group.
    pub fn linked_tabs(&self, tab_id: TabId) -> Vec<TabId> {
        self.linked_group(tab_id)
            .map(|g| g.members.iter().copied().filter(|id| *id != tab_id).collect())
            .unwrap_or_default()
    }

    pub fn locate_tab(&self, tab_id: TabId) -> Option<(PaneId, usize)> {
        self.panes
            .iter()
            .find_map(|(pane_id, pane)| pane.position(tab_id).map(|index| (pane_id, index)))
    }

    pub fn tab(&self, tab_id: TabId) -> Option<&TabState> {
        let (pane, index) = self.locate_tab(tab_id)?;
        self.pane(pane).tabs.get(index)
    }

    pub fn tabs_for_file<'a>(
        &'a self,
        file_id: &'a FileId,
    ) -> impl Iterator<Item = (PaneId, &'a TabState)> + 'a {
        self.panes
            .iter()
            .flat_map(|(pane_id, pane)| pane.tabs.iter().map(move |t| (pane_id, t)))
            .filter(move |(_, t)| &t.file.id == file_id)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/workspace/query.rs"]
mod tests;
