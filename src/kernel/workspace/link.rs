//! Linked groups: tabs that scroll together.
//!
//! A group never survives with fewer than two members and a tab id sits in at
//! most one group.

use super::state::{LinkedGroup, TabId, WorkspaceState};

impl WorkspaceState {
    fn group_index(&self, tab_id: TabId) -> Option<usize> {
        self.linked_groups.iter().position(|g| g.contains(tab_id))
    }

    pub(super) fn link_tabs(&mut self, a: TabId, b: TabId) -> bool {
        if a == b {
            return false;
        }

        match (self.group_index(a), self.group_index(b)) {
            (None, None) => {
                self.linked_groups.push(LinkedGroup::pair(a, b));
                true
            }
            (Some(ga), None) => self.linked_groups[ga].members.insert(b),
            (None, Some(gb)) => self.linked_groups[gb].members.insert(a),
            (Some(ga), Some(gb)) if ga == gb => false,
            (Some(ga), Some(gb)) => {
                let absorbed = self.linked_groups.remove(gb);
                let ga = if gb < ga { ga - 1 } else { ga };
                tracing::debug!(
                    keep = ?self.linked_groups[ga].id,
                    absorbed = ?absorbed.id,
                    "merging linked groups"
                );
                self.linked_groups[ga].members.extend(absorbed.members);
                true
            }
        }
    }

    pub(super) fn unlink_tab(&mut self, tab_id: TabId) -> bool {
        self.detach_from_group(tab_id)
    }

    /// Removes `tab_id` from its group, disbanding the group once it would be
    /// left with a single member.
    pub(super) fn detach_from_group(&mut self, tab_id: TabId) -> bool {
        let Some(index) = self.group_index(tab_id) else {
            return false;
        };

        let group = &mut self.linked_groups[index];
        group.members.remove(&tab_id);
        if group.members.len() <= 1 {
            let group = self.linked_groups.remove(index);
            tracing::debug!(group = ?group.id, "linked group disbanded");
        }
        true
    }

    pub(super) fn sync_linked_page(&mut self, tab_id: TabId, page: u32) -> bool {
        let Some(index) = self.group_index(tab_id) else {
            return self.apply(super::WorkspaceAction::SetPdfPage { tab_id, page });
        };

        let page = page.max(1);
        let group = &mut self.linked_groups[index];
        let mut changed = group.current_page != page;
        group.current_page = page;

        let members = &group.members;
        for tab in self.panes.tabs_mut().filter(|t| members.contains(&t.id)) {
            changed |= tab.pdf_page != Some(page);
            tab.pdf_page = Some(page);
        }
        changed
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/workspace/link.rs"]
mod tests;
