use crate::kernel::services::ports::FileEntry;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(raw: Uuid) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(Uuid);

impl GroupId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn raw(self) -> Uuid {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaneId {
    #[default]
    Left,
    Right,
}

impl PaneId {
    pub const ALL: [PaneId; 2] = [PaneId::Left, PaneId::Right];

    pub fn other(self) -> Self {
        match self {
            PaneId::Left => PaneId::Right,
            PaneId::Right => PaneId::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Single,
    Split,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabState {
    pub id: TabId,
    pub file: FileEntry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_page: Option<u32>,
}

impl TabState {
    pub fn new(id: TabId, file: FileEntry) -> Self {
        Self {
            id,
            file,
            pdf_page: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.pdf_page.unwrap_or(1)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneState {
    pub tabs: Vec<TabState>,
    pub active: Option<TabId>,
}

impl PaneState {
    pub fn position(&self, tab_id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    pub fn contains(&self, tab_id: TabId) -> bool {
        self.position(tab_id).is_some()
    }

    pub fn active_tab(&self) -> Option<&TabState> {
        let active = self.active?;
        self.tabs.iter().find(|t| t.id == active)
    }

    pub fn last_tab_id(&self) -> Option<TabId> {
        self.tabs.last().map(|t| t.id)
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panes {
    pub left: PaneState,
    pub right: PaneState,
}

impl Panes {
    pub fn get(&self, pane: PaneId) -> &PaneState {
        match pane {
            PaneId::Left => &self.left,
            PaneId::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, pane: PaneId) -> &mut PaneState {
        match pane {
            PaneId::Left => &mut self.left,
            PaneId::Right => &mut self.right,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PaneId, &PaneState)> {
        [(PaneId::Left, &self.left), (PaneId::Right, &self.right)].into_iter()
    }

    pub fn tabs_mut(&mut self) -> impl Iterator<Item = &mut TabState> {
        self.left.tabs.iter_mut().chain(self.right.tabs.iter_mut())
    }
}

/// Tabs whose page position moves together. Membership is by tab id, never by
/// file id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedGroup {
    pub id: GroupId,
    pub members: BTreeSet<TabId>,
    pub current_page: u32,
}

impl LinkedGroup {
    pub fn pair(a: TabId, b: TabId) -> Self {
        Self {
            id: GroupId::generate(),
            members: BTreeSet::from([a, b]),
            current_page: 1,
        }
    }

    pub fn contains(&self, tab_id: TabId) -> bool {
        self.members.contains(&tab_id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceState {
    pub layout: Layout,
    pub panes: Panes,
    pub active_pane: PaneId,
    pub linked_groups: Vec<LinkedGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("active tab {tab} of {pane:?} pane is not in that pane")]
    DanglingActiveTab { pane: PaneId, tab: TabId },
    #[error("tab {0} is open more than once")]
    DuplicateTab(TabId),
    #[error("linked group {0:?} has fewer than two members")]
    UndersizedGroup(GroupId),
    #[error("tab {0} belongs to more than one linked group")]
    SharedMember(TabId),
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pane(&self, pane: PaneId) -> &PaneState {
        self.panes.get(pane)
    }

    pub fn active_tab_id(&self, pane: PaneId) -> Option<TabId> {
        self.panes.get(pane).active
    }

    pub fn is_split(&self) -> bool {
        self.layout == Layout::Split
    }

    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen = FxHashSet::default();
        for (pane_id, pane) in self.panes.iter() {
            for tab in &pane.tabs {
                if !seen.insert(tab.id) {
                    return Err(InvariantViolation::DuplicateTab(tab.id));
                }
            }
            if let Some(active) = pane.active {
                if !pane.contains(active) {
                    return Err(InvariantViolation::DanglingActiveTab {
                        pane: pane_id,
                        tab: active,
                    });
                }
            }
        }

        let mut grouped = FxHashSet::default();
        for group in &self.linked_groups {
            if group.members.len() < 2 {
                return Err(InvariantViolation::UndersizedGroup(group.id));
            }
            for member in &group.members {
                if !grouped.insert(*member) {
                    return Err(InvariantViolation::SharedMember(*member));
                }
            }
        }
        Ok(())
    }
}
