//! Workspace domain: two panes of tabs, split layout and linked page groups.

mod action;
mod link;
mod query;
mod reducer;
mod state;

pub use action::WorkspaceAction;
pub use state::{
    GroupId, InvariantViolation, Layout, LinkedGroup, PaneId, PaneState, Panes, TabId, TabState,
    WorkspaceState,
};
