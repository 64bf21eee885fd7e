//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod services;
pub mod state;
pub mod store;
pub mod workspace;

pub use action::Action;
pub use effect::Effect;
pub use state::AppState;
pub use store::{DispatchResult, Store};
pub use workspace::{
    Layout, LinkedGroup, PaneId, PaneState, TabId, TabState, WorkspaceAction, WorkspaceState,
};
