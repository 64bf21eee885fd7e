//! studydesk - workspace core for side-by-side study sessions
//!
//! Module layout:
//! - kernel: headless state/action/effect core (workspace reducer, store, service ports/adapters)
//! - app: workbench glue (drag and drop, sidebar link toggle, autosave routing)

pub mod app;
pub mod kernel;
