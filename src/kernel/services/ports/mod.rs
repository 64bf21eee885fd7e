//! Service ports: traits + data contracts.

pub mod config;
pub mod file;

pub use config::{Settings, WorkspaceConfig};
pub use file::{
    FileEntry, FileId, FileRegistry, FileUpload, RegistryError, RegistryFuture,
    Result as RegistryResult,
};
