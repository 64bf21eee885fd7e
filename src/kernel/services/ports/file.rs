//! File registry contract: the documents a workspace can open and the remote
//! content operations keyed by `FileId`.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::pin::Pin;

pub type Result<T> = std::result::Result<T, RegistryError>;

pub type RegistryFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(CompactString);

impl FileId {
    pub fn new(raw: impl Into<CompactString>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A document as listed by the registry. Tabs hold a copy; the workspace never
/// mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub id: FileId,
    pub file_name: String,
    pub file_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<FileId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derived_files: Vec<FileEntry>,
}

impl FileEntry {
    pub fn new(id: impl Into<CompactString>, file_name: &str, file_type: &str) -> Self {
        Self {
            id: FileId::new(id),
            file_name: file_name.to_string(),
            file_type: file_type.to_string(),
            parent_id: None,
            derived_files: Vec::new(),
        }
    }

    pub fn derived_from(mut self, parent: &FileId) -> Self {
        self.parent_id = Some(parent.clone());
        self
    }

    pub fn is_pdf(&self) -> bool {
        let ty = self.file_type.to_ascii_lowercase();
        ty == "pdf" || ty == "application/pdf" || self.file_name.to_ascii_lowercase().ends_with(".pdf")
    }

    pub fn is_markdown(&self) -> bool {
        let ty = self.file_type.to_ascii_lowercase();
        ty == "md"
            || ty == "markdown"
            || ty == "text/markdown"
            || self.file_name.to_ascii_lowercase().ends_with(".md")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub file_type: String,
    pub parent_id: Option<FileId>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("file not found: {0}")]
    NotFound(FileId),
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("registry unavailable: {0}")]
    Unavailable(String),
}

/// Remote document store. Every call is an opaque async request; the workspace
/// core never inspects payloads.
pub trait FileRegistry: Send + Sync {
    fn list_files(&self) -> RegistryFuture<'_, Vec<FileEntry>>;

    fn view_file(&self, id: FileId) -> RegistryFuture<'_, Vec<u8>>;

    fn upload_file(&self, upload: FileUpload) -> RegistryFuture<'_, FileEntry>;

    fn update_file_content(&self, id: FileId, text: String) -> RegistryFuture<'_, ()>;

    fn delete_file(&self, id: FileId) -> RegistryFuture<'_, ()>;
}
