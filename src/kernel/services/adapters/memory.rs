//! In-process file registry. Backs the replay binary and the test suite.

use crate::kernel::services::ports::{
    FileEntry, FileId, FileRegistry, FileUpload, RegistryError, RegistryFuture,
};
use rustc_hash::FxHashMap;
use std::sync::Mutex;
use uuid::Uuid;

struct StoredFile {
    entry: FileEntry,
    bytes: Vec<u8>,
    writes: usize,
}

#[derive(Default)]
struct Inner {
    order: Vec<FileId>,
    files: FxHashMap<FileId, StoredFile>,
}

#[derive(Default)]
pub struct MemoryRegistry {
    inner: Mutex<Inner>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(files: impl IntoIterator<Item = (FileEntry, Vec<u8>)>) -> Self {
        let registry = Self::new();
        for (entry, bytes) in files {
            registry.insert(entry, bytes);
        }
        registry
    }

    pub fn insert(&self, mut entry: FileEntry, bytes: Vec<u8>) {
        entry.derived_files.clear();
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        if !inner.files.contains_key(&entry.id) {
            inner.order.push(entry.id.clone());
        }
        inner.files.insert(
            entry.id.clone(),
            StoredFile {
                entry,
                bytes,
                writes: 0,
            },
        );
    }

    /// Number of content writes received for `id`.
    pub fn write_count(&self, id: &FileId) -> usize {
        self.inner
            .lock()
            .ok()
            .and_then(|inner| inner.files.get(id).map(|f| f.writes))
            .unwrap_or(0)
    }

    pub fn content(&self, id: &FileId) -> Option<Vec<u8>> {
        let inner = self.inner.lock().ok()?;
        inner.files.get(id).map(|f| f.bytes.clone())
    }

    fn with_inner<T>(&self, f: impl FnOnce(&mut Inner) -> Result<T, RegistryError>) -> Result<T, RegistryError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| RegistryError::Unavailable("registry lock poisoned".to_string()))?;
        f(&mut inner)
    }
}

fn listing(inner: &Inner) -> Vec<FileEntry> {
    let entries: Vec<FileEntry> = inner
        .order
        .iter()
        .filter_map(|id| inner.files.get(id))
        .map(|f| f.entry.clone())
        .collect();

    entries
        .iter()
        .map(|entry| {
            let mut entry = entry.clone();
            entry.derived_files = entries
                .iter()
                .filter(|f| f.parent_id.as_ref() == Some(&entry.id))
                .cloned()
                .collect();
            entry
        })
        .collect()
}

impl FileRegistry for MemoryRegistry {
    fn list_files(&self) -> RegistryFuture<'_, Vec<FileEntry>> {
        let result = self.with_inner(|inner| Ok(listing(inner)));
        Box::pin(std::future::ready(result))
    }

    fn view_file(&self, id: FileId) -> RegistryFuture<'_, Vec<u8>> {
        let result = self.with_inner(|inner| {
            inner
                .files
                .get(&id)
                .map(|f| f.bytes.clone())
                .ok_or(RegistryError::NotFound(id))
        });
        Box::pin(std::future::ready(result))
    }

    fn upload_file(&self, upload: FileUpload) -> RegistryFuture<'_, FileEntry> {
        let result = self.with_inner(|inner| {
            if let Some(parent) = &upload.parent_id {
                if !inner.files.contains_key(parent) {
                    return Err(RegistryError::NotFound(parent.clone()));
                }
            }
            let entry = FileEntry {
                id: FileId::new(Uuid::new_v4().to_string()),
                file_name: upload.file_name,
                file_type: upload.file_type,
                parent_id: upload.parent_id,
                derived_files: Vec::new(),
            };
            inner.order.push(entry.id.clone());
            inner.files.insert(
                entry.id.clone(),
                StoredFile {
                    entry: entry.clone(),
                    bytes: upload.bytes,
                    writes: 0,
                },
            );
            Ok(entry)
        });
        Box::pin(std::future::ready(result))
    }

    fn update_file_content(&self, id: FileId, text: String) -> RegistryFuture<'_, ()> {
        let result = self.with_inner(|inner| {
            let file = inner
                .files
                .get_mut(&id)
                .ok_or(RegistryError::NotFound(id.clone()))?;
            file.bytes = text.into_bytes();
            file.writes += 1;
            Ok(())
        });
        Box::pin(std::future::ready(result))
    }

    fn delete_file(&self, id: FileId) -> RegistryFuture<'_, ()> {
        let result = self.with_inner(|inner| {
            if inner.files.remove(&id).is_none() {
                return Err(RegistryError::NotFound(id));
            }
            inner.order.retain(|f| f != &id);
            Ok(())
        });
        Box::pin(std::future::ready(result))
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/memory.rs"]
mod tests;
