//! Debounced write-back of edited note content.
//!
//! Each edit cancels the pending timer for its file and starts a new one, so a
//! burst of keystrokes produces one save after input pauses. A save that has
//! already started is never cancelled.

use crate::kernel::services::ports::{FileId, FileRegistry, WorkspaceConfig};
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Error(String),
}

struct PendingSave {
    generation: u64,
    text: String,
    timer: JoinHandle<()>,
}

#[derive(Default)]
struct Pending {
    next_generation: u64,
    by_file: FxHashMap<FileId, PendingSave>,
}

pub struct AutosaveService {
    registry: Arc<dyn FileRegistry>,
    debounce: Duration,
    handle: Handle,
    pending: Arc<Mutex<Pending>>,
    status_tx: Arc<watch::Sender<SaveStatus>>,
}

impl AutosaveService {
    pub fn new(registry: Arc<dyn FileRegistry>, config: &WorkspaceConfig, handle: Handle) -> Self {
        let (status_tx, _) = watch::channel(SaveStatus::Idle);
        Self {
            registry,
            debounce: config.autosave_debounce(),
            handle,
            pending: Arc::new(Mutex::new(Pending::default())),
            status_tx: Arc::new(status_tx),
        }
    }

    pub fn status(&self) -> watch::Receiver<SaveStatus> {
        self.status_tx.subscribe()
    }

    pub fn has_pending(&self, file_id: &FileId) -> bool {
        self.pending
            .lock()
            .map(|p| p.by_file.contains_key(file_id))
            .unwrap_or(false)
    }

    /// Records a new edit and (re)arms the debounce timer for `file_id`.
    pub fn edit(&self, file_id: FileId, text: String) {
        let Ok(mut pending) = self.pending.lock() else {
            tracing::error!(file = %file_id, "autosave state poisoned; edit dropped");
            return;
        };

        pending.next_generation += 1;
        let generation = pending.next_generation;
        if let Some(previous) = pending.by_file.remove(&file_id) {
            previous.timer.abort();
        }

        let timer = self.spawn_debounced(file_id.clone(), generation);
        pending.by_file.insert(
            file_id,
            PendingSave {
                generation,
                text,
                timer,
            },
        );
    }

    /// Saves the pending edit for `file_id` right away. Returns `None` when
    /// nothing is waiting.
    pub fn flush(&self, file_id: &FileId) -> Option<JoinHandle<()>> {
        let entry = self.pending.lock().ok()?.by_file.remove(file_id)?;
        entry.timer.abort();
        Some(self.spawn_write(file_id.clone(), entry.text))
    }

    /// Saves every pending edit right away.
    pub fn flush_all(&self) -> Vec<JoinHandle<()>> {
        let drained: Vec<(FileId, PendingSave)> = match self.pending.lock() {
            Ok(mut pending) => pending.by_file.drain().collect(),
            Err(_) => {
                tracing::error!("autosave state poisoned; pending edits lost");
                return Vec::new();
            }
        };

        drained
            .into_iter()
            .map(|(file_id, entry)| {
                entry.timer.abort();
                self.spawn_write(file_id, entry.text)
            })
            .collect()
    }

    /// Drops the pending edit for `file_id` without saving it.
    pub fn discard(&self, file_id: &FileId) -> bool {
        let Ok(mut pending) = self.pending.lock() else {
            return false;
        };
        match pending.by_file.remove(file_id) {
            Some(entry) => {
                entry.timer.abort();
                true
            }
            None => false,
        }
    }

    fn spawn_debounced(&self, file_id: FileId, generation: u64) -> JoinHandle<()> {
        let registry = Arc::clone(&self.registry);
        let pending = Arc::clone(&self.pending);
        let status_tx = Arc::clone(&self.status_tx);
        let debounce = self.debounce;

        self.handle.spawn(async move {
            tokio::time::sleep(debounce).await;

            let text = {
                let Ok(mut pending) = pending.lock() else {
                    return;
                };
                let current = pending
                    .by_file
                    .get(&file_id)
                    .is_some_and(|entry| entry.generation == generation);
                if !current {
                    return;
                }
                match pending.by_file.remove(&file_id) {
                    Some(entry) => entry.text,
                    None => return,
                }
            };

            write_back(registry, &status_tx, file_id, text).await;
        })
    }

    fn spawn_write(&self, file_id: FileId, text: String) -> JoinHandle<()> {
        let registry = Arc::clone(&self.registry);
        let status_tx = Arc::clone(&self.status_tx);
        self.handle
            .spawn(async move { write_back(registry, &status_tx, file_id, text).await })
    }
}

async fn write_back(
    registry: Arc<dyn FileRegistry>,
    status_tx: &watch::Sender<SaveStatus>,
    file_id: FileId,
    text: String,
) {
    status_tx.send_replace(SaveStatus::Saving);
    match registry.update_file_content(file_id.clone(), text).await {
        Ok(()) => {
            tracing::debug!(file = %file_id, "autosave complete");
            status_tx.send_replace(SaveStatus::Saved);
        }
        Err(e) => {
            tracing::warn!(file = %file_id, error = %e, "autosave failed");
            status_tx.send_replace(SaveStatus::Error(e.to_string()));
        }
    }
}

impl Drop for AutosaveService {
    /// Pending edits are written out rather than dropped.
    fn drop(&mut self) {
        let _detached = self.flush_all();
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/autosave.rs"]
mod tests;
