//! Service adapters: runtime specific implementations (IO/async).

pub mod autosave;
pub mod memory;
pub mod settings;

pub use autosave::{AutosaveService, SaveStatus};
pub use memory::MemoryRegistry;
pub use settings::{
    app_data_dir, ensure_log_dir, load_settings, load_settings_from, log_dir, settings_path,
    SettingsError,
};
