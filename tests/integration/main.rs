use examtrack::{AppConfig, ProfileManager, ProfileStorage};
use tempfile::TempDir;

/// Per-test workspace with its own storage root.
pub struct ExamTrackHarness {
    workspace: TempDir,
}

impl ExamTrackHarness {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let workspace = TempDir::new().expect("failed to create temp workspace");
        Self { workspace }
    }

    pub fn storage(&self) -> ProfileStorage {
        ProfileStorage::with_root(self.workspace.path())
    }

    /// Fresh manager over the harness workspace; call again to simulate a
    /// process restart reloading persisted state.
    pub fn manager(&self) -> ProfileManager {
        ProfileManager::with_storage(self.storage(), AppConfig::default())
    }
}

mod profile_persistence;
