pub mod config;
pub mod models;
pub mod stats;
pub mod storage;
pub mod store;
pub mod timeutil;

// Re-export commonly used types for convenience.
pub use config::AppConfig;
pub use models::{Exam, PreparationLevel, Topic, UserProfile};
pub use storage::ProfileStorage;
pub use store::{ProfileManager, StoreError};
